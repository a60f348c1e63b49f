//! Path matching against decomposed URLs
//!
//! Cases are grouped by the node kind they exercise: literals, parameters,
//! alternations (conditions), optional groups and wildcards.

use deeper::testing::{assert_match, assert_no_match, route};
use deeper::Parameter;
use rstest::rstest;

#[rstest]
#[case("recipe/details", "app://recipe/details", true)]
#[case("recipe/details", "app://recipe", false)]
#[case("recipe/details", "app://recipe/details/more", false)]
#[case("recipe/details", "app://recipes/details", false)]
#[case("recipe/details", "app://recipe//details/", true)]
#[case("caf\u{e9}", "app://caf%C3%A9", true)]
fn test_literals(#[case] template: &str, #[case] url: &str, #[case] expected: bool) {
    let route = route(template);
    if expected {
        assert_match(&route, url, &[]);
    } else {
        assert_no_match(&route, url);
    }
}

#[test]
fn test_untyped_parameter() {
    let route = route("recipe/:recipeId");
    assert_match(
        &route,
        "app://recipe/abc-123",
        &[(Parameter::untyped("recipeId"), "abc-123")],
    );
    assert_no_match(&route, "app://recipe");
}

#[test]
fn test_parameter_in_host_position() {
    let route = route(":section/:int(id)");
    assert_match(
        &route,
        "app://anything/1",
        &[
            (Parameter::untyped("section"), "anything"),
            (Parameter::int("id"), "1"),
        ],
    );
}

#[rstest]
#[case("recipe/:int(id)", "app://recipe/42", Some("42"))]
#[case("recipe/:int(id)", "app://recipe/-7", Some("-7"))]
#[case("recipe/:int(id)", "app://recipe/abc", None)]
#[case("recipe/:int(id)", "app://recipe/1.5", None)]
#[case("recipe/:double(id)", "app://recipe/1.5", Some("1.5"))]
#[case("recipe/:double(id)", "app://recipe/nope", None)]
#[case("recipe/:bool(id)", "app://recipe/TRUE", Some("TRUE"))]
#[case("recipe/:bool(id)", "app://recipe/0", Some("0"))]
#[case("recipe/:bool(id)", "app://recipe/yes", None)]
#[case("recipe/:string(id)", "app://recipe/anything", Some("anything"))]
fn test_typed_parameters(#[case] template: &str, #[case] url: &str, #[case] bound: Option<&str>) {
    let route = route(template);
    let parameter = route.parameters()[0].clone();
    match bound {
        Some(value) => {
            assert_match(&route, url, &[(parameter, value)]);
        }
        None => assert_no_match(&route, url),
    }
}

#[test]
fn test_anonymous_parameter_validates_without_binding() {
    let route = route("recipe/:int()");
    assert_match(&route, "app://recipe/5", &[]);
    assert_no_match(&route, "app://recipe/x");
}

#[test]
fn test_type_keyword_alone_is_a_name() {
    let route = route("recipe/:int");
    assert_match(&route, "app://recipe/x", &[(Parameter::untyped("int"), "x")]);
}

#[rstest]
#[case("app://recipe", true)]
#[case("app://recipes", true)]
#[case("app://recipes/archive", false)]
#[case("app://menu", false)]
fn test_simple_condition(#[case] url: &str, #[case] expected: bool) {
    let route = route("recipe|recipes");
    if expected {
        assert_match(&route, url, &[]);
    } else {
        assert_no_match(&route, url);
    }
}

#[test]
fn test_condition_followed_by_literal() {
    let route = route("(recipe|recipes)/archive");
    assert_match(&route, "app://recipe/archive", &[]);
    assert_match(&route, "app://recipes/archive", &[]);
    assert_no_match(&route, "app://recipes");
}

#[test]
fn test_longer_branch_is_tried_first() {
    let route = route("(recipe|recipes|recipes/archive)/:recipeId");
    let id = Parameter::untyped("recipeId");
    assert_match(&route, "app://recipe/1", &[(id.clone(), "1")]);
    assert_match(&route, "app://recipes/1", &[(id.clone(), "1")]);
    assert_match(&route, "app://recipes/archive/1", &[(id, "1")]);
    // the longer branch wins and is not revisited
    assert_no_match(&route, "app://recipes/archive");
}

#[test]
fn test_branches_with_parameters() {
    let route = route("(recipe/:recipeId|recipes/:recipeId/details)");
    let id = Parameter::untyped("recipeId");
    assert_match(&route, "app://recipe/1", &[(id.clone(), "1")]);
    assert_match(&route, "app://recipes/2/details", &[(id, "2")]);
    assert_no_match(&route, "app://recipes/2");
}

#[test]
fn test_typed_branches_fall_through() {
    let route = route("recipe/(:int(id)|:name)");
    assert_match(&route, "app://recipe/12", &[(Parameter::int("id"), "12")]);
    assert_match(
        &route,
        "app://recipe/soup",
        &[(Parameter::untyped("name"), "soup")],
    );
}

#[rstest]
#[case("app://recipe/details/archive", true)]
#[case("app://recipe/archive", true)]
#[case("app://recipe", false)]
#[case("app://recipe/other/archive", false)]
fn test_optional_literal(#[case] url: &str, #[case] expected: bool) {
    let route = route("recipe/(details)/archive");
    if expected {
        assert_match(&route, url, &[]);
    } else {
        assert_no_match(&route, url);
    }
}

#[test]
fn test_optional_group_with_parameter() {
    let route = route("recipe/(details/:recipeId)");
    assert_match(
        &route,
        "app://recipe/details/123",
        &[(Parameter::untyped("recipeId"), "123")],
    );
    assert_match(&route, "app://recipe", &[]);
    // the path may end inside the group
    assert_match(&route, "app://recipe/details", &[]);
    assert_no_match(&route, "app://recipe/summary");
    assert_no_match(&route, "app://recipe/details/123/more");
}

#[test]
fn test_optional_typed_parameter() {
    let route = route("recipe/(:int(id))");
    assert_match(&route, "app://recipe/1", &[(Parameter::int("id"), "1")]);
    assert_match(&route, "app://recipe", &[]);
    assert_no_match(&route, "app://recipe/x");
}

#[test]
fn test_optional_inside_condition() {
    let route = route("(recipe/(details)|menu)/:int(id)");
    let id = Parameter::int("id");
    assert_match(&route, "app://recipe/details/1", &[(id.clone(), "1")]);
    assert_match(&route, "app://recipe/1", &[(id.clone(), "1")]);
    assert_match(&route, "app://menu/1", &[(id, "1")]);
}
