//! Routers built in code and from route files

use deeper::builder::{int, lit, maybe, optional};
use deeper::config::{ConfigError, RoutesConfig};
use deeper::testing::components;
use deeper::{Parameter, Router, Value};
use std::fs;

#[derive(Debug, PartialEq)]
enum Screen {
    Recipe,
    Menu,
    Fallback,
}

fn router() -> Router<Screen> {
    let mut router = Router::with_scheme("app");
    router
        .add(
            (lit("recipe") / int("recipeId") / maybe("details"))
                .build()
                .unwrap(),
            Screen::Recipe,
        )
        .add_template("menu/:int(menuId)?(:locale)", Screen::Menu)
        .unwrap()
        .add_template("*", Screen::Fallback)
        .unwrap();
    router
}

#[test]
fn test_resolution_order() {
    let router = router();

    let found = router.resolve_url("app://recipe/3/details").unwrap().unwrap();
    assert_eq!(found.target, &Screen::Recipe);
    assert_eq!(found.params[&Parameter::int("recipeId")], "3");

    let found = router.resolve_url("app://menu/9?locale=de").unwrap().unwrap();
    assert_eq!(found.target, &Screen::Menu);
    assert_eq!(found.params[&Parameter::untyped("locale")], "de");

    let found = router.resolve_url("app://recipe/abc").unwrap().unwrap();
    assert_eq!(found.target, &Screen::Fallback);
    assert!(found.params.is_empty());
}

#[test]
fn test_foreign_scheme_and_bad_urls() {
    let router = router();
    assert!(router.resolve_url("web://recipe/3").unwrap().is_none());
    assert!(router.resolve_url("::").is_err());
}

#[test]
fn test_resolve_components_ignores_scheme() {
    let router = router();
    let found = router.resolve(&components("web://menu/1")).unwrap();
    assert_eq!(found.target, &Screen::Menu);
}

#[test]
fn test_url_for_round_trip() {
    let router = router();
    let route = router.routes().nth(1).unwrap().clone();
    let url = router
        .url_for(&route, &[Value::param(5i64), Value::some(vec![Value::param("it")])])
        .unwrap();
    assert_eq!(url, "app://menu/5?locale=it");
    let found = router.resolve_url(&url).unwrap().unwrap();
    assert_eq!(found.target, &Screen::Menu);
    assert_eq!(found.route, &route);
}

#[test]
fn test_router_without_scheme() {
    let mut router = Router::new();
    router
        .add(
            lit("search").query(optional(Parameter::untyped("q"))).build().unwrap(),
            "search",
        );
    assert!(router.resolve_url("anything://search").unwrap().is_some());
    let route = router.routes().next().unwrap().clone();
    assert_eq!(router.url_for(&route, &[Value::none()]).unwrap(), "//search");
}

#[test]
fn test_route_file_round_trip() {
    let directory = std::env::temp_dir().join(format!("deeper-routes-{}", std::process::id()));
    fs::create_dir_all(&directory).unwrap();

    let yaml = directory.join("routes.yaml");
    fs::write(
        &yaml,
        "scheme: app\nroutes:\n  - name: recipe\n    template: \"recipe/:int(recipeId)\"\n  - name: any\n    template: \"*\"\n",
    )
    .unwrap();
    let router = RoutesConfig::load(&yaml).unwrap().build_router().unwrap();
    let found = router.resolve_url("app://recipe/12").unwrap().unwrap();
    assert_eq!(found.target, "recipe");

    let json = directory.join("routes.json");
    fs::write(
        &json,
        r#"{"routes": [{"name": "menu", "template": "menu/:int(menuId)"}]}"#,
    )
    .unwrap();
    let router = RoutesConfig::load(&json).unwrap().build_router().unwrap();
    assert_eq!(router.scheme(), None);
    assert_eq!(router.len(), 1);

    fs::remove_dir_all(&directory).unwrap();
}

#[test]
fn test_route_file_errors() {
    let error = RoutesConfig::from_yaml_str("routes:\n  - name: bad\n    template: \"a/(b\"\n")
        .unwrap()
        .build_router()
        .unwrap_err();
    insta::assert_snapshot!(
        error,
        @"route `bad` has an invalid template: unbalanced parenthesis at offset 2"
    );

    assert!(matches!(
        RoutesConfig::from_json_str("{\"routes\": 3}"),
        Err(ConfigError::Json(_))
    ));
}

#[test]
fn test_shared_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<deeper::Route>();
    assert_send_sync::<Router<String>>();

    let router = std::sync::Arc::new(router());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let router = std::sync::Arc::clone(&router);
            std::thread::spawn(move || {
                let url = format!("app://recipe/{}", i);
                let bound = router.resolve_url(&url).unwrap().map(|found| found.params.len());
                bound
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), Some(1));
    }
}
