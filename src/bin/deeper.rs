//! Command-line interface for deeper
//! This binary is used to inspect route templates, match URLs against them and render URLs.
//!
//! Usage:
//!   deeper parse `<template>` [--format `<format>`]               - Print canonical form or AST
//!   deeper match `<url>` (--template `<t>` | --routes `<file>`)    - Match a URL, print bindings
//!   deeper render `<template>` --values `<json>` [--scheme `<s>`]  - Render a URL from values
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).

use clap::{Arg, ArgGroup, Command};
use deeper::config::RoutesConfig;
use deeper::printing::values_from_json;
use deeper::{MatchResult, Route, RouteComponents};
use std::path::Path;
use tracing_subscriber::prelude::*;

fn main() {
    init_logging();

    let matches = Command::new("deeper")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting deep link route templates")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("parse")
                .about("Parse a template and print it")
                .arg(
                    Arg::new("template")
                        .help("Route template")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format")
                        .value_parser(["canonical", "json", "yaml"])
                        .default_value("canonical"),
                ),
        )
        .subcommand(
            Command::new("match")
                .about("Match a URL against a template or a route file")
                .arg(
                    Arg::new("url")
                        .help("URL to match")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("template")
                        .long("template")
                        .short('t')
                        .help("Route template"),
                )
                .arg(
                    Arg::new("routes")
                        .long("routes")
                        .short('r')
                        .help("Route file (YAML or JSON)"),
                )
                .group(
                    ArgGroup::new("source")
                        .args(["template", "routes"])
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("render")
                .about("Render a URL from a template and a JSON array of values")
                .arg(
                    Arg::new("template")
                        .help("Route template")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("values")
                        .long("values")
                        .short('v')
                        .help("JSON array of values, e.g. '[123, \"abc\", null, {\"left\": []}]'")
                        .required(true),
                )
                .arg(
                    Arg::new("scheme")
                        .long("scheme")
                        .short('s')
                        .help("URL scheme")
                        .default_value("app"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("parse", parse_matches)) => {
            let template = parse_matches.get_one::<String>("template").unwrap();
            let format = parse_matches.get_one::<String>("format").unwrap();
            handle_parse_command(template, format);
        }
        Some(("match", match_matches)) => {
            let url = match_matches.get_one::<String>("url").unwrap();
            match (
                match_matches.get_one::<String>("template"),
                match_matches.get_one::<String>("routes"),
            ) {
                (Some(template), _) => handle_match_template_command(url, template),
                (None, Some(routes)) => handle_match_routes_command(url, routes),
                (None, None) => unreachable!(),
            }
        }
        Some(("render", render_matches)) => {
            let template = render_matches.get_one::<String>("template").unwrap();
            let values = render_matches.get_one::<String>("values").unwrap();
            let scheme = render_matches.get_one::<String>("scheme").unwrap();
            handle_render_command(template, values, scheme);
        }
        _ => unreachable!(),
    }
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}

fn parse_route(template: &str) -> Route {
    Route::parse(template).unwrap_or_else(|e| fail(e))
}

/// Handle the parse command
fn handle_parse_command(template: &str, format: &str) {
    let route = parse_route(template);
    let output = match format {
        "json" => serde_json::to_string_pretty(&route).unwrap_or_else(|e| fail(e)),
        "yaml" => serde_yaml::to_string(&route).unwrap_or_else(|e| fail(e)),
        _ => route.to_string(),
    };
    println!("{}", output.trim_end());
}

fn print_bindings(result: &MatchResult) {
    for (parameter, value) in result.sorted_params() {
        println!("  {} = {}", parameter, value);
    }
}

/// Handle the match command with a single template
fn handle_match_template_command(url: &str, template: &str) {
    let route = parse_route(template);
    let components = RouteComponents::parse(url).unwrap_or_else(|e| fail(e));
    let result = route.matches(&components);
    if !result.is_match() {
        eprintln!("no match");
        std::process::exit(1);
    }
    println!("route: {}", route);
    print_bindings(&result);
}

/// Handle the match command with a route file
fn handle_match_routes_command(url: &str, routes: &str) {
    let config = RoutesConfig::load(Path::new(routes)).unwrap_or_else(|e| fail(e));
    let router = config.build_router().unwrap_or_else(|e| fail(e));
    let found = router.resolve_url(url).unwrap_or_else(|e| fail(e));
    let Some(found) = found else {
        eprintln!("no match");
        std::process::exit(1);
    };
    println!("name: {}", found.target);
    println!("route: {}", found.route);
    let mut params: Vec<_> = found.params.iter().collect();
    params.sort();
    for (parameter, value) in params {
        println!("  {} = {}", parameter, value);
    }
}

/// Handle the render command
fn handle_render_command(template: &str, values: &str, scheme: &str) {
    let route = parse_route(template);
    let json: serde_json::Value = serde_json::from_str(values).unwrap_or_else(|e| fail(e));
    let values = values_from_json(&json).unwrap_or_else(|e| fail(e));
    let components = route.render(&values).unwrap_or_else(|e| fail(e));
    println!("{}", components.to_url(scheme));
}
