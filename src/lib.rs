//! # deeper
//!
//! Deep link route templates: compile a template such as
//! `recipe/:int(recipeId)/(details)?(:locale)` into a [`Route`], match URLs
//! against it to extract typed parameters, and print URLs back from values.
//!
//! - [`pattern`]: the route AST and its canonical text form
//! - [`lexing`], [`parsing`]: template string to AST
//! - [`builder`]: programmatic construction of the same AST
//! - [`matching`]: AST against URL components
//! - [`printing`]: AST plus values to URL components
//! - [`components`]: URL strings to and from components
//! - [`router`], [`config`]: ordered route registries and route files
//!
//! ## Testing
//!
//! Assertion helpers for route tests live in the [testing module](testing).

pub mod builder;
pub mod components;
pub mod config;
pub mod lexing;
pub mod matching;
pub mod parsing;
pub mod pattern;
pub mod printing;
pub mod router;
pub mod testing;

pub use builder::BuildError;
pub use components::{RouteComponents, UrlError};
pub use matching::{match_route, Bindings, MatchResult};
pub use parsing::{parse_template, ParseError};
pub use pattern::{ParamType, Parameter, PathPattern, QueryPattern, Route};
pub use printing::{render, Branch, ParamValue, RenderError, Value};
pub use router::{RouteMatch, Router};
