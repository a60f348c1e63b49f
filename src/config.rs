//! Route files
//!
//! A route file names each template and optionally fixes the URL scheme:
//!
//! ```yaml
//! scheme: app
//! routes:
//!   - name: recipe
//!     template: "recipe/:int(recipeId)"
//!   - name: menu
//!     template: "menu/:int(menuId)?(:locale)"
//! ```
//!
//! JSON files with the same shape are accepted too. Every template is parsed
//! when the router is built, and the first bad one aborts loading.

use crate::parsing::ParseError;
use crate::router::Router;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read route file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML route file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON route file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("route `{name}` has an invalid template: {source}")]
    Template {
        name: String,
        #[source]
        source: ParseError,
    },

    #[error("route `{0}` is defined more than once")]
    DuplicateName(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    pub name: String,
    pub template: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutesConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    #[serde(default)]
    pub routes: Vec<RouteEntry>,
}

impl RoutesConfig {
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Load a route file; `.json` files are read as JSON, anything else as YAML
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let is_json = path
            .extension()
            .is_some_and(|extension| extension.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&source)
        } else {
            Self::from_yaml_str(&source)
        }
    }

    /// Parse every template into a router whose targets are the route names
    pub fn build_router(&self) -> Result<Router<String>, ConfigError> {
        let mut router = match &self.scheme {
            Some(scheme) => Router::with_scheme(scheme.clone()),
            None => Router::new(),
        };
        let mut seen = HashSet::new();
        for entry in &self.routes {
            if !seen.insert(entry.name.as_str()) {
                return Err(ConfigError::DuplicateName(entry.name.clone()));
            }
            router
                .add_template(&entry.template, entry.name.clone())
                .map_err(|source| ConfigError::Template {
                    name: entry.name.clone(),
                    source,
                })?;
        }
        tracing::debug!(routes = router.len(), "built router from route file");
        Ok(router)
    }
}
