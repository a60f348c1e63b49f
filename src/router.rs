//! Ordered route registry
//!
//! A [`Router`] holds routes in registration order, each with a target
//! value. Resolution tries the routes in order and the first match wins.
//! With [`Router::resolve_with`] a handler can decline a match, in which
//! case the following routes get their turn.
//!
//! Routers are built once and then only read; registration takes
//! `&mut self`, so a router cannot change while a lookup borrows it.

use crate::components::{RouteComponents, UrlError};
use crate::matching::Bindings;
use crate::parsing::ParseError;
use crate::pattern::Route;
use crate::printing::{RenderError, Value};
use std::fmt;
use url::Url;

/// A successful lookup
#[derive(Debug, PartialEq)]
pub struct RouteMatch<'a, T> {
    pub route: &'a Route,
    pub target: &'a T,
    pub params: Bindings,
}

impl<T> Clone for RouteMatch<'_, T> {
    fn clone(&self) -> Self {
        Self {
            route: self.route,
            target: self.target,
            params: self.params.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Router<T> {
    scheme: Option<String>,
    routes: Vec<(Route, T)>,
}

impl<T> Default for Router<T> {
    fn default() -> Self {
        Self {
            scheme: None,
            routes: Vec::new(),
        }
    }
}

impl<T> Router<T> {
    /// Router accepting any scheme
    pub fn new() -> Self {
        Self::default()
    }

    /// Router that only resolves URLs with the given scheme
    pub fn with_scheme(scheme: impl Into<String>) -> Self {
        Self {
            scheme: Some(scheme.into()),
            routes: Vec::new(),
        }
    }

    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    pub fn add(&mut self, route: Route, target: T) -> &mut Self {
        tracing::debug!(route = %route, "registered route");
        self.routes.push((route, target));
        self
    }

    /// Parse a template and register it
    pub fn add_template(&mut self, template: &str, target: T) -> Result<&mut Self, ParseError> {
        let route = Route::parse(template)?;
        Ok(self.add(route, target))
    }

    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter().map(|(route, _)| route)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// First route matching the components
    pub fn resolve(&self, components: &RouteComponents) -> Option<RouteMatch<'_, T>> {
        self.resolve_with(components, |found| Some(found.clone()))
    }

    /// Offer each match to `handler` in order until it accepts one
    pub fn resolve_with<'a, F, I>(
        &'a self,
        components: &RouteComponents,
        mut handler: F,
    ) -> Option<I>
    where
        F: FnMut(&RouteMatch<'a, T>) -> Option<I>,
    {
        for (route, target) in &self.routes {
            let Some(params) = route.matches(components).into_params() else {
                continue;
            };
            let found = RouteMatch {
                route,
                target,
                params,
            };
            if let Some(accepted) = handler(&found) {
                tracing::debug!(route = %route, "resolved route");
                return Some(accepted);
            }
            tracing::trace!(route = %route, "handler declined match");
        }
        None
    }

    /// Parse a URL string and resolve it
    ///
    /// URLs with a scheme other than the router's resolve to `None`.
    pub fn resolve_url(&self, input: &str) -> Result<Option<RouteMatch<'_, T>>, UrlError> {
        let url = Url::parse(input).map_err(|source| UrlError::Invalid {
            input: input.to_string(),
            source,
        })?;
        if let Some(scheme) = &self.scheme {
            if url.scheme() != scheme.as_str() {
                tracing::debug!(url = input, expected = %scheme, "scheme rejected");
                return Ok(None);
            }
        }
        Ok(self.resolve(&RouteComponents::from(&url)))
    }

    /// Render a URL string for `route` with this router's scheme
    ///
    /// Routers without a scheme render scheme-less `//host/path` URLs.
    pub fn url_for(&self, route: &Route, values: &[Value]) -> Result<String, RenderError> {
        let components = route.render(values)?;
        let url = components.to_url(self.scheme.as_deref().unwrap_or(""));
        Ok(match self.scheme {
            Some(_) => url,
            None => url.trim_start_matches(':').to_string(),
        })
    }
}

impl<T> fmt::Display for Router<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.scheme {
            Some(scheme) => writeln!(f, "Router ({}://):", scheme)?,
            None => writeln!(f, "Router:")?,
        }
        for (route, _) in &self.routes {
            writeln!(f, "  {}", route)?;
        }
        Ok(())
    }
}
