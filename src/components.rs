//! Decomposed URLs
//!
//! [`RouteComponents`] is what the matcher reads and the printer writes:
//! the host followed by the path segments, all percent-decoded, plus the
//! query pairs. Conversion from and to URL strings goes through the `url`
//! crate, with `urlencoding` for path segments.

use serde::Serialize;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum UrlError {
    #[error("invalid url `{input}`: {source}")]
    Invalid {
        input: String,
        #[source]
        source: url::ParseError,
    },
}

/// Host plus path components and query pairs of a URL
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RouteComponents {
    pub path: Vec<String>,
    pub query: Vec<(String, String)>,
}

fn decode(segment: &str) -> String {
    urlencoding::decode(segment)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| segment.to_string())
}

impl RouteComponents {
    pub fn new(path: Vec<String>, query: Vec<(String, String)>) -> Self {
        Self { path, query }
    }

    /// Parse and decompose a URL string
    pub fn parse(input: &str) -> Result<Self, UrlError> {
        let url = Url::parse(input).map_err(|source| UrlError::Invalid {
            input: input.to_string(),
            source,
        })?;
        Ok(Self::from(&url))
    }

    /// Assemble a URL string with the given scheme
    pub fn to_url(&self, scheme: &str) -> String {
        let path = self
            .path
            .iter()
            .map(|component| urlencoding::encode(component).into_owned())
            .collect::<Vec<_>>()
            .join("/");

        let mut url = format!("{}://{}", scheme, path);
        if !self.query.is_empty() {
            let query = url::form_urlencoded::Serializer::new(String::new())
                .extend_pairs(self.query.iter())
                .finish();
            url.push('?');
            url.push_str(&query);
        }
        url
    }

    /// Same path, and the same query pairs in any order
    pub fn is_equivalent(&self, other: &Self) -> bool {
        let mut ours = self.query.clone();
        let mut theirs = other.query.clone();
        ours.sort();
        theirs.sort();
        self.path == other.path && ours == theirs
    }
}

impl From<&Url> for RouteComponents {
    fn from(url: &Url) -> Self {
        let mut path = Vec::new();
        if let Some(host) = url.host_str().filter(|host| !host.is_empty()) {
            path.push(decode(host));
        }
        path.extend(
            url.path_segments()
                .into_iter()
                .flatten()
                .filter(|segment| !segment.is_empty())
                .map(decode),
        );

        let query = url
            .query_pairs()
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();

        Self { path, query }
    }
}
