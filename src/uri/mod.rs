//! Route patterns built from typed parts, and paths built back from them.
//!
//! ```
//! use prefix_router::uri::UriPattern;
//!
//! let pattern = UriPattern::new().literal("/post/").int("id");
//! assert_eq!(pattern.route_fragment(), "/post/{id:\\d+}");
//!
//! let path = pattern.builder().set_int("id", 123)?.path()?;
//! assert_eq!(path, "/post/123");
//! # Ok::<(), prefix_router::uri::UriError>(())
//! ```

mod builder;
mod error;
mod parameter;
mod request;

pub use self::builder::UriBuilder;
pub use self::error::UriError;
pub use self::parameter::{ParameterKind, UriParameter};
pub use self::request::RequestParameters;

use crate::http_router::Params;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UriPart {
    Literal(String),
    Parameter(UriParameter),
}

impl UriPart {
    pub fn route_fragment(&self) -> String {
        match self {
            Self::Literal(text) => text.clone(),
            Self::Parameter(param) => param.route_fragment(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UriPattern {
    parts: Vec<UriPart>,
}

impl UriPattern {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn part(mut self, part: UriPart) -> Self {
        self.parts.push(part);
        self
    }

    pub fn literal(self, text: impl Into<String>) -> Self {
        self.part(UriPart::Literal(text.into()))
    }

    pub fn slash(self) -> Self {
        self.literal("/")
    }

    pub fn string(self, name: impl Into<String>) -> Self {
        self.parameter(
            name,
            ParameterKind::String {
                allow_slashes: false,
            },
        )
    }

    pub fn string_with_slashes(self, name: impl Into<String>) -> Self {
        self.parameter(
            name,
            ParameterKind::String {
                allow_slashes: true,
            },
        )
    }

    pub fn int(self, name: impl Into<String>) -> Self {
        self.parameter(name, ParameterKind::Int)
    }

    pub fn one_of<I, S>(self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = values.into_iter().map(Into::into).collect();
        self.parameter(name, ParameterKind::Enum { values })
    }

    fn parameter(self, name: impl Into<String>, kind: ParameterKind) -> Self {
        self.part(UriPart::Parameter(UriParameter::new(name, kind)))
    }

    pub fn parts(&self) -> &[UriPart] {
        &self.parts
    }

    pub fn parameters(&self) -> impl Iterator<Item = &UriParameter> + '_ {
        self.parts.iter().filter_map(|p| match p {
            UriPart::Parameter(param) => Some(param),
            UriPart::Literal(_) => None,
        })
    }

    /// The pattern in route syntax, ready for a [`RouteMap`](crate::RouteMap).
    pub fn route_fragment(&self) -> String {
        self.parts.iter().map(UriPart::route_fragment).collect()
    }

    pub fn builder(&self) -> UriBuilder {
        UriBuilder::new(self.parts.clone())
    }
}

/// Types exposing the URI pattern they are routed by.
pub trait HasUriPattern {
    fn uri_pattern() -> UriPattern;

    fn uri_builder() -> UriBuilder {
        Self::uri_pattern().builder()
    }

    fn request_parameters(params: Params) -> RequestParameters {
        RequestParameters::from_pattern(&Self::uri_pattern(), params)
    }
}
