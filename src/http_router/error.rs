use crate::resolver::BoxError;

use http::{Method, StatusCode};

#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    #[error("no route matches the request")]
    NotFound,

    #[error("method not allowed, allowed methods: {}", join_methods(.allowed))]
    MethodNotAllowed { allowed: Vec<Method> },

    #[error("failed to route the request: {0}")]
    InternalServerError(#[source] BoxError),
}

impl HttpError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            Self::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Methods to advertise in an `Allow` header; empty unless this is
    /// [`HttpError::MethodNotAllowed`].
    pub fn allowed_methods(&self) -> &[Method] {
        match self {
            Self::MethodNotAllowed { allowed } => allowed,
            _ => &[],
        }
    }
}

fn join_methods(methods: &[Method]) -> String {
    let names: Vec<&str> = methods.iter().map(Method::as_str).collect();
    names.join(", ")
}
