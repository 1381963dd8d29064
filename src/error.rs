//! Error kinds raised while serving a request.
//!
//! Every kind maps to one status code. The connection handler is the only
//! place where an error becomes a response.

use thiserror::Error;

use crate::http::parser::ParseError;
use crate::http::response::{Response, ResponseBuilder, StatusCode};

#[derive(Debug, Error)]
pub enum ServeError {
    #[error("malformed request: {0}")]
    MalformedRequest(String),

    #[error("unsupported method: {0}")]
    UnsupportedMethod(String),

    #[error("path not allowed: {0}")]
    PathNotAllowed(String),

    /// `describe` asks for zero-length content headers on the 404.
    #[error("resource missing: {name}")]
    ResourceMissing { name: String, describe: bool },

    #[error("deletion denied: {name}: {source}")]
    DeletionDenied {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    UnexpectedIo(#[from] std::io::Error),
}

impl ServeError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServeError::MalformedRequest(_) => StatusCode::BadRequest,
            ServeError::UnsupportedMethod(_) => StatusCode::NotImplemented,
            ServeError::PathNotAllowed(_) => StatusCode::Forbidden,
            ServeError::ResourceMissing { .. } => StatusCode::NotFound,
            ServeError::DeletionDenied { .. } => StatusCode::Forbidden,
            ServeError::UnexpectedIo(_) => StatusCode::InternalServerError,
        }
    }

    /// Converts the error into the response sent to the client.
    pub fn into_response(self) -> Response {
        match self {
            ServeError::ResourceMissing {
                name,
                describe: true,
            } => ResponseBuilder::new(StatusCode::NotFound)
                .content(&name, 0)
                .build(),
            ServeError::ResourceMissing { .. } => Response::status_only(StatusCode::NotFound),
            ServeError::MalformedRequest(_) => Response::bad_request(),
            ServeError::UnsupportedMethod(_) => Response::not_implemented(),
            ServeError::PathNotAllowed(_) | ServeError::DeletionDenied { .. } => {
                Response::forbidden()
            }
            ServeError::UnexpectedIo(_) => Response::internal_error(),
        }
    }
}

impl From<ParseError> for ServeError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::UnsupportedMethod(method) => ServeError::UnsupportedMethod(method),
            other => ServeError::MalformedRequest(other.to_string()),
        }
    }
}
