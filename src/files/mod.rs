//! File-backed resources
//!
//! This module maps request targets onto files beneath the root directory
//! and implements the five file operations behind the HTTP methods.

pub mod ops;
pub mod resolver;

pub use resolver::{Resource, Resolver};

use tracing::debug;

use crate::config::Config;
use crate::error::ServeError;
use crate::http::request::{Method, Request};
use crate::http::response::Response;

/// Resolves requests and dispatches them to the matching file operation.
#[derive(Debug, Clone)]
pub struct FileStore {
    resolver: Resolver,
}

impl FileStore {
    pub fn new(resolver: Resolver) -> Self {
        Self { resolver }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(Resolver::new(
            cfg.base_dir.clone(),
            &cfg.root,
            &cfg.default_document,
        ))
    }

    /// Resolves the target of `request` and runs the operation for its method.
    pub async fn dispatch(&self, request: &Request) -> Result<Response, ServeError> {
        let resource = self.resolver.resolve(&request.target)?;

        debug!(
            method = request.method.as_str(),
            resource = %resource.name,
            "Dispatching"
        );

        match request.method {
            Method::GET => ops::get(&resource).await,
            Method::HEAD => ops::head(&resource).await,
            Method::PUT => ops::put(&resource, &request.body).await,
            Method::POST => ops::post(&resource, &request.body).await,
            Method::DELETE => ops::delete(&resource).await,
        }
    }
}
