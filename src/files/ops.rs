//! The file operations behind GET, HEAD, PUT, POST and DELETE.
//!
//! Each operation translates filesystem outcomes into a response or a
//! [`ServeError`]; none of them writes to the connection.

use std::fs::Metadata;
use std::io;
use std::path::Path;

use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::{info, warn};

use crate::error::ServeError;
use crate::files::Resource;
use crate::http::response::{Response, ResponseBuilder, StatusCode};

/// Reads the file with its content.
pub async fn get(resource: &Resource) -> Result<Response, ServeError> {
    if regular_file(&resource.path).await?.is_none() {
        return Err(missing(resource, true));
    }

    let bytes = fs::read(&resource.path).await?;

    Ok(ResponseBuilder::new(StatusCode::Ok)
        .content(&resource.name, bytes.len() as u64)
        .body(bytes)
        .build())
}

/// Like [`get`] without the body.
pub async fn head(resource: &Resource) -> Result<Response, ServeError> {
    let metadata = regular_file(&resource.path)
        .await?
        .ok_or_else(|| missing(resource, true))?;

    Ok(ResponseBuilder::new(StatusCode::Ok)
        .content(&resource.name, metadata.len())
        .build())
}

/// Creates the file or replaces its content with `body`.
pub async fn put(resource: &Resource, body: &[u8]) -> Result<Response, ServeError> {
    let existed = fs::try_exists(&resource.path).await?;

    let mut file = fs::File::create(&resource.path).await?;
    file.write_all(body).await?;
    file.flush().await?;
    let length = file.metadata().await?.len();

    info!(resource = %resource.name, bytes = body.len(), existed, "File replaced");
    Ok(written(resource, existed, length))
}

/// Creates the file or appends `body` to it.
pub async fn post(resource: &Resource, body: &[u8]) -> Result<Response, ServeError> {
    let existed = fs::try_exists(&resource.path).await?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&resource.path)
        .await?;
    file.write_all(body).await?;
    file.flush().await?;
    let length = file.metadata().await?.len();

    info!(resource = %resource.name, bytes = body.len(), existed, "File appended");
    Ok(written(resource, existed, length))
}

/// Removes the file. The 204 reports the size the file had before removal.
pub async fn delete(resource: &Resource) -> Result<Response, ServeError> {
    let metadata = regular_file(&resource.path)
        .await?
        .ok_or_else(|| missing(resource, false))?;

    if let Err(source) = fs::remove_file(&resource.path).await {
        warn!(resource = %resource.name, error = %source, "Deletion refused");
        return Err(ServeError::DeletionDenied {
            name: resource.name.clone(),
            source,
        });
    }

    info!(resource = %resource.name, "File deleted");
    Ok(ResponseBuilder::new(StatusCode::NoContent)
        .content(&resource.name, metadata.len())
        .build())
}

/// Metadata of `path` if it is an existing regular file.
async fn regular_file(path: &Path) -> io::Result<Option<Metadata>> {
    match fs::metadata(path).await {
        Ok(metadata) if metadata.is_file() => Ok(Some(metadata)),
        Ok(_) => Ok(None),
        Err(e) if matches!(e.kind(), io::ErrorKind::NotFound | io::ErrorKind::NotADirectory) => {
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

fn missing(resource: &Resource, describe: bool) -> ServeError {
    ServeError::ResourceMissing {
        name: resource.name.clone(),
        describe,
    }
}

fn written(resource: &Resource, existed: bool, length: u64) -> Response {
    let status = if existed {
        StatusCode::Ok
    } else {
        StatusCode::Created
    };

    ResponseBuilder::new(status)
        .content(&resource.name, length)
        .build()
}
