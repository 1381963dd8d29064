//! Tests for the file operations

use docserver::error::ServeError;
use docserver::files::ops;
use docserver::files::{Resolver, Resource};
use docserver::http::response::{Content, Response, StatusCode};
use tempfile::TempDir;

fn setup() -> (TempDir, Resolver) {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("doc")).unwrap();
    let resolver = Resolver::new(dir.path(), "doc/", "doc/index.html");
    (dir, resolver)
}

fn resource(resolver: &Resolver, target: &str) -> Resource {
    resolver.resolve(target).unwrap()
}

fn content(response: &Response) -> &Content {
    response.content.as_ref().expect("content headers")
}

#[tokio::test]
async fn test_get_existing_file() {
    let (_dir, resolver) = setup();
    let index = resource(&resolver, "/");
    std::fs::write(&index.path, "<html></html>").unwrap();

    let response = ops::get(&index).await.unwrap();

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(content(&response).content_type, Some("text/html"));
    assert_eq!(content(&response).length, 13);
    assert_eq!(response.body, b"<html></html>".to_vec());
}

#[tokio::test]
async fn test_get_missing_file_describes_zero_length() {
    let (_dir, resolver) = setup();
    let missing = resource(&resolver, "/doc/missing.css");

    let err = ops::get(&missing).await.unwrap_err();
    assert_eq!(err.status(), StatusCode::NotFound);

    let response = err.into_response();
    assert_eq!(response.status, StatusCode::NotFound);
    assert_eq!(
        response.content,
        Some(Content {
            content_type: Some("text/css"),
            length: 0
        })
    );
    assert!(response.body.is_empty());
}

#[tokio::test]
async fn test_get_directory_is_missing() {
    let (dir, resolver) = setup();
    std::fs::create_dir(dir.path().join("doc/sub")).unwrap();

    let err = ops::get(&resource(&resolver, "/doc/sub")).await.unwrap_err();

    assert!(matches!(err, ServeError::ResourceMissing { .. }));
}

#[tokio::test]
async fn test_head_has_no_body() {
    let (_dir, resolver) = setup();
    let page = resource(&resolver, "/doc/page.pdf");
    std::fs::write(&page.path, b"%PDF-1.4").unwrap();

    let response = ops::head(&page).await.unwrap();

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(content(&response).content_type, Some("application/pdf"));
    assert_eq!(content(&response).length, 8);
    assert!(response.body.is_empty());
}

#[tokio::test]
async fn test_head_missing_file() {
    let (_dir, resolver) = setup();

    let response = ops::head(&resource(&resolver, "/doc/none.html"))
        .await
        .unwrap_err()
        .into_response();

    assert_eq!(response.status, StatusCode::NotFound);
    assert_eq!(content(&response).length, 0);
}

#[tokio::test]
async fn test_put_creates_then_replaces() {
    let (_dir, resolver) = setup();
    let notes = resource(&resolver, "/doc/notes.txt");

    let first = ops::put(&notes, b"first body").await.unwrap();
    assert_eq!(first.status, StatusCode::Created);
    assert_eq!(content(&first).length, 10);
    assert_eq!(content(&first).content_type, None);

    let second = ops::put(&notes, b"second").await.unwrap();
    assert_eq!(second.status, StatusCode::Ok);
    assert_eq!(content(&second).length, 6);
    assert_eq!(std::fs::read(&notes.path).unwrap(), b"second");
}

#[tokio::test]
async fn test_put_same_body_twice_is_not_concatenated() {
    let (_dir, resolver) = setup();
    let page = resource(&resolver, "/doc/page.html");

    ops::put(&page, b"<p>x</p>").await.unwrap();
    let again = ops::put(&page, b"<p>x</p>").await.unwrap();

    assert_eq!(again.status, StatusCode::Ok);
    assert_eq!(std::fs::read(&page.path).unwrap(), b"<p>x</p>");
}

#[tokio::test]
async fn test_put_empty_body_truncates() {
    let (_dir, resolver) = setup();
    let notes = resource(&resolver, "/doc/notes.txt");
    std::fs::write(&notes.path, "old content").unwrap();

    let response = ops::put(&notes, b"").await.unwrap();

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(content(&response).length, 0);
    assert!(std::fs::read(&notes.path).unwrap().is_empty());
}

#[tokio::test]
async fn test_post_appends() {
    let (_dir, resolver) = setup();
    let log = resource(&resolver, "/doc/log.txt");

    let first = ops::post(&log, b"B1").await.unwrap();
    assert_eq!(first.status, StatusCode::Created);
    assert_eq!(std::fs::read(&log.path).unwrap(), b"B1");

    let second = ops::post(&log, b"B2").await.unwrap();
    assert_eq!(second.status, StatusCode::Ok);
    assert_eq!(content(&second).length, 4);
    assert_eq!(std::fs::read(&log.path).unwrap(), b"B1B2");
}

#[tokio::test]
async fn test_write_into_missing_directory_is_io_error() {
    let (_dir, resolver) = setup();
    let nested = resource(&resolver, "/doc/no/such/dir.txt");

    let err = ops::put(&nested, b"x").await.unwrap_err();

    assert!(matches!(err, ServeError::UnexpectedIo(_)));
    assert_eq!(err.into_response(), Response::internal_error());
}

#[tokio::test]
async fn test_delete_existing_file() {
    let (_dir, resolver) = setup();
    let old = resource(&resolver, "/doc/old.mp3");
    std::fs::write(&old.path, b"12345").unwrap();

    let response = ops::delete(&old).await.unwrap();

    assert_eq!(response.status, StatusCode::NoContent);
    assert_eq!(content(&response).length, 5);
    assert_eq!(content(&response).content_type, Some("audio/mp3"));
    assert!(!old.path.exists());
}

#[tokio::test]
async fn test_delete_missing_file_is_status_only() {
    let (_dir, resolver) = setup();

    let err = ops::delete(&resource(&resolver, "/doc/none.html"))
        .await
        .unwrap_err();

    assert_eq!(err.into_response(), Response::status_only(StatusCode::NotFound));
}

#[cfg(unix)]
#[tokio::test]
async fn test_delete_denied_is_forbidden() {
    use std::os::unix::fs::PermissionsExt;

    let (dir, resolver) = setup();
    let locked = dir.path().join("doc/locked");
    std::fs::create_dir(&locked).unwrap();
    let file = resource(&resolver, "/doc/locked/keep.txt");
    std::fs::write(&file.path, b"keep").unwrap();
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o555)).unwrap();

    let result = ops::delete(&file).await;
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();

    // Privileged users may remove the file regardless
    match result {
        Err(err) => {
            assert!(matches!(err, ServeError::DeletionDenied { .. }));
            assert_eq!(err.into_response(), Response::forbidden());
        }
        Ok(response) => assert_eq!(response.status, StatusCode::NoContent),
    }
}
