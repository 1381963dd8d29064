use crate::http::mime::content_type_for;

/// HTTP status codes produced by the server.
///
/// - `Ok` (200): File read or existing file written
/// - `Created` (201): File created
/// - `NoContent` (204): File deleted
/// - `BadRequest` (400): Malformed request
/// - `Forbidden` (403): Path outside the root, or deletion refused
/// - `NotFound` (404): File does not exist
/// - `InternalServerError` (500): Unexpected I/O failure
/// - `NotImplemented` (501): Method outside the supported set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 201 Created
    Created,
    /// 204 No Content
    NoContent,
    /// 400 Bad Request
    BadRequest,
    /// 403 Forbidden
    Forbidden,
    /// 404 Not Found
    NotFound,
    /// 500 Internal Server Error
    InternalServerError,
    /// 501 Not Implemented
    NotImplemented,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use docserver::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotImplemented.as_u16(), 501);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::Created => 201,
            StatusCode::NoContent => 204,
            StatusCode::BadRequest => 400,
            StatusCode::Forbidden => 403,
            StatusCode::NotFound => 404,
            StatusCode::InternalServerError => 500,
            StatusCode::NotImplemented => 501,
        }
    }

    /// Returns the reason phrase sent on the status line.
    ///
    /// # Example
    ///
    /// ```
    /// # use docserver::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Created => "Created",
            StatusCode::NoContent => "No Content",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::Forbidden => "Forbidden",
            StatusCode::NotFound => "Not Found",
            StatusCode::InternalServerError => "Internal Server Error",
            StatusCode::NotImplemented => "Not Implemented",
        }
    }
}

/// Content headers describing a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    /// Omitted from the wire when the file name has no known suffix
    pub content_type: Option<&'static str>,
    pub length: u64,
}

/// A complete HTTP response ready to be sent to a client.
///
/// A response without `content` is status-only: it carries neither
/// `Content-Type` nor `Content-Length`, and never a body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// Content headers, present only when a file was examined
    pub content: Option<Content>,
    /// Response body as bytes
    pub body: Vec<u8>,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// # Example
///
/// ```
/// # use docserver::http::response::{ResponseBuilder, StatusCode};
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .content("doc/index.html", 13)
///     .body(b"<html></html>".to_vec())
///     .build();
/// assert_eq!(response.content.unwrap().content_type, Some("text/html"));
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    content: Option<Content>,
    body: Vec<u8>,
}

impl ResponseBuilder {
    /// Creates a new response builder with the specified status code.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            content: None,
            body: Vec::new(),
        }
    }

    /// Describes the file `name` of `length` bytes.
    ///
    /// The content type comes from the suffix of `name`.
    pub fn content(mut self, name: &str, length: u64) -> Self {
        self.content = Some(Content {
            content_type: content_type_for(name),
            length,
        });
        self
    }

    /// Sets the response body.
    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// Builds the final Response.
    ///
    /// A body without content headers is dropped.
    pub fn build(self) -> Response {
        let body = match self.content {
            Some(_) => self.body,
            None => Vec::new(),
        };

        Response {
            status: self.status,
            content: self.content,
            body,
        }
    }
}

impl Response {
    /// Creates a status-only response.
    pub fn status_only(status: StatusCode) -> Self {
        ResponseBuilder::new(status).build()
    }

    /// Creates a 400 Bad Request response.
    pub fn bad_request() -> Self {
        Self::status_only(StatusCode::BadRequest)
    }

    /// Creates a 403 Forbidden response.
    pub fn forbidden() -> Self {
        Self::status_only(StatusCode::Forbidden)
    }

    /// Creates a 500 Internal Server Error response.
    pub fn internal_error() -> Self {
        Self::status_only(StatusCode::InternalServerError)
    }

    /// Creates a 501 Not Implemented response.
    pub fn not_implemented() -> Self {
        Self::status_only(StatusCode::NotImplemented)
    }
}
