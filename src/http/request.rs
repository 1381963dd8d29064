use bytes::Bytes;

/// HTTP request methods understood by the file server.
///
/// Any other method token on the request line is answered with
/// 501 Not Implemented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Read a file with its content
    GET,
    /// POST - Create a file or append to it
    POST,
    /// PUT - Create a file or replace it
    PUT,
    /// DELETE - Remove a file
    DELETE,
    /// HEAD - Like GET but without the response body
    HEAD,
}

impl Method {
    /// Parses an HTTP method from a request line token.
    ///
    /// # Arguments
    ///
    /// * `s` - String representation of the method (case-sensitive, uppercase)
    ///
    /// # Returns
    ///
    /// `Some(Method)` if the token is one of the five supported methods,
    /// `None` otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// # use docserver::http::request::Method;
    /// assert_eq!(Method::from_str("GET"), Some(Method::GET));
    /// assert_eq!(Method::from_str("get"), None);
    /// assert_eq!(Method::from_str("PATCH"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::GET),
            "POST" => Some(Method::POST),
            "PUT" => Some(Method::PUT),
            "DELETE" => Some(Method::DELETE),
            "HEAD" => Some(Method::HEAD),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
            Method::HEAD => "HEAD",
        }
    }
}

/// A request whose header terminator has been observed.
///
/// Only the method and target of the request line are interpreted; the
/// rest of the header block is kept verbatim for logging.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method
    pub method: Method,
    /// The request target, always starting with `/`
    pub target: String,
    /// Raw header block up to and excluding the terminator
    pub head: String,
    /// Body bytes that were already available when the head was read
    pub body: Bytes,
}

impl Request {
    /// Returns the request line (first line of the head).
    pub fn request_line(&self) -> &str {
        self.head.split("\r\n").next().unwrap_or_default()
    }
}
