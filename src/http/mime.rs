//! Content type lookup by file name suffix.

/// Suffix to content type table, checked in order; the first match wins.
pub const CONTENT_TYPES: &[(&str, &str)] = &[
    (".html", "text/html"),
    (".htm", "text/html"),
    (".mp4", "video/mp4"),
    (".jpeg", "image/jpg"),
    (".png", "image/jpg"),
    (".mp3", "audio/mp3"),
    (".avi", "video/x-msvideo"),
    (".css", "text/css"),
    (".pdf", "application/pdf"),
    (".odt", "application/vnd.oasis.opendocument.text"),
];

/// Returns the content type for `name`, or `None` when no suffix matches.
///
/// Matching is case-sensitive.
///
/// ```
/// # use docserver::http::mime::content_type_for;
/// assert_eq!(content_type_for("doc/index.html"), Some("text/html"));
/// assert_eq!(content_type_for("doc/notes.txt"), None);
/// ```
pub fn content_type_for(name: &str) -> Option<&'static str> {
    CONTENT_TYPES
        .iter()
        .find(|(suffix, _)| name.ends_with(suffix))
        .map(|&(_, content_type)| content_type)
}
