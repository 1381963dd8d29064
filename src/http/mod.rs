//! HTTP/1.0 protocol implementation.
//!
//! One request is read per connection, answered, and the connection closed.
//!
//! # Architecture
//!
//! - **`connection`**: The per-connection state machine
//! - **`parser`**: Finds the header terminator and splits the request line
//! - **`request`**: Request and method representation
//! - **`response`**: Status codes and the response builder
//! - **`mime`**: Content type lookup by file suffix
//! - **`writer`**: Serializes and writes responses to the client
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌──────────────────┐
//!        │ AwaitingRequest  │ ← Read until \r\n\r\n
//!        └──────┬───────────┘
//!               │ no terminator → 400
//!               │ unknown method → 501
//!               ▼
//!        ┌──────────────────┐
//!        │   Dispatching    │ ← Resolve path (403), run file operation
//!        └──────┬───────────┘
//!               ▼
//!        ┌──────────────────┐
//!        │    Responding    │ ← Write, flush, shut down
//!        └──────┬───────────┘
//!               ▼
//!             Closed
//! ```

pub mod connection;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
