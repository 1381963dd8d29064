//! Docserver - minimal HTTP/1.0 file server
//!
//! Core library for request parsing, resource resolution and file operations.

pub mod config;
pub mod error;
pub mod files;
pub mod http;
pub mod server;
