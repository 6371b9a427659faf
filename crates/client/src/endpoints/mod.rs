//! REST API endpoint implementations.
//!
//! Each function takes the HTTP client, base URL, and token explicitly so it
//! can be exercised against a mock server without a [`crate::SplunkClient`].

mod request;
pub mod search;
pub mod url_encoding;

pub use request::send_request;
