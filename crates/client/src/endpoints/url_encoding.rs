//! URL encoding utilities for constructing safe API paths.
//!
//! Provides percent-encoding for URL path segments. Search job ids are
//! user-supplied in attach mode and must not be able to alter the request path.
//!
//! Without encoding, a sid such as `../control` would address a different
//! endpoint and `sid?x=1` would inject query parameters.

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters percent-encoded in a path segment: RFC 3986 delimiters that
/// would change the meaning of the URL, plus `%` to avoid double decoding.
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'+')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for safe use as a URL path segment.
///
/// Used for every sid interpolated into a job URL.
///
/// # Examples
///
/// ```
/// use splunk_search::endpoints::url_encoding::encode_path_segment;
///
/// assert_eq!(encode_path_segment("1700000000.42"), "1700000000.42");
/// assert_eq!(encode_path_segment("admin__search/../x"), "admin__search%2F..%2Fx");
/// ```
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}
