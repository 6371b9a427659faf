//! Results reader for Splunk JSON result payloads.
//!
//! # What this module handles:
//! - Parsing a results payload (`{"messages": [...], "results": [...]}` or a
//!   bare array) into an ordered sequence of [`ResultItem`]s
//!
//! # What this module does NOT handle:
//! - Deciding which items reach the caller (see [`crate::filter`])
//!
//! # Invariants
//! - Messages are yielded before results, each group in payload order.
//! - An empty body is an empty reader, not an error.

use serde_json::Value;

use crate::error::{ClientError, Result};
use crate::models::SplunkMessage;

/// One matched event: field name to value.
pub type Record = serde_json::Map<String, Value>;

/// A single item produced by a [`ResultsReader`].
#[derive(Debug, Clone, PartialEq)]
pub enum ResultItem {
    /// A result row.
    Record(Record),
    /// A typed diagnostic message attached to the payload.
    Message(SplunkMessage),
    /// Anything that is neither a row object nor a well-formed message.
    Other(Value),
}

/// Iterator over the items of one results payload.
#[derive(Debug, Default)]
pub struct ResultsReader {
    items: std::vec::IntoIter<ResultItem>,
}

impl ResultsReader {
    /// Create a reader over already-parsed items.
    pub fn from_items(items: Vec<ResultItem>) -> Self {
        Self {
            items: items.into_iter(),
        }
    }

    /// Parse a raw response body.
    pub fn from_body(body: &str) -> Result<Self> {
        if body.trim().is_empty() {
            return Ok(Self::default());
        }
        let json: Value = serde_json::from_str(body).map_err(|e| {
            ClientError::InvalidResponse(format!("Failed to parse search results response: {}", e))
        })?;
        Self::from_json(json)
    }

    /// Build a reader from a decoded payload.
    pub fn from_json(json: Value) -> Result<Self> {
        let mut items = Vec::new();
        match json {
            Value::Array(rows) => items.extend(rows.into_iter().map(row_item)),
            Value::Object(mut payload) => {
                let messages = payload.remove("messages");
                let results = payload.remove("results");
                if messages.is_none() && results.is_none() {
                    return Err(ClientError::InvalidResponse(
                        "Search results payload has neither results nor messages".to_string(),
                    ));
                }
                if let Some(Value::Array(messages)) = messages {
                    items.extend(messages.into_iter().map(message_item));
                }
                if let Some(Value::Array(rows)) = results {
                    items.extend(rows.into_iter().map(row_item));
                }
            }
            other => {
                return Err(ClientError::InvalidResponse(format!(
                    "Unexpected search results payload: {}",
                    other
                )));
            }
        }
        Ok(Self::from_items(items))
    }
}

impl Iterator for ResultsReader {
    type Item = ResultItem;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

fn row_item(value: Value) -> ResultItem {
    match value {
        Value::Object(record) => ResultItem::Record(record),
        other => ResultItem::Other(other),
    }
}

fn message_item(value: Value) -> ResultItem {
    match serde_json::from_value::<SplunkMessage>(value.clone()) {
        Ok(message) => ResultItem::Message(message),
        Err(_) => ResultItem::Other(value),
    }
}
