//! Common types shared across Splunk API models.
//!
//! This module contains the typed messages Splunk attaches to error responses
//! and to search result payloads.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type of message from Splunk API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MessageType {
    #[serde(rename = "FATAL")]
    Fatal,
    #[serde(rename = "ERROR")]
    Error,
    #[serde(rename = "WARN")]
    Warn,
    #[serde(rename = "INFO")]
    Info,
    #[serde(rename = "DEBUG")]
    Debug,
    /// Unknown or unrecognized message type.
    #[serde(other)]
    #[default]
    Unknown,
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fatal => write!(f, "FATAL"),
            Self::Error => write!(f, "ERROR"),
            Self::Warn => write!(f, "WARN"),
            Self::Info => write!(f, "INFO"),
            Self::Debug => write!(f, "DEBUG"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// A single message from Splunk.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SplunkMessage {
    #[serde(rename = "type", default)]
    pub message_type: MessageType,
    #[serde(default)]
    pub text: String,
}

/// A collection of messages from Splunk.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SplunkMessages {
    pub messages: Vec<SplunkMessage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_type_deserialization() {
        assert_eq!(
            serde_json::from_str::<MessageType>("\"FATAL\"").unwrap(),
            MessageType::Fatal
        );
        assert_eq!(
            serde_json::from_str::<MessageType>("\"WARN\"").unwrap(),
            MessageType::Warn
        );
        assert_eq!(
            serde_json::from_str::<MessageType>("\"DEBUG\"").unwrap(),
            MessageType::Debug
        );
    }

    #[test]
    fn test_message_type_unknown_fallback() {
        assert_eq!(
            serde_json::from_str::<MessageType>("\"invalid\"").unwrap(),
            MessageType::Unknown
        );
    }

    #[test]
    fn test_message_type_display() {
        assert_eq!(MessageType::Fatal.to_string(), "FATAL");
        assert_eq!(MessageType::Info.to_string(), "INFO");
        assert_eq!(MessageType::Unknown.to_string(), "UNKNOWN");
    }

    #[test]
    fn test_deserialize_splunk_messages() {
        let json = r#"{
            "messages": [
                {
                    "type": "ERROR",
                    "text": "Unknown sid."
                }
            ]
        }"#;
        let msgs: SplunkMessages = serde_json::from_str(json).unwrap();
        assert_eq!(msgs.messages.len(), 1);
        assert_eq!(msgs.messages[0].message_type, MessageType::Error);
        assert_eq!(msgs.messages[0].text, "Unknown sid.");
    }
}
