//! What a caller can hand to the logger: plain text, any serializable value, or an error.

use serde::Serialize;
use std::fmt;

/// Every payload renders to a single display string before it reaches an output.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Printed as-is.
    Text(String),
    /// Printed as compact JSON (`{"message":"x"}`, `["a"]`).
    Structured(serde_json::Value),
    /// Printed as its description, followed by the cause when one exists.
    Failure {
        description: String,
        cause: Option<String>,
    },
}

impl Message {
    /// Serializes any value into the structured variant.
    ///
    /// # Errors
    /// Returns `Error::Serialize` when the value cannot be represented as JSON
    /// (for example a map with non-string keys).
    pub fn structured<T: Serialize + ?Sized>(value: &T) -> Result<Self, crate::Error> {
        Ok(Self::Structured(serde_json::to_value(value)?))
    }

    /// Captures an error's message and the message of its immediate source.
    #[must_use]
    pub fn failure(err: &(dyn std::error::Error + '_)) -> Self {
        Self::Failure {
            description: err.to_string(),
            cause: err.source().map(ToString::to_string),
        }
    }

    /// Canonical display text shared by console and file output.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Structured(value) => value.to_string(),
            Self::Failure {
                description,
                cause: Some(cause),
            } => format!("{description}: {cause}"),
            Self::Failure {
                description,
                cause: None,
            } => description.clone(),
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&String> for Message {
    fn from(text: &String) -> Self {
        Self::Text(text.clone())
    }
}

impl From<serde_json::Value> for Message {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(text) => Self::Text(text),
            other => Self::Structured(other),
        }
    }
}
