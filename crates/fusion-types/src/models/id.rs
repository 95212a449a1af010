//! Lossless identifier type.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A 64-bit (or wider) backend identifier kept as its exact decimal text.
///
/// Discord channel and author IDs routinely exceed 2^53, so they never pass
/// through a float. Accepts a JSON string or a JSON integer; always serializes
/// as a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct BigId(String);

impl BigId {
    /// Wrap a decimal string. Returns `None` if it is not an integer literal.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        let digits = trimmed.strip_prefix('-').unwrap_or(trimmed);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for BigId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for BigId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl Serialize for BigId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for BigId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Going through Value keeps the literal text of numbers (arbitrary_precision).
        let value = serde_json::Value::deserialize(deserializer)?;
        let text = match &value {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Number(n) => n.to_string(),
            other => {
                return Err(de::Error::custom(format!(
                    "expected integer id as string or number, got {}",
                    other
                )))
            }
        };
        Self::parse(&text)
            .ok_or_else(|| de::Error::custom(format!("invalid integer id: {}", text)))
    }
}
