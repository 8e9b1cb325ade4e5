//! Entry points for dynamically typed values.
//!
//! Byte strings are represented as `0x`-prefixed hex strings and lists as arrays. Anything else
//! is rejected instead of being coerced to bytes, since there is no canonical byte form for a
//! number or a piece of text.

use crate::{EncodeError, Item, Result, TypeError, decode::Decoder, encode};
use alloy_primitives::hex;
use serde_json::Value;

impl Item {
    /// Classifies a dynamic value as an atom or a list.
    pub fn from_value(value: &Value) -> Result<Self, EncodeError> {
        let mut path = String::new();
        Self::classify(value, &mut path)
    }

    fn classify(value: &Value, path: &mut String) -> Result<Self, EncodeError> {
        match value {
            Value::String(s) => match parse_bytes(s) {
                Some(data) => Ok(Self::Atom(data)),
                None => Err(unencodable("text", path)),
            },
            Value::Array(values) => {
                let mut items = Vec::with_capacity(values.len());
                for (i, value) in values.iter().enumerate() {
                    let len = path.len();
                    path.push('/');
                    path.push_str(&i.to_string());
                    items.push(Self::classify(value, path)?);
                    path.truncate(len);
                }
                Ok(Self::List(items))
            }
            other => Err(unencodable(kind(other), path)),
        }
    }

    /// Converts the item into its dynamic representation.
    pub fn to_value(&self) -> Value {
        match self {
            Self::Atom(data) => Value::String(hex::encode_prefixed(data)),
            Self::List(items) => Value::Array(items.iter().map(Self::to_value).collect()),
        }
    }
}

/// Classifies and encodes a dynamic value.
pub fn encode_value(value: &Value) -> Result<Vec<u8>> {
    Ok(encode(&Item::from_value(value)?))
}

/// Decodes a dynamic value holding the encoded bytes.
pub fn decode_value(value: &Value, strict: bool) -> Result<Item> {
    let buf = match value {
        Value::String(s) => parse_bytes(s).ok_or(TypeError::ExpectedBytes { found: "text" })?,
        other => return Err(TypeError::ExpectedBytes { found: kind(other) }.into()),
    };
    Ok(Decoder::new().strict(strict).decode(&buf)?)
}

/// Parses a `0x`-prefixed hex string.
fn parse_bytes(s: &str) -> Option<Vec<u8>> {
    let digits = s.strip_prefix("0x")?;
    // `hex::decode` would accept a second prefix
    if digits.starts_with("0x") {
        return None;
    }
    hex::decode(digits).ok()
}

fn unencodable(kind: &'static str, path: &str) -> EncodeError {
    let path = if path.is_empty() { "/".to_string() } else { path.to_string() };
    trace!(kind, %path, "rejecting value");
    EncodeError::Unencodable { kind, path }
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "text",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}
