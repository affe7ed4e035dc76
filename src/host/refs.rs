// src/host/refs.rs
//! Decoding of child block references.
//!
//! The host encodes a child reference in one of three shapes: a bare
//! identifier, a two-element tuple whose second element is the
//! identifier, or an object carrying an `id`/`uuid` field. Anything
//! else is unrecognized and gets skipped by the fetcher.

use crate::types::BlockId;
use serde_json::Value;

/// A child reference decoded from one of the accepted shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChildRef {
    /// A bare identifier value: `"65f7..."`.
    Bare(String),
    /// A two-element tuple: `["uuid", "65f7..."]`.
    Pair(String),
    /// An object with an `id` or `uuid` field.
    Tagged(String),
}

impl ChildRef {
    /// Decodes a raw child reference, or `None` for unrecognized shapes.
    pub fn decode(value: &Value) -> Option<ChildRef> {
        match value {
            Value::String(s) => Some(ChildRef::Bare(s.clone())),
            Value::Array(items) if items.len() == 2 => coerce_id(&items[1]).map(ChildRef::Pair),
            Value::Object(fields) => fields
                .get("id")
                .or_else(|| fields.get("uuid"))
                .and_then(coerce_id)
                .map(ChildRef::Tagged),
            _ => None,
        }
    }

    /// The identifier string this reference carries.
    pub fn raw_id(&self) -> &str {
        match self {
            ChildRef::Bare(s) | ChildRef::Pair(s) | ChildRef::Tagged(s) => s,
        }
    }

    /// Parses the carried identifier, or `None` when it is malformed.
    pub fn block_id(&self) -> Option<BlockId> {
        BlockId::parse(self.raw_id()).ok()
    }
}

/// Coerces an identifier value to a string; strings and numbers only.
fn coerce_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
