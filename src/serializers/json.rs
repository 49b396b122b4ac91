//! Passthrough for values stored as serialized JSON text.

use serde_json::Value;

use crate::{Error, Result};

/// Parse a stored JSON blob into a structured value.
pub fn parse_stored_json(raw: &str) -> Result<Value> {
    serde_json::from_str(raw).map_err(|e| Error::MalformedJson(e.to_string()))
}
