//! Configuration fingerprinting
//!
//! A stable identifier for a scenario, so that two estimates produced from
//! identical inputs can be recognised without comparing every field.

use serde::Serialize;
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

use crate::error::EstimateError;

/// Deterministic SHA256 of any serializable configuration
///
/// Serializes to canonical JSON (object keys sorted recursively) before
/// hashing, so the digest does not depend on field or map ordering.
/// Returns lowercase hex.
pub fn compute_config_hash<T: Serialize>(config: &T) -> Result<String, EstimateError> {
    let value = serde_json::to_value(config).map_err(|e| {
        EstimateError::Serialization(format!("Config serialization failed: {}", e))
    })?;

    let json = serde_json::to_string(&canonicalize(value)).map_err(|e| {
        EstimateError::Serialization(format!("Config serialization failed: {}", e))
    })?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}

fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let sorted: BTreeMap<String, Value> =
                map.into_iter().map(|(k, v)| (k, canonicalize(v))).collect();
            Value::Object(sorted.into_iter().collect())
        }
        Value::Array(arr) => Value::Array(arr.into_iter().map(canonicalize).collect()),
        other => other,
    }
}
