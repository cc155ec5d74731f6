/// Canonical hashing of pipeline reports.
///
/// Compact UTF-8 JSON, fixed field order (squares, retained, sum), then
/// SHA-256. Two runs over the same input must produce the same hex string.

use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use crate::domain::PipelineReport;
use crate::error::Result;

/// Canonical serialization of a report to UTF-8 JSON bytes. No whitespace.
pub fn canonical_serialize(report: &PipelineReport) -> Result<Vec<u8>> {
    let value = build_canonical_value(report);
    Ok(serde_json::to_vec(&value)?)
}

/// SHA-256 of the canonical serialization. Lowercase hex.
pub fn canonical_hash(report: &PipelineReport) -> Result<String> {
    let bytes = canonical_serialize(report)?;
    let digest = Sha256::digest(&bytes);
    Ok(digest.iter().map(|b| format!("{:02x}", b)).collect())
}

// serde_json::Map preserves insertion order under `preserve_order`.
fn build_canonical_value(report: &PipelineReport) -> Value {
    let mut root = Map::new();
    root.insert("squares".to_string(), int_array(&report.squares));
    root.insert("retained".to_string(), int_array(&report.retained));
    root.insert("sum".to_string(), Value::Number(report.sum.into()));
    Value::Object(root)
}

fn int_array(values: &[i64]) -> Value {
    Value::Array(values.iter().map(|&v| Value::Number(v.into())).collect())
}
