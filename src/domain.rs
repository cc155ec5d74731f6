/// Core domain types.
///
/// Pure data plus the one record-level transformation the pipelines need.

use serde::{Deserialize, Serialize};

use crate::arithmetic::square;
use crate::error::Result;

/// A record holding a single named numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NumberRecord {
    pub num: i64,
}

impl NumberRecord {
    pub fn new(num: i64) -> Self {
        Self { num }
    }

    /// A new record holding the square of this record's field.
    pub fn squared(&self) -> Result<NumberRecord> {
        Ok(NumberRecord::new(square(self.num)?))
    }
}

/// Output of every pipeline stage.
///
/// Field order is part of the canonical serialization: squares, retained, sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineReport {
    pub squares: Vec<i64>,  // stage (a)
    pub retained: Vec<i64>, // stage (b)
    pub sum: i64,           // stage (c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_squared_returns_new_record() {
        let r = NumberRecord::new(4);
        let sq = r.squared().unwrap();
        assert_eq!(sq, NumberRecord { num: 16 });
        assert_eq!(r.num, 4);
    }

    #[test]
    fn test_record_rejects_unknown_fields() {
        let ok: NumberRecord = serde_json::from_str(r#"{"num":3}"#).unwrap();
        assert_eq!(ok.num, 3);
        assert!(serde_json::from_str::<NumberRecord>(r#"{"num":3,"extra":1}"#).is_err());
    }
}
