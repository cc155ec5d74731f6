/// Input construction.
///
/// Every call builds a fresh sequence; nothing is shared between runs.

use crate::domain::NumberRecord;

/// The literal numeric input `[1, 2, 3, 4, 5]`.
pub fn create_numbers() -> Vec<i64> {
    (1..=5).collect()
}

/// The literal record input `[{num: 1}, .., {num: 5}]`.
pub fn create_records() -> Vec<NumberRecord> {
    records_from(&create_numbers())
}

/// Wrap each value in a record.
pub fn records_from(values: &[i64]) -> Vec<NumberRecord> {
    values.iter().copied().map(NumberRecord::new).collect()
}
