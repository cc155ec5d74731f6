//! Map → filter → fold pipelines.
//!
//! Inputs are borrowed slices; every stage returns a new sequence, so the
//! source is never touched and reruns on identical input are identical.

use tracing::debug;

use crate::arithmetic::{checked_add, square};
use crate::domain::{NumberRecord, PipelineReport};
use crate::error::Result;

/// Default filter threshold: keep values strictly greater than this.
pub const DEFAULT_THRESHOLD: i64 = 4;

/// Default fold accumulator.
pub const DEFAULT_INITIAL: i64 = 0;

// ── Numeric pipeline ───────────────────────────────────────────────

/// Stage (a): every element to its square.
pub fn map_squares(values: &[i64]) -> Result<Vec<i64>> {
    values.iter().map(|&x| square(x)).collect()
}

/// Stage (b): keep elements `> threshold`.
pub fn retain_above(values: &[i64], threshold: i64) -> Vec<i64> {
    values.iter().copied().filter(|&x| x > threshold).collect()
}

/// Stage (c): left fold from `initial`, adding each element.
pub fn fold_sum(values: &[i64], initial: i64) -> Result<i64> {
    values.iter().try_fold(initial, |acc, &x| checked_add(acc, x))
}

/// All three numeric stages, chained.
pub fn run_numbers(values: &[i64], threshold: i64, initial: i64) -> Result<PipelineReport> {
    let squares = map_squares(values)?;
    let retained = retain_above(&squares, threshold);
    let sum = fold_sum(&retained, initial)?;
    debug!(
        input = values.len(),
        retained = retained.len(),
        sum,
        "numeric pipeline complete"
    );
    Ok(PipelineReport {
        squares,
        retained,
        sum,
    })
}

/// Sum of the squares greater than 4, starting from 0.
pub fn sum_of_large_squares(values: &[i64]) -> Result<i64> {
    Ok(run_numbers(values, DEFAULT_THRESHOLD, DEFAULT_INITIAL)?.sum)
}

// ── Record pipeline ────────────────────────────────────────────────

/// Stage (a): each record to a new record holding the square of its field.
pub fn map_record_squares(records: &[NumberRecord]) -> Result<Vec<NumberRecord>> {
    records.iter().map(NumberRecord::squared).collect()
}

/// Stage (b): keep records whose field is `> threshold`.
pub fn retain_records_above(records: &[NumberRecord], threshold: i64) -> Vec<NumberRecord> {
    records
        .iter()
        .filter(|r| r.num > threshold)
        .copied()
        .collect()
}

/// Stage (c): the accumulator is a plain number; each record adds its field.
pub fn fold_record_sum(records: &[NumberRecord], initial: i64) -> Result<i64> {
    records
        .iter()
        .try_fold(initial, |acc, r| checked_add(acc, r.num))
}

/// All three record stages, chained.
pub fn run_records(
    records: &[NumberRecord],
    threshold: i64,
    initial: i64,
) -> Result<PipelineReport> {
    let squared = map_record_squares(records)?;
    let retained = retain_records_above(&squared, threshold);
    let sum = fold_record_sum(&retained, initial)?;
    debug!(
        input = records.len(),
        retained = retained.len(),
        sum,
        "record pipeline complete"
    );
    Ok(PipelineReport {
        squares: squared.iter().map(|r| r.num).collect(),
        retained: retained.iter().map(|r| r.num).collect(),
        sum,
    })
}

/// Record counterpart of [`sum_of_large_squares`].
pub fn sum_of_large_record_squares(records: &[NumberRecord]) -> Result<i64> {
    Ok(run_records(records, DEFAULT_THRESHOLD, DEFAULT_INITIAL)?.sum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PipelineError;
    use crate::state::{create_numbers, create_records, records_from};

    #[test]
    fn test_stages_on_literal_numbers() {
        let squares = map_squares(&create_numbers()).unwrap();
        assert_eq!(squares, vec![1, 4, 9, 16, 25]);
        let retained = retain_above(&squares, DEFAULT_THRESHOLD);
        assert_eq!(retained, vec![9, 16, 25]);
        assert_eq!(fold_sum(&retained, DEFAULT_INITIAL).unwrap(), 50);
    }

    #[test]
    fn test_filter_is_strictly_greater() {
        // 4 itself must be dropped
        assert_eq!(retain_above(&[3, 4, 5], 4), vec![5]);
    }

    #[test]
    fn test_fold_uses_initial_accumulator() {
        assert_eq!(fold_sum(&[], 7).unwrap(), 7);
        assert_eq!(fold_sum(&[1, 2], 10).unwrap(), 13);
    }

    #[test]
    fn test_sum_of_large_squares() {
        assert_eq!(sum_of_large_squares(&create_numbers()).unwrap(), 50);
    }

    #[test]
    fn test_record_stages() {
        let squared = map_record_squares(&create_records()).unwrap();
        assert_eq!(squared, records_from(&[1, 4, 9, 16, 25]));
        let retained = retain_records_above(&squared, DEFAULT_THRESHOLD);
        assert_eq!(retained, records_from(&[9, 16, 25]));
        assert_eq!(fold_record_sum(&retained, DEFAULT_INITIAL).unwrap(), 50);
    }

    #[test]
    fn test_record_pipeline_matches_numeric() {
        let numeric = run_numbers(&create_numbers(), 4, 0).unwrap();
        let record = run_records(&create_records(), 4, 0).unwrap();
        assert_eq!(numeric, record);
        assert_eq!(sum_of_large_record_squares(&create_records()).unwrap(), 50);
    }

    #[test]
    fn test_source_is_not_mutated() {
        let numbers = create_numbers();
        let records = create_records();
        let _ = run_numbers(&numbers, 4, 0).unwrap();
        let _ = run_records(&records, 4, 0).unwrap();
        assert_eq!(numbers, create_numbers());
        assert_eq!(records, create_records());
    }

    #[test]
    fn test_rerun_is_idempotent() {
        for _ in 0..3 {
            assert_eq!(sum_of_large_squares(&create_numbers()).unwrap(), 50);
            assert_eq!(sum_of_large_record_squares(&create_records()).unwrap(), 50);
        }
    }

    #[test]
    fn test_empty_input() {
        let report = run_numbers(&[], 4, 0).unwrap();
        assert!(report.squares.is_empty());
        assert!(report.retained.is_empty());
        assert_eq!(report.sum, 0);
    }

    #[test]
    fn test_square_overflow_is_reported() {
        assert!(matches!(
            run_numbers(&[i64::MAX], 4, 0),
            Err(PipelineError::Overflow { op: "*", .. })
        ));
    }

    #[test]
    fn test_fold_overflow_is_reported() {
        let big = 3_000_000_000_i64; // square ~ 9e18, two of them overflow
        assert!(matches!(
            run_records(&records_from(&[big, big]), 4, 0),
            Err(PipelineError::Overflow { op: "+", .. })
        ));
    }
}
