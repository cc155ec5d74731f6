/// Pipeline engine.
///
/// Top-level orchestrator. Builds fresh inputs from its config on every run
/// and delegates each stage to `pipeline`.

use tracing::{debug, info};

use crate::config::PipelineConfig;
use crate::domain::PipelineReport;
use crate::error::{PipelineError, Result};
use crate::hashing::canonical_hash;
use crate::pipeline::{run_numbers, run_records};
use crate::state::records_from;

/// Reports from one run of both pipelines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOutcome {
    pub numbers: PipelineReport,
    pub records: PipelineReport,
}

impl EngineOutcome {
    /// True when the record pipeline reached the same sum as the numeric one.
    pub fn agree(&self) -> bool {
        self.numbers.sum == self.records.sum
    }
}

/// Runs the numeric and record pipelines under a fixed config.
#[derive(Debug, Clone, Default)]
pub struct PipelineEngine {
    config: PipelineConfig,
}

impl PipelineEngine {
    /// Create an engine. The config is validated once here.
    pub fn new(config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Numeric pipeline over a freshly built copy of the configured values.
    pub fn run_numbers(&self) -> Result<PipelineReport> {
        let values = self.config.values.clone();
        run_numbers(&values, self.config.threshold, self.config.initial)
    }

    /// Record pipeline over freshly built records.
    pub fn run_records(&self) -> Result<PipelineReport> {
        let records = records_from(&self.config.values);
        run_records(&records, self.config.threshold, self.config.initial)
    }

    pub fn run_both(&self) -> Result<EngineOutcome> {
        let outcome = EngineOutcome {
            numbers: self.run_numbers()?,
            records: self.run_records()?,
        };
        info!(
            numbers_sum = outcome.numbers.sum,
            records_sum = outcome.records.sum,
            agree = outcome.agree(),
            "pipelines complete"
        );
        Ok(outcome)
    }

    /// Run each pipeline twice on fresh inputs and compare canonical hashes.
    pub fn verify_determinism(&self) -> Result<()> {
        let pairs = [
            (self.run_numbers()?, self.run_numbers()?),
            (self.run_records()?, self.run_records()?),
        ];
        for (first, second) in &pairs {
            let h1 = canonical_hash(first)?;
            let h2 = canonical_hash(second)?;
            if h1 != h2 {
                return Err(PipelineError::Determinism {
                    first: h1,
                    second: h2,
                });
            }
            debug!(hash = %h1, "determinism check passed");
        }
        Ok(())
    }
}
