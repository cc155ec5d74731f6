//! Pipeline configuration.
//!
//! Loaded from JSON; any omitted field falls back to the literal defaults
//! (threshold 4, initial 0, values 1..5).

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PipelineError, Result};
use crate::pipeline::{DEFAULT_INITIAL, DEFAULT_THRESHOLD};
use crate::state::create_numbers;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Filter keeps values strictly greater than this.
    pub threshold: i64,
    /// Starting fold accumulator.
    pub initial: i64,
    /// Input values, used for both the numeric and the record pipeline.
    pub values: Vec<i64>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            initial: DEFAULT_INITIAL,
            values: create_numbers(),
        }
    }
}

impl PipelineConfig {
    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: PipelineConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading pipeline config");
        let data = fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }

    /// File values (or defaults when `path` is `None`), then any explicit
    /// threshold / initial overrides on top.
    pub fn resolve(
        path: Option<&Path>,
        threshold: Option<i64>,
        initial: Option<i64>,
    ) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        if let Some(threshold) = threshold {
            config = config.with_threshold(threshold);
        }
        if let Some(initial) = initial {
            config = config.with_initial(initial);
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.values.is_empty() {
            return Err(PipelineError::InvalidConfig(
                "values must contain at least one element".to_string(),
            ));
        }
        Ok(())
    }

    pub fn with_threshold(mut self, threshold: i64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_initial(mut self, initial: i64) -> Self {
        self.initial = initial;
        self
    }
}
