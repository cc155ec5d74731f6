#![forbid(unsafe_code)]

//! Closures and map → filter → fold pipelines over numbers and
//! single-field records.
//!
//! All values are i64. Every pipeline borrows its input and builds new
//! sequences, so reruns on identical input always agree.

pub mod arithmetic;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod hashing;
pub mod maybe;
pub mod pipeline;
pub mod state;

pub use error::{PipelineError, Result};
