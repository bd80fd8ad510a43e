//! argshim micro-benchmark harness
//!
//! Measures the latency of discrete operations against the argshim parser
//! facade across five fixed scenarios: parser construction, steady-state
//! parsing, conflict-group validation, negative-number tokenization, and
//! help rendering.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use argshim::ClapBackend;
//! use argshim_bench::{catalogue, run_suite, write_report, IterationPlan};
//!
//! let scenarios = catalogue(ClapBackend, &IterationPlan::default());
//! let records = run_suite(scenarios, &mut std::io::stdout().lock())?;
//! write_report(&mut std::io::stdout().lock(), &records)?;
//! ```

pub mod reporter;
pub mod runner;
pub mod scenarios;
pub mod timer;

use std::time::Duration;

use thiserror::Error;

/// Result of measuring one scenario.
///
/// Only the elapsed total is stored; per-operation averages are derived on
/// demand so the two can never drift apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingRecord {
    /// Scenario label.
    pub name: String,
    /// Number of repetitions executed. Always positive.
    pub iterations: u64,
    /// Wall-clock time across all iterations.
    pub elapsed: Duration,
}

impl TimingRecord {
    pub fn new(name: impl Into<String>, iterations: u64, elapsed: Duration) -> Self {
        Self {
            name: name.into(),
            iterations,
            elapsed,
        }
    }

    /// Total elapsed time in fractional milliseconds.
    pub fn total_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1_000.0
    }

    /// Average time per operation in milliseconds.
    pub fn avg_ms(&self) -> f64 {
        self.total_ms() / self.iterations as f64
    }

    /// Average time per operation in microseconds.
    pub fn avg_us(&self) -> f64 {
        self.avg_ms() * 1_000.0
    }
}

/// Errors produced by the harness.
#[derive(Debug, Error)]
pub enum BenchError {
    /// A scenario was configured with a zero iteration count.
    #[error("scenario {scenario:?} requested 0 iterations; the count must be positive")]
    InvalidIterations { scenario: String },
    /// The operation under measurement failed. Fatal to the whole run;
    /// there is no retry policy.
    #[error("scenario {scenario:?} failed during measurement")]
    Operation {
        scenario: String,
        #[source]
        source: anyhow::Error,
    },
}

// Re-export important items
pub use reporter::write_report;
pub use runner::run_suite;
pub use scenarios::{catalogue, IterationPlan, Scenario};
pub use timer::measure;
