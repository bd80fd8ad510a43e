//! Suite execution
//!
//! Runs scenarios through the timing primitive in definition order,
//! writing progress to an injected sink so tests can capture output
//! instead of reading process-level streams.

use std::io::Write;

use anyhow::Result;
use chrono::Utc;

use crate::scenarios::Scenario;
use crate::timer::measure;
use crate::TimingRecord;

/// Run every scenario in order, returning the records of a full pass.
///
/// A progress header is written to `out` before each measurement. A
/// failing scenario aborts the run; scenarios later in the list are never
/// started and no records are returned for the aborted pass.
pub fn run_suite<W: Write>(scenarios: Vec<Scenario>, out: &mut W) -> Result<Vec<TimingRecord>> {
    writeln!(out, "=== argshim micro-benchmarks ===")?;
    writeln!(out, "Started: {}", Utc::now().format("%Y-%m-%d %H:%M:%S UTC"))?;
    writeln!(out, "Scenarios: {}", scenarios.len())?;

    let mut records = Vec::with_capacity(scenarios.len());
    for scenario in scenarios {
        writeln!(
            out,
            "\n--- {} ({} iterations)",
            scenario.name, scenario.iterations
        )?;
        tracing::debug!(
            scenario = scenario.name,
            iterations = scenario.iterations,
            "measuring"
        );

        let record = measure(scenario.name, scenario.iterations, scenario.op)?;

        tracing::debug!(
            scenario = record.name.as_str(),
            total_ms = record.total_ms(),
            "scenario finished"
        );
        records.push(record);
    }

    Ok(records)
}
