//! Console reporting
//!
//! Renders the per-scenario results block, the aggregate total, and a
//! fixed block of optimization notes. Line-oriented text only.

use std::io::{self, Write};

use crate::TimingRecord;

/// Static notes printed after the measured results. Literal text, not
/// derived from measurements.
const OPTIMIZATION_NOTES: &str = "\
Optimization notes:
  * Parser construction dominates one-shot invocations; reuse a parser
    instance when parsing repeatedly.
  * Mutually exclusive groups add per-parse bookkeeping that grows with
    the number of registered conflicts.
  * Negative-number tokenization is resolved while lexing and adds no
    measurable cost to steady-state parsing.
  * Help rendering allocates the full text on every call; cache the
    rendered string when it is printed more than once.";

/// Write the results block for `records` in input order, followed by the
/// aggregate total and the optimization notes.
pub fn write_report<W: Write>(out: &mut W, records: &[TimingRecord]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Benchmark results")?;
    writeln!(out, "-----------------")?;
    for record in records {
        writeln!(
            out,
            "{:<28} {:>8} iterations  total {:>10.2} ms  avg {:>9.3} us",
            record.name,
            record.iterations,
            record.total_ms(),
            record.avg_us(),
        )?;
    }

    // Summed before rounding; the displayed total is never a re-sum of
    // the rounded per-scenario rows.
    let total_ms: f64 = records.iter().map(TimingRecord::total_ms).sum();
    writeln!(out)?;
    writeln!(out, "Total: {total_ms:.2} ms")?;
    writeln!(out)?;
    writeln!(out, "{OPTIMIZATION_NOTES}")?;
    Ok(())
}
