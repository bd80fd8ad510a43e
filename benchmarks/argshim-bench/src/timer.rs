//! Timing primitive
//!
//! Runs an operation back-to-back a fixed number of times and records the
//! elapsed wall-clock time from a monotonic clock.

use std::time::Instant;

use crate::{BenchError, TimingRecord};

/// Measure `op` over exactly `iterations` sequential invocations.
///
/// The recorded time covers the cumulative cost of the invocations plus
/// the loop construct itself; loop overhead is accepted as measurement
/// noise. There is no warm-up phase and no retrying. An `Err` from `op`
/// aborts the measurement and yields no record.
pub fn measure<F>(name: &str, iterations: u64, mut op: F) -> Result<TimingRecord, BenchError>
where
    F: FnMut() -> anyhow::Result<()>,
{
    // Validated before the loop; a zero count would make the derived
    // average undefined.
    if iterations == 0 {
        return Err(BenchError::InvalidIterations {
            scenario: name.to_string(),
        });
    }

    let start = Instant::now();
    for _ in 0..iterations {
        op().map_err(|source| BenchError::Operation {
            scenario: name.to_string(),
            source,
        })?;
    }
    let elapsed = start.elapsed();

    Ok(TimingRecord::new(name, iterations, elapsed))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop() -> anyhow::Result<()> {
        Ok(())
    }

    #[test]
    fn echoes_iteration_count_and_derives_average() {
        let record = measure("noop", 3, noop).unwrap();

        assert_eq!(record.name, "noop");
        assert_eq!(record.iterations, 3);
        assert!(record.total_ms() >= 0.0);
        assert_eq!(record.avg_ms(), record.total_ms() / 3.0);
        assert_eq!(record.avg_us(), record.avg_ms() * 1_000.0);
    }

    #[test]
    fn rejects_zero_iterations() {
        let err = measure("never", 0, noop).unwrap_err();
        assert!(matches!(
            err,
            BenchError::InvalidIterations { scenario } if scenario == "never"
        ));
    }

    #[test]
    fn propagates_operation_failure() {
        let mut calls = 0u32;
        let err = measure("broken", 10, || {
            calls += 1;
            anyhow::bail!("boom")
        })
        .unwrap_err();

        match err {
            BenchError::Operation { scenario, source } => {
                assert_eq!(scenario, "broken");
                assert_eq!(source.to_string(), "boom");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        // the first failure aborts the loop
        assert_eq!(calls, 1);
    }

    #[test]
    fn total_grows_with_iteration_count() {
        let spin = || {
            for i in 0..1_000u32 {
                std::hint::black_box(i);
            }
            Ok(())
        };

        let small = measure("small", 10, spin).unwrap();
        let large = measure("large", 1_000, spin).unwrap();

        // 100x the repetitions cannot finish faster than the small run.
        assert!(large.elapsed >= small.elapsed);
    }
}
