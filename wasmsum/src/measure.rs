use std::time::Instant;

use anyhow::Context as _;

use crate::error::BenchError;
use crate::histogram::Histogram;

/// Source of trial timestamps, in nanoseconds from an arbitrary origin.
pub trait Clock {
    fn now_ns(&mut self) -> u64;
}

/// Wall clock backed by the OS monotonic timer.
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for MonotonicClock {
    #[inline(always)]
    fn now_ns(&mut self) -> u64 {
        self.origin.elapsed().as_nanos() as u64
    }
}

/// Runs `callback` `trials` times and records the duration of every call.
///
/// With `expected` set, the first result that differs aborts the whole
/// measurement; nothing measured so far is returned.
pub fn measure_speed<C, F>(
    name: &str,
    trials: u32,
    expected: Option<u32>,
    clock: &mut C,
    mut callback: F,
) -> anyhow::Result<Histogram>
where
    C: Clock,
    F: FnMut() -> anyhow::Result<u32>,
{
    let mut histogram = Histogram::new();

    for _ in 0..trials {
        let start = clock.now_ns();
        let result = callback().with_context(|| format!("{name} failed"))?;
        let end = clock.now_ns();

        if let Some(expected) = expected {
            if result != expected {
                return Err(BenchError::ChecksumMismatch {
                    name: name.to_owned(),
                    actual: result,
                    expected,
                }
                .into());
            }
        }

        histogram.record(end.saturating_sub(start));
    }

    Ok(histogram)
}
