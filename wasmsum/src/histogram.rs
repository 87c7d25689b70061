/// Elapsed-time samples of one function under test, in nanoseconds.
///
/// Only the extremes and the count are kept, so memory use does not grow with
/// the trial count. The minimum is what gets reported: it approximates
/// steady-state best case and drops scheduler noise that would skew a mean.
#[derive(Debug, Clone, Copy, Default)]
pub struct Histogram {
    count: u64,
    min: Option<u64>,
    max: Option<u64>,
}

impl Histogram {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn record(&mut self, value: u64) {
        self.count += 1;
        self.min = Some(self.min.map_or(value, |min| min.min(value)));
        self.max = Some(self.max.map_or(value, |max| max.max(value)));
    }

    pub fn min(&self) -> Option<u64> {
        self.min
    }

    pub fn max(&self) -> Option<u64> {
        self.max
    }

    pub fn len(&self) -> u64 {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
