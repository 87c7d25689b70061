/// Figures derived from the fastest trial of one function under test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub time_ns: u64,
    pub cycles: f64,
    pub cycles_per_element: f64,
    pub elements_per_cycle: f64,
}

impl Metrics {
    /// Converts a duration into cycles at a fixed, manually supplied clock
    /// rate. A zero duration yields non-finite rates; they are reported as-is.
    pub fn derive(time_ns: u64, cpu_ghz: f64, elements: usize) -> Self {
        let cycles = time_ns as f64 * cpu_ghz;
        let cycles_per_element = cycles / elements as f64;
        Self {
            time_ns,
            cycles,
            cycles_per_element,
            elements_per_cycle: 1.0 / cycles_per_element,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkResult {
    pub name: &'static str,
    pub metrics: Metrics,
}
