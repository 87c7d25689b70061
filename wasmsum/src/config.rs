//! Workload parameters for a benchmark run.
//!
//! Defaults reproduce the reference workload: 4096 elements summed 100,000
//! times per variant on a machine assumed to run at 3.6 GHz.

use std::path::PathBuf;

use crate::error::BenchError;

pub const DEFAULT_MODULE_PATH: &str = "./math.wasm";
pub const DEFAULT_ARRAY_SIZE: usize = 0x1000;
pub const DEFAULT_TRIALS: u32 = 100_000;
pub const DEFAULT_EXPECTED_CHECKSUM: u32 = 8_386_560;
/// Check with `lscpu | grep MHz`. Cycle figures are derived from this value,
/// never measured.
pub const DEFAULT_CPU_GHZ: f64 = 3.6;

#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    pub module_path: PathBuf,
    pub array_size: usize,
    pub trials: u32,
    /// `None` disables the per-trial result check.
    pub expected_checksum: Option<u32>,
    pub cpu_ghz: f64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            module_path: PathBuf::from(DEFAULT_MODULE_PATH),
            array_size: DEFAULT_ARRAY_SIZE,
            trials: DEFAULT_TRIALS,
            expected_checksum: Some(DEFAULT_EXPECTED_CHECKSUM),
            cpu_ghz: DEFAULT_CPU_GHZ,
        }
    }
}

impl BenchConfig {
    pub fn validate(&self) -> Result<(), BenchError> {
        if self.array_size == 0 {
            return Err(BenchError::InvalidConfig("array size must be non-zero".into()));
        }
        if u32::try_from(self.array_size).is_err() {
            return Err(BenchError::InvalidConfig(format!(
                "array size {} does not fit in u32",
                self.array_size
            )));
        }
        if self.trials == 0 {
            return Err(BenchError::InvalidConfig("trial count must be non-zero".into()));
        }
        if !self.cpu_ghz.is_finite() || self.cpu_ghz <= 0.0 {
            return Err(BenchError::InvalidConfig(format!(
                "cpu clock rate {} GHz must be positive",
                self.cpu_ghz
            )));
        }
        Ok(())
    }
}
