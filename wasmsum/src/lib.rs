use core::fmt;

pub use crate::array::{expected_checksum_for, generate_array, sum_native};
pub use crate::buffer::{marshal_u32s, ElementSpan};
pub use crate::config::BenchConfig;
pub use crate::error::BenchError;
pub use crate::histogram::Histogram;
pub use crate::measure::{measure_speed, Clock, MonotonicClock};
pub use crate::metrics::{BenchmarkResult, Metrics};
pub use crate::module::{Kernel, MathModule, Value, WasmtimeModule};
pub use crate::report::{format_metrics, format_table};
pub use crate::suite::{run_suite, Variant};

mod array;
mod buffer;
pub mod config;
mod error;
mod histogram;
mod measure;
mod metrics;
mod module;
mod report;
pub mod smoke;
mod suite;

/// Sink for diagnostic output, from the harness itself and from the module's
/// `print` import.
pub trait Context {
    fn write_fmt(&mut self, args: fmt::Arguments);
}

/// Discards everything.
pub struct SilentCtx;

impl Context for SilentCtx {
    fn write_fmt(&mut self, _args: fmt::Arguments) {}
}

/// Forwards to an `io::Write`, e.g. `IoCtx(std::io::stdout())`.
///
/// Panics if the write fails.
pub struct IoCtx<W>(pub W);

impl<W: std::io::Write> Context for IoCtx<W> {
    fn write_fmt(&mut self, args: fmt::Arguments) {
        self.0.write_fmt(args).unwrap()
    }
}
