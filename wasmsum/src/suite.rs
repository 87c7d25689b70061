use std::hint::black_box;

use crate::array::{generate_array, sum_native};
use crate::buffer::marshal_u32s;
use crate::config::BenchConfig;
use crate::error::BenchError;
use crate::measure::{measure_speed, Clock};
use crate::metrics::{BenchmarkResult, Metrics};
use crate::module::{Kernel, MathModule};
use crate::report::format_metrics;
use crate::Context;

/// One function under test, in the order they are measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Native,
    Wasm,
    WasmSimd,
    Wasm8Scalar,
}

impl Variant {
    pub const ALL: [Variant; 4] = [
        Variant::Native,
        Variant::Wasm,
        Variant::WasmSimd,
        Variant::Wasm8Scalar,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Variant::Native => "sumNative",
            Variant::Wasm => "sumWasm",
            Variant::WasmSimd => "sumWasmSimd",
            Variant::Wasm8Scalar => "sumArray8Scalar",
        }
    }

    /// Module export behind this variant; `None` for the host baseline.
    pub fn kernel(self) -> Option<Kernel> {
        match self {
            Variant::Native => None,
            Variant::Wasm => Some(Kernel::Zig),
            Variant::WasmSimd => Some(Kernel::Simd),
            Variant::Wasm8Scalar => Some(Kernel::Scalar8),
        }
    }
}

/// Measures every [`Variant`] against `module`.
///
/// The input is marshaled once; all module variants read the same span. The
/// first failure ends the run and later variants are never called.
pub fn run_suite<M, C>(
    config: &BenchConfig,
    module: &mut M,
    clock: &mut C,
    ctx: &mut impl Context,
) -> anyhow::Result<Vec<BenchmarkResult>>
where
    M: MathModule,
    C: Clock,
{
    config.validate()?;

    let array = generate_array(config.array_size);
    writeln!(ctx, "Sum of Array (native): {}", sum_native(&array));

    let view_offset = module.view_offset();
    let span = marshal_u32s(module.memory(), view_offset, &array)?;
    writeln!(ctx, "Sum of array: {}", module.sum_array(Kernel::Zig, span.offset, span.len)?);

    let mut results = Vec::with_capacity(Variant::ALL.len());
    for variant in Variant::ALL {
        let name = variant.name();
        let histogram = match variant.kernel() {
            None => measure_speed(name, config.trials, config.expected_checksum, clock, || {
                Ok(sum_native(black_box(&array)))
            })?,
            Some(kernel) => measure_speed(name, config.trials, config.expected_checksum, clock, || {
                module.sum_array(kernel, span.offset, span.len)
            })?,
        };

        let time_ns = histogram
            .min()
            .ok_or_else(|| BenchError::NoSamples(name.to_owned()))?;
        let result = BenchmarkResult {
            name,
            metrics: Metrics::derive(time_ns, config.cpu_ghz, config.array_size),
        };
        write!(ctx, "{}", format_metrics(&result));
        results.push(result);
    }

    Ok(results)
}
