use std::fmt::{self, Write as _};

use wasmsum::{
    run_suite, BenchConfig, BenchError, Clock, Context, Kernel, MathModule, MonotonicClock,
    SilentCtx, Value, Variant, WasmtimeModule,
};

const MATH_WAT: &str = include_str!("../../tests/math.wat");

struct CaptureCtx(String);

impl Context for CaptureCtx {
    fn write_fmt(&mut self, args: fmt::Arguments) {
        let _ = self.0.write_fmt(args);
    }
}

/// Host-side stand-in for the math module.
struct FakeModule {
    memory: Vec<u8>,
    calls: [u32; 3],
    /// `(kernel, call number)` from which that kernel returns a wrong sum.
    fault: Option<(Kernel, u32)>,
    /// `(offset, len, sum)` of the last span, dropped whenever memory is handed out.
    cached: Option<(u32, u32, u32)>,
}

impl FakeModule {
    fn new() -> Self {
        Self {
            memory: vec![0; 64 * 1024],
            calls: [0; 3],
            fault: None,
            cached: None,
        }
    }

    fn calls(&self, kernel: Kernel) -> u32 {
        self.calls[kernel as usize]
    }
}

impl MathModule for FakeModule {
    fn memory(&mut self) -> &mut [u8] {
        self.cached = None;
        &mut self.memory
    }

    fn sum_array(&mut self, kernel: Kernel, offset: u32, len: u32) -> anyhow::Result<u32> {
        self.calls[kernel as usize] += 1;
        let sum = match self.cached {
            Some((o, l, sum)) if (o, l) == (offset, len) => sum,
            _ => {
                let start = offset as usize * 4;
                let end = start + len as usize * 4;
                let sum = self.memory[start..end]
                    .chunks_exact(4)
                    .map(|b| u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
                    .fold(0u32, u32::wrapping_add);
                self.cached = Some((offset, len, sum));
                sum
            }
        };

        match self.fault {
            Some((faulty, from_call)) if faulty == kernel && self.calls(kernel) >= from_call => {
                Ok(sum + 1)
            }
            _ => Ok(sum),
        }
    }

    fn mul(&mut self, a: i32, b: i32) -> anyhow::Result<Value> {
        Ok(Value::I32(a * b))
    }
}

/// Every read advances by one nanosecond.
struct TickClock(u64);

impl Clock for TickClock {
    fn now_ns(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }
}

#[test]
fn default_workload_passes_the_gate() {
    let config = BenchConfig::default();
    let mut module = FakeModule::new();
    let mut ctx = CaptureCtx(String::new());

    let results = run_suite(&config, &mut module, &mut TickClock(0), &mut ctx).expect("suite");

    let names: Vec<_> = results.iter().map(|r| r.name).collect();
    assert_eq!(names, ["sumNative", "sumWasm", "sumWasmSimd", "sumArray8Scalar"]);
    // one sample call plus every trial
    assert_eq!(module.calls(Kernel::Zig), 100_001);
    assert_eq!(module.calls(Kernel::Simd), 100_000);
    assert_eq!(module.calls(Kernel::Scalar8), 100_000);

    for result in &results {
        assert_eq!(result.metrics.time_ns, 1);
        assert!((result.metrics.cycles - 3.6).abs() < 1e-12);
    }

    assert!(ctx.0.starts_with("Sum of Array (native): 8386560\nSum of array: 8386560\n"));
    assert_eq!(ctx.0.matches("FunctionToTest: ").count(), 4);
}

#[test]
fn mismatch_stops_the_run() {
    let config = BenchConfig {
        trials: 1_000,
        ..BenchConfig::default()
    };
    let mut module = FakeModule::new();
    module.fault = Some((Kernel::Simd, 500));
    let mut ctx = CaptureCtx(String::new());

    let err = run_suite(&config, &mut module, &mut MonotonicClock::new(), &mut ctx).unwrap_err();

    assert_eq!(
        err.downcast_ref::<BenchError>(),
        Some(&BenchError::ChecksumMismatch {
            name: "sumWasmSimd".into(),
            actual: 8_386_561,
            expected: 8_386_560,
        })
    );
    assert_eq!(module.calls(Kernel::Simd), 500);
    assert_eq!(module.calls(Kernel::Scalar8), 0);
    assert!(ctx.0.contains("FunctionToTest: sumWasm\n"));
    assert!(!ctx.0.contains("FunctionToTest: sumWasmSimd"));
}

#[test]
fn disabled_gate_reports_whatever_comes_back() {
    let config = BenchConfig {
        trials: 10,
        expected_checksum: None,
        ..BenchConfig::default()
    };
    let mut module = FakeModule::new();
    module.fault = Some((Kernel::Scalar8, 1));

    let results =
        run_suite(&config, &mut module, &mut TickClock(0), &mut SilentCtx).expect("suite");
    assert_eq!(results.len(), Variant::ALL.len());
}

#[test]
fn array_larger_than_memory_is_rejected() {
    let config = BenchConfig {
        array_size: 32 * 1024,
        expected_checksum: None,
        ..BenchConfig::default()
    };
    let mut module = FakeModule::new();

    let err = run_suite(&config, &mut module, &mut TickClock(0), &mut SilentCtx).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<BenchError>(),
        Some(BenchError::BufferOutOfBounds { .. })
    ));
    assert_eq!(module.calls(Kernel::Zig), 0);
}

#[test]
fn invalid_config_is_rejected_before_any_call() {
    let config = BenchConfig {
        trials: 0,
        ..BenchConfig::default()
    };
    let mut module = FakeModule::new();

    let err = run_suite(&config, &mut module, &mut TickClock(0), &mut SilentCtx).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<BenchError>(),
        Some(BenchError::InvalidConfig(_))
    ));
    assert_eq!(module.calls(Kernel::Zig), 0);
}

#[test]
fn wasm_kernels_pass_the_gate() {
    let config = BenchConfig {
        trials: 200,
        ..BenchConfig::default()
    };
    let mut module = WasmtimeModule::from_bytes(MATH_WAT.as_bytes(), SilentCtx).expect("load");

    let results =
        run_suite(&config, &mut module, &mut MonotonicClock::new(), &mut SilentCtx).expect("suite");

    assert_eq!(results.len(), 4);
    for result in &results {
        let metrics = &result.metrics;
        let recovered = metrics.cycles_per_element * config.array_size as f64;
        assert!((recovered - metrics.cycles).abs() <= metrics.cycles.abs() * 1e-9);
    }
}
