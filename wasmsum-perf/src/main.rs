use std::path::PathBuf;

use clap::Parser;
use wasmsum::config::{DEFAULT_ARRAY_SIZE, DEFAULT_CPU_GHZ, DEFAULT_MODULE_PATH, DEFAULT_TRIALS};
use wasmsum::{
    expected_checksum_for, format_table, run_suite, BenchConfig, IoCtx, MonotonicClock,
    WasmtimeModule,
};

/// Times native and WebAssembly summation of a u32 array.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Compiled math module exporting the summation kernels.
    #[arg(long, default_value = DEFAULT_MODULE_PATH)]
    module: PathBuf,

    /// Assumed CPU clock in GHz; cycle figures are derived from it, not measured.
    #[arg(long, default_value_t = DEFAULT_CPU_GHZ)]
    cpu_ghz: f64,

    #[arg(long, default_value_t = DEFAULT_ARRAY_SIZE)]
    array_size: usize,

    /// Timed calls per function.
    #[arg(long, default_value_t = DEFAULT_TRIALS)]
    trials: u32,

    /// Result every call must return. Defaults to the sum of 0..array-size (8386560).
    #[arg(long)]
    expected: Option<u32>,
}

impl Args {
    fn into_config(self) -> BenchConfig {
        let expected = self
            .expected
            .unwrap_or_else(|| expected_checksum_for(self.array_size));

        BenchConfig {
            module_path: self.module,
            array_size: self.array_size,
            trials: self.trials,
            expected_checksum: Some(expected),
            cpu_ghz: self.cpu_ghz,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let config = Args::parse().into_config();
    config.validate()?;

    let mut module = WasmtimeModule::from_file(&config.module_path, IoCtx(std::io::stdout()))?;
    let mut ctx = IoCtx(std::io::stdout());
    let results = run_suite(&config, &mut module, &mut MonotonicClock::new(), &mut ctx)?;

    print!("{}", format_table(&results));

    Ok(())
}
