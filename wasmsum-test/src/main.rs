use std::path::PathBuf;

use wasmsum::config::DEFAULT_MODULE_PATH;
use wasmsum::{smoke, IoCtx, WasmtimeModule};

fn main() -> anyhow::Result<()> {
    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_MODULE_PATH));

    let mut module = WasmtimeModule::from_file(&path, IoCtx(std::io::stdout()))?;
    smoke::run(&mut module, &mut IoCtx(std::io::stdout()))?;

    Ok(())
}
