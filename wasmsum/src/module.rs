use std::fmt;
use std::path::Path;

use anyhow::{bail, Context as _};
use wasmtime::{Caller, Engine, ExternType, Func, Linker, Memory, Module, Store, TypedFunc, Val, ValType};

use crate::error::BenchError;
use crate::Context;

/// Summation exports of the math module. All take `(element offset, length)`
/// and return the `u32` sum of that range of linear memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kernel {
    Zig,
    Simd,
    Scalar8,
}

impl Kernel {
    pub const ALL: [Kernel; 3] = [Kernel::Zig, Kernel::Simd, Kernel::Scalar8];

    pub fn export_name(self) -> &'static str {
        match self {
            Kernel::Zig => "sumArrayZig",
            Kernel::Simd => "sumArraySimd",
            Kernel::Scalar8 => "sumArray8Scalar",
        }
    }
}

/// Call contract of the externally built math module.
pub trait MathModule {
    /// Writable view of the whole linear memory at its current size.
    fn memory(&mut self) -> &mut [u8];

    /// Byte offset in [`MathModule::memory`] where host data may be placed.
    fn view_offset(&self) -> usize {
        0
    }

    fn sum_array(&mut self, kernel: Kernel, offset: u32, len: u32) -> anyhow::Result<u32>;

    fn mul(&mut self, a: i32, b: i32) -> anyhow::Result<Value>;
}

/// Numeric wasm value, as passed to `print` or returned from `mul`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
}

impl Value {
    fn from_val(val: &Val, origin: &str) -> Result<Self, BenchError> {
        match val {
            Val::I32(v) => Ok(Value::I32(*v)),
            Val::I64(v) => Ok(Value::I64(*v)),
            Val::F32(bits) => Ok(Value::F32(f32::from_bits(*bits))),
            Val::F64(bits) => Ok(Value::F64(f64::from_bits(*bits))),
            _ => Err(BenchError::UnsupportedValue(origin.to_owned())),
        }
    }

    /// Converts an integer operand to the parameter type the export declares.
    fn to_val(operand: i32, ty: &ValType, origin: &str) -> Result<Val, BenchError> {
        match ty {
            ValType::I32 => Ok(Val::I32(operand)),
            ValType::I64 => Ok(Val::I64(i64::from(operand))),
            ValType::F32 => Ok(Val::F32((operand as f32).to_bits())),
            ValType::F64 => Ok(Val::F64(f64::from(operand).to_bits())),
            _ => Err(BenchError::UnsupportedValue(origin.to_owned())),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::I32(v) => write!(f, "{v}"),
            Value::I64(v) => write!(f, "{v}"),
            Value::F32(v) => write!(f, "{v}"),
            Value::F64(v) => write!(f, "{v}"),
        }
    }
}

/// Math module compiled and instantiated by wasmtime.
///
/// The store owns the diagnostic context so the module's `print` import can
/// write through it.
pub struct WasmtimeModule<C: Context + Send + 'static> {
    store: Store<C>,
    memory: Memory,
    kernels: [TypedFunc<(u32, u32), u32>; 3],
    mul: Func,
}

impl<C: Context + Send + 'static> WasmtimeModule<C> {
    pub fn from_file(path: impl AsRef<Path>, ctx: C) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read(path)
            .with_context(|| format!("failed to read wasm module {}", path.display()))?;
        Self::from_bytes(&content, ctx)
            .with_context(|| format!("failed to load wasm module {}", path.display()))
    }

    /// Accepts a binary module or its text format.
    pub fn from_bytes(code: &[u8], ctx: C) -> anyhow::Result<Self> {
        let engine = Engine::default();
        let module = Module::new(&engine, code)?;

        let mut linker = Linker::new(&engine);
        for import in module.imports() {
            match (import.module(), import.name(), import.ty()) {
                ("env", "print", ExternType::Func(ty)) => {
                    if ty.results().next().is_some() {
                        bail!("`env.print` must not return values");
                    }
                    linker.func_new("env", "print", ty, |mut caller: Caller<'_, C>, params, _results| {
                        let mut values = Vec::with_capacity(params.len());
                        for param in params {
                            values.push(Value::from_val(param, "env.print")?);
                        }
                        let line = values
                            .iter()
                            .map(Value::to_string)
                            .collect::<Vec<_>>()
                            .join(", ");
                        writeln!(caller.data_mut(), "The result is {line}");
                        Ok(())
                    })?;
                }
                (import_module, name, _) => {
                    return Err(BenchError::UnsupportedImport {
                        module: import_module.to_owned(),
                        name: name.to_owned(),
                    }
                    .into());
                }
            }
        }

        let mut store = Store::new(&engine, ctx);
        let instance = linker.instantiate(&mut store, &module)?;

        let memory = instance
            .get_memory(&mut store, "memory")
            .ok_or_else(|| BenchError::MissingExport("memory".into()))?;

        let mut resolve = |kernel: Kernel| -> anyhow::Result<TypedFunc<(u32, u32), u32>> {
            let name = kernel.export_name();
            let func = instance
                .get_func(&mut store, name)
                .ok_or_else(|| BenchError::MissingExport(name.into()))?;
            func.typed(&store)
                .with_context(|| format!("`{name}` must have type (i32, i32) -> i32"))
        };
        let kernels = [
            resolve(Kernel::Zig)?,
            resolve(Kernel::Simd)?,
            resolve(Kernel::Scalar8)?,
        ];

        let mul = instance
            .get_func(&mut store, "mul")
            .ok_or_else(|| BenchError::MissingExport("mul".into()))?;

        Ok(Self {
            store,
            memory,
            kernels,
            mul,
        })
    }

    pub fn ctx(&self) -> &C {
        self.store.data()
    }
}

impl<C: Context + Send + 'static> MathModule for WasmtimeModule<C> {
    fn memory(&mut self) -> &mut [u8] {
        self.memory.data_mut(&mut self.store)
    }

    #[inline]
    fn sum_array(&mut self, kernel: Kernel, offset: u32, len: u32) -> anyhow::Result<u32> {
        let func = match kernel {
            Kernel::Zig => &self.kernels[0],
            Kernel::Simd => &self.kernels[1],
            Kernel::Scalar8 => &self.kernels[2],
        };
        func.call(&mut self.store, (offset, len))
    }

    fn mul(&mut self, a: i32, b: i32) -> anyhow::Result<Value> {
        let ty = self.mul.ty(&self.store);
        if ty.params().len() != 2 || ty.results().len() != 1 {
            bail!("`mul` must take two operands and return one value");
        }

        let mut params = Vec::with_capacity(2);
        for (operand, param_ty) in [a, b].into_iter().zip(ty.params()) {
            params.push(Value::to_val(operand, &param_ty, "mul")?);
        }
        let mut results = [Val::I32(0)];
        self.mul.call(&mut self.store, &params, &mut results)?;

        Ok(Value::from_val(&results[0], "mul")?)
    }
}
