//! One-shot connectivity check of module loading and marshaling, without timing.

use crate::buffer::marshal_u32s;
use crate::module::{Kernel, MathModule, Value};
use crate::Context;

pub const MUL_OPERANDS: (i32, i32) = (1, 2);
pub const SAMPLE_ARRAY: [u32; 5] = [1, 2, 3, 4, 5];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmokeReport {
    pub product: Value,
    pub sum: u32,
}

pub fn run(module: &mut impl MathModule, ctx: &mut impl Context) -> anyhow::Result<SmokeReport> {
    let (a, b) = MUL_OPERANDS;
    let product = module.mul(a, b)?;
    writeln!(ctx, "Result of mul: {product}");

    let view_offset = module.view_offset();
    let span = marshal_u32s(module.memory(), view_offset, &SAMPLE_ARRAY)?;
    let sum = module.sum_array(Kernel::Zig, span.offset, span.len)?;
    writeln!(ctx, "Sum of array: {sum}");

    Ok(SmokeReport { product, sum })
}
