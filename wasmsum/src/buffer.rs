use crate::error::BenchError;

const ELEMENT_SIZE: usize = core::mem::size_of::<u32>();

/// Location of a marshaled array, in elements rather than bytes, as the
/// module's summation exports expect it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementSpan {
    pub offset: u32,
    pub len: u32,
}

/// Copies `values` little-endian into `memory` at `byte_offset`.
///
/// Linear memory is never grown; the array has to fit in what the module
/// already allocated.
pub fn marshal_u32s(
    memory: &mut [u8],
    byte_offset: usize,
    values: &[u32],
) -> Result<ElementSpan, BenchError> {
    if byte_offset % ELEMENT_SIZE != 0 {
        return Err(BenchError::MisalignedOffset {
            offset: byte_offset,
            align: ELEMENT_SIZE,
        });
    }

    let len_bytes = values.len() * ELEMENT_SIZE;
    let memory_len = memory.len();
    let out_of_bounds = || BenchError::BufferOutOfBounds {
        offset: byte_offset,
        len: len_bytes,
        memory_len,
    };
    let end = byte_offset.checked_add(len_bytes).ok_or_else(out_of_bounds)?;
    if end > memory_len {
        return Err(out_of_bounds());
    }
    let offset = u32::try_from(byte_offset / ELEMENT_SIZE).map_err(|_| out_of_bounds())?;
    let len = u32::try_from(values.len()).map_err(|_| out_of_bounds())?;

    for (dst, value) in memory[byte_offset..end]
        .chunks_exact_mut(ELEMENT_SIZE)
        .zip(values)
    {
        dst.copy_from_slice(&value.to_le_bytes());
    }

    Ok(ElementSpan { offset, len })
}
