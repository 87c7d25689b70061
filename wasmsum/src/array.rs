/// Builds the benchmark input: `size` elements where element `i` is `i`.
pub fn generate_array(size: usize) -> Vec<u32> {
    (0..size).map(|i| i as u32).collect()
}

/// Sequential host-side sum, the baseline every module kernel is checked against.
#[inline(never)]
pub fn sum_native(array: &[u32]) -> u32 {
    let mut result = 0u32;
    for &value in array {
        result = result.wrapping_add(value);
    }
    result
}

/// Sum of `0..size` with the same wrap-around as the kernels' `u32` result.
pub fn expected_checksum_for(size: usize) -> u32 {
    let n = size as u128;
    (n * n.saturating_sub(1) / 2) as u32
}
