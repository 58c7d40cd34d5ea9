//! Bit-tuple utilities for indexing matrix rows and columns by basis state.

/// Interpret a tuple of bits as a big-endian integer. The first bit is the
/// most significant, so `[true, false]` is 2.
pub fn to_int_big_endian(bits: &[bool]) -> usize {
    bits.iter().fold(0, |acc, &bit| (acc << 1) | bit as usize)
}

pub fn is_power_of_two(n: usize) -> bool {
    n > 0 && n & (n - 1) == 0
}

/// Enumerate every n-bit tuple in big-endian counting order, i.e. the k-th
/// tuple yielded satisfies `to_int_big_endian(tuple) == k`.
pub fn all_values(n: usize) -> impl Iterator<Item = Vec<bool>> {
    (0..1usize << n).map(move |k| (0..n).map(|i| k >> (n - 1 - i) & 1 == 1).collect())
}
