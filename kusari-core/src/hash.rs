//! Order-independent hashing of chain endpoints.
//!
//! Both ends of a chain are hashed as `(node, edge)` pairs and then merged
//! with a combinator that sorts its inputs first, so walking the same chain
//! from either end yields the same key.

/// SplitMix64 increment (the 64-bit golden ratio).
const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;
const SPLITMIX_MULT_A: u64 = 0xBF58_476D_1CE4_E5B9;
const SPLITMIX_MULT_B: u64 = 0x94D0_49BB_1331_11EB;

#[inline]
const fn splitmix64(mut state: u64) -> u64 {
    state = state.wrapping_add(GOLDEN_GAMMA);
    state = (state ^ (state >> 30)).wrapping_mul(SPLITMIX_MULT_A);
    state = (state ^ (state >> 27)).wrapping_mul(SPLITMIX_MULT_B);
    state ^ (state >> 31)
}

/// Order-sensitive mix of two words.
#[inline]
const fn combine(first: u64, second: u64) -> u64 {
    splitmix64(splitmix64(first) ^ second.rotate_left(32))
}

/// Hashes one chain endpoint: the boundary node and the edge touching it.
#[inline]
pub(crate) const fn endpoint_hash(node: usize, edge: usize) -> u64 {
    combine(node as u64, edge as u64)
}

/// Merges two endpoint hashes independently of their order.
#[inline]
pub(crate) const fn symmetric_combine(left: u64, right: u64) -> u64 {
    if left <= right {
        combine(left, right)
    } else {
        combine(right, left)
    }
}
