//! Sampling helpers layered over an injectable [Rand] source.

use tinyrand::Rand;

#[inline]
pub fn random_f64(rand: &mut impl Rand) -> f64 {
    rand.next_u64() as f64 / u64::MAX as f64
}

/// A uniformly chosen index in `0..len`. `len` must be positive.
#[inline]
pub fn random_index(rand: &mut impl Rand, len: usize) -> usize {
    debug_assert!(len > 0, "cannot sample from an empty range");
    let index = (random_f64(rand) * len as f64) as usize;
    usize::min(index, len - 1)
}

/// Fisher–Yates shuffle.
pub fn shuffle<T>(items: &mut [T], rand: &mut impl Rand) {
    for upper in (1..items.len()).rev() {
        let swap_with = random_index(rand, upper + 1);
        items.swap(upper, swap_with);
    }
}
