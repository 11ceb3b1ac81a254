use rand::rand_core::impls;
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};

const MULTIPLIER: u64 = 0x5_DEEC_E66D;
const INCREMENT: u64 = 0xB;
const MASK: u64 = (1 << 48) - 1;

/// 48-bit linear congruential generator.
///
/// Bit-compatible with the long-standing `java.util.Random` sequence, which is what seed-pinned boards were produced
/// with. Not suitable for anything security related.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LegacyRandom {
    state: u64,
}

impl LegacyRandom {
    pub const fn new(seed: u64) -> Self {
        Self {
            state: (seed ^ MULTIPLIER) & MASK,
        }
    }

    /// Advances the generator and returns its top `bits` bits (`1..=32`).
    pub fn next_bits(&mut self, bits: u32) -> u32 {
        debug_assert!((1..=32).contains(&bits));
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT)
            & MASK;
        (self.state >> (48 - bits)) as u32
    }

    /// Uniform value in `0..bound`; `bound` must be in `1..=i32::MAX`.
    pub fn next_bounded(&mut self, bound: u32) -> u32 {
        debug_assert!(bound > 0 && bound <= i32::MAX as u32);

        if bound.is_power_of_two() {
            return ((u64::from(bound) * u64::from(self.next_bits(31))) >> 31) as u32;
        }

        let bound = bound as i32;
        loop {
            let bits = self.next_bits(31) as i32;
            let value = bits % bound;
            // reject the tail where `bits` overflows past the last full multiple of `bound`
            if bits.wrapping_sub(value).wrapping_add(bound - 1) >= 0 {
                return value as u32;
            }
        }
    }
}

impl RngCore for LegacyRandom {
    fn next_u32(&mut self) -> u32 {
        self.next_bits(32)
    }

    fn next_u64(&mut self) -> u64 {
        let high = i64::from(self.next_bits(32) as i32) << 32;
        let low = i64::from(self.next_bits(32) as i32);
        high.wrapping_add(low) as u64
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst)
    }
}

impl SeedableRng for LegacyRandom {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}

/// Source of uniform indices for shuffling.
pub trait ShuffleSource {
    /// Uniform index in `0..bound`, `bound > 0`.
    fn index_below(&mut self, bound: usize) -> usize;
}

impl ShuffleSource for LegacyRandom {
    fn index_below(&mut self, bound: usize) -> usize {
        // boards hold at most `CellCount::MAX` cells
        self.next_bounded(bound as u32) as usize
    }
}

impl ShuffleSource for SmallRng {
    fn index_below(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }
}

/// Fisher-Yates shuffle walking from the last index down, swapping each slot with an index at or below it.
pub fn shuffle<T>(items: &mut [T], source: &mut impl ShuffleSource) {
    for index in (1..items.len()).rev() {
        let other = source.index_below(index + 1);
        items.swap(index, other);
    }
}
