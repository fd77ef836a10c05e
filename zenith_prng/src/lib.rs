// Seedable pseudo-random stream for structure generation.
//
// xoshiro256++ (Blackman & Vigna, 2019) expanded from a single `u64` seed by
// SplitMix64. Every generator in `zenith_models` owns one `StructureRng`; there
// is no process-wide random state, so independent generators never perturb
// each other's streams.
//
// The integer helpers mirror the draws the structure builders make: inclusive
// integer ranges (`range_i32_inclusive`) and uniform choice from a small pool
// (`pick`). Both sit on top of `range_u64`, which rejects samples to avoid
// modulo bias.
//
// Reproducibility: two streams built from the same seed yield the same
// sequence on every platform. Floating point is only used when converting a
// finished sample (`next_f64`), never inside the state transition.

use serde::{Deserialize, Serialize};

/// xoshiro256++ stream owned by a single structure generator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureRng {
    s: [u64; 4],
}

impl StructureRng {
    /// Build a stream from `seed`. Equal seeds give equal sequences.
    pub fn new(seed: u64) -> Self {
        let mut sm = seed;
        Self {
            s: [
                splitmix64(&mut sm),
                splitmix64(&mut sm),
                splitmix64(&mut sm),
                splitmix64(&mut sm),
            ],
        }
    }

    /// Restart the stream from `seed`, discarding the current state.
    pub fn reseed(&mut self, seed: u64) {
        *self = Self::new(seed);
    }

    pub fn next_u64(&mut self) -> u64 {
        let result = (self.s[0].wrapping_add(self.s[3]))
            .rotate_left(23)
            .wrapping_add(self.s[0]);

        let t = self.s[1] << 17;

        self.s[2] ^= self.s[0];
        self.s[3] ^= self.s[1];
        self.s[1] ^= self.s[2];
        self.s[0] ^= self.s[3];

        self.s[2] ^= t;
        self.s[3] = self.s[3].rotate_left(45);

        result
    }

    /// Uniform `f64` in [0, 1) built from the top 53 bits.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform integer in `[low, high)`.
    ///
    /// Panics if `low >= high`.
    pub fn range_u64(&mut self, low: u64, high: u64) -> u64 {
        assert!(low < high, "range_u64: low must be less than high");
        let range = high - low;
        if range.is_power_of_two() {
            return low + (self.next_u64() & (range - 1));
        }
        let threshold = range.wrapping_neg() % range;
        loop {
            let r = self.next_u64();
            if r >= threshold {
                return low + (r % range);
            }
        }
    }

    /// Uniform integer in `[low, high]`, both ends reachable.
    ///
    /// Panics if `low > high`.
    pub fn range_i32_inclusive(&mut self, low: i32, high: i32) -> i32 {
        assert!(low <= high, "range_i32_inclusive: low must be <= high");
        let span = (i64::from(high) - i64::from(low) + 1) as u64;
        let offset = self.range_u64(0, span) as i64;
        (i64::from(low) + offset) as i32
    }

    /// Uniformly choose one element of `pool`. `None` only for an empty pool.
    pub fn pick<'a, T>(&mut self, pool: &'a [T]) -> Option<&'a T> {
        if pool.is_empty() {
            return None;
        }
        let index = self.range_u64(0, pool.len() as u64) as usize;
        pool.get(index)
    }
}

/// SplitMix64 step, used only to expand a seed into the 256-bit state.
fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}
