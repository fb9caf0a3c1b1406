/// Reference-compatible draws on top of an MT19937 stream.
///
/// Seeding goes through `init_by_array`, floats carry 53 random bits built
/// from two words, and bounded draws reject-sample `getrandbits(k)`. Shuffle
/// and choice are built on the bounded draw. A given seed therefore produces
/// the same permutation and suffix picks as any other conforming
/// implementation.

use rand::RngCore;
use rand_mt::Mt19937GenRand32;

/// An explicitly seeded MT19937 stream.
#[derive(Clone, Debug)]
pub struct Twister {
    mt: Mt19937GenRand32,
}

impl Twister {
    /// Seed from a single 32-bit value.
    pub fn new(seed: u32) -> Self {
        Self::from_key(&[seed])
    }

    /// Seed from an array of 32-bit words (`init_by_array`). An empty key
    /// seeds as `[0]`.
    pub fn from_key(key: &[u32]) -> Self {
        let key: &[u32] = if key.is_empty() { &[0] } else { key };
        Self {
            mt: Mt19937GenRand32::new_with_key(key.iter().copied()),
        }
    }

    /// Next tempered 32-bit output.
    pub fn next_word(&mut self) -> u32 {
        RngCore::next_u32(&mut self.mt)
    }

    /// Uniform float in [0, 1) with 53 bits of precision.
    pub fn random(&mut self) -> f64 {
        let a = (self.next_word() >> 5) as f64;
        let b = (self.next_word() >> 6) as f64;
        (a * 67_108_864.0 + b) * (1.0 / 9_007_199_254_740_992.0)
    }

    /// An integer with `bits` random bits (`bits <= 64`). Words are consumed
    /// least-significant first; the last word keeps only its top bits.
    pub fn bits(&mut self, bits: u32) -> u64 {
        debug_assert!(bits <= 64);
        if bits == 0 {
            return 0;
        }
        if bits <= 32 {
            return u64::from(self.next_word() >> (32 - bits));
        }
        let low = u64::from(self.next_word());
        let high = u64::from(self.next_word() >> (64 - bits));
        (high << 32) | low
    }

    /// Uniform integer in `0..n` by rejection sampling. Returns 0 for `n == 0`
    /// without consuming state.
    pub fn below(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        let n = n as u64;
        let k = u64::BITS - n.leading_zeros();
        loop {
            let r = self.bits(k);
            if r < n {
                return r as usize;
            }
        }
    }

    /// In-place Fisher-Yates shuffle, walking from the last slot down.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.below(i + 1);
            items.swap(i, j);
        }
    }

    /// Pick one element uniformly, or `None` for an empty slice.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        items.get(self.below(items.len()))
    }
}
