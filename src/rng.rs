use std::cell::Cell;

/// The increment used to step the state of the RNG. It is coprime to 2^64 and `INCREMENT / 2^64`
/// is approximately `phi - 1`, so the underlying Weyl sequence has a period of 2^64.
pub(crate) const INCREMENT: u64 = 0x9E3779B97F4A7FFF;

// Like `INCREMENT`, these are coprime to 2^64.
const ALPHA: u128 = 0x11F9ADBB8F8DA6FFF;
const BETA: u128 = 0x1E3DF208C6781EFFF;

#[derive(Debug)]
/// A non-cryptographic random number generator for mock ROM contents.
///
/// The implementation hashes a Weyl sequence with `wyhash`, adapted from
/// https://github.com/lemire/testingRNG/blob/master/source/wyhash.h. The state lives in a `Cell`,
/// so the generator can be shared by reference within one thread.
pub struct Rng {
    /// The current state of the RNG.
    pub(crate) state: Cell<u64>,
}

impl Rng {
    /// Initializes a new RNG seeded from `std::hash::RandomState`. Every call draws fresh hasher
    /// keys, so two generators created in the same process produce different sequences.
    ///
    /// # Example
    /// ```
    /// # use romgen::Rng;
    /// let (a, b) = (Rng::new(), Rng::new());
    /// let (mut x, mut y) = ([0u8; 32], [0u8; 32]);
    /// a.bytes(&mut x);
    /// b.bytes(&mut y);
    /// assert_ne!(x, y);
    /// ```
    pub fn new() -> Self {
        use std::hash::{BuildHasher, RandomState};
        let seed = RandomState::new().hash_one(INCREMENT);
        Self::with_seed(seed)
    }

    /// Initializes the RNG with a fixed `seed`. Generators with equal seeds produce equal
    /// sequences.
    ///
    /// # Example
    /// ```
    /// # use romgen::Rng;
    /// let (a, b) = (Rng::with_seed(7), Rng::with_seed(7));
    /// let (mut x, mut y) = ([0u8; 16], [0u8; 16]);
    /// a.bytes(&mut x);
    /// b.bytes(&mut y);
    /// assert_eq!(x, y);
    /// ```
    pub fn with_seed(seed: u64) -> Self {
        Self {
            state: Cell::new(seed),
        }
    }

    /// Resets the state of the RNG to `seed`.
    pub fn reseed(&self, seed: u64) {
        self.state.set(seed);
    }

    /// Fills the slice `data` with random bytes. Any length is accepted; a trailing partial chunk
    /// consumes one extra step of the sequence.
    pub fn bytes(&self, data: &mut [u8]) {
        const CHUNK_SIZE: usize = std::mem::size_of::<u64>();
        let mut chunks = data.chunks_exact_mut(CHUNK_SIZE);
        for chunk in &mut chunks {
            chunk.copy_from_slice(&self.u64().to_ne_bytes());
        }
        let tail = chunks.into_remainder();
        if !tail.is_empty() {
            let bytes = self.u64().to_ne_bytes();
            tail.copy_from_slice(&bytes[..tail.len()]);
        }
    }

    /// Returns the next `u64` value from the pseudorandom sequence.
    pub(crate) fn u64(&self) -> u64 {
        let old_state = self.state.get();
        self.state.set(old_state.wrapping_add(INCREMENT));
        wyhash(old_state)
    }
}

impl Default for Rng {
    /// Returns a new, randomly seeded instance of `Rng`.
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
pub(crate) fn wyhash(value: u64) -> u64 {
    let mut tmp = (value as u128).wrapping_mul(ALPHA);
    tmp ^= tmp >> 64;
    tmp = tmp.wrapping_mul(BETA);
    ((tmp >> 64) ^ tmp) as _
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_handles_partial_chunks() {
        let rng = Rng::with_seed(1);
        let mut odd = [0u8; 13];
        rng.bytes(&mut odd);
        assert_ne!(odd[8..], [0u8; 5]);
        // 13 bytes = one full chunk plus a tail, so two steps were taken
        assert_eq!(rng.state.get(), 1u64.wrapping_add(INCREMENT.wrapping_mul(2)));
    }

    #[test]
    fn reseed_restarts_the_sequence() {
        let rng = Rng::with_seed(42);
        let first = rng.u64();
        rng.u64();
        rng.reseed(42);
        assert_eq!(rng.u64(), first);
    }

    #[test]
    fn wyhash_mixes_neighbouring_states() {
        assert_ne!(wyhash(0), wyhash(1));
        assert_ne!(wyhash(INCREMENT), wyhash(INCREMENT.wrapping_add(1)));
    }
}
