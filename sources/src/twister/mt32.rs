//! 32-bit Mersenne Twister (MT19937)

use std::sync::Mutex;

use super::MT_DEFAULT_SEED;
use crate::source::Source;

/// State vector length
const N: usize = 624;
/// Middle-word offset of the twist recurrence
const M: usize = 397;
/// Constant vector a
const MATRIX_A: u32 = 0x9908_b0df;
/// Most significant w-r bits
const UPPER_MASK: u32 = 0x8000_0000;
/// Least significant r bits
const LOWER_MASK: u32 = 0x7fff_ffff;
/// Multiplier of the seeding recurrence
const INIT_MULTIPLIER: u32 = 1_812_433_253;

/// Lock-guarded generator state: the word vector plus a cursor in `[0, N]`
#[derive(Debug)]
struct Mt32State {
    vector: [u32; N],
    cursor: usize,
}

impl Mt32State {
    /// Initialize the state vector from `seed`, truncated to word width
    ///
    /// Leaves the cursor at `N` so the next draw performs a full twist.
    fn reseed(&mut self, seed: i64) {
        self.vector[0] = seed as u32;
        for i in 1..N {
            let prev = self.vector[i - 1];
            self.vector[i] = INIT_MULTIPLIER
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(i as u32);
        }
        self.cursor = N;
    }

    /// Refresh the whole state vector with the twist recurrence
    fn twist(&mut self) {
        for k in 0..N {
            let y = (self.vector[k] & UPPER_MASK) | (self.vector[(k + 1) % N] & LOWER_MASK);
            let mag = if y & 1 != 0 { MATRIX_A } else { 0 };
            self.vector[k] = self.vector[(k + M) % N] ^ (y >> 1) ^ mag;
        }
        self.cursor = 0;
    }

    /// Emit the next tempered 32-bit word
    fn next_word(&mut self) -> u32 {
        if self.cursor >= N {
            self.twist();
        }
        let mut y = self.vector[self.cursor];
        self.cursor += 1;
        // Tempering
        y ^= y >> 11;
        y ^= (y << 7) & 0x9d2c_5680;
        y ^= (y << 15) & 0xefc6_0000;
        y ^= y >> 18;
        y
    }
}

/// 32-bit Mersenne Twister source
///
/// Reimplements the reference MT19937 algorithm. 64-bit values are composed
/// from two successive tempered words (`low | high << 32`), drawn inside one
/// critical section. The output is easily predictable and unsuitable for
/// security-sensitive services.
///
/// # Example
///
/// ```
/// use random_sources::{Mt32Source, Source};
///
/// let a = Mt32Source::with_seed(19650218);
/// let b = Mt32Source::with_seed(19650218);
/// assert_eq!(a.uint64(), b.uint64());
/// ```
#[derive(Debug)]
pub struct Mt32Source {
    state: Mutex<Mt32State>,
}

impl Mt32Source {
    /// Create a source seeded with the reference default `5489`
    pub fn new() -> Self {
        Self::with_seed(MT_DEFAULT_SEED)
    }

    /// Create a source seeded with `seed`
    pub fn with_seed(seed: i64) -> Self {
        let mut state = Mt32State {
            vector: [0; N],
            cursor: N,
        };
        state.reseed(seed);
        Self {
            state: Mutex::new(state),
        }
    }
}

impl Default for Mt32Source {
    fn default() -> Self {
        Self::new()
    }
}

impl Source for Mt32Source {
    /// Concatenate two successive tempered words into one 64-bit value
    fn uint64(&self) -> u64 {
        let mut state = self.state.lock().expect("mt32 state lock poisoned");
        let low = state.next_word();
        let high = state.next_word();
        u64::from(low) | u64::from(high) << 32
    }

    /// Reinitialize the state vector from `seed`
    fn seed(&self, seed: i64) {
        let mut state = self.state.lock().expect("mt32 state lock poisoned");
        state.reseed(seed);
    }
}
