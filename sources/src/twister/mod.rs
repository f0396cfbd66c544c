//! Mersenne Twister engines
//!
//! From-scratch reimplementations of the reference 32-bit and 64-bit
//! Mersenne Twister. Each engine owns a fixed-size state vector and a cursor;
//! when the cursor reaches the vector length a full recurrence refresh
//! ("twist") runs before the next word is emitted.
//!
//! Both engines are seeded at construction with the reference default `5489`
//! and reproduce the published reference output bit for bit. The output is
//! easily predictable and unsuitable for security-sensitive services.

mod mt32;
mod mt64;

// Re-export public API
pub use mt32::Mt32Source;
pub use mt64::Mt64Source;

/// Default seed from the reference implementations
pub(crate) const MT_DEFAULT_SEED: i64 = 5489;
