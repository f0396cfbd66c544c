//! Random number generator sources
//!
//! A [`Source`] produces a stream of 64-bit values under one uniform
//! contract. Callers that only depend on the contract can swap engines
//! freely: the crypto-backed [`CryptoSource`], the seeded
//! [`DeterministicSource`], the Mersenne Twister engines from
//! [`crate::twister`], or the illustrative [`SimpleSource`].
//!
//! Every source owns its own lock, so a single instance may be shared across
//! threads without external synchronization.

mod crypto;
mod deterministic;
mod simple;

// Re-export public API
pub use crypto::{CryptoSource, EntropyFill};
pub use deterministic::DeterministicSource;
pub use simple::SimpleSource;

use thiserror::Error;

/// Default seed for seedable sources constructed without an explicit seed
pub(crate) const DEFAULT_SEED: i64 = 1;

/// Bitmask clearing the sign bit of a 64-bit value
pub(crate) const INT63_MASK: u64 = u64::MAX >> 1;

/// Errors reported by a random number generator source
///
/// Only the crypto source can raise this: every other engine is pure
/// computation and is always available.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("random source not available: {subject}: {cause}")]
    NotAvailable {
        /// Which engine/operation failed
        subject: &'static str,
        /// The underlying platform failure
        cause: String,
    },
}

/// Uniform contract implemented by every random number generator source
///
/// All methods take `&self`; each engine serializes its internal state
/// mutation behind its own lock, so a shared instance may be drawn from
/// concurrently.
///
/// # Example
///
/// ```
/// use random_sources::{Mt32Source, Source};
///
/// let src = Mt32Source::new();
/// src.seed(19650218);
/// let value = src.uint64();
/// assert!(src.int63() >= 0);
/// # let _ = value;
/// ```
pub trait Source: Send + Sync {
    /// Produce the next 64-bit value
    fn uint64(&self) -> u64;

    /// Produce the next value in `[0, 2^63)`
    ///
    /// Engines without a native derivation use the default: the next
    /// `uint64()` with the sign bit masked off.
    fn int63(&self) -> i64 {
        (self.uint64() & INT63_MASK) as i64
    }

    /// Reset the internal state deterministically from `seed`
    ///
    /// A no-op for non-seedable engines (the crypto source draws fresh
    /// entropy on every call).
    fn seed(&self, seed: i64);

    /// Perform an availability probe, updating the last-error state
    ///
    /// Pure-computation engines are always available, so the default does
    /// nothing.
    fn probe(&self) {}

    /// Read the last probe/draw error without side effects
    ///
    /// Returns `None` for engines that are always available.
    fn last_error(&self) -> Option<SourceError> {
        None
    }
}

/// Run the availability probe on `source` and hand it back only if it is usable
///
/// This is the supported way to fail loudly on a platform without a working
/// entropy channel: a pending error is returned immediately and the source is
/// never handed out in a degraded state.
///
/// # Example
///
/// ```
/// use random_sources::{ready, SimpleSource};
///
/// let src = ready(SimpleSource::new()).expect("pseudo-random sources are always available");
/// assert!(src.last_error().is_none());
/// ```
pub fn ready<S: Source>(source: S) -> Result<S, SourceError> {
    // Probe first; a stale success must not mask a fresh failure
    source.probe();
    match source.last_error() {
        Some(err) => Err(err),
        None => Ok(source),
    }
}
