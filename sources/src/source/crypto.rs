//! Crypto-backed source
//!
//! Draws raw bytes from the operating system's entropy channel. This engine
//! never generates randomness itself and cannot be reseeded: every draw
//! consults fresh OS entropy. It is the only engine whose availability is not
//! guaranteed, so callers should run the probe (directly or through
//! [`ready`](crate::source::ready)) before trusting it.

use std::sync::{Arc, Mutex};

use super::{Source, SourceError};

/// Entropy fill function: writes platform entropy into the whole buffer
///
/// The default is [`getrandom::getrandom`]. Tests substitute a failing fill
/// to exercise the unavailable-platform path.
pub type EntropyFill = fn(&mut [u8]) -> Result<(), getrandom::Error>;

/// Mutable state shared by every clone of a [`CryptoSource`] handle
#[derive(Debug)]
struct CryptoState {
    fill: EntropyFill,
    last_error: Option<SourceError>,
}

impl CryptoState {
    /// Fill `buf` from the entropy channel and record the outcome
    ///
    /// A successful read clears any earlier error; a failed read leaves the
    /// buffer zeroed and stores the failure under `subject`.
    fn read(&mut self, buf: &mut [u8], subject: &'static str) {
        self.last_error = (self.fill)(buf).err().map(|cause| SourceError::NotAvailable {
            subject,
            cause: cause.to_string(),
        });
    }
}

/// Cryptographically secure source backed by the OS entropy channel
///
/// `CryptoSource` is a shared handle: cloning it yields another handle to the
/// same underlying state, so all clones serialize their draws on one entropy
/// channel. Construct one handle and pass clones to whoever needs
/// crypto-backed randomness.
///
/// A draw that fails at the platform level still returns a value (the zeroed
/// read buffer); the failure itself is observable through
/// [`last_error`](Source::last_error). Callers that want to fail loudly
/// should go through [`ready`](crate::source::ready).
///
/// # Example
///
/// ```
/// use random_sources::{CryptoSource, Source};
///
/// let src = CryptoSource::new();
/// src.probe();
/// assert!(src.last_error().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct CryptoSource {
    inner: Arc<Mutex<CryptoState>>,
}

impl CryptoSource {
    /// Create a handle reading from the OS entropy channel
    pub fn new() -> Self {
        Self::with_fill(getrandom::getrandom)
    }

    /// Create a handle with an injected entropy fill function
    ///
    /// This exists so tests can stand in a fault-injecting fill and observe
    /// the unavailable-platform behavior without a broken platform.
    pub fn with_fill(fill: EntropyFill) -> Self {
        Self {
            inner: Arc::new(Mutex::new(CryptoState {
                fill,
                last_error: None,
            })),
        }
    }
}

impl Default for CryptoSource {
    fn default() -> Self {
        Self::new()
    }
}

impl Source for CryptoSource {
    /// Read 8 bytes big-endian from the entropy channel
    ///
    /// The whole read happens inside one critical section: two concurrent
    /// draws never interleave the byte reads of a single value.
    fn uint64(&self) -> u64 {
        let mut state = self.inner.lock().expect("crypto source lock poisoned");
        let mut buf = [0u8; 8];
        state.read(&mut buf, "crypto source read");
        u64::from_be_bytes(buf)
    }

    /// No-op: this engine is never reseedable
    fn seed(&self, _seed: i64) {}

    /// Try to read one byte of entropy, recording availability
    fn probe(&self) {
        let mut state = self.inner.lock().expect("crypto source lock poisoned");
        let mut buf = [0u8; 1];
        state.read(&mut buf, "crypto source probe");
    }

    fn last_error(&self) -> Option<SourceError> {
        let state = self.inner.lock().expect("crypto source lock poisoned");
        state.last_error.clone()
    }
}
