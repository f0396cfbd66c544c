//! Availability probe and error reporting for the crypto source
//!
//! The crypto source is the only engine whose availability is not guaranteed.
//! These tests cover the working-platform path and, through an injected
//! entropy fill, the unavailable-platform path.

use std::num::NonZeroU32;
use std::sync::atomic::{AtomicBool, Ordering};

use random_sources::{ready, CryptoSource, Source, SourceError};

fn entropy_error() -> getrandom::Error {
    let code = NonZeroU32::new(getrandom::Error::CUSTOM_START + 7).unwrap();
    getrandom::Error::from(code)
}

fn failing_fill(_buf: &mut [u8]) -> Result<(), getrandom::Error> {
    Err(entropy_error())
}

static ENTROPY_RESTORED: AtomicBool = AtomicBool::new(false);

fn flaky_fill(buf: &mut [u8]) -> Result<(), getrandom::Error> {
    if ENTROPY_RESTORED.load(Ordering::SeqCst) {
        getrandom::getrandom(buf)
    } else {
        Err(entropy_error())
    }
}

#[test]
fn test_probe_then_err_is_clean_on_working_platform() {
    let src = CryptoSource::new();
    src.probe();
    assert!(src.last_error().is_none());
}

#[test]
fn test_ready_hands_out_working_source() {
    let src = ready(CryptoSource::new()).expect("platform entropy channel unavailable");
    let _ = src.uint64();
    assert!(src.last_error().is_none());
}

#[test]
fn test_ready_refuses_unavailable_source() {
    let err = ready(CryptoSource::with_fill(failing_fill))
        .expect_err("an unavailable source must not be handed out");
    assert!(matches!(
        err,
        SourceError::NotAvailable {
            subject: "crypto source probe",
            ..
        }
    ));
}

#[test]
fn test_failed_draw_is_observable_after_the_fact() {
    let src = CryptoSource::with_fill(failing_fill);

    // The draw itself soft-fails: it returns the zeroed buffer
    assert_eq!(src.uint64(), 0);

    let err = src.last_error().expect("failed draw must record an error");
    assert!(matches!(
        err,
        SourceError::NotAvailable {
            subject: "crypto source read",
            ..
        }
    ));

    // Reading the error leaves it in place
    assert!(src.last_error().is_some());
}

#[test]
fn test_error_clears_when_entropy_returns() {
    ENTROPY_RESTORED.store(false, Ordering::SeqCst);
    let src = CryptoSource::with_fill(flaky_fill);

    src.probe();
    assert!(src.last_error().is_some());

    ENTROPY_RESTORED.store(true, Ordering::SeqCst);
    let _ = src.uint64();
    assert!(src.last_error().is_none());
}

#[test]
fn test_clones_observe_shared_errors() {
    let first = CryptoSource::with_fill(failing_fill);
    let second = first.clone();

    first.probe();
    assert!(
        second.last_error().is_some(),
        "clones share one entropy channel and one error state"
    );
}

#[test]
fn test_crypto_seed_is_ignored() {
    let src = CryptoSource::new();
    src.seed(1);
    src.seed(2);
    src.probe();
    assert!(src.last_error().is_none());

    // Seeding twice with the same value must not make draws repeat
    src.seed(42);
    let first = src.uint64();
    src.seed(42);
    let second = src.uint64();
    assert_ne!(
        first, second,
        "crypto draws must consult fresh entropy regardless of seeding"
    );
}
