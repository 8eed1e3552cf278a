//! Process-wide curve selection.
//!
//! The active curve is shared by every test in this binary, so each test
//! holds `SERIAL` for its whole duration.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::thread;

use pairing_bls::{CurveId, Error, SecretKey, context};

static SERIAL: Mutex<()> = Mutex::new(());

fn serial() -> MutexGuard<'static, ()> {
    SERIAL.lock().unwrap_or_else(PoisonError::into_inner)
}

fn init_from_many_threads(id: CurveId, word_count: usize) {
    let handles: Vec<_> = (0..100)
        .map(|_| thread::spawn(move || context::initialize(id, word_count)))
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap().is_ok());
    }
}

#[test]
fn concurrent_identical_initialization() {
    let _guard = serial();

    init_from_many_threads(CurveId::Bn254, 4);
    assert_eq!(context::active_word_count(), Ok(4));
    assert_eq!(context::active().unwrap().id(), CurveId::Bn254);

    init_from_many_threads(CurveId::Bls12_381, 6);
    assert_eq!(context::active_word_count(), Ok(6));
    assert_eq!(context::active().unwrap().id(), CurveId::Bls12_381);
}

#[test]
fn readers_never_observe_a_torn_selection() {
    let _guard = serial();
    context::initialize(CurveId::Bls12_377, 6).unwrap();

    let writers: Vec<_> = (0..8)
        .map(|_| thread::spawn(|| context::initialize(CurveId::Bls12_377, 6)))
        .collect();
    let readers: Vec<_> = (0..8)
        .map(|_| {
            thread::spawn(|| {
                for _ in 0..100 {
                    let curve = context::active().unwrap();
                    assert_eq!(curve.id(), CurveId::Bls12_377);
                    assert_eq!(curve.word_count(), 6);
                }
            })
        })
        .collect();
    for writer in writers {
        writer.join().unwrap().unwrap();
    }
    for reader in readers {
        reader.join().unwrap();
    }
}

#[test]
fn racing_different_families_leaves_a_consistent_selection() {
    let _guard = serial();

    let handles: Vec<_> = (0..64)
        .map(|i| {
            let (id, word_count) = if i % 2 == 0 {
                (CurveId::Bn254, 4)
            } else {
                (CurveId::Bls12_377, 6)
            };
            thread::spawn(move || context::initialize(id, word_count))
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap().is_ok());
    }

    let winner = context::active().unwrap();
    assert!(matches!(winner.id(), CurveId::Bn254 | CurveId::Bls12_377));
    assert_eq!(winner.word_count(), winner.id().word_count());
    assert_eq!(context::active_word_count(), Ok(winner.word_count()));
    assert_eq!(context::curve_order().unwrap(), winner.curve_order());
}

#[test]
fn mismatched_word_count_leaves_selection_untouched() {
    let _guard = serial();
    context::initialize(CurveId::Bn254, 4).unwrap();

    assert_eq!(
        context::initialize(CurveId::Bls12_381, 4),
        Err(Error::WordCountMismatch {
            curve: CurveId::Bls12_381,
            expected: 6,
            actual: 4
        })
    );
    assert_eq!(context::active().unwrap().id(), CurveId::Bn254);
    assert!(CurveId::try_from(99).is_err());
}

#[test]
fn active_curve_drives_the_value_types() {
    let _guard = serial();
    context::initialize(CurveId::Bls12_381, 6).unwrap();

    let curve = context::active().unwrap();
    let sk = SecretKey::generate(curve);
    let sig = sk.sign(b"this is a pen");
    assert_eq!(sig.to_bytes().len(), 8 * context::active_word_count().unwrap());
    assert!(sig.verify(&sk.public_key(), b"this is a pen"));
    assert_eq!(context::curve_order().unwrap(), curve.curve_order());
    assert_eq!(context::field_order().unwrap(), curve.field_order());
}
