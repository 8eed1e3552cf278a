//! Curve handles and the optional process-wide active curve.
//!
//! A [`Curve`] is a small `Copy` value naming one registered family. Every
//! constructor and decoder of the signature types takes one explicitly, so
//! values created for different families can coexist in one process.
//!
//! For callers that prefer a single ambient selection, [`initialize`] stores a
//! handle in a process-wide slot guarded by a reader-writer lock and
//! [`active`] reads it back. Switching families while other threads are still
//! working with values of the previous family is the caller's responsibility
//! to sequence; the slot itself is never torn.
//!
//! # Example
//!
//! ```rust
//! use pairing_bls::{Curve, CurveId};
//!
//! let curve = Curve::with_word_count(CurveId::Bn254, 4).expect("matching word count");
//! assert_eq!(curve.g2_size(), 64);
//! assert_eq!(
//!     curve.curve_order(),
//!     "21888242871839275222246405745257275088548364400416034343698204186575808495617"
//! );
//! ```

use core::fmt;
use std::sync::{PoisonError, RwLock};

use num_bigint::BigUint;
use tracing::{debug, info, instrument, trace};

use crate::arith::field::modulus;
use crate::{
    Bls12_377Backend, Bls12_381Backend, Bn254Backend, CurveId, CurveParameters, Error, Fr,
    PairingBackend,
};

/// Caller-held reference to one curve family's parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Curve {
    params: &'static CurveParameters,
}

impl Curve {
    /// Handle for `id`.
    pub fn new(id: CurveId) -> Self {
        Self {
            params: CurveParameters::get(id),
        }
    }

    /// Handle for `id`, refusing a word count the family does not use.
    pub fn with_word_count(id: CurveId, word_count: usize) -> Result<Self, Error> {
        let curve = Self::new(id);
        curve.params.ensure_word_count(word_count)?;
        Ok(curve)
    }

    pub fn id(&self) -> CurveId {
        self.params.curve
    }

    pub fn parameters(&self) -> &'static CurveParameters {
        self.params
    }

    pub fn word_count(&self) -> usize {
        self.params.word_count
    }

    /// Encoded size of an identity or secret key.
    pub fn scalar_size(&self) -> usize {
        self.params.scalar_size()
    }

    /// Encoded size of a signature.
    pub fn g1_size(&self) -> usize {
        self.params.g1_size()
    }

    /// Encoded size of a public key.
    pub fn g2_size(&self) -> usize {
        self.params.g2_size()
    }

    /// Order of the prime-order subgroups (the scalar field size) in base 10.
    pub fn curve_order(&self) -> String {
        self.orders().0.to_str_radix(10)
    }

    /// Order of the base field in base 10.
    pub fn field_order(&self) -> String {
        self.orders().1.to_str_radix(10)
    }

    /// Writes the decimal curve order into `out` and returns its length.
    ///
    /// Nothing is written when `out` is too small.
    pub fn write_curve_order(&self, out: &mut [u8]) -> Result<usize, Error> {
        write_exact(self.curve_order().as_bytes(), out)
    }

    /// Writes the decimal field order into `out` and returns its length.
    pub fn write_field_order(&self, out: &mut [u8]) -> Result<usize, Error> {
        write_exact(self.field_order().as_bytes(), out)
    }

    fn orders(&self) -> (BigUint, BigUint) {
        match self.id() {
            CurveId::Bn254 => orders::<Bn254Backend>(),
            CurveId::Bls12_381 => orders::<Bls12_381Backend>(),
            CurveId::Bls12_377 => orders::<Bls12_377Backend>(),
        }
    }
}

impl From<CurveId> for Curve {
    fn from(id: CurveId) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (w = {})", self.params.name, self.params.word_count)
    }
}

fn orders<B: PairingBackend>() -> (BigUint, BigUint) {
    (modulus::<Fr<B>>(), modulus::<B::BaseField>())
}

/// Copies `bytes` to the front of `out`, or fails without writing.
pub(crate) fn write_exact(bytes: &[u8], out: &mut [u8]) -> Result<usize, Error> {
    let available = out.len();
    let dst = out.get_mut(..bytes.len()).ok_or(Error::BufferTooSmall {
        required: bytes.len(),
        available,
    })?;
    dst.copy_from_slice(bytes);
    Ok(bytes.len())
}

// Holds a single `Copy` handle, so a writer that panicked cannot leave it
// half-updated and poisoning is ignored.
static ACTIVE: RwLock<Option<Curve>> = RwLock::new(None);

/// Selects `id` as the process-wide active family.
///
/// Fails without touching the current selection when `word_count` does not
/// match the family. Repeating the call with the active family changes
/// nothing; calling it with another family replaces the selection.
#[instrument(level = "debug", skip_all, fields(curve = %id, word_count))]
pub fn initialize(id: CurveId, word_count: usize) -> Result<Curve, Error> {
    let curve = Curve::with_word_count(id, word_count)?;
    let mut slot = ACTIVE.write().unwrap_or_else(PoisonError::into_inner);
    match slot.replace(curve) {
        None => debug!("curve context initialized"),
        Some(previous) if previous != curve => {
            info!(previous = %previous.id(), "active curve switched")
        }
        Some(_) => trace!("curve already active"),
    }
    Ok(curve)
}

/// Returns the process-wide active family.
pub fn active() -> Result<Curve, Error> {
    let slot = *ACTIVE.read().unwrap_or_else(PoisonError::into_inner);
    slot.ok_or(Error::Uninitialized)
}

/// Word count of the active family.
pub fn active_word_count() -> Result<usize, Error> {
    active().map(|curve| curve.word_count())
}

/// Decimal curve order of the active family.
pub fn curve_order() -> Result<String, Error> {
    active().map(|curve| curve.curve_order())
}

/// Decimal field order of the active family.
pub fn field_order() -> Result<String, Error> {
    active().map(|curve| curve.field_order())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_follow_the_family() {
        let curve = Curve::new(CurveId::Bls12_377);
        assert_eq!(curve.word_count(), 6);
        assert_eq!(
            (curve.scalar_size(), curve.g1_size(), curve.g2_size()),
            (48, 48, 96)
        );
        assert_eq!(curve.to_string(), "bls12-377 (w = 6)");
    }

    #[test]
    fn word_count_is_validated() {
        assert!(Curve::with_word_count(CurveId::Bls12_381, 6).is_ok());
        assert_eq!(
            Curve::with_word_count(CurveId::Bls12_381, 4),
            Err(Error::WordCountMismatch {
                curve: CurveId::Bls12_381,
                expected: 6,
                actual: 4
            })
        );
    }

    #[test]
    fn field_order_exceeds_curve_order_on_bls_families() {
        for id in [CurveId::Bls12_381, CurveId::Bls12_377] {
            let curve = Curve::new(id);
            assert!(curve.field_order().len() > curve.curve_order().len());
        }
    }

    #[test]
    fn order_writers_report_length_or_refuse() {
        let curve = Curve::new(CurveId::Bn254);
        let order = curve.curve_order();

        let mut exact = vec![0u8; order.len()];
        assert_eq!(curve.write_curve_order(&mut exact), Ok(order.len()));
        assert_eq!(exact, order.as_bytes());

        let mut short = vec![b'x'; order.len() - 1];
        assert_eq!(
            curve.write_curve_order(&mut short),
            Err(Error::BufferTooSmall {
                required: order.len(),
                available: order.len() - 1
            })
        );
        assert!(short.iter().all(|&b| b == b'x'));

        let mut roomy = [0u8; 256];
        let written = curve.write_field_order(&mut roomy).unwrap();
        assert_eq!(&roomy[..written], curve.field_order().as_bytes());
    }
}
