//! Curve family selection and the parameter registry.
//!
//! Every supported pairing-friendly curve family is described by a
//! [`CurveParameters`] entry. The word count `w` of a family fixes all binary
//! encoding sizes: scalars and G1 points take `8w` bytes, G2 points `16w`.
//!
//! # Example
//!
//! ```rust
//! use pairing_bls::{CurveId, CurveParameters};
//!
//! let id: CurveId = "bls12-381".parse().expect("known curve");
//! let params = CurveParameters::get(id);
//! assert_eq!(params.word_count, 6);
//! assert_eq!(params.scalar_size(), 48);
//! ```

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// Supported pairing-friendly elliptic curve families.
///
/// - **BN254**: A 254-bit Barreto-Naehrig curve (~100 bits of security).
/// - **BLS12-381**: A 381-bit curve providing ~128 bits of security.
/// - **BLS12-377**: A 377-bit curve with a highly 2-adic scalar field,
///   security comparable to BLS12-381.
///
/// Signatures live in G1 (base field points) and public keys in G2
/// (quadratic extension field points) on every family.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum CurveId {
    /// BN254 curve, 4 words per field element
    Bn254,
    /// BLS12-381 curve, 6 words per field element
    Bls12_381,
    /// BLS12-377 curve, 6 words per field element
    Bls12_377,
}

impl CurveId {
    /// All registered families, in raw-id order.
    pub const ALL: [CurveId; 3] = [CurveId::Bn254, CurveId::Bls12_381, CurveId::Bls12_377];

    /// Returns the registry entry for this family.
    pub fn parameters(self) -> &'static CurveParameters {
        CurveParameters::get(self)
    }

    /// Number of 64-bit words composing one field element.
    pub fn word_count(self) -> usize {
        self.parameters().word_count
    }

    /// Stable numeric identifier of the family.
    pub fn raw(self) -> u32 {
        self.parameters().raw_id
    }
}

impl fmt::Display for CurveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.parameters().name)
    }
}

impl FromStr for CurveId {
    type Err = Error;

    /// Parses a family name such as `bn254`, `BLS12-381` or `bls12_377`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        REGISTRY
            .iter()
            .find(|params| params.name == normalized)
            .map(|params| params.curve)
            .ok_or_else(|| Error::UnknownCurve(s.to_owned()))
    }
}

impl TryFrom<u32> for CurveId {
    type Error = Error;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        REGISTRY
            .iter()
            .find(|params| params.raw_id == raw)
            .map(|params| params.curve)
            .ok_or_else(|| Error::UnknownCurve(raw.to_string()))
    }
}

/// Immutable description of one curve family.
///
/// The curve and field orders are not stored here: they are read from the
/// pairing engine on demand through [`Curve`](crate::Curve) so the registry
/// can never disagree with the arithmetic actually performed.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct CurveParameters {
    /// The family this entry describes
    pub curve: CurveId,
    /// Stable numeric identifier
    pub raw_id: u32,
    /// Canonical lowercase name
    pub name: &'static str,
    /// Number of 64-bit words per field element
    pub word_count: usize,
}

static REGISTRY: [CurveParameters; 3] = [
    CurveParameters {
        curve: CurveId::Bn254,
        raw_id: 0,
        name: "bn254",
        word_count: 4,
    },
    CurveParameters {
        curve: CurveId::Bls12_381,
        raw_id: 1,
        name: "bls12-381",
        word_count: 6,
    },
    CurveParameters {
        curve: CurveId::Bls12_377,
        raw_id: 2,
        name: "bls12-377",
        word_count: 6,
    },
];

impl CurveParameters {
    /// Looks up the registry entry of `curve`.
    pub fn get(curve: CurveId) -> &'static CurveParameters {
        match curve {
            CurveId::Bn254 => &REGISTRY[0],
            CurveId::Bls12_381 => &REGISTRY[1],
            CurveId::Bls12_377 => &REGISTRY[2],
        }
    }

    /// Encoded size of a scalar (identity or secret key): `8w` bytes.
    pub fn scalar_size(&self) -> usize {
        self.word_count * 8
    }

    /// Encoded size of a G1 point (signature): `8w` bytes.
    pub fn g1_size(&self) -> usize {
        self.word_count * 8
    }

    /// Encoded size of a G2 point (public key): `16w` bytes.
    pub fn g2_size(&self) -> usize {
        self.word_count * 16
    }

    /// Checks that `word_count` is the one this family requires.
    pub fn ensure_word_count(&self, word_count: usize) -> Result<(), Error> {
        if word_count != self.word_count {
            return Err(Error::WordCountMismatch {
                curve: self.curve,
                expected: self.word_count,
                actual: word_count,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_matches_identifiers() {
        for id in CurveId::ALL {
            assert_eq!(CurveParameters::get(id).curve, id);
            assert_eq!(CurveId::try_from(id.raw()).expect("raw id"), id);
        }
    }

    #[test]
    fn encoded_sizes_follow_word_count() {
        let bn = CurveId::Bn254.parameters();
        assert_eq!((bn.scalar_size(), bn.g1_size(), bn.g2_size()), (32, 32, 64));
        let bls = CurveId::Bls12_381.parameters();
        assert_eq!((bls.scalar_size(), bls.g1_size(), bls.g2_size()), (48, 48, 96));
    }

    #[test]
    fn parses_names_leniently() {
        assert_eq!("BN254".parse::<CurveId>().unwrap(), CurveId::Bn254);
        assert_eq!("bls12_381".parse::<CurveId>().unwrap(), CurveId::Bls12_381);
        assert_eq!(" bls12-377 ".parse::<CurveId>().unwrap(), CurveId::Bls12_377);
        assert!(matches!(
            "secp256k1".parse::<CurveId>(),
            Err(Error::UnknownCurve(name)) if name == "secp256k1"
        ));
        assert!(CurveId::try_from(7).is_err());
    }

    #[test]
    fn rejects_wrong_word_count() {
        let err = CurveId::Bn254.parameters().ensure_word_count(6).unwrap_err();
        assert_eq!(
            err,
            Error::WordCountMismatch {
                curve: CurveId::Bn254,
                expected: 4,
                actual: 6
            }
        );
    }

    #[test]
    fn curve_id_serde_roundtrip() {
        let json = serde_json::to_string(&CurveId::Bls12_377).unwrap();
        let back: CurveId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CurveId::Bls12_377);
    }
}
