use core::fmt;

use crate::arith::Scalar;
use crate::bls::ensure_consumed;
use crate::{Curve, Error};

/// Scalar label of a participant in an identity-indexed secret sharing.
///
/// Lives in the same scalar field as [`SecretKey`](crate::SecretKey) but is a
/// distinct type so the two cannot be swapped by accident. Equality compares
/// the reduced field value and the curve family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Identity(pub(crate) Scalar);

impl Identity {
    /// Negative values wrap to `r - |value|`.
    pub fn from_i64(curve: Curve, value: i64) -> Self {
        Self(Scalar::from_i64(curve.id(), value))
    }

    pub fn from_u64(curve: Curve, value: u64) -> Self {
        Self(Scalar::from_u64(curve.id(), value))
    }

    /// Parses an optionally signed decimal integer, reduced modulo the curve
    /// order.
    pub fn from_dec_str(curve: Curve, s: &str) -> Result<Self, Error> {
        Scalar::from_dec_str(curve.id(), s).map(Self)
    }

    /// Parses a big-endian hex integer (optional `0x`), which must be below
    /// the curve order.
    pub fn from_hex_str(curve: Curve, s: &str) -> Result<Self, Error> {
        Scalar::from_hex_str(curve.id(), s).map(Self)
    }

    pub fn curve(&self) -> Curve {
        Curve::new(self.0.curve())
    }

    pub fn to_dec_string(&self) -> String {
        self.0.to_dec_string()
    }

    pub fn to_hex_string(&self) -> String {
        self.0.to_hex_string()
    }

    /// Writes the `8w`-byte encoding to the front of `out`.
    pub fn serialize_into(&self, out: &mut [u8]) -> Result<usize, Error> {
        self.0.write(out)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.to_bytes()
    }

    /// Decodes the leading `8w` bytes of `bytes`, ignoring the rest.
    pub fn deserialize(curve: Curve, bytes: &[u8]) -> Result<(Self, usize), Error> {
        let scalar = Scalar::read(curve.id(), bytes)?;
        Ok((Self(scalar), curve.scalar_size()))
    }

    /// Decodes exactly one encoded identity.
    pub fn from_bytes(curve: Curve, bytes: &[u8]) -> Result<Self, Error> {
        let (id, consumed) = Self::deserialize(curve, bytes)?;
        ensure_consumed(consumed, bytes.len())?;
        Ok(id)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_dec_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CurveId;

    #[test]
    fn construction_paths_agree() {
        let curve = Curve::new(CurveId::Bn254);
        let a = Identity::from_i64(curve, 255);
        assert_eq!(a, Identity::from_u64(curve, 255));
        assert_eq!(a, Identity::from_dec_str(curve, "255").unwrap());
        assert_eq!(a, Identity::from_hex_str(curve, "0xff").unwrap());
        assert_eq!(a.to_hex_string(), "ff");
        assert_eq!(a.to_string(), "255");
    }

    #[test]
    fn minus_one_is_order_minus_one() {
        let curve = Curve::new(CurveId::Bls12_377);
        let id = Identity::from_i64(curve, -1);
        let order = curve.curve_order();
        let expected = Identity::from_dec_str(curve, &format!("-{order}")).unwrap();
        assert_eq!(expected, Identity::from_u64(curve, 0));
        assert_eq!(
            Identity::from_dec_str(curve, &id.to_dec_string()).unwrap(),
            id
        );
    }

    #[test]
    fn prefix_decoding_reports_consumed_width() {
        let curve = Curve::new(CurveId::Bls12_381);
        let id = Identity::from_i64(curve, -7);
        let mut buf = id.to_bytes();
        buf.push(b'1');

        let (back, consumed) = Identity::deserialize(curve, &buf).unwrap();
        assert_eq!((back, consumed), (id, 48));
        assert!(matches!(
            Identity::from_bytes(curve, &buf),
            Err(Error::MalformedInput(_))
        ));
    }

    #[test]
    fn identities_of_different_families_differ() {
        let a = Identity::from_u64(Curve::new(CurveId::Bls12_381), 1);
        let b = Identity::from_u64(Curve::new(CurveId::Bls12_377), 1);
        assert_ne!(a, b);
        assert_eq!(a.curve().id(), CurveId::Bls12_381);
    }
}
