use core::fmt;

use rand::rngs::OsRng;
use rand_core::{CryptoRng, RngCore};
use tracing::instrument;

use crate::arith::{G2Point, Scalar, public_key, sign_message};
use crate::bls::{decode_hex, ensure_consumed};
use crate::{BackendError, Curve, Error, Signature};

/// BLS signing key.
///
/// The `Debug` output names the curve family only; the scalar is never
/// printed.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey(pub(crate) Scalar);

impl SecretKey {
    /// Samples a key uniformly from `[0, r)` using the operating system's
    /// entropy source.
    #[instrument(level = "debug", skip_all, fields(curve = %curve.id()))]
    pub fn generate(curve: Curve) -> Self {
        Self::random(curve, &mut OsRng)
    }

    /// Samples a key from a caller-supplied cryptographic generator.
    pub fn random<R: RngCore + CryptoRng + ?Sized>(curve: Curve, rng: &mut R) -> Self {
        Self(Scalar::random(curve.id(), rng))
    }

    pub fn from_dec_str(curve: Curve, s: &str) -> Result<Self, Error> {
        Scalar::from_dec_str(curve.id(), s).map(Self)
    }

    /// Parses at most `2 * 8w` big-endian hex digits; the value must be below
    /// the curve order.
    pub fn from_hex_str(curve: Curve, s: &str) -> Result<Self, Error> {
        Scalar::from_hex_str(curve.id(), s).map(Self)
    }

    pub fn to_dec_string(&self) -> String {
        self.0.to_dec_string()
    }

    pub fn to_hex_string(&self) -> String {
        self.0.to_hex_string()
    }

    pub fn curve(&self) -> Curve {
        Curve::new(self.0.curve())
    }

    /// `sk * G2`.
    pub fn public_key(&self) -> PublicKey {
        PublicKey(public_key(&self.0))
    }

    /// `sk * H(msg)`. Deterministic in the key and the message.
    #[instrument(level = "trace", skip_all, fields(curve = %self.0.curve(), msg_len = msg.len()))]
    pub fn sign(&self, msg: &[u8]) -> Signature {
        Signature(sign_message(&self.0, msg))
    }

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

    pub fn from_bytes(curve: Curve, bytes: &[u8]) -> Result<Self, Error> {
        let (sk, consumed) = Self::deserialize(curve, bytes)?;
        ensure_consumed(consumed, bytes.len())?;
        Ok(sk)
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey")
            .field("curve", &self.0.curve())
            .finish_non_exhaustive()
    }
}

/// BLS verification key, a point of G2.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PublicKey(pub(crate) G2Point);

impl PublicKey {
    pub fn curve(&self) -> Curve {
        Curve::new(self.0.curve())
    }

    /// Checks `sig` against this key. See [`Signature::verify`].
    pub fn verify(&self, msg: &[u8], sig: &Signature) -> bool {
        sig.verify(self, msg)
    }

    /// Writes the `16w`-byte compressed encoding to the front of `out`.
    pub fn serialize_into(&self, out: &mut [u8]) -> Result<usize, Error> {
        crate::context::write_exact(&self.to_bytes(), out)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.to_bytes()
    }

    /// Decodes the leading `16w` bytes of `bytes`, ignoring the rest.
    ///
    /// The point must lie on the curve and in the prime-order subgroup, and
    /// must not be the point at infinity: that key accepts the infinity
    /// signature on every message.
    pub fn deserialize(curve: Curve, bytes: &[u8]) -> Result<(Self, usize), Error> {
        let point = G2Point::read(curve.id(), bytes)?;
        if point.is_identity() {
            return Err(BackendError::InvalidPoint("public key is the point at infinity").into());
        }
        Ok((Self(point), curve.g2_size()))
    }

    pub fn from_bytes(curve: Curve, bytes: &[u8]) -> Result<Self, Error> {
        let (pk, consumed) = Self::deserialize(curve, bytes)?;
        ensure_consumed(consumed, bytes.len())?;
        Ok(pk)
    }

    /// Lowercase hex of the binary encoding.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    pub fn from_hex(curve: Curve, s: &str) -> Result<Self, Error> {
        Self::from_bytes(curve, &decode_hex(s)?)
    }
}
