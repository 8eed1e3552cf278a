use tracing::{instrument, warn};

use crate::arith::{G1Point, verify_message};
use crate::bls::{decode_hex, ensure_consumed};
use crate::{Curve, Error, PublicKey};

/// BLS signature, a point of G1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Signature(pub(crate) G1Point);

impl Signature {
    pub fn curve(&self) -> Curve {
        Curve::new(self.0.curve())
    }

    /// Checks `e(sig, G2) == e(H(msg), pk)`.
    ///
    /// A signature and key from different curve families never verify.
    #[instrument(level = "debug", skip_all, fields(curve = %self.0.curve(), msg_len = msg.len()))]
    pub fn verify(&self, pk: &PublicKey, msg: &[u8]) -> bool {
        match verify_message(&self.0, &pk.0, msg) {
            Ok(valid) => valid,
            Err(err) => {
                warn!(%err, "signature and public key belong to different curves");
                false
            }
        }
    }

    /// Writes the `8w`-byte compressed encoding to the front of `out`.
    pub fn serialize_into(&self, out: &mut [u8]) -> Result<usize, Error> {
        crate::context::write_exact(&self.to_bytes(), out)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.to_bytes()
    }

    /// Decodes the leading `8w` bytes of `bytes`, ignoring the rest.
    ///
    /// The point must lie on the curve and in the prime-order subgroup.
    pub fn deserialize(curve: Curve, bytes: &[u8]) -> Result<(Self, usize), Error> {
        let point = G1Point::read(curve.id(), bytes)?;
        Ok((Self(point), curve.g1_size()))
    }

    pub fn from_bytes(curve: Curve, bytes: &[u8]) -> Result<Self, Error> {
        let (sig, consumed) = Self::deserialize(curve, bytes)?;
        ensure_consumed(consumed, bytes.len())?;
        Ok(sig)
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    pub fn from_hex(curve: Curve, s: &str) -> Result<Self, Error> {
        Self::from_bytes(curve, &decode_hex(s)?)
    }
}
