//! BLS signatures over a selectable pairing-friendly curve.
//!
//! The four value types each remember the family they were created for:
//!
//! - **[`Identity`]**: scalar index used to label shares in threshold schemes
//! - **[`SecretKey`]**: scalar signing key
//! - **[`PublicKey`]**: `sk * G2`, a point of the second source group
//! - **[`Signature`]**: `sk * H(msg)`, a point of the first source group
//!
//! Binary encodings are fixed-width for a family of word count `w`: scalars
//! and signatures take `8w` bytes, public keys `16w`. `deserialize` reads a
//! prefix and reports how many bytes it consumed; `from_bytes` insists on the
//! exact width.
//!
//! # Example
//!
//! ```rust
//! use pairing_bls::{Curve, CurveId, PublicKey, SecretKey};
//!
//! let curve = Curve::new(CurveId::Bls12_381);
//! let sk = SecretKey::generate(curve);
//! let pk = sk.public_key();
//! let sig = sk.sign(b"this is a pen");
//!
//! let bytes = pk.to_bytes();
//! assert_eq!(bytes.len(), 96);
//! let (decoded, consumed) = PublicKey::deserialize(curve, &bytes).unwrap();
//! assert_eq!(consumed, 96);
//! assert!(sig.verify(&decoded, b"this is a pen"));
//! ```

mod identity;
mod keys;
mod signature;

pub use identity::Identity;
pub use keys::{PublicKey, SecretKey};
pub use signature::Signature;

use crate::Error;

/// Rejects input that carries bytes beyond one encoded value.
fn ensure_consumed(consumed: usize, available: usize) -> Result<(), Error> {
    if available != consumed {
        return Err(Error::MalformedInput(format!(
            "expected exactly {consumed} bytes, got {available}"
        )));
    }
    Ok(())
}

fn decode_hex(s: &str) -> Result<Vec<u8>, Error> {
    hex::decode(s).map_err(|err| Error::MalformedInput(format!("invalid hex encoding: {err}")))
}
