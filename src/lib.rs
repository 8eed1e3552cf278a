//! # pairing-bls: BLS signatures over selectable pairing-friendly curves
//!
//! Key generation, signing, verification and canonical fixed-width
//! serialization for BLS signatures, with the curve family chosen at runtime.
//!
//! ## Overview
//!
//! A secret key is a scalar `sk`; its public key is `sk * G2` and the
//! signature of a message `m` is `sk * H(m)` in G1. A signature verifies when
//! `e(sig, G2) == e(H(m), pk)`. The pairing engine is arkworks.
//!
//! ## Architecture
//!
//! - **[`config`]**: [`CurveId`] and the [`CurveParameters`] registry. The word
//!   count `w` of a family fixes every encoded size.
//! - **[`context`]**: the caller-held [`Curve`] handle plus an optional
//!   process-wide active curve ([`context::initialize`], [`context::active`]).
//! - **arith**: scalar and point codecs, the [`PairingBackend`] trait and its
//!   three implementations, hash-to-G1.
//! - **bls**: the public value types [`Identity`], [`SecretKey`],
//!   [`PublicKey`] and [`Signature`].
//! - **[`errors`]**: [`BackendError`] and [`Error`].
//!
//! ## Quick Example
//!
//! ```rust
//! use pairing_bls::{CurveId, SecretKey, Signature, context};
//!
//! # fn main() -> Result<(), pairing_bls::Error> {
//! let curve = context::initialize(CurveId::Bn254, 4)?;
//!
//! let sk = SecretKey::generate(curve);
//! let pk = sk.public_key();
//! let sig = sk.sign(b"this is a pen");
//! assert!(sig.verify(&pk, b"this is a pen"));
//!
//! let mut buf = [0u8; 64];
//! let written = sig.serialize_into(&mut buf)?;
//! assert_eq!(written, 8 * curve.word_count());
//! let (decoded, consumed) = Signature::deserialize(context::active()?, &buf)?;
//! assert_eq!((decoded, consumed), (sig, written));
//! # Ok(())
//! # }
//! ```
//!
//! ## Supported Curves
//!
//! | Family | `w` | Secret key / signature | Public key |
//! |--------|-----|------------------------|------------|
//! | BN254 | 4 | 32 bytes | 64 bytes |
//! | BLS12-381 | 6 | 48 bytes | 96 bytes |
//! | BLS12-377 | 6 | 48 bytes | 96 bytes |
//!
//! ## Security Considerations
//!
//! - Decoded public keys and signatures are checked for curve and subgroup
//!   membership. A public key at the point at infinity (the key of a zero
//!   scalar) is refused on decode, since it verifies the infinity signature
//!   for every message.
//! - Values remember their family; mixing families fails to verify rather
//!   than computing garbage.
//! - Switching the process-wide curve while other threads still use values of
//!   the previous family is for the caller to sequence.

mod arith;
mod bls;
pub mod config;
pub mod context;
pub mod errors;
mod serde_impl;

pub use arith::*;
pub use bls::*;
pub use config::{CurveId, CurveParameters};
pub use context::Curve;
pub use errors::*;
