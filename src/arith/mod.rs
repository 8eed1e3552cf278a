//! Pairing engine adapters and shared value codecs.
//!
//! This module sits between the public value types and the arkworks pairing
//! engine. It is organized into three submodules:
//!
//! - **`field`**: Scalar codec shared by identities and secret keys -
//!   integer/decimal/hex construction, fixed-width binary encoding
//! - **`group`**: Point codec shared by public keys (G2) and signatures (G1) -
//!   compressed encoding with curve and subgroup validation
//! - **`pairing`**: The [`PairingBackend`] trait, one implementation per
//!   curve family, hash-to-G1, and the sign/verify composition
//!
//! # Backend Support
//!
//! | Backend | Curve | Word count |
//! |---------|-------|------------|
//! | [`Bn254Backend`] | BN254 | 4 |
//! | [`Bls12_381Backend`] | BLS12-381 | 6 |
//! | [`Bls12_377Backend`] | BLS12-377 | 6 |
//!
//! # Example
//!
//! ```rust
//! use ark_ff::UniformRand;
//! use pairing_bls::{Bls12_381Backend, Fr, derive_public_key, sign, verify};
//!
//! let mut rng = rand::thread_rng();
//! let sk = <Fr<Bls12_381Backend> as UniformRand>::rand(&mut rng);
//! let pk = derive_public_key::<Bls12_381Backend>(&sk);
//! let sig = sign::<Bls12_381Backend>(&sk, b"message");
//! assert!(verify::<Bls12_381Backend>(&sig, &pk, b"message"));
//! ```

pub(crate) mod field;
pub(crate) use field::Scalar;

pub(crate) mod group;
pub(crate) use group::{G1Point, G2Point};

pub(crate) mod pairing;
pub use pairing::*;
