//! Group point codec shared by [`PublicKey`](crate::PublicKey) (G2) and
//! [`Signature`](crate::Signature) (G1).
//!
//! Points use the engine's compressed affine encoding, which for every
//! supported family is exactly one base field element (`8w` bytes) for G1 and
//! two (`16w` bytes) for G2. Decoding checks that the point lies on the curve
//! and in the prime-order subgroup before accepting it.

use ark_ec::AffineRepr;
use ark_serialize::SerializationError;
use tracing::debug;

use crate::{BackendError, CurveId, Error};

/// G1 point tagged with the curve family it belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum G1Point {
    Bn254(ark_bn254::G1Affine),
    Bls12_381(ark_bls12_381::G1Affine),
    Bls12_377(ark_bls12_377::G1Affine),
}

/// G2 point tagged with the curve family it belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum G2Point {
    Bn254(ark_bn254::G2Affine),
    Bls12_381(ark_bls12_381::G2Affine),
    Bls12_377(ark_bls12_377::G2Affine),
}

impl G1Point {
    pub(crate) fn curve(&self) -> CurveId {
        match self {
            G1Point::Bn254(_) => CurveId::Bn254,
            G1Point::Bls12_381(_) => CurveId::Bls12_381,
            G1Point::Bls12_377(_) => CurveId::Bls12_377,
        }
    }

    pub(crate) fn to_bytes(&self) -> Vec<u8> {
        match self {
            G1Point::Bn254(p) => encode(p),
            G1Point::Bls12_381(p) => encode(p),
            G1Point::Bls12_377(p) => encode(p),
        }
    }

    pub(crate) fn read(curve: CurveId, bytes: &[u8]) -> Result<Self, Error> {
        let size = curve.parameters().g1_size();
        match curve {
            CurveId::Bn254 => decode(bytes, size).map(G1Point::Bn254),
            CurveId::Bls12_381 => decode(bytes, size).map(G1Point::Bls12_381),
            CurveId::Bls12_377 => decode(bytes, size).map(G1Point::Bls12_377),
        }
    }
}

impl G2Point {
    pub(crate) fn curve(&self) -> CurveId {
        match self {
            G2Point::Bn254(_) => CurveId::Bn254,
            G2Point::Bls12_381(_) => CurveId::Bls12_381,
            G2Point::Bls12_377(_) => CurveId::Bls12_377,
        }
    }

    pub(crate) fn is_identity(&self) -> bool {
        match self {
            G2Point::Bn254(p) => p.is_zero(),
            G2Point::Bls12_381(p) => p.is_zero(),
            G2Point::Bls12_377(p) => p.is_zero(),
        }
    }

    pub(crate) fn to_bytes(&self) -> Vec<u8> {
        match self {
            G2Point::Bn254(p) => encode(p),
            G2Point::Bls12_381(p) => encode(p),
            G2Point::Bls12_377(p) => encode(p),
        }
    }

    pub(crate) fn read(curve: CurveId, bytes: &[u8]) -> Result<Self, Error> {
        let size = curve.parameters().g2_size();
        match curve {
            CurveId::Bn254 => decode(bytes, size).map(G2Point::Bn254),
            CurveId::Bls12_381 => decode(bytes, size).map(G2Point::Bls12_381),
            CurveId::Bls12_377 => decode(bytes, size).map(G2Point::Bls12_377),
        }
    }
}

fn encode<G: AffineRepr>(point: &G) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(point.compressed_size());
    point
        .serialize_compressed(&mut bytes)
        .expect("in-memory point serialization");
    bytes
}

fn decode<G: AffineRepr>(bytes: &[u8], size: usize) -> Result<G, Error> {
    let encoded = bytes.get(..size).ok_or(Error::InputTooShort {
        required: size,
        actual: bytes.len(),
    })?;
    // Compressed decoding with validation performs the on-curve and
    // prime-order subgroup checks.
    G::deserialize_compressed(encoded).map_err(rejected_point)
}

fn rejected_point(err: SerializationError) -> Error {
    debug!(%err, "rejected point encoding");
    BackendError::InvalidPoint("not a point of the prime-order subgroup").into()
}
