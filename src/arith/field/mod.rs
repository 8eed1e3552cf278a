//! Scalar field codec shared by [`Identity`](crate::Identity) and
//! [`SecretKey`](crate::SecretKey).
//!
//! Scalars are encoded as the engine's canonical little-endian field bytes,
//! zero-padded to the `8w` bytes of the owning curve family. Decoding is a
//! prefix operation: exactly `8w` bytes are consumed, anything after them is
//! ignored.

use ark_ff::{BigInteger, PrimeField};
use ark_serialize::SerializationError;
use ark_std::UniformRand;
use num_bigint::BigUint;
use rand_core::{CryptoRng, RngCore};
use tracing::trace;

use crate::{BackendError, CurveId, Error};

/// Scalar field element tagged with the curve family it belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Scalar {
    Bn254(ark_bn254::Fr),
    Bls12_381(ark_bls12_381::Fr),
    Bls12_377(ark_bls12_377::Fr),
}

macro_rules! with_scalar {
    ($scalar:expr, $x:ident => $body:expr) => {
        match $scalar {
            Scalar::Bn254($x) => $body,
            Scalar::Bls12_381($x) => $body,
            Scalar::Bls12_377($x) => $body,
        }
    };
}

impl Scalar {
    pub(crate) fn curve(&self) -> CurveId {
        match self {
            Scalar::Bn254(_) => CurveId::Bn254,
            Scalar::Bls12_381(_) => CurveId::Bls12_381,
            Scalar::Bls12_377(_) => CurveId::Bls12_377,
        }
    }

    pub(crate) fn from_i64(curve: CurveId, value: i64) -> Self {
        match curve {
            CurveId::Bn254 => Scalar::Bn254(from_i64(value)),
            CurveId::Bls12_381 => Scalar::Bls12_381(from_i64(value)),
            CurveId::Bls12_377 => Scalar::Bls12_377(from_i64(value)),
        }
    }

    pub(crate) fn from_u64(curve: CurveId, value: u64) -> Self {
        match curve {
            CurveId::Bn254 => Scalar::Bn254(value.into()),
            CurveId::Bls12_381 => Scalar::Bls12_381(value.into()),
            CurveId::Bls12_377 => Scalar::Bls12_377(value.into()),
        }
    }

    pub(crate) fn from_dec_str(curve: CurveId, s: &str) -> Result<Self, Error> {
        match curve {
            CurveId::Bn254 => from_dec_str(s).map(Scalar::Bn254),
            CurveId::Bls12_381 => from_dec_str(s).map(Scalar::Bls12_381),
            CurveId::Bls12_377 => from_dec_str(s).map(Scalar::Bls12_377),
        }
    }

    pub(crate) fn from_hex_str(curve: CurveId, s: &str) -> Result<Self, Error> {
        let max_digits = 2 * curve.parameters().scalar_size();
        match curve {
            CurveId::Bn254 => from_hex_str(s, max_digits).map(Scalar::Bn254),
            CurveId::Bls12_381 => from_hex_str(s, max_digits).map(Scalar::Bls12_381),
            CurveId::Bls12_377 => from_hex_str(s, max_digits).map(Scalar::Bls12_377),
        }
    }

    pub(crate) fn random<R: RngCore + CryptoRng + ?Sized>(curve: CurveId, rng: &mut R) -> Self {
        match curve {
            CurveId::Bn254 => Scalar::Bn254(ark_bn254::Fr::rand(rng)),
            CurveId::Bls12_381 => Scalar::Bls12_381(ark_bls12_381::Fr::rand(rng)),
            CurveId::Bls12_377 => Scalar::Bls12_377(ark_bls12_377::Fr::rand(rng)),
        }
    }

    pub(crate) fn to_dec_string(&self) -> String {
        with_scalar!(self, x => to_biguint(x).to_str_radix(10))
    }

    pub(crate) fn to_hex_string(&self) -> String {
        with_scalar!(self, x => to_biguint(x).to_str_radix(16))
    }

    pub(crate) fn to_bytes(&self) -> Vec<u8> {
        let size = self.curve().parameters().scalar_size();
        with_scalar!(self, x => encode(x, size))
    }

    pub(crate) fn write(&self, out: &mut [u8]) -> Result<usize, Error> {
        crate::context::write_exact(&self.to_bytes(), out)
    }

    pub(crate) fn read(curve: CurveId, bytes: &[u8]) -> Result<Self, Error> {
        let size = curve.parameters().scalar_size();
        match curve {
            CurveId::Bn254 => decode(bytes, size).map(Scalar::Bn254),
            CurveId::Bls12_381 => decode(bytes, size).map(Scalar::Bls12_381),
            CurveId::Bls12_377 => decode(bytes, size).map(Scalar::Bls12_377),
        }
    }
}

/// Returns the modulus of `F` as an arbitrary-precision integer.
pub(crate) fn modulus<F: PrimeField>() -> BigUint {
    BigUint::from_bytes_le(&F::MODULUS.to_bytes_le())
}

fn to_biguint<F: PrimeField>(x: &F) -> BigUint {
    BigUint::from_bytes_le(&x.into_bigint().to_bytes_le())
}

/// Maps a signed integer into the field; negative values wrap to `r - |v|`.
pub(crate) fn from_i64<F: PrimeField>(value: i64) -> F {
    let magnitude = F::from(value.unsigned_abs());
    if value < 0 { -magnitude } else { magnitude }
}

/// Parses an optionally signed base-10 literal and reduces it modulo `r`.
pub(crate) fn from_dec_str<F: PrimeField>(s: &str) -> Result<F, Error> {
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::MalformedInput(format!("invalid decimal integer {s:?}")));
    }
    let value = BigUint::parse_bytes(digits.as_bytes(), 10)
        .ok_or_else(|| Error::MalformedInput(format!("invalid decimal integer {s:?}")))?;
    let reduced = F::from_le_bytes_mod_order(&value.to_bytes_le());
    Ok(if negative { -reduced } else { reduced })
}

/// Parses a big-endian hex literal of at most `max_digits` digits.
///
/// Unlike decimal input, hex input must already be reduced: values `>= r`
/// are rejected.
pub(crate) fn from_hex_str<F: PrimeField>(s: &str, max_digits: usize) -> Result<F, Error> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    if digits.is_empty() || digits.len() > max_digits {
        return Err(Error::MalformedInput(format!(
            "hex scalar must have 1 to {max_digits} digits, got {}",
            digits.len()
        )));
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::MalformedInput(format!("invalid hex scalar {s:?}")));
    }
    let value = BigUint::parse_bytes(digits.as_bytes(), 16)
        .ok_or_else(|| Error::MalformedInput(format!("invalid hex scalar {s:?}")))?;
    if value >= modulus::<F>() {
        return Err(Error::MalformedInput(
            "hex scalar is not reduced modulo the curve order".into(),
        ));
    }
    Ok(F::from_le_bytes_mod_order(&value.to_bytes_le()))
}

fn encode<F: PrimeField>(x: &F, size: usize) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(size);
    x.serialize_compressed(&mut bytes)
        .expect("in-memory scalar serialization");
    bytes.resize(size, 0);
    bytes
}

fn decode<F: PrimeField>(bytes: &[u8], size: usize) -> Result<F, Error> {
    let encoded = bytes.get(..size).ok_or(Error::InputTooShort {
        required: size,
        actual: bytes.len(),
    })?;
    let width = F::zero().compressed_size().min(size);
    let (value, padding) = encoded.split_at(width);
    if padding.iter().any(|&b| b != 0) {
        return Err(BackendError::Serialization("non-zero scalar padding").into());
    }
    F::deserialize_compressed(value).map_err(rejected_scalar)
}

fn rejected_scalar(err: SerializationError) -> Error {
    trace!(%err, "rejected scalar encoding");
    BackendError::Serialization("scalar not reduced modulo curve order").into()
}
