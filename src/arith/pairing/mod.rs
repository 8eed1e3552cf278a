use core::fmt::Debug;

use ark_ec::pairing::Pairing;
use ark_ec::short_weierstrass::{Affine, SWCurveConfig};
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::PrimeField;
use tracing::trace;

use crate::arith::{G1Point, G2Point, Scalar};
use crate::{CurveId, Error};

mod bls12_377;
mod bls12_381;
mod bn254;

pub use bls12_377::Bls12_377Backend;
pub use bls12_381::Bls12_381Backend;
pub use bn254::Bn254Backend;

/// Scalar field of a backend.
pub type Fr<B> = <<B as PairingBackend>::Engine as Pairing>::ScalarField;
/// Affine G1 point of a backend (signatures).
pub type G1<B> = <<B as PairingBackend>::Engine as Pairing>::G1Affine;
/// Affine G2 point of a backend (public keys).
pub type G2<B> = <<B as PairingBackend>::Engine as Pairing>::G2Affine;

/// Pairing engine for one curve family.
///
/// Implementations bind a family to its arkworks pairing engine and supply
/// the family's hash-to-G1 map. Everything else (scalar multiplication,
/// pairing evaluation, point validation) comes from the engine.
///
/// # Example
///
/// ```rust
/// use pairing_bls::{Bn254Backend, CurveId, PairingBackend};
///
/// assert_eq!(Bn254Backend::CURVE, CurveId::Bn254);
/// let h1 = Bn254Backend::hash_to_g1(b"abc");
/// assert_eq!(h1, Bn254Backend::hash_to_g1(b"abc"));
/// assert_ne!(h1, Bn254Backend::hash_to_g1(b"abd"));
/// ```
pub trait PairingBackend: Send + Sync + Debug + Sized + 'static {
    /// Underlying bilinear group.
    type Engine: Pairing;
    /// Base field over which G1 is defined.
    type BaseField: PrimeField;
    /// Registry identifier of this family.
    const CURVE: CurveId;

    /// Deterministically maps an arbitrary message to a non-identity point of
    /// the prime-order G1 subgroup.
    fn hash_to_g1(msg: &[u8]) -> G1<Self>;
}

/// Computes `sk * G2`.
pub fn derive_public_key<B: PairingBackend>(sk: &Fr<B>) -> G2<B> {
    (<G2<B> as AffineRepr>::generator() * *sk).into_affine()
}

/// Computes `sk * H(msg)`. Signing is deterministic.
pub fn sign<B: PairingBackend>(sk: &Fr<B>, msg: &[u8]) -> G1<B> {
    (B::hash_to_g1(msg) * *sk).into_affine()
}

/// Checks `e(sig, G2) == e(H(msg), pk)`.
pub fn verify<B: PairingBackend>(sig: &G1<B>, pk: &G2<B>, msg: &[u8]) -> bool {
    let hashed = B::hash_to_g1(msg);
    let lhs = <B::Engine as Pairing>::pairing(*sig, <G2<B> as AffineRepr>::generator());
    let rhs = <B::Engine as Pairing>::pairing(hashed, *pk);
    lhs == rhs
}

/// Try-and-increment hash to a short Weierstrass curve.
///
/// For `counter = 0, 1, ..` a BLAKE3 XOF keyed by `context` expands
/// `counter || msg` into a candidate x-coordinate plus one sign bit. The
/// first candidate that lies on the curve and survives cofactor clearing as a
/// non-identity point is returned.
pub(crate) fn try_and_increment<P>(context: &str, msg: &[u8]) -> Affine<P>
where
    P: SWCurveConfig,
    P::BaseField: PrimeField,
{
    let width = (<P::BaseField as PrimeField>::MODULUS_BIT_SIZE as usize).div_ceil(8) + 16;
    let mut buf = vec![0u8; width + 1];
    let mut counter: u32 = 0;
    loop {
        let mut hasher = blake3::Hasher::new_derive_key(context);
        hasher.update(&counter.to_le_bytes());
        hasher.update(msg);
        hasher.finalize_xof().fill(&mut buf);

        let x = P::BaseField::from_le_bytes_mod_order(&buf[..width]);
        let greatest = buf[width] & 1 == 1;
        if let Some(candidate) = Affine::<P>::get_point_from_x_unchecked(x, greatest) {
            let point = candidate.clear_cofactor();
            if !point.is_zero() {
                trace!(counter, "hashed message to curve");
                return point;
            }
        }
        counter = counter.wrapping_add(1);
    }
}

pub(crate) fn public_key(sk: &Scalar) -> G2Point {
    match sk {
        Scalar::Bn254(x) => G2Point::Bn254(derive_public_key::<Bn254Backend>(x)),
        Scalar::Bls12_381(x) => G2Point::Bls12_381(derive_public_key::<Bls12_381Backend>(x)),
        Scalar::Bls12_377(x) => G2Point::Bls12_377(derive_public_key::<Bls12_377Backend>(x)),
    }
}

pub(crate) fn sign_message(sk: &Scalar, msg: &[u8]) -> G1Point {
    match sk {
        Scalar::Bn254(x) => G1Point::Bn254(sign::<Bn254Backend>(x, msg)),
        Scalar::Bls12_381(x) => G1Point::Bls12_381(sign::<Bls12_381Backend>(x, msg)),
        Scalar::Bls12_377(x) => G1Point::Bls12_377(sign::<Bls12_377Backend>(x, msg)),
    }
}

/// Verifies across the curve-tagged representations; values from two
/// different families are reported as a [`Error::CurveMismatch`].
pub(crate) fn verify_message(sig: &G1Point, pk: &G2Point, msg: &[u8]) -> Result<bool, Error> {
    match (sig, pk) {
        (G1Point::Bn254(s), G2Point::Bn254(p)) => Ok(verify::<Bn254Backend>(s, p, msg)),
        (G1Point::Bls12_381(s), G2Point::Bls12_381(p)) => {
            Ok(verify::<Bls12_381Backend>(s, p, msg))
        }
        (G1Point::Bls12_377(s), G2Point::Bls12_377(p)) => {
            Ok(verify::<Bls12_377Backend>(s, p, msg))
        }
        _ => Err(Error::CurveMismatch {
            expected: pk.curve(),
            actual: sig.curve(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ff::{One, UniformRand};
    use rand::{SeedableRng, rngs::StdRng};

    fn sign_verify_roundtrip<B: PairingBackend>() {
        let mut rng = StdRng::seed_from_u64(11);
        let sk = <Fr<B> as UniformRand>::rand(&mut rng);
        let pk = derive_public_key::<B>(&sk);
        let sig = sign::<B>(&sk, b"this is a pen");
        assert!(verify::<B>(&sig, &pk, b"this is a pen"));
        assert!(!verify::<B>(&sig, &pk, b"this is a pencil"));

        let other = derive_public_key::<B>(&(sk + <Fr<B> as One>::one()));
        assert!(!verify::<B>(&sig, &other, b"this is a pen"));
    }

    #[test]
    fn bn254_sign_verify() {
        sign_verify_roundtrip::<Bn254Backend>();
    }

    #[test]
    fn bls12_381_sign_verify() {
        sign_verify_roundtrip::<Bls12_381Backend>();
    }

    #[test]
    fn bls12_377_sign_verify() {
        sign_verify_roundtrip::<Bls12_377Backend>();
    }

    #[test]
    fn hashed_points_are_in_the_prime_order_subgroup() {
        for msg in [&b""[..], &b"abc"[..], &[0u8; 200][..]] {
            let p381 = Bls12_381Backend::hash_to_g1(msg);
            assert!(p381.is_on_curve());
            assert!(p381.is_in_correct_subgroup_assuming_on_curve());
            let p377 = Bls12_377Backend::hash_to_g1(msg);
            assert!(p377.is_in_correct_subgroup_assuming_on_curve());
            assert!(!Bn254Backend::hash_to_g1(msg).is_zero());
        }
    }

    #[test]
    fn public_key_is_generator_multiple() {
        let one = <Fr<Bn254Backend> as One>::one();
        assert_eq!(
            derive_public_key::<Bn254Backend>(&one),
            ark_bn254::G2Affine::generator()
        );
    }

    #[test]
    fn mixed_curves_are_reported() {
        let sk = Scalar::from_u64(CurveId::Bn254, 5);
        let sig = sign_message(&sk, b"m");
        let pk = public_key(&Scalar::from_u64(CurveId::Bls12_381, 5));
        assert_eq!(
            verify_message(&sig, &pk, b"m"),
            Err(Error::CurveMismatch {
                expected: CurveId::Bls12_381,
                actual: CurveId::Bn254
            })
        );
    }
}
