use ark_bn254::{Bn254, Fq, G1Affine, g1};

use crate::arith::pairing::try_and_increment;
use crate::{CurveId, PairingBackend};

const HASH_CONTEXT: &str = "pairing-bls 2024 bn254 hash-to-G1";

#[derive(Debug)]
pub struct Bn254Backend;

impl PairingBackend for Bn254Backend {
    type Engine = Bn254;
    type BaseField = Fq;
    const CURVE: CurveId = CurveId::Bn254;

    fn hash_to_g1(msg: &[u8]) -> G1Affine {
        // BN254 G1 has cofactor one, so clearing is the identity map.
        try_and_increment::<g1::Config>(HASH_CONTEXT, msg)
    }
}
