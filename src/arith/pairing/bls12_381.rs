use ark_bls12_381::{Bls12_381, Fq, G1Affine, g1};

use crate::arith::pairing::try_and_increment;
use crate::{CurveId, PairingBackend};

const HASH_CONTEXT: &str = "pairing-bls 2024 bls12-381 hash-to-G1";

#[derive(Debug)]
pub struct Bls12_381Backend;

impl PairingBackend for Bls12_381Backend {
    type Engine = Bls12_381;
    type BaseField = Fq;
    const CURVE: CurveId = CurveId::Bls12_381;

    fn hash_to_g1(msg: &[u8]) -> G1Affine {
        try_and_increment::<g1::Config>(HASH_CONTEXT, msg)
    }
}
