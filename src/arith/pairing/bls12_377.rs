use ark_bls12_377::{Bls12_377, Fq, G1Affine, g1};

use crate::arith::pairing::try_and_increment;
use crate::{CurveId, PairingBackend};

const HASH_CONTEXT: &str = "pairing-bls 2024 bls12-377 hash-to-G1";

#[derive(Debug)]
pub struct Bls12_377Backend;

impl PairingBackend for Bls12_377Backend {
    type Engine = Bls12_377;
    type BaseField = Fq;
    const CURVE: CurveId = CurveId::Bls12_377;

    fn hash_to_g1(msg: &[u8]) -> G1Affine {
        try_and_increment::<g1::Config>(HASH_CONTEXT, msg)
    }
}
