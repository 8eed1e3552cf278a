use tracing::info;
use tracing_subscriber::fmt;

use pairing_bls::{CurveId, PublicKey, SecretKey, Signature, context};

const MESSAGE: &[u8] = b"this is a pen";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_span_events(fmt::format::FmtSpan::ENTER | fmt::format::FmtSpan::CLOSE)
        .with_target(false)
        .with_ansi(false)
        .init();

    let id: CurveId = std::env::args()
        .nth(1)
        .as_deref()
        .unwrap_or("bls12-381")
        .parse()?;
    let curve = context::initialize(id, id.word_count())?;
    info!(curve = %curve, order = %curve.curve_order(), "curve selected");

    let sk = SecretKey::generate(curve);
    let pk = sk.public_key();
    let sig = sk.sign(MESSAGE);
    info!(public_key = %pk.to_hex(), signature = %sig.to_hex(), "signed message");

    // Ship the key and signature through their binary encodings.
    let pk = PublicKey::from_bytes(curve, &pk.to_bytes())?;
    let sig = Signature::from_bytes(curve, &sig.to_bytes())?;

    info!(valid = sig.verify(&pk, MESSAGE), "verified original message");
    info!(
        valid = sig.verify(&pk, b"this is a pencil"),
        "verified tampered message"
    );
    Ok(())
}
