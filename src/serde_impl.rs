//! Serde serialization support for the signature types.
//!
//! Every value is written as a struct holding its curve family and its
//! binary encoding:
//!
//! ```json
//! { "curve": "Bls12_381", "bytes": [ ... 96 bytes ... ] }
//! ```
//!
//! Deserialization goes through the same decoders as
//! [`PublicKey::from_bytes`] and friends, so the byte length must match the
//! family exactly and points are checked for curve and subgroup membership.
//!
//! # Example
//!
//! ```rust
//! use pairing_bls::{Curve, CurveId, SecretKey, Signature};
//!
//! let sk = SecretKey::generate(Curve::new(CurveId::Bn254));
//! let sig = sk.sign(b"hello");
//! let json = serde_json::to_string(&sig).unwrap();
//! let back: Signature = serde_json::from_str(&json).unwrap();
//! assert_eq!(back, sig);
//! ```

use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Curve, CurveId, Error, Identity, PublicKey, SecretKey, Signature};

#[derive(Deserialize)]
struct EncodedHelper {
    curve: CurveId,
    bytes: Vec<u8>,
}

fn serialize_encoded<S>(
    name: &'static str,
    curve: Curve,
    bytes: &[u8],
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    use serde::ser::SerializeStruct;
    let mut state = serializer.serialize_struct(name, 2)?;
    state.serialize_field("curve", &curve.id())?;
    state.serialize_field("bytes", bytes)?;
    state.end()
}

fn deserialize_encoded<'de, D, T>(
    deserializer: D,
    decode: fn(Curve, &[u8]) -> Result<T, Error>,
) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
{
    let helper = EncodedHelper::deserialize(deserializer)?;
    decode(Curve::new(helper.curve), &helper.bytes).map_err(de::Error::custom)
}

impl Serialize for Identity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_encoded("Identity", self.curve(), &self.to_bytes(), serializer)
    }
}

impl<'de> Deserialize<'de> for Identity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_encoded(deserializer, Identity::from_bytes)
    }
}

impl Serialize for SecretKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_encoded("SecretKey", self.curve(), &self.to_bytes(), serializer)
    }
}

impl<'de> Deserialize<'de> for SecretKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_encoded(deserializer, SecretKey::from_bytes)
    }
}

impl Serialize for PublicKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_encoded("PublicKey", self.curve(), &self.to_bytes(), serializer)
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_encoded(deserializer, PublicKey::from_bytes)
    }
}

impl Serialize for Signature {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_encoded("Signature", self.curve(), &self.to_bytes(), serializer)
    }
}

impl<'de> Deserialize<'de> for Signature {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_encoded(deserializer, Signature::from_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn values_roundtrip_through_json() {
        let mut rng = StdRng::seed_from_u64(5);
        for id in CurveId::ALL {
            let curve = Curve::new(id);
            let sk = SecretKey::random(curve, &mut rng);
            let pk = sk.public_key();
            let sig = sk.sign(b"serde");
            let ident = Identity::from_i64(curve, -3);

            let sk_back: SecretKey =
                serde_json::from_str(&serde_json::to_string(&sk).unwrap()).unwrap();
            let pk_back: PublicKey =
                serde_json::from_str(&serde_json::to_string(&pk).unwrap()).unwrap();
            let sig_back: Signature =
                serde_json::from_str(&serde_json::to_string(&sig).unwrap()).unwrap();
            let id_back: Identity =
                serde_json::from_str(&serde_json::to_string(&ident).unwrap()).unwrap();

            assert_eq!(sk_back, sk);
            assert_eq!(pk_back, pk);
            assert_eq!(sig_back, sig);
            assert_eq!(id_back, ident);
        }
    }

    #[test]
    fn json_records_the_curve() {
        let ident = Identity::from_u64(Curve::new(CurveId::Bls12_377), 1);
        let value: serde_json::Value = serde_json::to_value(ident).unwrap();
        assert_eq!(value["curve"], "Bls12_377");
        assert_eq!(value["bytes"].as_array().unwrap().len(), 48);
    }

    #[test]
    fn rejects_width_of_another_family() {
        let sig = SecretKey::from_dec_str(Curve::new(CurveId::Bn254), "11")
            .unwrap()
            .sign(b"serde");
        let mut value = serde_json::to_value(sig).unwrap();
        value["curve"] = serde_json::json!("Bls12_381");
        assert!(serde_json::from_value::<Signature>(value).is_err());
    }
}
