//! Error types for the crate.
//!
//! This module defines low-level backend errors returned by the pairing
//! engine adapters (decoding of field elements and curve points) as well as
//! the high-level `Error` type returned by the public API.
//!
//! The errors are implemented with `thiserror` so they are easy to convert
//! and debug in higher-level code.
//!
//! # Examples
//!
//! ```rust
//! use pairing_bls::{Curve, CurveId, Error, Signature};
//!
//! let curve = Curve::new(CurveId::Bn254);
//! let err = Signature::from_bytes(curve, &[0u8; 3]).unwrap_err();
//! assert!(matches!(err, Error::InputTooShort { required: 32, actual: 3 }));
//! ```

use thiserror::Error;

use crate::config::CurveId;

/// Errors bubbled up from the pairing engine adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    #[error("serialization failure: {0}")]
    Serialization(&'static str),
    #[error("invalid curve point: {0}")]
    InvalidPoint(&'static str),
}

/// High-level errors returned by the signature API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("unknown curve family: {0}")]
    UnknownCurve(String),
    #[error("word count mismatch for {curve}: expected {expected}, got {actual}")]
    WordCountMismatch {
        curve: CurveId,
        expected: usize,
        actual: usize,
    },
    #[error("no curve has been initialized")]
    Uninitialized,
    #[error("output buffer too small: required {required}, available {available}")]
    BufferTooSmall { required: usize, available: usize },
    #[error("input too short: required {required}, got {actual}")]
    InputTooShort { required: usize, actual: usize },
    #[error("malformed input: {0}")]
    MalformedInput(String),
    #[error("curve mismatch: expected {expected}, got {actual}")]
    CurveMismatch { expected: CurveId, actual: CurveId },
    #[error("backend error: {0}")]
    Backend(#[from] BackendError),
}
