#![deny(clippy::dbg_macro)]
#![deny(clippy::all)]

pub mod curve;
pub mod keypair;
pub mod point;

pub use curve::Curve;
pub use keypair::KeyPair;
pub use num_bigint::BigUint;
pub use point::{AffinePoint, CurvePoint};

use thiserror::Error;

/// Reasons a key pair can fail explicit validation against its curve.
///
/// Only [`KeyPair::validate`] produces these, construction never fails.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum KeyPairError {
    #[error("secret scalar is zero")]
    ZeroScalar,
    #[error("secret scalar is not below the curve order ({0} bits)")]
    ScalarOutOfRange(u64),
    #[error("public point does not match secret scalar times generator")]
    PublicPointMismatch,
}
