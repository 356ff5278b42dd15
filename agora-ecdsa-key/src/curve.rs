use crate::point::CurvePoint;
use num_bigint::BigUint;

/// Domain parameters a key pair can be checked against.
///
/// Only [`KeyPair::validate`](crate::KeyPair::validate) needs this, a key pair
/// never stores its curve.
pub trait Curve {
    type Point: CurvePoint;

    /// Order `n` of the generator's cyclic group.
    fn order(&self) -> &BigUint;

    /// Computes `scalar * G`.
    fn mul_generator(&self, scalar: &BigUint) -> Self::Point;
}
