use crate::curve::Curve;
use crate::point::{AffinePoint, CurvePoint};
use crate::KeyPairError;

use num_bigint::BigUint;
use num_traits::Zero;

use std::fmt;

/// ECDSA key pair: secret scalar `b` and public point `Q = b * G`.
///
/// The pair is stored as given. Nothing checks that `b` lies in `[1, n - 1]`
/// or that `Q` is `b * G`; whoever builds the pair is responsible for that,
/// or can call [`KeyPair::validate`] explicitly.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct KeyPair<P = AffinePoint> {
    secret_scalar: BigUint,
    public_point: P,
}

impl<P: CurvePoint> KeyPair<P> {
    pub fn new(secret_scalar: BigUint, public_point: P) -> Self {
        Self {
            secret_scalar,
            public_point,
        }
    }

    pub fn secret_scalar(&self) -> &BigUint {
        &self.secret_scalar
    }

    pub fn public_point(&self) -> &P {
        &self.public_point
    }

    pub fn into_parts(self) -> (BigUint, P) {
        (self.secret_scalar, self.public_point)
    }

    /// Checks the pair against the curve it was generated on.
    ///
    /// The scalar must be in `[1, n - 1]` and the public point must equal
    /// `scalar * G`.
    pub fn validate<C>(&self, curve: &C) -> Result<(), KeyPairError>
    where
        C: Curve<Point = P>,
    {
        if self.secret_scalar.is_zero() {
            log::warn!("key pair rejected: zero secret scalar");
            return Err(KeyPairError::ZeroScalar);
        }

        if &self.secret_scalar >= curve.order() {
            let bits = self.secret_scalar.bits();
            log::warn!("key pair rejected: {} bit scalar exceeds curve order", bits);
            return Err(KeyPairError::ScalarOutOfRange(bits));
        }

        if curve.mul_generator(&self.secret_scalar) != self.public_point {
            log::warn!("key pair rejected: public point mismatch");
            return Err(KeyPairError::PublicPointMismatch);
        }

        log::debug!("key pair validated against curve");
        Ok(())
    }
}

// NOTE diagnostics only, this is not an encoding and may change any time
impl<P: CurvePoint> fmt::Debug for KeyPair<P> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Secret: {:x}", self.secret_scalar)?;
        write!(
            f,
            "Public: {:x};{:x}",
            self.public_point.x(),
            self.public_point.y()
        )
    }
}
