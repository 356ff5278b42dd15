use num_bigint::BigUint;

use std::hash::Hash;

/// A point given by its affine coordinates.
///
/// Implementors own their arithmetic, a key pair only reads the coordinates
/// and relies on the point's own equality and hash.
pub trait CurvePoint: Clone + Eq + Hash {
    fn x(&self) -> &BigUint;
    fn y(&self) -> &BigUint;
}

/// Plain pair of affine coordinates.
///
/// No arithmetic and no on-curve check, it just carries `(x, y)` for callers
/// that computed the point elsewhere.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AffinePoint {
    x: BigUint,
    y: BigUint,
}

impl AffinePoint {
    pub fn new(x: BigUint, y: BigUint) -> Self {
        Self { x, y }
    }

    pub fn into_coordinates(self) -> (BigUint, BigUint) {
        (self.x, self.y)
    }
}

impl CurvePoint for AffinePoint {
    #[inline(always)]
    fn x(&self) -> &BigUint {
        &self.x
    }

    #[inline(always)]
    fn y(&self) -> &BigUint {
        &self.y
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn coordinates_are_kept() {
        let point = AffinePoint::new(BigUint::from(2u32), BigUint::from(3u32));
        assert_eq!(point.x(), &BigUint::from(2u32));
        assert_eq!(point.y(), &BigUint::from(3u32));

        let (x, y) = point.into_coordinates();
        assert_eq!(x, BigUint::from(2u32));
        assert_eq!(y, BigUint::from(3u32));
    }

    #[test]
    fn structural_equality() {
        let a = AffinePoint::new(BigUint::from(4u32), BigUint::from(9u32));
        let b = AffinePoint::new(BigUint::from(4u32), BigUint::from(9u32));
        let c = AffinePoint::new(BigUint::from(9u32), BigUint::from(4u32));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
