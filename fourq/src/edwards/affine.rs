// -*- mode: rust; -*-
//
// This file is part of fourq.
// See LICENSE for licensing information.

use super::{CompressedPoint, EdwardsPoint};
use crate::backend::serial::u64::constants;
use crate::extension::ExtensionFieldElement;
use crate::traits::{Identity, ValidityCheck};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

#[cfg(feature = "zeroize")]
use zeroize::DefaultIsZeroes;

/// Affine point \\( (x, y) \\) on FourQ.
#[derive(Copy, Clone, Debug)]
pub struct AffinePoint {
    pub(super) x: ExtensionFieldElement,
    pub(super) y: ExtensionFieldElement,
}

impl ConstantTimeEq for AffinePoint {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y)
    }
}

impl ConditionallySelectable for AffinePoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: ExtensionFieldElement::conditional_select(&a.x, &b.x, choice),
            y: ExtensionFieldElement::conditional_select(&a.y, &b.y, choice),
        }
    }
}

impl Default for AffinePoint {
    fn default() -> AffinePoint {
        AffinePoint::identity()
    }
}

impl Identity for AffinePoint {
    fn identity() -> AffinePoint {
        AffinePoint {
            x: ExtensionFieldElement::ZERO,
            y: ExtensionFieldElement::ONE,
        }
    }
}

impl PartialEq for AffinePoint {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for AffinePoint {}

#[cfg(feature = "zeroize")]
impl DefaultIsZeroes for AffinePoint {}

impl ValidityCheck for AffinePoint {
    /// Evaluate \\( -x^2 + y^2 = 1 + d x^2 y^2 \\) with exact equality.
    fn is_valid(&self) -> bool {
        let xx = self.x.square();
        let yy = self.y.square();
        let lhs = &yy - &xx;
        let rhs = &ExtensionFieldElement::ONE + &(&(&xx * &yy) * &constants::EDWARDS_D);
        lhs == rhs
    }
}

impl AffinePoint {
    /// Create an `AffinePoint` from its coordinates.
    ///
    /// Returns `None` if the point is off-curve.
    pub fn from_coordinates(x: ExtensionFieldElement, y: ExtensionFieldElement) -> Option<Self> {
        let point = AffinePoint { x, y };
        if point.is_valid() {
            Some(point)
        } else {
            None
        }
    }

    /// The \\(x\\)-coordinate.
    pub fn x(&self) -> ExtensionFieldElement {
        self.x
    }

    /// The \\(y\\)-coordinate.
    pub fn y(&self) -> ExtensionFieldElement {
        self.y
    }

    /// Convert to extended coordinates.
    pub fn to_edwards(self) -> EdwardsPoint {
        EdwardsPoint {
            X: self.x,
            Y: self.y,
            Z: ExtensionFieldElement::ONE,
            T: &self.x * &self.y,
        }
    }

    /// Compress affine Edwards coordinates into `CompressedPoint` format.
    #[inline]
    pub fn compress(self) -> CompressedPoint {
        let mut s = self.y.to_bytes();
        s[31] &= 0x7f;
        s[31] |= self.x.sign() << 7;
        CompressedPoint(s)
    }
}

#[cfg(test)]
mod tests {
    use super::{AffinePoint, EdwardsPoint, Identity};
    use crate::constants;
    use crate::extension::ExtensionFieldElement;

    #[test]
    fn identity_conversion() {
        assert_eq!(
            AffinePoint::identity().to_edwards(),
            EdwardsPoint::identity()
        );
    }

    #[test]
    fn generator_round_trip() {
        let basepoint = constants::BASEPOINT;
        assert_eq!(basepoint.to_affine().unwrap().to_edwards(), basepoint);
    }

    #[test]
    fn from_coordinates_rejects_off_curve() {
        let g = constants::BASEPOINT.to_affine().unwrap();
        assert_eq!(AffinePoint::from_coordinates(g.x(), g.y()), Some(g));
        let bumped = &g.y() + &ExtensionFieldElement::ONE;
        assert_eq!(AffinePoint::from_coordinates(g.x(), bumped), None);
    }
}
