// -*- mode: rust; -*-
//
// This file is part of fourq.
// See LICENSE for licensing information.

//! Arithmetic in the quadratic extension
//! \\( \mathbb F\_{p^2} = \mathbb F\_p[i] / (i^2 + 1) \\).
//!
//! An `ExtensionFieldElement` is a pair \\( (a, b) \\) standing for
//! \\( a + bi \\). Both components are canonical `FieldElement`s, so
//! equality and encoding work componentwise.

use core::fmt::Debug;
use core::ops::Neg;
use core::ops::{Add, AddAssign};
use core::ops::{Mul, MulAssign};
use core::ops::{Sub, SubAssign};

use subtle::Choice;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::errors::Error;
use crate::field::FieldElement;

/// An element \\( a + bi \\) of \\( \mathbb F\_{p^2} \\).
#[derive(Copy, Clone)]
pub struct ExtensionFieldElement {
    pub(crate) a: FieldElement,
    pub(crate) b: FieldElement,
}

impl Debug for ExtensionFieldElement {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "ExtensionFieldElement{{\n\ta: {:?},\n\tb: {:?}\n}}", &self.a, &self.b)
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for ExtensionFieldElement {
    fn zeroize(&mut self) {
        self.a.zeroize();
        self.b.zeroize();
    }
}

impl ConstantTimeEq for ExtensionFieldElement {
    fn ct_eq(&self, other: &ExtensionFieldElement) -> Choice {
        self.a.ct_eq(&other.a) & self.b.ct_eq(&other.b)
    }
}

impl PartialEq for ExtensionFieldElement {
    fn eq(&self, other: &ExtensionFieldElement) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for ExtensionFieldElement {}

impl ConditionallySelectable for ExtensionFieldElement {
    fn conditional_select(
        x: &ExtensionFieldElement,
        y: &ExtensionFieldElement,
        choice: Choice,
    ) -> ExtensionFieldElement {
        ExtensionFieldElement {
            a: FieldElement::conditional_select(&x.a, &y.a, choice),
            b: FieldElement::conditional_select(&x.b, &y.b, choice),
        }
    }
}

// ------------------------------------------------------------------------
// Arithmetic
// ------------------------------------------------------------------------

impl<'a, 'b> Add<&'b ExtensionFieldElement> for &'a ExtensionFieldElement {
    type Output = ExtensionFieldElement;
    fn add(self, rhs: &'b ExtensionFieldElement) -> ExtensionFieldElement {
        ExtensionFieldElement {
            a: &self.a + &rhs.a,
            b: &self.b + &rhs.b,
        }
    }
}

define_add_variants!(
    LHS = ExtensionFieldElement,
    RHS = ExtensionFieldElement,
    Output = ExtensionFieldElement
);

impl<'b> AddAssign<&'b ExtensionFieldElement> for ExtensionFieldElement {
    fn add_assign(&mut self, rhs: &'b ExtensionFieldElement) {
        *self = &*self + rhs;
    }
}

define_add_assign_variants!(LHS = ExtensionFieldElement, RHS = ExtensionFieldElement);

impl<'a, 'b> Sub<&'b ExtensionFieldElement> for &'a ExtensionFieldElement {
    type Output = ExtensionFieldElement;
    fn sub(self, rhs: &'b ExtensionFieldElement) -> ExtensionFieldElement {
        ExtensionFieldElement {
            a: &self.a - &rhs.a,
            b: &self.b - &rhs.b,
        }
    }
}

define_sub_variants!(
    LHS = ExtensionFieldElement,
    RHS = ExtensionFieldElement,
    Output = ExtensionFieldElement
);

impl<'b> SubAssign<&'b ExtensionFieldElement> for ExtensionFieldElement {
    fn sub_assign(&mut self, rhs: &'b ExtensionFieldElement) {
        *self = &*self - rhs;
    }
}

define_sub_assign_variants!(LHS = ExtensionFieldElement, RHS = ExtensionFieldElement);

impl<'a, 'b> Mul<&'b ExtensionFieldElement> for &'a ExtensionFieldElement {
    type Output = ExtensionFieldElement;
    /// (a + bi)(c + di) = (ac - bd) + (ad + bc)i
    fn mul(self, rhs: &'b ExtensionFieldElement) -> ExtensionFieldElement {
        let ac = &self.a * &rhs.a;
        let bd = &self.b * &rhs.b;
        let ad = &self.a * &rhs.b;
        let bc = &self.b * &rhs.a;
        ExtensionFieldElement {
            a: &ac - &bd,
            b: &ad + &bc,
        }
    }
}

define_mul_variants!(
    LHS = ExtensionFieldElement,
    RHS = ExtensionFieldElement,
    Output = ExtensionFieldElement
);

impl<'b> MulAssign<&'b ExtensionFieldElement> for ExtensionFieldElement {
    fn mul_assign(&mut self, rhs: &'b ExtensionFieldElement) {
        *self = &*self * rhs;
    }
}

define_mul_assign_variants!(LHS = ExtensionFieldElement, RHS = ExtensionFieldElement);

impl<'a> Neg for &'a ExtensionFieldElement {
    type Output = ExtensionFieldElement;
    fn neg(self) -> ExtensionFieldElement {
        ExtensionFieldElement {
            a: -&self.a,
            b: -&self.b,
        }
    }
}

impl Neg for ExtensionFieldElement {
    type Output = ExtensionFieldElement;
    fn neg(self) -> ExtensionFieldElement {
        -&self
    }
}

impl ExtensionFieldElement {
    /// The element \\( 0 \\).
    pub const ZERO: ExtensionFieldElement = ExtensionFieldElement {
        a: FieldElement::ZERO,
        b: FieldElement::ZERO,
    };

    /// The element \\( 1 \\).
    pub const ONE: ExtensionFieldElement = ExtensionFieldElement {
        a: FieldElement::ONE,
        b: FieldElement::ZERO,
    };

    /// Construct \\( a + bi \\).
    pub const fn new(a: FieldElement, b: FieldElement) -> ExtensionFieldElement {
        ExtensionFieldElement { a, b }
    }

    /// The real part \\( a \\).
    pub fn real(&self) -> FieldElement {
        self.a
    }

    /// The imaginary part \\( b \\).
    pub fn imag(&self) -> FieldElement {
        self.b
    }

    /// Load an `ExtensionFieldElement` from 32 bytes: the real part from
    /// `bytes[0..16]` and the imaginary part from `bytes[16..32]`, both
    /// little-endian and reduced modulo \\( p \\).
    pub fn from_bytes(bytes: &[u8; 32]) -> ExtensionFieldElement {
        let mut a = [0u8; 16];
        let mut b = [0u8; 16];
        a.copy_from_slice(&bytes[..16]);
        b.copy_from_slice(&bytes[16..]);
        ExtensionFieldElement {
            a: FieldElement::from_bytes(&a),
            b: FieldElement::from_bytes(&b),
        }
    }

    /// Serialize this element as `a || b`, 16 little-endian bytes each.
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        bytes[..16].copy_from_slice(&self.a.to_bytes());
        bytes[16..].copy_from_slice(&self.b.to_bytes());
        bytes
    }

    /// Determine if this element is zero.
    pub fn is_zero(&self) -> bool {
        self.a.is_zero() && self.b.is_zero()
    }

    /// The sign bit used by the point encoding: the sign of the real part,
    /// or of the imaginary part if the real part is zero.
    pub fn sign(&self) -> u8 {
        if self.a.is_zero() {
            self.b.sign()
        } else {
            self.a.sign()
        }
    }

    /// (a + bi)^2 = (a^2 - b^2) + 2ab i
    pub fn square(&self) -> ExtensionFieldElement {
        let a2 = self.a.square();
        let b2 = self.b.square();
        let ab = &self.a * &self.b;
        ExtensionFieldElement {
            a: &a2 - &b2,
            b: &ab + &ab,
        }
    }

    /// The conjugate \\( a - bi \\).
    pub fn conjugate(&self) -> ExtensionFieldElement {
        ExtensionFieldElement {
            a: self.a,
            b: -&self.b,
        }
    }

    /// Compute the inverse \\( (a - bi) / (a^2 + b^2) \\).
    ///
    /// The norm \\( a^2 + b^2 \\) vanishes only at zero, since \\( -1 \\) is
    /// not a square in \\( \mathbb F\_p \\). Returns `Error::DivisionByZero`
    /// on input zero.
    pub fn invert(&self) -> Result<ExtensionFieldElement, Error> {
        let norm = &self.a.square() + &self.b.square();
        let norm_inv = norm.invert()?;
        Ok(ExtensionFieldElement {
            a: &self.a * &norm_inv,
            b: -&(&self.b * &norm_inv),
        })
    }

    /// Compute a square root of `self`, if one is found.
    ///
    /// For \\( b \neq 0 \\) this finds a root whenever one exists. For
    /// \\( b = 0 \\) only roots in \\( \mathbb F\_p \\) are returned, so a
    /// real non-square such as \\( -1 \\) gives `None` even though
    /// \\( i^2 = -1 \\).
    pub fn sqrt(&self) -> Option<ExtensionFieldElement> {
        if self.b.is_zero() {
            return self
                .a
                .sqrt()
                .map(|r| ExtensionFieldElement::new(r, FieldElement::ZERO));
        }

        let t = (&self.a.square() + &self.b.square()).sqrt()?;
        let r = (&self.a + &t)
            .div2()
            .sqrt()
            .or_else(|| (&self.a - &t).div2().sqrt())?;
        if r.is_zero() {
            return None;
        }

        // s = b / 2r
        let s = &self.b * &(&r + &r).invert().ok()?;
        let root = ExtensionFieldElement::new(r, s);
        if root.square() == *self {
            Some(root)
        } else {
            None
        }
    }
}
