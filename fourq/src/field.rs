// -*- mode: rust; -*-
//
// This file is part of fourq.
// See LICENSE for licensing information.

//! Field arithmetic modulo \\(p = 2\^{127} - 1\\).
//!
//! The `fourq::field` module provides a type alias
//! `fourq::field::FieldElement` to the backend field element type.
//!
//! Field operations defined in terms of machine
//! operations, such as field multiplication or squaring, are defined in
//! the backend implementation.
//!
//! Field operations defined in terms of other field operations, such as
//! field inversion or square roots, are defined here.

use core::cmp::{Eq, PartialEq};

use subtle::Choice;
use subtle::ConstantTimeEq;

use crate::backend::serial::u64::field::{FieldElement127, P};
use crate::errors::Error;

/// A `FieldElement` represents an element of the field
/// \\( \mathbb Z / (2\^{127} - 1)\\).
pub type FieldElement = FieldElement127;

impl Eq for FieldElement {}

impl PartialEq for FieldElement {
    fn eq(&self, other: &FieldElement) -> bool {
        self.ct_eq(other).into()
    }
}

impl ConstantTimeEq for FieldElement {
    /// Test equality between two `FieldElement`s.  Since the
    /// internal representation is canonical, the bytes are compared
    /// directly.
    ///
    /// # Returns
    ///
    /// If the two `FieldElement`s are equal, return `Choice(1)`.  Otherwise, return `Choice(0)`.
    fn ct_eq(&self, other: &FieldElement) -> Choice {
        self.to_bytes().ct_eq(&other.to_bytes())
    }
}

impl FieldElement {
    /// Determine if this `FieldElement` is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// The sign bit of this `FieldElement`: bit 126 of its canonical
    /// value, i.e. the top bit of the 127-bit representative.
    pub fn sign(&self) -> u8 {
        (self.0 >> 126) as u8 & 1
    }

    /// Compute `self / 2` without an inversion.
    ///
    /// An even residue is shifted right; an odd one has \\( p \\) added
    /// first, which makes it even without leaving the congruence class.
    pub fn div2(&self) -> FieldElement {
        // self + p < 2^128 since self < p.
        let x = if self.0 & 1 == 0 {
            self.0
        } else {
            self.0 + P
        };
        FieldElement127(x >> 1)
    }

    /// Compute \\( \mathtt{self}\^{2\^{125} - 1} \\), used by `invert()`.
    #[rustfmt::skip] // keep alignment of explanatory comments
    fn pow_2_125_minus_1(&self) -> FieldElement {
        // Each temporary variable t_i is of the form (self)^e_i.
        // Squaring t_i corresponds to multiplying e_i by 2,
        // so the pow2k function shifts e_i left by k places.
        // Multiplying t_i and t_j corresponds to adding e_i + e_j.
        //
        // Temporary t_i                      Nonzero bits of e_i
        //
        let t0  = self.square();           // 1
        let t1  = &t0 * self;              // 1,0
        let t2  = t1.pow2k(2);             // 3,2
        let t3  = &t2 * &t1;               // 3..0
        let t4  = t3.square();             // 4..1
        let t5  = &t4 * self;              // 4..0
        let t6  = t5.pow2k(5);             // 9..5
        let t7  = &t6 * &t5;               // 9..0
        let t8  = t7.pow2k(10);            // 19..10
        let t9  = &t8 * &t7;               // 19..0
        let t10 = t9.pow2k(5);             // 24..5
        let t11 = &t10 * &t5;              // 24..0
        let t12 = t11.pow2k(25);           // 49..25
        let t13 = &t12 * &t11;             // 49..0
        let t14 = t13.pow2k(50);           // 99..50
        let t15 = &t14 * &t13;             // 99..0
        let t16 = t15.pow2k(25);           // 124..25

        &t16 * &t11                        // 124..0
    }

    /// Given a nonzero field element, compute its inverse.
    ///
    /// The inverse is computed as self^(p-2), since
    /// x^(p-2)x = x^(p-1) = 1 (mod p).
    ///
    /// Returns `Error::DivisionByZero` on input zero.
    #[rustfmt::skip] // keep alignment of explanatory comments
    pub fn invert(&self) -> Result<FieldElement, Error> {
        if self.is_zero() {
            return Err(Error::DivisionByZero);
        }
        // The bits of p-2 = 2^127 - 3 are 111...1101.
        //
        //                                       nonzero bits of exponent
        let t0 = self.pow_2_125_minus_1();    // 124..0
        let t1 = t0.pow2k(2);                 // 126..2
        Ok(&t1 * self)                        // 126..2,0
    }

    /// Compute a square root of `self`, if one exists.
    ///
    /// Since \\( p \equiv 3 \pmod 4 \\), the candidate is
    /// \\( \mathtt{self}\^{(p+1)/4} = \mathtt{self}\^{2\^{125}} \\). It is
    /// squared and compared with the input; about half of the nonzero
    /// elements are not squares, and for those `None` is returned.
    pub fn sqrt(&self) -> Option<FieldElement> {
        let candidate = self.pow2k(125);
        if candidate.square() == *self {
            Some(candidate)
        } else {
            None
        }
    }
}
