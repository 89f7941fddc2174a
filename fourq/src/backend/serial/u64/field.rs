// -*- mode: rust; -*-
//
// This file is part of fourq.
// See LICENSE for licensing information.

//! Field arithmetic modulo \\(p = 2\^{127} - 1\\), using one `u128`
//! limb and \\(64 \times 64\\)-bit partial products.
//!
//! Since \\(p\\) is a Mersenne prime, \\(2\^{127} \equiv 1 \pmod p\\) and
//! reduction is a shift, a mask and an add.

use core::fmt::Debug;
use core::ops::Neg;
use core::ops::{Add, AddAssign};
use core::ops::{Mul, MulAssign};
use core::ops::{Sub, SubAssign};

use subtle::Choice;
use subtle::ConditionallySelectable;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// The modulus \\( 2\^{127} - 1 \\).
pub(crate) const P: u128 = (1u128 << 127) - 1;

/// A `FieldElement127` represents an element of the field
/// \\( \mathbb Z / (2\^{127} - 1)\\).
///
/// The value is always kept in canonical form, i.e. in \\( [0, p) \\).
/// Every operation below returns a canonical result given canonical
/// inputs, so encoding never has to reduce.
///
/// # Note
///
/// The `fourq::field` module provides a type alias
/// `fourq::field::FieldElement` to `FieldElement127`.
#[derive(Copy, Clone)]
pub struct FieldElement127(pub(crate) u128);

impl Debug for FieldElement127 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "FieldElement127({:#034x})", self.0)
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for FieldElement127 {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

/// u64 * u64 = u128 multiply helper
#[inline(always)]
fn m(x: u64, y: u64) -> u128 {
    (x as u128) * (y as u128)
}

impl<'b> AddAssign<&'b FieldElement127> for FieldElement127 {
    fn add_assign(&mut self, rhs: &'b FieldElement127) {
        *self = &*self + rhs;
    }
}

impl<'a, 'b> Add<&'b FieldElement127> for &'a FieldElement127 {
    type Output = FieldElement127;
    fn add(self, rhs: &'b FieldElement127) -> FieldElement127 {
        // Both summands are below 2^127, so the sum cannot overflow.
        FieldElement127::sub_p_once(self.0 + rhs.0)
    }
}

impl<'b> SubAssign<&'b FieldElement127> for FieldElement127 {
    fn sub_assign(&mut self, rhs: &'b FieldElement127) {
        *self = &*self - rhs;
    }
}

impl<'a, 'b> Sub<&'b FieldElement127> for &'a FieldElement127 {
    type Output = FieldElement127;
    fn sub(self, rhs: &'b FieldElement127) -> FieldElement127 {
        let (difference, borrow) = self.0.overflowing_sub(rhs.0);
        if borrow {
            // a - b + 2^128 + p wraps to a - b + p, which lies in [0, p).
            FieldElement127(difference.wrapping_add(P))
        } else {
            FieldElement127(difference)
        }
    }
}

impl<'b> MulAssign<&'b FieldElement127> for FieldElement127 {
    fn mul_assign(&mut self, rhs: &'b FieldElement127) {
        *self = &*self * rhs;
    }
}

impl<'a, 'b> Mul<&'b FieldElement127> for &'a FieldElement127 {
    type Output = FieldElement127;

    #[rustfmt::skip] // keep alignment of the partial products
    fn mul(self, rhs: &'b FieldElement127) -> FieldElement127 {
        let a0 = self.0 as u64;
        let a1 = (self.0 >> 64) as u64;
        let b0 = rhs.0 as u64;
        let b1 = (rhs.0 >> 64) as u64;

        // a1, b1 < 2^63, so the middle sum stays below 2^128.
        let lo  = m(a0, b0);
        let mid = m(a0, b1) + m(a1, b0);
        let hi  = m(a1, b1);

        // The 254-bit product is high * 2^128 + low.
        let (low, carry) = lo.overflowing_add(mid << 64);
        let high = hi + (mid >> 64) + (carry as u128);

        // Fold the bits above 2^127 back in, using 2^127 = 1 (mod p).
        let top = (high << 1) | (low >> 127);
        FieldElement127::reduce(top + (low & P))
    }
}

impl<'a> Neg for &'a FieldElement127 {
    type Output = FieldElement127;
    fn neg(self) -> FieldElement127 {
        &FieldElement127::ZERO - self
    }
}

impl ConditionallySelectable for FieldElement127 {
    fn conditional_select(
        a: &FieldElement127,
        b: &FieldElement127,
        choice: Choice,
    ) -> FieldElement127 {
        let lo = u64::conditional_select(&(a.0 as u64), &(b.0 as u64), choice);
        let hi = u64::conditional_select(&((a.0 >> 64) as u64), &((b.0 >> 64) as u64), choice);
        FieldElement127(((hi as u128) << 64) | (lo as u128))
    }
}

impl FieldElement127 {
    /// The scalar \\( 0 \\).
    pub const ZERO: FieldElement127 = FieldElement127(0);
    /// The scalar \\( 1 \\).
    pub const ONE: FieldElement127 = FieldElement127(1);
    /// The scalar \\( -1 \\).
    pub const MINUS_ONE: FieldElement127 = FieldElement127(P - 1);

    /// Construct a field element from a value already known to be below
    /// \\( p \\). Used for constants.
    pub(crate) const fn from_canonical(value: u128) -> FieldElement127 {
        FieldElement127(value)
    }

    #[inline(always)]
    fn sub_p_once(x: u128) -> FieldElement127 {
        if x >= P {
            FieldElement127(x - P)
        } else {
            FieldElement127(x)
        }
    }

    /// Reduce any `u128` to its canonical residue.
    #[inline(always)]
    fn reduce(x: u128) -> FieldElement127 {
        // (x mod 2^127) + (x >> 127) is at most 2^127, i.e. p + 1.
        FieldElement127::sub_p_once((x & P) + (x >> 127))
    }

    /// Load a `FieldElement127` from the low 127 bits of a 16-byte
    /// little-endian input, reducing it modulo \\( p \\).
    ///
    /// Every 16-byte string decodes; the values \\( p \\) and
    /// \\( 2\^{128} - 1 \\) map to \\( 0 \\) and \\( 1 \\).
    pub fn from_bytes(bytes: &[u8; 16]) -> FieldElement127 {
        FieldElement127::reduce(u128::from_le_bytes(*bytes))
    }

    /// Serialize this `FieldElement127` to a 16-byte array.
    ///
    /// The canonical residue is below \\( 2\^{127} \\), so the top bit of
    /// the last byte is always clear.
    ///
    /// This cannot fail: every constructor and every arithmetic operation
    /// reduces into \\( [0, p) \\), so the value always fits in 16 bytes.
    /// The `debug_assert!` only restates that invariant in debug builds.
    pub fn to_bytes(&self) -> [u8; 16] {
        debug_assert!(self.0 < P, "field element is not canonical");
        self.0.to_le_bytes()
    }

    /// Returns the square of this field element.
    pub fn square(&self) -> FieldElement127 {
        self * self
    }

    /// Given `k > 0`, return `self^(2^k)`.
    pub fn pow2k(&self, mut k: u32) -> FieldElement127 {
        debug_assert!(k > 0);
        let mut z = self.square();
        k -= 1;
        while k > 0 {
            z = z.square();
            k -= 1;
        }
        z
    }
}
