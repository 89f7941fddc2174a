// -*- mode: rust; -*-
//
// This file is part of fourq.
// See LICENSE for licensing information.

//! Arithmetic on scalars (integers mod the order \\( q \\) of the
//! prime-order subgroup of FourQ).
//!
//! The scalar field is unrelated to the base field: \\( q \\) is a
//! \\(246\\)-bit prime,
//! $$
//! q = \mathtt{0x29cbc14e5e0a72f05397829cbc14e5dfbd004dfe0f79992fb2540ec7768ce7}.
//! $$
//!
//! A [`Scalar`] always holds a reduced value. Scalars are built from
//! arbitrary 32-byte strings with [`Scalar::from_bytes_mod_order`], or
//! from canonical encodings with [`Scalar::from_canonical_bytes`].
//!
//! The free functions [`reduce`], [`mul`] and [`sub`] work directly on
//! 32-byte little-endian strings and are total: every input, reduced or
//! not, gives a reduced output.

use core::fmt::Debug;
use core::ops::Neg;
use core::ops::{Add, AddAssign};
use core::ops::{Mul, MulAssign};
use core::ops::{Sub, SubAssign};

use subtle::Choice;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;

#[cfg(feature = "serde")]
use serde::de::Visitor;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::backend::serial::u64::scalar::Scalar52;

/// An `UnpackedScalar` represents an element of the field GF(q), optimized for speed.
type UnpackedScalar = Scalar52;

/// The `Scalar` struct holds an element of \\(\mathbb Z / q \mathbb Z \\).
#[allow(clippy::derived_hash_with_manual_eq)]
#[derive(Copy, Clone, Hash)]
pub struct Scalar {
    /// `bytes` is a little-endian byte encoding of an integer representing a scalar modulo the
    /// group order.
    ///
    /// # Invariant
    ///
    /// The integer representing this scalar is less than \\(q\\).
    pub(crate) bytes: [u8; 32],
}

impl Scalar {
    /// The scalar \\( 0 \\).
    pub const ZERO: Self = Self { bytes: [0u8; 32] };

    /// The scalar \\( 1 \\).
    pub const ONE: Self = Self {
        bytes: [
            1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
            0, 0, 0,
        ],
    };

    /// Construct a `Scalar` by reducing a 256-bit little-endian integer
    /// modulo the group order \\( q \\).
    pub fn from_bytes_mod_order(bytes: [u8; 32]) -> Scalar {
        Scalar {
            bytes: UnpackedScalar::from_bytes_mod_order(&bytes).as_bytes(),
        }
    }

    /// Attempt to construct a `Scalar` from a canonical byte representation.
    ///
    /// # Return
    ///
    /// - `Some(s)`, where `s` is the `Scalar` corresponding to `bytes`,
    ///   if `bytes` is a canonical byte representation modulo the group order \\( q \\);
    /// - `None` if `bytes` is not a canonical byte representation.
    pub fn from_canonical_bytes(bytes: [u8; 32]) -> Option<Scalar> {
        let candidate = Scalar::from_bytes_mod_order(bytes);
        if candidate.bytes == bytes {
            Some(candidate)
        } else {
            None
        }
    }

    /// Convert this `Scalar` to its underlying sequence of bytes.
    pub const fn to_bytes(&self) -> [u8; 32] {
        self.bytes
    }

    /// View the little-endian byte encoding of the integer representing this Scalar.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }

    /// Get the bits of the scalar, in little-endian order
    pub(crate) fn bits_le(&self) -> impl DoubleEndedIterator<Item = bool> + '_ {
        (0..256).map(|i| {
            // As i runs from 0..256, the bottom 3 bits index the bit, while the upper bits index
            // the byte. Since self.bytes is little-endian at the byte level, this iterator is
            // little-endian on the bit level
            ((self.bytes[i >> 3] >> (i & 7)) & 1u8) == 1
        })
    }

    /// The number of bits up to and including the highest set bit.
    pub(crate) fn bit_length(&self) -> usize {
        match self.bytes.iter().rposition(|&b| b != 0) {
            Some(i) => 8 * i + (8 - self.bytes[i].leading_zeros() as usize),
            None => 0,
        }
    }

    /// Unpack this `Scalar` to an `UnpackedScalar` for faster arithmetic.
    pub(crate) fn unpack(&self) -> UnpackedScalar {
        UnpackedScalar::from_bytes(&self.bytes)
    }
}

impl UnpackedScalar {
    /// Pack the limbs of this `UnpackedScalar` into a `Scalar`.
    fn pack(&self) -> Scalar {
        Scalar {
            bytes: self.as_bytes(),
        }
    }
}

// ------------------------------------------------------------------------
// Byte-level arithmetic
// ------------------------------------------------------------------------

/// Reduce a 32-byte little-endian integer modulo \\( q \\), returning
/// the canonical 32-byte encoding of the residue.
pub fn reduce(bytes: &[u8; 32]) -> [u8; 32] {
    Scalar::from_bytes_mod_order(*bytes).to_bytes()
}

/// Compute `a * b mod q` for two 32-byte little-endian integers.
pub fn mul(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    let a = Scalar::from_bytes_mod_order(*a);
    let b = Scalar::from_bytes_mod_order(*b);
    (&a * &b).to_bytes()
}

/// Compute `a - b mod q` for two 32-byte little-endian integers, adding
/// \\( q \\) on underflow.
pub fn sub(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    let a = Scalar::from_bytes_mod_order(*a);
    let b = Scalar::from_bytes_mod_order(*b);
    (&a - &b).to_bytes()
}

// ------------------------------------------------------------------------
// Trait impls
// ------------------------------------------------------------------------

impl Debug for Scalar {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Scalar{{\n\tbytes: {:?},\n}}", &self.bytes)
    }
}

impl Eq for Scalar {}
impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.bytes.ct_eq(&other.bytes)
    }
}

impl ConditionallySelectable for Scalar {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut bytes = [0u8; 32];
        #[allow(clippy::needless_range_loop)]
        for i in 0..32 {
            bytes[i] = u8::conditional_select(&a.bytes[i], &b.bytes[i], choice);
        }
        Scalar { bytes }
    }
}

impl Default for Scalar {
    fn default() -> Scalar {
        Scalar::ZERO
    }
}

impl From<u64> for Scalar {
    /// Construct a scalar from the given `u64`.
    fn from(x: u64) -> Scalar {
        let mut bytes = [0u8; 32];
        bytes[..8].copy_from_slice(&x.to_le_bytes());
        // x < 2^64 < q
        Scalar { bytes }
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for Scalar {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
    }
}

impl<'b> MulAssign<&'b Scalar> for Scalar {
    fn mul_assign(&mut self, _rhs: &'b Scalar) {
        *self = UnpackedScalar::mul(&self.unpack(), &_rhs.unpack()).pack();
    }
}

define_mul_assign_variants!(LHS = Scalar, RHS = Scalar);

impl<'a, 'b> Mul<&'b Scalar> for &'a Scalar {
    type Output = Scalar;
    fn mul(self, _rhs: &'b Scalar) -> Scalar {
        UnpackedScalar::mul(&self.unpack(), &_rhs.unpack()).pack()
    }
}

define_mul_variants!(LHS = Scalar, RHS = Scalar, Output = Scalar);

impl<'b> AddAssign<&'b Scalar> for Scalar {
    fn add_assign(&mut self, _rhs: &'b Scalar) {
        *self = *self + _rhs;
    }
}

define_add_assign_variants!(LHS = Scalar, RHS = Scalar);

impl<'a, 'b> Add<&'b Scalar> for &'a Scalar {
    type Output = Scalar;
    fn add(self, _rhs: &'b Scalar) -> Scalar {
        UnpackedScalar::add(&self.unpack(), &_rhs.unpack()).pack()
    }
}

define_add_variants!(LHS = Scalar, RHS = Scalar, Output = Scalar);

impl<'b> SubAssign<&'b Scalar> for Scalar {
    fn sub_assign(&mut self, _rhs: &'b Scalar) {
        *self = *self - _rhs;
    }
}

define_sub_assign_variants!(LHS = Scalar, RHS = Scalar);

impl<'a, 'b> Sub<&'b Scalar> for &'a Scalar {
    type Output = Scalar;
    fn sub(self, rhs: &'b Scalar) -> Scalar {
        UnpackedScalar::sub(&self.unpack(), &rhs.unpack()).pack()
    }
}

define_sub_variants!(LHS = Scalar, RHS = Scalar, Output = Scalar);

impl<'a> Neg for &'a Scalar {
    type Output = Scalar;
    fn neg(self) -> Scalar {
        UnpackedScalar::sub(&UnpackedScalar::ZERO, &self.unpack()).pack()
    }
}

impl Neg for Scalar {
    type Output = Scalar;
    fn neg(self) -> Scalar {
        -&self
    }
}

#[cfg(feature = "serde")]
impl Serialize for Scalar {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bytes(self.as_bytes())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ScalarVisitor;

        impl<'de> Visitor<'de> for ScalarVisitor {
            type Value = Scalar;

            fn expecting(&self, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                formatter.write_str("a canonical 32-byte little-endian scalar mod q")
            }

            fn visit_bytes<E>(self, v: &[u8]) -> Result<Scalar, E>
            where
                E: serde::de::Error,
            {
                let bytes: [u8; 32] = v
                    .try_into()
                    .map_err(|_| E::invalid_length(v.len(), &self))?;
                Scalar::from_canonical_bytes(bytes)
                    .ok_or_else(|| E::custom("scalar was not canonically encoded"))
            }
        }

        deserializer.deserialize_bytes(ScalarVisitor)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::constants::BASEPOINT_ORDER;

    use hex_literal::hex;
    use rand::Rng;

    /// q - 1
    static Q_MINUS_ONE: [u8; 32] =
        hex!("e68c76c70e54b22f99790ffe4d00bddfe514bc9c829753f0720a5e4ec1cb2900");

    /// q + 1
    static Q_PLUS_ONE: [u8; 32] =
        hex!("e88c76c70e54b22f99790ffe4d00bddfe514bc9c829753f0720a5e4ec1cb2900");

    /// (2^256 - 1) mod q
    static MAX_REDUCED: [u8; 32] =
        hex!("1ff9e0497a25bddbbb3537e14b225e9a05000000000000000000000000000000");

    fn le(x: u64) -> [u8; 32] {
        Scalar::from(x).to_bytes()
    }

    #[test]
    fn reduce_edge_cases() {
        assert_eq!(reduce(&[0u8; 32]), [0u8; 32]);
        assert_eq!(reduce(&le(1)), le(1));
        assert_eq!(reduce(&BASEPOINT_ORDER), [0u8; 32]);
        assert_eq!(reduce(&Q_PLUS_ONE), le(1));
        assert_eq!(reduce(&Q_MINUS_ONE), Q_MINUS_ONE);
        assert_eq!(reduce(&[0xff; 32]), MAX_REDUCED);
    }

    #[test]
    fn reduce_is_idempotent() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let x: [u8; 32] = rng.gen();
            let once = reduce(&x);
            assert_eq!(reduce(&once), once);
        }
    }

    #[test]
    fn sub_wraps() {
        assert_eq!(sub(&le(0), &le(1)), Q_MINUS_ONE);
        assert_eq!(sub(&le(1), &le(1)), le(0));
        assert_eq!(sub(&le(7), &le(3)), le(4));
    }

    #[test]
    fn mul_small_and_max() {
        assert_eq!(mul(&le(1), &le(1)), le(1));
        assert_eq!(mul(&le(6), &le(7)), le(42));
        assert_eq!(mul(&Q_MINUS_ONE, &Q_MINUS_ONE), le(1));
        // Unreduced inputs are reduced first.
        assert_eq!(mul(&Q_PLUS_ONE, &le(5)), le(5));
    }

    #[test]
    fn from_canonical_bytes() {
        assert_eq!(Scalar::from_canonical_bytes(Q_MINUS_ONE), Some(-Scalar::ONE));
        assert_eq!(Scalar::from_canonical_bytes(BASEPOINT_ORDER), None);
        assert_eq!(Scalar::from_canonical_bytes([0xff; 32]), None);
    }

    #[test]
    fn neg_and_add() {
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let x = Scalar::from_bytes_mod_order(rng.gen());
            assert_eq!(&x + &(-&x), Scalar::ZERO);
            let y = Scalar::from_bytes_mod_order(rng.gen());
            assert_eq!(&(&x + &y) - &y, x);
            assert_eq!(&x * &y, &y * &x);
        }
    }

    #[test]
    fn bit_length() {
        assert_eq!(Scalar::ZERO.bit_length(), 0);
        assert_eq!(Scalar::ONE.bit_length(), 1);
        assert_eq!(Scalar::from(0x100u64).bit_length(), 9);
        assert_eq!(Scalar::from_canonical_bytes(Q_MINUS_ONE).unwrap().bit_length(), 246);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_bincode_scalar_roundtrip() {
        use bincode;
        let x = Scalar::from_bytes_mod_order(Q_PLUS_ONE);
        let encoded = bincode::serialize(&x).unwrap();
        let parsed: Scalar = bincode::deserialize(&encoded).unwrap();
        assert_eq!(parsed, x);
    }
}
