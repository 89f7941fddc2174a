// -*- mode: rust; -*-
//
// This file is part of fourq.
// See LICENSE for licensing information.

//! Group operations for FourQ, in twisted Edwards form
//! \\( -x^2 + y^2 = 1 + d x^2 y^2 \\) over \\( \mathbb F\_{p^2} \\).
//!
//! ## Encoding and Decoding
//!
//! Encoding is done by converting to and from a `CompressedPoint`
//! struct, which is a typed wrapper around `[u8; 32]`. The bytes hold the
//! \\(y\\)-coordinate, real part first, and the top bit of the last byte
//! holds the sign of \\(x\\). The top bit of byte 15 is the high bit of the
//! real part of \\(y\\) and must be clear in a canonical encoding.
//!
//! ## Equality Testing
//!
//! The `EdwardsPoint` struct implements the [`subtle::ConstantTimeEq`]
//! trait for constant-time equality checking, and also uses this to
//! ensure `Eq` equality checking runs in constant time. Points are
//! compared projectively, so two representations of the same point are
//! equal.
//!
//! ## Scalars
//!
//! Scalar multiplication by a [`Scalar`] is a plain binary double-and-add
//! and runs in variable time.

// We allow non snake_case names because coordinates in projective space are
// traditionally denoted by the capitalisation of their respective
// counterparts in affine space.  Yeah, you heard me, rustfmt.
#![allow(non_snake_case)]

mod affine;

use core::fmt::Debug;
use core::ops::{Add, AddAssign};
use core::ops::{Mul, MulAssign};
use core::ops::{Neg, Sub, SubAssign};

use subtle::Choice;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::backend::serial::u64::constants;
use crate::errors::Error;
use crate::extension::ExtensionFieldElement;
use crate::scalar::Scalar;
use crate::traits::{Identity, ValidityCheck};

pub use affine::AffinePoint;

// ------------------------------------------------------------------------
// Compressed points
// ------------------------------------------------------------------------

/// A point in its canonical wire form: the \\(y\\)-coordinate plus the
/// sign of \\(x\\).
///
/// The first 32 bytes hold the little-endian encoding of \\(y\\) as an
/// element of \\( \mathbb F\_{p^2} \\); the top bit of byte 31 is the sign
/// of \\(x\\).
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct CompressedPoint(pub [u8; 32]);

impl ConstantTimeEq for CompressedPoint {
    fn ct_eq(&self, other: &CompressedPoint) -> Choice {
        self.as_bytes().ct_eq(other.as_bytes())
    }
}

impl Debug for CompressedPoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "CompressedPoint: {:?}", self.as_bytes())
    }
}

impl CompressedPoint {
    /// View this `CompressedPoint` as an array of bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Copy this `CompressedPoint` to an array of bytes.
    pub const fn to_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Construct a `CompressedPoint` from a slice of bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BytesLength`] if the input is not 32 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<CompressedPoint, Error> {
        <[u8; 32]>::try_from(bytes)
            .map(CompressedPoint)
            .map_err(|_| Error::BytesLength {
                name: "CompressedPoint",
                length: 32,
            })
    }

    /// Attempt to decompress to an `EdwardsPoint`.
    ///
    /// # Errors
    ///
    /// * [`Error::NonCanonicalEncoding`] if the top bit of byte 15 is set;
    /// * [`Error::NoSquareRoot`] if no \\(x\\) exists for this \\(y\\);
    /// * [`Error::NotOnCurve`] if the recovered point fails the curve
    ///   equation.
    pub fn decompress(&self) -> Result<EdwardsPoint, Error> {
        let mut bytes = self.to_bytes();
        if bytes[15] >> 7 != 0 {
            return Err(Error::NonCanonicalEncoding);
        }
        let sign = bytes[31] >> 7;
        bytes[31] &= 0x7f;

        let one = ExtensionFieldElement::ONE;
        let y = ExtensionFieldElement::from_bytes(&bytes);
        let yy = y.square();
        let u = &yy - &one; // u = y²-1
        let v = &(&yy * &constants::EDWARDS_D) + &one; // v = dy²+1
        let xx = &u * &v.invert()?;
        let mut x = xx.sqrt().ok_or(Error::NoSquareRoot)?;

        // Flip the sign of x if it's not correct
        if x.sign() != sign {
            x = -&x;
        }

        let point = AffinePoint { x, y };
        if !point.is_valid() {
            return Err(Error::NotOnCurve);
        }
        Ok(point.to_edwards())
    }
}

impl Identity for CompressedPoint {
    fn identity() -> CompressedPoint {
        let mut bytes = [0u8; 32];
        bytes[0] = 1;
        CompressedPoint(bytes)
    }
}

impl Default for CompressedPoint {
    fn default() -> CompressedPoint {
        CompressedPoint::identity()
    }
}

impl TryFrom<&[u8]> for CompressedPoint {
    type Error = Error;

    fn try_from(slice: &[u8]) -> Result<CompressedPoint, Error> {
        CompressedPoint::from_slice(slice)
    }
}

// ------------------------------------------------------------------------
// Serde support
// ------------------------------------------------------------------------
// Serializes to and from `EdwardsPoint` directly, doing compression
// and decompression internally.  This means that users can create
// structs containing `EdwardsPoint`s and use Serde's derived
// serializers to serialize those structures.

#[cfg(feature = "serde")]
use serde::de::Visitor;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[cfg(feature = "serde")]
impl Serialize for EdwardsPoint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let compressed = self.compress().map_err(serde::ser::Error::custom)?;
        serializer.serialize_bytes(compressed.as_bytes())
    }
}

#[cfg(feature = "serde")]
impl Serialize for CompressedPoint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bytes(self.as_bytes())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for EdwardsPoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EdwardsPointVisitor;

        impl<'de> Visitor<'de> for EdwardsPointVisitor {
            type Value = EdwardsPoint;

            fn expecting(&self, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                formatter.write_str("a valid point in FourQ y + sign format")
            }

            fn visit_bytes<E>(self, v: &[u8]) -> Result<EdwardsPoint, E>
            where
                E: serde::de::Error,
            {
                CompressedPoint::from_slice(v)
                    .map_err(|_| E::invalid_length(v.len(), &self))?
                    .decompress()
                    .map_err(E::custom)
            }
        }

        deserializer.deserialize_bytes(EdwardsPointVisitor)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for CompressedPoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CompressedPointVisitor;

        impl<'de> Visitor<'de> for CompressedPointVisitor {
            type Value = CompressedPoint;

            fn expecting(&self, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                formatter.write_str("32 bytes of data")
            }

            fn visit_bytes<E>(self, v: &[u8]) -> Result<CompressedPoint, E>
            where
                E: serde::de::Error,
            {
                CompressedPoint::from_slice(v).map_err(|_| E::invalid_length(v.len(), &self))
            }
        }

        deserializer.deserialize_bytes(CompressedPointVisitor)
    }
}

// ------------------------------------------------------------------------
// Internal point representations
// ------------------------------------------------------------------------

/// An `EdwardsPoint` represents a point on FourQ in extended twisted
/// Edwards coordinates \\( (X : Y : Z : T) \\), standing for the affine
/// point \\( (X/Z, Y/Z) \\) with \\( T Z = X Y \\).
#[derive(Copy, Clone)]
#[allow(missing_docs)]
pub struct EdwardsPoint {
    pub(crate) X: ExtensionFieldElement,
    pub(crate) Y: ExtensionFieldElement,
    pub(crate) Z: ExtensionFieldElement,
    pub(crate) T: ExtensionFieldElement,
}

// ------------------------------------------------------------------------
// Constructors
// ------------------------------------------------------------------------

impl Identity for EdwardsPoint {
    fn identity() -> EdwardsPoint {
        EdwardsPoint {
            X: ExtensionFieldElement::ZERO,
            Y: ExtensionFieldElement::ONE,
            Z: ExtensionFieldElement::ONE,
            T: ExtensionFieldElement::ZERO,
        }
    }
}

impl Default for EdwardsPoint {
    fn default() -> EdwardsPoint {
        EdwardsPoint::identity()
    }
}

// ------------------------------------------------------------------------
// Zeroize implementations for wiping points from memory
// ------------------------------------------------------------------------

#[cfg(feature = "zeroize")]
impl Zeroize for EdwardsPoint {
    /// Reset this `EdwardsPoint` to the identity element.
    fn zeroize(&mut self) {
        self.X.zeroize();
        self.Y = ExtensionFieldElement::ONE;
        self.Z = ExtensionFieldElement::ONE;
        self.T.zeroize();
    }
}

// ------------------------------------------------------------------------
// Validity checks (for debugging, not CT)
// ------------------------------------------------------------------------

impl ValidityCheck for EdwardsPoint {
    fn is_valid(&self) -> bool {
        let on_curve = match self.to_affine() {
            Ok(point) => point.is_valid(),
            Err(_) => false,
        };
        let on_segre_image = &self.X * &self.Y == &self.Z * &self.T;

        on_curve && on_segre_image
    }
}

// ------------------------------------------------------------------------
// Constant-time assignment
// ------------------------------------------------------------------------

impl ConditionallySelectable for EdwardsPoint {
    fn conditional_select(a: &EdwardsPoint, b: &EdwardsPoint, choice: Choice) -> EdwardsPoint {
        EdwardsPoint {
            X: ExtensionFieldElement::conditional_select(&a.X, &b.X, choice),
            Y: ExtensionFieldElement::conditional_select(&a.Y, &b.Y, choice),
            Z: ExtensionFieldElement::conditional_select(&a.Z, &b.Z, choice),
            T: ExtensionFieldElement::conditional_select(&a.T, &b.T, choice),
        }
    }
}

// ------------------------------------------------------------------------
// Equality
// ------------------------------------------------------------------------

impl ConstantTimeEq for EdwardsPoint {
    fn ct_eq(&self, other: &EdwardsPoint) -> Choice {
        // We would like to check that the point (X/Z, Y/Z) is equal to
        // the point (X'/Z', Y'/Z') without converting into affine
        // coordinates (x, y) and (x', y'), which requires two inversions.
        // We have that X = xZ and X' = x'Z'. Thus, x = x' is equivalent to
        // (xZ)Z' = (x'Z')Z, and similarly for the y-coordinate.

        (&self.X * &other.Z).ct_eq(&(&other.X * &self.Z))
            & (&self.Y * &other.Z).ct_eq(&(&other.Y * &self.Z))
    }
}

impl PartialEq for EdwardsPoint {
    fn eq(&self, other: &EdwardsPoint) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for EdwardsPoint {}

// ------------------------------------------------------------------------
// Point conversions
// ------------------------------------------------------------------------

impl EdwardsPoint {
    /// Dehomogenize to an `AffinePoint`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] if \\( Z = 0 \\), which cannot
    /// happen for points built by this crate.
    pub fn to_affine(&self) -> Result<AffinePoint, Error> {
        let recip = self.Z.invert()?;
        let x = &self.X * &recip;
        let y = &self.Y * &recip;
        Ok(AffinePoint { x, y })
    }

    /// Compress this point to `CompressedPoint` format.
    pub fn compress(&self) -> Result<CompressedPoint, Error> {
        Ok(self.to_affine()?.compress())
    }
}

// ------------------------------------------------------------------------
// Doubling
// ------------------------------------------------------------------------

impl EdwardsPoint {
    /// Add this point to itself.
    #[rustfmt::skip] // keep alignment of explanatory comments
    pub fn double(&self) -> EdwardsPoint {
        let A = self.X.square();                          // X²
        let B = self.Y.square();                          // Y²
        let ZZ = self.Z.square();
        let C = &ZZ + &ZZ;                                // 2Z²
        let D = -&A;                                      // aX², a = -1
        let E = &(&(&self.X + &self.Y).square() - &A) - &B; // 2XY
        let G = &D + &B;
        let F = &G - &C;
        let H = &D - &B;

        EdwardsPoint {
            X: &E * &F,
            Y: &G * &H,
            Z: &F * &G,
            T: &E * &H,
        }
    }
}

// ------------------------------------------------------------------------
// Addition and Subtraction
// ------------------------------------------------------------------------

impl<'a, 'b> Add<&'b EdwardsPoint> for &'a EdwardsPoint {
    type Output = EdwardsPoint;

    #[rustfmt::skip] // keep alignment of explanatory comments
    fn add(self, other: &'b EdwardsPoint) -> EdwardsPoint {
        let A = &(&self.Y - &self.X) * &(&other.Y - &other.X);
        let B = &(&self.Y + &self.X) * &(&other.Y + &other.X);
        let C = &(&self.T * &other.T) * &constants::EDWARDS_D2;  // 2d T1 T2
        let ZZ = &self.Z * &other.Z;
        let D = &ZZ + &ZZ;                                       // 2 Z1 Z2
        let E = &B - &A;
        let F = &D - &C;
        let G = &D + &C;
        let H = &B + &A;

        EdwardsPoint {
            X: &E * &F,
            Y: &G * &H,
            Z: &F * &G,
            T: &E * &H,
        }
    }
}

define_add_variants!(LHS = EdwardsPoint, RHS = EdwardsPoint, Output = EdwardsPoint);

impl<'b> AddAssign<&'b EdwardsPoint> for EdwardsPoint {
    fn add_assign(&mut self, _rhs: &'b EdwardsPoint) {
        *self = (self as &EdwardsPoint) + _rhs;
    }
}

define_add_assign_variants!(LHS = EdwardsPoint, RHS = EdwardsPoint);

impl<'a, 'b> Sub<&'b EdwardsPoint> for &'a EdwardsPoint {
    type Output = EdwardsPoint;
    fn sub(self, other: &'b EdwardsPoint) -> EdwardsPoint {
        self + &(-other)
    }
}

define_sub_variants!(LHS = EdwardsPoint, RHS = EdwardsPoint, Output = EdwardsPoint);

impl<'b> SubAssign<&'b EdwardsPoint> for EdwardsPoint {
    fn sub_assign(&mut self, _rhs: &'b EdwardsPoint) {
        *self = (self as &EdwardsPoint) - _rhs;
    }
}

define_sub_assign_variants!(LHS = EdwardsPoint, RHS = EdwardsPoint);

// ------------------------------------------------------------------------
// Negation
// ------------------------------------------------------------------------

impl<'a> Neg for &'a EdwardsPoint {
    type Output = EdwardsPoint;

    fn neg(self) -> EdwardsPoint {
        EdwardsPoint {
            X: -&self.X,
            Y: self.Y,
            Z: self.Z,
            T: -&self.T,
        }
    }
}

impl Neg for EdwardsPoint {
    type Output = EdwardsPoint;

    fn neg(self) -> EdwardsPoint {
        -&self
    }
}

// ------------------------------------------------------------------------
// Scalar multiplication
// ------------------------------------------------------------------------

impl<'b> MulAssign<&'b Scalar> for EdwardsPoint {
    fn mul_assign(&mut self, scalar: &'b Scalar) {
        let result = (self as &EdwardsPoint) * scalar;
        *self = result;
    }
}

define_mul_assign_variants!(LHS = EdwardsPoint, RHS = Scalar);

define_mul_variants!(LHS = EdwardsPoint, RHS = Scalar, Output = EdwardsPoint);
define_mul_variants!(LHS = Scalar, RHS = EdwardsPoint, Output = EdwardsPoint);

impl<'a, 'b> Mul<&'b Scalar> for &'a EdwardsPoint {
    type Output = EdwardsPoint;
    /// Scalar multiplication: compute `scalar * self`.
    ///
    /// Binary double-and-add, least significant bit first. This runs in
    /// variable time: both the additions and the loop bound depend on the
    /// bits of `scalar`.
    fn mul(self, scalar: &'b Scalar) -> EdwardsPoint {
        let mut acc = EdwardsPoint::identity();
        let mut addend = *self;
        for bit in scalar.bits_le().take(scalar.bit_length()) {
            if bit {
                acc += &addend;
            }
            addend = addend.double();
        }
        acc
    }
}

impl<'a, 'b> Mul<&'b EdwardsPoint> for &'a Scalar {
    type Output = EdwardsPoint;

    /// Scalar multiplication: compute `scalar * self`.
    fn mul(self, point: &'b EdwardsPoint) -> EdwardsPoint {
        point * self
    }
}

impl EdwardsPoint {
    /// Fixed-base scalar multiplication by the FourQ generator.
    pub fn mul_base(scalar: &Scalar) -> EdwardsPoint {
        &crate::constants::BASEPOINT * scalar
    }
}

// ------------------------------------------------------------------------
// Debug traits
// ------------------------------------------------------------------------

impl Debug for EdwardsPoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "EdwardsPoint{{\n\tX: {:?},\n\tY: {:?},\n\tZ: {:?},\n\tT: {:?}\n}}",
            &self.X, &self.Y, &self.Z, &self.T
        )
    }
}

// ------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::constants;
    use crate::traits::IsIdentity;

    use hex_literal::hex;
    use rand::Rng;

    /// Compressed generator.
    static BASE_CMPRSSD: CompressedPoint = CompressedPoint(hex!(
        "87b2cb2b46a224b95a7820a19bee3f0e5c8b4c8444c3a74942020e63f84a1c6e"
    ));

    /// Compressed 2*G.
    static BASE2_CMPRSSD: CompressedPoint = CompressedPoint(hex!(
        "6c62cb013d32a235fe3dd9c378fcb32df89b91e225957cee5254018ab94cc044"
    ));

    /// Compressed 3*G.
    static BASE3_CMPRSSD: CompressedPoint = CompressedPoint(hex!(
        "7186094ec9630707a831b4d7c6ddaa6c3e30236402f6e0b40f9701a089a31cf7"
    ));

    /// Compressed 5*G.
    static BASE5_CMPRSSD: CompressedPoint = CompressedPoint(hex!(
        "82206925c5554bfff043a6ccc9197464e9b95ff227171a3e096874e4f381f585"
    ));

    /// Compressed 7*G.
    static BASE7_CMPRSSD: CompressedPoint = CompressedPoint(hex!(
        "bcca9f0589d3a99c48872fbc1257c859c51e3c79c468ff1fb5e28c4b47339b2a"
    ));

    /// The identity, (0, 1).
    static IDENTITY_CMPRSSD: CompressedPoint = CompressedPoint(hex!(
        "0100000000000000000000000000000000000000000000000000000000000000"
    ));

    fn random_scalar<R: Rng>(rng: &mut R) -> Scalar {
        Scalar::from_bytes_mod_order(rng.gen())
    }

    #[test]
    fn basepoint_is_valid() {
        assert!(constants::BASEPOINT.is_valid());
    }

    #[test]
    fn basepoint_decompression_compression() {
        let base = BASE_CMPRSSD.decompress().unwrap();
        assert!(base.is_valid());
        assert_eq!(base, constants::BASEPOINT);
        assert_eq!(base.compress().unwrap(), BASE_CMPRSSD);
        assert_eq!(constants::BASEPOINT_COMPRESSED, BASE_CMPRSSD);
    }

    #[test]
    fn decompression_sign_handling() {
        // Manually set the high bit of the last byte to flip the sign
        let mut minus_basepoint_bytes = *BASE_CMPRSSD.as_bytes();
        minus_basepoint_bytes[31] ^= 1 << 7;
        let minus_basepoint = CompressedPoint(minus_basepoint_bytes)
            .decompress()
            .unwrap();
        // Test projective coordinates exactly since we know they should
        // only differ by a flipped sign.
        assert_eq!(minus_basepoint.X, -(&constants::BASEPOINT.X));
        assert_eq!(minus_basepoint.Y, constants::BASEPOINT.Y);
        assert_eq!(minus_basepoint.Z, constants::BASEPOINT.Z);
        assert_eq!(minus_basepoint.T, -(&constants::BASEPOINT.T));
        assert_eq!(minus_basepoint, -constants::BASEPOINT);
    }

    #[test]
    fn decompression_rejects_high_y0() {
        let mut bytes = *BASE_CMPRSSD.as_bytes();
        bytes[15] |= 0x80;
        assert_eq!(
            CompressedPoint(bytes).decompress(),
            Err(Error::NonCanonicalEncoding)
        );
    }

    #[test]
    fn decompression_rejects_y_without_x() {
        // About half of all y values have no matching x.
        let mut rng = rand::thread_rng();
        let mut rejected = 0;
        for _ in 0..64 {
            let mut bytes: [u8; 32] = rng.gen();
            bytes[15] &= 0x7f;
            match CompressedPoint(bytes).decompress() {
                Ok(point) => {
                    assert!(point.is_valid());
                    bytes[31] &= 0x7f;
                    let mut expected = point.compress().unwrap().to_bytes();
                    expected[31] &= 0x7f;
                    assert_eq!(expected, bytes);
                }
                Err(e) => {
                    assert_eq!(e, Error::NoSquareRoot);
                    rejected += 1;
                }
            }
        }
        assert!(rejected > 0);
    }

    #[test]
    fn identity_encoding() {
        let identity = EdwardsPoint::identity();
        assert_eq!(identity.compress().unwrap(), IDENTITY_CMPRSSD);
        assert_eq!(CompressedPoint::identity(), IDENTITY_CMPRSSD);
        assert!(IDENTITY_CMPRSSD.decompress().unwrap().is_identity());
    }

    #[test]
    fn basepoint_plus_basepoint_vs_basepoint2() {
        let bp = constants::BASEPOINT;
        let bp_added = &bp + &bp;
        assert_eq!(bp_added.compress().unwrap(), BASE2_CMPRSSD);
    }

    #[test]
    fn basepoint_double_vs_basepoint2() {
        assert_eq!(
            constants::BASEPOINT.double().compress().unwrap(),
            BASE2_CMPRSSD
        );
    }

    #[test]
    fn small_multiples_of_basepoint() {
        let bp = constants::BASEPOINT;
        assert_eq!((&bp * &Scalar::from(3u64)).compress().unwrap(), BASE3_CMPRSSD);
        assert_eq!((&bp * &Scalar::from(5u64)).compress().unwrap(), BASE5_CMPRSSD);
        assert_eq!(EdwardsPoint::mul_base(&Scalar::from(7u64)).compress().unwrap(), BASE7_CMPRSSD);
        assert_eq!(&bp * &Scalar::ONE, bp);
        assert!((&bp * &Scalar::ZERO).is_identity());
    }

    #[test]
    fn multiples_of_basepoint_hex_encodings() {
        let expected = [
            (1u64, "87b2cb2b46a224b95a7820a19bee3f0e5c8b4c8444c3a74942020e63f84a1c6e"),
            (2, "6c62cb013d32a235fe3dd9c378fcb32df89b91e225957cee5254018ab94cc044"),
            (3, "7186094ec9630707a831b4d7c6ddaa6c3e30236402f6e0b40f9701a089a31cf7"),
            (5, "82206925c5554bfff043a6ccc9197464e9b95ff227171a3e096874e4f381f585"),
            (7, "bcca9f0589d3a99c48872fbc1257c859c51e3c79c468ff1fb5e28c4b47339b2a"),
        ];
        for (k, encoding) in expected {
            let point = EdwardsPoint::mul_base(&Scalar::from(k));
            assert_eq!(hex::encode(point.compress().unwrap().as_bytes()), encoding);

            let bytes = hex::decode(encoding).unwrap();
            let decoded = CompressedPoint::from_slice(&bytes).unwrap().decompress().unwrap();
            assert_eq!(decoded, point);
        }
    }

    #[test]
    fn basepoint_has_order_q() {
        // (q - 1) * G = -G
        let q_minus_one = -Scalar::ONE;
        let p = EdwardsPoint::mul_base(&q_minus_one);
        assert_eq!(p, -constants::BASEPOINT);
        assert!((&p + &constants::BASEPOINT).is_identity());
    }

    #[test]
    fn extended_point_equality_handles_scaling() {
        let two = ExtensionFieldElement::new(
            crate::field::FieldElement::from_canonical(2),
            crate::field::FieldElement::ZERO,
        );
        let bp = constants::BASEPOINT;
        let scaled = EdwardsPoint {
            X: &bp.X * &two,
            Y: &bp.Y * &two,
            Z: &bp.Z * &two,
            T: &bp.T * &two,
        };
        assert_eq!(scaled, bp);
        assert_eq!(scaled.compress().unwrap(), BASE_CMPRSSD);
    }

    #[test]
    fn addition_is_consistent_with_scalars() {
        let mut rng = rand::thread_rng();
        let a = random_scalar(&mut rng);
        let b = random_scalar(&mut rng);
        let aG = EdwardsPoint::mul_base(&a);
        let bG = EdwardsPoint::mul_base(&b);
        assert_eq!(&aG + &bG, EdwardsPoint::mul_base(&(&a + &b)));
        assert_eq!(&aG - &bG, EdwardsPoint::mul_base(&(&a - &b)));
        assert_eq!(&aG * &b, &bG * &a);
        assert!((&aG + &bG).is_valid());
    }

    #[test]
    fn encode_decode_round_trip() {
        let mut rng = rand::thread_rng();
        for _ in 0..16 {
            let p = EdwardsPoint::mul_base(&random_scalar(&mut rng));
            let compressed = p.compress().unwrap();
            assert_eq!(compressed.as_bytes()[15] & 0x80, 0);
            let decoded = compressed.decompress().unwrap();
            assert_eq!(decoded, p);
            assert_eq!(decoded.compress().unwrap(), compressed);
        }
    }

    #[test]
    fn from_slice_checks_length() {
        assert_eq!(
            CompressedPoint::from_slice(&[0u8; 31]),
            Err(Error::BytesLength {
                name: "CompressedPoint",
                length: 32
            })
        );
        assert!(CompressedPoint::from_slice(BASE_CMPRSSD.as_bytes()).is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_bincode_basepoint_roundtrip() {
        use bincode;

        let encoded = bincode::serialize(&constants::BASEPOINT).unwrap();
        let enc_compressed = bincode::serialize(&constants::BASEPOINT_COMPRESSED).unwrap();
        assert_eq!(encoded, enc_compressed);

        let dec_uncompressed: EdwardsPoint = bincode::deserialize(&encoded).unwrap();
        let dec_compressed: CompressedPoint = bincode::deserialize(&encoded).unwrap();
        assert_eq!(dec_uncompressed, constants::BASEPOINT);
        assert_eq!(dec_compressed, constants::BASEPOINT_COMPRESSED);
    }
}
