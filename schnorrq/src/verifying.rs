// -*- mode: rust; -*-
//
// This file is part of schnorrq.
// See LICENSE for licensing information.

//! SchnorrQ public keys.

use core::fmt::Debug;
use core::hash::{Hash, Hasher};

use fourq::edwards::{CompressedPoint, EdwardsPoint};
use fourq::encoding::check_public_key;
use fourq::scalar::Scalar;

use ::signature::Verifier;
use subtle::ConstantTimeEq;

#[cfg(feature = "serde")]
use serde::de::Error as SerdeError;
#[cfg(feature = "serde")]
use serde::de::Visitor;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::*;
use crate::errors::*;
use crate::hash::k12_64;
use crate::signature::*;
use crate::signing::*;

/// A SchnorrQ public key.
///
/// `Eq` and `Hash` use the 32-byte encoding.
// Invariant: VerifyingKey.point is always the decoding of VerifyingKey.compressed
#[derive(Copy, Clone, Eq)]
pub struct VerifyingKey {
    /// Canonical encoding of the public point.
    pub(crate) compressed: CompressedPoint,

    /// Decoded point used for curve arithmetic.
    pub(crate) point: EdwardsPoint,
}

impl Debug for VerifyingKey {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        write!(f, "VerifyingKey({:?})", self.compressed)
    }
}

impl AsRef<[u8]> for VerifyingKey {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Hash for VerifyingKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl PartialEq<VerifyingKey> for VerifyingKey {
    fn eq(&self, other: &VerifyingKey) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl From<&SigningKey> for VerifyingKey {
    fn from(signing_key: &SigningKey) -> VerifyingKey {
        signing_key.verifying_key()
    }
}

impl VerifyingKey {
    /// Convert this public key to a byte array.
    #[inline]
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_LENGTH] {
        self.compressed.to_bytes()
    }

    /// View this public key as a byte array.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        self.compressed.as_bytes()
    }

    /// Construct a `VerifyingKey` from its 32-byte encoding.
    ///
    /// # Example
    ///
    /// ```
    /// use schnorrq::VerifyingKey;
    /// use schnorrq::PUBLIC_KEY_LENGTH;
    /// use schnorrq::SignatureError;
    ///
    /// # fn doctest() -> Result<VerifyingKey, SignatureError> {
    /// let public_key_bytes: [u8; PUBLIC_KEY_LENGTH] = [
    ///     0x39, 0x66, 0x5f, 0x59, 0x6c, 0x87, 0xc5, 0xeb, 0x34, 0xb7, 0xc2, 0x02, 0x7e, 0xa8, 0x77, 0x37,
    ///     0xdc, 0x5a, 0x17, 0x8d, 0xda, 0x27, 0x3a, 0x1e, 0x67, 0xd6, 0x73, 0xe5, 0x92, 0x5b, 0x4e, 0x82];
    ///
    /// let public_key = VerifyingKey::from_bytes(&public_key_bytes)?;
    /// #
    /// # Ok(public_key)
    /// # }
    /// #
    /// # fn main() {
    /// #     assert!(doctest().is_ok());
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Fails if the structural check rejects the buffer or the point does
    /// not decode.
    #[inline]
    pub fn from_bytes(bytes: &[u8; PUBLIC_KEY_LENGTH]) -> Result<VerifyingKey, SignatureError> {
        check_public_key(bytes)?;
        let compressed = CompressedPoint(*bytes);
        let point = compressed.decompress()?;

        // Invariant: VerifyingKey.point is always the decoding of VerifyingKey.compressed
        Ok(VerifyingKey { compressed, point })
    }

    /// Construct a `VerifyingKey` from a slice of bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<VerifyingKey, SignatureError> {
        let bytes = <[u8; PUBLIC_KEY_LENGTH]>::try_from(bytes).map_err(|_| {
            InternalError::BytesLength {
                name: "VerifyingKey",
                length: PUBLIC_KEY_LENGTH,
            }
        })?;
        VerifyingKey::from_bytes(&bytes)
    }

    /// The decoded public point.
    pub fn to_edwards(&self) -> EdwardsPoint {
        self.point
    }

    /// Derive the public key `k·G` of an expanded secret.
    pub(crate) fn from_expanded(
        expanded_secret_key: &ExpandedSecretKey,
    ) -> Result<VerifyingKey, SignatureError> {
        let point = EdwardsPoint::mul_base(&expanded_secret_key.key);
        let compressed = point.compress()?;

        // Invariant: VerifyingKey.point is always the decoding of VerifyingKey.compressed
        Ok(VerifyingKey { compressed, point })
    }

    /// Computes the challenge `H(R || A || M)` reduced modulo `q`.
    #[allow(non_snake_case)]
    fn compute_challenge(R: &CompressedPoint, A: &CompressedPoint, M: &[u8]) -> Scalar {
        scalar_from_hash(&k12_64(&[&R.as_bytes()[..], &A.as_bytes()[..], M]))
    }

    /// Computes the commitment the signature should carry, `s·G + h·A`.
    #[allow(non_snake_case)]
    fn recompute_R(
        &self,
        signature: &Signature,
        digest: &[u8; DIGEST_LENGTH],
    ) -> Result<CompressedPoint, SignatureError> {
        let h = Self::compute_challenge(&signature.R, &self.compressed, &digest[..]);
        let s = Scalar::from_bytes_mod_order(signature.s);

        let R = &EdwardsPoint::mul_base(&s) + &(&self.point * &h);
        Ok(R.compress()?)
    }

    /// Verify a signature on a 32-byte digest with this public key.
    ///
    /// # Errors
    ///
    /// A `Verify` error when the recomputed commitment does not match `R`.
    #[allow(non_snake_case)]
    pub fn verify_digest(
        &self,
        digest: &[u8; DIGEST_LENGTH],
        signature: &Signature,
    ) -> Result<(), SignatureError> {
        let expected_R = self.recompute_R(signature, digest)?;

        if bool::from(expected_R.ct_eq(&signature.R)) {
            Ok(())
        } else {
            Err(InternalError::Verify.into())
        }
    }
}

impl Verifier<Signature> for VerifyingKey {
    /// Verify a signature on `message`, which must be a 32-byte digest.
    fn verify(&self, message: &[u8], signature: &Signature) -> Result<(), ::signature::Error> {
        let digest = <[u8; DIGEST_LENGTH]>::try_from(message).map_err(|_| {
            SignatureError::from(InternalError::BytesLength {
                name: "Digest",
                length: DIGEST_LENGTH,
            })
        })?;
        Ok(self.verify_digest(&digest, signature)?)
    }
}

impl TryFrom<&[u8]> for VerifyingKey {
    type Error = SignatureError;

    #[inline]
    fn try_from(bytes: &[u8]) -> Result<VerifyingKey, SignatureError> {
        VerifyingKey::from_slice(bytes)
    }
}

impl From<VerifyingKey> for EdwardsPoint {
    fn from(vk: VerifyingKey) -> EdwardsPoint {
        vk.point
    }
}

#[cfg(feature = "serde")]
impl Serialize for VerifyingKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bytes(&self.as_bytes()[..])
    }
}

#[cfg(feature = "serde")]
impl<'d> Deserialize<'d> for VerifyingKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'d>,
    {
        struct VerifyingKeyVisitor;

        impl<'de> Visitor<'de> for VerifyingKeyVisitor {
            type Value = VerifyingKey;

            fn expecting(&self, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(formatter, "A SchnorrQ verifying key as {PUBLIC_KEY_LENGTH} bytes")
            }

            fn visit_bytes<E: SerdeError>(self, bytes: &[u8]) -> Result<Self::Value, E> {
                if bytes.len() != PUBLIC_KEY_LENGTH {
                    return Err(E::invalid_length(bytes.len(), &self));
                }
                VerifyingKey::from_slice(bytes).map_err(E::custom)
            }
        }

        deserializer.deserialize_bytes(VerifyingKeyVisitor)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use hex_literal::hex;

    static PUBLIC: [u8; 32] = hex!("39665f596c87c5eb34b7c2027ea87737dc5a178dda273a1e67d673e5925b4e82");
    static DIGEST: [u8; 32] = hex!("3ee42f561ac090694fb35e12ba6f642fd0725f77368fc6f0ebaa4d6181476d9d");
    static SIG: [u8; 64] = hex!(
        "77a4fecbd22d99e419c44408e11f8921194c06309c255fc21edc9fce4782b92b"
        "fec0190c01169fe0e6eb10b55188bb7daf28746faa552e0e564379a9400a2700"
    );

    #[test]
    fn verify_digest_accepts_vector() {
        let vk = VerifyingKey::from_bytes(&PUBLIC).unwrap();
        let signature = Signature::from_bytes(&SIG).unwrap();
        assert!(vk.verify_digest(&DIGEST, &signature).is_ok());
        assert!(vk.verify(&DIGEST[..], &signature).is_ok());
    }

    #[test]
    fn verify_digest_rejects_other_digest() {
        let vk = VerifyingKey::from_bytes(&PUBLIC).unwrap();
        let signature = Signature::from_bytes(&SIG).unwrap();
        let mut digest = DIGEST;
        digest[0] ^= 1;
        assert_eq!(
            vk.verify_digest(&digest, &signature),
            Err(SignatureError(InternalError::Verify))
        );
    }

    #[test]
    fn verifier_trait_requires_digest_length() {
        let vk = VerifyingKey::from_bytes(&PUBLIC).unwrap();
        let signature = Signature::from_bytes(&SIG).unwrap();
        assert!(vk.verify(&DIGEST[..31], &signature).is_err());
    }

    #[test]
    fn high_bit_of_y0_is_rejected() {
        let mut bytes = PUBLIC;
        bytes[15] |= 0x80;
        assert_eq!(
            VerifyingKey::from_bytes(&bytes),
            Err(SignatureError(InternalError::PointDecoding(
                fourq::Error::InvalidPublicKeyEncoding
            )))
        );
    }

    #[test]
    fn round_trips_through_bytes() {
        let vk = VerifyingKey::from_slice(&PUBLIC[..]).unwrap();
        assert_eq!(vk.to_bytes(), PUBLIC);
        assert_eq!(vk.to_edwards().compress().unwrap().to_bytes(), PUBLIC);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_bincode_verifying_key_roundtrip() {
        let vk = VerifyingKey::from_bytes(&PUBLIC).unwrap();
        let encoded = bincode::serialize(&vk).unwrap();
        let decoded: VerifyingKey = bincode::deserialize(&encoded).unwrap();
        assert_eq!(decoded, vk);
    }
}
