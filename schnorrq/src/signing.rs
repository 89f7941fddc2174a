// -*- mode: rust; -*-
//
// This file is part of schnorrq.
// See LICENSE for licensing information.

//! SchnorrQ signing keys.

use core::fmt::Debug;

use fourq::edwards::{CompressedPoint, EdwardsPoint};
use fourq::scalar::Scalar;

use ::signature::Signer;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

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
use crate::verifying::*;

/// A SchnorrQ signing key: a 32-byte secret seed together with the public
/// key derived from it.
///
/// With the `zeroize` feature the seed is overwritten with zeroes when the
/// key falls out of scope.
#[derive(Clone)]
pub struct SigningKey {
    /// The secret seed.
    pub(crate) secret_key: [u8; SECRET_KEY_LENGTH],
    /// The public half of this signing key.
    pub(crate) verifying_key: VerifyingKey,
}

impl SigningKey {
    /// Construct a [`SigningKey`] from a secret seed.
    ///
    /// # Example
    ///
    /// ```
    /// use schnorrq::{SigningKey, SECRET_KEY_LENGTH};
    ///
    /// # fn doctest() -> Result<(), schnorrq::SignatureError> {
    /// let secret_key_bytes: [u8; SECRET_KEY_LENGTH] = [7u8; SECRET_KEY_LENGTH];
    /// let signing_key = SigningKey::from_bytes(&secret_key_bytes)?;
    /// assert_eq!(signing_key.to_bytes(), secret_key_bytes);
    /// # Ok(())
    /// # }
    /// # doctest().unwrap();
    /// ```
    ///
    /// # Errors
    ///
    /// Only if the derived public point cannot be encoded, which does not
    /// happen for points produced by the group law.
    #[inline]
    pub fn from_bytes(secret_key: &[u8; SECRET_KEY_LENGTH]) -> Result<SigningKey, SignatureError> {
        let expanded = ExpandedSecretKey::from(secret_key);
        let verifying_key = VerifyingKey::from_expanded(&expanded)?;
        Ok(SigningKey {
            secret_key: *secret_key,
            verifying_key,
        })
    }

    /// Construct a [`SigningKey`] from a slice of bytes.
    ///
    /// # Errors
    ///
    /// A `BytesLength` error if `bytes` is not 32 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<SigningKey, SignatureError> {
        let secret_key = <[u8; SECRET_KEY_LENGTH]>::try_from(bytes).map_err(|_| {
            InternalError::BytesLength {
                name: "SecretKey",
                length: SECRET_KEY_LENGTH,
            }
        })?;
        SigningKey::from_bytes(&secret_key)
    }

    /// Convert this secret key to a byte array.
    #[inline]
    pub fn to_bytes(&self) -> [u8; SECRET_KEY_LENGTH] {
        self.secret_key
    }

    /// View this secret key as a byte array.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; SECRET_KEY_LENGTH] {
        &self.secret_key
    }

    /// Get the [`VerifyingKey`] for this [`SigningKey`].
    pub fn verifying_key(&self) -> VerifyingKey {
        self.verifying_key
    }

    /// Sign a 32-byte message digest.
    ///
    /// Signing is deterministic: the same key and digest always give the
    /// same signature.
    pub fn sign_digest(&self, digest: &[u8; DIGEST_LENGTH]) -> Result<Signature, SignatureError> {
        let expanded = ExpandedSecretKey::from(&self.secret_key);
        expanded.sign(digest, self.verifying_key.as_bytes())
    }

    /// Verify a signature on a digest with this signing key's public key.
    pub fn verify_digest(
        &self,
        digest: &[u8; DIGEST_LENGTH],
        signature: &Signature,
    ) -> Result<(), SignatureError> {
        self.verifying_key.verify_digest(digest, signature)
    }
}

impl Debug for SigningKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SigningKey")
            .field("verifying_key", &self.verifying_key)
            .finish_non_exhaustive()
    }
}

impl AsRef<VerifyingKey> for SigningKey {
    fn as_ref(&self) -> &VerifyingKey {
        &self.verifying_key
    }
}

impl TryFrom<&[u8]> for SigningKey {
    type Error = SignatureError;

    fn try_from(bytes: &[u8]) -> Result<SigningKey, SignatureError> {
        SigningKey::from_slice(bytes)
    }
}

impl Eq for SigningKey {}
impl PartialEq for SigningKey {
    fn eq(&self, other: &Self) -> bool {
        use subtle::ConstantTimeEq;
        self.secret_key[..].ct_eq(&other.secret_key[..]).into()
    }
}

#[cfg(feature = "zeroize")]
impl Drop for SigningKey {
    fn drop(&mut self) {
        self.secret_key.zeroize();
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::ZeroizeOnDrop for SigningKey {}

impl Signer<Signature> for SigningKey {
    /// Sign `message`, which must be a 32-byte digest.
    fn try_sign(&self, message: &[u8]) -> Result<Signature, ::signature::Error> {
        let digest = <[u8; DIGEST_LENGTH]>::try_from(message).map_err(|_| {
            SignatureError::from(InternalError::BytesLength {
                name: "Digest",
                length: DIGEST_LENGTH,
            })
        })?;
        Ok(self.sign_digest(&digest)?)
    }
}

#[cfg(feature = "serde")]
impl Serialize for SigningKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bytes(&self.secret_key)
    }
}

#[cfg(feature = "serde")]
impl<'d> Deserialize<'d> for SigningKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'d>,
    {
        struct SigningKeyVisitor;

        impl<'de> Visitor<'de> for SigningKeyVisitor {
            type Value = SigningKey;

            fn expecting(&self, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(formatter, "A SchnorrQ signing key as {SECRET_KEY_LENGTH} bytes")
            }

            fn visit_bytes<E: SerdeError>(self, bytes: &[u8]) -> Result<Self::Value, E> {
                SigningKey::from_slice(bytes).map_err(|_| E::invalid_length(bytes.len(), &self))
            }
        }

        deserializer.deserialize_bytes(SigningKeyVisitor)
    }
}

/// An "expanded" secret key.
///
/// This is produced by hashing a 32-byte seed to 64 bytes with K12. The
/// lower half, reduced modulo \\( q \\), is the signing scalar `key`; the
/// upper half is the `nonce` prefix mixed with the digest to derive the
/// per-signature commitment.
///
/// With the `zeroize` feature both halves are wiped on drop.
pub(crate) struct ExpandedSecretKey {
    pub(crate) key: Scalar,
    pub(crate) nonce: [u8; 32],
}

#[cfg(feature = "zeroize")]
impl Drop for ExpandedSecretKey {
    fn drop(&mut self) {
        self.key.zeroize();
        self.nonce.zeroize()
    }
}

impl From<&[u8; SECRET_KEY_LENGTH]> for ExpandedSecretKey {
    fn from(secret_key: &[u8; SECRET_KEY_LENGTH]) -> ExpandedSecretKey {
        #[allow(unused_mut)]
        let mut hash = k12_64(&[&secret_key[..]]);
        let mut lower: [u8; 32] = [0u8; 32];
        let mut upper: [u8; 32] = [0u8; 32];

        lower.copy_from_slice(&hash[00..32]);
        upper.copy_from_slice(&hash[32..64]);

        let key = Scalar::from_bytes_mod_order(lower);

        #[cfg(feature = "zeroize")]
        {
            hash.zeroize();
            lower.zeroize();
        }

        ExpandedSecretKey { key, nonce: upper }
    }
}

impl ExpandedSecretKey {
    /// Sign `digest` under `public_key`.
    ///
    /// `public_key` enters the challenge as given; it is not checked
    /// against `key`.
    #[allow(non_snake_case)]
    pub(crate) fn sign(
        &self,
        digest: &[u8; DIGEST_LENGTH],
        public_key: &[u8; PUBLIC_KEY_LENGTH],
    ) -> Result<Signature, SignatureError> {
        let r = scalar_from_hash(&k12_64(&[&self.nonce[..], &digest[..]]));
        let R: CompressedPoint = EdwardsPoint::mul_base(&r).compress()?;

        let h = scalar_from_hash(&k12_64(&[&R.as_bytes()[..], &public_key[..], &digest[..]]));
        let s = &r - &(&self.key * &h);

        Ok(Signature {
            R,
            s: s.to_bytes(),
        })
    }
}

/// Reduce the first 32 bytes of a K12 output modulo \\( q \\).
pub(crate) fn scalar_from_hash(hash: &[u8; HASH_LENGTH]) -> Scalar {
    let mut lower: [u8; 32] = [0u8; 32];
    lower.copy_from_slice(&hash[..32]);
    Scalar::from_bytes_mod_order(lower)
}

#[cfg(test)]
mod test {
    use super::*;
    use hex_literal::hex;

    static SEED: [u8; 32] = hex!("179c2d6db171f1af86efbaded25aeb0bc12bf90c0244566aee23e08f082d3863");
    static PUBLIC: [u8; 32] = hex!("39665f596c87c5eb34b7c2027ea87737dc5a178dda273a1e67d673e5925b4e82");

    #[test]
    fn signing_key_derives_public_key() {
        let signing_key = SigningKey::from_bytes(&SEED).unwrap();
        assert_eq!(signing_key.verifying_key().to_bytes(), PUBLIC);
        assert_eq!(signing_key.as_bytes(), &SEED);
    }

    #[test]
    fn expanded_key_scalar_is_reduced() {
        let expanded = ExpandedSecretKey::from(&SEED);
        assert!(Scalar::from_canonical_bytes(expanded.key.to_bytes()).is_some());
    }

    #[test]
    fn from_slice_rejects_wrong_length() {
        assert_eq!(
            SigningKey::from_slice(&SEED[..31]).unwrap_err(),
            SignatureError(InternalError::BytesLength {
                name: "SecretKey",
                length: SECRET_KEY_LENGTH
            })
        );
    }

    #[test]
    fn signer_trait_requires_digest_length() {
        let signing_key = SigningKey::from_bytes(&SEED).unwrap();
        assert!(signing_key.try_sign(&[0u8; 31]).is_err());
        assert!(signing_key.try_sign(&[0u8; 33]).is_err());

        let digest = [0x5au8; 32];
        let signature = signing_key.try_sign(&digest).unwrap();
        assert_eq!(signature, signing_key.sign_digest(&digest).unwrap());
        assert!(signing_key.verify_digest(&digest, &signature).is_ok());
    }

    #[test]
    fn debug_does_not_print_secret() {
        use std::format;

        let signing_key = SigningKey::from_bytes(&[0xabu8; 32]).unwrap();
        let printed = format!("{:?}", signing_key);
        assert!(!printed.contains("secret_key"));
        assert!(printed.starts_with("SigningKey"));
    }
}
