// -*- mode: rust; -*-
//
// This file is part of schnorrq.
// See LICENSE for licensing information.

//! A SchnorrQ signature.

use core::fmt::Debug;

use fourq::edwards::CompressedPoint;
use fourq::encoding::check_signature;

#[cfg(feature = "serde")]
use serde::de::Error as SerdeError;
#[cfg(feature = "serde")]
use serde::de::Visitor;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::*;
use crate::errors::*;

/// A SchnorrQ signature over a 32-byte message digest.
///
/// The signature is detached: it carries neither the digest nor the key.
#[allow(non_snake_case)]
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Signature {
    /// `R` is the encoding of the commitment point `r·G`, where `r` is
    /// derived from the nonce half of the expanded key and the digest.
    pub(crate) R: CompressedPoint,

    /// `s = r - k·h mod q`, little-endian.
    ///
    /// Kept as received so that re-encoding is exact; verification reduces
    /// it modulo `q` before use.
    pub(crate) s: [u8; 32],
}

impl Debug for Signature {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        write!(f, "Signature( R: {:?}, s: {:?} )", &self.R, &self.s)
    }
}

impl Signature {
    /// Convert this `Signature` to a byte array.
    #[inline]
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LENGTH] {
        let mut signature_bytes: [u8; SIGNATURE_LENGTH] = [0u8; SIGNATURE_LENGTH];

        signature_bytes[..32].copy_from_slice(self.R.as_bytes());
        signature_bytes[32..].copy_from_slice(&self.s);
        signature_bytes
    }

    /// Construct a `Signature` from a slice of bytes.
    ///
    /// Rejects buffers of the wrong length and buffers failing the
    /// structural check of [`fourq::encoding::is_valid_signature`]. The
    /// commitment point itself is not decoded.
    #[inline]
    pub fn from_bytes(bytes: &[u8]) -> Result<Signature, SignatureError> {
        if bytes.len() != SIGNATURE_LENGTH {
            return Err(InternalError::BytesLength {
                name: "Signature",
                length: SIGNATURE_LENGTH,
            }
            .into());
        }
        check_signature(bytes)?;

        let mut lower: [u8; 32] = [0u8; 32];
        let mut upper: [u8; 32] = [0u8; 32];

        lower.copy_from_slice(&bytes[..32]);
        upper.copy_from_slice(&bytes[32..]);

        Ok(Signature {
            R: CompressedPoint(lower),
            s: upper,
        })
    }

    /// The encoded commitment point.
    #[inline]
    pub fn r_bytes(&self) -> &[u8; 32] {
        self.R.as_bytes()
    }

    /// The response scalar, as carried on the wire.
    #[inline]
    pub fn s_bytes(&self) -> &[u8; 32] {
        &self.s
    }
}

impl TryFrom<&[u8]> for Signature {
    type Error = SignatureError;

    fn try_from(bytes: &[u8]) -> Result<Signature, SignatureError> {
        Signature::from_bytes(bytes)
    }
}

impl From<Signature> for [u8; SIGNATURE_LENGTH] {
    fn from(signature: Signature) -> [u8; SIGNATURE_LENGTH] {
        signature.to_bytes()
    }
}

#[cfg(feature = "serde")]
impl Serialize for Signature {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bytes(&self.to_bytes()[..])
    }
}

#[cfg(feature = "serde")]
impl<'d> Deserialize<'d> for Signature {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'d>,
    {
        struct SignatureVisitor;

        impl<'d> Visitor<'d> for SignatureVisitor {
            type Value = Signature;

            fn expecting(&self, formatter: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                formatter.write_str("a SchnorrQ signature as 64 bytes")
            }

            fn visit_bytes<E>(self, bytes: &[u8]) -> Result<Signature, E>
            where
                E: SerdeError,
            {
                if bytes.len() != SIGNATURE_LENGTH {
                    return Err(SerdeError::invalid_length(bytes.len(), &self));
                }
                Signature::from_bytes(bytes).map_err(SerdeError::custom)
            }
        }
        deserializer.deserialize_bytes(SignatureVisitor)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use hex_literal::hex;

    static SIG: [u8; 64] = hex!(
        "77a4fecbd22d99e419c44408e11f8921194c06309c255fc21edc9fce4782b92b"
        "fec0190c01169fe0e6eb10b55188bb7daf28746faa552e0e564379a9400a2700"
    );

    #[test]
    fn bytes_survive_parsing() {
        let signature = Signature::from_bytes(&SIG).unwrap();
        assert_eq!(signature.to_bytes(), SIG);
        assert_eq!(signature.r_bytes()[..], SIG[..32]);
        assert_eq!(signature.s_bytes()[..], SIG[32..]);
    }

    #[test]
    fn wrong_lengths_are_rejected() {
        for len in [0usize, 63, 65] {
            let mut buf = [0u8; 65];
            buf[..64].copy_from_slice(&SIG);
            let err = Signature::from_bytes(&buf[..len]).unwrap_err();
            assert_eq!(
                err,
                SignatureError(InternalError::BytesLength {
                    name: "Signature",
                    length: SIGNATURE_LENGTH
                })
            );
        }
    }

    #[test]
    fn high_bits_are_rejected() {
        for (index, mask) in [(15usize, 0x80u8), (62, 0x40), (62, 0x80), (63, 0x01)] {
            let mut bad = SIG;
            bad[index] |= mask;
            assert_eq!(
                Signature::try_from(&bad[..]),
                Err(SignatureError(InternalError::SignatureEncoding))
            );
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_bincode_signature_roundtrip() {
        let signature = Signature::from_bytes(&SIG).unwrap();
        let encoded = bincode::serialize(&signature).unwrap();
        let decoded: Signature = bincode::deserialize(&encoded).unwrap();
        assert_eq!(decoded, signature);
    }
}
