// -*- mode: rust; -*-
//
// This file is part of schnorrq.
// See LICENSE for licensing information.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

//! Deterministic SchnorrQ signatures over FourQ.
//!
//! A signer holds a 32-byte seed. The seed is hashed with KangarooTwelve
//! (K12) to a signing scalar and a nonce prefix; the public key is the
//! encoding of the scalar times the generator. Signatures are over 32-byte
//! message digests and are 64 bytes long: the encoded commitment `R`
//! followed by the response `s`.
//!
//! # Example
//!
//! ```
//! use schnorrq::{Signature, SigningKey, Signer, Verifier};
//!
//! # fn main() -> Result<(), schnorrq::SignatureError> {
//! let signing_key = SigningKey::from_bytes(&[42u8; 32])?;
//! let digest = [7u8; 32];
//!
//! let signature: Signature = signing_key.sign(&digest);
//! assert!(signing_key.verifying_key().verify(&digest, &signature).is_ok());
//! # Ok(())
//! # }
//! ```
//!
//! The free functions [`generate_public_key`], [`sign`] and [`verify`]
//! work on raw byte buffers. [`verify`] never fails: any malformed or
//! non-matching input yields `false`.
//!
//! # Warning
//!
//! Scalar multiplication is not constant time. Do not sign with these
//! keys where an attacker can measure signing time.

#[cfg(any(test, feature = "std"))]
extern crate std;

pub use ::signature::{Signer, Verifier};

mod constants;
mod errors;
pub mod hash;
mod signature;
mod signing;
mod verifying;

pub use crate::constants::*;
pub use crate::errors::*;
pub use crate::signature::*;
pub use crate::signing::*;
pub use crate::verifying::*;

use fourq::encoding::{is_valid_public_key, is_valid_signature};
use tracing::debug;

use crate::errors::InternalError;
use crate::signing::ExpandedSecretKey;

fn to_array<const N: usize>(bytes: &[u8], name: &'static str) -> Result<[u8; N], SignatureError> {
    <[u8; N]>::try_from(bytes).map_err(|_| InternalError::BytesLength { name, length: N }.into())
}

/// Derive the 32-byte public key of a 32-byte secret seed.
///
/// # Errors
///
/// A `BytesLength` error if `secret_key` is not 32 bytes long.
pub fn generate_public_key(secret_key: &[u8]) -> Result<[u8; PUBLIC_KEY_LENGTH], SignatureError> {
    let secret_key: [u8; SECRET_KEY_LENGTH] = to_array(secret_key, "SecretKey")?;
    let expanded = ExpandedSecretKey::from(&secret_key);
    Ok(VerifyingKey::from_expanded(&expanded)?.to_bytes())
}

/// Sign a 32-byte digest with a secret seed, producing 64 signature bytes.
///
/// `public_key` is bound into the challenge as given and is not checked
/// against `sub_seed`. The result is a deterministic function of the three
/// inputs.
///
/// # Errors
///
/// A `BytesLength` error naming the first argument of the wrong length.
pub fn sign(
    sub_seed: &[u8],
    public_key: &[u8],
    digest: &[u8],
) -> Result<[u8; SIGNATURE_LENGTH], SignatureError> {
    let sub_seed: [u8; SECRET_KEY_LENGTH] = to_array(sub_seed, "SecretKey")?;
    let public_key: [u8; PUBLIC_KEY_LENGTH] = to_array(public_key, "PublicKey")?;
    let digest: [u8; DIGEST_LENGTH] = to_array(digest, "Digest")?;

    let expanded = ExpandedSecretKey::from(&sub_seed);
    Ok(expanded.sign(&digest, &public_key)?.to_bytes())
}

/// Verify a 64-byte signature on a 32-byte digest under a 32-byte public
/// key.
///
/// Returns `true` only when every check passes and the recomputed
/// commitment matches the signature's `R`. Wrong lengths, structurally
/// invalid buffers, undecodable keys and mismatches all give `false`.
pub fn verify(public_key: &[u8], digest: &[u8], signature: &[u8]) -> bool {
    let digest_bytes = digest;
    let digest: [u8; DIGEST_LENGTH] = match <[u8; DIGEST_LENGTH]>::try_from(digest_bytes) {
        Ok(digest)
            if public_key.len() == PUBLIC_KEY_LENGTH && signature.len() == SIGNATURE_LENGTH =>
        {
            digest
        }
        _ => {
            debug!(
                public_key = public_key.len(),
                digest = digest_bytes.len(),
                signature = signature.len(),
                "rejecting: wrong buffer length"
            );
            return false;
        }
    };
    if !is_valid_public_key(public_key) || !is_valid_signature(signature) {
        debug!("rejecting: structural check failed");
        return false;
    }

    let verifying_key = match VerifyingKey::from_slice(public_key) {
        Ok(vk) => vk,
        Err(err) => {
            debug!(%err, "rejecting: public key does not decode");
            return false;
        }
    };
    let signature = match Signature::from_bytes(signature) {
        Ok(sig) => sig,
        Err(err) => {
            debug!(%err, "rejecting: malformed signature");
            return false;
        }
    };
    match verifying_key.verify_digest(&digest, &signature) {
        Ok(()) => true,
        Err(err) => {
            debug!(%err, "rejecting: commitment mismatch");
            false
        }
    }
}
