// -*- mode: rust; -*-
//
// This file is part of schnorrq.
// See LICENSE for licensing information.

//! Common constants such as buffer lengths for keys and signatures.

/// The length of the secret seed a key is derived from, in bytes.
pub const SECRET_KEY_LENGTH: usize = 32;

/// The length of an encoded public key, in bytes.
pub const PUBLIC_KEY_LENGTH: usize = fourq::encoding::PUBLIC_KEY_LENGTH;

/// The length of a message digest, in bytes.
pub const DIGEST_LENGTH: usize = 32;

/// The length of a SchnorrQ `Signature`, in bytes.
pub const SIGNATURE_LENGTH: usize = fourq::encoding::SIGNATURE_LENGTH;

/// The length of the K12 output drawn at every hashing step, in bytes.
pub(crate) const HASH_LENGTH: usize = 64;
