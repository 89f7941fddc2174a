// -*- mode: rust; -*-
//
// This file is part of fourq.
// See LICENSE for licensing information.

//! Structural checks on encoded public keys and signatures.
//!
//! These look only at lengths and at bits that a canonical encoding keeps
//! clear, so malformed buffers can be rejected before any field
//! arithmetic. Passing them does not mean a point decodes.
//!
//! * A public key is 32 bytes, and the top bit of byte 15 (the high bit of
//!   the real part of \\(y\\)) is clear.
//! * A signature is 64 bytes: the same rule for its first 32 bytes, plus
//!   the top two bits of byte 62 clear and byte 63 zero, which keeps the
//!   trailing scalar below \\(2\^{246}\\).
//!
//! The `is_*` predicates accept any slice and never fail. The `check_*`
//! variants return an [`Error`] naming the first rule that was broken.

use crate::errors::Error;

/// Length of an encoded point (and public key).
pub const PUBLIC_KEY_LENGTH: usize = 32;

/// Length of an encoded signature.
pub const SIGNATURE_LENGTH: usize = 64;

/// Return `true` if `bytes` is structurally a valid public key.
pub fn is_valid_public_key(bytes: &[u8]) -> bool {
    check_public_key(bytes).is_ok()
}

/// Return `true` if `bytes` is structurally a valid signature.
pub fn is_valid_signature(bytes: &[u8]) -> bool {
    check_signature(bytes).is_ok()
}

/// Check that `bytes` is structurally a valid public key.
///
/// # Errors
///
/// [`Error::BytesLength`] for a buffer that is not 32 bytes, and
/// [`Error::InvalidPublicKeyEncoding`] if the top bit of byte 15 is set.
pub fn check_public_key(bytes: &[u8]) -> Result<(), Error> {
    if bytes.len() != PUBLIC_KEY_LENGTH {
        return Err(Error::BytesLength {
            name: "PublicKey",
            length: PUBLIC_KEY_LENGTH,
        });
    }
    if bytes[15] & 0x80 != 0 {
        return Err(Error::InvalidPublicKeyEncoding);
    }
    Ok(())
}

/// Check that `bytes` is structurally a valid signature.
///
/// # Errors
///
/// [`Error::BytesLength`] for a buffer that is not 64 bytes, and
/// [`Error::InvalidSignatureEncoding`] if byte 15 has its top bit set,
/// byte 62 has either of its top two bits set, or byte 63 is nonzero.
pub fn check_signature(bytes: &[u8]) -> Result<(), Error> {
    if bytes.len() != SIGNATURE_LENGTH {
        return Err(Error::BytesLength {
            name: "Signature",
            length: SIGNATURE_LENGTH,
        });
    }
    if bytes[15] & 0x80 != 0 || bytes[62] & 0xc0 != 0 || bytes[63] != 0 {
        return Err(Error::InvalidSignatureEncoding);
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    static ZEROES: [u8; 80] = [0u8; 80];

    #[test]
    fn public_key_rejects_only_bit_127_of_y0() {
        assert!(is_valid_public_key(&[0u8; 32]));
        for byte in 0..32 {
            for bit in 0..8 {
                let mut key = [0u8; 32];
                key[byte] = 1 << bit;
                let expected = !(byte == 15 && bit == 7);
                assert_eq!(is_valid_public_key(&key), expected, "byte {byte} bit {bit}");
            }
        }
    }

    #[test]
    fn public_key_length() {
        for len in [0usize, 31, 33, 64] {
            assert!(!is_valid_public_key(&ZEROES[..len]));
            assert_eq!(
                check_public_key(&ZEROES[..len]),
                Err(Error::BytesLength {
                    name: "PublicKey",
                    length: 32
                })
            );
        }
    }

    #[test]
    fn signature_bit_rules() {
        assert!(is_valid_signature(&[0u8; 64]));
        for byte in 0..64 {
            for bit in 0..8 {
                let mut sig = [0u8; 64];
                sig[byte] = 1 << bit;
                let rejected = (byte == 15 && bit == 7) || (byte == 62 && bit >= 6) || byte == 63;
                assert_eq!(is_valid_signature(&sig), !rejected, "byte {byte} bit {bit}");
                if rejected {
                    assert_eq!(check_signature(&sig), Err(Error::InvalidSignatureEncoding));
                }
            }
        }
    }

    #[test]
    fn signature_length() {
        for len in [0usize, 32, 63, 65] {
            assert!(!is_valid_signature(&ZEROES[..len]));
        }
        assert_eq!(
            check_signature(&[0u8; 63]),
            Err(Error::BytesLength {
                name: "Signature",
                length: 64
            })
        );
    }
}
