// -*- mode: rust; -*-
//
// This file is part of schnorrq.
// See LICENSE for licensing information.

//! Errors which may occur when parsing keys and/or signatures to or from wire formats.

use thiserror::Error;

/// Internal errors.  Most application-level developers will likely not
/// need to pay any attention to these.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
pub(crate) enum InternalError {
    /// An error in the length of bytes handed to a constructor.
    ///
    /// To use this, pass a string specifying the `name` of the type which is
    /// returning the error, and the `length` in bytes which its constructor
    /// expects.
    #[error("{name} must be {length} bytes in length")]
    BytesLength { name: &'static str, length: usize },
    /// A point could not be decoded, or an intermediate point could not be
    /// encoded.
    #[error("{0}")]
    PointDecoding(fourq::Error),
    /// The signature failed the structural check on its high bits.
    #[error("Invalid signature encoding")]
    SignatureEncoding,
    /// The verification equation wasn't satisfied
    #[error("Verification equation was not satisfied")]
    Verify,
}

/// Errors which may occur while processing signatures and keys.
///
/// This error may arise due to:
///
/// * Being given bytes with a length different to what was expected.
///
/// * A problem decoding `R`, the commitment point in a `Signature`, or the
///   curve point of a `VerifyingKey`.
///
/// * A signature whose scalar half has bits set above the order of the group.
///
/// * Failure of a signature to satisfy the verification equation.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Error)]
#[error(transparent)]
pub struct SignatureError(pub(crate) InternalError);

impl From<InternalError> for SignatureError {
    fn from(err: InternalError) -> SignatureError {
        SignatureError(err)
    }
}

impl From<fourq::Error> for SignatureError {
    fn from(err: fourq::Error) -> SignatureError {
        match err {
            fourq::Error::BytesLength { name, length } => {
                InternalError::BytesLength { name, length }.into()
            }
            fourq::Error::InvalidSignatureEncoding => InternalError::SignatureEncoding.into(),
            other => InternalError::PointDecoding(other).into(),
        }
    }
}

impl From<SignatureError> for ::signature::Error {
    fn from(_err: SignatureError) -> ::signature::Error {
        ::signature::Error::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::string::ToString;

    #[test]
    fn length_errors_name_the_type() {
        let err: SignatureError = InternalError::BytesLength {
            name: "Signature",
            length: 64,
        }
        .into();
        assert_eq!(err.to_string(), "Signature must be 64 bytes in length");
    }

    #[test]
    fn fourq_errors_are_classified() {
        assert_eq!(
            SignatureError::from(fourq::Error::NoSquareRoot),
            SignatureError(InternalError::PointDecoding(fourq::Error::NoSquareRoot))
        );
        assert_eq!(
            SignatureError::from(fourq::Error::InvalidSignatureEncoding),
            SignatureError(InternalError::SignatureEncoding)
        );
        assert_eq!(
            SignatureError::from(fourq::Error::BytesLength {
                name: "PublicKey",
                length: 32
            }),
            SignatureError(InternalError::BytesLength {
                name: "PublicKey",
                length: 32
            })
        );
    }
}
