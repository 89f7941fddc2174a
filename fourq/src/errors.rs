// -*- mode: rust; -*-
//
// This file is part of fourq.
// See LICENSE for licensing information.

//! Errors raised by field inversion, point decoding and the structural
//! validators.

use thiserror::Error;

/// Errors which may occur in the arithmetic and encoding layers.
///
/// A missing square root is not an error: [`FieldElement::sqrt`] and
/// [`ExtensionFieldElement::sqrt`] return `Option` for that case.
///
/// [`FieldElement::sqrt`]: crate::field::FieldElement::sqrt
/// [`ExtensionFieldElement::sqrt`]: crate::extension::ExtensionFieldElement::sqrt
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
pub enum Error {
    /// An attempt to invert zero, in either \\( \mathbb F\_p \\) or
    /// \\( \mathbb F\_{p^2} \\).
    #[error("Cannot invert zero")]
    DivisionByZero,
    /// An error in the length of bytes handed to a constructor.
    ///
    /// `name` is the type which is returning the error, and `length` the
    /// number of bytes its constructor expects.
    #[error("{name} must be {length} bytes in length")]
    BytesLength {
        /// The type being constructed.
        name: &'static str,
        /// The length it requires.
        length: usize,
    },
    /// The high bit of the real part of `y` was set.
    #[error("Invalid point encoding: y0 out of range")]
    NonCanonicalEncoding,
    /// `(y^2 - 1) / (d y^2 + 1)` has no square root, so no `x` exists.
    #[error("Invalid point encoding: no square root")]
    NoSquareRoot,
    /// The decoded point does not satisfy the curve equation.
    #[error("Invalid point encoding: point is not on the curve")]
    NotOnCurve,
    /// A public key buffer failed the structural check.
    #[error("Invalid public key encoding")]
    InvalidPublicKeyEncoding,
    /// A signature buffer failed the structural check.
    #[error("Invalid signature encoding")]
    InvalidSignatureEncoding,
}
