// -*- mode: rust; -*-
//
// This file is part of fourq.
// See LICENSE for licensing information.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

//! Arithmetic on FourQ, the twisted Edwards curve
//!
//! ```text
//! -x^2 + y^2 = 1 + d x^2 y^2
//! ```
//!
//! over the quadratic extension \\( \mathbb F\_{p^2} = \mathbb F\_p(i) \\)
//! with \\( p = 2\^{127} - 1 \\) and \\( i^2 = -1 \\).
//!
//! The crate provides the base and extension fields, points in extended
//! coordinates, the canonical 32-byte point encoding, cheap structural
//! validators for wire buffers, and scalars modulo the prime order \\( q \\)
//! of the cryptographic subgroup.
//!
//! # Warning
//!
//! Scalar multiplication in this crate is a plain double-and-add and is
//! **not** constant time. It reproduces reference behaviour and must not
//! be used where secret scalars are exposed to timing measurements.

//------------------------------------------------------------------------
// External dependencies:
//------------------------------------------------------------------------

#[cfg(any(test, feature = "std"))]
extern crate std;

// Internal macros. Must come first!
#[macro_use]
pub(crate) mod macros;

//------------------------------------------------------------------------
// fourq public modules
//------------------------------------------------------------------------

// Scalar arithmetic mod q, the order of the prime-order subgroup
pub mod scalar;

// Point operations on the twisted Edwards form of FourQ
pub mod edwards;

// Structural checks on encoded keys and signatures
pub mod encoding;

// Arithmetic in GF(p^2)
pub mod extension;

// Useful constants, like the generator
pub mod constants;

// External (and internal) traits.
pub mod traits;

// Error type shared by every fallible operation in this crate.
pub mod errors;

// Finite field arithmetic mod p = 2^127 - 1
pub mod field;

//------------------------------------------------------------------------
// fourq internal modules
//------------------------------------------------------------------------

// Arithmetic backends live here
pub(crate) mod backend;

pub use crate::{
    edwards::{CompressedPoint, EdwardsPoint},
    errors::Error,
    extension::ExtensionFieldElement,
    field::FieldElement,
    scalar::Scalar,
};
