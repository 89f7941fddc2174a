// -*- mode: rust; -*-
//
// This file is part of fourq.
// See LICENSE for licensing information.

//! The `u64` backend uses `u64`s and a `(u64, u64) -> u128` multiplier.
//!
//! Field elements of \\( \mathbb F\_{2\^{127} - 1} \\) fit in a single
//! `u128`; scalars use five \\(52\\)-bit limbs so that Montgomery
//! reduction has headroom.

pub mod field;

pub mod scalar;

pub mod constants;
