// -*- mode: rust; -*-
//
// This file is part of fourq.
// See LICENSE for licensing information.

//! Serial implementations of field and scalar arithmetic.

pub mod u64;
