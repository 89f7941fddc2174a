// -*- mode: rust; -*-
//
// This file is part of fourq.
// See LICENSE for licensing information.

//! Limb-level implementations of the field and scalar arithmetic.
//!
//! Only a serial 64-bit backend exists. The public `field` and `scalar`
//! modules wrap the backend types and define everything that can be
//! expressed in terms of other field or scalar operations.

pub mod serial;
