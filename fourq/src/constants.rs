// -*- mode: rust; -*-
//
// This file is part of fourq.
// See LICENSE for licensing information.

//! Various constants, such as the FourQ generator and the order of the
//! prime-order subgroup.

#![allow(non_snake_case)]

use crate::backend::serial::u64::constants as backend;
use crate::edwards::{CompressedPoint, EdwardsPoint};
use crate::extension::ExtensionFieldElement;

/// The curve parameter \\( d \\) of \\( -x^2 + y^2 = 1 + d x^2 y^2 \\).
pub const EDWARDS_D: ExtensionFieldElement = backend::EDWARDS_D;

/// The FourQ generator, as an `EdwardsPoint`.
pub const BASEPOINT: EdwardsPoint = EdwardsPoint {
    X: backend::BASEPOINT_X,
    Y: backend::BASEPOINT_Y,
    Z: ExtensionFieldElement::ONE,
    T: backend::BASEPOINT_T,
};

/// The FourQ generator, in `CompressedPoint` format.
pub const BASEPOINT_COMPRESSED: CompressedPoint = CompressedPoint([
    0x87, 0xb2, 0xcb, 0x2b, 0x46, 0xa2, 0x24, 0xb9, 0x5a, 0x78, 0x20, 0xa1, 0x9b, 0xee, 0x3f, 0x0e,
    0x5c, 0x8b, 0x4c, 0x84, 0x44, 0xc3, 0xa7, 0x49, 0x42, 0x02, 0x0e, 0x63, 0xf8, 0x4a, 0x1c, 0x6e,
]);

/// `BASEPOINT_ORDER` is the order \\( q \\) of the generator, as
/// little-endian bytes:
/// $$
/// q = \mathtt{0x29cbc14e5e0a72f05397829cbc14e5dfbd004dfe0f79992fb2540ec7768ce7}.
/// $$
pub const BASEPOINT_ORDER: [u8; 32] = [
    0xe7, 0x8c, 0x76, 0xc7, 0x0e, 0x54, 0xb2, 0x2f, 0x99, 0x79, 0x0f, 0xfe, 0x4d, 0x00, 0xbd, 0xdf,
    0xe5, 0x14, 0xbc, 0x9c, 0x82, 0x97, 0x53, 0xf0, 0x72, 0x0a, 0x5e, 0x4e, 0xc1, 0xcb, 0x29, 0x00,
];
