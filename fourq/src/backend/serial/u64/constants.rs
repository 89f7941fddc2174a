// -*- mode: rust; -*-
//
// This file is part of fourq.
// See LICENSE for licensing information.

//! This module contains backend-specific constant values, such as the
//! curve parameter \\( d \\), the generator and the subgroup order.

use super::field::FieldElement127;
use super::scalar::Scalar52;
use crate::extension::ExtensionFieldElement;

/// `L` is the order of the prime-order subgroup,
/// `q = 0x29cbc14e5e0a72f05397829cbc14e5dfbd004dfe0f79992fb2540ec7768ce7`,
/// in 52-bit limbs.
pub(crate) const L: Scalar52 = Scalar52 {
    limbs: [
        0x0002540ec7768ce7,
        0x0004dfe0f79992fb,
        0x000cbc14e5dfbd00,
        0x0000a72f05397829,
        0x00000029cbc14e5e,
    ],
};

/// `L` * `LFACTOR` = -1 (mod 2^52)
pub(crate) const LFACTOR: u64 = 0x000fe5f079bc3929;

/// `R` = R % L where R = 2^260
pub(crate) const R: Scalar52 = Scalar52 {
    limbs: [
        0x000257a49e0f9200,
        0x000be13735bbdbbd,
        0x0000000059a5e224,
        0x0000000000000000,
        0x0000000000000000,
    ],
};

/// `RR` = (R^2) % L where R = 2^260
pub(crate) const RR: Scalar52 = Scalar52 {
    limbs: [
        0x000b5710c9501ce8,
        0x000bab8cd7dd8a9d,
        0x000992d82c491d9e,
        0x000314774a81ab8b,
        0x0000001e1b368a48,
    ],
};

/// Edwards `d` value, equal to
/// `0x5e472f846657e0fcb3821488f1fc0c8d * i + 0xe40000000000000142`.
pub(crate) const EDWARDS_D: ExtensionFieldElement = ExtensionFieldElement {
    a: FieldElement127::from_canonical(0xe40000000000000142),
    b: FieldElement127::from_canonical(0x5e472f846657e0fcb3821488f1fc0c8d),
};

/// Edwards `2*d` value, used by the extended addition law.
pub(crate) const EDWARDS_D2: ExtensionFieldElement = ExtensionFieldElement {
    a: FieldElement127::from_canonical(0x1c80000000000000284),
    b: FieldElement127::from_canonical(0x3c8e5f08ccafc1f967042911e3f8191b),
};

/// The generator in extended coordinates, `(X : Y : 1 : X*Y)`.
pub(crate) const BASEPOINT_X: ExtensionFieldElement = ExtensionFieldElement {
    a: FieldElement127::from_canonical(0x1a3472237c2fb305286592ad7b3833aa),
    b: FieldElement127::from_canonical(0x1e1f553f2878aa9c96869fb360ac77f6),
};

pub(crate) const BASEPOINT_Y: ExtensionFieldElement = ExtensionFieldElement {
    a: FieldElement127::from_canonical(0x0e3fee9ba120785ab924a2462bcbb287),
    b: FieldElement127::from_canonical(0x6e1c4af8630e024249a7c344844c8b5c),
};

pub(crate) const BASEPOINT_T: ExtensionFieldElement = ExtensionFieldElement {
    a: FieldElement127::from_canonical(0x35bfa1947fb0913e894ba36ee8cee416),
    b: FieldElement127::from_canonical(0x7bfb41a38e7076ac673c574d296cd8d0),
};
