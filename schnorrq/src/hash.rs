// -*- mode: rust; -*-
//
// This file is part of schnorrq.
// See LICENSE for licensing information.

//! KangarooTwelve, the extendable-output function behind key derivation,
//! nonce generation and the challenge transcript.

use tiny_keccak::{Hasher, KangarooTwelve};

use crate::constants::HASH_LENGTH;

/// Hash `input` with KangarooTwelve (empty customization string), filling
/// all of `output`.
pub fn k12(input: &[u8], output: &mut [u8]) {
    let mut hasher = KangarooTwelve::new(b"");
    hasher.update(input);
    hasher.finalize(output);
}

/// Absorb `segments` in order and squeeze 64 bytes.
///
/// Equivalent to hashing the concatenation of the segments.
pub(crate) fn k12_64(segments: &[&[u8]]) -> [u8; HASH_LENGTH] {
    let mut hasher = KangarooTwelve::new(b"");
    for segment in segments {
        hasher.update(segment);
    }
    let mut output = [0u8; HASH_LENGTH];
    hasher.finalize(&mut output);
    output
}

#[cfg(test)]
mod test {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn k12_known_answer() {
        let input: [u8; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
        let mut output = [0u8; 32];
        k12(&input, &mut output);
        assert_eq!(
            output,
            hex!("e5ef1dd415a069d5c1ee20a731c271d751ec9f301bfb8a51acf27828d231e305")
        );
    }

    #[test]
    fn segments_match_concatenation() {
        let a = [0x11u8; 32];
        let b = [0x22u8; 32];
        let c = [0x33u8; 32];

        let mut joined = [0u8; 96];
        joined[..32].copy_from_slice(&a);
        joined[32..64].copy_from_slice(&b);
        joined[64..].copy_from_slice(&c);

        let mut expected = [0u8; 64];
        k12(&joined, &mut expected);
        assert_eq!(k12_64(&[&a[..], &b[..], &c[..]]), expected);
    }

    #[test]
    fn short_output_is_prefix_of_long_output() {
        let mut short = [0u8; 32];
        k12(b"fourq", &mut short);
        let long = k12_64(&[&b"fourq"[..]]);
        assert_eq!(short[..], long[..32]);
    }
}
