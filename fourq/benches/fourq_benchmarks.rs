// -*- mode: rust; -*-
//
// This file is part of fourq.
// See LICENSE for licensing information.

#![allow(non_snake_case)]

use criterion::{criterion_group, criterion_main, Criterion};

use fourq::constants;
use fourq::scalar::Scalar;
use fourq::EdwardsPoint;

use rand::Rng;

mod edwards_benches {
    use super::*;

    fn compress(c: &mut Criterion) {
        let B = &constants::BASEPOINT;
        c.bench_function("FourQ point compression", move |b| {
            b.iter(|| B.compress())
        });
    }

    fn decompress(c: &mut Criterion) {
        let B_comp = &constants::BASEPOINT_COMPRESSED;
        c.bench_function("FourQ point decompression", move |b| {
            b.iter(|| B_comp.decompress().unwrap())
        });
    }

    fn point_add(c: &mut Criterion) {
        let B = &constants::BASEPOINT;
        let B2 = B.double();
        c.bench_function("FourQ point addition", move |b| b.iter(|| B + &B2));
    }

    fn scalar_mul(c: &mut Criterion) {
        let mut rng = rand::thread_rng();
        let s = Scalar::from_bytes_mod_order(rng.gen());
        c.bench_function("FourQ variable-time scalar multiplication", move |b| {
            b.iter(|| EdwardsPoint::mul_base(&s))
        });
    }

    criterion_group! {
        name = edwards_benches;
        config = Criterion::default();
        targets =
            compress,
            decompress,
            point_add,
            scalar_mul,
    }
}

mod scalar_benches {
    use super::*;

    fn scalar_reduce(c: &mut Criterion) {
        let mut rng = rand::thread_rng();
        let bytes: [u8; 32] = rng.gen();
        c.bench_function("Scalar reduction mod q", move |b| {
            b.iter(|| fourq::scalar::reduce(&bytes))
        });
    }

    fn scalar_mul(c: &mut Criterion) {
        let mut rng = rand::thread_rng();
        let x = Scalar::from_bytes_mod_order(rng.gen());
        let y = Scalar::from_bytes_mod_order(rng.gen());
        c.bench_function("Scalar multiplication", move |b| b.iter(|| &x * &y));
    }

    criterion_group! {
        name = scalar_benches;
        config = Criterion::default();
        targets =
            scalar_reduce,
            scalar_mul,
    }
}

criterion_main!(edwards_benches::edwards_benches, scalar_benches::scalar_benches);
