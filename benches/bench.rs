// Copyright 2022 houseme
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use criterion::{Criterion, criterion_group, criterion_main};
use flake_me::{Flake, Flaker};

fn bench_new(c: &mut Criterion) {
    c.bench_function("bench_flaker_new", |b| {
        b.iter(Flaker::new);
    });
}

fn bench_next(c: &mut Criterion) {
    let flaker = Flaker::new();
    c.bench_function("bench_next", |b| {
        b.iter(|| flaker.next());
    });
    c.bench_function("bench_next_raw", |b| {
        b.iter(|| flaker.next_raw());
    });
}

fn bench_codec(c: &mut Criterion) {
    let id = Flaker::new().next();
    let encoded = id.to_base64();
    c.bench_function("bench_encode_base64", |b| {
        b.iter(|| id.to_base64());
    });
    c.bench_function("bench_decode_base64", |b| {
        b.iter(|| Flake::decode(&encoded));
    });
}

criterion_group!(flake_perf, bench_new, bench_next, bench_codec);
criterion_main!(flake_perf);
