// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

#[macro_use]
extern crate criterion;

use criterion::Criterion;
use seamcarve::{CostModel, ForwardEnergy, GradientEnergy, PixelBuffer, SeamCarver, SeamFinder};

fn sample(width: u32, height: u32) -> PixelBuffer {
    PixelBuffer::from_fn(width, height, |x, y| {
        [(x * 7 + y * 3) as u8, (x * y) as u8, (255 - (x + y) % 256) as u8]
    })
}

fn cost_fields(c: &mut Criterion) {
    let image = sample(160, 120);
    let forward = image.clone();
    c.bench_function("gradient field 160x120", move |b| {
        b.iter(|| GradientEnergy.cost_field(&image).unwrap())
    });
    c.bench_function("forward field 160x120", move |b| {
        b.iter(|| ForwardEnergy.cost_field(&forward).unwrap())
    });
}

fn seams(c: &mut Criterion) {
    let image = sample(160, 120);
    c.bench_function("forward seam 160x120", move |b| {
        b.iter(|| ForwardEnergy.find_vertical_seam(&image).unwrap())
    });
}

fn retarget(c: &mut Criterion) {
    let image = sample(96, 64);
    c.bench_function("carve 16 seams from 96x64", move |b| {
        b.iter(|| SeamCarver::new(ForwardEnergy).carve(image.clone(), 16).unwrap())
    });
}

criterion_group!(benches, cost_fields, seams, retarget);
criterion_main!(benches);
