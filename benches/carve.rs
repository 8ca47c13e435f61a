use criterion::{criterion_group, criterion_main, Criterion};
use seamcut::{Raster, Rgb, SeamCarver, SeamFinder};

fn synthetic(width: u32, height: u32) -> Raster<Rgb<u8>> {
    let cells = (0..width as usize * height as usize)
        .map(|i| {
            let x = (i % width as usize) as u32;
            let y = (i / width as usize) as u32;
            let v = ((x * 7 + y * 13) % 251) as u8;
            Rgb::new(v, v.wrapping_mul(3), 255 - v)
        })
        .collect();
    Raster::from_cells(width, height, cells).unwrap()
}

fn bench_vertical_seam(c: &mut Criterion) {
    let carver = SeamCarver::new(synthetic(128, 96));
    c.bench_function("find_vertical_seam_128x96", move |b| {
        b.iter(|| carver.find_vertical_seam())
    });
}

fn bench_carve(c: &mut Criterion) {
    c.bench_function("carve_64x64_to_56x56", |b| {
        b.iter(|| {
            let mut carver = SeamCarver::new(synthetic(64, 64));
            carver.carve(56, 56).unwrap();
            carver.width()
        })
    });
}

criterion_group!(benches, bench_vertical_seam, bench_carve);
criterion_main!(benches);
