use criterion::{Criterion, black_box, criterion_group, criterion_main};
use sandpanel_core::{
    header::{render_stage, render_universe},
    image::Image,
    stages::encode_stage,
    universe::encode_universe,
};

const SIZE: u32 = 32;

/// Gradient with a diagonal band of translucent pixels.
fn test_image() -> Image {
    let mut image = Image::filled(SIZE, SIZE, [0, 0, 0, 0xFF]);
    for y in 0..SIZE {
        for x in 0..SIZE {
            let alpha = if (x + y) % 8 == 0 { 0x80 } else { 0xFF };
            image.set_pixel(x, y, [(x * 8) as u8, (y * 8) as u8, (x ^ y) as u8, alpha]);
        }
    }
    image
}

fn bench_encode(c: &mut Criterion) {
    let image = test_image();
    c.bench_function("encode_stage", |b| {
        b.iter(|| encode_stage(black_box(&image), SIZE, false).unwrap())
    });
    c.bench_function("encode_stage_gamma", |b| {
        b.iter(|| encode_stage(black_box(&image), SIZE, true).unwrap())
    });
    c.bench_function("encode_universe", |b| {
        b.iter(|| encode_universe(black_box(&image), SIZE).unwrap())
    });
}

fn bench_render(c: &mut Criterion) {
    let image = test_image();
    let stage = encode_stage(&image, SIZE, true).unwrap();
    let universe = encode_universe(&image, SIZE).unwrap();
    c.bench_function("render_stage", |b| {
        b.iter(|| render_stage("BENCH", black_box(&stage)))
    });
    c.bench_function("render_universe", |b| {
        b.iter(|| render_universe("BENCH", black_box(&universe)))
    });
}

criterion_group!(benches, bench_encode, bench_render);
criterion_main!(benches);
