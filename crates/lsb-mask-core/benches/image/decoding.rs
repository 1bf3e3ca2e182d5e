use criterion::{criterion_group, criterion_main, Criterion};
use image::{ImageBuffer, Rgb, RgbImage};
use lsb_mask_core::{decode, encode, render};

pub fn image_decoding(c: &mut Criterion) {
    c.bench_function("Image Decoding", |b| {
        let plain_image: RgbImage =
            ImageBuffer::from_fn(1024, 768, |x, y| Rgb([(x * y) as u8, y as u8, x as u8]));
        let image_with_secret = encode(&plain_image, &render("Hello World!", 1024, 768))
            .expect("Cannot hide secret message");

        b.iter(|| decode(&image_with_secret))
    });
}

criterion_group!(benches, image_decoding);
criterion_main!(benches);
