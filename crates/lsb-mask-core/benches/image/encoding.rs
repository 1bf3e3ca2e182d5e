use criterion::{criterion_group, criterion_main, Criterion};
use image::{ImageBuffer, Rgb, RgbImage};
use lsb_mask_core::{encode, render};

pub fn image_encoding(c: &mut Criterion) {
    c.bench_function("Image Encoding", |b| {
        let plain_image: RgbImage =
            ImageBuffer::from_fn(1024, 768, |x, y| Rgb([(x + y) as u8, x as u8, y as u8]));
        let mask = render("Hello World!", 1024, 768);

        b.iter(|| encode(&plain_image, &mask).expect("Cannot hide secret message"))
    });
}

pub fn text_rendering(c: &mut Criterion) {
    c.bench_function("Text Rendering", |b| {
        let text = "The quick brown fox jumps over the lazy dog. ".repeat(20);

        b.iter(|| render(&text, 1024, 768))
    });
}

criterion_group!(benches, image_encoding, text_rendering);
criterion_main!(benches);
