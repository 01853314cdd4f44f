use bitplane_core::{
    codecs::{image::StegaImage, text::StegaText},
    diff,
    image_wrapper::ImageWrapper,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::{hint::black_box, time::Duration};

/// The message hidden by the text benchmarks.
const TEXT: &str = "IT IS A FEZ I WEAR A FEZ NOW FEZZES ARE COOL";

enum ImagePattern {
    Gradient,
    Checkerboard,
    Noise,
}

/// The images used by the benchmarks, as (name, width, height, pattern).
const CONFIGS: [(&str, usize, usize, ImagePattern); 4] = [
    ("tiny", 320, 240, ImagePattern::Gradient),
    ("small", 640, 480, ImagePattern::Gradient),
    ("checkerboard", 1920, 1080, ImagePattern::Checkerboard),
    ("noise", 1920, 1080, ImagePattern::Noise),
];

fn generate_image(width: usize, height: usize, pattern: &ImagePattern) -> ImageWrapper {
    let mut bytes = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            let px = match pattern {
                ImagePattern::Gradient => [
                    ((x * 255) / width) as u8,
                    ((y * 255) / height) as u8,
                    (((x + y) * 255) / (width + height)) as u8,
                ],
                ImagePattern::Checkerboard => {
                    if ((x / 64) + (y / 64)) % 2 == 0 {
                        [40, 40, 45]
                    } else {
                        [220, 220, 225]
                    }
                }
                ImagePattern::Noise => {
                    // Deterministic hash based on position.
                    let hash = (x as u32)
                        .wrapping_mul(2654435761)
                        .wrapping_add((y as u32).wrapping_mul(2246822519))
                        .wrapping_add(12345);
                    [hash as u8, (hash >> 8) as u8, (hash >> 16) as u8]
                }
            };
            bytes.extend_from_slice(&px);
        }
    }

    ImageWrapper::from_rgb_bytes(width, height, bytes).expect("invalid benchmark image")
}

fn benchmark_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("text");
    group.measurement_time(Duration::from_secs(10));

    let stega = StegaText::new();
    for (name, width, height, pattern) in CONFIGS.iter() {
        let img = generate_image(*width, *height, pattern);
        let encoded = stega.hide_text(&img, TEXT).expect("failed to hide text").image;

        group.bench_with_input(BenchmarkId::new("hide", name), &img, |b, img| {
            b.iter(|| stega.hide_text(black_box(img), black_box(TEXT)))
        });
        group.bench_with_input(BenchmarkId::new("reveal", name), &encoded, |b, img| {
            b.iter(|| stega.reveal_text(black_box(img)))
        });
    }
    group.finish();
}

fn benchmark_image(c: &mut Criterion) {
    let mut group = c.benchmark_group("image");
    group.sample_size(20);
    group.measurement_time(Duration::from_secs(10));

    let stega = StegaImage::new();
    let secret = generate_image(320, 240, &ImagePattern::Checkerboard);
    for (name, width, height, pattern) in CONFIGS.iter() {
        let img = generate_image(*width, *height, pattern);

        group.bench_with_input(BenchmarkId::new("embed", name), &img, |b, img| {
            b.iter(|| stega.embed_image(black_box(img), black_box(&secret), 0, 0))
        });
        group.bench_with_input(BenchmarkId::new("extract", name), &img, |b, img| {
            b.iter(|| StegaImage::extract_image(black_box(img)))
        });
    }
    group.finish();
}

fn benchmark_diff(c: &mut Criterion) {
    let mut group = c.benchmark_group("diff");
    group.sample_size(20);

    for (name, width, height, pattern) in CONFIGS.iter() {
        let img = generate_image(*width, *height, pattern);
        let cleared = StegaImage::clear_low_bits(&img);

        group.bench_with_input(BenchmarkId::new("find_differences", name), &img, |b, img| {
            b.iter(|| diff::find_differences(black_box(img), black_box(&cleared)))
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_text, benchmark_image, benchmark_diff);
criterion_main!(benches);
