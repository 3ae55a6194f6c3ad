use criterion::{Criterion, criterion_group, criterion_main};
use image::{Rgb, RgbImage};
use image_shell::config::ShellConfig;
use image_shell::imaging::{resize_to_fit, to_color_image};
use std::hint::black_box;

const INPUTS: &[(u32, u32)] = &[(640, 480), (1920, 1080), (4000, 3000), (6000, 4000)];

fn display_stages_benchmark(c: &mut Criterion) {
    let config = ShellConfig::default();

    for &(width, height) in INPUTS {
        let mut group = c.benchmark_group(format!("Display: {width}x{height}"));
        let image = RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, ((x ^ y) % 256) as u8])
        });

        group.bench_function("Resize to fit", |b| {
            b.iter(|| {
                black_box(resize_to_fit(
                    black_box(&image),
                    config.max_width,
                    config.max_height,
                    config.filter,
                ))
            })
        });

        let fitted = resize_to_fit(&image, config.max_width, config.max_height, config.filter);
        group.bench_function("Convert to texture", |b| {
            b.iter(|| black_box(to_color_image(black_box(&fitted))))
        });

        group.finish();
    }
}

criterion_group!(benches, display_stages_benchmark);
criterion_main!(benches);
