//! Performance measurement for full tileset generation at varying sprite sizes

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use autotile::TilesetGenerator;
use autotile::fragments::{CenterBox, SourceImage};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use image::{DynamicImage, Rgba, RgbaImage};
use std::hint::black_box;

fn synthetic_source(sprite_size: u32) -> Option<SourceImage> {
    let mut img = RgbaImage::new(sprite_size * 2, sprite_size);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        *pixel = Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255]);
    }
    SourceImage::new(DynamicImage::ImageRgba8(img)).ok()
}

fn centered_box(sprite_size: u32) -> CenterBox {
    let quarter = sprite_size / 4;
    CenterBox::new(quarter, quarter, sprite_size - quarter, sprite_size - quarter)
}

/// Measures generation of the full 47-tile list as the sprite size grows
fn bench_tile_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("tile_list");

    for sprite_size in &[16u32, 32, 64, 128] {
        group.bench_with_input(
            BenchmarkId::from_parameter(sprite_size),
            sprite_size,
            |b, &sprite_size| {
                b.iter(|| {
                    let Some(source) = synthetic_source(sprite_size) else {
                        return;
                    };
                    let mut generator =
                        TilesetGenerator::new(source, centered_box(sprite_size));
                    black_box(generator.tile_list());
                });
            },
        );
    }

    group.finish();
}

/// Measures sheet packing separately from tile generation
fn bench_merge_sheet(c: &mut Criterion) {
    let Some(source) = synthetic_source(32) else {
        return;
    };
    let mut generator = TilesetGenerator::new(source, centered_box(32));
    let tiles = generator.tile_list();

    c.bench_function("merge_sheet", |b| {
        b.iter(|| {
            black_box(generator.merge_to_sheet(black_box(&tiles)));
        });
    });
}

criterion_group!(benches, bench_tile_list, bench_merge_sheet);
criterion_main!(benches);
