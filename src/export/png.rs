/// 8-bit PNG outputs: the final colored terrain and the landmass height image.
use crate::grid::{Grid, Grid3};
use image::{GrayImage, Luma, Rgb, RgbImage};

#[inline]
fn to_byte(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Convert a color buffer to an 8-bit RGB image. Values clamp into `[0, 1]`
/// first: unclamped lighting can push colors below zero, and those render
/// as black.
pub fn to_rgb_image(terrain: &Grid3) -> RgbImage {
    let mut img = RgbImage::new(terrain.width() as u32, terrain.height() as u32);
    for y in 0..terrain.height() {
        for x in 0..terrain.width() {
            let [r, g, b] = terrain.get(x, y);
            img.put_pixel(x as u32, y as u32, Rgb([to_byte(r), to_byte(g), to_byte(b)]));
        }
    }
    img
}

/// Convert a single-channel buffer to an 8-bit grayscale image.
pub fn to_gray_image(grid: &Grid) -> GrayImage {
    let mut img = GrayImage::new(grid.width() as u32, grid.height() as u32);
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            img.put_pixel(x as u32, y as u32, Luma([to_byte(grid.get(x, y))]));
        }
    }
    img
}

pub fn export_terrain_png(terrain: &Grid3, path: &str) {
    to_rgb_image(terrain)
        .save(path)
        .unwrap_or_else(|e| panic!("failed to save {path}: {e}"));
    println!("[export] wrote {path}");
}

pub fn export_landmass_png(landmass: &Grid, path: &str) {
    to_gray_image(landmass)
        .save(path)
        .unwrap_or_else(|e| panic!("failed to save {path}: {e}"));
    println!("[export] wrote {path}");
}
