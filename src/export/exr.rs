/// Float elevation output.
///
/// OpenEXR keeps the signed/normalized range intact, which an 8-bit format
/// would destroy; the elevation value is replicated across all three
/// channels.
use crate::grid::Grid;
use image::Rgb32FImage;

pub fn export_elevation_exr(elevation: &Grid, path: &str) {
    let mut img = Rgb32FImage::new(elevation.width() as u32, elevation.height() as u32);
    for y in 0..elevation.height() {
        for x in 0..elevation.width() {
            let v = elevation.get(x, y);
            img.put_pixel(x as u32, y as u32, image::Rgb([v, v, v]));
        }
    }
    img.save(path)
        .unwrap_or_else(|e| panic!("failed to save {path}: {e}"));
    println!("[export] wrote {path}");
}
