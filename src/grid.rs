/// Dense raster buffers shared by every pipeline stage.
///
/// Every stage of the terrain pipeline consumes and produces one of two buffer
/// shapes: [`Grid`] (one `f32` channel) or [`Grid3`] (three `f32` channels).
/// Both are row-major: `index = y * width + x`.
use image::imageops::{self, FilterType};
use image::{ImageBuffer, Luma, Rgb};

/// Resampling filter used for every resize in the pipeline, so land/sea
/// boundaries stay aligned between buffers that are trimmed separately.
pub const RESIZE_FILTER: FilterType = FilterType::Triangle;

// ── Single-channel grid ───────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    width: usize,
    height: usize,
    data: Vec<f32>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Grid {
            width,
            height,
            data: vec![0.0; width * height],
        }
    }

    /// Build a grid by evaluating `f(x, y)` at every pixel.
    pub fn from_fn(width: usize, height: usize, f: impl Fn(usize, usize) -> f32) -> Self {
        let mut data = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Grid {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: f32) {
        self.data[y * self.width + x] = v;
    }

    /// Fetch with coordinates clamped to the buffer extent. Out-of-range
    /// lookups snap to the nearest edge pixel rather than wrapping.
    #[inline]
    pub fn get_clamped(&self, x: isize, y: isize) -> f32 {
        let cx = x.clamp(0, self.width as isize - 1) as usize;
        let cy = y.clamp(0, self.height as isize - 1) as usize;
        self.get(cx, cy)
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// New grid with `f` applied to every value.
    pub fn map(&self, f: impl Fn(f32) -> f32) -> Grid {
        Grid {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }

    /// New grid combining two same-shape grids pixel-wise.
    pub fn zip(&self, other: &Grid, f: impl Fn(f32, f32) -> f32) -> Grid {
        assert_eq!(self.width, other.width);
        assert_eq!(self.height, other.height);
        Grid {
            width: self.width,
            height: self.height,
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(&a, &b)| f(a, b))
                .collect(),
        }
    }

    pub fn max(&self) -> f32 {
        self.data.iter().cloned().fold(f32::NEG_INFINITY, f32::max)
    }

    pub fn max_abs(&self) -> f32 {
        self.data.iter().fold(0.0f32, |m, v| m.max(v.abs()))
    }

    /// Bilinear resize via `image::imageops`, always with [`RESIZE_FILTER`].
    pub fn resized(&self, width: usize, height: usize) -> Grid {
        let img: ImageBuffer<Luma<f32>, Vec<f32>> =
            ImageBuffer::from_raw(self.width as u32, self.height as u32, self.data.clone())
                .expect("grid dimensions out of sync with backing buffer");
        let resized = imageops::resize(&img, width as u32, height as u32, RESIZE_FILTER);
        Grid {
            width,
            height,
            data: resized.into_raw(),
        }
    }

    /// Keep only columns `x0..x1`.
    pub fn cropped_columns(&self, x0: usize, x1: usize) -> Grid {
        assert!(x0 < x1 && x1 <= self.width, "invalid column range");
        let mut data = Vec::with_capacity((x1 - x0) * self.height);
        for y in 0..self.height {
            data.extend_from_slice(&self.data[y * self.width + x0..y * self.width + x1]);
        }
        Grid {
            width: x1 - x0,
            height: self.height,
            data,
        }
    }
}

// ── Three-channel grid ────────────────────────────────────────────────────────

/// Row-major buffer of `[f32; 3]` texels, used for normals and RGB color.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid3 {
    width: usize,
    height: usize,
    data: Vec<[f32; 3]>,
}

impl Grid3 {
    pub fn from_fn(width: usize, height: usize, f: impl Fn(usize, usize) -> [f32; 3]) -> Self {
        let mut data = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Grid3 {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> [f32; 3] {
        self.data[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: [f32; 3]) {
        self.data[y * self.width + x] = v;
    }

    pub fn map(&self, f: impl Fn([f32; 3]) -> [f32; 3]) -> Grid3 {
        Grid3 {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Bilinear resize via `image::imageops`, always with [`RESIZE_FILTER`].
    pub fn resized(&self, width: usize, height: usize) -> Grid3 {
        let flat: Vec<f32> = self.data.iter().flatten().copied().collect();
        let img: ImageBuffer<Rgb<f32>, Vec<f32>> =
            ImageBuffer::from_raw(self.width as u32, self.height as u32, flat)
                .expect("grid dimensions out of sync with backing buffer");
        let resized = imageops::resize(&img, width as u32, height as u32, RESIZE_FILTER);
        let data = resized.pixels().map(|p| p.0).collect();
        Grid3 {
            width,
            height,
            data,
        }
    }

    /// Keep only columns `x0..x1`.
    pub fn cropped_columns(&self, x0: usize, x1: usize) -> Grid3 {
        assert!(x0 < x1 && x1 <= self.width, "invalid column range");
        let mut data = Vec::with_capacity((x1 - x0) * self.height);
        for y in 0..self.height {
            data.extend_from_slice(&self.data[y * self.width + x0..y * self.width + x1]);
        }
        Grid3 {
            width: x1 - x0,
            height: self.height,
            data,
        }
    }
}

// ── Boolean mask ──────────────────────────────────────────────────────────────

/// Land/sea classification produced by thresholding the warped island field.
#[derive(Clone, Debug, PartialEq)]
pub struct Mask {
    width: usize,
    height: usize,
    data: Vec<bool>,
}

impl Mask {
    pub fn from_fn(width: usize, height: usize, f: impl Fn(usize, usize) -> bool) -> Self {
        let mut data = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Mask {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.data[y * self.width + x]
    }

    /// New mask with every pixel inverted.
    pub fn inverted(&self) -> Mask {
        Mask {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(|&b| !b).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_fn_is_row_major() {
        let g = Grid::from_fn(3, 2, |x, y| (y * 10 + x) as f32);
        assert_eq!(g.data(), &[0.0, 1.0, 2.0, 10.0, 11.0, 12.0]);
        assert_eq!(g.get(2, 1), 12.0);
    }

    #[test]
    fn clamped_lookup_snaps_to_edges() {
        let g = Grid::from_fn(4, 3, |x, y| (y * 4 + x) as f32);
        assert_eq!(g.get_clamped(-5, -5), g.get(0, 0));
        assert_eq!(g.get_clamped(100, 1), g.get(3, 1));
        assert_eq!(g.get_clamped(2, 99), g.get(2, 2));
    }

    #[test]
    fn max_abs_sees_negative_values() {
        let g = Grid::from_fn(2, 2, |x, y| if x == 0 && y == 0 { -3.0 } else { 1.0 });
        assert_eq!(g.max_abs(), 3.0);
        assert_eq!(g.max(), 1.0);
    }

    #[test]
    fn cropped_columns_keeps_requested_range() {
        let g = Grid::from_fn(5, 2, |x, _| x as f32);
        let c = g.cropped_columns(1, 4);
        assert_eq!(c.width(), 3);
        assert_eq!(c.height(), 2);
        assert_eq!(c.data(), &[1.0, 2.0, 3.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn resize_preserves_constant_fields() {
        let g = Grid::from_fn(8, 8, |_, _| 0.75);
        let r = g.resized(4, 4);
        assert_eq!(r.width(), 4);
        for y in 0..4 {
            for x in 0..4 {
                assert!((r.get(x, y) - 0.75).abs() < 1e-5);
            }
        }
    }
}
