/// Elevation-to-color mapping through a 1D lookup ramp, plus the final
/// albedo × lighting combine.
///
/// The ramp is 256 RGB stops, either read from the first row of a gradient
/// image or built in. Stops 0–127 are the water band: they are all forced to
/// the color of stop 126, so everything at or below sea level renders as one
/// flat water color.
use crate::grid::{Grid, Grid3};
use image::ImageResult;
use std::path::Path;

/// Stops below this index are the water band.
pub const WATER_BAND_END: usize = 128;
/// The single stop whose color the whole water band takes.
pub const WATER_REFERENCE_STOP: usize = 126;

pub struct ColorRamp {
    stops: Vec<[f32; 3]>,
}

impl ColorRamp {
    /// Read the ramp from the first row of a gradient image.
    pub fn from_image(path: impl AsRef<Path>) -> ImageResult<ColorRamp> {
        let img = image::open(path)?.to_rgb32f();
        let stops = (0..img.width()).map(|x| img.get_pixel(x, 0).0).collect();
        Ok(ColorRamp::new(stops))
    }

    /// Built-in island ramp used when no gradient image is configured:
    /// ocean blues through sand, grass, forest and rock up to snow. The land
    /// colors are concentrated where [`elevation_to_index`] actually lands
    /// (roughly stops 125–177).
    pub fn built_in() -> ColorRamp {
        const CONTROL: [(f32, [f32; 3]); 8] = [
            (0.00, [0.06, 0.12, 0.31]),
            (0.40, [0.10, 0.27, 0.55]),
            (0.502, [0.76, 0.70, 0.50]),
            (0.53, [0.31, 0.59, 0.27]),
            (0.60, [0.13, 0.43, 0.16]),
            (0.65, [0.51, 0.45, 0.37]),
            (0.69, [0.96, 0.96, 0.98]),
            (1.00, [1.00, 1.00, 1.00]),
        ];
        let stops = (0..256)
            .map(|i| {
                let t = i as f32 / 255.0;
                let hi = CONTROL.iter().position(|&(p, _)| p >= t).unwrap_or(7);
                if hi == 0 {
                    return CONTROL[0].1;
                }
                let (p0, c0) = CONTROL[hi - 1];
                let (p1, c1) = CONTROL[hi];
                let f = (t - p0) / (p1 - p0);
                [
                    c0[0] + (c1[0] - c0[0]) * f,
                    c0[1] + (c1[1] - c0[1]) * f,
                    c0[2] + (c1[2] - c0[2]) * f,
                ]
            })
            .collect();
        ColorRamp::new(stops)
    }

    fn new(mut stops: Vec<[f32; 3]>) -> ColorRamp {
        assert!(!stops.is_empty(), "color ramp needs at least one stop");
        if stops.len() >= WATER_BAND_END {
            let water = stops[WATER_REFERENCE_STOP];
            for stop in &mut stops[..WATER_BAND_END] {
                *stop = water;
            }
        }
        ColorRamp { stops }
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Piecewise-linear sample over stop index; indices clamp to the ramp.
    pub fn sample(&self, index: f32) -> [f32; 3] {
        let max = (self.stops.len() - 1) as f32;
        let index = index.clamp(0.0, max);
        let lo = index.floor() as usize;
        let hi = (lo + 1).min(self.stops.len() - 1);
        let f = index - lo as f32;
        let (a, b) = (self.stops[lo], self.stops[hi]);
        [
            a[0] + (b[0] - a[0]) * f,
            a[1] + (b[1] - a[1]) * f,
            a[2] + (b[2] - a[2]) * f,
        ]
    }
}

/// Map normalized elevation to a ramp index:
/// `clamp(255·(e·0.2 + 0.49), 0, 255)`. Sea level (0) lands just inside the
/// water band; peak land (1) reaches stop 176.
#[inline]
pub fn elevation_to_index(elevation: f32) -> f32 {
    (255.0 * (elevation * 0.2 + 0.49)).clamp(0.0, 255.0)
}

/// Look up per-pixel albedo from elevation and multiply by the lighting
/// scalar (broadcast across channels) to produce the final color buffer.
pub fn colorize(elevation: &Grid, lighting: &Grid, ramp: &ColorRamp) -> Grid3 {
    Grid3::from_fn(elevation.width(), elevation.height(), |x, y| {
        let albedo = ramp.sample(elevation_to_index(elevation.get(x, y)));
        let light = lighting.get(x, y);
        [albedo[0] * light, albedo[1] * light, albedo[2] * light]
    })
}
