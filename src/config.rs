/// Run configuration for the terrain pipeline.
///
/// Every tunable the pipeline reads lives here, so the two shipped terrain
/// variants are just two preset values of the same struct instead of two
/// near-identical programs. The struct is immutable once built and is
/// serialized verbatim into each run's `manifest.json`.
use serde::Serialize;

/// Post-processing trim applied to the smooth preset: resize to an
/// intermediate width (aspect preserved), drop a column range at both edges,
/// then resize to the final output dimensions. Every buffer that is trimmed
/// goes through the exact same three steps so coastlines stay aligned.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct TrimConfig {
    pub intermediate_width: usize,
    /// Columns to keep after the first resize, `crop_min..crop_max`.
    pub crop_min: usize,
    pub crop_max: usize,
    pub final_width: usize,
    pub final_height: usize,
}

#[derive(Clone, Debug, Serialize)]
pub struct TerrainConfig {
    /// Human-readable preset name, used for the output subdirectory.
    pub name: &'static str,
    pub width: usize,
    pub height: usize,
    /// Base seed; octave `f` of the fractal noise uses `seed + f`, so a run
    /// is fully reproducible from this one value.
    pub seed: u32,

    /// Base frequency of the first noise octave.
    pub noise_frequency: f64,
    /// Number of fBm octaves summed.
    pub noise_layers: u32,
    /// Periodic noise along each axis.
    pub wrap_x: bool,
    pub wrap_y: bool,

    /// Half-extents of the falloff ellipse, in normalized image coordinates.
    pub falloff_stretch: (f32, f32),
    /// Warp offset magnitudes in pixels, per axis.
    pub warp: (f32, f32),
    /// Island field values below this are classified as sea.
    pub sea_threshold: f32,

    /// Quantize elevation into bands of this width (banded preset). `None`
    /// leaves the elevation smooth.
    pub quantize_bin_width: Option<f32>,
    /// Blend sea normals toward straight-up before lighting (smooth preset).
    pub flatten_sea_normals: bool,
    /// Light direction, normalized before use.
    pub light_dir: [f32; 3],

    /// Color ramp image path (first row read as 256 RGB stops). `None` uses
    /// the built-in island ramp.
    pub gradient_path: Option<String>,
    /// Edge-artifact trim (smooth preset).
    pub trim: Option<TrimConfig>,
}

impl TerrainConfig {
    /// Terraced elevation bands, full-frame output.
    pub fn banded(seed: u32) -> Self {
        TerrainConfig {
            name: "banded",
            quantize_bin_width: Some(0.2),
            flatten_sea_normals: false,
            trim: None,
            ..Self::base(seed)
        }
    }

    /// Smooth elevation, flattened sea normals, edges trimmed off.
    pub fn smooth(seed: u32) -> Self {
        TerrainConfig {
            name: "smooth",
            quantize_bin_width: None,
            flatten_sea_normals: true,
            trim: Some(TrimConfig {
                intermediate_width: 1500,
                crop_min: 50,
                crop_max: 1450,
                final_width: 1400,
                final_height: 500,
            }),
            ..Self::base(seed)
        }
    }

    fn base(seed: u32) -> Self {
        let (width, height) = (6000, 2000);
        TerrainConfig {
            name: "base",
            width,
            height,
            seed,
            noise_frequency: 6.0,
            noise_layers: 4,
            wrap_x: false,
            wrap_y: false,
            falloff_stretch: (0.5, 1.1),
            // One tenth of the image height, the same on both axes.
            warp: (height as f32 / 10.0, height as f32 / 10.0),
            sea_threshold: 0.1,
            quantize_bin_width: Some(0.2),
            flatten_sea_normals: false,
            light_dir: [0.5, -0.5, 1.0],
            gradient_path: None,
            trim: None,
        }
    }
}
