/// The linear terrain pipeline: falloff → noise → warp → mask → elevation →
/// shading → color, each stage consuming the previous stage's buffer.
///
/// There is no branching back and no partial recomputation; a run either
/// completes whole-frame or fails fatally at the stage that broke.
use crate::colorize::{ColorRamp, colorize};
use crate::config::{TerrainConfig, TrimConfig};
use crate::elevation::{quantize, sea_mask, synthesize_elevation};
use crate::falloff::falloff_field;
use crate::fbm::fbm;
use crate::grid::{Grid, Grid3};
use crate::shading::{apply_lighting, compute_normals, compute_skylight, flatten_sea_normals};
use crate::warp::warp_field;
use image::ImageResult;

/// Everything a run produces, ready for export.
pub struct TerrainArtifacts {
    /// Normalized (optionally terraced) elevation, full frame.
    pub elevation: Grid,
    /// Land-only height image (water collapsed to 0), trimmed if configured.
    pub landmass: Grid,
    /// Per-pixel lighting scalar (lambert × occlusion), full frame.
    pub lighting: Grid,
    /// Final lit/colored terrain, trimmed if configured.
    pub terrain: Grid3,
}

/// Scale the falloff-and-noise combination into the island field:
/// `falloff · (falloff/2 + noise)`. Terrain can only rise where the falloff
/// is positive, which keeps the landmass away from the image edges.
pub fn island_field(falloff: &Grid, noise: &Grid) -> Grid {
    falloff.zip(noise, |f, n| f * (f / 2.0 + n))
}

/// Run the whole pipeline for one configuration.
///
/// The only fallible step is reading a configured gradient image; everything
/// else is pure buffer math.
pub fn generate_terrain(config: &TerrainConfig) -> ImageResult<TerrainArtifacts> {
    let (w, h) = (config.width, config.height);

    println!("[terrain] creating the stretched falloff field");
    let falloff = falloff_field(w, h, config.falloff_stretch);

    println!("[terrain] layering gradient noise");
    let noise = fbm(
        w,
        h,
        config.noise_frequency,
        config.noise_layers,
        config.seed,
        config.wrap_x,
        config.wrap_y,
    );
    let island = island_field(&falloff, &noise);

    println!("[terrain] warping the island field");
    let warped = warp_field(&island, &noise, config.warp);

    println!("[terrain] thresholding into the landmass mask");
    let sea = sea_mask(&warped, config.sea_threshold);

    println!("[terrain] computing the coastal distance field");
    let mut elevation = synthesize_elevation(&sea);
    if let Some(bin_width) = config.quantize_bin_width {
        println!("[terrain] quantizing into elevation bands");
        elevation = quantize(&elevation, bin_width);
    }

    println!("[terrain] computing ambient occlusion");
    let occlusion = compute_skylight(&elevation).map(|v| 0.25 + 0.75 * v);

    println!("[terrain] generating the normal map");
    let mut normals = compute_normals(&elevation);
    if config.flatten_sea_normals {
        normals = flatten_sea_normals(&normals, &elevation);
    }

    println!("[terrain] applying diffuse lighting");
    let lighting = apply_lighting(&normals, &occlusion, config.light_dir);

    println!("[terrain] applying the color ramp");
    let ramp = match &config.gradient_path {
        Some(path) => ColorRamp::from_image(path)?,
        None => ColorRamp::built_in(),
    };
    let mut terrain = colorize(&elevation, &lighting, &ramp);

    // Land-only height view of the elevation field.
    let mut landmass = elevation.map(|v| v.max(0.0));

    if let Some(trim) = config.trim {
        println!("[terrain] trimming edge artifacts");
        landmass = trim_grid(&landmass, trim);
        terrain = trim_grid3(&terrain, trim);
    }

    Ok(TerrainArtifacts {
        elevation,
        landmass,
        lighting,
        terrain,
    })
}

// Both trim paths share the exact same resize/crop/resize parameters, so the
// land/sea boundary stays aligned between the height and color outputs.

fn trim_grid(grid: &Grid, trim: TrimConfig) -> Grid {
    let mid_h = trim.intermediate_width * grid.height() / grid.width();
    grid.resized(trim.intermediate_width, mid_h)
        .cropped_columns(trim.crop_min, trim.crop_max)
        .resized(trim.final_width, trim.final_height)
}

fn trim_grid3(grid: &Grid3, trim: TrimConfig) -> Grid3 {
    let mid_h = trim.intermediate_width * grid.height() / grid.width();
    grid.resized(trim.intermediate_width, mid_h)
        .cropped_columns(trim.crop_min, trim.crop_max)
        .resized(trim.final_width, trim.final_height)
}
