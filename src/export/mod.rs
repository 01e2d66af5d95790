/// Artifact writers — 8-bit PNGs, float EXR elevation, and the JSON manifest.
pub mod exr;
pub mod json;
pub mod png;

pub use exr::export_elevation_exr;
pub use json::export_manifest;
pub use png::{export_landmass_png, export_terrain_png};
