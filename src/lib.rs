//! Procedural fantasy-planet terrain pipeline.
//!
//! A strictly linear batch transform over dense raster buffers: a stretched
//! radial falloff is combined with fractal gradient noise, domain-warped into
//! organic coastlines, thresholded into a landmass mask, turned into a
//! normalized coastal distance field, shaded (skylight occlusion + surface
//! normals + diffuse lighting) and colorized through a 1D color ramp. Two
//! presets of [`TerrainConfig`] cover the shipped variants: terraced
//! elevation bands, and smooth elevation with flattened sea normals and
//! trimmed edges.
//!
//! The [`orbit`] module is an unrelated small utility: the orbit-camera
//! angle/vector conversion, with its own demo binary.
pub mod colorize;
pub mod config;
pub mod elevation;
pub mod export;
pub mod falloff;
pub mod fbm;
pub mod grid;
pub mod orbit;
pub mod pipeline;
pub mod sdf;
pub mod shading;
pub mod warp;

pub use config::{TerrainConfig, TrimConfig};
pub use pipeline::{TerrainArtifacts, generate_terrain};
