use planet_terrain::export::{
    export_elevation_exr, export_landmass_png, export_manifest, export_terrain_png,
};
use planet_terrain::{TerrainConfig, generate_terrain};

fn main() {
    // One random base seed per run; every noise octave derives its seed from
    // it, so the printed seed reproduces both variants exactly.
    let seed: u32 = rand::random();

    for config in [TerrainConfig::banded(seed), TerrainConfig::smooth(seed)] {
        println!("[terrain] generating '{}' (seed {seed})", config.name);
        let dir = format!("terrain/{seed}/{}", config.name);
        std::fs::create_dir_all(&dir).expect("failed to create output directory");

        let artifacts = generate_terrain(&config).expect("terrain generation failed");

        export_elevation_exr(&artifacts.elevation, &format!("{dir}/elevation.exr"));
        export_landmass_png(&artifacts.landmass, &format!("{dir}/landmass.png"));
        export_terrain_png(&artifacts.terrain, &format!("{dir}/terrain.png"));
        export_manifest(&config, &format!("{dir}/manifest.json"));
    }

    println!("Terrain generated → terrain/{seed}/");
}
