/// Run-parameter manifest: the exact `TerrainConfig` of a run, pretty-printed
/// next to its images so any output can be regenerated.
use crate::config::TerrainConfig;
use std::fs::File;
use std::io::Write;

pub fn export_manifest(config: &TerrainConfig, path: &str) {
    let json = serde_json::to_string_pretty(config).expect("config is always serializable");
    let mut file = File::create(path).unwrap_or_else(|e| panic!("failed to create {path}: {e}"));
    file.write_all(json.as_bytes())
        .unwrap_or_else(|e| panic!("failed to write {path}: {e}"));
    println!("[export] wrote {path}");
}
