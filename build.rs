//! Build script: validates avatars.json at compile time.

use std::path::PathBuf;

fn main() {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR set by Cargo");
    let config_path: PathBuf = [&manifest_dir, "config", "avatars.json"].iter().collect();
    println!("cargo:rerun-if-changed={}", config_path.display());
    let json = std::fs::read_to_string(&config_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read {}: {}. avatars.json must exist and be valid.",
            config_path.display(),
            e
        )
    });
    #[derive(serde::Deserialize)]
    struct AvatarTable {
        prefix: String,
        default: String,
        icons: Vec<String>,
    }
    let table: AvatarTable = serde_json::from_str(&json).unwrap_or_else(|e| {
        panic!(
            "avatars.json is invalid JSON: {}. Fix the file and rebuild.",
            e
        )
    });
    if table.icons.is_empty() {
        panic!("avatars.json must list at least one icon");
    }
    if !table.icons.contains(&table.default) {
        panic!(
            "avatars.json default '{}' is not one of the listed icons",
            table.default
        );
    }
    if table.prefix.is_empty() {
        panic!("avatars.json prefix cannot be empty");
    }
}
