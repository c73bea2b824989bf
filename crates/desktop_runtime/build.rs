use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const KNOWN_WINDOW_IDS: [&str; 9] = [
    "finder", "resume", "safari", "photos", "contact", "terminal", "txtfile", "imgfile", "trash",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DockEntry {
    label: String,
    icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WindowEntry {
    id: String,
    title: String,
    can_open: bool,
    #[serde(default)]
    nav_label: Option<String>,
    #[serde(default)]
    dock: Option<DockEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WindowManifest {
    schema_version: u32,
    window: Vec<WindowEntry>,
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("windows.manifest.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let manifest: WindowManifest = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if manifest.schema_version != 1 {
        panic!(
            "manifest schema mismatch in {}: expected 1 found {}",
            path.display(),
            manifest.schema_version
        );
    }

    let mut seen = BTreeSet::new();
    for entry in &manifest.window {
        if !KNOWN_WINDOW_IDS.contains(&entry.id.as_str()) {
            panic!("unknown window id `{}` in {}", entry.id, path.display());
        }
        if !seen.insert(entry.id.clone()) {
            panic!("duplicate window id `{}` in {}", entry.id, path.display());
        }
    }
    for id in KNOWN_WINDOW_IDS {
        if !seen.contains(id) {
            panic!("window id `{id}` missing from {}", path.display());
        }
    }

    let json = serde_json::to_string_pretty(&manifest).expect("serialize window manifest");
    let generated = format!(
        "/// Build-time generated window manifest JSON.\n\
pub const WINDOW_MANIFEST_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("window_manifest_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
