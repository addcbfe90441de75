use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const CATALOG_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ProjectEntry {
    id: String,
    name: String,
    title: String,
    content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ProjectCatalog {
    schema_version: u32,
    projects: Vec<ProjectEntry>,
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("catalog").join("projects.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let catalog: ProjectCatalog = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if catalog.schema_version != CATALOG_SCHEMA_VERSION {
        panic!(
            "catalog schema mismatch in {}: expected {CATALOG_SCHEMA_VERSION} found {}",
            path.display(),
            catalog.schema_version
        );
    }

    let mut seen = BTreeSet::new();
    for project in &catalog.projects {
        if project.id.trim().is_empty() {
            panic!("project with empty id in {}", path.display());
        }
        if !seen.insert(project.id.as_str()) {
            panic!("duplicate project id `{}` in {}", project.id, path.display());
        }
        if project.name.trim().is_empty() || project.title.trim().is_empty() {
            panic!(
                "project `{}` in {} needs a non-empty name and title",
                project.id,
                path.display()
            );
        }
    }

    let json = serde_json::to_string_pretty(&catalog).expect("serialize project catalog");
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("project_catalog.json");
    fs::write(&out_file, json)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
