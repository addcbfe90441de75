//! Project catalog embedded at build time from `catalog/projects.toml`.

use std::collections::BTreeSet;

use serde::Deserialize;
use thiserror::Error;

use crate::model::Project;

/// Catalog layout version understood by this crate.
pub const CATALOG_SCHEMA_VERSION: u32 = 1;

const PROJECT_CATALOG_JSON: &str = include_str!(concat!(env!("OUT_DIR"), "/project_catalog.json"));

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    schema_version: u32,
    projects: Vec<Project>,
}

/// Errors raised while decoding a project catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog payload is not valid JSON for the expected layout.
    #[error("catalog decode failed: {0}")]
    Parse(#[from] serde_json::Error),
    /// The catalog was written for a different layout version.
    #[error("catalog schema mismatch: expected {expected} found {found}")]
    SchemaVersion {
        /// Version this crate understands.
        expected: u32,
        /// Version found in the payload.
        found: u32,
    },
    /// Two projects share an id, which would make their windows collide.
    #[error("duplicate project id `{0}`")]
    DuplicateId(String),
    /// A required display field is blank.
    #[error("project `{id}` has an empty `{field}`")]
    MissingField {
        /// Offending project id (may itself be blank).
        id: String,
        /// Name of the blank field.
        field: &'static str,
    },
}

/// Loads the project list embedded by the build script, in catalog order.
///
/// # Errors
///
/// Returns [`CatalogError`] when the embedded payload fails validation.
pub fn load_catalog() -> Result<Vec<Project>, CatalogError> {
    parse_catalog(PROJECT_CATALOG_JSON)
}

/// Decodes and validates a catalog JSON payload.
///
/// # Errors
///
/// Returns [`CatalogError`] for malformed JSON, a schema mismatch, duplicate ids, or blank
/// `id`/`name`/`title` fields.
pub fn parse_catalog(json: &str) -> Result<Vec<Project>, CatalogError> {
    let document: CatalogDocument = serde_json::from_str(json)?;
    if document.schema_version != CATALOG_SCHEMA_VERSION {
        return Err(CatalogError::SchemaVersion {
            expected: CATALOG_SCHEMA_VERSION,
            found: document.schema_version,
        });
    }

    let mut seen = BTreeSet::new();
    for project in &document.projects {
        for (field, value) in [
            ("id", &project.id),
            ("name", &project.name),
            ("title", &project.title),
        ] {
            if value.trim().is_empty() {
                return Err(CatalogError::MissingField {
                    id: project.id.clone(),
                    field,
                });
            }
        }
        if !seen.insert(project.id.as_str()) {
            return Err(CatalogError::DuplicateId(project.id.clone()));
        }
    }

    Ok(document.projects)
}
