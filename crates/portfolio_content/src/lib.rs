//! Portfolio project records, the build-time project catalog, and the content renderer that
//! turns a project's markdown write-up into window-ready markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod catalog;
mod markdown;
mod model;
mod render;

pub use catalog::{load_catalog, parse_catalog, CatalogError, CATALOG_SCHEMA_VERSION};
pub use markdown::markdown_to_html;
pub use model::Project;
pub use render::{render_project, ProjectDocument, ProjectHeader};
