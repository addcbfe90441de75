use serde::{Deserialize, Serialize};

/// A portfolio write-up shown inside a desktop window.
///
/// Records are loaded once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Stable identifier; window ids are derived from it.
    pub id: String,
    /// Label shown under the desktop icon and in the window titlebar.
    pub name: String,
    /// Heading shown at the top of the rendered write-up.
    pub title: String,
    /// Raw markdown body. May embed authored HTML such as `<img>` tags.
    pub content: String,
}

impl Project {
    /// Builds a project record from borrowed parts.
    pub fn new(id: &str, name: &str, title: &str, content: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            title: title.to_string(),
            content: content.to_string(),
        }
    }
}
