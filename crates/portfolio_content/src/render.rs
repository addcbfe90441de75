use crate::markdown::markdown_to_html;
use crate::model::Project;

/// Literal header block shown above a project's write-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectHeader {
    /// Project display name.
    pub name: String,
    /// Project heading.
    pub title: String,
}

/// Rendered project content ready to mount inside a window body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDocument {
    /// Header values, kept as plain text.
    pub header: ProjectHeader,
    /// Markup produced from the project's markdown body.
    pub body_html: String,
}

impl ProjectDocument {
    /// Serializes the whole fragment, escaping the header text.
    pub fn to_html(&self) -> String {
        format!(
            "<div class=\"project-viewer\"><div class=\"project-header\">\
             <div class=\"project-name\">{}</div><h1 class=\"project-title\">{}</h1></div>\
             <div class=\"project-content\">{}</div></div>",
            escape_text(&self.header.name),
            escape_text(&self.header.title),
            self.body_html
        )
    }
}

/// Renders `project` into a header plus converted markdown body.
///
/// Pure: the same project always yields the same document.
pub fn render_project(project: &Project) -> ProjectDocument {
    ProjectDocument {
        header: ProjectHeader {
            name: project.name.clone(),
            title: project.title.clone(),
        },
        body_html: markdown_to_html(&project.content),
    }
}

/// Escapes text for use as HTML element content.
fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
