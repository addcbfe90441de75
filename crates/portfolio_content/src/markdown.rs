//! Minimal markdown converter for authored project write-ups.
//!
//! Inline and heading rewrites run as global regex passes over the whole text first. A single
//! forward pass over lines then groups list items and wraps plain lines in paragraphs. Input is
//! trusted and is not sanitized.

use once_cell::sync::Lazy;
use regex::Regex;

struct Rewrite {
    pattern: Regex,
    replacement: &'static str,
}

impl Rewrite {
    fn new(pattern: &str, replacement: &'static str) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("static markdown pattern"),
            replacement,
        }
    }
}

// Order matters: `###` before `#`, bold before italic, images before links.
static REWRITES: Lazy<Vec<Rewrite>> = Lazy::new(|| {
    vec![
        Rewrite::new(r"(?m)^### ([^\r\n]*)\r?$", "<h3>${1}</h3>"),
        Rewrite::new(r"(?m)^## ([^\r\n]*)\r?$", "<h2>${1}</h2>"),
        Rewrite::new(r"(?m)^# ([^\r\n]*)\r?$", "<h1>${1}</h1>"),
        Rewrite::new(r"\*\*(.*?)\*\*", "<strong>${1}</strong>"),
        Rewrite::new(r"\*(.*?)\*", "<em>${1}</em>"),
        Rewrite::new(
            r"!\[(.*?)\]\((.*?)\)",
            r#"<div class="image-wrapper"><img src="${2}" alt="${1}"><p>${1}</p></div>"#,
        ),
        Rewrite::new(
            r"\[([^\]]+)\]\(([^)]+)\)",
            r#"<a href="${2}" target="_blank">${1}</a>"#,
        ),
        Rewrite::new(r"`([^`]+)`", "<code>${1}</code>"),
    ]
});

static ORDERED_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\s").expect("static markdown pattern"));
static UNORDERED_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-\s").expect("static markdown pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListMode {
    None,
    Ordered,
    Unordered,
}

impl ListMode {
    fn open_tag(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Ordered => "<ol>",
            Self::Unordered => "<ul>",
        }
    }

    fn close_tag(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Ordered => "</ol>",
            Self::Unordered => "</ul>",
        }
    }
}

struct LineAssembler {
    mode: ListMode,
    out: String,
}

impl LineAssembler {
    fn new() -> Self {
        Self {
            mode: ListMode::None,
            out: String::new(),
        }
    }

    /// Switches list mode, closing the previous list and opening the next one as needed.
    fn enter(&mut self, mode: ListMode) {
        if self.mode == mode {
            return;
        }
        self.out.push_str(self.mode.close_tag());
        self.out.push_str(mode.open_tag());
        self.mode = mode;
    }

    fn push_item(&mut self, mode: ListMode, text: &str) {
        self.enter(mode);
        self.out.push_str("<li>");
        self.out.push_str(text);
        self.out.push_str("</li>");
    }

    fn push_line(&mut self, line: &str) {
        self.enter(ListMode::None);
        if line.trim().is_empty() {
            return;
        }
        if line.starts_with('<') {
            self.out.push_str(line);
        } else {
            self.out.push_str("<p>");
            self.out.push_str(line);
            self.out.push_str("</p>");
        }
    }

    fn finish(mut self) -> String {
        self.enter(ListMode::None);
        self.out
    }
}

/// Converts a trusted markdown write-up into HTML markup.
///
/// Supports `#`/`##`/`###` headings, `**bold**`, `*italic*`, `![alt](src)` images with a
/// caption, `[text](url)` links opened in a new tab, inline `` `code` ``, and flat `-` / `1.`
/// lists. Lines that already start with markup (including authored HTML) are emitted unwrapped.
/// Output fragments are concatenated without separators.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut text = markdown.trim().to_string();
    for rewrite in REWRITES.iter() {
        text = rewrite
            .pattern
            .replace_all(&text, rewrite.replacement)
            .into_owned();
    }

    let mut assembler = LineAssembler::new();
    for line in text.lines() {
        if ORDERED_ITEM.is_match(line) {
            let item = ORDERED_ITEM.replace(line, "");
            assembler.push_item(ListMode::Ordered, &item);
        } else if UNORDERED_ITEM.is_match(line) {
            let item = UNORDERED_ITEM.replace(line, "");
            assembler.push_item(ListMode::Unordered, &item);
        } else {
            assembler.push_line(line);
        }
    }
    assembler.finish()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn heading_then_emphasis_paragraph() {
        let html = markdown_to_html("# Title\nSome **bold** and *italic* text.");
        assert_eq!(
            html,
            "<h1>Title</h1><p>Some <strong>bold</strong> and <em>italic</em> text.</p>"
        );
    }

    #[test]
    fn crlf_headings_drop_carriage_return() {
        assert_eq!(
            markdown_to_html("# Title\r\n## Sub\r\nbody"),
            "<h1>Title</h1><h2>Sub</h2><p>body</p>"
        );
    }

    #[test]
    fn all_heading_levels() {
        let html = markdown_to_html("# One\n## Two\n### Three");
        assert_eq!(html, "<h1>One</h1><h2>Two</h2><h3>Three</h3>");
    }

    #[test]
    fn heading_marker_needs_trailing_space() {
        assert_eq!(markdown_to_html("#hashtag"), "<p>#hashtag</p>");
    }

    #[test]
    fn unordered_list_closes_before_paragraph() {
        let html = markdown_to_html("- one\n- two\n\nnext");
        assert_eq!(html, "<ul><li>one</li><li>two</li></ul><p>next</p>");
    }

    #[test]
    fn ordered_list() {
        assert_eq!(
            markdown_to_html("1. a\n2. b"),
            "<ol><li>a</li><li>b</li></ol>"
        );
    }

    #[test]
    fn switching_list_kinds_closes_the_previous_list() {
        assert_eq!(
            markdown_to_html("- a\n1. b"),
            "<ul><li>a</li></ul><ol><li>b</li></ol>"
        );
        assert_eq!(
            markdown_to_html("1. a\n- b\n2. c"),
            "<ol><li>a</li></ol><ul><li>b</li></ul><ol><li>c</li></ol>"
        );
    }

    #[test]
    fn image_becomes_captioned_wrapper() {
        assert_eq!(
            markdown_to_html("![Cat](cat.jpg)"),
            r#"<div class="image-wrapper"><img src="cat.jpg" alt="Cat"><p>Cat</p></div>"#
        );
    }

    #[test]
    fn link_opens_in_new_tab() {
        assert_eq!(
            markdown_to_html("see [docs](https://example.com/a)"),
            r#"<p>see <a href="https://example.com/a" target="_blank">docs</a></p>"#
        );
    }

    #[test]
    fn inline_code_and_emphasis_inside_list_items() {
        assert_eq!(
            markdown_to_html("- run `cargo` *now*"),
            "<ul><li>run <code>cargo</code> <em>now</em></li></ul>"
        );
    }

    #[test]
    fn authored_html_and_markup_led_lines_are_not_wrapped() {
        let html = markdown_to_html("<img src=\"a.jpg\" alt=\"A\">\n**Bold** start");
        assert_eq!(
            html,
            "<img src=\"a.jpg\" alt=\"A\"><strong>Bold</strong> start"
        );
    }

    #[test]
    fn surrounding_whitespace_is_trimmed_and_blank_lines_dropped() {
        assert_eq!(markdown_to_html("\n\n  \nhello\n\n\nworld\n\n"), "<p>hello</p><p>world</p>");
        assert_eq!(markdown_to_html("   "), "");
    }

    #[test]
    fn trailing_list_is_closed() {
        assert_eq!(
            markdown_to_html("intro\n- tail"),
            "<p>intro</p><ul><li>tail</li></ul>"
        );
    }
}
