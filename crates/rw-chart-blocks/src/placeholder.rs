//! Placeholder markup for chart code blocks.

use std::fmt::Write;

use rw_config::PlaceholderConfig;

/// Inline style of the canvas inside the placeholder.
const CANVAS_STYLE: &str = "max-height: 100%; max-width: 100%;";

/// Render the container that replaces a chart code block.
///
/// The container is a fixed-height `div` wrapping an empty `canvas` whose
/// element id is `id`. The charting backend draws into that canvas once the
/// markup is attached to the document.
pub fn render_placeholder(id: &str, style: &PlaceholderConfig) -> String {
    let mut out = String::with_capacity(320);
    write!(
        out,
        r#"<div class="{}" style="position: relative; height: {}; width: 100%; margin: 1rem 0; padding: {}; background: {}; border-radius: {}; box-shadow: {};">"#,
        escape_html(&style.class),
        escape_html(&style.height),
        escape_html(&style.padding),
        escape_html(&style.background),
        escape_html(&style.border_radius),
        escape_html(&style.shadow),
    )
    .unwrap();
    write!(
        out,
        r#"<canvas id="{}" style="{CANVAS_STYLE}"></canvas></div>"#,
        escape_html(id)
    )
    .unwrap();
    out
}

/// Escape special HTML characters.
fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}
