//! Container over document markup.

use std::sync::LazyLock;

use regex::Regex;
use rw_charts::Container;

use crate::entities::decode_html_entities;

/// `id` attribute of every `<canvas>` element.
static CANVAS_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<canvas\b[^>]*?\sid\s*=\s*"([^"]*)""#).expect("invalid canvas regex")
});

/// A [`Container`] backed by the markup a region of the document holds.
///
/// Use this when the host keeps the document as HTML (a webview bridge, a
/// preview pane) rather than as live DOM nodes. Surfaces are identified by
/// their canvas element id; the backend resolves the id to a drawing context.
#[derive(Debug, Clone, Default)]
pub struct HtmlContainer {
    canvas_ids: Vec<String>,
}

impl HtmlContainer {
    /// Index the canvas elements in `html`.
    ///
    /// Attribute values are entity-decoded, so ids match the unescaped ids
    /// the placeholders were rendered with.
    #[must_use]
    pub fn new(html: &str) -> Self {
        let canvas_ids = CANVAS_ID_RE
            .captures_iter(html)
            .map(|caps| decode_html_entities(&caps[1]))
            .collect();
        Self { canvas_ids }
    }

    /// Canvas ids in document order.
    #[must_use]
    pub fn canvas_ids(&self) -> &[String] {
        &self.canvas_ids
    }
}

impl Container for HtmlContainer {
    type Surface = String;

    fn find_surface(&self, id: &str) -> Option<String> {
        self.canvas_ids.iter().find(|c| *c == id).cloned()
    }

    fn surface_ids(&self) -> Vec<String> {
        self.canvas_ids.clone()
    }
}
