//! Chart code block processing.
//!
//! Rendering happens in two phases. [`ChartBlockProcessor::process`] rewrites
//! the HTML synchronously, replacing each valid chart block with a placeholder
//! canvas and queueing its configuration. The caller inserts the returned HTML
//! into the document and only then calls [`PendingRenders::render`], because
//! the canvases the backend draws into do not exist before insertion.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use rw_charts::{ChartAdapter, ChartBackend, ChartConfig, Container};
use rw_config::{ChartsConfig, PlaceholderConfig};
use serde_json::Value;

use crate::entities::decode_html_entities;
use crate::error::BlockError;
use crate::placeholder::render_placeholder;

/// `<pre><code class="language-chart">...</code></pre>` and its variants.
///
/// Accepts `lang-` or `language-` with `chart` or `chartjs`, in any case, with
/// other classes and attributes alongside. Group 1 is the block text.
static CHART_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)<pre[^>]*>\s*<code[^>]*class="[^"]*\b(?:lang(?:uage)?-(?:chart|chartjs))\b[^"]*"[^>]*>([\s\S]*?)</code>\s*</pre>"#,
    )
    .unwrap()
});

/// A chart queued for rendering after the markup is attached.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingRender {
    /// Canvas element id in the rewritten markup.
    pub id: String,
    /// Validated configuration for that canvas.
    pub config: ChartConfig,
}

/// Charts waiting for the second phase, in document order.
#[derive(Debug, Clone, Default, PartialEq)]
#[must_use = "pending charts are only drawn when `render` is called"]
pub struct PendingRenders(Vec<PendingRender>);

impl PendingRenders {
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PendingRender> {
        self.0.iter()
    }

    /// Render every queued chart into `container`.
    ///
    /// Call after the rewritten HTML is part of the document `container`
    /// covers. Entries are consumed; charts whose canvas cannot be found are
    /// skipped with a warning.
    pub fn render<B, C>(self, adapter: &mut ChartAdapter<B>, container: &C)
    where
        B: ChartBackend,
        C: Container<Surface = B::Surface>,
    {
        tracing::debug!(count = self.0.len(), "Rendering pending charts");
        for PendingRender { id, config } in self.0 {
            adapter.render(&id, &config, container);
        }
    }
}

impl IntoIterator for PendingRenders {
    type Item = PendingRender;
    type IntoIter = std::vec::IntoIter<PendingRender>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PendingRenders {
    type Item = &'a PendingRender;
    type IntoIter = std::slice::Iter<'a, PendingRender>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Result of the first phase.
#[derive(Debug)]
pub struct ProcessedHtml {
    /// Input HTML with valid chart blocks replaced by placeholders.
    pub html: String,
    /// Charts to render once `html` is attached.
    pub pending: PendingRenders,
    /// One message per chart block left unchanged.
    pub warnings: Vec<String>,
}

/// Replaces chart code blocks in HTML with canvas placeholders.
///
/// # Example
///
/// ```ignore
/// use rw_chart_blocks::{ChartAdapter, ChartBlockProcessor, HtmlContainer};
///
/// let mut adapter = ChartAdapter::new(backend);
/// let processed = ChartBlockProcessor::new().process(&html, &adapter);
///
/// let container = HtmlContainer::new(&processed.html); // after insertion
/// processed.pending.render(&mut adapter, &container);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ChartBlockProcessor {
    placeholder: PlaceholderConfig,
}

impl ChartBlockProcessor {
    /// Create a processor with the default placeholder styling.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor styled by the `[charts]` configuration.
    #[must_use]
    pub fn from_config(config: &ChartsConfig) -> Self {
        Self {
            placeholder: config.placeholder.clone(),
        }
    }

    /// Set the placeholder styling.
    #[must_use]
    pub fn placeholder(mut self, placeholder: PlaceholderConfig) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Rewrite `html`, queueing one render per valid chart block.
    ///
    /// Canvas ids come from `adapter`, so they follow its prefix and are
    /// picked up by its `cleanup`. Blocks whose text is not JSON, or whose JSON
    /// is not a valid chart configuration, are left exactly as they were.
    pub fn process<B: ChartBackend>(
        &self,
        html: &str,
        adapter: &ChartAdapter<B>,
    ) -> ProcessedHtml {
        let mut pending = Vec::new();
        let mut warnings = Vec::new();
        let mut index = 0;

        let rewritten = CHART_BLOCK_RE.replace_all(html, |caps: &Captures| {
            let block = index;
            index += 1;

            match parse_block(&caps[1]) {
                Ok(config) => {
                    let id = adapter.generate_id();
                    let markup = render_placeholder(&id, &self.placeholder);
                    pending.push(PendingRender { id, config });
                    markup
                }
                Err(e) => {
                    tracing::warn!(block, error = %e, "Leaving chart block unchanged");
                    warnings.push(format!("chart block {block}: {e}"));
                    caps[0].to_owned()
                }
            }
        });

        if !pending.is_empty() {
            tracing::debug!(
                blocks = index,
                queued = pending.len(),
                "Queued chart renders"
            );
        }

        ProcessedHtml {
            html: rewritten.into_owned(),
            pending: PendingRenders(pending),
            warnings,
        }
    }
}

/// Rewrite chart blocks in `html` with the default placeholder styling.
///
/// Shorthand for `ChartBlockProcessor::new().process(html, adapter)`, see
/// [`ChartBlockProcessor::process`].
pub fn process_chart_blocks<B: ChartBackend>(
    html: &str,
    adapter: &ChartAdapter<B>,
) -> ProcessedHtml {
    ChartBlockProcessor::new().process(html, adapter)
}

fn parse_block(raw: &str) -> Result<ChartConfig, BlockError> {
    let text = decode_html_entities(raw);
    let value: Value = serde_json::from_str(&text)?;
    Ok(ChartConfig::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rw_charts::ChartKind;
    use rw_charts::mock::{MockBackend, MockContainer};
    use serde_json::json;

    use crate::container::HtmlContainer;

    const BAR_BLOCK: &str = r#"<pre><code class="language-chart">{"kind":"bar","data":{"datasets":[{"data":[1,2,3]}]}}</code></pre>"#;

    fn adapter() -> ChartAdapter<MockBackend> {
        ChartAdapter::new(MockBackend::new())
    }

    #[test]
    fn test_bar_block_becomes_placeholder() {
        let adapter = adapter();
        let processed = process_chart_blocks(BAR_BLOCK, &adapter);

        assert_eq!(processed.pending.len(), 1);
        let entry = processed.pending.iter().next().unwrap();
        assert!(entry.id.starts_with("chart-"));
        assert_eq!(entry.config.kind(), ChartKind::Bar);
        assert_eq!(entry.config.datasets(), &[json!({"data": [1, 2, 3]})]);

        assert!(processed.html.starts_with(r#"<div class="chart-container""#));
        assert!(
            processed
                .html
                .contains(&format!(r#"<canvas id="{}""#, entry.id))
        );
        assert!(!processed.html.contains("<pre>"));
        assert!(processed.warnings.is_empty());
    }

    #[test]
    fn test_processing_does_not_render() {
        let backend = MockBackend::new();
        let adapter = ChartAdapter::new(backend.clone());

        let processed = process_chart_blocks(BAR_BLOCK, &adapter);

        assert_eq!(processed.pending.len(), 1);
        assert!(backend.created().is_empty());
        assert!(adapter.is_empty());
    }

    #[test]
    fn test_surrounding_html_is_untouched() {
        let adapter = adapter();
        let html = format!("<h1>Sales</h1>\n{BAR_BLOCK}\n<p>After &amp; more</p>");
        let processed = process_chart_blocks(&html, &adapter);

        assert!(processed.html.starts_with("<h1>Sales</h1>\n<div "));
        assert!(processed.html.ends_with("</div>\n<p>After &amp; more</p>"));
    }

    #[test]
    fn test_truncated_json_is_left_unchanged() {
        let adapter = adapter();
        let html = r#"<p>a</p><pre><code class="language-chart">{"kind":"bar","data":{"datas</code></pre><p>b</p>"#;
        let processed = process_chart_blocks(html, &adapter);

        assert_eq!(processed.html, html);
        assert!(processed.pending.is_empty());
        assert_eq!(processed.warnings.len(), 1);
        assert!(processed.warnings[0].contains("invalid chart JSON"));
    }

    #[test]
    fn test_unsupported_kind_is_left_unchanged() {
        let adapter = adapter();
        let html = r#"<pre><code class="language-chart">{"kind":"unsupported","data":{"datasets":[]}}</code></pre>"#;
        let processed = process_chart_blocks(html, &adapter);

        assert_eq!(processed.html, html);
        assert!(processed.pending.is_empty());
        assert_eq!(processed.warnings.len(), 1);
        assert!(processed.warnings[0].contains("unsupported"));
    }

    #[test]
    fn test_missing_datasets_is_left_unchanged() {
        let adapter = adapter();
        let html = r#"<pre><code class="lang-chart">{"kind":"line","data":{}}</code></pre>"#;
        let processed = process_chart_blocks(html, &adapter);

        assert_eq!(processed.html, html);
        assert!(processed.pending.is_empty());
    }

    #[test]
    fn test_escaped_block_text_is_decoded() {
        let adapter = adapter();
        let html = r#"<pre><code class="language-chart">{&quot;kind&quot;:&quot;pie&quot;,&quot;data&quot;:{&quot;labels&quot;:[&quot;A &amp; B&quot;],&quot;datasets&quot;:[]}}</code></pre>"#;
        let processed = process_chart_blocks(html, &adapter);

        assert_eq!(processed.pending.len(), 1);
        let entry = processed.pending.iter().next().unwrap();
        assert_eq!(entry.config.kind(), ChartKind::Pie);
        assert_eq!(entry.config.labels(), Some(&[json!("A & B")][..]));
    }

    #[test]
    fn test_language_marker_variants() {
        let adapter = adapter();
        let body = r#"{"kind":"line","data":{"datasets":[]}}"#;
        for class in [
            "language-chart",
            "language-chartjs",
            "lang-chart",
            "lang-chartjs",
            "LANGUAGE-CHART",
            "hljs language-chartjs extra",
        ] {
            let html = format!(r#"<pre><code class="{class}">{body}</code></pre>"#);
            let processed = process_chart_blocks(&html, &adapter);
            assert_eq!(processed.pending.len(), 1, "class {class} not recognized");
        }
    }

    #[test]
    fn test_other_languages_are_ignored() {
        let adapter = adapter();
        let body = r#"{"kind":"line","data":{"datasets":[]}}"#;
        for class in ["language-json", "language-charts", "language-chartx", "chart"] {
            let html = format!(r#"<pre><code class="{class}">{body}</code></pre>"#);
            let processed = process_chart_blocks(&html, &adapter);
            assert_eq!(processed.html, html, "class {class} should be ignored");
            assert!(processed.pending.is_empty());
        }
    }

    #[test]
    fn test_attributes_on_pre_and_code_are_tolerated() {
        let adapter = adapter();
        let html = r#"<pre class="code" data-line="1">
  <code id="c1" class="language-chart" data-x="y">{"kind":"radar","data":{"datasets":[]}}</code>
</pre>"#;
        let processed = process_chart_blocks(html, &adapter);
        assert_eq!(processed.pending.len(), 1);
    }

    #[test]
    fn test_mixed_blocks_keep_document_order() {
        let adapter = adapter();
        let html = concat!(
            r#"<pre><code class="language-chart">{"kind":"bar","data":{"datasets":[]}}</code></pre>"#,
            r#"<pre><code class="language-chart">not json</code></pre>"#,
            r#"<pre><code class="language-rust">fn main() {}</code></pre>"#,
            r#"<pre><code class="language-chart">{"kind":"doughnut","data":{"datasets":[]}}</code></pre>"#,
        );
        let processed = process_chart_blocks(html, &adapter);

        let kinds: Vec<_> = processed.pending.iter().map(|p| p.config.kind()).collect();
        assert_eq!(kinds, vec![ChartKind::Bar, ChartKind::Doughnut]);
        assert_eq!(processed.warnings.len(), 1);
        assert!(processed.warnings[0].starts_with("chart block 1:"));
        assert!(processed.html.contains(r#"<code class="language-chart">not json</code>"#));
        assert!(processed.html.contains("fn main() {}"));

        let ids = HtmlContainer::new(&processed.html);
        let pending_ids: Vec<_> = processed.pending.iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids.canvas_ids(), pending_ids.as_slice());
    }

    #[test]
    fn test_no_chart_blocks() {
        let adapter = adapter();
        let html = "<p>Nothing to see</p>";
        let processed = process_chart_blocks(html, &adapter);

        assert_eq!(processed.html, html);
        assert!(processed.pending.is_empty());
        assert!(processed.warnings.is_empty());
    }

    #[test]
    fn test_placeholder_style_from_config() {
        let adapter = adapter();
        let mut config = ChartsConfig::default();
        config.placeholder.height = "500px".to_owned();

        let processed = ChartBlockProcessor::from_config(&config).process(BAR_BLOCK, &adapter);
        assert!(processed.html.contains("height: 500px;"));
    }

    #[test]
    fn test_ids_follow_adapter_prefix() {
        let adapter = ChartAdapter::new(MockBackend::new()).with_id_prefix("fig");
        let processed = process_chart_blocks(BAR_BLOCK, &adapter);

        let entry = processed.pending.iter().next().unwrap();
        assert!(entry.id.starts_with("fig-"));
    }

    #[test]
    fn test_render_phase_draws_queued_charts() {
        let backend = MockBackend::new();
        let mut adapter = ChartAdapter::new(backend.clone());

        let processed = process_chart_blocks(BAR_BLOCK, &adapter);
        let id = processed.pending.iter().next().unwrap().id.clone();
        let container = HtmlContainer::new(&processed.html);
        processed.pending.render(&mut adapter, &container);

        assert!(adapter.contains(&id));
        let created = backend.created();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].surface, id);
        assert_eq!(created[0].chart.kind, ChartKind::Bar);
    }

    #[test]
    fn test_render_phase_into_detached_container_is_noop() {
        let backend = MockBackend::new();
        let mut adapter = ChartAdapter::new(backend.clone());

        let processed = process_chart_blocks(BAR_BLOCK, &adapter);
        processed
            .pending
            .render(&mut adapter, &MockContainer::new(Vec::<String>::new()));

        assert!(adapter.is_empty());
        assert!(backend.created().is_empty());
    }

    #[test]
    fn test_parse_block_accepts_json_whitespace() {
        let raw = "\n\t {\"kind\":\"scatter\",\"data\":{\"datasets\":[]}}\r\n";
        let config = parse_block(raw).unwrap();
        assert_eq!(config.kind(), ChartKind::Scatter);
    }

    #[test]
    fn test_nbsp_padding_is_not_json_whitespace() {
        let adapter = adapter();
        let html = r#"<pre><code class="language-chart">&nbsp;{"kind":"bar","data":{"datasets":[]}}&nbsp;</code></pre>"#;
        let processed = process_chart_blocks(html, &adapter);

        assert_eq!(processed.html, html);
        assert!(processed.pending.is_empty());
        assert_eq!(processed.warnings.len(), 1);
    }

    #[test]
    fn test_named_entities_in_labels_are_decoded() {
        let adapter = adapter();
        let html = r#"<pre><code class="language-chart">{"kind":"bar","data":{"labels":["&laquo;Q1&raquo;","&hearts;","&lambda;","&eacute;t&eacute;"],"datasets":[]}}</code></pre>"#;
        let processed = process_chart_blocks(html, &adapter);

        assert_eq!(processed.pending.len(), 1);
        let entry = processed.pending.iter().next().unwrap();
        let expected = [json!("«Q1»"), json!("♥"), json!("λ"), json!("été")];
        assert_eq!(entry.config.labels(), Some(&expected[..]));
    }
}
