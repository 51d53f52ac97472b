//! Chart code blocks for RW.
//!
//! Finds chart specifications in rendered HTML (fenced code blocks tagged
//! `chart` or `chartjs`) and turns them into live charts:
//! - [`ChartBlockProcessor`] replaces each valid block with a placeholder canvas
//!   and returns the configurations still to be drawn
//! - [`PendingRenders::render`] draws them through a [`ChartAdapter`] once the
//!   markup is attached to the document
//! - [`ChartAdapter::cleanup`] and [`ChartAdapter::destroy_all`] release charts
//!   when the content is replaced or the application shuts down
//!
//! Invalid blocks are never fatal: unparsable or unsupported configurations stay
//! in the output exactly as they were written.
//!
//! # Example
//!
//! ```ignore
//! use rw_chart_blocks::{ChartAdapter, HtmlContainer, process_chart_blocks};
//!
//! let mut adapter = ChartAdapter::new(backend);
//! let processed = process_chart_blocks(&html, &adapter);
//! insert_into_page(&processed.html);
//!
//! let container = HtmlContainer::new(&processed.html);
//! processed.pending.render(&mut adapter, &container);
//!
//! // Later, before swapping the page content:
//! adapter.cleanup(&container);
//! ```

mod container;
mod entities;
mod error;
mod placeholder;
mod processor;

pub use container::HtmlContainer;
pub use entities::decode_html_entities;
pub use error::BlockError;
pub use placeholder::render_placeholder;
pub use processor::{
    ChartBlockProcessor, PendingRender, PendingRenders, ProcessedHtml, process_chart_blocks,
};
pub use rw_charts::ChartAdapter;
