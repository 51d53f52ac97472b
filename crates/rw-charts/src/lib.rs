//! Chart rendering adapter for RW.
//!
//! This crate sits between chart configurations found in documents and an
//! external canvas charting library:
//! - [`validate_config`] / [`ChartConfig::from_value`] check the configuration shape
//! - [`default_options`] and [`merge_options`] compute display options per chart kind
//! - [`ChartAdapter`] creates instances through a [`ChartBackend`] and tracks them
//!   by canvas id so they can be torn down with [`ChartAdapter::cleanup`] or
//!   [`ChartAdapter::destroy_all`]
//!
//! # Architecture
//!
//! - [`kind`]: Supported chart kinds
//! - [`config`]: Configuration validation and resolution
//! - [`options`]: Default options and deep merging
//! - [`backend`]: Traits for the charting library and the host document
//! - [`adapter`]: Instance registry and render lifecycle
//! - `mock`: In-memory backend and container (behind the `mock` feature)
//!
//! # Example
//!
//! ```
//! use rw_charts::{ChartConfig, ChartKind, validate_config};
//! use serde_json::json;
//!
//! let value = json!({"kind": "bar", "data": {"datasets": [{"data": [1, 2, 3]}]}});
//! assert!(validate_config(&value));
//!
//! let config = ChartConfig::from_value(value).unwrap();
//! assert_eq!(config.kind(), ChartKind::Bar);
//! assert_eq!(config.resolve().options["scales"]["y"]["beginAtZero"], true);
//! ```

pub mod adapter;
pub mod backend;
pub mod config;
mod error;
mod id;
pub mod kind;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod options;

pub use adapter::ChartAdapter;
pub use backend::{ChartBackend, ChartInstance, Container};
pub use config::{ChartConfig, ResolvedChart, validate_config};
pub use error::{BackendError, ChartError, ValidationError};
pub use id::{DEFAULT_ID_PREFIX, generate_chart_id, is_chart_id};
pub use kind::ChartKind;
pub use options::{default_options, merge_options};
