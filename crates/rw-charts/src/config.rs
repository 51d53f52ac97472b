//! Chart configuration validation.
//!
//! A chart configuration is a JSON object with a `kind`, a `data` object carrying
//! a `datasets` array, and optional `options`. Only those three facts are checked.
//! Dataset records and option trees are passed through to the backend untouched.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::kind::ChartKind;
use crate::options::{default_options, merge_options};

/// A validated chart configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    kind: ChartKind,
    data: Map<String, Value>,
    options: Option<Value>,
}

impl ChartConfig {
    /// Build a configuration from a kind and its datasets.
    #[must_use]
    pub fn new(kind: ChartKind, datasets: Vec<Value>) -> Self {
        let mut data = Map::new();
        data.insert("datasets".to_owned(), Value::Array(datasets));
        Self {
            kind,
            data,
            options: None,
        }
    }

    /// Set the category labels.
    #[must_use]
    pub fn with_labels(mut self, labels: Vec<Value>) -> Self {
        self.data.insert("labels".to_owned(), Value::Array(labels));
        self
    }

    /// Set user display options, merged over the kind defaults at render time.
    #[must_use]
    pub fn with_options(mut self, options: Value) -> Self {
        self.options = Some(options);
        self
    }

    /// Validate a parsed value and take ownership of its parts.
    ///
    /// The kind is read from `kind`, or from the charting library's native `type`
    /// key when `kind` is absent.
    ///
    /// # Errors
    ///
    /// Returns the first structural check the value fails.
    pub fn from_value(value: Value) -> Result<Self, ValidationError> {
        let kind = check_config(&value)?;
        let Value::Object(mut obj) = value else {
            return Err(ValidationError::NotAnObject);
        };
        let Some(Value::Object(data)) = obj.remove("data") else {
            return Err(ValidationError::MissingDatasets);
        };
        let options = obj.remove("options").filter(|o| !o.is_null());

        Ok(Self {
            kind,
            data,
            options,
        })
    }

    #[must_use]
    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    /// The `data` object, including any fields besides labels and datasets.
    #[must_use]
    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    #[must_use]
    pub fn datasets(&self) -> &[Value] {
        self.data
            .get("datasets")
            .and_then(Value::as_array)
            .map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn labels(&self) -> Option<&[Value]> {
        self.data
            .get("labels")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
    }

    #[must_use]
    pub fn options(&self) -> Option<&Value> {
        self.options.as_ref()
    }

    /// Produce the final configuration handed to the backend.
    ///
    /// Options are the kind defaults with the user options merged on top.
    #[must_use]
    pub fn resolve(&self) -> ResolvedChart {
        let defaults = default_options(self.kind);
        let options = match &self.options {
            Some(user) => merge_options(&defaults, user),
            None => defaults,
        };
        ResolvedChart {
            kind: self.kind,
            data: self.data.clone(),
            options,
        }
    }
}

/// Configuration in the charting library's native shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedChart {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: Map<String, Value>,
    pub options: Value,
}

/// Check whether a parsed value is a usable chart configuration.
///
/// Returns `false` for non-objects, a missing or unsupported kind, and a missing
/// or non-array `data.datasets`. Failures are reported as warnings; nothing
/// panics. Dataset and option contents are not inspected.
#[must_use]
pub fn validate_config(input: &Value) -> bool {
    match check_config(input) {
        Ok(_) => true,
        Err(ValidationError::UnsupportedKind(kind)) => {
            tracing::warn!(
                kind = %kind,
                supported = %ChartKind::supported_names(),
                "Invalid chart type"
            );
            false
        }
        Err(e) => {
            tracing::warn!(error = %e, "Invalid chart configuration");
            false
        }
    }
}

fn check_config(input: &Value) -> Result<ChartKind, ValidationError> {
    let obj = input.as_object().ok_or(ValidationError::NotAnObject)?;

    let kind = match obj.get("kind").or_else(|| obj.get("type")) {
        None | Some(Value::Null) => return Err(ValidationError::MissingKind),
        Some(Value::String(s)) if s.is_empty() => return Err(ValidationError::MissingKind),
        Some(Value::String(s)) => {
            ChartKind::parse(s).ok_or_else(|| ValidationError::UnsupportedKind(s.clone()))?
        }
        Some(other) => return Err(ValidationError::UnsupportedKind(other.to_string())),
    };

    let has_datasets = obj
        .get("data")
        .and_then(|data| data.get("datasets"))
        .is_some_and(Value::is_array);
    if !has_datasets {
        return Err(ValidationError::MissingDatasets);
    }

    Ok(kind)
}
