//! Default display options and option merging.

use serde_json::{Map, Value, json};

use crate::kind::ChartKind;

const LEGEND_FONT_FAMILY: &str = "'Inter', 'Segoe UI', sans-serif";
const GRID_COLOR: &str = "rgba(0, 0, 0, 0.1)";
const X_GRID_COLOR: &str = "rgba(0, 0, 0, 0.05)";
const TICK_FONT_SIZE: u32 = 11;

/// Default display options for a chart kind.
///
/// All kinds are responsive without a forced aspect ratio and get the same
/// legend and tooltip styling. The legend sits on top, or on the right for
/// circular kinds. Radar charts get a single radial `r` scale; other axis
/// kinds get `x` and `y` scales with `y` starting at zero.
#[must_use]
pub fn default_options(kind: ChartKind) -> Value {
    let legend_position = if kind.is_circular() { "right" } else { "top" };

    let mut options = json!({
        "responsive": true,
        "maintainAspectRatio": false,
        "plugins": {
            "legend": {
                "position": legend_position,
                "labels": {
                    "padding": 15,
                    "font": {
                        "size": 12,
                        "family": LEGEND_FONT_FAMILY,
                    },
                },
            },
            "tooltip": {
                "enabled": true,
                "backgroundColor": "rgba(0, 0, 0, 0.8)",
                "padding": 12,
                "cornerRadius": 6,
                "titleFont": {
                    "size": 13,
                    "weight": "bold",
                },
                "bodyFont": {
                    "size": 12,
                },
                "displayColors": true,
                "borderColor": "rgba(255, 255, 255, 0.1)",
                "borderWidth": 1,
            },
        },
    });

    if kind.has_scales() {
        options["scales"] = scales(kind);
    }

    options
}

fn scales(kind: ChartKind) -> Value {
    let ticks = json!({"font": {"size": TICK_FONT_SIZE}});

    if kind == ChartKind::Radar {
        return json!({
            "r": {
                "beginAtZero": true,
                "grid": {"color": GRID_COLOR},
                "ticks": ticks,
            },
        });
    }

    json!({
        "x": {
            "grid": {
                "display": kind.shows_x_grid(),
                "color": X_GRID_COLOR,
            },
            "ticks": ticks,
        },
        "y": {
            "beginAtZero": true,
            "grid": {"color": GRID_COLOR},
            "ticks": ticks,
        },
    })
}

/// Deep-merge `source` over `target`.
///
/// For every key in `source`: when both sides hold an object the two are merged
/// recursively, otherwise the source value replaces the target value. Arrays are
/// replaced whole, never merged element-wise. Keys only in `target` are kept.
///
/// A `source` that is not an object leaves `target` unchanged.
#[must_use]
pub fn merge_options(target: &Value, source: &Value) -> Value {
    match (target, source) {
        (Value::Object(target), Value::Object(source)) => Value::Object(merge_maps(target, source)),
        _ => target.clone(),
    }
}

fn merge_maps(target: &Map<String, Value>, source: &Map<String, Value>) -> Map<String, Value> {
    let mut output = target.clone();
    for (key, value) in source {
        let merged = match (target.get(key), value) {
            (Some(Value::Object(existing)), Value::Object(incoming)) => {
                Value::Object(merge_maps(existing, incoming))
            }
            _ => value.clone(),
        };
        output.insert(key.clone(), merged);
    }
    output
}
