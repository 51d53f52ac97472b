//! Chart kinds supported by the charting backend.

use serde::{Deserialize, Serialize};

/// Supported chart kinds.
///
/// Names match the charting library's own type names, so `polarArea` keeps
/// its camel case on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
    Doughnut,
    Radar,
    PolarArea,
    Scatter,
    Bubble,
}

impl ChartKind {
    /// Every supported kind, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Bar,
        Self::Line,
        Self::Pie,
        Self::Doughnut,
        Self::Radar,
        Self::PolarArea,
        Self::Scatter,
        Self::Bubble,
    ];

    /// Parse a kind from its wire name.
    ///
    /// Matching is exact: `"Bar"` and `"polararea"` are not recognized.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "bar" => Some(Self::Bar),
            "line" => Some(Self::Line),
            "pie" => Some(Self::Pie),
            "doughnut" => Some(Self::Doughnut),
            "radar" => Some(Self::Radar),
            "polarArea" => Some(Self::PolarArea),
            "scatter" => Some(Self::Scatter),
            "bubble" => Some(Self::Bubble),
            _ => None,
        }
    }

    /// Wire name of this kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Line => "line",
            Self::Pie => "pie",
            Self::Doughnut => "doughnut",
            Self::Radar => "radar",
            Self::PolarArea => "polarArea",
            Self::Scatter => "scatter",
            Self::Bubble => "bubble",
        }
    }

    /// Circular kinds get their legend on the right.
    #[must_use]
    pub fn is_circular(self) -> bool {
        matches!(self, Self::Pie | Self::Doughnut | Self::PolarArea)
    }

    /// Whether this kind draws scale axes (radial for radar, cartesian otherwise).
    #[must_use]
    pub fn has_scales(self) -> bool {
        matches!(
            self,
            Self::Bar | Self::Line | Self::Scatter | Self::Bubble | Self::Radar
        )
    }

    /// Whether the x axis shows grid lines by default.
    #[must_use]
    pub fn shows_x_grid(self) -> bool {
        matches!(self, Self::Scatter | Self::Bubble)
    }

    /// Comma-separated list of supported names, for diagnostics.
    pub(crate) fn supported_names() -> String {
        Self::ALL
            .into_iter()
            .map(Self::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
