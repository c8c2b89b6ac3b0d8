use serde::{Deserialize, Serialize};

use crate::core::ChartMode;

/// Wheel radius shared by every chart mode.
pub const MAIN_RADIUS: f64 = 240.0;

/// Canvas height shared by every chart mode.
pub const CHART_HEIGHT: f64 = 550.0;

const BASIC_CHART_VIEWBOX: &str = "0 0 820 550.0";
const WIDE_CHART_VIEWBOX: &str = "0 0 1200 546.0";
const TRANSIT_CHART_WITH_TABLE_VIEWBOX: &str = "0 0 960 546.0";

const BASIC_CHART_WIDTH: f64 = 820.0;
const WIDE_CHART_WIDTH: f64 = 1200.0;
const TRANSIT_CHART_WITH_TABLE_WIDTH: f64 = 960.0;

/// How the aspect table of a dual chart is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DualAspectGridStyle {
    /// Compact list with a localized title.
    #[default]
    List,
    /// Fixed-size positional grid.
    Table,
}

/// Concentric circle radii for one chart mode, plus the shared main radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryRadii {
    pub first_circle: f64,
    pub second_circle: f64,
    pub third_circle: f64,
    pub main: f64,
}

/// Canvas dimensions and radii resolved from the chart mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartSizing {
    pub height: f64,
    pub width: f64,
    pub viewbox: &'static str,
    pub radii: GeometryRadii,
}

/// Maps a chart mode to canvas dimensions, viewbox, and ring radii.
///
/// The table-style override narrows the canvas only when the mode is
/// exactly Transit; Synastry always uses the wide canvas regardless of
/// grid style.
#[must_use]
pub fn resolve_sizing(mode: ChartMode, grid_style: DualAspectGridStyle) -> ChartSizing {
    let radii = |first, second, third| GeometryRadii {
        first_circle: first,
        second_circle: second,
        third_circle: third,
        main: MAIN_RADIUS,
    };

    match mode {
        ChartMode::Natal | ChartMode::Composite => ChartSizing {
            height: CHART_HEIGHT,
            width: BASIC_CHART_WIDTH,
            viewbox: BASIC_CHART_VIEWBOX,
            radii: radii(0.0, 36.0, 120.0),
        },
        ChartMode::ExternalNatal => ChartSizing {
            height: CHART_HEIGHT,
            width: BASIC_CHART_WIDTH,
            viewbox: BASIC_CHART_VIEWBOX,
            radii: radii(56.0, 92.0, 112.0),
        },
        ChartMode::Synastry => ChartSizing {
            height: CHART_HEIGHT,
            width: WIDE_CHART_WIDTH,
            viewbox: WIDE_CHART_VIEWBOX,
            radii: radii(56.0, 92.0, 112.0),
        },
        ChartMode::Transit => {
            let (width, viewbox) = if grid_style == DualAspectGridStyle::Table {
                (TRANSIT_CHART_WITH_TABLE_WIDTH, TRANSIT_CHART_WITH_TABLE_VIEWBOX)
            } else {
                (WIDE_CHART_WIDTH, WIDE_CHART_VIEWBOX)
            };
            ChartSizing {
                height: CHART_HEIGHT,
                width,
                viewbox,
                radii: radii(56.0, 92.0, 112.0),
            }
        }
    }
}
