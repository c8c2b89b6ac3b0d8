use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{ChartMode, DualAspectGridStyle};
use crate::error::{ChartError, ChartResult};

/// Known theme identifiers. The CSS payload itself is loaded upstream and
/// passed to the assembler as an immutable snapshot string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartTheme {
    Classic,
    Dark,
    DarkHighContrast,
    Light,
}

impl ChartTheme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Dark => "dark",
            Self::DarkHighContrast => "dark-high-contrast",
            Self::Light => "light",
        }
    }
}

impl fmt::Display for ChartTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartTheme {
    type Err = ChartError;

    fn from_str(s: &str) -> ChartResult<Self> {
        match s {
            "classic" => Ok(Self::Classic),
            "dark" => Ok(Self::Dark),
            "dark-high-contrast" => Ok(Self::DarkHighContrast),
            "light" => Ok(Self::Light),
            other => Err(ChartError::UnknownTheme(other.to_owned())),
        }
    }
}

/// Immutable render configuration for one assemble call.
///
/// Serializable so host applications can persist/load chart setup without
/// inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    pub mode: ChartMode,
    #[serde(default)]
    pub theme: Option<ChartTheme>,
    #[serde(default)]
    pub dual_aspect_grid_style: DualAspectGridStyle,
    #[serde(default = "default_active_points")]
    pub active_points: Vec<String>,
    /// Aspect classifications to render. Empty means all.
    #[serde(default)]
    pub active_aspects: Vec<String>,
    #[serde(default = "default_language")]
    pub language: String,
}

impl RenderConfig {
    #[must_use]
    pub fn new(mode: ChartMode) -> Self {
        Self {
            mode,
            theme: None,
            dual_aspect_grid_style: DualAspectGridStyle::default(),
            active_points: default_active_points(),
            active_aspects: Vec::new(),
            language: default_language(),
        }
    }

    #[must_use]
    pub fn with_theme(mut self, theme: ChartTheme) -> Self {
        self.theme = Some(theme);
        self
    }

    #[must_use]
    pub fn with_dual_aspect_grid_style(mut self, style: DualAspectGridStyle) -> Self {
        self.dual_aspect_grid_style = style;
        self
    }

    #[must_use]
    pub fn with_active_points(mut self, points: Vec<String>) -> Self {
        self.active_points = points;
        self
    }

    #[must_use]
    pub fn with_active_aspects(mut self, aspects: Vec<String>) -> Self {
        self.active_aspects = aspects;
        self
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_language() -> String {
    "EN".to_owned()
}

/// Points plotted when the caller does not narrow the set.
pub fn default_active_points() -> Vec<String> {
    [
        "Sun",
        "Moon",
        "Mercury",
        "Venus",
        "Mars",
        "Jupiter",
        "Saturn",
        "Uranus",
        "Neptune",
        "Pluto",
        "Mean_Node",
        "Chiron",
        "Ascendant",
        "Medium_Coeli",
    ]
    .into_iter()
    .map(str::to_owned)
    .collect()
}
