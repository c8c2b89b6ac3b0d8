//! Localization snapshot.
//!
//! The engine never reads localization files itself; a resolved snapshot
//! for one language is passed in. Every lookup carries an explicit
//! English fallback at the call site, so a sparse snapshot degrades to
//! readable output instead of failing.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Phrase table for one language.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Locale {
    #[serde(default)]
    phrases: IndexMap<String, String>,
    /// Display labels per celestial point name, used by the position grid.
    #[serde(default)]
    celestial_points: IndexMap<String, String>,
}

impl Locale {
    #[must_use]
    pub fn new(
        phrases: IndexMap<String, String>,
        celestial_points: IndexMap<String, String>,
    ) -> Self {
        Self {
            phrases,
            celestial_points,
        }
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse locale: {e}")))
    }

    /// Looks up a phrase, returning `fallback` when the key is absent.
    #[must_use]
    pub fn phrase<'a>(&'a self, key: &str, fallback: &'a str) -> &'a str {
        self.phrases.get(key).map_or(fallback, String::as_str)
    }

    pub fn insert_phrase(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.phrases.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn celestial_point_labels(&self) -> &IndexMap<String, String> {
        &self.celestial_points
    }

    pub fn insert_celestial_point_label(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.celestial_points.insert(key.into(), value.into());
    }
}
