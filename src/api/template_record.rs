use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{ChartError, ChartResult};

/// One value in the flat template record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TemplateValue {
    Text(String),
    Number(f64),
    Integer(i64),
}

impl fmt::Display for TemplateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
            Self::Integer(n) => write!(f, "{n}"),
        }
    }
}

impl From<String> for TemplateValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for TemplateValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<f64> for TemplateValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for TemplateValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

/// Fixed field names every successful assemble must produce.
///
/// These names, together with the dynamic `planets_color_{id}`,
/// `zodiac_color_{i}`, and `orb_color_{degree}` families, form the wire
/// contract with the downstream substitution stage.
pub const REQUIRED_FIELDS: [&str; 37] = [
    "color_style_tag",
    "chart_height",
    "chart_width",
    "viewbox",
    "transitRing",
    "degreeRing",
    "first_circle",
    "second_circle",
    "third_circle",
    "makeAspectGrid",
    "makeAspects",
    "stringTitle",
    "bottom_left_0",
    "bottom_left_1",
    "bottom_left_2",
    "bottom_left_3",
    "bottom_left_4",
    "lunar_phase_rotate",
    "lunar_phase_circle_center_x",
    "lunar_phase_circle_radius",
    "top_left_0",
    "top_left_1",
    "top_left_2",
    "top_left_3",
    "top_left_4",
    "top_left_5",
    "paper_color_0",
    "paper_color_1",
    "makeZodiac",
    "makeHousesGrid",
    "makeHouses",
    "makePlanets",
    "makePlanetGrid",
    "fire_string",
    "earth_string",
    "air_string",
    "water_string",
];

/// Flat, insertion-ordered field → value record: the sole output of one
/// render call, immutable once returned.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TemplateRecord {
    fields: IndexMap<String, TemplateValue>,
}

impl TemplateRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<TemplateValue>) {
        self.fields.insert(field.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&TemplateValue> {
        self.fields.get(field)
    }

    /// Convenience accessor for text fields.
    #[must_use]
    pub fn text(&self, field: &str) -> Option<&str> {
        match self.fields.get(field) {
            Some(TemplateValue::Text(s)) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TemplateValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Verifies every fixed contract field is present. Absence is a
    /// contract violation, never silently defaulted.
    pub fn validate_contract(&self) -> ChartResult<()> {
        for field in REQUIRED_FIELDS {
            if !self.fields.contains_key(field) {
                return Err(ChartError::MissingTemplateField(field));
            }
        }
        Ok(())
    }
}
