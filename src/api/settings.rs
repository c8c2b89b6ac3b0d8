//! Immutable settings-store snapshot.
//!
//! Mirrors the per-point scores, ruling signs, and color tables provided
//! by the external settings store. The snapshot is read once at
//! configuration-resolution time and never mutated by the engine; active
//! subsets are produced by pure filtering, not in-place flags.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::ZodiacSign;
use crate::error::{ChartError, ChartResult};

/// Settings entry for one celestial point: identity, color, elemental
/// base score, and the signs it rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelestialPointSetting {
    pub id: u16,
    pub name: String,
    pub color: String,
    pub element_points: f64,
    #[serde(default)]
    pub ruling_signs: SmallVec<[ZodiacSign; 2]>,
}

/// Settings entry for one aspect classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectSetting {
    pub name: String,
    pub degree: u16,
    pub color: String,
}

/// Color bindings for chart furniture.
///
/// The radix ring palette is used by single-subject modes, the transit
/// ring palette by dual-subject modes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartColorPalette {
    pub paper_0: String,
    pub paper_1: String,
    pub zodiac_bg: [String; 12],
    pub zodiac_icon: [String; 12],
    pub zodiac_radix_ring: [String; 4],
    pub zodiac_transit_ring: [String; 4],
    pub houses_radix_line: String,
    pub houses_transit_line: String,
}

impl Default for ChartColorPalette {
    fn default() -> Self {
        // The element cycle repeats three times around the wheel.
        let cycle = |colors: [&str; 4]| -> [String; 12] {
            std::array::from_fn(|i| colors[i % 4].to_owned())
        };

        Self {
            paper_0: "#000000".to_owned(),
            paper_1: "#ffffff".to_owned(),
            zodiac_bg: cycle(["#ff7200", "#6b3d00", "#69acf1", "#2b4972"]),
            zodiac_icon: cycle(["#ff7200", "#6b3d00", "#69acf1", "#2b4972"]),
            zodiac_radix_ring: [
                "#ff0000".to_owned(),
                "#ff0000".to_owned(),
                "#ff0000".to_owned(),
                "#ff7e00".to_owned(),
            ],
            zodiac_transit_ring: [
                "#ff0000".to_owned(),
                "#ff0000".to_owned(),
                "#0000ff".to_owned(),
                "#0000ff".to_owned(),
            ],
            houses_radix_line: "#ff0000".to_owned(),
            houses_transit_line: "#0000ff".to_owned(),
        }
    }
}

/// Full settings snapshot consumed by one render call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSettings {
    pub colors: ChartColorPalette,
    pub celestial_points: Vec<CelestialPointSetting>,
    pub aspects: Vec<AspectSetting>,
}

impl ChartSettings {
    #[must_use]
    pub fn point_setting(&self, name: &str) -> Option<&CelestialPointSetting> {
        self.celestial_points
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    #[must_use]
    pub fn aspect_setting(&self, name: &str) -> Option<&AspectSetting> {
        self.aspects.iter().find(|a| a.name == name)
    }

    /// Color used for an axial cusp line, falling back to the standard
    /// radix house line color when the axis is not configured.
    #[must_use]
    pub fn axis_color(&self, axis_name: &str) -> &str {
        self.point_setting(axis_name)
            .map_or(&self.colors.houses_radix_line, |p| &p.color)
    }

    /// Serializes the snapshot to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize settings: {e}")))
    }

    /// Deserializes a snapshot from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse settings: {e}")))
    }
}

impl Default for ChartSettings {
    fn default() -> Self {
        use ZodiacSign::*;

        let point = |id: u16, name: &str, color: &str, score: f64, ruling: &[ZodiacSign]| {
            CelestialPointSetting {
                id,
                name: name.to_owned(),
                color: color.to_owned(),
                element_points: score,
                ruling_signs: SmallVec::from_slice(ruling),
            }
        };

        let aspect = |name: &str, degree: u16, color: &str| AspectSetting {
            name: name.to_owned(),
            degree,
            color: color.to_owned(),
        };

        Self {
            colors: ChartColorPalette::default(),
            celestial_points: vec![
                point(0, "Sun", "#984b00", 40.0, &[Leo]),
                point(1, "Moon", "#150052", 40.0, &[Cancer]),
                point(2, "Mercury", "#520800", 15.0, &[Gemini, Virgo]),
                point(3, "Venus", "#400052", 15.0, &[Taurus, Libra]),
                point(4, "Mars", "#540000", 15.0, &[Aries, Scorpio]),
                point(5, "Jupiter", "#47133d", 10.0, &[Sagittarius, Pisces]),
                point(6, "Saturn", "#124500", 10.0, &[Capricorn, Aquarius]),
                point(7, "Uranus", "#6f0766", 10.0, &[Aquarius]),
                point(8, "Neptune", "#06537f", 10.0, &[Pisces]),
                point(9, "Pluto", "#713f04", 10.0, &[Scorpio]),
                point(10, "Mean_Node", "#4c1541", 20.0, &[]),
                point(11, "True_Node", "#4c1541", 20.0, &[]),
                point(12, "Ascendant", "#ff7e00", 40.0, &[]),
                point(13, "Medium_Coeli", "#ff0000", 20.0, &[]),
                point(14, "Descendant", "#ff7e00", 0.0, &[]),
                point(15, "Imum_Coeli", "#ff0000", 0.0, &[]),
                point(16, "Chiron", "#666f06", 5.0, &[]),
                point(17, "Mean_Lilith", "#000000", 10.0, &[]),
            ],
            aspects: vec![
                aspect("conjunction", 0, "#5757e2"),
                aspect("semi-sextile", 30, "#810757"),
                aspect("semi-square", 45, "#b14e58"),
                aspect("sextile", 60, "#d59e28"),
                aspect("quintile", 72, "#1f99b3"),
                aspect("square", 90, "#dc0000"),
                aspect("trine", 120, "#36d100"),
                aspect("sesquiquadrate", 135, "#985a10"),
                aspect("biquintile", 144, "#7a9810"),
                aspect("quincunx", 150, "#985a10"),
                aspect("opposition", 180, "#510060"),
            ],
        }
    }
}
