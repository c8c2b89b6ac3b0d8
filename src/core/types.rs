use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Chart structure being rendered. Fixed at construction and driving
/// every mode-dependent branch in the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartMode {
    Natal,
    ExternalNatal,
    Synastry,
    Transit,
    Composite,
}

impl ChartMode {
    /// Dual-chart modes compare two subjects on one wheel.
    #[must_use]
    pub fn is_dual(self) -> bool {
        matches!(self, Self::Synastry | Self::Transit)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Natal => "Natal",
            Self::ExternalNatal => "ExternalNatal",
            Self::Synastry => "Synastry",
            Self::Transit => "Transit",
            Self::Composite => "Composite",
        }
    }
}

impl fmt::Display for ChartMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartMode {
    type Err = ChartError;

    fn from_str(s: &str) -> ChartResult<Self> {
        match s {
            "Natal" => Ok(Self::Natal),
            "ExternalNatal" => Ok(Self::ExternalNatal),
            "Synastry" => Ok(Self::Synastry),
            "Transit" => Ok(Self::Transit),
            "Composite" => Ok(Self::Composite),
            other => Err(ChartError::UnrecognizedMode(other.to_owned())),
        }
    }
}

/// One of the four classical elements a zodiac sign belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

/// The twelve signs in wheel order, starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    pub const ALL: [Self; 12] = [
        Self::Aries,
        Self::Taurus,
        Self::Gemini,
        Self::Cancer,
        Self::Leo,
        Self::Virgo,
        Self::Libra,
        Self::Scorpio,
        Self::Sagittarius,
        Self::Capricorn,
        Self::Aquarius,
        Self::Pisces,
    ];

    /// Zero-based position on the wheel (Aries = 0).
    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> ChartResult<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or_else(|| ChartError::InvalidData(format!("zodiac sign index out of range: {index}")))
    }

    /// The fire/earth/air/water cycle repeats three times around the wheel.
    #[must_use]
    pub fn element(self) -> Element {
        match self.index() % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }
}

/// Tropical zodiac, or a sidereal zodiac with a named ayanamsa mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Zodiac {
    Tropical,
    Sidereal { mode: String },
}

/// Lunar-phase descriptor computed upstream.
#[derive(Debug, Clone, PartialEq)]
pub struct LunarPhase {
    /// Day number within the lunation cycle.
    pub moon_phase: i64,
    /// Display name, e.g. "Waxing Crescent".
    pub moon_phase_name: String,
    /// Separation angle between sun and moon, in degrees.
    pub degrees_between_s_m: f64,
}

/// A plotted body or axial cusp with its upstream-computed position.
#[derive(Debug, Clone, PartialEq)]
pub struct CelestialPoint {
    pub name: String,
    /// Absolute ecliptic longitude in degrees.
    pub abs_pos: f64,
    pub sign: ZodiacSign,
    /// House membership, 1-based.
    pub house: u8,
}

/// One house cusp position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HouseCusp {
    /// 1-based house number.
    pub number: u8,
    /// Absolute ecliptic longitude of the cusp in degrees.
    pub abs_pos: f64,
}

/// Birth data summary for one constituent of a composite chart.
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectSummary {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub local_datetime: DateTime<FixedOffset>,
    pub perspective: String,
}

/// The two constituents a composite (midpoint) chart was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeParts {
    pub first: SubjectSummary,
    pub second: SubjectSummary,
}

/// Read-only subject data produced by the upstream ephemeris stage.
///
/// Point keys are matched case-insensitively; houses must contain exactly
/// twelve cusps in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Subject {
    pub name: String,
    pub city: String,
    pub lat: f64,
    pub lng: f64,
    pub local_datetime: DateTime<FixedOffset>,
    pub zodiac: Zodiac,
    pub houses_system_identifier: String,
    pub houses_system_name: String,
    pub perspective: String,
    pub lunar_phase: LunarPhase,
    pub points: IndexMap<String, CelestialPoint>,
    pub houses: Vec<HouseCusp>,
    /// Present only for the subject of a Composite chart.
    pub composite: Option<CompositeParts>,
}

impl Subject {
    #[must_use]
    pub fn point(&self, name: &str) -> Option<&CelestialPoint> {
        self.points.get(&name.to_ascii_lowercase())
    }

    pub fn house_cusps(&self) -> ChartResult<&[HouseCusp]> {
        if self.houses.len() != 12 {
            return Err(ChartError::InvalidData(format!(
                "subject {:?} has {} house cusps, expected 12",
                self.name,
                self.houses.len()
            )));
        }
        Ok(&self.houses)
    }

    pub fn first_house_pos(&self) -> ChartResult<f64> {
        Ok(self.house_cusps()?[0].abs_pos)
    }

    pub fn seventh_house_pos(&self) -> ChartResult<f64> {
        Ok(self.house_cusps()?[6].abs_pos)
    }

    pub fn composite_parts(&self) -> ChartResult<&CompositeParts> {
        self.composite
            .as_ref()
            .ok_or(ChartError::MissingCompositeSubjects)
    }
}

/// A precomputed angular relationship between two celestial points.
///
/// Produced by the upstream aspect-detection stage; the engine only
/// consumes these to render lines and grids.
#[derive(Debug, Clone, PartialEq)]
pub struct AspectRecord {
    pub first_point: String,
    pub second_point: String,
    /// Classification name, e.g. "conjunction" or "trine".
    pub aspect: String,
    /// Deviation from the exact angle, in degrees.
    pub orb: f64,
}
