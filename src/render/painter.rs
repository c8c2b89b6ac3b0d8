//! Drawing collaborator seam.
//!
//! The engine never performs path math itself: every SVG fragment is
//! requested from a [`ChartPainter`] with fully resolved radii, colors,
//! and positions. Backends stay isolated from chart mode dispatch and
//! template bookkeeping.

use indexmap::IndexMap;

use crate::api::assembler::ActivePointSet;
use crate::api::settings::{AspectSetting, CelestialPointSetting};
use crate::core::{AspectRecord, ChartMode, HouseCusp, ZodiacSign};

/// Numeric parameters of the lunar-phase dial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonPhaseParams {
    pub rotate: f64,
    pub circle_center_x: f64,
    pub circle_radius: f64,
}

/// One 30-degree zodiac slice of the outer ring.
#[derive(Debug, Clone, Copy)]
pub struct ZodiacSliceParams<'a> {
    /// Wheel position, Aries = 0.
    pub index: usize,
    pub sign: ZodiacSign,
    pub radius: f64,
    pub first_circle_radius: f64,
    pub seventh_house_pos: f64,
    pub mode: ChartMode,
    pub style: &'a str,
}

/// One aspect line between two plotted points.
#[derive(Debug, Clone, Copy)]
pub struct AspectLineParams<'a> {
    pub radius: f64,
    pub inner_radius: f64,
    pub aspect: &'a AspectRecord,
    pub color: &'a str,
    pub seventh_house_pos: f64,
}

/// House table listing cusp positions for one or two subjects.
#[derive(Debug, Clone, Copy)]
pub struct HouseGridParams<'a> {
    pub main_houses: &'a [HouseCusp],
    pub secondary_houses: Option<&'a [HouseCusp]>,
    pub mode: ChartMode,
    pub text_color: &'a str,
    pub cusp_label: &'a str,
}

/// House cusp marks and numbers on the wheel.
#[derive(Debug, Clone, Copy)]
pub struct HousesCuspsParams<'a> {
    pub radius: f64,
    pub main_houses: &'a [HouseCusp],
    pub secondary_houses: Option<&'a [HouseCusp]>,
    pub standard_cusp_color: &'a str,
    pub first_house_color: &'a str,
    pub tenth_house_color: &'a str,
    pub seventh_house_color: &'a str,
    pub fourth_house_color: &'a str,
    pub transit_cusp_color: Option<&'a str>,
    pub first_circle_radius: f64,
    pub third_circle_radius: f64,
    pub mode: ChartMode,
}

/// Planet glyphs on the wheel for one or two subjects.
#[derive(Debug, Clone, Copy)]
pub struct PlanetsParams<'a> {
    pub radius: f64,
    pub mode: ChartMode,
    pub third_circle_radius: f64,
    pub first_house_pos: f64,
    pub seventh_house_pos: f64,
    pub points: &'a ActivePointSet,
    pub secondary_points: Option<&'a ActivePointSet>,
}

/// Position table listing sign/degree/house per plotted point.
#[derive(Debug, Clone, Copy)]
pub struct PlanetGridParams<'a> {
    pub title: &'a str,
    pub subject_name: &'a str,
    pub points: &'a ActivePointSet,
    pub mode: ChartMode,
    pub text_color: &'a str,
    pub point_labels: &'a IndexMap<String, String>,
    pub secondary: Option<(&'a str, &'a ActivePointSet)>,
}

/// Contract implemented by any drawing backend.
///
/// Every method returns one self-contained SVG fragment. Implementations
/// must be pure: the same parameters always yield the same fragment, so
/// template assembly stays deterministic.
pub trait ChartPainter {
    fn transit_ring(&self, radius: f64, paper_color: &str, ring_color: &str) -> String;

    fn degree_ring(
        &self,
        radius: f64,
        first_circle_radius: f64,
        seventh_house_pos: f64,
        color: &str,
    ) -> String;

    fn transit_ring_degree_steps(&self, radius: f64, seventh_house_pos: f64) -> String;

    fn first_circle(
        &self,
        radius: f64,
        stroke: &str,
        mode: ChartMode,
        circle_radius: Option<f64>,
    ) -> String;

    fn second_circle(
        &self,
        radius: f64,
        stroke: &str,
        fill: &str,
        mode: ChartMode,
        circle_radius: Option<f64>,
    ) -> String;

    fn third_circle(
        &self,
        radius: f64,
        stroke: &str,
        fill: &str,
        mode: ChartMode,
        circle_radius: f64,
    ) -> String;

    fn zodiac_slice(&self, params: &ZodiacSliceParams<'_>) -> String;

    fn aspect_line(&self, params: &AspectLineParams<'_>) -> String;

    /// Triangular aspect grid used by single-subject charts.
    fn aspect_grid(
        &self,
        text_color: &str,
        points: &ActivePointSet,
        aspects: &[AspectRecord],
    ) -> String;

    /// Fixed-size positional aspect grid used by dual charts.
    fn dual_aspect_grid(
        &self,
        text_color: &str,
        points: &ActivePointSet,
        aspects: &[AspectRecord],
        width: f64,
        height: f64,
    ) -> String;

    /// Titled aspect list used by dual charts.
    fn dual_aspect_list(
        &self,
        title: &str,
        aspects: &[AspectRecord],
        point_settings: &[CelestialPointSetting],
        aspect_settings: &[AspectSetting],
    ) -> String;

    fn house_grid(&self, params: &HouseGridParams<'_>) -> String;

    fn houses_cusps(&self, params: &HousesCuspsParams<'_>) -> String;

    fn planets(&self, params: &PlanetsParams<'_>) -> String;

    fn planet_grid(&self, params: &PlanetGridParams<'_>) -> String;

    /// Lunar-phase dial parameters for the given sun/moon separation angle
    /// and observer latitude.
    fn moon_phase_params(&self, separation_deg: f64, latitude: f64) -> MoonPhaseParams;
}
