use crate::render::painter::{
    AspectLineParams, ChartPainter, HouseGridParams, HousesCuspsParams, MoonPhaseParams,
    PlanetGridParams, PlanetsParams, ZodiacSliceParams,
};
use crate::api::assembler::ActivePointSet;
use crate::api::settings::{AspectSetting, CelestialPointSetting};
use crate::core::{AspectRecord, ChartMode};

/// Headless painter used by tests and template-only callers.
///
/// Emits deterministic placeholder fragments that embed the parameters
/// they were called with, so tests can assert on radius, color, and
/// subject selection without a real SVG backend.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPainter;

impl ChartPainter for NullPainter {
    fn transit_ring(&self, radius: f64, paper_color: &str, ring_color: &str) -> String {
        format!("<!--transit-ring r={radius} paper={paper_color} ring={ring_color}-->")
    }

    fn degree_ring(
        &self,
        radius: f64,
        first_circle_radius: f64,
        seventh_house_pos: f64,
        color: &str,
    ) -> String {
        format!(
            "<!--degree-ring r={radius} c1={first_circle_radius} seventh={seventh_house_pos} color={color}-->"
        )
    }

    fn transit_ring_degree_steps(&self, radius: f64, seventh_house_pos: f64) -> String {
        format!("<!--transit-degree-steps r={radius} seventh={seventh_house_pos}-->")
    }

    fn first_circle(
        &self,
        radius: f64,
        stroke: &str,
        mode: ChartMode,
        circle_radius: Option<f64>,
    ) -> String {
        format!(
            "<!--first-circle r={radius} stroke={stroke} mode={mode} c={:?}-->",
            circle_radius
        )
    }

    fn second_circle(
        &self,
        radius: f64,
        stroke: &str,
        fill: &str,
        mode: ChartMode,
        circle_radius: Option<f64>,
    ) -> String {
        format!(
            "<!--second-circle r={radius} stroke={stroke} fill={fill} mode={mode} c={:?}-->",
            circle_radius
        )
    }

    fn third_circle(
        &self,
        radius: f64,
        stroke: &str,
        fill: &str,
        mode: ChartMode,
        circle_radius: f64,
    ) -> String {
        format!(
            "<!--third-circle r={radius} stroke={stroke} fill={fill} mode={mode} c={circle_radius}-->"
        )
    }

    fn zodiac_slice(&self, params: &ZodiacSliceParams<'_>) -> String {
        format!(
            "<!--zodiac-slice {} idx={} r={} c1={} style={}-->",
            params.sign.index(),
            params.index,
            params.radius,
            params.first_circle_radius,
            params.style
        )
    }

    fn aspect_line(&self, params: &AspectLineParams<'_>) -> String {
        format!(
            "<!--aspect-line {} r={} ar={} color={}-->",
            params.aspect.aspect, params.radius, params.inner_radius, params.color
        )
    }

    fn aspect_grid(
        &self,
        text_color: &str,
        points: &ActivePointSet,
        aspects: &[AspectRecord],
    ) -> String {
        format!(
            "<!--aspect-grid color={text_color} points={} aspects={}-->",
            points.len(),
            aspects.len()
        )
    }

    fn dual_aspect_grid(
        &self,
        text_color: &str,
        points: &ActivePointSet,
        aspects: &[AspectRecord],
        width: f64,
        height: f64,
    ) -> String {
        format!(
            "<!--dual-aspect-grid color={text_color} points={} aspects={} {width}x{height}-->",
            points.len(),
            aspects.len()
        )
    }

    fn dual_aspect_list(
        &self,
        title: &str,
        aspects: &[AspectRecord],
        point_settings: &[CelestialPointSetting],
        aspect_settings: &[AspectSetting],
    ) -> String {
        format!(
            "<!--dual-aspect-list title={title} aspects={} points={} kinds={}-->",
            aspects.len(),
            point_settings.len(),
            aspect_settings.len()
        )
    }

    fn house_grid(&self, params: &HouseGridParams<'_>) -> String {
        format!(
            "<!--house-grid mode={} main={} secondary={:?} label={}-->",
            params.mode,
            params.main_houses.len(),
            params.secondary_houses.map(<[_]>::len),
            params.cusp_label
        )
    }

    fn houses_cusps(&self, params: &HousesCuspsParams<'_>) -> String {
        format!(
            "<!--houses-cusps mode={} r={} c1={} c3={} secondary={}-->",
            params.mode,
            params.radius,
            params.first_circle_radius,
            params.third_circle_radius,
            params.secondary_houses.is_some()
        )
    }

    fn planets(&self, params: &PlanetsParams<'_>) -> String {
        format!(
            "<!--planets mode={} r={} c3={} points={} secondary={:?}-->",
            params.mode,
            params.radius,
            params.third_circle_radius,
            params.points.len(),
            params.secondary_points.map(ActivePointSet::len)
        )
    }

    fn planet_grid(&self, params: &PlanetGridParams<'_>) -> String {
        format!(
            "<!--planet-grid title={} subject={} points={} secondary={:?}-->",
            params.title,
            params.subject_name,
            params.points.len(),
            params.secondary.map(|(name, set)| (name, set.len()))
        )
    }

    fn moon_phase_params(&self, separation_deg: f64, latitude: f64) -> MoonPhaseParams {
        // Southern-hemisphere observers see the dial flipped.
        let rotate = if latitude < 0.0 { 180.0 } else { 0.0 };
        MoonPhaseParams {
            rotate,
            circle_center_x: 20.0 + (separation_deg / 360.0),
            circle_radius: 10.0,
        }
    }
}
