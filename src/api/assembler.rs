//! Template Record Builder.
//!
//! Orchestrates sizing, geometry, elemental scoring, and text assembly in
//! a fixed order, writing everything into one [`TemplateRecord`]. Either
//! the full record is produced or the call fails; no partial record is
//! ever returned.

use tracing::{debug, trace};

use crate::api::locale::Locale;
use crate::api::render_config::RenderConfig;
use crate::api::settings::{CelestialPointSetting, ChartSettings};
use crate::api::template_record::TemplateRecord;
use crate::api::text_fields::TextFieldAssembler;
use crate::core::{
    AspectRecord, CelestialPoint, ChartMode, ElementTotals, Subject, resolve_sizing,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{ChartPainter, GeometryAssembly};

/// One active celestial point: the settings entry paired with the
/// subject's computed position.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivePoint {
    pub setting: CelestialPointSetting,
    pub point: CelestialPoint,
}

/// Immutable active subset of the configured celestial points, produced
/// by pure filtering; the shared settings snapshot is never mutated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivePointSet {
    points: Vec<ActivePoint>,
}

impl ActivePointSet {
    /// Pairs each configured point named in `active_names` with the
    /// subject's data for it, preserving settings order. An active point
    /// the subject does not carry is fatal.
    pub fn select(
        settings: &ChartSettings,
        active_names: &[String],
        subject: &Subject,
    ) -> ChartResult<Self> {
        let mut points = Vec::with_capacity(active_names.len());
        for setting in &settings.celestial_points {
            if !active_names
                .iter()
                .any(|name| name.eq_ignore_ascii_case(&setting.name))
            {
                continue;
            }
            let point = subject
                .point(&setting.name)
                .ok_or_else(|| ChartError::MissingPoint(setting.name.clone()))?;
            points.push(ActivePoint {
                setting: setting.clone(),
                point: point.clone(),
            });
        }
        Ok(Self { points })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn points(&self) -> &[ActivePoint] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActivePoint> {
        self.points.iter()
    }

    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        self.points
            .iter()
            .any(|p| p.setting.name.eq_ignore_ascii_case(name))
    }
}

/// Assembles one [`TemplateRecord`] from read-only inputs.
///
/// Each call is a pure function of its inputs; concurrent assembles need
/// no coordination.
pub struct ChartTemplateAssembler<'a, P: ChartPainter> {
    config: &'a RenderConfig,
    subject: &'a Subject,
    settings: &'a ChartSettings,
    locale: &'a Locale,
    painter: &'a P,
    second_subject: Option<&'a Subject>,
    aspects: &'a [AspectRecord],
    theme_css: &'a str,
}

impl<'a, P: ChartPainter> ChartTemplateAssembler<'a, P> {
    #[must_use]
    pub fn new(
        config: &'a RenderConfig,
        subject: &'a Subject,
        settings: &'a ChartSettings,
        locale: &'a Locale,
        painter: &'a P,
    ) -> Self {
        Self {
            config,
            subject,
            settings,
            locale,
            painter,
            second_subject: None,
            aspects: &[],
            theme_css: "",
        }
    }

    /// Comparison subject for Synastry/Transit (and optionally
    /// ExternalNatal) charts.
    #[must_use]
    pub fn with_second_subject(mut self, subject: &'a Subject) -> Self {
        self.second_subject = Some(subject);
        self
    }

    /// Precomputed aspect list from the upstream detection stage.
    #[must_use]
    pub fn with_aspects(mut self, aspects: &'a [AspectRecord]) -> Self {
        self.aspects = aspects;
        self
    }

    /// Pre-loaded theme CSS snapshot bound to `color_style_tag`.
    #[must_use]
    pub fn with_theme_css(mut self, css: &'a str) -> Self {
        self.theme_css = css;
        self
    }

    pub fn assemble(&self) -> ChartResult<TemplateRecord> {
        let mode = self.config.mode;
        debug!(mode = %mode, aspects = self.aspects.len(), "assembling chart template record");

        if mode.is_dual() && self.second_subject.is_none() {
            return Err(ChartError::MissingSecondSubject(mode));
        }
        if mode == ChartMode::Composite {
            self.subject.composite_parts()?;
        }

        let sizing = resolve_sizing(mode, self.config.dual_aspect_grid_style);

        let active =
            ActivePointSet::select(self.settings, &self.config.active_points, self.subject)?;
        let second_active = match self.second_subject {
            Some(second) if mode.is_dual() => Some(ActivePointSet::select(
                self.settings,
                &self.config.active_points,
                second,
            )?),
            _ => None,
        };

        let aspects = self.filter_aspects();
        validate_aspect_points(&aspects, &active, second_active.as_ref())?;

        // Location and coordinates follow the charted moment: Transit
        // uses the comparison subject, Composite the constituent midpoint.
        let (location, geolat, geolon) = match mode {
            ChartMode::Transit => {
                let second = self
                    .second_subject
                    .ok_or(ChartError::MissingSecondSubject(mode))?;
                (second.city.clone(), second.lat, second.lng)
            }
            ChartMode::Composite => {
                let parts = self.subject.composite_parts()?;
                (
                    String::new(),
                    (parts.first.lat + parts.second.lat) / 2.0,
                    (parts.first.lng + parts.second.lng) / 2.0,
                )
            }
            _ => (self.subject.city.clone(), self.subject.lat, self.subject.lng),
        };

        let mut record = TemplateRecord::new();

        record.insert("color_style_tag", self.theme_css);
        record.insert("chart_height", sizing.height);
        record.insert("chart_width", sizing.width);
        record.insert("viewbox", sizing.viewbox);

        let geometry = GeometryAssembly {
            painter: self.painter,
            settings: self.settings,
            locale: self.locale,
            sizing: &sizing,
            mode,
            grid_style: self.config.dual_aspect_grid_style,
            subject: self.subject,
            second_subject: self.second_subject,
            aspects: &aspects,
            active: &active,
            second_active: second_active.as_ref(),
        };
        geometry.populate_rings_and_circles(&mut record)?;

        let text = TextFieldAssembler {
            mode,
            subject: self.subject,
            second_subject: self.second_subject,
            locale: self.locale,
            location: &location,
            geolat,
            geolon,
        };
        text.populate(&mut record)?;

        let moon = self
            .painter
            .moon_phase_params(self.subject.lunar_phase.degrees_between_s_m, geolat);
        record.insert("lunar_phase_rotate", moon.rotate);
        record.insert("lunar_phase_circle_center_x", moon.circle_center_x);
        record.insert("lunar_phase_circle_radius", moon.circle_radius);

        self.populate_colors(&mut record);
        geometry.populate_chart_elements(&mut record)?;
        self.populate_element_percentages(&mut record, &active)?;
        text.set_date_time_info(&mut record)?;

        record.validate_contract()?;
        trace!(fields = record.len(), "template record complete");
        Ok(record)
    }

    /// Keeps only aspects whose classification is active. An empty
    /// active-aspect list keeps everything.
    fn filter_aspects(&self) -> Vec<AspectRecord> {
        if self.config.active_aspects.is_empty() {
            return self.aspects.to_vec();
        }
        self.aspects
            .iter()
            .filter(|a| self.config.active_aspects.iter().any(|name| *name == a.aspect))
            .cloned()
            .collect()
    }

    fn populate_colors(&self, record: &mut TemplateRecord) {
        let colors = &self.settings.colors;
        record.insert("paper_color_0", colors.paper_0.as_str());
        record.insert("paper_color_1", colors.paper_1.as_str());

        for point in &self.settings.celestial_points {
            record.insert(
                format!("planets_color_{}", point.id),
                point.color.as_str(),
            );
        }
        for (index, color) in colors.zodiac_icon.iter().enumerate() {
            record.insert(format!("zodiac_color_{index}"), color.as_str());
        }
        for aspect in &self.settings.aspects {
            record.insert(format!("orb_color_{}", aspect.degree), aspect.color.as_str());
        }
    }

    fn populate_element_percentages(
        &self,
        record: &mut TemplateRecord,
        active: &ActivePointSet,
    ) -> ChartResult<()> {
        let totals = ElementTotals::tally(active.iter().map(|p| {
            (
                p.setting.element_points,
                p.setting.ruling_signs.as_slice(),
                p.point.sign,
            )
        }));
        let shares = totals.percentages()?;

        record.insert(
            "fire_string",
            format!("{} {}%", self.locale.phrase("fire", "Fire"), shares.fire),
        );
        record.insert(
            "earth_string",
            format!("{} {}%", self.locale.phrase("earth", "Earth"), shares.earth),
        );
        record.insert(
            "air_string",
            format!("{} {}%", self.locale.phrase("air", "Air"), shares.air),
        );
        record.insert(
            "water_string",
            format!("{} {}%", self.locale.phrase("water", "Water"), shares.water),
        );
        Ok(())
    }
}

/// Every aspect endpoint must name a point in the active set (either
/// subject's for dual charts); anything else is corrupted collaborator
/// output and aborts the render.
fn validate_aspect_points(
    aspects: &[AspectRecord],
    active: &ActivePointSet,
    second_active: Option<&ActivePointSet>,
) -> ChartResult<()> {
    let known = |name: &str| {
        active.contains_name(name)
            || second_active.is_some_and(|set| set.contains_name(name))
    };

    for aspect in aspects {
        for endpoint in [&aspect.first_point, &aspect.second_point] {
            if !known(endpoint) {
                return Err(ChartError::UnknownAspectPoint(endpoint.clone()));
            }
        }
    }
    Ok(())
}
