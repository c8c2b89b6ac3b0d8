//! Geometry Assembly.
//!
//! Selects which SVG fragments to request, with which radius set, color
//! palette, and subject data, and delegates each fragment to the
//! [`ChartPainter`]. No path math happens here.

use tracing::trace;

use crate::api::assembler::ActivePointSet;
use crate::api::locale::Locale;
use crate::api::settings::ChartSettings;
use crate::api::template_record::TemplateRecord;
use crate::core::{
    AspectRecord, ChartMode, ChartSizing, DualAspectGridStyle, Subject, ZodiacSign,
};
use crate::error::ChartResult;
use crate::render::painter::{
    AspectLineParams, ChartPainter, HouseGridParams, HousesCuspsParams, PlanetGridParams,
    PlanetsParams, ZodiacSliceParams,
};

/// Inner radius offset for aspect lines on dual charts. Single charts
/// derive the inner radius from the third circle instead; the two must
/// not be unified.
const DUAL_ASPECT_INNER_OFFSET: f64 = 160.0;

/// Dimensions of the fixed-size dual aspect grid.
const DUAL_ASPECT_GRID_SIZE: (f64, f64) = (550.0, 450.0);

pub(crate) struct GeometryAssembly<'a, P: ChartPainter> {
    pub painter: &'a P,
    pub settings: &'a ChartSettings,
    pub locale: &'a Locale,
    pub sizing: &'a ChartSizing,
    pub mode: ChartMode,
    pub grid_style: DualAspectGridStyle,
    pub subject: &'a Subject,
    pub second_subject: Option<&'a Subject>,
    pub aspects: &'a [AspectRecord],
    pub active: &'a ActivePointSet,
    pub second_active: Option<&'a ActivePointSet>,
}

impl<P: ChartPainter> GeometryAssembly<'_, P> {
    pub fn populate_rings_and_circles(&self, record: &mut TemplateRecord) -> ChartResult<()> {
        if self.mode.is_dual() {
            self.dual_rings_and_circles(record)
        } else {
            self.single_rings_and_circles(record)
        }
    }

    fn dual_rings_and_circles(&self, record: &mut TemplateRecord) -> ChartResult<()> {
        let colors = &self.settings.colors;
        let radius = self.sizing.radii.main;
        let seventh = self.subject.seventh_house_pos()?;

        record.insert(
            "transitRing",
            self.painter
                .transit_ring(radius, &colors.paper_1, &colors.zodiac_transit_ring[3]),
        );
        record.insert(
            "degreeRing",
            self.painter.transit_ring_degree_steps(radius, seventh),
        );
        record.insert(
            "first_circle",
            self.painter
                .first_circle(radius, &colors.zodiac_transit_ring[2], self.mode, None),
        );
        record.insert(
            "second_circle",
            self.painter.second_circle(
                radius,
                &colors.zodiac_transit_ring[1],
                &colors.paper_1,
                self.mode,
                None,
            ),
        );
        record.insert(
            "third_circle",
            self.painter.third_circle(
                radius,
                &colors.zodiac_transit_ring[0],
                &colors.paper_1,
                self.mode,
                self.sizing.radii.third_circle,
            ),
        );

        record.insert("makeAspectGrid", self.dual_aspect_grid());
        record.insert(
            "makeAspects",
            self.aspect_lines(radius, radius - DUAL_ASPECT_INNER_OFFSET, seventh),
        );
        Ok(())
    }

    fn single_rings_and_circles(&self, record: &mut TemplateRecord) -> ChartResult<()> {
        let colors = &self.settings.colors;
        let radii = self.sizing.radii;
        let seventh = self.subject.seventh_house_pos()?;

        record.insert("transitRing", "");
        record.insert(
            "degreeRing",
            self.painter
                .degree_ring(radii.main, radii.first_circle, seventh, &colors.paper_0),
        );
        record.insert(
            "first_circle",
            self.painter.first_circle(
                radii.main,
                &colors.zodiac_radix_ring[2],
                self.mode,
                Some(radii.first_circle),
            ),
        );
        record.insert(
            "second_circle",
            self.painter.second_circle(
                radii.main,
                &colors.zodiac_radix_ring[1],
                &colors.paper_1,
                self.mode,
                Some(radii.second_circle),
            ),
        );
        record.insert(
            "third_circle",
            self.painter.third_circle(
                radii.main,
                &colors.zodiac_radix_ring[0],
                &colors.paper_1,
                self.mode,
                radii.third_circle,
            ),
        );
        record.insert(
            "makeAspectGrid",
            self.painter
                .aspect_grid(&colors.paper_0, self.active, self.aspects),
        );
        record.insert(
            "makeAspects",
            self.aspect_lines(radii.main, radii.main - radii.third_circle, seventh),
        );
        Ok(())
    }

    fn dual_aspect_grid(&self) -> String {
        match self.grid_style {
            DualAspectGridStyle::List => {
                let title = if self.mode == ChartMode::Synastry {
                    self.locale.phrase("couple_aspects", "Couple Aspects")
                } else {
                    self.locale.phrase("transit_aspects", "Transit Aspects")
                };
                self.painter.dual_aspect_list(
                    title,
                    self.aspects,
                    &self.settings.celestial_points,
                    &self.settings.aspects,
                )
            }
            DualAspectGridStyle::Table => {
                let (width, height) = DUAL_ASPECT_GRID_SIZE;
                self.painter.dual_aspect_grid(
                    &self.settings.colors.paper_0,
                    self.active,
                    self.aspects,
                    width,
                    height,
                )
            }
        }
    }

    /// One line per aspect whose classification has a configured color;
    /// unconfigured classifications draw nothing.
    fn aspect_lines(&self, radius: f64, inner_radius: f64, seventh_house_pos: f64) -> String {
        let mut out = String::new();
        for aspect in self.aspects {
            let Some(setting) = self.settings.aspect_setting(&aspect.aspect) else {
                trace!(aspect = %aspect.aspect, "no color configured, skipping aspect line");
                continue;
            };
            out.push_str(&self.painter.aspect_line(&AspectLineParams {
                radius,
                inner_radius,
                aspect,
                color: &setting.color,
                seventh_house_pos,
            }));
        }
        out
    }

    pub fn populate_chart_elements(&self, record: &mut TemplateRecord) -> ChartResult<()> {
        record.insert("makeZodiac", self.zodiac_slices()?);
        self.populate_houses(record)?;
        self.populate_planets(record)?;
        self.populate_planet_grid(record);
        Ok(())
    }

    fn zodiac_slices(&self) -> ChartResult<String> {
        let seventh = self.subject.seventh_house_pos()?;
        let mut out = String::new();
        for (index, sign) in ZodiacSign::ALL.into_iter().enumerate() {
            let style = format!(
                "fill:{}; fill-opacity: 0.5;",
                self.settings.colors.zodiac_bg[index]
            );
            out.push_str(&self.painter.zodiac_slice(&ZodiacSliceParams {
                index,
                sign,
                radius: self.sizing.radii.main,
                first_circle_radius: self.sizing.radii.first_circle,
                seventh_house_pos: seventh,
                mode: self.mode,
                style: &style,
            }));
        }
        Ok(out)
    }

    fn populate_houses(&self, record: &mut TemplateRecord) -> ChartResult<()> {
        let colors = &self.settings.colors;
        let main_houses = self.subject.house_cusps()?;
        let secondary_houses = match self.second_subject {
            Some(second) if self.mode.is_dual() => Some(second.house_cusps()?),
            _ => None,
        };

        record.insert(
            "makeHousesGrid",
            self.painter.house_grid(&HouseGridParams {
                main_houses,
                secondary_houses,
                mode: self.mode,
                text_color: &colors.paper_0,
                cusp_label: self.locale.phrase("cusp", "Cusp"),
            }),
        );

        record.insert(
            "makeHouses",
            self.painter.houses_cusps(&HousesCuspsParams {
                radius: self.sizing.radii.main,
                main_houses,
                secondary_houses,
                standard_cusp_color: &colors.houses_radix_line,
                first_house_color: self.settings.axis_color("Ascendant"),
                tenth_house_color: self.settings.axis_color("Medium_Coeli"),
                seventh_house_color: self.settings.axis_color("Descendant"),
                fourth_house_color: self.settings.axis_color("Imum_Coeli"),
                transit_cusp_color: secondary_houses
                    .is_some()
                    .then_some(colors.houses_transit_line.as_str()),
                first_circle_radius: self.sizing.radii.first_circle,
                third_circle_radius: self.sizing.radii.third_circle,
                mode: self.mode,
            }),
        );
        Ok(())
    }

    fn populate_planets(&self, record: &mut TemplateRecord) -> ChartResult<()> {
        record.insert(
            "makePlanets",
            self.painter.planets(&PlanetsParams {
                radius: self.sizing.radii.main,
                mode: self.mode,
                third_circle_radius: self.sizing.radii.third_circle,
                first_house_pos: self.subject.first_house_pos()?,
                seventh_house_pos: self.subject.seventh_house_pos()?,
                points: self.active,
                secondary_points: self.second_active,
            }),
        );
        Ok(())
    }

    fn populate_planet_grid(&self, record: &mut TemplateRecord) {
        let title = self.locale.phrase("planets_and_house", "Planets and Houses");
        let text_color = &self.settings.colors.paper_0;
        let point_labels = self.locale.celestial_point_labels();

        let (subject_name, secondary) = match self.mode {
            ChartMode::Transit => {
                let name = self.locale.phrase("transit_name", "Transit");
                (
                    self.subject.name.clone(),
                    self.second_active.map(|set| (name, set)),
                )
            }
            ChartMode::Synastry => {
                let name = self
                    .second_subject
                    .map_or("", |second| second.name.as_str());
                (
                    self.subject.name.clone(),
                    self.second_active.map(|set| (name, set)),
                )
            }
            ChartMode::Composite => {
                let name = self.subject.composite.as_ref().map_or_else(
                    || self.subject.name.clone(),
                    |parts| {
                        format!(
                            "{} {} {}",
                            parts.first.name,
                            self.locale.phrase("and_word", "and"),
                            parts.second.name
                        )
                    },
                );
                (name, None)
            }
            ChartMode::Natal | ChartMode::ExternalNatal => (self.subject.name.clone(), None),
        };

        record.insert(
            "makePlanetGrid",
            self.painter.planet_grid(&PlanetGridParams {
                title,
                subject_name: &subject_name,
                points: self.active,
                mode: self.mode,
                text_color,
                point_labels,
                secondary,
            }),
        );
    }
}
