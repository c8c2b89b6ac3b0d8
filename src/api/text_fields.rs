//! Text Field Assembler.
//!
//! Produces every localized textual field of the template record, with
//! the mode-specific formatting and truncation rules the downstream
//! substitution stage depends on. All functions here are pure.

use chrono::{DateTime, Datelike, FixedOffset, Timelike};

use crate::api::locale::Locale;
use crate::api::template_record::TemplateRecord;
use crate::core::{ChartMode, Subject, Zodiac};
use crate::error::ChartResult;

const MAX_LOCATION_CHARS: usize = 35;

/// Shortens an overlong location string.
///
/// Strings over 35 characters are split on commas; when at least two
/// parts exist the first and last are rejoined (preserving the original
/// spacing of the last part), and the result is truncated to 35
/// characters plus `"..."` if still too long. Comma-less overlong strings
/// are truncated directly. Counts are in characters, not bytes.
#[must_use]
pub fn format_location(location: &str) -> String {
    if location.chars().count() <= MAX_LOCATION_CHARS {
        return location.to_owned();
    }

    let parts: Vec<&str> = location.split(',').collect();
    if parts.len() > 1 {
        let joined = format!("{}, {}", parts[0], parts[parts.len() - 1]);
        if joined.chars().count() > MAX_LOCATION_CHARS {
            format!("{}...", truncate_chars(&joined, MAX_LOCATION_CHARS))
        } else {
            joined
        }
    } else {
        format!("{}...", truncate_chars(location, MAX_LOCATION_CHARS))
    }
}

fn truncate_chars(s: &str, n: usize) -> String {
    s.chars().take(n).collect()
}

/// Formats a civil datetime as `YYYY-MM-DD HH:MM [±HH:MM]`.
///
/// `%z` renders the offset as `±HHMM`; the wire contract wants a colon in
/// it, inserted by splicing before the last three characters of the
/// formatted string (the two trailing digits plus the closing bracket).
#[must_use]
pub fn format_datetime_with_offset(dt: &DateTime<FixedOffset>) -> String {
    let formatted = dt.format("%Y-%m-%d %H:%M [%z]").to_string();
    let split = formatted.len() - 3;
    format!("{}:{}", &formatted[..split], &formatted[split..])
}

/// Formats a civil datetime as `YYYY-MM-DD HH:MM`.
#[must_use]
pub fn format_datetime_minutes(dt: &DateTime<FixedOffset>) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}

/// Renders a latitude as degrees and zero-padded minutes with the
/// hemisphere label, e.g. `51°30' N`.
#[must_use]
pub fn latitude_to_string(lat: f64, north_label: &str, south_label: &str) -> String {
    coordinate_to_string(lat, north_label, south_label)
}

/// Renders a longitude as degrees and zero-padded minutes with the
/// hemisphere label, e.g. `0°07' W`.
#[must_use]
pub fn longitude_to_string(lng: f64, east_label: &str, west_label: &str) -> String {
    coordinate_to_string(lng, east_label, west_label)
}

fn coordinate_to_string(value: f64, positive_label: &str, negative_label: &str) -> String {
    let label = if value < 0.0 {
        negative_label
    } else {
        positive_label
    };
    let abs = value.abs();
    let mut degrees = abs.trunc() as i64;
    let mut minutes = ((abs - abs.trunc()) * 60.0).round() as i64;
    if minutes == 60 {
        degrees += 1;
        minutes = 0;
    }
    format!("{degrees}\u{b0}{minutes:02}' {label}")
}

/// Display names for sidereal ayanamsa modes, standing in for the
/// external ephemeris name lookup.
#[must_use]
pub fn ayanamsa_display_name(mode: &str) -> Option<&'static str> {
    let name = match mode {
        "FAGAN_BRADLEY" => "Fagan/Bradley",
        "LAHIRI" => "Lahiri",
        "DELUCE" => "De Luce",
        "RAMAN" => "Raman",
        "USHASHASHI" => "Usha/Shashi",
        "KRISHNAMURTI" => "Krishnamurti",
        "DJWHAL_KHUL" => "Djwhal Khul",
        "YUKTESHWAR" => "Yukteshwar",
        "JN_BHASIN" => "J.N. Bhasin",
        "J2000" => "J2000",
        "J1900" => "J1900",
        "B1950" => "B1950",
        "SASSANIAN" => "Sassanian",
        "GALCENT_0SAG" => "Galactic Center 0 Sag",
        _ => return None,
    };
    Some(name)
}

/// Lowercased, underscore-joined localization key for a display phrase.
fn localization_key(phrase: &str) -> String {
    phrase.to_lowercase().replace(' ', "_")
}

/// Per-render text field writer.
///
/// `location`, `geolat`, and `geolon` are already resolved per mode by
/// the assembler (Transit points them at the comparison subject,
/// Composite at the constituent midpoint).
pub(crate) struct TextFieldAssembler<'a> {
    pub mode: ChartMode,
    pub subject: &'a Subject,
    pub second_subject: Option<&'a Subject>,
    pub locale: &'a Locale,
    pub location: &'a str,
    pub geolat: f64,
    pub geolon: f64,
}

impl TextFieldAssembler<'_> {
    pub fn populate(&self, record: &mut TemplateRecord) -> ChartResult<()> {
        self.set_title(record)?;
        self.set_zodiac_info(record);
        self.set_bottom_left_info(record)?;
        self.set_location_info(record)?;
        self.set_chart_name(record)?;
        self.set_additional_info(record)?;
        Ok(())
    }

    fn second(&self) -> ChartResult<&Subject> {
        self.second_subject
            .ok_or(crate::error::ChartError::MissingSecondSubject(self.mode))
    }

    fn set_title(&self, record: &mut TemplateRecord) -> ChartResult<()> {
        let and_word = self.locale.phrase("and_word", "and");
        let title = match self.mode {
            ChartMode::Synastry => {
                let second = self.second()?;
                format!("{} {and_word} {}", self.subject.name, second.name)
            }
            ChartMode::Transit => {
                let date = self.second()?.local_datetime;
                format!(
                    "{} {}/{}/{}",
                    self.locale.phrase("transits", "Transits"),
                    date.day(),
                    date.month(),
                    date.year()
                )
            }
            ChartMode::Natal | ChartMode::ExternalNatal => self.subject.name.clone(),
            ChartMode::Composite => {
                let parts = self.subject.composite_parts()?;
                format!("{} {and_word} {}", parts.first.name, parts.second.name)
            }
        };
        record.insert("stringTitle", title);
        Ok(())
    }

    fn set_zodiac_info(&self, record: &mut TemplateRecord) {
        let zodiac_info = match &self.subject.zodiac {
            Zodiac::Tropical => format!(
                "{}: {}",
                self.locale.phrase("zodiac", "Zodiac"),
                self.locale.phrase("tropical", "Tropical")
            ),
            Zodiac::Sidereal { mode } => {
                let name = ayanamsa_display_name(mode).unwrap_or(mode.as_str());
                format!("{}: {name}", self.locale.phrase("ayanamsa", "Ayanamsa"))
            }
        };

        let houses_key = format!("houses_system_{}", self.subject.houses_system_identifier);
        record.insert(
            "bottom_left_0",
            format!(
                "{} {}",
                self.locale
                    .phrase(&houses_key, &self.subject.houses_system_name),
                self.locale.phrase("houses", "Houses")
            ),
        );
        record.insert("bottom_left_1", zodiac_info);
    }

    fn set_bottom_left_info(&self, record: &mut TemplateRecord) -> ChartResult<()> {
        let lunar_phrase = self.locale.phrase("lunar_phase", "Lunar Phase");
        match self.mode {
            ChartMode::Natal | ChartMode::ExternalNatal | ChartMode::Synastry => {
                let phase = &self.subject.lunar_phase;
                let phase_key = localization_key(&phase.moon_phase_name);
                record.insert(
                    "bottom_left_2",
                    format!(
                        "{lunar_phrase} {}: {}",
                        self.locale.phrase("day", "Day").to_lowercase(),
                        phase.moon_phase
                    ),
                );
                record.insert(
                    "bottom_left_3",
                    format!(
                        "{lunar_phrase}: {}",
                        self.locale.phrase(&phase_key, &phase.moon_phase_name)
                    ),
                );
                let perspective_key = localization_key(&self.subject.perspective);
                record.insert(
                    "bottom_left_4",
                    self.locale
                        .phrase(&perspective_key, &self.subject.perspective)
                        .to_owned(),
                );
            }
            ChartMode::Transit => {
                let second = self.second()?;
                let phase = &second.lunar_phase;
                record.insert(
                    "bottom_left_2",
                    format!(
                        "{lunar_phrase}: {} {}",
                        self.locale.phrase("day", "Day"),
                        phase.moon_phase
                    ),
                );
                record.insert(
                    "bottom_left_3",
                    format!("{lunar_phrase}: {}", phase.moon_phase_name),
                );
                let perspective_key = localization_key(&second.perspective);
                record.insert(
                    "bottom_left_4",
                    self.locale
                        .phrase(&perspective_key, &second.perspective)
                        .to_owned(),
                );
            }
            ChartMode::Composite => {
                let parts = self.subject.composite_parts()?;
                record.insert("bottom_left_2", parts.first.perspective.clone());
                record.insert(
                    "bottom_left_3",
                    format!(
                        "{} - {}",
                        self.locale.phrase("composite_chart", "Composite Chart"),
                        self.locale.phrase("midpoints", "Midpoints")
                    ),
                );
                record.insert("bottom_left_4", "");
            }
        }
        Ok(())
    }

    fn set_location_info(&self, record: &mut TemplateRecord) -> ChartResult<()> {
        // Composite charts have no single location; the slot shows the
        // first constituent's date instead.
        let value = if self.mode == ChartMode::Composite {
            format_datetime_minutes(&self.subject.composite_parts()?.first.local_datetime)
        } else {
            format_location(self.location)
        };
        record.insert("top_left_1", value);
        Ok(())
    }

    fn set_chart_name(&self, record: &mut TemplateRecord) -> ChartResult<()> {
        let value = match self.mode {
            ChartMode::Synastry | ChartMode::Transit => format!("{}:", self.subject.name),
            ChartMode::Natal | ChartMode::ExternalNatal => {
                format!("{}:", self.locale.phrase("info", "Info"))
            }
            ChartMode::Composite => self.subject.composite_parts()?.first.name.clone(),
        };
        record.insert("top_left_0", value);
        Ok(())
    }

    fn set_additional_info(&self, record: &mut TemplateRecord) -> ChartResult<()> {
        match self.mode {
            ChartMode::Synastry => {
                let second = self.second()?;
                let date = second.local_datetime;
                record.insert("top_left_3", format!("{}: ", second.name));
                record.insert("top_left_4", second.city.clone());
                record.insert(
                    "top_left_5",
                    format!(
                        "{}-{}-{} {:02}:{:02}",
                        date.year(),
                        date.month(),
                        date.day(),
                        date.hour(),
                        date.minute()
                    ),
                );
            }
            ChartMode::Composite => {
                let parts = self.subject.composite_parts()?;
                record.insert("top_left_3", parts.second.name.clone());
                record.insert(
                    "top_left_4",
                    format_datetime_minutes(&parts.second.local_datetime),
                );
                let latitude = latitude_to_string(
                    parts.second.lat,
                    self.locale.phrase("north_letter", "N"),
                    self.locale.phrase("south_letter", "S"),
                );
                let longitude = longitude_to_string(
                    parts.second.lng,
                    self.locale.phrase("east_letter", "E"),
                    self.locale.phrase("west_letter", "W"),
                );
                record.insert("top_left_5", format!("{latitude} / {longitude}"));
            }
            ChartMode::Natal | ChartMode::ExternalNatal | ChartMode::Transit => {
                let latitude = latitude_to_string(
                    self.geolat,
                    self.locale.phrase("north", "North"),
                    self.locale.phrase("south", "South"),
                );
                let longitude = longitude_to_string(
                    self.geolon,
                    self.locale.phrase("east", "East"),
                    self.locale.phrase("west", "West"),
                );
                record.insert(
                    "top_left_3",
                    format!("{}: {latitude}", self.locale.phrase("latitude", "Latitude")),
                );
                record.insert(
                    "top_left_4",
                    format!(
                        "{}: {longitude}",
                        self.locale.phrase("longitude", "Longitude")
                    ),
                );
                record.insert(
                    "top_left_5",
                    format!(
                        "{}: {}",
                        self.locale.phrase("type", "Type"),
                        self.locale
                            .phrase(self.mode.as_str(), self.mode.as_str())
                    ),
                );
            }
        }
        Ok(())
    }

    /// Civil datetime line, or constituent coordinates for Composite.
    pub fn set_date_time_info(&self, record: &mut TemplateRecord) -> ChartResult<()> {
        if self.mode == ChartMode::Composite {
            let parts = self.subject.composite_parts()?;
            let latitude = latitude_to_string(
                parts.first.lat,
                self.locale.phrase("north_letter", "N"),
                self.locale.phrase("south_letter", "S"),
            );
            let longitude = longitude_to_string(
                parts.first.lng,
                self.locale.phrase("east_letter", "E"),
                self.locale.phrase("west_letter", "W"),
            );
            record.insert("top_left_2", format!("{latitude} {longitude}"));
        } else {
            record.insert(
                "top_left_2",
                format_datetime_with_offset(&self.subject.local_datetime),
            );
        }
        Ok(())
    }
}
