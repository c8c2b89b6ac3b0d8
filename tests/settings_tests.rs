use std::str::FromStr;

use astrochart::api::{ChartSettings, ChartTheme, RenderConfig, default_active_points};
use astrochart::core::{ChartMode, ZodiacSign};
use astrochart::error::ChartError;

#[test]
fn default_snapshot_carries_the_full_point_and_aspect_tables() {
    let settings = ChartSettings::default();
    assert_eq!(settings.celestial_points.len(), 18);
    assert_eq!(settings.aspects.len(), 11);
}

#[test]
fn point_lookup_is_case_insensitive() {
    let settings = ChartSettings::default();
    let sun = settings.point_setting("sun").expect("sun configured");
    assert_eq!(sun.name, "Sun");
    assert_eq!(sun.element_points, 40.0);
    assert_eq!(sun.ruling_signs.as_slice(), &[ZodiacSign::Leo][..]);

    assert!(settings.point_setting("MEAN_NODE").is_some());
    assert!(settings.point_setting("Vertex").is_none());
}

#[test]
fn aspect_lookup_matches_exact_classification_names() {
    let settings = ChartSettings::default();
    let trine = settings.aspect_setting("trine").expect("trine configured");
    assert_eq!(trine.degree, 120);
    assert!(settings.aspect_setting("Trine").is_none());
}

#[test]
fn axis_color_falls_back_to_the_radix_house_line() {
    let mut settings = ChartSettings::default();
    assert_eq!(settings.axis_color("Ascendant"), "#ff7e00");

    settings.celestial_points.retain(|p| p.name != "Ascendant");
    assert_eq!(
        settings.axis_color("Ascendant"),
        settings.colors.houses_radix_line
    );
}

#[test]
fn settings_survive_a_json_round_trip() {
    let settings = ChartSettings::default();
    let json = settings.to_json_pretty().expect("serialize settings");
    let parsed = ChartSettings::from_json_str(&json).expect("parse settings");
    assert_eq!(parsed, settings);
}

#[test]
fn render_config_survives_a_json_round_trip() {
    let config = RenderConfig::new(ChartMode::Synastry)
        .with_theme(ChartTheme::DarkHighContrast)
        .with_active_points(vec!["Sun".to_owned(), "Moon".to_owned()])
        .with_active_aspects(vec!["trine".to_owned()])
        .with_language("IT");

    let json = config.to_json_pretty().expect("serialize config");
    let parsed = RenderConfig::from_json_str(&json).expect("parse config");
    assert_eq!(parsed, config);
}

#[test]
fn config_defaults_fill_in_when_fields_are_absent() {
    let parsed = RenderConfig::from_json_str(r#"{"mode":"Natal"}"#).expect("parse minimal config");
    assert_eq!(parsed.mode, ChartMode::Natal);
    assert_eq!(parsed.theme, None);
    assert_eq!(parsed.active_points, default_active_points());
    assert!(parsed.active_aspects.is_empty());
    assert_eq!(parsed.language, "EN");
}

#[test]
fn unknown_theme_identifiers_are_rejected() {
    assert_eq!(
        ChartTheme::from_str("dark-high-contrast").expect("known theme"),
        ChartTheme::DarkHighContrast
    );
    let err = ChartTheme::from_str("solarized").expect_err("unknown theme");
    assert!(matches!(err, ChartError::UnknownTheme(name) if name == "solarized"));
}

#[test]
fn unknown_chart_modes_are_rejected() {
    assert_eq!(
        ChartMode::from_str("ExternalNatal").expect("known mode"),
        ChartMode::ExternalNatal
    );
    let err = ChartMode::from_str("Progressed").expect_err("unknown mode");
    assert!(matches!(err, ChartError::UnrecognizedMode(name) if name == "Progressed"));
}
