use astrochart::api::{
    ayanamsa_display_name, format_datetime_minutes, format_datetime_with_offset, format_location,
    latitude_to_string, longitude_to_string,
};
use chrono::{FixedOffset, TimeZone};

#[test]
fn short_locations_pass_through_unchanged() {
    assert_eq!(format_location("Rome"), "Rome");
    assert_eq!(format_location(""), "");

    let exactly_35 = "a".repeat(35);
    assert_eq!(format_location(&exactly_35), exactly_35);
}

#[test]
fn overlong_location_keeps_first_and_last_comma_parts() {
    let location = "Montecatini Terme, Pistoia, Toscana, Italia";
    // The last part keeps its leading space, so the join carries a
    // double space.
    assert_eq!(format_location(location), "Montecatini Terme,  Italia");
}

#[test]
fn rejoined_location_still_overlong_is_truncated_with_ellipsis() {
    let location = "Somewhere With A Rather Long Name Indeed, Middle, An Equally Long Country Name";
    let shortened = format_location(location);
    assert!(shortened.ends_with("..."));
    assert_eq!(shortened.chars().count(), 38);
    assert!(shortened.starts_with("Somewhere With A Rather Long Name"));
}

#[test]
fn commaless_overlong_location_is_truncated_directly() {
    let location = "x".repeat(50);
    let shortened = format_location(&location);
    assert_eq!(shortened, format!("{}...", "x".repeat(35)));
}

#[test]
fn location_truncation_counts_characters_not_bytes() {
    let location = "à".repeat(40);
    let shortened = format_location(&location);
    assert_eq!(shortened.chars().count(), 38);
    assert!(shortened.ends_with("..."));
}

#[test]
fn datetime_offset_gets_a_spliced_colon() {
    let tz = FixedOffset::east_opt(5 * 3600 + 30 * 60).expect("offset");
    let dt = tz.with_ymd_and_hms(1990, 6, 15, 10, 30, 0).unwrap();
    assert_eq!(format_datetime_with_offset(&dt), "1990-06-15 10:30 [+05:30]");

    let tz = FixedOffset::west_opt(4 * 3600).expect("offset");
    let dt = tz.with_ymd_and_hms(2001, 12, 3, 7, 5, 0).unwrap();
    assert_eq!(format_datetime_with_offset(&dt), "2001-12-03 07:05 [-04:00]");
}

#[test]
fn datetime_minutes_has_no_offset() {
    let tz = FixedOffset::east_opt(3600).expect("offset");
    let dt = tz.with_ymd_and_hms(1984, 2, 29, 23, 59, 0).unwrap();
    assert_eq!(format_datetime_minutes(&dt), "1984-02-29 23:59");
}

#[test]
fn coordinates_render_degrees_and_padded_minutes() {
    assert_eq!(latitude_to_string(51.5, "N", "S"), "51\u{b0}30' N");
    assert_eq!(latitude_to_string(-33.868, "N", "S"), "33\u{b0}52' S");
    assert_eq!(longitude_to_string(-0.1257, "E", "W"), "0\u{b0}08' W");
    assert_eq!(longitude_to_string(151.2, "E", "W"), "151\u{b0}12' E");
}

#[test]
fn sixty_minutes_carry_into_the_degree() {
    assert_eq!(latitude_to_string(10.99999, "N", "S"), "11\u{b0}00' N");
}

#[test]
fn zero_latitude_is_labeled_north() {
    assert_eq!(latitude_to_string(0.0, "N", "S"), "0\u{b0}00' N");
}

#[test]
fn known_ayanamsa_modes_have_display_names() {
    assert_eq!(ayanamsa_display_name("FAGAN_BRADLEY"), Some("Fagan/Bradley"));
    assert_eq!(ayanamsa_display_name("LAHIRI"), Some("Lahiri"));
    assert_eq!(ayanamsa_display_name("J2000"), Some("J2000"));
    assert_eq!(ayanamsa_display_name("NOT_A_MODE"), None);
}
