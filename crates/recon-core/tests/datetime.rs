use chrono::NaiveDate;

use recon_core::{DateResolution, resolve_sale_date};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn parses_pure_date_formats() {
    for value in ["2024-06-01", "01-06-2024", "01/06/2024", "2024/06/01"] {
        assert_eq!(
            resolve_sale_date(Some(value), false, today()),
            DateResolution::Parsed(day(2024, 6, 1)),
            "format: {value}"
        );
    }
}

#[test]
fn strips_time_from_datetime_columns() {
    for value in [
        "2024-06-01 13:30:00",
        "2024-06-01T13:30:00",
        "01-06-2024 13:30",
        "01/06/2024 13:30:00",
    ] {
        assert_eq!(
            resolve_sale_date(Some(value), true, today()),
            DateResolution::Parsed(day(2024, 6, 1)),
            "format: {value}"
        );
    }
}

#[test]
fn generic_fallback_takes_the_date_component() {
    // No fixed format matches a malformed time, but the date half is fine.
    assert_eq!(
        resolve_sale_date(Some("2024-06-01 99:99"), true, today()),
        DateResolution::Parsed(day(2024, 6, 1))
    );
}

#[test]
fn pure_date_column_still_parses_a_stray_timestamp() {
    assert_eq!(
        resolve_sale_date(Some("2024-06-01 13:30:00"), false, today()),
        DateResolution::Parsed(day(2024, 6, 1))
    );
}

#[test]
fn missing_or_garbage_defaults_to_today() {
    let expected = DateResolution::Defaulted(today());
    assert_eq!(resolve_sale_date(None, false, today()), expected);
    assert_eq!(resolve_sale_date(Some("   "), false, today()), expected);
    assert_eq!(resolve_sale_date(Some("not a date"), true, today()), expected);
    assert!(expected.is_defaulted());
    assert_eq!(expected.to_ymd_string(), "2024-06-15");
}
