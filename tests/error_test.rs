//! Tests for error types

use race_tracker::Error;

#[test]
fn test_invalid_distance_error() {
    let error = Error::InvalidDistance(120.0);
    let error_str = format!("{error}");
    assert!(error_str.contains("Invalid distance: 120 km"));
    assert!(error_str.contains("between 0 and 100"));
}

#[test]
fn test_invalid_position_error() {
    let error = Error::InvalidPosition(0);
    let error_str = format!("{error}");
    assert!(error_str.contains("Invalid position: 0"));
    assert!(error_str.contains("1 or greater"));
}

#[test]
fn test_unknown_age_category_error() {
    let error = Error::UnknownAgeCategory("Senior".to_string());
    let error_str = format!("{error}");
    assert!(error_str.contains("\"Senior\""));
    assert!(error_str.contains("Teen (13-16)"));
}

#[test]
fn test_invalid_date_error() {
    let error = Error::InvalidDate("05/01/2024".to_string());
    let error_str = format!("{error}");
    assert!(error_str.contains("Invalid race date"));
    assert!(error_str.contains("YYYY-MM-DD"));
}

#[test]
fn test_invalid_time_error() {
    let error = Error::InvalidTime("noon".to_string());
    let error_str = format!("{error}");
    assert!(error_str.contains("Invalid completion time"));
    assert!(error_str.contains("HH:MM:SS"));
}

#[test]
fn test_config_error() {
    let error = Error::Config("position_chart.palette must not be empty".to_string());
    let error_str = format!("{error}");
    assert!(error_str.contains("Configuration error"));
    assert!(error_str.contains("palette"));
}

#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: Error = json_err.into();
    assert!(format!("{error}").contains("JSON error"));
}

#[test]
fn test_error_debug() {
    let error = Error::InvalidPosition(-1);
    let debug_str = format!("{error:?}");
    assert!(debug_str.contains("InvalidPosition"));
}
