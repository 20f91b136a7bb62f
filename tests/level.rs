//! Tests for log level functionality.

use daylog::Level;

#[test]
fn level_ordering() {
    assert!(Level::Info < Level::Warn);
    assert!(Level::Warn < Level::Error);
    assert_eq!(Level::Info as u8, 0);
    assert_eq!(Level::Error as u8, 2);
}

#[test]
fn level_display_and_label() {
    assert_eq!(Level::Info.to_string(), "info");
    assert_eq!(Level::Warn.to_string(), "warn");
    assert_eq!(Level::Error.to_string(), "error");
    assert_eq!(Level::Info.label(), "INFO");
    assert_eq!(Level::Warn.label(), "WARN");
    assert_eq!(Level::Error.label(), "ERROR");
}

#[test]
fn level_from_str() {
    assert_eq!("INFO".parse::<Level>().unwrap(), Level::Info);
    assert_eq!("warning".parse::<Level>().unwrap(), Level::Warn);
    assert_eq!("err".parse::<Level>().unwrap(), Level::Error);
    assert!("debug".parse::<Level>().is_err());
}

#[test]
fn level_default_is_info() {
    assert_eq!(Level::default(), Level::Info);
    assert_eq!(Level::all().len(), 3);
}
