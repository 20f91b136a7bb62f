use daylog::config::DEFAULT_RETENTION;
use daylog::{
    Config, CustomColors, Level, LogFilePath, Logger, PartialConfig, TimestampMode, WriteMode,
};
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn defaults() {
    let config = Config::default();
    assert_eq!(config.log_file_path, LogFilePath::Disabled);
    assert!(config.use_colors);
    assert_eq!(config.timestamps, TimestampMode::LogOnly);
    assert!(config.icons);
    assert_eq!(config.custom_colors, None);
    assert_eq!(config.write_mode, WriteMode::Compat);
    assert_eq!(config.retention, DEFAULT_RETENTION);
}

#[test]
fn configure_merges_shallowly() {
    let logger = Logger::new();
    let before = logger.config();

    logger.configure(
        PartialConfig::new()
            .log_file_path("./logs")
            .use_colors(false),
    );

    let after = logger.config();
    assert_eq!(after.log_file_path, LogFilePath::Dir(PathBuf::from("./logs")));
    assert!(!after.use_colors);
    assert_eq!(after.timestamps, before.timestamps);
    assert_eq!(after.icons, before.icons);
    assert_eq!(logger.threshold(), Level::Info);
}

#[test]
fn empty_configure_is_a_no_op() {
    let logger = Logger::with_config(
        Level::Warn,
        PartialConfig::new().timestamps(TimestampMode::All),
    );
    let before = logger.config();
    logger.configure(PartialConfig::new());
    logger.configure(PartialConfig::default());
    assert_eq!(logger.config(), before);
    assert!(PartialConfig::new().is_empty());
}

#[test]
fn custom_colors_are_replaced_as_a_whole() {
    let mut config = Config::with(
        PartialConfig::new().custom_colors(CustomColors::new().info("green").error("blue")),
    );
    config.merge(PartialConfig::new().custom_colors(CustomColors::new().warn("cyan")));

    let colors = config.custom_colors.unwrap();
    assert_eq!(colors.info, None);
    assert_eq!(colors.warn.as_deref(), Some("cyan"));
}

#[test]
fn log_file_path_conversions() {
    assert_eq!(LogFilePath::from(false), LogFilePath::Disabled);
    assert_eq!(LogFilePath::from(true), LogFilePath::Default);
    assert_eq!(LogFilePath::from(""), LogFilePath::Disabled);
    assert_eq!(LogFilePath::Default.base_dir(), Some(PathBuf::from("logs")));
    assert_eq!(LogFilePath::Disabled.base_dir(), None);
    assert!(!LogFilePath::Disabled.is_enabled());
}

#[test]
fn toml_full_config() {
    let config = Config::from_toml_str(
        r#"
log_file_path = true
use_colors = false
timestamps = "all"
write_mode = "append"
retention = 3

[custom_colors]
info = "green"
warn = "not-a-color"
"#,
    )
    .unwrap();

    assert_eq!(config.log_file_path, LogFilePath::Default);
    assert!(!config.use_colors);
    assert_eq!(config.timestamps, TimestampMode::All);
    assert!(config.icons);
    assert_eq!(config.write_mode, WriteMode::Append);
    assert_eq!(config.retention, 3);

    let colors = config.custom_colors.unwrap();
    assert_eq!(colors.get(Level::Info), Some(daylog::ColorName::Green));
    assert_eq!(colors.get(Level::Warn), None);
    assert_eq!(colors.get(Level::Error), None);
}

#[test]
fn toml_log_file_path_variants() {
    let disabled = Config::from_toml_str("log_file_path = false").unwrap();
    assert_eq!(disabled.log_file_path, LogFilePath::Disabled);

    let dir = Config::from_toml_str(r#"log_file_path = "/var/log/app""#).unwrap();
    assert_eq!(dir.log_file_path, LogFilePath::Dir(PathBuf::from("/var/log/app")));

    let empty = Config::from_toml_str("").unwrap();
    assert_eq!(empty, Config::default());
}

#[test]
fn toml_rejects_unknown_timestamp_mode() {
    let result = Config::from_toml_str(r#"timestamps = "sometimes""#);
    assert!(matches!(result, Err(daylog::Error::ConfigParse(_))));
}

#[test]
fn partial_toml_only_sets_present_keys() {
    let partial = PartialConfig::from_toml_str(r#"timestamps = "none""#).unwrap();
    assert_eq!(partial.timestamps, Some(TimestampMode::None));
    assert_eq!(partial.use_colors, None);

    let mut config = Config::default();
    config.merge(partial);
    assert_eq!(config.timestamps, TimestampMode::None);
    assert!(config.use_colors);
}

#[test]
fn load_from_missing_file_gives_defaults() {
    let dir = tempdir().unwrap();
    let config = Config::load_from(&dir.path().join("missing.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn load_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("daylog.toml");
    fs::write(&path, "icons = false\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert!(!config.icons);
}
