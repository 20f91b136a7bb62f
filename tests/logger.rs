//! Tests for logger functionality.

use daylog::{BufferConsole, Level, Logger, Message, PartialConfig, Stream, TimestampMode};
use serde_json::json;
use tempfile::tempdir;

fn capture(level: Level, config: PartialConfig) -> (Logger, BufferConsole) {
    let console = BufferConsole::new();
    let logger = Logger::builder()
        .level(level)
        .config(config)
        .console(console.clone())
        .build();
    (logger, console)
}

fn plain() -> PartialConfig {
    PartialConfig::new().use_colors(false).icons(false)
}

#[test]
fn builder_default() {
    let logger = Logger::builder().build();
    assert_eq!(logger.threshold(), Level::Info);
    assert_eq!(logger.config(), daylog::Config::default());
}

#[test]
fn should_log_follows_threshold() {
    for threshold in Level::all() {
        let logger = Logger::with_level(threshold);
        for level in Level::all() {
            assert_eq!(logger.should_log(level), level >= threshold);
        }
    }
}

#[test]
fn facades_pick_level_and_stream() {
    let (logger, console) = capture(Level::Info, plain());

    logger.info("one").unwrap();
    logger.warn("two").unwrap();
    logger.error("three").unwrap();

    assert_eq!(
        console.lines(),
        vec![
            (Stream::Stdout, "[INFO] one".to_string()),
            (Stream::Stdout, "[WARN] two".to_string()),
            (Stream::Stderr, "[ERROR] three".to_string()),
        ]
    );
}

#[test]
fn suppressed_levels_have_no_side_effects() {
    let dir = tempdir().unwrap();
    let base = dir.path().join("logs");
    let (logger, console) = capture(Level::Error, plain().log_file_path(base.clone()));

    logger.info("This is info").unwrap();
    logger.warn("This is a warning").unwrap();

    assert!(console.is_empty());
    assert!(!base.exists());
}

#[test]
fn additional_args_follow_the_colored_line() {
    let (logger, console) = capture(Level::Info, PartialConfig::new().icons(false));

    logger
        .info_with(
            "hello",
            &[Message::from("extra"), Message::from(json!({"k": 1}))],
        )
        .unwrap();

    let (_, line) = &console.lines()[0];
    assert_eq!(line, "\x1b[37m[INFO] hello\x1b[0m extra {\"k\":1}");
}

#[test]
fn structured_and_failure_messages_on_console() {
    let (logger, console) = capture(Level::Info, plain());

    logger
        .warn(Message::structured(&json!({"message": "x"})).unwrap())
        .unwrap();
    logger
        .error_with(
            Message::failure(&std::io::Error::other("disk gone")),
            &[Message::structured(&["a"]).unwrap()],
        )
        .unwrap();
    logger.warn_with("w", &[]).unwrap();

    let lines: Vec<_> = console.lines().into_iter().map(|(_, l)| l).collect();
    assert_eq!(lines[0], r#"[WARN] {"message":"x"}"#);
    assert_eq!(lines[1], r#"[ERROR] disk gone ["a"]"#);
    assert_eq!(lines[2], "[WARN] w");
}

#[test]
fn reconfiguration_applies_to_later_calls_only() {
    let (logger, console) = capture(Level::Info, plain());

    logger.info("before").unwrap();
    logger.configure(PartialConfig::new().timestamps(TimestampMode::All));
    logger.info("after").unwrap();

    let lines = console.lines();
    assert_eq!(lines[0].1, "[INFO] before");
    assert!(lines[1].1.starts_with('['));
    assert!(lines[1].1.ends_with("Z] [INFO] after"));
}

#[test]
fn shared_instance_is_stable() {
    let first = daylog::shared();
    let second = daylog::shared();
    assert!(std::ptr::eq(first, second));
    assert_eq!(first.threshold(), Level::Info);
}
