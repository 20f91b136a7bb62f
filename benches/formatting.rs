use chrono::Utc;
use criterion::{Criterion, criterion_group, criterion_main};
use daylog::output::LogRecord;
use daylog::{Config, CustomColors, Level, Message, PartialConfig, TerminalOutput, TimestampMode};
use serde_json::json;
use std::hint::black_box;

fn make_record() -> LogRecord {
    LogRecord {
        level: Level::Warn,
        message: "benchmark log message".to_string(),
        args: Vec::new(),
        time: Utc::now(),
    }
}

fn bench_format_line(c: &mut Criterion) {
    let record = make_record();
    let plain = TerminalOutput::from_config(&Config::with(
        PartialConfig::new().use_colors(false).icons(false),
    ));
    let full = TerminalOutput::from_config(&Config::with(
        PartialConfig::new()
            .timestamps(TimestampMode::All)
            .custom_colors(CustomColors::new().warn("magenta")),
    ));

    c.bench_function("TerminalOutput::format_line plain", |b| {
        b.iter(|| plain.format_line(black_box(&record)));
    });
    c.bench_function("TerminalOutput::format_line full", |b| {
        b.iter(|| full.format_line(black_box(&record)));
    });
}

fn bench_message_render(c: &mut Criterion) {
    let structured = Message::from(json!({"user": "alice", "ids": [1, 2, 3], "ok": true}));

    c.bench_function("Message::render structured", |b| {
        b.iter(|| black_box(&structured).render());
    });
}

criterion_group!(benches, bench_format_line, bench_message_render);
criterion_main!(benches);
