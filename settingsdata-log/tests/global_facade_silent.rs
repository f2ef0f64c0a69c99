//! Integration test for the process-wide facade with nothing loggable.
//!
//! Kept in its own binary so the installed sink can start silent and have
//! levels enabled one at a time without racing other tests.
//!
//! Run with: `cargo test --test global_facade_silent`

use std::sync::Arc;

use settingsdata_log::log::{self, install_sink, LogLevel, RecordingSink, DOMAIN, TAG};
use settingsdata_log::log_error;

#[test]
fn test_gate_controls_emission_per_level() {
    let sink = Arc::new(RecordingSink::silent());
    install_sink(sink.clone()).unwrap();

    // Nothing loggable: every level is queried, nothing is emitted.
    log::debug("d", &[]);
    log::info("i", &[]);
    log::warn("w", &[]);
    log::error("e", &[]);
    log::fatal("f", &[]);
    log_error!("fail");

    let queried: Vec<LogLevel> = sink.queries().iter().map(|q| q.level).collect();
    assert_eq!(
        queried,
        vec![
            LogLevel::Debug,
            LogLevel::Info,
            LogLevel::Warn,
            LogLevel::Error,
            LogLevel::Fatal,
            LogLevel::Error,
        ]
    );
    assert!(sink.queries().iter().all(|q| q.domain == DOMAIN && q.tag == TAG));
    assert_eq!(sink.emit_count(), 0);

    // Enabling one level lets exactly that level through.
    sink.set_loggable(LogLevel::Warn, true);
    log::info("still dropped", &[]);
    log::warn("now emitted %{public}s", &["x"]);

    let records = sink.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].level, LogLevel::Warn);
    assert_eq!(records[0].format, "now emitted %{public}s");
    assert_eq!(records[0].args, vec!["x"]);
}
