use log::{Log, Metadata, Record};
use std::io::Write;
use std::sync::OnceLock;
use std::time::Instant;

pub use log::LevelFilter;

/// Environment variable that overrides the build-mode log level.
pub const LOG_LEVEL_ENV: &str = "CLASSIFIER_LOG";

static START: OnceLock<Instant> = OnceLock::new();

/// A logger that writes one line per record to stdout.
///
/// Lines look like `   12.345 [INFO] [thread:ThreadId(3)] src/pipeline.rs:88 - message`,
/// where the first column is seconds since the logger was installed.
pub struct StdoutLogger {
    level: LevelFilter,
}

impl StdoutLogger {
    pub fn new(level: LevelFilter) -> Self {
        START.get_or_init(Instant::now);
        Self { level }
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }
}

pub(crate) fn format_line(record: &Record) -> String {
    let elapsed = START.get_or_init(Instant::now).elapsed().as_secs_f64();
    format!(
        "{:>9.3} [{}] [thread:{:?}] {}:{} - {}",
        elapsed,
        record.level(),
        std::thread::current().id(),
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0),
        record.args()
    )
}

impl Log for StdoutLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            println!("{}", format_line(record));
        }
    }

    fn flush(&self) {
        std::io::stdout().flush().ok();
    }
}

/// Debug in debug builds, Info in release, unless `CLASSIFIER_LOG` names a level.
pub fn default_level() -> LevelFilter {
    if let Some(level) = std::env::var(LOG_LEVEL_ENV)
        .ok()
        .and_then(|value| value.parse::<LevelFilter>().ok())
    {
        return level;
    }
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Install a `StdoutLogger` as the global logger.
///
/// Only the first call per process takes effect; later calls are ignored.
pub fn init_stdout_logger() {
    let level = default_level();
    let logger: &'static StdoutLogger = Box::leak(Box::new(StdoutLogger::new(level)));
    if log::set_logger(logger).is_ok() {
        log::set_max_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_structure() {
        let record = log::RecordBuilder::new()
            .level(log::Level::Warn)
            .target("test")
            .file(Some("frame.rs"))
            .line(Some(42))
            .args(format_args!("frame dropped"))
            .build();
        let line = format_line(&record);
        assert!(line.contains("[WARN]"));
        assert!(line.contains("frame.rs:42 - frame dropped"));
        assert!(line.contains("[thread:"));
    }

    #[test]
    fn test_enabled_respects_level() {
        let logger = StdoutLogger::new(LevelFilter::Info);
        let debug = log::MetadataBuilder::new().level(log::Level::Debug).build();
        let error = log::MetadataBuilder::new().level(log::Level::Error).build();
        assert!(!logger.enabled(&debug));
        assert!(logger.enabled(&error));
    }
}
