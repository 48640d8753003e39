use tracing_subscriber::filter::{LevelFilter, ParseError};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[cfg(feature = "file-log")]
pub mod file;

/// Keeps background log writers flushing. Hold it until exit.
#[derive(Default)]
pub struct LogGuard {
    #[cfg(feature = "file-log")]
    _file: Option<tracing_appender::non_blocking::WorkerGuard>,
}

/// Build a filter from `level`, falling back to `info` if it doesn't parse.
#[must_use]
pub fn parse_log_level(level: &str) -> (EnvFilter, Option<ParseError>) {
    let mut parse_err = None;
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse(level)
        .unwrap_or_else(|err| {
            parse_err = Some(err);
            EnvFilter::new("info")
        });
    (filter, parse_err)
}

/// Install the global subscriber: stderr, plus a file in the cache
/// directory with the `file-log` feature.
///
/// # Errors
///
/// Fails if a global subscriber is already set or the log file can't be
/// opened.
pub fn setup_logging(level: &str) -> anyhow::Result<LogGuard> {
    let (filter, parse_err) = parse_log_level(level);
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    #[cfg(feature = "file-log")]
    let (subscriber, guard) = {
        let (subscriber, worker) = file::add_layer(subscriber)?;
        let guard = LogGuard {
            _file: Some(worker),
        };
        (subscriber, guard)
    };
    #[cfg(not(feature = "file-log"))]
    let guard = LogGuard::default();

    subscriber.try_init()?;
    if let Some(err) = parse_err {
        tracing::warn!(level, error = %err, "Invalid log level, using info");
    }
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_levels_parse() {
        let (filter, err) = parse_log_level("tilewright_core=trace,warn");
        assert!(err.is_none());
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn invalid_levels_fall_back_to_info() {
        let (filter, err) = parse_log_level("tilewright_core=loud");
        assert!(err.is_some());
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }
}
