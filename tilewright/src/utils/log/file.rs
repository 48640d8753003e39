use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use xdg::BaseDirectories;

const LOG_FILE_NAME: &str = "tilewright.log";

/// Add a plain text layer writing to `$XDG_CACHE_HOME/tilewright/tilewright.log`.
///
/// # Errors
///
/// Fails if the cache directory can't be created.
pub fn add_layer<S>(
    subscriber: S,
) -> anyhow::Result<(impl Subscriber + for<'span> LookupSpan<'span> + Send + Sync + 'static, WorkerGuard)>
where
    S: Subscriber + for<'span> LookupSpan<'span> + Send + Sync + 'static,
{
    let log_dir = BaseDirectories::with_prefix("tilewright")?.create_cache_directory("")?;
    let appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(writer);
    Ok((subscriber.with(layer), guard))
}
