use crate::config::{LogFormat, LoggingConfig, Rotation};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn file_appender(config: &LoggingConfig) -> RollingFileAppender {
    match config.rotation {
        Rotation::Hourly => tracing_appender::rolling::hourly(&config.dir, &config.file),
        Rotation::Daily => tracing_appender::rolling::daily(&config.dir, &config.file),
        Rotation::Never => tracing_appender::rolling::never(&config.dir, &config.file),
    }
}

/// `RUST_LOG` when set, otherwise the configured level and directives
fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.filter_directives()))
}

/// Install the global subscriber: the counter log file plus coloured stdout.
/// Keep the guard alive until exit or buffered file output is lost.
pub fn init_logging(config: &LoggingConfig) -> WorkerGuard {
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender(config));
    let stdout_layer = fmt::layer().with_target(false).with_ansi(true);
    let registry = tracing_subscriber::registry()
        .with(env_filter(config))
        .with(stdout_layer);

    match config.format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(file_writer)
                    .with_ansi(false),
            )
            .init(),
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_writer(file_writer)
                    .with_ansi(false),
            )
            .init(),
    }

    guard
}
