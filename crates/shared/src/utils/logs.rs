use tracing_appender::{
    non_blocking,
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, Layer, fmt, prelude::*};

/// Installs the global subscriber: a pretty console layer driven by `RUST_LOG`
/// and, when `enable_file` is set, a daily-rolling JSON file layer.
///
/// The returned guard flushes the file writer when dropped; keep it alive until
/// the process exits.
#[must_use]
pub fn init_logger(component: &str, is_dev: bool, enable_file: bool) -> Option<WorkerGuard> {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let console_layer = fmt::layer()
        .pretty()
        .with_thread_names(true)
        .with_ansi(is_dev)
        .with_filter(console_filter);

    let mut guard = None;

    let file_layer = if enable_file {
        let log_dir = if is_dev { "./logs" } else { "/var/log/app" };

        let file_name = format!("rust_app_{component}.log");
        let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, file_name);
        let (file_writer, file_guard) = non_blocking(file_appender);
        guard = Some(file_guard);

        Some(
            fmt::layer()
                .with_writer(file_writer)
                .with_ansi(false)
                .json()
                .with_filter(EnvFilter::new("info")),
        )
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    guard
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn dropping_the_guard_flushes_the_file_log() {
        let guard = init_logger("flush_check", true, true);
        assert!(guard.is_some());

        tracing::info!(order = "flush-marker", "file layer is wired");
        drop(guard);

        let written = fs::read_dir("./logs")
            .unwrap()
            .filter_map(Result::ok)
            .filter(|entry| {
                entry
                    .file_name()
                    .to_string_lossy()
                    .starts_with("rust_app_flush_check.log")
            })
            .any(|entry| {
                fs::read_to_string(entry.path())
                    .map(|content| content.contains("flush-marker"))
                    .unwrap_or(false)
            });
        assert!(written);
    }
}
