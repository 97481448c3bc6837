//! 日志初始化
//!
//! 终端被 TUI 占用，日志只写入文件

use std::fs::{self, File};
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// 构建写入指定文件的 subscriber
pub fn build_subscriber(
    log_file: File,
    filter: EnvFilter,
) -> impl tracing::Subscriber + Send + Sync {
    let fmt_layer = fmt::layer()
        .with_ansi(false)
        .with_writer(Arc::new(log_file));

    tracing_subscriber::registry().with(fmt_layer).with(filter)
}

/// RUST_LOG 优先，否则使用给定级别
///
/// level 必须是 off/error/warn/info/debug/trace 之一
pub fn env_filter(level: &str) -> io::Result<EnvFilter> {
    let level: LevelFilter = level.parse().map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("invalid log level {level:?}: {e}"),
        )
    })?;

    Ok(EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy())
}

/// 初始化全局日志
pub fn init_global(log_path: &Path, level: &str) -> io::Result<()> {
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let log_file = File::create(log_path)?;
    let filter = env_filter(level)?;

    tracing::subscriber::set_global_default(build_subscriber(log_file, filter))
        .map_err(io::Error::other)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_writes_to_file() {
        let log_file = NamedTempFile::new().unwrap();
        let subscriber = build_subscriber(log_file.reopen().unwrap(), EnvFilter::new("info"));

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("style applied");
            tracing::debug!("hidden detail");
        });

        let contents = std::fs::read_to_string(log_file.path()).unwrap();
        assert!(contents.contains("style applied"));
        assert!(!contents.contains("hidden detail"));
    }

    #[test]
    fn test_rejects_unknown_level() {
        let err = env_filter("verbose").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(env_filter("debug").is_ok());
        assert!(env_filter("WARN").is_ok());
    }

    #[test]
    fn test_debug_level() {
        let log_file = NamedTempFile::new().unwrap();
        let subscriber = build_subscriber(log_file.reopen().unwrap(), EnvFilter::new("debug"));

        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!("picker opened");
        });

        let contents = std::fs::read_to_string(log_file.path()).unwrap();
        assert!(contents.contains("picker opened"));
    }
}
