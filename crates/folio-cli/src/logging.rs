use std::path::Path;
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub struct LoggingGuard {
    _guard: WorkerGuard,
    log_dir: PathBuf,
}

impl LoggingGuard {
    pub fn log_dir(&self) -> &Path {
        return &self.log_dir;
    }
}

fn log_dir() -> std::io::Result<PathBuf> {
    let dir = dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("folio");
    std::fs::create_dir_all(&dir)?;
    return Ok(dir);
}

/// Logs go to `folio.log` because stdout belongs to the TUI. `RUST_LOG`
/// overrides `level` when set.
pub fn init(level: &str) -> Option<LoggingGuard> {
    let log_dir = log_dir()
        .or_else(|_| -> std::io::Result<PathBuf> {
            let dir = std::env::temp_dir().join("folio");
            std::fs::create_dir_all(&dir)?;
            return Ok(dir);
        })
        .ok()?;

    let file_appender = tracing_appender::rolling::never(&log_dir, "folio.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("folio={level},folio_term={level}")));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true),
    );

    if subscriber.try_init().is_err() {
        return None;
    }

    tracing::info!(log_dir = %log_dir.display(), "tracing initialized");

    return Some(LoggingGuard {
        _guard: guard,
        log_dir,
    });
}
