use std::env;
use std::io;
use std::path::Path;

use once_cell::sync::OnceCell;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

// keeps the non-blocking file writer alive for the process lifetime
static FILE_GUARD: OnceCell<WorkerGuard> = OnceCell::new();

/// Initialize tracing: compact stderr output filtered by RUST_LOG
/// (default "info"), plus an optional daily-rolling file when
/// RUST_LOG_FILE names a path. Call once at startup.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let console_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .compact();

    let file_layer = env::var("RUST_LOG_FILE").ok().map(|log_path| {
        let path = Path::new(&log_path);
        let dir = path.parent().unwrap_or(Path::new("."));
        let file = path.file_name().unwrap_or(std::ffi::OsStr::new("voxisle.log"));
        let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::daily(dir, file));
        let _ = FILE_GUARD.set(guard);
        fmt::layer().with_writer(writer).with_ansi(false).compact()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    // panics should land in the log, not only on a possibly-lost stderr
    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "<unknown>".to_string());
        let payload = if let Some(s) = info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "<non-string panic>".to_string()
        };
        tracing::error!("panic at {location}: {payload}");
    }));
}
