use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file.
pub const LOG_ENV_VAR: &str = "RULESYNC_LOG";

/// Initialize tracing with optional file output.
///
/// Logging is disabled by default since the host owns the display.
/// Set `RULESYNC_LOG` to a file path to enable it. The file gets a
/// `.{timestamp}.{pid}` suffix so concurrent sessions don't collide.
///
/// Returns the path written to, if logging was enabled.
pub fn init_tracing() -> Option<String> {
    let log_path = std::env::var(LOG_ENV_VAR).ok()?;

    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let unique_path = format!("{}.{}.{}", log_path, timestamp, pid);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return None;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    // A host may already have installed a subscriber; keep theirs.
    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .ok()?;

    Some(unique_path)
}
