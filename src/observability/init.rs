//! Tracing initialization and subscriber setup.

use super::file_writer::FileWriter;
use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global tracing subscriber.
///
/// # Trace Level Resolution
///
/// 1. `RUST_LOG` environment variable
/// 2. `config.trace_level`
/// 3. Default: `"info"`
///
/// # Output
///
/// Events go to `config.trace_file` (rotating, no ANSI colors) when set,
/// otherwise to stderr.
///
/// # Initialization Behavior
///
/// - Creates the log directory if it doesn't exist
/// - Silently gives up if the directory cannot be created (logging is optional)
/// - Idempotent: only the first call takes effect
///
/// # Example
///
/// ```rust
/// use content_finder::observability::init_tracing;
/// use content_finder::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let registry = tracing_subscriber::registry().with(filter);

    let _ = match &config.trace_file {
        Some(path) => {
            if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
                if std::fs::create_dir_all(dir).is_err() {
                    return;
                }
            }
            registry
                .with(
                    fmt::layer()
                        .with_ansi(false)
                        .with_writer(FileWriter::new(path.clone())),
                )
                .try_init()
        }
        None => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
    };
}
