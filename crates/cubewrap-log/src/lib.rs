//! Structured logging for the cube wrap tools.
//!
//! Logs go to standard error so that generated tables can be piped from
//! standard output. Debug builds can additionally write JSON logs to a file.

use std::fs::File;
use std::path::Path;

use cubewrap_config::GeneratorConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_FILTER: &str = "info";

/// Name of the JSON log file written in debug builds.
pub const LOG_FILE_NAME: &str = "cubewrap-gen.log";

/// Resolve the filter string: the config's `debug.log_level` if set,
/// [`DEFAULT_FILTER`] otherwise.
#[must_use]
pub fn filter_directive(config: Option<&GeneratorConfig>) -> String {
    config
        .map(|c| c.debug.log_level.trim())
        .filter(|level| !level.is_empty())
        .unwrap_or(DEFAULT_FILTER)
        .to_string()
}

/// Initialize the global tracing subscriber.
///
/// Sets up:
/// - Console output on stderr with uptime timestamps and module paths
/// - JSON file logging in debug builds when `log_dir` is given
/// - Environment-based filtering (respects RUST_LOG)
///
/// # Examples
///
/// ```no_run
/// use cubewrap_config::GeneratorConfig;
/// use cubewrap_log::init_logging;
///
/// let config = GeneratorConfig::default();
/// init_logging(None, false, Some(&config));
/// ```
pub fn init_logging(log_dir: Option<&Path>, debug_build: bool, config: Option<&GeneratorConfig>) {
    let filter_str = filter_directive(config);

    // RUST_LOG wins over the config.
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if debug_build && let Some(log_dir) = log_dir {
        match open_log_file(log_dir) {
            Ok(log_file) => {
                let file_layer = fmt::layer()
                    .with_writer(log_file)
                    .with_ansi(false)
                    .with_target(true)
                    .with_timer(fmt::time::uptime())
                    .json();

                subscriber.with(file_layer).init();
                return;
            }
            Err(e) => {
                subscriber.init();
                warn!(dir = %log_dir.display(), error = %e, "file logging disabled");
                return;
            }
        }
    }

    subscriber.init();
}

fn open_log_file(log_dir: &Path) -> std::io::Result<File> {
    std::fs::create_dir_all(log_dir)?;
    File::create(log_dir.join(LOG_FILE_NAME))
}
