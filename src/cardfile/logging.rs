//! Logging bootstrap for the CLI.
//!
//! Library code only talks to the `log` facade. The binary installs a
//! `flexi_logger` backend writing to stderr, once per process.

use flexi_logger::{Logger, LoggerHandle};
use once_cell::sync::OnceCell;

pub const LOG_ENV: &str = "CARDFILE_LOG";
pub const DEFAULT_LEVEL: &str = "warn";

const LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

static LOGGER: OnceCell<LoggerHandle> = OnceCell::new();

/// Lower-cases and validates a level name.
pub fn normalize_level(level: &str) -> Result<&'static str, String> {
    let wanted = level.trim().to_ascii_lowercase();
    LEVELS
        .iter()
        .copied()
        .find(|l| *l == wanted)
        .ok_or_else(|| format!("unsupported log level `{}`", level.trim()))
}

/// Picks the effective level: `--verbose` beats `CARDFILE_LOG` beats config.
pub fn effective_level(verbose: bool, env: Option<&str>, configured: Option<&str>) -> String {
    if verbose {
        return "debug".to_string();
    }
    env.or(configured).unwrap_or(DEFAULT_LEVEL).to_string()
}

/// Starts logging to stderr. Later calls are no-ops.
pub fn init_logging(level: &str) -> Result<(), String> {
    let level = normalize_level(level)?;
    LOGGER
        .get_or_try_init(|| {
            Logger::try_with_str(level)
                .map_err(|err| format!("invalid log level `{level}`: {err}"))?
                .log_to_stderr()
                .format(flexi_logger::default_format)
                .start()
                .map_err(|err| format!("failed to start logger: {err}"))
        })
        .map(|_| ())
}
