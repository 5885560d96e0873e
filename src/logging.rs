use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Env var holding a log file path; takes precedence over the config file.
pub const LOG_ENV_VAR: &str = "TEST_HOSTING_APP_LOG";

/// Initialize tracing with optional file output.
///
/// Logging is disabled unless a log path comes from `TEST_HOSTING_APP_LOG`
/// or `logging.file`; the UI owns stdout, so nothing is ever written there.
/// `RUST_LOG` overrides `logging.level` when set.
///
/// Log files are created with unique names to prevent conflicts when
/// multiple instances run simultaneously: `{path}.{timestamp}.{pid}`.
/// Returns the path actually written to.
pub fn init_tracing(config: &LoggingConfig) -> Option<PathBuf> {
    let env_path = std::env::var_os(LOG_ENV_VAR).map(PathBuf::from);
    let log_path = resolve_log_path(env_path, config)?;

    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let unique_path = unique_log_path(&log_path, timestamp, pid);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let file = match std::fs::File::create(&unique_path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!(
                "Warning: Failed to create log file {}: {}",
                unique_path.display(),
                err
            );
            return None;
        }
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    Some(unique_path)
}

fn resolve_log_path(env_path: Option<PathBuf>, config: &LoggingConfig) -> Option<PathBuf> {
    env_path
        .filter(|path| !path.as_os_str().is_empty())
        .or_else(|| config.file.clone())
}

fn unique_log_path(base: &Path, timestamp: u64, pid: u32) -> PathBuf {
    let mut name = base.as_os_str().to_os_string();
    name.push(format!(".{}.{}", timestamp, pid));
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_path_wins_over_config() {
        let config = LoggingConfig {
            file: Some(PathBuf::from("/tmp/config.log")),
            ..LoggingConfig::default()
        };
        let resolved = resolve_log_path(Some(PathBuf::from("/tmp/env.log")), &config);
        assert_eq!(resolved, Some(PathBuf::from("/tmp/env.log")));
    }

    #[test]
    fn empty_env_path_falls_back_to_config() {
        let config = LoggingConfig {
            file: Some(PathBuf::from("/tmp/config.log")),
            ..LoggingConfig::default()
        };
        let resolved = resolve_log_path(Some(PathBuf::new()), &config);
        assert_eq!(resolved, Some(PathBuf::from("/tmp/config.log")));
    }

    #[test]
    fn no_path_disables_logging() {
        assert_eq!(resolve_log_path(None, &LoggingConfig::default()), None);
    }

    #[test]
    fn unique_path_appends_timestamp_and_pid() {
        let path = unique_log_path(Path::new("/tmp/app.log"), 1700000000, 42);
        assert_eq!(path, PathBuf::from("/tmp/app.log.1700000000.42"));
    }
}
