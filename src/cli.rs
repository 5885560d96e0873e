use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Terminal rendition of the React test hosting app: one counter button.
#[derive(Debug, Parser)]
#[command(name = "test-hosting-app", version, about)]
pub struct Cli {
    /// Path to the config file (defaults to the user config dir).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to this file.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Redraw interval in milliseconds.
    #[arg(long, value_name = "MS")]
    pub tick_rate_ms: Option<u64>,

    /// Do not capture the mouse; the button is then keyboard-only.
    #[arg(long)]
    pub no_mouse: bool,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
        if let Some(tick) = self.tick_rate_ms {
            config.ui.tick_rate_ms = tick;
        }
        if self.no_mouse {
            config.ui.mouse = false;
        }
    }

    /// Read the config file, apply overrides, then validate the result.
    pub fn load_config(&self) -> Result<Config, crate::config::ConfigError> {
        let path = self.config.clone().unwrap_or_else(Config::config_path);
        let mut config = Config::read_from(&path)?;
        self.apply(&mut config);
        config.validate()?;
        Ok(config)
    }
}
