//! Command-line argument parsing for the overlay host
//!
//! Supports:
//! - Overriding the settings file location
//! - Initial window size
//! - Sleep idle timeout
//! - Disabling the stdin chat source

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::sleep::DEFAULT_IDLE_TIMEOUT;

/// A floating control overlay over a placeholder player surface
#[derive(Parser, Debug)]
#[command(
    name = "player-overlay",
    version,
    about = "A floating control overlay for video players"
)]
pub struct CliArgs {
    /// Settings file to load and persist (defaults to the config directory)
    #[arg(long, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Initial window width in logical pixels
    #[arg(long, value_name = "PX", default_value_t = 1280)]
    pub width: u32,

    /// Initial window height in logical pixels
    #[arg(long, value_name = "PX", default_value_t = 720)]
    pub height: u32,

    /// Idle time before the overlay hides
    #[arg(long, value_name = "MS")]
    pub idle_timeout_ms: Option<u64>,

    /// Do not read chat lines from stdin
    #[arg(long)]
    pub no_chat: bool,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, PartialEq)]
pub struct StartupConfig {
    /// Explicit settings file; `None` uses the default location
    pub settings_path: Option<PathBuf>,
    pub window_size: (u32, u32),
    pub idle_timeout: Duration,
    /// Read `!command` lines from stdin
    pub chat_enabled: bool,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!(
                "Window size must be non-zero, got {}x{}",
                self.width, self.height
            ));
        }

        let idle_timeout = match self.idle_timeout_ms {
            Some(0) => return Err("Idle timeout must be greater than zero".to_string()),
            Some(ms) => Duration::from_millis(ms),
            None => DEFAULT_IDLE_TIMEOUT,
        };

        Ok(StartupConfig {
            settings_path: self.settings,
            window_size: (self.width, self.height),
            idle_timeout,
            chat_enabled: !self.no_chat,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> CliArgs {
        CliArgs {
            settings: None,
            width: 1280,
            height: 720,
            idle_timeout_ms: None,
            no_chat: false,
        }
    }

    #[test]
    fn test_defaults() {
        let config = args().into_config().unwrap();
        assert_eq!(config.idle_timeout, DEFAULT_IDLE_TIMEOUT);
        assert_eq!(config.window_size, (1280, 720));
        assert!(config.chat_enabled);
        assert_eq!(config.settings_path, None);
    }

    #[test]
    fn test_no_chat_flag() {
        let config = CliArgs {
            no_chat: true,
            ..args()
        }
        .into_config()
        .unwrap();
        assert!(!config.chat_enabled);
    }

    #[test]
    fn test_idle_timeout_override() {
        let config = CliArgs {
            idle_timeout_ms: Some(250),
            ..args()
        }
        .into_config()
        .unwrap();
        assert_eq!(config.idle_timeout, Duration::from_millis(250));
    }

    #[test]
    fn test_zero_values_are_rejected() {
        assert!(CliArgs {
            width: 0,
            ..args()
        }
        .into_config()
        .is_err());
        assert!(CliArgs {
            idle_timeout_ms: Some(0),
            ..args()
        }
        .into_config()
        .is_err());
    }

    #[test]
    fn test_parse_from_command_line() {
        let args = CliArgs::parse_from([
            "player-overlay",
            "--settings",
            "/tmp/overlay.yaml",
            "--idle-timeout-ms",
            "1000",
            "--no-chat",
        ]);
        assert_eq!(args.settings, Some(PathBuf::from("/tmp/overlay.yaml")));
        assert_eq!(args.idle_timeout_ms, Some(1000));
        assert!(args.no_chat);
    }
}
