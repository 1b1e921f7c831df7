//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::Config;

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser)]
#[command(name = "acadsession")]
#[command(about = "Academic session ranges for school reporting", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Timezone for session boundaries (e.g., "Asia/Kolkata", "UTC", "local")
    #[arg(long, global = true, value_name = "TZ")]
    pub(crate) timezone: Option<String>,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Enable debug output (show fallbacks and store failures)
    #[arg(long, global = true)]
    pub(crate) debug: bool,

    /// SQLite file holding the shared session settings
    #[arg(long, global = true, value_name = "PATH")]
    pub(crate) settings_db: Option<PathBuf>,

    /// File holding this device's session selection
    #[arg(long, global = true, value_name = "PATH")]
    pub(crate) state_file: Option<PathBuf>,

    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(long, global = true, value_name = "DATE", hide = true)]
    pub(crate) today: Option<String>,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }
        if self.timezone.is_none() {
            self.timezone = config.timezone.clone();
        }
        if self.state_file.is_none() {
            self.state_file = config.state_file.clone();
        }
        if self.settings_db.is_none() {
            self.settings_db = config.settings.path.clone();
        }
        self
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("acadsession").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn config_fills_unset_options() {
        let config: Config = toml::from_str(
            "timezone = \"UTC\"\nno_color = true\nstate_file = \"/tmp/dev.json\"\n[settings]\npath = \"/tmp/s.db\"",
        )
        .unwrap();
        let cli = parse(&["current"]).with_config(&config);
        assert_eq!(cli.timezone.as_deref(), Some("UTC"));
        assert!(!cli.use_color());
        assert_eq!(cli.state_file, Some(PathBuf::from("/tmp/dev.json")));
        assert_eq!(cli.settings_db, Some(PathBuf::from("/tmp/s.db")));
    }

    #[test]
    fn cli_flags_win_over_config() {
        let config: Config = toml::from_str("timezone = \"UTC\"").unwrap();
        let cli = parse(&["--timezone", "Asia/Kolkata", "current"]).with_config(&config);
        assert_eq!(cli.timezone.as_deref(), Some("Asia/Kolkata"));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["range", "2025-26", "--json", "--color", "always"]);
        assert!(cli.json);
        assert!(cli.use_color());
    }
}
