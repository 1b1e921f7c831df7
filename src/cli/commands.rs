//! CLI subcommand definitions

use clap::{Args, Subcommand};

/// Main CLI commands
#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Show the session containing today (default)
    Current,
    /// Show the date window of a session
    Range {
        /// Session label, e.g. 2025-26 (defaults to the active session)
        label: Option<String>,
    },
    /// List selectable sessions
    List {
        /// Sessions before the current one when no shared list is configured
        #[arg(long)]
        past: Option<u32>,
        /// Sessions after the current one when no shared list is configured
        #[arg(long)]
        future: Option<u32>,
    },
    /// Clamp a date range into a session
    Clamp(ClampArgs),
    /// Show or change this device's selected session
    Active {
        #[command(subcommand)]
        command: Option<ActiveCommands>,
    },
    /// Show or replace the shared session configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
    /// Fill a pair of date fields with session boundaries
    Defaults(DefaultsArgs),
}

#[derive(Debug, Args)]
pub(crate) struct ClampArgs {
    /// Range start (YYYY-MM-DD, DD-MM-YYYY or DD/MM/YYYY)
    #[arg(long)]
    pub(crate) from: Option<String>,
    /// Range end (YYYY-MM-DD, DD-MM-YYYY or DD/MM/YYYY)
    #[arg(long)]
    pub(crate) to: Option<String>,
    /// Session to clamp into (defaults to the active session)
    #[arg(long)]
    pub(crate) session: Option<String>,
}

#[derive(Debug, Args)]
pub(crate) struct DefaultsArgs {
    /// Current value of the "from" field
    #[arg(long, default_value = "")]
    pub(crate) from_value: String,
    /// Current value of the "to" field
    #[arg(long, default_value = "")]
    pub(crate) to_value: String,
    /// Fields are native date pickers (YYYY-MM-DD) rather than text (DD-MM-YYYY)
    #[arg(long)]
    pub(crate) native: bool,
    /// Overwrite fields that already hold a value
    #[arg(long)]
    pub(crate) force: bool,
    /// Session to use (defaults to the active session)
    #[arg(long)]
    pub(crate) session: Option<String>,
}

#[derive(Debug, Subcommand)]
pub(crate) enum ActiveCommands {
    /// Show the active session (default)
    Show,
    /// Remember a session for this device
    Set { label: String },
}

#[derive(Debug, Subcommand)]
pub(crate) enum ConfigCommands {
    /// Show the shared configuration (default)
    Show,
    /// Replace the shared configuration
    Save {
        /// Session label; repeat for each session
        #[arg(long = "session", value_name = "LABEL", required = true)]
        sessions: Vec<String>,
        /// Default session (coerced to the latest one if not listed)
        #[arg(long)]
        default: Option<String>,
    },
}
