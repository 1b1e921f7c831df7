use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Overrides every default location (config file, settings DB, device file).
pub(crate) const HOME_ENV: &str = "ACADSESSION_HOME";

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum SettingsBackend {
    #[default]
    Sqlite,
    Rest,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SettingsConfig {
    #[serde(default)]
    pub(crate) backend: Option<SettingsBackend>,
    /// SQLite file for the sqlite backend
    #[serde(default)]
    pub(crate) path: Option<PathBuf>,
    /// Base URL of the hosted database for the rest backend
    #[serde(default)]
    pub(crate) url: Option<String>,
    #[serde(default)]
    pub(crate) api_key: Option<String>,
    #[serde(default)]
    pub(crate) table: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) debug: bool,
    #[serde(default)]
    pub(crate) timezone: Option<String>,
    #[serde(default)]
    pub(crate) past: Option<u32>,
    #[serde(default)]
    pub(crate) future: Option<u32>,
    #[serde(default)]
    pub(crate) state_file: Option<PathBuf>,
    #[serde(default)]
    pub(crate) settings: SettingsConfig,
}

fn home_override() -> Option<PathBuf> {
    std::env::var_os(HOME_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

impl Config {
    pub(crate) fn load() -> Self {
        Self::load_internal(false)
    }

    pub(crate) fn load_quiet() -> Self {
        Self::load_internal(true)
    }

    fn load_internal(quiet: bool) -> Self {
        // Try config locations in order of priority
        for path in Self::get_config_paths(home_override().as_deref()) {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match toml::from_str::<Config>(&content) {
                    Ok(config) => {
                        if !quiet {
                            eprintln!("Loaded config from {}", path.display());
                        }
                        return config;
                    }
                    Err(e) => {
                        if !quiet {
                            eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                        }
                    }
                }
            }
        }

        Self::default()
    }

    fn get_config_paths(home_override: Option<&Path>) -> Vec<PathBuf> {
        if let Some(dir) = home_override {
            return vec![dir.join("config.toml")];
        }

        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/acadsession/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("acadsession").join("config.toml"));
        }

        // 2. macOS Application Support: ~/Library/Application Support/acadsession/config.toml
        if let Some(config_dir) = dirs::config_dir() {
            let macos_path = config_dir.join("acadsession").join("config.toml");
            if !paths.contains(&macos_path) {
                paths.push(macos_path);
            }
        }

        // 3. Home directory: ~/.acadsession.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".acadsession.toml"));
        }

        paths
    }

    /// Directory holding the default settings database and device file.
    pub(crate) fn data_dir() -> PathBuf {
        if let Some(dir) = home_override() {
            return dir;
        }
        dirs::data_dir()
            .or_else(|| dirs::home_dir().map(|h| h.join(".local").join("share")))
            .unwrap_or_else(|| PathBuf::from("."))
            .join("acadsession")
    }
}
