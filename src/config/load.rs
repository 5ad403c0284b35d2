use std::{env, path::PathBuf};

use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load` reads an optional config file, then environment
/// variables (prefix `MIXTAPE__`), and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("MIXTAPE")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if self.controls.skip_seconds == 0 {
            return Err("controls.skip_seconds must be >= 1".to_string());
        }
        let v = self.playback.default_volume;
        if !(v > 0.0 && v <= 1.0) {
            return Err("playback.default_volume must be in (0, 1]".to_string());
        }
        Ok(())
    }

    /// Library file to open, unless the store is in-memory.
    pub fn data_file(&self) -> Option<PathBuf> {
        self.storage
            .data_file
            .clone()
            .or_else(|| default_data_dir().map(|d| d.join("library.json")))
    }

    pub fn log_dir(&self) -> PathBuf {
        self.logging
            .directory
            .clone()
            .or_else(|| default_data_dir().map(|d| d.join("logs")))
            .unwrap_or_else(|| PathBuf::from(".logs"))
    }
}

/// Resolve the config path from `MIXTAPE_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("MIXTAPE_CONFIG_PATH") {
        let p = PathBuf::from(p);
        return Some(p);
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/mixtape/config.toml`
/// or `~/.config/mixtape/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    xdg_dir("XDG_CONFIG_HOME", ".config").map(|d| d.join("config.toml"))
}

/// `$XDG_DATA_HOME/mixtape` or `~/.local/share/mixtape`.
pub fn default_data_dir() -> Option<PathBuf> {
    xdg_dir("XDG_DATA_HOME", ".local/share")
}

fn xdg_dir(var: &str, home_fallback: &str) -> Option<PathBuf> {
    let base = if let Some(xdg) = env::var_os(var) {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(home_fallback))
    };

    base.map(|d| d.join("mixtape"))
}
