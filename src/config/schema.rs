use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/mixtape/config.toml` or `~/.config/mixtape/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `MIXTAPE__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub storage: StorageSettings,
    pub playback: PlaybackSettings,
    pub controls: ControlsSettings,
    pub search: SearchSettings,
    pub ui: UiSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Library file. Defaults to `<data dir>/library.json`.
    pub data_file: Option<PathBuf>,
    /// Keep the library in memory only; nothing survives the process.
    pub in_memory: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Whether shuffle starts enabled.
    pub shuffle: bool,
    /// Volume restored when unmuting without a remembered level (0.0-1.0].
    pub default_volume: f64,
    /// Directory that relative song sources are resolved against.
    /// Defaults to the working directory.
    pub media_dir: Option<PathBuf>,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            shuffle: false,
            default_volume: 1.0,
            media_dir: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControlsSettings {
    /// Seconds skipped by the go-forward / go-back shortcuts.
    pub skip_seconds: u64,
}

impl Default for ControlsSettings {
    fn default() -> Self {
        Self { skip_seconds: 5 }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Whether the exact-match toggle starts on.
    pub exact_match: bool,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SongField {
    #[serde(alias = "title")]
    Name,
    Artist,
    Genre,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Which song fields make up the "now playing" line, and in what order.
    ///
    /// Example: ["name", "artist"]
    pub now_playing_fields: Vec<SongField>,
    /// Separator used to join `now_playing_fields`.
    pub now_playing_separator: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            now_playing_fields: vec![SongField::Name, SongField::Artist],
            now_playing_separator: " - ".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Directory for rotated log files. Defaults to `<data dir>/logs`.
    pub directory: Option<PathBuf>,
    /// `tracing` filter directive; `RUST_LOG` wins when set.
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            directory: None,
            filter: "mixtape=info,warn".to_string(),
        }
    }
}
