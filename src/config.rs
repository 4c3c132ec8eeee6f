//! Application configuration.

use crate::consts::cli_consts::fade::{FADE_IN_MS, FADE_OUT_MS, MAX_FADE_MS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::{fs, io};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Duration of the content fade-out when switching modes.
    pub fade_out_ms: u64,
    /// Duration of the content fade-in after the mode flips.
    pub fade_in_ms: u64,
    /// Whether to paint the gradient behind the phone viewport.
    pub with_background_color: bool,
    /// Whether to show the activity panel beside the phone.
    pub show_activity: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fade_out_ms: FADE_OUT_MS,
            fade_in_ms: FADE_IN_MS,
            with_background_color: true,
            show_activity: true,
        }
    }
}

impl Config {
    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Loads the configuration if present, falling back to defaults when the
    /// file is missing or unreadable.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Like [`Config::load_or_default`], but writes the defaults out when no
    /// file exists yet so there is something to edit.
    pub fn load_or_create(path: &Path) -> Self {
        if path.exists() {
            return Self::load_or_default(path);
        }
        let config = Self::default();
        if let Err(e) = config.save(path) {
            log::warn!("Could not write default config to {}: {}", path.display(), e);
        }
        config
    }

    /// Fade-out and fade-in durations, each capped at `MAX_FADE_MS`.
    pub fn fade_millis(&self) -> (u64, u64) {
        (
            self.fade_out_ms.min(MAX_FADE_MS),
            self.fade_in_ms.min(MAX_FADE_MS),
        )
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if writing to file fails or serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Deletes the configuration file at the given path.
    ///
    /// Refuses paths that do not end in `config.json`; a missing file is not an error.
    pub fn clear(path: &Path) -> Result<(), io::Error> {
        if !path.ends_with("config.json") {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "Path must end with config.json",
            ));
        }
        if !path.exists() {
            return Ok(());
        }
        fs::remove_file(path)
    }
}

/// Location of the configuration file: `~/.phone-auth-mockup/config.json`.
pub fn get_config_path() -> Result<PathBuf, io::Error> {
    let home = home::home_dir().ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "Could not determine home directory")
    })?;
    Ok(home.join(".phone-auth-mockup").join("config.json"))
}
