//! Persisted preference file.

use crate::prefs::Theme;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Directory under the user's home that holds dashboard state.
const CONFIG_DIR: &str = ".cryptodash";
const CONFIG_FILE: &str = "preferences.json";

/// On-disk preferences: a single `{"theme": "dark" | "light"}` object.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub theme: Theme,
}

impl Config {
    pub fn new(theme: Theme) -> Self {
        Config { theme }
    }

    /// Loads the preferences from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Saves the preferences to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if writing to file fails or serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// Location of the preference file, `~/.cryptodash/preferences.json`.
pub fn get_config_path() -> Option<PathBuf> {
    home::home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE))
}
