//! Storage backends for the persisted theme.

use super::Theme;
use crate::config::Config;
use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

#[derive(Debug, Error)]
pub enum PreferenceError {
    /// No home directory could be determined, so there is nowhere to persist.
    #[error("no home directory available for preference storage")]
    NoHomeDirectory,

    /// Reading or writing the preference file failed.
    #[error("preference storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Key-value storage for the single persisted preference.
#[cfg_attr(test, automock)]
pub trait PreferenceStore: Send {
    /// Reads the stored theme. `Ok(None)` means nothing has been stored yet.
    fn load_theme(&self) -> Result<Option<Theme>, PreferenceError>;

    /// Writes the theme, replacing any previous value.
    fn save_theme(&mut self, theme: Theme) -> Result<(), PreferenceError>;
}

/// Stores the theme in the JSON preference file.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: Option<PathBuf>,
}

impl FilePreferenceStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }

    /// Uses `~/.cryptodash/preferences.json`; without a home directory every
    /// access reports [`PreferenceError::NoHomeDirectory`].
    pub fn from_home() -> Self {
        Self {
            path: crate::config::get_config_path(),
        }
    }

    fn path(&self) -> Result<&PathBuf, PreferenceError> {
        self.path.as_ref().ok_or(PreferenceError::NoHomeDirectory)
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load_theme(&self) -> Result<Option<Theme>, PreferenceError> {
        match Config::load_from_file(self.path()?) {
            Ok(config) => Ok(Some(config.theme)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save_theme(&mut self, theme: Theme) -> Result<(), PreferenceError> {
        Config::new(theme).save(self.path()?)?;
        Ok(())
    }
}

/// Session-only storage, used when nothing should touch the disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    theme: Option<Theme>,
}

impl MemoryPreferenceStore {
    #[cfg(test)]
    pub fn new(theme: Option<Theme>) -> Self {
        Self { theme }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load_theme(&self) -> Result<Option<Theme>, PreferenceError> {
        Ok(self.theme)
    }

    fn save_theme(&mut self, theme: Theme) -> Result<(), PreferenceError> {
        self.theme = Some(theme);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_means_no_stored_value() {
        let dir = tempdir().unwrap();
        let store = FilePreferenceStore::new(dir.path().join("preferences.json"));
        assert!(matches!(store.load_theme(), Ok(None)));
    }

    #[test]
    fn test_file_store_round_trips_theme() {
        let dir = tempdir().unwrap();
        let mut store = FilePreferenceStore::new(dir.path().join("nested").join("preferences.json"));
        store.save_theme(Theme::Light).unwrap();
        assert_eq!(store.load_theme().unwrap(), Some(Theme::Light));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "{not json").unwrap();
        let store = FilePreferenceStore::new(path);
        assert!(matches!(store.load_theme(), Err(PreferenceError::Io(_))));
    }

    #[test]
    fn test_unwritable_location_is_an_error() {
        let dir = tempdir().unwrap();
        // A regular file where the parent directory should be
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let mut store = FilePreferenceStore::new(blocker.join("preferences.json"));
        assert!(store.save_theme(Theme::Dark).is_err());
    }

    #[test]
    fn test_store_without_home_reports_unavailable() {
        let mut store = FilePreferenceStore { path: None };
        assert!(matches!(
            store.load_theme(),
            Err(PreferenceError::NoHomeDirectory)
        ));
        assert!(matches!(
            store.save_theme(Theme::Dark),
            Err(PreferenceError::NoHomeDirectory)
        ));
    }

    #[test]
    fn test_memory_store_keeps_last_value() {
        let mut store = MemoryPreferenceStore::default();
        assert_eq!(store.load_theme().unwrap(), None);
        store.save_theme(Theme::Light).unwrap();
        assert_eq!(store.load_theme().unwrap(), Some(Theme::Light));
    }
}
