//! TOML-backed preferences file.
//!
//! Persists [`UserPreferences`] at `~/.config/horario/config.toml`. Events
//! themselves are never written to disk; only the settings layer is
//! durable. Missing files fall back to defaults, and missing fields are
//! filled in by the serde defaults on the preference types.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::prefs::UserPreferences;

/// Path to the preferences file.
///
/// # Errors
/// Returns an error if the platform config directory cannot be determined.
pub fn preferences_path() -> Result<PathBuf, ConfigError> {
    let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(base.join("horario").join("config.toml"))
}

/// Load preferences from the default location, falling back to defaults
/// when no file exists yet.
///
/// # Errors
/// Returns an error if an existing file cannot be parsed.
pub fn load_preferences() -> Result<UserPreferences, ConfigError> {
    load_preferences_from(&preferences_path()?)
}

/// Load preferences from an explicit path.
///
/// # Errors
/// Returns an error if an existing file cannot be read or parsed. Only a
/// missing file falls back to defaults.
pub fn load_preferences_from(path: &Path) -> Result<UserPreferences, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            toml::from_str(&content).map_err(|e| ConfigError::ParseFailed(e.to_string()))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(UserPreferences::default()),
        Err(e) => Err(ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        }),
    }
}

/// Persist preferences to the default location, creating the directory if
/// needed.
///
/// # Errors
/// Returns an error if serialization or the write fails.
pub fn save_preferences(prefs: &UserPreferences) -> Result<(), ConfigError> {
    save_preferences_to(prefs, &preferences_path()?)
}

/// Persist preferences to an explicit path.
///
/// # Errors
/// Returns an error if serialization or the write fails.
pub fn save_preferences_to(prefs: &UserPreferences, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(prefs).map_err(|e| ConfigError::SaveFailed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    }
    std::fs::write(path, content).map_err(|e| ConfigError::SaveFailed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::{StudyPreferences, TimeOfDay};

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = load_preferences_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(prefs.start_of_week, 1);
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("horario").join("config.toml");

        let mut prefs = UserPreferences::default();
        prefs.start_of_week = 0;
        prefs.study = Some(StudyPreferences {
            preferred_days: vec![2, 4],
            max_daily_hours: 3,
            preferred_times: vec![TimeOfDay::Evening],
        });

        save_preferences_to(&prefs, &path).unwrap();
        let reloaded = load_preferences_from(&path).unwrap();

        assert_eq!(reloaded.start_of_week, 0);
        let study = reloaded.study.unwrap();
        assert_eq!(study.preferred_days, vec![2, 4]);
        assert_eq!(study.preferred_times, vec![TimeOfDay::Evening]);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[working_hours]\nstart = 8\n").unwrap();

        let prefs = load_preferences_from(&path).unwrap();
        assert_eq!(prefs.working_hours.start, 8);
        assert_eq!(prefs.working_hours.end, 17);
        assert!(prefs.notifications.enabled);
    }

    #[test]
    fn test_unreadable_path_is_an_error_not_defaults() {
        // A directory where the file should be is a read failure, not a
        // missing file; it must surface instead of silently resetting
        // preferences.
        let dir = tempfile::tempdir().unwrap();
        let err = load_preferences_from(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::LoadFailed { .. }));
    }

    #[test]
    fn test_garbage_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "start_of_week = \"not a number\"").unwrap();

        assert!(load_preferences_from(&path).is_err());
    }
}
