//! User settings stored as settings.json in the app data directory

use crate::constants::MAX_RECENT_FILES;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // Recently opened list files, most recent first
    pub recent_files: Vec<String>,

    // Directory the open/save dialogs start in
    pub last_dir: Option<String>,
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join("settings.json");
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join("settings.json");
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }

    /// Move `path` to the front of the recent list, deduplicated, capped.
    pub fn remember_file(&mut self, path: &Path) {
        let entry = path.to_string_lossy().to_string();
        self.recent_files.retain(|p| p != &entry);
        self.recent_files.insert(0, entry);
        self.recent_files.truncate(MAX_RECENT_FILES);
        if let Some(dir) = path.parent() {
            self.last_dir = Some(dir.to_string_lossy().to_string());
        }
    }

    pub fn dialog_dir_or_default(&self) -> PathBuf {
        self.last_dir
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                dirs::document_dir().unwrap_or_else(|| PathBuf::from("."))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = Settings::default();
        settings.window_w = Some(900.0);
        settings.remember_file(Path::new("/tmp/groceries.txt"));

        settings.save(dir.path());
        let loaded = Settings::load(dir.path());

        assert_eq!(loaded.window_w, Some(900.0));
        assert_eq!(loaded.recent_files, vec!["/tmp/groceries.txt".to_string()]);
        assert_eq!(loaded.last_dir.as_deref(), Some("/tmp"));
    }

    #[test]
    fn remember_file_dedupes_and_caps() {
        let mut settings = Settings::default();
        for i in 0..12 {
            settings.remember_file(Path::new(&format!("/tmp/list{i}.txt")));
        }
        settings.remember_file(Path::new("/tmp/list4.txt"));

        assert_eq!(settings.recent_files.len(), MAX_RECENT_FILES);
        assert_eq!(settings.recent_files[0], "/tmp/list4.txt");
        assert_eq!(
            settings
                .recent_files
                .iter()
                .filter(|p| *p == "/tmp/list4.txt")
                .count(),
            1
        );
    }

    #[test]
    fn missing_settings_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(dir.path());
        assert!(settings.recent_files.is_empty());
        assert!(settings.window_x.is_none());
    }
}
