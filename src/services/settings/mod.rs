// Settings service
// Loads and saves the persisted user preferences as TOML

use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::settings::Settings;

const SETTINGS_FILE: &str = "settings.toml";

pub struct SettingsService {
    settings_path: PathBuf,
}

impl SettingsService {
    /// Service rooted at the platform config directory
    pub fn new() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "class-scheduler")
            .context("Could not determine a config directory")?;
        Ok(Self::with_config_dir(dirs.config_dir()))
    }

    /// Service rooted at an explicit directory (used by tests)
    pub fn with_config_dir(config_dir: &Path) -> Self {
        Self {
            settings_path: config_dir.join(SETTINGS_FILE),
        }
    }

    /// The platform config directory for this application
    pub fn config_dir() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "class-scheduler")
            .context("Could not determine a config directory")?;
        Ok(dirs.config_dir().to_path_buf())
    }

    /// True once a settings file has been written (i.e. not the first run)
    pub fn is_initialized(&self) -> bool {
        self.settings_path.exists()
    }

    /// Load persisted settings, falling back to defaults on first run
    pub fn load(&self) -> Result<Settings> {
        if !self.settings_path.exists() {
            return Ok(Settings::default());
        }

        let raw = fs::read_to_string(&self.settings_path)
            .with_context(|| format!("Failed to read {}", self.settings_path.display()))?;
        toml::from_str(&raw).context("Settings file is not valid TOML")
    }

    /// Persist `settings`, creating the config directory if needed
    pub fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.settings_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let raw = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(&self.settings_path, raw)
            .with_context(|| format!("Failed to write {}", self.settings_path.display()))
    }
}
