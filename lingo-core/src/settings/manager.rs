use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::warn;

use crate::settings::config::Settings;

/// Settings shared across the process. Each process has its own in-memory
/// copy that the user may change without impacting other sessions; changes
/// persist only when explicitly saved.
#[derive(Clone)]
pub struct SettingsManager {
    settings_path: PathBuf,
    inner: Arc<Mutex<Settings>>,
}

impl SettingsManager {
    /// Create a settings manager at the default location
    /// (`~/.lingo/settings.toml`).
    pub fn new() -> Result<Self> {
        let home = dirs::home_dir().context("Failed to get home directory")?;
        Self::from_path(home.join(".lingo").join("settings.toml"))
    }

    /// Create a settings manager from a specific path
    pub fn from_path(path: PathBuf) -> Result<Self> {
        let settings = Self::load_or_init(&path)?;

        Ok(Self {
            settings_path: path,
            inner: Arc::new(Mutex::new(settings)),
        })
    }

    /// Read the settings file, seeding it with defaults when absent. A
    /// file that no longer parses is moved to `settings.toml.backup` and
    /// replaced, so a bad edit to one service section never blocks
    /// startup.
    fn load_or_init(path: &Path) -> Result<Settings> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {parent:?}"))?;
        }

        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read settings from {path:?}"))?;

            match toml::from_str(&contents) {
                Ok(settings) => return Ok(settings),
                Err(e) => {
                    let backup_path = path.with_extension("toml.backup");
                    warn!(error = %e, ?backup_path, "settings file did not parse, moving aside");
                    fs::rename(path, &backup_path).with_context(|| {
                        format!("Failed to backup corrupted settings to {backup_path:?}")
                    })?;
                }
            }
        }

        let defaults = Settings::default();
        Self::write_to(path, &defaults)?;
        Ok(defaults)
    }

    fn write_to(path: &Path, settings: &Settings) -> Result<()> {
        let contents = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write settings to {path:?}"))?;
        Ok(())
    }

    /// Get the in-memory settings
    pub fn settings(&self) -> Settings {
        self.inner.lock().unwrap().clone()
    }

    /// Update in-memory settings with a closure. Note: settings are not saved to disk
    pub fn update_setting<F>(&self, updater: F)
    where
        F: FnOnce(&mut Settings),
    {
        let mut guard = self.inner.lock().unwrap();
        updater(&mut guard);
    }

    /// Explicitly persist in-memory settings to disk
    pub fn save(&self) -> Result<()> {
        Self::write_to(&self.settings_path, &self.settings())
    }

    /// Get the settings file path
    pub fn path(&self) -> &Path {
        &self.settings_path
    }
}
