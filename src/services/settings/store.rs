use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::DisplayPreferences;

const PREFERENCES_FILE: &str = "preferences.toml";

/// Key-value collaborator that persists display preferences between launches.
pub trait PreferenceStore {
    fn load(&self) -> Result<DisplayPreferences>;
    fn save(&self, prefs: &DisplayPreferences) -> Result<()>;
}

/// Preferences kept as a TOML file, by default in the platform config directory.
#[derive(Debug, Clone)]
pub struct TomlPreferenceStore {
    path: PathBuf,
}

impl TomlPreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn at_default_location() -> Self {
        Self::new(Self::default_path())
    }

    pub fn default_path() -> PathBuf {
        if let Some(dirs) = ProjectDirs::from("com", "YCombinator", "DemoDayCountdown") {
            dirs.config_dir().join(PREFERENCES_FILE)
        } else {
            log::warn!("Unable to resolve project directory; using current dir for preferences");
            PathBuf::from(PREFERENCES_FILE)
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for TomlPreferenceStore {
    fn load(&self) -> Result<DisplayPreferences> {
        if !self.path.exists() {
            return Ok(DisplayPreferences::default());
        }

        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read preferences from {}", self.path.display()))?;
        let prefs = toml::from_str(&data).with_context(|| {
            format!("failed to parse preferences from {}", self.path.display())
        })?;
        Ok(prefs)
    }

    fn save(&self, prefs: &DisplayPreferences) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }

        let data = toml::to_string_pretty(prefs)?;
        fs::write(&self.path, data)
            .with_context(|| format!("failed to write preferences to {}", self.path.display()))?;
        Ok(())
    }
}

/// In-process store for tests and for shells that should not touch disk.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    prefs: Mutex<DisplayPreferences>,
}

impl MemoryPreferenceStore {
    pub fn new(prefs: DisplayPreferences) -> Self {
        Self {
            prefs: Mutex::new(prefs),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Result<DisplayPreferences> {
        self.prefs
            .lock()
            .map(|prefs| *prefs)
            .map_err(|_| anyhow!("preference store lock poisoned"))
    }

    fn save(&self, prefs: &DisplayPreferences) -> Result<()> {
        let mut guard = self
            .prefs
            .lock()
            .map_err(|_| anyhow!("preference store lock poisoned"))?;
        *guard = *prefs;
        Ok(())
    }
}

/// Loads preferences, falling back to defaults when the store cannot be read.
pub fn load_or_default(store: &dyn PreferenceStore) -> DisplayPreferences {
    match store.load() {
        Ok(prefs) => prefs,
        Err(err) => {
            log::warn!("Using default display preferences: {err:?}");
            DisplayPreferences::default()
        }
    }
}

/// Flips compact mode and persists the result.
pub fn toggle_compact_mode(store: &dyn PreferenceStore) -> Result<DisplayPreferences> {
    let prefs = load_or_default(store).toggled_compact();
    store.save(&prefs)?;
    log::info!("Compact mode is now {}", if prefs.compact_mode { "on" } else { "off" });
    Ok(prefs)
}
