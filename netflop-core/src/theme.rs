//! Persisted theme preference.
//!
//! The preference lives under a namespaced key in a small JSON key/value
//! file so other settings can share the file.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use netflop_model::Theme;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::ThemeStoreError;

pub const THEME_KEY: &str = "netflop:theme";
const STORE_FILE: &str = "storage.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/netflop/storage.json`
    pub fn default_path() -> Result<PathBuf, ThemeStoreError> {
        dirs::config_dir()
            .map(|dir| dir.join("netflop").join(STORE_FILE))
            .ok_or(ThemeStoreError::NoConfigDir)
    }

    /// Use `path` when given, the default location otherwise.
    pub fn from_override(path: Option<PathBuf>) -> Result<Self, ThemeStoreError> {
        match path {
            Some(path) => Ok(Self::new(path)),
            None => Self::default_path().map(Self::new),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The saved theme, `None` when nothing (valid) was saved.
    pub fn saved(&self) -> Result<Option<Theme>, ThemeStoreError> {
        let entries = self.read_entries()?;
        let Some(raw) = entries.get(THEME_KEY).and_then(Value::as_str) else {
            return Ok(None);
        };
        match raw.parse::<Theme>() {
            Ok(theme) => Ok(Some(theme)),
            Err(err) => {
                warn!(error = %err, "ignoring saved theme");
                Ok(None)
            }
        }
    }

    /// Saved theme or the default; read failures are logged.
    pub fn load(&self) -> Theme {
        match self.saved() {
            Ok(Some(theme)) => theme,
            Ok(None) => Theme::default(),
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "failed to read theme store");
                Theme::default()
            }
        }
    }

    /// Store `theme`, keeping the other keys of the file.
    pub fn save(&self, theme: Theme) -> Result<(), ThemeStoreError> {
        let mut entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(ThemeStoreError::Json(err)) => {
                warn!(error = %err, "theme store was not valid JSON; rewriting");
                Map::new()
            }
            Err(err) => return Err(err),
        };
        entries.insert(THEME_KEY.to_string(), Value::String(theme.as_str().to_string()));

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }
        let body = serde_json::to_string_pretty(&Value::Object(entries))?;
        fs::write(&self.path, body).map_err(|source| self.io_error(source))?;
        debug!(path = %self.path.display(), %theme, "theme saved");
        Ok(())
    }

    fn read_entries(&self) -> Result<Map<String, Value>, ThemeStoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(source) => return Err(self.io_error(source)),
        };
        if raw.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str::<Value>(&raw)? {
            Value::Object(entries) => Ok(entries),
            _ => Ok(Map::new()),
        }
    }

    fn io_error(&self, source: std::io::Error) -> ThemeStoreError {
        ThemeStoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
