//! Format-agnostic configuration loading and saving

use crate::{DefaultFileIo, Error, FileIo, OsOverride, Result};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::path::Path;

/// Default chunk size for buffered writes.
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Default permission bits for files created by callers.
pub const DEFAULT_FILE_MODE: u32 = 0o644;

/// Default permission bits for directories created by callers.
pub const DEFAULT_DIR_MODE: u32 = 0o755;

/// Settings shared by tools built on the I/O layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IoConfig {
    /// Operating system name forced onto path helpers. Falls back to
    /// `TEST_OS_OVERRIDE` and then the host when absent.
    pub os_override: Option<String>,
    pub chunk_size: usize,
    pub file_mode: u32,
    pub dir_mode: u32,
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            os_override: None,
            chunk_size: DEFAULT_CHUNK_SIZE,
            file_mode: DEFAULT_FILE_MODE,
            dir_mode: DEFAULT_DIR_MODE,
        }
    }
}

impl IoConfig {
    pub fn os_override(&self) -> OsOverride {
        match &self.os_override {
            Some(name) => OsOverride::fixed(name.clone()),
            None => OsOverride::Environment,
        }
    }
}

/// Format-agnostic configuration store.
///
/// Detects the format from the file extension and reads and writes through
/// a [`FileIo`].
#[derive(Debug, Default)]
pub struct ConfigStore<F: FileIo = DefaultFileIo> {
    io: F,
}

impl ConfigStore {
    /// Create a store over the default file I/O.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F: FileIo> ConfigStore<F> {
    pub fn with_io(io: F) -> Self {
        Self { io }
    }

    pub fn io(&self) -> &F {
        &self.io
    }

    /// Load configuration from a file.
    ///
    /// Format is detected from file extension:
    /// - `.toml` -> TOML
    /// - `.json` -> JSON
    /// - `.yaml`, `.yml` -> YAML
    pub fn load<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let extension = extension_of(path);
        let format = format_name(&extension)?;

        let bytes = self.io.read(path)?;
        let content = String::from_utf8(bytes).map_err(|e| Error::ConfigParse {
            path: path.to_path_buf(),
            format: format.into(),
            message: e.to_string(),
        })?;

        let parsed = match format {
            "TOML" => toml::from_str(&content).map_err(|e| e.to_string()),
            "JSON" => serde_json::from_str(&content).map_err(|e| e.to_string()),
            _ => serde_yaml::from_str(&content).map_err(|e| e.to_string()),
        };

        parsed.map_err(|message| Error::ConfigParse {
            path: path.to_path_buf(),
            format: format.into(),
            message,
        })
    }

    /// Save configuration to a file.
    ///
    /// Format is determined from file extension.
    pub fn save<T: Serialize>(&self, path: &Path, value: &T) -> Result<()> {
        let extension = extension_of(path);
        let format = format_name(&extension)?;

        let content = match format {
            "TOML" => toml::to_string_pretty(value).map_err(|e| e.to_string()),
            "JSON" => serde_json::to_string_pretty(value).map_err(|e| e.to_string()),
            _ => serde_yaml::to_string(value).map_err(|e| e.to_string()),
        }
        .map_err(|message| Error::ConfigSerialize {
            path: path.to_path_buf(),
            format: format.into(),
            message,
        })?;

        self.io.write(path, content.as_bytes(), DEFAULT_FILE_MODE)
    }
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

fn format_name(extension: &str) -> Result<&'static str> {
    match extension {
        "toml" => Ok("TOML"),
        "json" => Ok("JSON"),
        "yaml" | "yml" => Ok("YAML"),
        _ => Err(Error::UnsupportedFormat {
            extension: extension.to_string(),
        }),
    }
}
