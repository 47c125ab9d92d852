use crate::error::{LibrisError, Result};
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_DATA_FILENAME: &str = "library.json";
pub const DATA_FILE_ENV: &str = "LIBRIS_FILE";
pub const DATA_FILE_KEY: &str = "data-file";

/// User configuration, stored as config.json in the platform config directory
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LibrisConfig {
    /// Catalog file to use when neither --file nor LIBRIS_FILE is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
}

impl LibrisConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(LibrisError::Io)?;
        serde_json::from_str(&content).map_err(|e| {
            LibrisError::Config(format!("{}: {}", config_path.display(), e))
        })
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(LibrisError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(LibrisError::Serialization)?;
        fs::write(config_path, content).map_err(LibrisError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        match key {
            DATA_FILE_KEY => Ok(self
                .data_file
                .as_ref()
                .map(|p| p.display().to_string())),
            other => Err(LibrisError::Config(format!("Unknown config key: {}", other))),
        }
    }

    /// Set a key from its textual form. An empty value clears it.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            DATA_FILE_KEY => {
                self.data_file = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
                Ok(())
            }
            other => Err(LibrisError::Config(format!("Unknown config key: {}", other))),
        }
    }
}

/// Pick the catalog file: explicit flag, then environment, then config, then
/// `library.json` in the platform data directory. `config` and `data_dir` are only
/// consulted when everything before them is unset.
pub fn resolve_data_file<C, D>(
    flag: Option<&Path>,
    env: Option<&OsStr>,
    config: C,
    data_dir: D,
) -> Result<PathBuf>
where
    C: FnOnce() -> Result<LibrisConfig>,
    D: FnOnce() -> Result<PathBuf>,
{
    if let Some(path) = flag {
        return Ok(path.to_path_buf());
    }
    if let Some(value) = env.filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(value));
    }
    if let Some(path) = config()?.data_file {
        return Ok(path);
    }
    Ok(data_dir()?.join(DEFAULT_DATA_FILENAME))
}
