//! User settings for the composer hosts.
//!
//! Settings live in a small JSON file:
//!
//! ```json
//! { "default_name": "Ana", "default_tone": "formal" }
//! ```
//!
//! Both keys are optional. Without an explicit path the file is looked up at
//! `$XDG_CONFIG_HOME/missive/config.json`; when nothing exists there the
//! defaults apply.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    composer::Composer,
    error::{ComposerError, Result},
    tone::Tone,
};

const CONFIG_FILE: &str = "config.json";

/// Composer defaults read from the settings file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Sender name used when a host supplies none
    pub default_name: Option<String>,
    /// Tone selected when a host supplies none
    pub default_tone: Tone,
}

impl Config {
    /// Parses settings from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| ComposerError::Configuration {
            message: format!("Invalid settings: {e}"),
        })
    }

    /// Reads settings from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| ComposerError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&text)
    }

    /// An empty composer pre-filled with these defaults.
    pub fn composer(&self) -> Composer {
        Composer::with_defaults(self.default_name.clone().unwrap_or_default(), self.default_tone)
    }
}

/// Resolves where settings come from and loads them.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config_path: Option<PathBuf>,
}

impl ConfigBuilder {
    /// Creates a builder that uses the XDG location.
    pub fn new() -> Self {
        Self { config_path: None }
    }

    /// Sets an explicit settings file.
    ///
    /// An explicit file must exist, unlike the XDG default which is optional.
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.config_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Loads the configured settings.
    ///
    /// # Errors
    ///
    /// Returns `ComposerError::FileSystem` if an explicit file cannot be read
    /// Returns `ComposerError::Configuration` if the file is not valid
    /// settings JSON
    pub fn build(self) -> Result<Config> {
        match self.config_path {
            Some(path) => {
                debug!("Loading settings from {}", path.display());
                Config::load(&path)
            }
            None => match Self::default_config_path() {
                Some(path) => {
                    debug!("Loading settings from {}", path.display());
                    Config::load(&path)
                }
                None => {
                    debug!("No settings file found, using defaults");
                    Ok(Config::default())
                }
            },
        }
    }

    /// Returns the settings file under the XDG config directories, if one
    /// exists.
    fn default_config_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("missive").find_config_file(CONFIG_FILE)
    }
}
