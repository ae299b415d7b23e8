//! Configuration for gsa (stored in ~/.config/gsa/config.toml)
//!
//! Every key is optional; a missing file yields the defaults. Command-line
//! flags take precedence over anything loaded here.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GsaError, Result};
use crate::format::OutputFormat;
use crate::shape::Shape;
use crate::traversal::Order;

const CONFIG_DIR: &str = "gsa";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "GSA_CONFIG_DIR";

/// Default sample depth when neither config nor flags give one
pub const DEFAULT_DEPTH: u32 = 3;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GsaConfig {
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Fallback values for command-line options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub order: Order,
    pub shape: Shape,
    pub depth: u32,
    pub format: OutputFormat,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            order: Order::default(),
            shape: Shape::default(),
            depth: DEFAULT_DEPTH,
            format: OutputFormat::default(),
        }
    }
}

impl GsaConfig {
    /// Location of the config file when no explicit path is given
    pub fn default_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    GsaError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. The default path is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(GsaError::InvalidConfig {
                        path: path.to_path_buf(),
                        reason: "file not found".to_string(),
                    });
                }
                if path.is_dir() {
                    crate::bail_usage!(format!(
                        "--config expects a file, got directory {}",
                        path.display()
                    ));
                }
                Self::load_from(path)
            }
            None => {
                let path = Self::default_path()?;
                if !path.exists() {
                    tracing::debug!(path = %path.display(), "no config file, using defaults");
                    return Ok(Self::default());
                }
                Self::load_from(&path)
            }
        }
    }

    /// Read and parse the config file at `path`
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| GsaError::io_operation("read config", path.display(), e))?;

        let config = Self::parse(&content).map_err(|e| GsaError::InvalidConfig {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse config from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
