use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "ictihat.yaml";
pub const DEFAULT_INPUT_GLOB: &str = "./input/**/*.txt";
pub const DEFAULT_OUTPUT_DIR: &str = "./output";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    pub id: String,
    #[serde(default)]
    pub inputs: Option<InputsSection>,
    #[serde(default)]
    pub dictionary: Option<DictionarySection>,
    #[serde(default)]
    pub outputs: Option<OutputsSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputsSection {
    pub glob: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionarySection {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputsSection {
    pub dir: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Read(String),
    #[error("Failed to parse config: {0}")]
    Parse(String),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Read and validate a run file. Only `id` is mandatory.
pub fn validate_config(path: &Path) -> Result<RunConfig, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Read(e.to_string()))?;
    let config: RunConfig = serde_yaml::from_str(&raw).map_err(|e| ConfigError::Parse(e.to_string()))?;

    if config.id.trim().is_empty() {
        return Err(ConfigError::Invalid("missing id".into()));
    }
    if let Some(glob) = config.inputs.as_ref().and_then(|i| i.glob.as_deref()) {
        if glob.trim().is_empty() {
            return Err(ConfigError::Invalid("empty inputs.glob".into()));
        }
    }

    Ok(config)
}

impl RunConfig {
    pub fn input_glob(&self) -> String {
        self.inputs
            .as_ref()
            .and_then(|i| i.glob.clone())
            .unwrap_or_else(|| DEFAULT_INPUT_GLOB.to_string())
    }

    pub fn output_dir(&self) -> String {
        self.outputs
            .as_ref()
            .and_then(|o| o.dir.clone())
            .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string())
    }

    /// `None` runs with the built-in tone indicators and no concepts.
    pub fn dictionary_path(&self) -> Option<PathBuf> {
        self.dictionary
            .as_ref()
            .and_then(|d| d.path.as_deref())
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
    }
}
