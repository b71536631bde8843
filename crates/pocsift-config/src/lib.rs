use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use pocsift_core::{CoreError, MissingValues};
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "pocsift";
const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_INPUT_PATH: &str = "POC_LIST.csv";
pub const DEFAULT_OUTPUT_PATH: &str = "processed_contacts.csv";
pub const DEFAULT_SORT_BY: &str = "name";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    /// Raw policy label; unrecognized labels mean input order.
    pub sort_by: String,
    pub missing_values: MissingValues,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            sort_by: DEFAULT_SORT_BY.to_string(),
            missing_values: MissingValues::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid {field}: path cannot be empty")]
    EmptyPath { field: &'static str },
    #[error("invalid missing_values: {0}")]
    InvalidMissingValue(#[source] CoreError),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    input_path: Option<PathBuf>,
    output_path: Option<PathBuf>,
    sort_by: Option<String>,
    missing_values: Option<Vec<String>>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(path) = parsed.input_path {
        config.input_path = validate_path("input_path", path)?;
    }

    if let Some(path) = parsed.output_path {
        config.output_path = validate_path("output_path", path)?;
    }

    if let Some(sort_by) = parsed.sort_by {
        config.sort_by = sort_by;
    }

    if let Some(tokens) = parsed.missing_values {
        config.missing_values =
            MissingValues::new(&tokens).map_err(ConfigError::InvalidMissingValue)?;
    }

    Ok(config)
}

pub fn validate_path(field: &'static str, path: PathBuf) -> Result<PathBuf> {
    if path.as_os_str().is_empty() {
        return Err(ConfigError::EmptyPath { field });
    }
    Ok(path)
}
