use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::error::ReportError;

/// Configuration file looked up in the working directory
pub const CONFIG_FILE: &str = "config.json";

/// Application configuration structure that matches config.json
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    // Directory paths
    #[serde(default = "default_input_directory")]
    pub input_directory: String,
    #[serde(default = "default_output_file")]
    pub output_file: String,

    // Sort CSV files by name instead of using directory listing order
    #[serde(default)]
    pub sort_entries: bool,

    // General settings
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_input_directory() -> String {
    "evaluation/acc_csv".to_string()
}

fn default_output_file() -> String {
    "accuracy_results.tex".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input_directory: default_input_directory(),
            output_file: default_output_file(),
            sort_entries: false,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ReportError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_json::from_reader(reader)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ReportError> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Get input directory
    pub fn get_input_dir(&self) -> PathBuf {
        PathBuf::from(&self.input_directory)
    }

    /// Get output file path
    pub fn get_output_path(&self) -> PathBuf {
        PathBuf::from(&self.output_file)
    }

    /// Update a single setting by key
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ReportError> {
        match key {
            "input_directory" => self.input_directory = value.to_string(),
            "output_file" => self.output_file = value.to_string(),
            "sort_entries" => {
                self.sort_entries = value
                    .parse::<bool>()
                    .map_err(|e| ReportError::Config(format!("sort_entries: {}", e)))?;
            }
            "log_level" => {
                if value.is_empty() {
                    return Err(ReportError::Config("log_level must not be empty".to_string()));
                }
                self.log_level = value.to_string();
            }
            _ => {
                return Err(ReportError::Config(format!("Unknown configuration key: {}", key)));
            }
        }
        Ok(())
    }
}

/// Load the configuration from `config.json`, falling back to defaults when it doesn't exist
pub fn load_config() -> Result<Config, ReportError> {
    load_config_from(CONFIG_FILE)
}

pub fn load_config_from<P: AsRef<Path>>(path: P) -> Result<Config, ReportError> {
    let path = path.as_ref();
    if !path.exists() {
        log::debug!("{} not found, using default configuration", path.display());
        return Ok(Config::default());
    }

    let mut config = Config::from_file(path)?;

    // Validate and apply post-load logic
    if config.log_level.is_empty() {
        config.log_level = default_log_level();
    }

    Ok(config)
}
