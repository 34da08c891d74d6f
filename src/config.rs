use serde_derive::Deserialize;
use std::io::Read;
use std::{
    fs::File,
    path::{Path, PathBuf},
};
use thiserror::*;

pub const CONFIG_ENV: &str = "TASKBOARD_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "taskboard.yaml";
pub const WEATHER_API_KEY_ENV: &str = "WEATHER_API_KEY";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("io error {0} when reading config")]
    IoError(#[from] std::io::Error),
    #[error("cannot open config file '{0}' : {1}")]
    OpeningError(PathBuf, std::io::Error),
    #[error("UTF8 format error when reading config")]
    Utf8Error,
    #[error("format error {0} when reading config")]
    FormatError(#[from] serde_yaml::Error),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct WeatherConfig {
    pub url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_units")]
    pub units: String,
    #[serde(default = "default_timeout_millis")]
    pub timeout_millis: u64,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            url: "https://api.openweathermap.org/data/2.5/weather".to_string(),
            api_key: String::new(),
            units: default_units(),
            timeout_millis: default_timeout_millis(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UserDirectoryConfig {
    pub url: String,
    #[serde(default = "default_timeout_millis")]
    pub timeout_millis: u64,
}

impl Default for UserDirectoryConfig {
    fn default() -> Self {
        Self {
            url: "https://jsonplaceholder.typicode.com".to_string(),
            timeout_millis: default_timeout_millis(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    pub log: Option<crate::log::Log>,
    #[serde(default)]
    pub weather: WeatherConfig,
    #[serde(default)]
    pub users: UserDirectoryConfig,
}

fn default_units() -> String {
    "metric".to_string()
}

fn default_timeout_millis() -> u64 {
    5000
}

impl Config {
    pub fn from_str(s: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(s)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let p = path.as_ref();
        let mut file = File::open(p).map_err(|e| ConfigError::OpeningError(p.to_owned(), e))?;
        let mut contents = vec![];
        file.read_to_end(&mut contents)?;
        let contents = String::from_utf8(contents).map_err(|_| ConfigError::Utf8Error)?;
        let config = Config::from_str(&contents)?;
        Ok(config)
    }

    /// Reads the file named by `TASKBOARD_CONFIG`, falling back to the
    /// defaults when the default path does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        let config = match std::env::var(CONFIG_ENV) {
            Ok(path) => Config::from_file(path)?,
            Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Config::from_file(DEFAULT_CONFIG_PATH)?
            }
            Err(_) => Config::default(),
        };
        Ok(config.with_api_key(std::env::var(WEATHER_API_KEY_ENV).ok()))
    }

    /// Secrets from the environment win over the file.
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
            self.weather.api_key = key;
        }
        self
    }
}
