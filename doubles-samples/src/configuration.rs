use std::path::PathBuf;

use config::{ConfigError, Map, Source, Value, ValueKind};
use serde::{Deserialize, Serialize};

use crate::log_filename::DEFAULT_MIN_NAME_LENGTH;

/// Samples configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Configuration {
    /// Directory where the users are stored
    pub data_directory: PathBuf,

    /// Minimum number of characters of a log filename, extension excluded
    pub min_log_name_length: usize,
}

impl Configuration {
    /// Create a sample configuration mainly for tests
    #[doc(hidden)]
    pub fn new_sample(data_directory: PathBuf) -> Self {
        Self {
            data_directory,
            min_log_name_length: DEFAULT_MIN_NAME_LENGTH,
        }
    }
}

/// Default configuration with all the default values for configurations.
#[derive(Debug, Clone)]
pub struct DefaultConfiguration {
    /// Directory where the users are stored
    pub data_directory: String,

    /// Minimum number of characters of a log filename
    pub min_log_name_length: u64,
}

impl DefaultConfiguration {
    fn namespace() -> String {
        "default configuration".to_string()
    }
}

impl Default for DefaultConfiguration {
    fn default() -> Self {
        Self {
            data_directory: "./users".to_string(),
            min_log_name_length: DEFAULT_MIN_NAME_LENGTH as u64,
        }
    }
}

impl Source for DefaultConfiguration {
    fn clone_into_box(&self) -> Box<dyn Source + Send + Sync> {
        Box::new(self.clone())
    }

    fn collect(&self) -> Result<Map<String, Value>, ConfigError> {
        fn into_value<V: Into<ValueKind>>(value: V) -> Value {
            Value::new(Some(&DefaultConfiguration::namespace()), value.into())
        }
        let mut result = Map::new();
        let myself = self.clone();

        result.insert(
            "data_directory".to_string(),
            into_value(myself.data_directory),
        );

        result.insert(
            "min_log_name_length".to_string(),
            into_value(myself.min_log_name_length),
        );

        Ok(result)
    }
}
