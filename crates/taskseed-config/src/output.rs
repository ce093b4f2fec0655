//! Output sink configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::ConfigError;

/// The generation-tool directory and the application-data directory.
fn default_sinks() -> Vec<PathBuf> {
    vec![
        PathBuf::from("./data_generation"),
        PathBuf::from("./medialab"),
    ]
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// Directories that each receive the full set of fixture files.
    #[serde(default = "default_sinks")]
    pub sinks: Vec<PathBuf>,

    /// Create missing sink directories instead of failing the sink.
    #[serde(default)]
    pub create_missing_dirs: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            sinks: default_sinks(),
            create_missing_dirs: false,
        }
    }
}

impl OutputConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sinks.is_empty() {
            return Err(ConfigError::invalid(
                "output.sinks",
                "at least one sink directory is required",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = OutputConfig::default();
        assert_eq!(config.sinks.len(), 2);
        assert!(config.sinks[1].ends_with("medialab"));
        assert!(!config.create_missing_dirs);
    }

    #[test]
    fn empty_sink_list_is_rejected() {
        let config = OutputConfig {
            sinks: Vec::new(),
            create_missing_dirs: true,
        };
        assert!(config.validate().is_err());
    }
}
