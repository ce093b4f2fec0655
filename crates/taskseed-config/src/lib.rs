//! # taskseed-config
//!
//! Layered configuration loading for taskseed using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TASKSEED_*` prefix, `__` as separator)
//! 2. Project-level `.taskseed/config.toml`
//! 3. User-level `~/.config/taskseed/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `TASKSEED_GENERATION__SEED` -> `generation.seed`,
//! `TASKSEED_OUTPUT__CREATE_MISSING_DIRS` -> `output.create_missing_dirs`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use taskseed_config::SeedConfig;
//!
//! let config = SeedConfig::load_with_dotenv().expect("config");
//! config.validate().expect("valid config");
//!
//! for sink in &config.output.sinks {
//!     println!("writing to {}", sink.display());
//! }
//! ```

mod error;
mod generation;
mod output;

pub use error::ConfigError;
pub use generation::GenerationConfig;
pub use output::OutputConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct SeedConfig {
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl SeedConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need `.env` file loading.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can add providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".taskseed/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("TASKSEED_").split("__"))
    }

    /// Check every section for values that would fail a run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.generation.validate()?;
        self.output.validate()
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("taskseed").join("config.toml"))
    }

    /// Load `.env` from the workspace root, falling back to the current dir.
    ///
    /// Silently does nothing if no `.env` is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate -> crates/ -> workspace root
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}
