//! Error types for generation, sinks, and fixture audits.

use std::path::PathBuf;

use chrono::NaiveDate;
use taskseed_config::ConfigError;
use taskseed_core::errors::CoreError;
use thiserror::Error;

/// Errors from drawing names out of a pool.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PoolError {
    /// Every entry has already been drawn.
    #[error("{pool} pool exhausted after {drawn} draws")]
    Exhausted { pool: &'static str, drawn: usize },
}

/// Errors from a fabrication run.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// A pool cannot cover every task slot.
    #[error("{pool} pool holds {size} names but {tasks} tasks are requested")]
    PoolTooSmall {
        pool: &'static str,
        size: usize,
        tasks: usize,
    },

    /// More distinct sentences were requested than the vocabulary holds.
    #[error("requested {requested} distinct sentences from a vocabulary of {available}")]
    VocabularyTooSmall { requested: usize, available: usize },

    /// No day lies strictly between the reference date and the horizon.
    #[error("no long-term deadline fits between {today} and horizon {horizon} (exclusive)")]
    HorizonElapsed { today: NaiveDate, horizon: NaiveDate },

    /// Date arithmetic left chrono's representable range.
    #[error("date out of range: {base} offset by {days} days")]
    DateOutOfRange { base: NaiveDate, days: i64 },

    /// The OS entropy source failed while drawing a seed.
    #[error("failed to draw an entropy seed: {0}")]
    Entropy(String),

    #[error(transparent)]
    Pool(#[from] PoolError),

    /// The generation settings failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors from writing fixture documents to a sink directory.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The sink directory does not exist and creation is disabled.
    #[error("sink directory does not exist: {}", .0.display())]
    MissingDirectory(PathBuf),

    #[error("failed to create sink directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A document could not be rendered to JSON.
    #[error(transparent)]
    Render(#[from] CoreError),
}

/// Errors from loading an emitted fixture directory.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
