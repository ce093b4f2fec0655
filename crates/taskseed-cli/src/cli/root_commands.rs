use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Fabricate a fixture set and write it to every sink directory.
    Generate(GenerateArgs),
    /// Audit an emitted fixture directory against the application's load rules.
    Check(CheckArgs),
    /// Dump the JSON schema of a fixture document.
    Schema(SchemaArgs),
}

/// Arguments for `taskseed generate`.
#[derive(Clone, Debug, Args)]
pub struct GenerateArgs {
    /// RNG seed (overrides `generation.seed`).
    #[arg(long)]
    pub seed: Option<u64>,
    /// Reference date, YYYY-MM-DD (defaults to the local date).
    #[arg(long)]
    pub today: Option<NaiveDate>,
    /// Sink directory; repeat for several. Replaces `output.sinks`.
    #[arg(long = "out", value_name = "DIR")]
    pub out: Vec<PathBuf>,
    /// Create missing sink directories.
    #[arg(long)]
    pub create_dirs: bool,
}

/// Arguments for `taskseed check`.
#[derive(Clone, Debug, Args)]
pub struct CheckArgs {
    /// Directory holding categories.json, priorities.json and tasks.json.
    pub dir: PathBuf,
    /// Reference date, YYYY-MM-DD (defaults to the local date).
    #[arg(long)]
    pub today: Option<NaiveDate>,
}

/// Arguments for `taskseed schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Document name: categories, priorities, or tasks.
    pub document: String,
}
