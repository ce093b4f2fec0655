//! Writing fixture documents to sink directories.
//!
//! Every sink receives the same three files. Sinks are independent: a failure
//! in one is recorded in its [`SinkReport`] and the next sink is still tried.
//! Nothing is atomic, so a failed sink may hold a partial file set.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use taskseed_config::OutputConfig;
use taskseed_core::documents::{DocumentKind, FixtureSet};

use crate::SinkError;

/// Outcome of writing to one sink directory.
#[derive(Debug, Serialize)]
pub struct SinkReport {
    pub directory: PathBuf,
    /// Files written before success or failure.
    pub written: Vec<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SinkReport {
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// A document rendered once and shared by every sink.
struct Rendered {
    kind: DocumentKind,
    body: String,
}

/// Write `set` to every sink in `output`, returning one report per sink.
///
/// Only rendering failures abort the whole call; I/O failures are per sink.
pub fn write_all(set: &FixtureSet, output: &OutputConfig) -> Result<Vec<SinkReport>, SinkError> {
    let rendered = DocumentKind::ALL
        .into_iter()
        .map(|kind| {
            Ok(Rendered {
                kind,
                body: set.render(kind)?,
            })
        })
        .collect::<Result<Vec<_>, SinkError>>()?;

    let reports = output
        .sinks
        .iter()
        .map(|dir| write_sink(dir, &rendered, output.create_missing_dirs))
        .collect();
    Ok(reports)
}

fn write_sink(dir: &Path, rendered: &[Rendered], create_missing: bool) -> SinkReport {
    let mut written = Vec::with_capacity(rendered.len());
    let result = write_documents(dir, rendered, create_missing, &mut written);

    match &result {
        Ok(()) => tracing::info!(sink = %dir.display(), files = written.len(), "sink written"),
        Err(error) => tracing::warn!(
            sink = %dir.display(),
            files = written.len(),
            %error,
            "sink failed"
        ),
    }

    SinkReport {
        directory: dir.to_path_buf(),
        written,
        error: result.err().map(|error| error.to_string()),
    }
}

fn write_documents(
    dir: &Path,
    rendered: &[Rendered],
    create_missing: bool,
    written: &mut Vec<PathBuf>,
) -> Result<(), SinkError> {
    ensure_directory(dir, create_missing)?;
    for document in rendered {
        let path = dir.join(document.kind.file_name());
        fs::write(&path, &document.body).map_err(|source| SinkError::Write {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "wrote document");
        written.push(path);
    }
    Ok(())
}

fn ensure_directory(dir: &Path, create_missing: bool) -> Result<(), SinkError> {
    if dir.is_dir() {
        return Ok(());
    }
    if !create_missing {
        return Err(SinkError::MissingDirectory(dir.to_path_buf()));
    }
    fs::create_dir_all(dir).map_err(|source| SinkError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}
