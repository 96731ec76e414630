//! Artifact writing: full overwrite for the import and ambiguity files,
//! append-with-banner for the review logs that accumulate across runs.
//!
//! The append-banner logic detects a fresh (absent or empty) file and writes
//! a titled header; later runs get a timestamped banner instead, so the file
//! reads as a history. This detection is not safe under concurrent writers;
//! runs against the same output directory must be serialized externally.

use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("failed to write {artifact} to {path}: {source}")]
    Io {
        artifact: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Destination paths for one run's artifacts, named after the series/exam
/// label so successive exams never collide.
#[derive(Debug, Clone)]
pub struct ArtifactPaths {
    pub import: PathBuf,
    pub ambiguities: PathBuf,
    pub partials: PathBuf,
    pub not_found: PathBuf,
}

impl ArtifactPaths {
    #[must_use]
    pub fn new(out_dir: &Path, label: &str) -> Self {
        Self {
            import: out_dir.join(format!("{label}.txt")),
            ambiguities: out_dir.join(format!("ambiguities {label}.txt")),
            partials: out_dir.join(format!("partial matches {label}.txt")),
            // One shared file across all series and exams
            not_found: out_dir.join("students_not_found.txt"),
        }
    }
}

fn io_error<'a>(
    artifact: &'static str,
    path: &'a Path,
) -> impl FnOnce(std::io::Error) -> WriteError + 'a {
    move |source| WriteError::Io {
        artifact,
        path: path.to_path_buf(),
        source,
    }
}

/// Overwrite `path` with `content`, creating parent directories as needed.
///
/// # Errors
///
/// Returns `WriteError::Io` with the artifact name and destination path.
pub fn write_overwrite(artifact: &'static str, path: &Path, content: &str) -> Result<(), WriteError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_error(artifact, path))?;
    }
    std::fs::write(path, content).map_err(io_error(artifact, path))
}

/// Append `content` to `path`. A fresh or empty file first gets
/// `--- {title} ---`; an existing one gets a timestamped banner so
/// successive runs stay readable.
///
/// # Errors
///
/// Returns `WriteError::Io` with the artifact name and destination path.
pub fn append_with_banner(
    artifact: &'static str,
    path: &Path,
    title: &str,
    content: &str,
) -> Result<(), WriteError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_error(artifact, path))?;
    }

    let fresh = std::fs::metadata(path).map_or(true, |m| m.len() == 0);

    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(io_error(artifact, path))?;

    let banner = if fresh {
        format!("--- {title} ---\n\n")
    } else {
        let now = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        format!("\n--- New entries at {now} ---\n\n")
    };

    file.write_all(banner.as_bytes())
        .and_then(|()| file.write_all(content.as_bytes()))
        .map_err(io_error(artifact, path))
}
