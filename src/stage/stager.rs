use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::manifest::{Manifest, is_markdown};
use super::report::StageReport;

// =============================================================================
// Errors
// =============================================================================

#[derive(thiserror::Error, Debug)]
pub enum StageError {
    #[error("primary file does not exist: {0}")]
    MissingPrimary(PathBuf),

    #[error("steering directory does not exist: {0}")]
    MissingSteering(PathBuf),

    #[error("failed to remove output directory {path}: {source}")]
    Clean {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read directory entry in {path}: {source}")]
    ReadEntry {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },
}

// =============================================================================
// Stager
// =============================================================================

/// Copies a power's files from a source tree into a freshly emptied output
/// directory.
pub struct Stager {
    manifest: Manifest,
    /// Source tree root; every manifest path is resolved against it
    root: PathBuf,
}

impl Stager {
    pub fn new(manifest: Manifest, root: PathBuf) -> Self {
        Self { manifest, root }
    }

    pub fn output_dir(&self) -> PathBuf {
        self.manifest.output_path(&self.root)
    }

    /// Stage the power.
    ///
    /// The output directory is removed before anything is checked, so a run
    /// that fails on a missing primary file or steering directory leaves no
    /// stale output behind.
    pub fn run(&self) -> Result<StageReport, StageError> {
        // 1. Start from an empty output directory
        let output_dir = self.output_dir();
        remove_output(&output_dir)?;
        let output_steering = output_dir.join(&self.manifest.steering_dir);
        create_dir(&output_dir)?;
        create_dir(&output_steering)?;

        // 2. Primary file
        let primary = self.stage_primary(&output_dir)?;

        // 3. Steering files
        let steering = self.stage_steering(&output_steering)?;

        // 4. Optional documentation files
        let (docs, skipped) = self.stage_docs(&output_dir)?;

        Ok(StageReport {
            output_dir,
            primary,
            steering,
            docs,
            skipped,
        })
    }

    fn stage_primary(&self, output_dir: &Path) -> Result<PathBuf, StageError> {
        let primary = &self.manifest.primary;
        println!("Copying {}...", primary.display());

        let source = self.root.join(primary);
        if !source.exists() {
            return Err(StageError::MissingPrimary(source));
        }
        copy_file(&source, &output_dir.join(primary))?;

        Ok(primary.clone())
    }

    /// Copy every markdown file directly inside the steering directory.
    ///
    /// Files come out in directory enumeration order, which is unspecified.
    fn stage_steering(&self, output_steering: &Path) -> Result<Vec<String>, StageError> {
        println!("Copying steering files...");

        let steering_dir = self.root.join(&self.manifest.steering_dir);
        let entries = std::fs::read_dir(&steering_dir).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound | std::io::ErrorKind::NotADirectory => {
                StageError::MissingSteering(steering_dir.clone())
            }
            _ => StageError::ReadDir {
                path: steering_dir.clone(),
                source: e,
            },
        })?;

        let mut staged = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| StageError::ReadEntry {
                path: steering_dir.clone(),
                source: e,
            })?;

            let file_name = entry.file_name();
            let path = entry.path();
            if !is_markdown(&file_name) || !path.is_file() {
                debug!(path = %path.display(), "skipping steering entry");
                continue;
            }

            let name = file_name.to_string_lossy().into_owned();
            println!("  - {name}");
            copy_file(&path, &output_steering.join(&file_name))?;
            staged.push(name);
        }

        Ok(staged)
    }

    /// Copy each allow-listed file that exists. Missing ones are returned as
    /// skipped rather than treated as errors.
    fn stage_docs(&self, output_dir: &Path) -> Result<(Vec<String>, Vec<String>), StageError> {
        println!("Copying documentation files...");

        let mut copied = Vec::new();
        let mut skipped = Vec::new();
        for doc in &self.manifest.docs {
            let name = doc.display().to_string();
            let source = self.root.join(doc);
            if !source.exists() {
                debug!(path = %source.display(), "documentation file not present");
                skipped.push(name);
                continue;
            }

            println!("  - {name}");
            copy_file(&source, &output_dir.join(doc))?;
            copied.push(name);
        }

        Ok((copied, skipped))
    }
}

/// Remove an output directory and everything under it.
///
/// Returns `false` when there was nothing to remove.
pub fn remove_output(path: &Path) -> Result<bool, StageError> {
    match std::fs::remove_dir_all(path) {
        Ok(()) => {
            info!(path = %path.display(), "removed output directory");
            Ok(true)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(StageError::Clean {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

fn create_dir(path: &Path) -> Result<(), StageError> {
    std::fs::create_dir_all(path).map_err(|e| StageError::CreateDir {
        path: path.to_path_buf(),
        source: e,
    })
}

fn copy_file(from: &Path, to: &Path) -> Result<(), StageError> {
    std::fs::copy(from, to).map_err(|e| StageError::Copy {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source: e,
    })?;
    debug!(from = %from.display(), to = %to.display(), "copied");
    Ok(())
}
