//! The fixed layout of a power's source tree.
//!
//! Nothing here is discovered or configured at run time except the steering
//! files themselves: the primary file, the steering directory, the optional
//! documentation files, and the output directory are all compiled in.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Suffix a steering file must carry to be staged.
pub const MARKDOWN_SUFFIX: &str = ".md";

const PRIMARY_FILE: &str = "POWER.md";
const STEERING_DIR: &str = "steering";
const OUTPUT_DIR: &str = "dist";
const DOC_FILES: [&str; 3] = ["README.md", "spec-manager-schema.md", "metadata-schema.md"];

/// Which files make up a power, relative to the source root.
#[derive(Debug, Clone)]
pub struct Manifest {
    /// The file that must always be present
    pub primary: PathBuf,
    /// Directory whose markdown files are copied wholesale
    pub steering_dir: PathBuf,
    /// Optional files, copied in this order when present
    pub docs: Vec<PathBuf>,
    /// Where the staged files go; wiped on every run
    pub output_dir: PathBuf,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            primary: PRIMARY_FILE.into(),
            steering_dir: STEERING_DIR.into(),
            docs: DOC_FILES.iter().map(PathBuf::from).collect(),
            output_dir: OUTPUT_DIR.into(),
        }
    }
}

impl Manifest {
    /// Resolve the output directory against a source root.
    pub fn output_path(&self, root: &Path) -> PathBuf {
        root.join(&self.output_dir)
    }
}

/// Whether a file name ends with the markdown suffix.
///
/// Case-sensitive and applied to the whole name, so `notes.MD` and
/// `notes.markdown` are rejected. A bare `.md` is accepted. Names need not
/// be valid UTF-8.
pub fn is_markdown(file_name: &OsStr) -> bool {
    file_name
        .as_encoded_bytes()
        .ends_with(MARKDOWN_SUFFIX.as_bytes())
}
