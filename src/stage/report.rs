use std::fmt;
use std::path::PathBuf;

/// What a successful run put into the output directory.
#[derive(Debug, Clone, Default)]
pub struct StageReport {
    pub output_dir: PathBuf,
    /// The primary file, relative to the output directory
    pub primary: PathBuf,
    /// Steering file names, in the order they were copied
    pub steering: Vec<String>,
    /// Documentation files that existed and were copied
    pub docs: Vec<String>,
    /// Documentation files that were not present in the source tree
    pub skipped: Vec<String>,
}

impl StageReport {
    /// Number of files written to the output directory.
    pub fn file_count(&self) -> usize {
        1 + self.steering.len() + self.docs.len()
    }
}

/// The completion banner, listing the categories of files a power may hold.
impl fmt::Display for StageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dir_name = self
            .output_dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.output_dir.display().to_string());

        writeln!(f, "✅ Build complete! Power files are in {dir_name}/")?;
        writeln!(f)?;
        writeln!(f, "Allowed files in power:")?;
        writeln!(f, "  - {}", self.primary.display())?;
        writeln!(f, "  - steering/*.md")?;
        writeln!(f, "  - README.md (documentation)")?;
        write!(f, "  - *.md (documentation files)")
    }
}
