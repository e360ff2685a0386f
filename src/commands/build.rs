use std::path::Path;

use crate::stage::{Manifest, Stager};

pub fn run(root: &Path) -> Result<(), anyhow::Error> {
    let stager = Stager::new(Manifest::default(), root.to_path_buf());
    let report = stager.run()?;

    tracing::info!(
        output = %report.output_dir.display(),
        files = report.file_count(),
        skipped = report.skipped.len(),
        "staged power"
    );

    println!();
    println!("{report}");

    Ok(())
}
