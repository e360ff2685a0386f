use std::path::Path;

use crate::{
    CleanArgs,
    stage::{Manifest, remove_output},
};

pub fn run(root: &Path, args: &CleanArgs) -> Result<(), anyhow::Error> {
    let output_dir = Manifest::default().output_path(root);
    if !output_dir.exists() {
        return Ok(());
    }

    if args.dry_run {
        println!("Would delete {}", output_dir.display());
    } else if remove_output(&output_dir)? {
        println!("Deleted {}", output_dir.display());
    }

    Ok(())
}
