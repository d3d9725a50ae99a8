//! Output directory preparation

use crate::error::CliError;
use anyhow::{Context, Result};
use artsplit_core::OutputLayout;
use std::fs;
use std::path::Path;

/// Create the output directories, refusing a non-empty output directory
pub fn prepare_output_dirs(layout: &OutputLayout) -> Result<()> {
    let output_dir = effective_dir(&layout.output_dir);
    fs::create_dir_all(output_dir).with_context(|| {
        format!(
            "Error creating output directory {}",
            layout.output_dir.display()
        )
    })?;

    let is_empty = is_dir_empty(output_dir).with_context(|| {
        format!(
            "Error while checking if output directory {} is empty",
            layout.output_dir.display()
        )
    })?;
    if !is_empty {
        return Err(CliError::OutputDirNotEmpty(layout.output_dir.clone()).into());
    }

    fs::create_dir_all(effective_dir(&layout.duplicates_dir)).with_context(|| {
        format!(
            "Error creating duplicates directory {}",
            layout.duplicates_dir.display()
        )
    })?;

    log::debug!(
        "Prepared output directory {} (duplicates in {})",
        layout.output_dir.display(),
        layout.duplicates_dir.display()
    );
    Ok(())
}

fn effective_dir(dir: &Path) -> &Path {
    if dir.as_os_str().is_empty() {
        Path::new(".")
    } else {
        dir
    }
}

fn is_dir_empty(dir: &Path) -> std::io::Result<bool> {
    Ok(fs::read_dir(dir)?.next().is_none())
}
