//! Subcommand implementations.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use aia_package::{
    ArchiveReport, GitConflicts, MaterializeOptions, MaterializeOutcome, ProjectLayout,
    inspect_archive, materialize, package, render_files,
};

/// Regenerate every project file and rebuild the archive.
pub fn run_generate(
    layout: &ProjectLayout,
    options: MaterializeOptions,
) -> Result<MaterializeOutcome> {
    info!(repo_root = %layout.repo_root().display(), "generating project");
    let files = render_files()?;
    let conflicts = GitConflicts::new(layout.repo_root());
    let outcome = materialize(layout, &files, &conflicts, options)?;
    Ok(outcome)
}

/// Rebuild the archive from the descriptors already on disk.
pub fn run_package(
    layout: &ProjectLayout,
    options: MaterializeOptions,
) -> Result<MaterializeOutcome> {
    info!(repo_root = %layout.repo_root().display(), "packaging project");
    let conflicts = GitConflicts::new(layout.repo_root());
    let outcome = package(layout, &conflicts, options)?;
    Ok(outcome)
}

pub fn run_inspect(archive: &Path) -> Result<ArchiveReport> {
    inspect_archive(archive).with_context(|| format!("inspect {}", archive.display()))
}
