//! The two entry points: full generation and packaging only.

use std::path::PathBuf;

use aia_build::build_project;
use aia_output::{GeneratedFiles, render_project};
use tracing::{info, info_span};

use crate::archive::{ArchiveReport, write_archive};
use crate::conflicts::{ConflictSource, ensure_no_conflicts};
use crate::error::{PackageError, Result};
use crate::files::{ensure_required_files, write_generated, write_marker_and_properties};
use crate::layout::ProjectLayout;

/// Switches for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterializeOptions {
    /// Refuse to write while git reports unresolved conflicts.
    pub check_conflicts: bool,
}

impl Default for MaterializeOptions {
    fn default() -> Self {
        Self {
            check_conflicts: true,
        }
    }
}

/// What a run wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializeOutcome {
    pub written: Vec<PathBuf>,
    pub archive: ArchiveReport,
}

/// Build both trees and serialize them.
pub fn render_files() -> Result<GeneratedFiles> {
    let trees = build_project().map_err(|err| PackageError::Render(err.to_string()))?;
    render_project(&trees.screen, &trees.program)
        .map_err(|err| PackageError::Render(format!("{err:#}")))
}

/// Write every generated file, then archive the project directory.
pub fn materialize(
    layout: &ProjectLayout,
    generated: &GeneratedFiles,
    conflicts: &impl ConflictSource,
    options: MaterializeOptions,
) -> Result<MaterializeOutcome> {
    let span = info_span!("materialize", project = layout.name());
    let _guard = span.enter();

    if options.check_conflicts {
        ensure_no_conflicts(layout, conflicts)?;
    }
    let written = write_generated(layout, generated)?;
    let archive = write_archive(layout)?;
    info!(
        files = written.len(),
        entries = archive.entries.len(),
        "materialized project"
    );
    Ok(MaterializeOutcome { written, archive })
}

/// Re-archive hand-edited descriptors, refreshing only the marker and properties.
pub fn package(
    layout: &ProjectLayout,
    conflicts: &impl ConflictSource,
    options: MaterializeOptions,
) -> Result<MaterializeOutcome> {
    let span = info_span!("package", project = layout.name());
    let _guard = span.enter();

    ensure_required_files(layout)?;
    if options.check_conflicts {
        ensure_no_conflicts(layout, conflicts)?;
    }
    let written = write_marker_and_properties(layout)?;
    let archive = write_archive(layout)?;
    info!(entries = archive.entries.len(), "packaged project");
    Ok(MaterializeOutcome { written, archive })
}
