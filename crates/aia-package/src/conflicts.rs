//! Merge-conflict gate.
//!
//! Packaging a tree with unresolved conflict markers produces a project App
//! Inventor cannot import, so the gate refuses to write anything while git
//! reports unmerged paths.

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::process::Command;

use tracing::{debug, warn};

use crate::error::{PackageError, Result};
use crate::layout::ProjectLayout;

/// Reports paths with unresolved merge conflicts, relative to the repo root.
pub trait ConflictSource {
    fn conflicted_paths(&self) -> Result<Vec<PathBuf>>;
}

/// Asks git for unmerged index entries (`git ls-files -u -z`).
#[derive(Debug, Clone)]
pub struct GitConflicts {
    repo_root: PathBuf,
}

impl GitConflicts {
    pub fn new(repo_root: impl Into<PathBuf>) -> Self {
        Self {
            repo_root: repo_root.into(),
        }
    }
}

impl ConflictSource for GitConflicts {
    fn conflicted_paths(&self) -> Result<Vec<PathBuf>> {
        let output = Command::new("git")
            .args(["ls-files", "-u", "-z"])
            .current_dir(&self.repo_root)
            .output()
            .map_err(|err| PackageError::ConflictQuery {
                message: format!("could not run git: {err}"),
            })?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PackageError::ConflictQuery {
                message: format!(
                    "git ls-files -u failed ({}): {}",
                    output.status,
                    stderr.trim()
                ),
            });
        }
        Ok(parse_unmerged(&String::from_utf8_lossy(&output.stdout)))
    }
}

/// A fixed list of conflicted paths.
#[derive(Debug, Clone, Default)]
pub struct FixedConflicts(pub Vec<PathBuf>);

impl ConflictSource for FixedConflicts {
    fn conflicted_paths(&self) -> Result<Vec<PathBuf>> {
        Ok(self.0.clone())
    }
}

/// Parse NUL-terminated `<mode> <hash> <stage>\t<path>` records into sorted,
/// unique paths. Paths are taken verbatim, without git's C-style quoting.
pub fn parse_unmerged(listing: &str) -> Vec<PathBuf> {
    listing
        .split('\0')
        .filter_map(|record| record.split_once('\t'))
        .map(|(_, path)| path)
        .filter(|path| !path.is_empty())
        .map(PathBuf::from)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Fail with every conflicted path except the archive itself.
///
/// The archive is rebuilt from scratch on every run, so a conflict on it is
/// resolved by packaging.
pub fn ensure_no_conflicts(layout: &ProjectLayout, source: &impl ConflictSource) -> Result<()> {
    let aia_path = layout.aia_path();
    let mut blocking = Vec::new();
    for path in source.conflicted_paths()? {
        if layout.repo_root().join(&path) == aia_path {
            debug!(path = %path.display(), "ignoring conflict on the generated archive");
        } else {
            blocking.push(path);
        }
    }
    if blocking.is_empty() {
        return Ok(());
    }
    blocking.sort();
    blocking.dedup();
    warn!(count = blocking.len(), "unresolved merge conflicts");
    Err(PackageError::MergeConflicts { paths: blocking })
}
