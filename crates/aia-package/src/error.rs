//! Error types for writing and packaging the project.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that abort a materialize or package run.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PackageError {
    /// Hand-authored descriptors required for packaging are absent.
    #[error("the App Inventor sources are incomplete, missing:\n{}", bullet_list(.paths))]
    MissingPrerequisites { paths: Vec<PathBuf> },

    /// Git reports unresolved merge conflicts.
    #[error("resolve the git merge conflicts below before packaging:\n{}", bullet_list(.paths))]
    MergeConflicts { paths: Vec<PathBuf> },

    /// The conflict query itself could not run.
    #[error("failed to query git for conflicts: {message}")]
    ConflictQuery { message: String },

    /// Filesystem operation failed.
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing or reading the archive failed.
    #[error("archive error: {0}")]
    Archive(String),

    /// Building or serializing the project trees failed.
    #[error("failed to render the project files: {0}")]
    Render(String),
}

impl PackageError {
    pub(crate) fn io(path: &Path) -> impl FnOnce(std::io::Error) -> Self + '_ {
        move |source| Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// The error text followed by the steps that fix it, when there are any.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self.remediation() {
            Some(steps) => format!("{self}\n\n{steps}"),
            None => self.to_string(),
        }
    }

    fn remediation(&self) -> Option<&'static str> {
        match self {
            Self::MissingPrerequisites { .. } => Some(
                "If they were deleted, restore them with `git checkout -- app_inventor`, \
                 or run `aia-materializer generate` to regenerate them.",
            ),
            Self::MergeConflicts { .. } => Some(
                "Open each file, remove the `<<<<<<<`, `=======`, and `>>>>>>>` markers, \
                 choose the correct blocks of text, then run:\n  \
                 git add <each resolved file>\n  \
                 aia-materializer package\n\
                 Once the helper succeeds you can commit and continue your merge or rebase.",
            ),
            Self::ConflictQuery { .. } | Self::Io { .. } | Self::Archive(_) | Self::Render(_) => {
                None
            }
        }
    }

    /// Whether the user can fix this without changing the tool.
    #[must_use]
    pub fn is_user_recoverable(&self) -> bool {
        matches!(
            self,
            Self::MissingPrerequisites { .. } | Self::MergeConflicts { .. }
        )
    }
}

impl From<zip::result::ZipError> for PackageError {
    fn from(err: zip::result::ZipError) -> Self {
        Self::Archive(err.to_string())
    }
}

fn bullet_list(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| format!("  - {}", path.display()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Result type alias for packaging operations.
pub type Result<T> = std::result::Result<T, PackageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_message_lists_every_path() {
        let err = PackageError::MergeConflicts {
            paths: vec![PathBuf::from("a.txt"), PathBuf::from("dir/b.txt")],
        };
        let message = err.to_string();
        assert!(message.contains("  - a.txt"));
        assert!(message.contains("  - dir/b.txt"));
        let full = err.user_message();
        assert!(full.starts_with(&message));
        assert!(full.contains("git add <each resolved file>"));
        assert!(full.contains("`<<<<<<<`"));
    }

    #[test]
    fn recoverable_errors() {
        assert!(PackageError::MissingPrerequisites { paths: vec![] }.is_user_recoverable());
        assert!(PackageError::MergeConflicts { paths: vec![] }.is_user_recoverable());
        let query = PackageError::ConflictQuery {
            message: "not a git repository".to_string(),
        };
        assert!(!query.is_user_recoverable());
        assert_eq!(query.user_message(), query.to_string());
    }
}
