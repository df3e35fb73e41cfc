//! Writes the App Inventor project to disk and packages it as an `.aia` archive.
//!
//! Two gates guard every run and both run before anything is written:
//!
//! - **Prerequisites**: packaging alone needs both screen descriptors on disk.
//! - **Merge conflicts**: git must report no unmerged paths other than the
//!   archive itself.
//!
//! The archive is rebuilt from the project directory on every run with fixed
//! entry metadata, so identical inputs produce identical bytes.

pub mod archive;
pub mod conflicts;
pub mod error;
pub mod files;
pub mod layout;
pub mod pipeline;

pub use archive::{
    ArchiveEntry, ArchiveMember, ArchiveReport, ProjectFile, collect_project_files,
    inspect_archive, read_archive_members, write_archive,
};
pub use conflicts::{ConflictSource, FixedConflicts, GitConflicts, ensure_no_conflicts};
pub use error::{PackageError, Result};
pub use files::{ensure_required_files, write_generated, write_marker_and_properties};
pub use layout::ProjectLayout;
pub use pipeline::{MaterializeOptions, MaterializeOutcome, materialize, package, render_files};
