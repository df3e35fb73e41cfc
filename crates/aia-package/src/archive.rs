//! The `.aia` archive: a deflate zip of the project directory.
//!
//! Entries carry a fixed timestamp and fixed permissions so that packaging the
//! same tree twice yields byte-identical archives.

use std::fs::{self, File};
use std::io::{Cursor, Read, Write};
use std::path::{Component, Path, PathBuf};

use sha2::{Digest, Sha256};
use tracing::{debug, info};
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipArchive, ZipWriter};

use crate::error::{PackageError, Result};
use crate::layout::ProjectLayout;

/// Permission bits stored for every entry.
const ENTRY_PERMISSIONS: u32 = 0o644;

/// A regular file below the project directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFile {
    pub path: PathBuf,
    pub relative: PathBuf,
}

impl ProjectFile {
    /// Archive entry name: the relative path with `/` separators.
    pub fn entry_name(&self) -> String {
        self.relative
            .components()
            .filter_map(|component| match component {
                Component::Normal(part) => Some(part.to_string_lossy()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// One member of a written archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub name: String,
    pub size: u64,
    pub sha256: String,
}

impl ArchiveEntry {
    fn describe(name: String, contents: &[u8]) -> Self {
        Self {
            name,
            size: contents.len() as u64,
            sha256: hex::encode(Sha256::digest(contents)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveReport {
    pub path: PathBuf,
    pub entries: Vec<ArchiveEntry>,
}

impl ArchiveReport {
    pub fn total_size(&self) -> u64 {
        self.entries.iter().map(|entry| entry.size).sum()
    }
}

/// A member read back from an archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveMember {
    pub name: String,
    pub contents: Vec<u8>,
}

/// Every regular file under `project_dir` except `exclude`, sorted by relative path.
///
/// Symlinks are followed, so a linked asset is archived under the link's path.
pub fn collect_project_files(project_dir: &Path, exclude: &Path) -> Result<Vec<ProjectFile>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(project_dir)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|err| {
            let path = err
                .path()
                .map_or_else(|| project_dir.to_path_buf(), Path::to_path_buf);
            PackageError::Io {
                path,
                source: err.into(),
            }
        })?;
        if !entry.file_type().is_file() || entry.path() == exclude {
            continue;
        }
        let relative = entry.path().strip_prefix(project_dir).map_err(|_| {
            PackageError::Archive(format!(
                "{} is outside {}",
                entry.path().display(),
                project_dir.display()
            ))
        })?;
        files.push(ProjectFile {
            path: entry.path().to_path_buf(),
            relative: relative.to_path_buf(),
        });
    }
    files.sort_by(|a, b| a.relative.cmp(&b.relative));
    Ok(files)
}

/// Rebuild the archive from the current contents of the project directory.
///
/// The archive is assembled in memory and written in one step, replacing any
/// previous archive.
pub fn write_archive(layout: &ProjectLayout) -> Result<ArchiveReport> {
    let project_dir = layout.project_dir();
    let aia_path = layout.aia_path();
    let files = collect_project_files(&project_dir, &aia_path)?;

    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default())
        .unix_permissions(ENTRY_PERMISSIONS);

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let mut entries = Vec::with_capacity(files.len());
    for file in &files {
        let contents = fs::read(&file.path).map_err(PackageError::io(&file.path))?;
        let name = file.entry_name();
        writer.start_file(name.clone(), options)?;
        writer
            .write_all(&contents)
            .map_err(|err| PackageError::Archive(format!("failed to add {name}: {err}")))?;
        debug!(entry = %name, bytes = contents.len(), "archived file");
        entries.push(ArchiveEntry::describe(name, &contents));
    }
    let bytes = writer.finish()?.into_inner();

    fs::write(&aia_path, &bytes).map_err(PackageError::io(&aia_path))?;
    info!(
        path = %aia_path.display(),
        entries = entries.len(),
        bytes = bytes.len(),
        "wrote archive"
    );
    Ok(ArchiveReport {
        path: aia_path,
        entries,
    })
}

/// Member names and contents of an archive, in archive order.
pub fn read_archive_members(path: &Path) -> Result<Vec<ArchiveMember>> {
    let file = File::open(path).map_err(PackageError::io(path))?;
    let mut archive = ZipArchive::new(file)?;
    let mut members = Vec::with_capacity(archive.len());
    for index in 0..archive.len() {
        let mut member = archive.by_index(index)?;
        let name = member.name().to_string();
        let mut contents = Vec::new();
        member.read_to_end(&mut contents).map_err(PackageError::io(path))?;
        members.push(ArchiveMember { name, contents });
    }
    Ok(members)
}

/// Describe an existing archive the way [`write_archive`] reports it.
pub fn inspect_archive(path: &Path) -> Result<ArchiveReport> {
    let entries = read_archive_members(path)?
        .into_iter()
        .map(|member| ArchiveEntry::describe(member.name, &member.contents))
        .collect();
    Ok(ArchiveReport {
        path: path.to_path_buf(),
        entries,
    })
}
