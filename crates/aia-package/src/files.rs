//! Writing the project files.

use std::fs;
use std::path::{Path, PathBuf};

use aia_output::{GeneratedFiles, project_properties};
use tracing::{debug, info};

use crate::error::{PackageError, Result};
use crate::layout::ProjectLayout;

/// Fail with every required descriptor that does not exist.
pub fn ensure_required_files(layout: &ProjectLayout) -> Result<()> {
    let missing: Vec<PathBuf> = layout
        .required_files()
        .into_iter()
        .filter(|path| !path.is_file())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(PackageError::MissingPrerequisites { paths: missing })
    }
}

/// Write both descriptors, the assets marker and the properties file.
///
/// Existing files are overwritten in full. Returns the written paths.
pub fn write_generated(layout: &ProjectLayout, files: &GeneratedFiles) -> Result<Vec<PathBuf>> {
    let src_dir = layout.src_dir();
    create_dir(&src_dir)?;
    let scm_path = layout.scm_path();
    write_file(&scm_path, files.scm.as_bytes())?;
    let bky_path = layout.bky_path();
    write_file(&bky_path, files.bky.as_bytes())?;

    let mut written = vec![scm_path, bky_path];
    written.extend(write_support_files(layout, &files.properties)?);
    info!(
        project = layout.name(),
        files = written.len(),
        "wrote generated sources"
    );
    Ok(written)
}

/// Packaging-only path: the marker and properties, leaving the descriptors alone.
pub fn write_marker_and_properties(layout: &ProjectLayout) -> Result<Vec<PathBuf>> {
    write_support_files(layout, &project_properties())
}

fn write_support_files(layout: &ProjectLayout, properties: &str) -> Result<Vec<PathBuf>> {
    create_dir(&layout.assets_dir())?;
    let nomedia = layout.nomedia_path();
    write_file(&nomedia, b"")?;

    create_dir(&layout.properties_dir())?;
    let properties_path = layout.properties_path();
    write_file(&properties_path, properties.as_bytes())?;

    Ok(vec![nomedia, properties_path])
}

fn create_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(PackageError::io(dir))
}

fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    fs::write(path, contents).map_err(PackageError::io(path))?;
    debug!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_descriptors_are_all_listed() {
        let dir = TempDir::new().expect("temp dir");
        let layout = ProjectLayout::new(dir.path());
        match ensure_required_files(&layout) {
            Err(PackageError::MissingPrerequisites { paths }) => {
                assert_eq!(paths, layout.required_files().to_vec());
            }
            other => panic!("expected missing prerequisites, got {other:?}"),
        }
    }

    #[test]
    fn one_missing_descriptor_is_listed_alone() {
        let dir = TempDir::new().expect("temp dir");
        let layout = ProjectLayout::new(dir.path());
        fs::create_dir_all(layout.src_dir()).expect("src dir");
        fs::write(layout.scm_path(), "#|\n$JSON\n{}\n|#").expect("scm");
        match ensure_required_files(&layout) {
            Err(PackageError::MissingPrerequisites { paths }) => {
                assert_eq!(paths, vec![layout.bky_path()]);
            }
            other => panic!("expected missing prerequisites, got {other:?}"),
        }
    }

    #[test]
    fn support_files_overwrite_stale_content() {
        let dir = TempDir::new().expect("temp dir");
        let layout = ProjectLayout::new(dir.path());
        fs::create_dir_all(layout.properties_dir()).expect("properties dir");
        fs::write(layout.properties_path(), "stale=1\n").expect("stale");

        let written = write_marker_and_properties(&layout).expect("write");
        assert_eq!(written, vec![layout.nomedia_path(), layout.properties_path()]);
        assert_eq!(fs::read(layout.nomedia_path()).expect("marker"), b"");
        let properties = fs::read_to_string(layout.properties_path()).expect("properties");
        assert_eq!(properties, project_properties());
        assert!(!layout.scm_path().exists());
    }
}
