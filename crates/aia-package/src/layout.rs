//! Where the project lives on disk.

use std::path::{Path, PathBuf};

use aia_schema::project::{
    ARCHIVE_EXTENSION, ASSETS_DIR, NOMEDIA, PACKAGE_PATH, PROJECT_NAME, PROJECTS_DIR,
    PROPERTIES_DIR, PROPERTIES_FILE, SCREEN_BKY, SCREEN_SCM, SOURCE_DIR,
};

/// Paths of one App Inventor project below a repository root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    repo_root: PathBuf,
    name: String,
    package_path: String,
}

impl ProjectLayout {
    /// The Digital Garden controller project under `repo_root`.
    pub fn new(repo_root: impl Into<PathBuf>) -> Self {
        Self::with_project(repo_root, PROJECT_NAME, PACKAGE_PATH)
    }

    /// A project with its own name and `/`-separated package path.
    pub fn with_project(
        repo_root: impl Into<PathBuf>,
        name: impl Into<String>,
        package_path: impl Into<String>,
    ) -> Self {
        Self {
            repo_root: repo_root.into(),
            name: name.into(),
            package_path: package_path.into(),
        }
    }

    pub fn repo_root(&self) -> &Path {
        &self.repo_root
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `<root>/app_inventor/<name>`
    pub fn project_dir(&self) -> PathBuf {
        self.repo_root.join(PROJECTS_DIR).join(&self.name)
    }

    /// Directory holding `Screen1.scm` and `Screen1.bky`.
    pub fn src_dir(&self) -> PathBuf {
        self.package_path
            .split('/')
            .filter(|part| !part.is_empty())
            .fold(self.project_dir().join(SOURCE_DIR), |dir, part| dir.join(part))
    }

    pub fn assets_dir(&self) -> PathBuf {
        self.project_dir().join(ASSETS_DIR)
    }

    pub fn properties_dir(&self) -> PathBuf {
        self.project_dir().join(PROPERTIES_DIR)
    }

    pub fn scm_path(&self) -> PathBuf {
        self.src_dir().join(SCREEN_SCM)
    }

    pub fn bky_path(&self) -> PathBuf {
        self.src_dir().join(SCREEN_BKY)
    }

    pub fn nomedia_path(&self) -> PathBuf {
        self.assets_dir().join(NOMEDIA)
    }

    pub fn properties_path(&self) -> PathBuf {
        self.properties_dir().join(PROPERTIES_FILE)
    }

    /// `<project_dir>/<name>.aia`
    pub fn aia_path(&self) -> PathBuf {
        let file_name = format!("{}.{ARCHIVE_EXTENSION}", self.name);
        self.project_dir().join(file_name)
    }

    /// Hand-authored descriptors that packaging alone cannot produce.
    pub fn required_files(&self) -> [PathBuf; 2] {
        [self.scm_path(), self.bky_path()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_paths() {
        let layout = ProjectLayout::new("/repo");
        let project = PathBuf::from("/repo/app_inventor/DigitalGardenController");
        assert_eq!(layout.project_dir(), project);
        assert_eq!(
            layout.scm_path(),
            project.join("src/appinventor/ai_digitalgarden/DigitalGardenController/Screen1.scm")
        );
        assert_eq!(layout.nomedia_path(), project.join("assets/.nomedia"));
        assert_eq!(
            layout.properties_path(),
            project.join("youngandroidproject/project.properties")
        );
        assert_eq!(layout.aia_path(), project.join("DigitalGardenController.aia"));
    }

    #[test]
    fn custom_project_uses_its_own_name() {
        let layout = ProjectLayout::with_project("/r", "Demo", "appinventor/ai_me/Demo/");
        assert_eq!(
            layout.src_dir(),
            PathBuf::from("/r/app_inventor/Demo/src/appinventor/ai_me/Demo")
        );
        assert_eq!(
            layout.aia_path(),
            PathBuf::from("/r/app_inventor/Demo/Demo.aia")
        );
        assert_eq!(layout.required_files()[1], layout.bky_path());
    }
}
