//! Project-level constants: names, directory layout and the properties template.

/// Project (and app) name.
pub const PROJECT_NAME: &str = "DigitalGardenController";
pub const APP_TITLE: &str = "Digital Garden Controller";

/// Java-style package of the screen sources, `/`-separated.
pub const PACKAGE_PATH: &str = "appinventor/ai_digitalgarden/DigitalGardenController";

/// Directory under the repository root that holds App Inventor projects.
pub const PROJECTS_DIR: &str = "app_inventor";
pub const SOURCE_DIR: &str = "src";
pub const ASSETS_DIR: &str = "assets";
pub const PROPERTIES_DIR: &str = "youngandroidproject";

pub const SCREEN_SCM: &str = "Screen1.scm";
pub const SCREEN_BKY: &str = "Screen1.bky";
pub const NOMEDIA: &str = ".nomedia";
pub const PROPERTIES_FILE: &str = "project.properties";
pub const ARCHIVE_EXTENSION: &str = "aia";

/// `.scm` envelope values.
pub const AUTH_URL: [&str; 2] = ["*UNKNOWN*", "digitalgarden"];
pub const YA_VERSION: &str = "213";
pub const SCM_SOURCE: &str = "Form";

/// Screen-level designer properties, in serialization order.
pub const SCREEN_PROPERTIES: &[(&str, &str)] = &[
    ("AppName", PROJECT_NAME),
    ("Title", APP_TITLE),
    ("Scrollable", "True"),
    ("Sizing", "Responsive"),
    ("Theme", "AppTheme.Light.DarkActionBar"),
    ("ShowListsAsJson", "True"),
];

/// `project.properties` entries, in file order.
pub const PROJECT_PROPERTIES: &[(&str, &str)] = &[
    (
        "main",
        "appinventor.ai_digitalgarden.DigitalGardenController.Screen1",
    ),
    ("name", PROJECT_NAME),
    ("assets", "../assets"),
    ("source", "../src"),
    ("build", "../build"),
    ("versioncode", "1"),
    ("versionname", "1.0"),
    ("useslocation", "False"),
    ("aname", PROJECT_NAME),
    ("sizing", "Responsive"),
    ("showlistsasjson", "True"),
    ("actionbar", "True"),
    ("theme", "AppTheme.Light.DarkActionBar"),
    ("color.primary", "&HFF2196F3"),
    ("color.primary.dark", "&HFF1565C0"),
    ("color.accent", "&HFFFFC107"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_class_matches_package_path() {
        let main = PROJECT_PROPERTIES
            .iter()
            .find(|(key, _)| *key == "main")
            .map(|(_, value)| *value)
            .expect("main entry");
        assert_eq!(main, format!("{}.Screen1", PACKAGE_PATH.replace('/', ".")));
    }
}
