//! `youngandroidproject/project.properties`.

use aia_schema::project::PROJECT_PROPERTIES;

/// One `key=value` line per entry, in the given order, newline terminated.
pub fn render_properties(entries: &[(&str, &str)]) -> String {
    let mut out = String::new();
    for (key, value) in entries {
        out.push_str(key);
        out.push('=');
        out.push_str(value);
        out.push('\n');
    }
    out
}

pub fn project_properties() -> String {
    render_properties(PROJECT_PROPERTIES)
}
