//! `Screen1.scm`: the component tree as a compact JSON mapping wrapped in a
//! block comment.

use anyhow::{Context, Result};

use aia_model::ScreenFile;

pub const SCM_HEADER: &str = "#|\n$JSON\n";
pub const SCM_FOOTER: &str = "\n|#";

pub fn render_scm(file: &ScreenFile) -> Result<String> {
    let json = serde_json::to_string(file).context("serialize screen definition")?;
    Ok(format!("{SCM_HEADER}{json}{SCM_FOOTER}"))
}

/// The JSON payload of an `.scm` document, if it is well formed.
pub fn scm_payload(text: &str) -> Option<&str> {
    text.strip_prefix(SCM_HEADER)?.strip_suffix(SCM_FOOTER)
}
