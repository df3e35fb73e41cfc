//! Text encodings of the generated project files.
//!
//! - **Screen1.scm**: component tree as tagged, compact JSON
//! - **Screen1.bky**: block program as Blockly XML
//! - **project.properties**: fixed `key=value` template
//!
//! Serialization keeps construction order everywhere; nothing is sorted.

mod bky;
mod properties;
mod scm;

use anyhow::Result;
use tracing::debug;

use aia_model::{BlockProgram, ScreenFile};

pub use bky::{BLOCKLY_NS, render_bky};
pub use properties::{project_properties, render_properties};
pub use scm::{SCM_FOOTER, SCM_HEADER, render_scm, scm_payload};

/// The three generated text files of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFiles {
    pub scm: String,
    pub bky: String,
    pub properties: String,
}

pub fn render_project(screen: &ScreenFile, program: &BlockProgram) -> Result<GeneratedFiles> {
    let files = GeneratedFiles {
        scm: render_scm(screen)?,
        bky: render_bky(program)?,
        properties: project_properties(),
    };
    debug!(
        scm_bytes = files.scm.len(),
        bky_bytes = files.bky.len(),
        properties_bytes = files.properties.len(),
        "rendered project files"
    );
    Ok(files)
}
