//! Schema-driven construction of the `Screen1` component tree and block program.
//!
//! Construction is pure: no I/O, no clock, no randomness. Identifier counters
//! live inside the builders, so every call to [`build_project`] starts over and
//! produces equal trees.

pub mod blocks;
pub mod components;
pub mod program;

use aia_model::{BlockProgram, Result, ScreenFile};
use tracing::debug;

pub use blocks::{ArithmeticOp, BlockFactory, CompareOp};
pub use components::{ComponentBuilder, build_screen_file};
pub use program::build_program;

/// Both trees of one screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectTrees {
    pub screen: ScreenFile,
    pub program: BlockProgram,
}

impl ProjectTrees {
    /// Names a block may reference: the screen plus every component.
    pub fn known_components(&self) -> Vec<&str> {
        let screen = &self.screen.properties;
        let mut names = vec![screen.name.as_str()];
        names.extend(screen.component_names());
        names
    }
}

/// Build and cross-check the component tree and block program.
pub fn build_project() -> Result<ProjectTrees> {
    let screen = build_screen_file();
    let program = build_program();
    let trees = ProjectTrees { screen, program };

    trees.screen.properties.validate_names()?;
    trees.program.validate_ids()?;
    trees.program.validate_references(&trees.known_components())?;

    debug!(
        components = trees.screen.properties.components().count(),
        top_level_blocks = trees.program.blocks.len(),
        blocks = trees.program.block_count(),
        "built project trees"
    );
    Ok(trees)
}
