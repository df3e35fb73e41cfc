//! In-memory descriptors for an App Inventor project.
//!
//! - [`component`]: the screen and its component tree (`.scm`)
//! - [`block`]: the visual block program (`.bky`)
//! - [`ids`]: per-run identifier counters for both trees

pub mod block;
pub mod component;
pub mod error;
pub mod ids;

pub use block::{
    Block, BlockProgram, Field, Mutation, MutationChild, MutationTag, Position, StatementInput,
    ValueInput,
};
pub use component::{COMPONENTS_KEY, Component, Property, Screen, ScreenFile};
pub use error::{ModelError, Result};
pub use ids::{BlockId, BlockIds, COMPONENT_ID_BASE, ComponentId, ComponentIds};
