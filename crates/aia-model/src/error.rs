use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("duplicate block id {0}")]
    DuplicateBlockId(String),
    #[error("duplicate component name {0}")]
    DuplicateComponentName(String),
    #[error("block program references unknown component {0}")]
    UnknownComponent(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
