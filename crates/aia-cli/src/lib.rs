//! Library side of the `aia-materializer` command.

pub mod commands;
pub mod logging;
pub mod summary;
