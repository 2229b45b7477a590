//! Stateful repository collaborators
//!
//! - `git`: Runner for the external `git` binary and the queries built on it
//! - `repository`: Coordinates git, the workspace and the output writer
//! - `workspace`: Working directory file system operations

pub mod git;
pub mod repository;
pub mod workspace;
