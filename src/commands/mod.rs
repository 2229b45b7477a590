//! Command implementations
//!
//! - `transplant`: Copy the files changed on a source branch onto a target branch

pub mod transplant;
