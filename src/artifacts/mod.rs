//! Value types passed between the transplant steps
//!
//! - `revision`: Validated branch/revision names and the default base ref
//! - `change_set`: Ordered list of paths changed on the source branch
//! - `snapshot`: In-memory copy of the source branch content for those paths
//! - `confirmation`: Parsing of the interactive prompt answer

pub mod change_set;
pub mod confirmation;
pub mod revision;
pub mod snapshot;
