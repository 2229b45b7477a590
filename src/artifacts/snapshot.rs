use crate::artifacts::change_set::ChangeSet;
use derive_new::new;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct FileSnapshot {
    pub path: PathBuf,
    pub content: Vec<u8>,
}

/// Full content of every changed path as it exists on the source branch.
///
/// Entries keep the change set order. Paths are unique because the change
/// set is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    files: Vec<FileSnapshot>,
}

impl Snapshot {
    /// Reads every path of `change_set` through `read`.
    ///
    /// The first failing read aborts the capture, so a partial snapshot is
    /// never returned.
    pub fn capture<F>(change_set: &ChangeSet, mut read: F) -> anyhow::Result<Self>
    where
        F: FnMut(&Path) -> anyhow::Result<Vec<u8>>,
    {
        let files = change_set
            .iter()
            .map(|path| -> anyhow::Result<FileSnapshot> {
                Ok(FileSnapshot::new(path.to_path_buf(), read(path)?))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(Snapshot { files })
    }

    pub fn iter(&self) -> impl Iterator<Item = &FileSnapshot> {
        self.files.iter()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
