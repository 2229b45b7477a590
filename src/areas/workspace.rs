use crate::artifacts::snapshot::Snapshot;
use anyhow::Context;
use std::io::Write;
use std::path::Path;

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    /// Writes every snapshot entry, stopping at the first failure.
    ///
    /// Files written before the failure are left in place.
    pub fn apply_snapshot(&self, snapshot: &Snapshot) -> anyhow::Result<usize> {
        snapshot
            .iter()
            .map(|file| self.write_file(&file.path, &file.content))
            .collect::<anyhow::Result<Vec<()>>>()?;

        Ok(snapshot.len())
    }

    pub fn write_file(&self, file_path: &Path, data: &[u8]) -> anyhow::Result<()> {
        let path = self.path.join(file_path);

        // parent directories first, nested ones included
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create parent directories for {:?}", file_path)
            })?;
        }

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .with_context(|| format!("Failed to open file: {:?}", file_path))?;

        file.write_all(data)
            .with_context(|| format!("Failed to write to file: {:?}", file_path))?;

        tracing::debug!(path = %file_path.display(), bytes = data.len(), "wrote file");
        Ok(())
    }
}
