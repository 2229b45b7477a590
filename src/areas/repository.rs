use crate::areas::git::Git;
use crate::areas::workspace::Workspace;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::Path;

pub struct Repository {
    writer: RefCell<Box<dyn std::io::Write>>,
    git: Git,
    workspace: Workspace,
}

impl Repository {
    /// Opens the repository containing `path`.
    ///
    /// Git runs from `path` itself, while the workspace is rooted at the
    /// repository top level because diff paths are relative to it.
    pub fn new(path: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = path
            .canonicalize()
            .with_context(|| format!("Failed to resolve directory {:?}", path))?;

        let git = Git::new(path.into_boxed_path());
        let top_level = git.top_level()?;
        let workspace = Workspace::new(top_level.into_boxed_path());

        Ok(Repository {
            writer: RefCell::new(writer),
            git,
            workspace,
        })
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn git(&self) -> &Git {
        &self.git
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }
}
