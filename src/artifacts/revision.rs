use std::ffi::OsString;
use std::path::Path;

/// Base reference the source branch is diffed against when none is given.
///
/// The right value depends on the repository (usually the shared
/// integration branch of the remote), so it can be overridden with
/// `--base` or `TRANSPLANT_BASE`.
pub const DEFAULT_BASE_REF: &str = "origin/master";

/// A name git can resolve to a commit: a branch, tag, remote ref or oid.
///
/// Only the shape is checked here. Whether the name actually resolves is
/// up to `git rev-parse`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Revision(String);

impl Revision {
    pub fn try_parse(name: &str) -> anyhow::Result<Self> {
        if name.is_empty() {
            anyhow::bail!("revision name cannot be empty");
        }

        // git would read it as an option
        if name.starts_with('-') {
            anyhow::bail!("revision name cannot start with '-': {}", name);
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_commit_spec(&self) -> String {
        format!("{}^{{commit}}", self.0)
    }

    /// `<base>..<self>`
    pub fn range_from(&self, base: &Revision) -> String {
        format!("{}..{}", base.0, self.0)
    }

    /// `<self>:<path>`, keeping the path bytes as they are
    pub fn object_spec(&self, path: &Path) -> OsString {
        let mut spec = OsString::from(format!("{}:", self.0));
        spec.push(path.as_os_str());
        spec
    }
}

impl AsRef<str> for Revision {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Revision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
