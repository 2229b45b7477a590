use colored::Colorize;
use derive_new::new;
use std::path::{Path, PathBuf};

/// Builds a path from the raw bytes git prints, without any UTF-8 round trip.
pub fn path_from_bytes(raw: &[u8]) -> PathBuf {
    #[cfg(unix)]
    {
        use std::os::unix::ffi::OsStrExt;
        PathBuf::from(std::ffi::OsStr::from_bytes(raw))
    }

    #[cfg(not(unix))]
    {
        PathBuf::from(String::from_utf8_lossy(raw).into_owned())
    }
}

/// Paths changed on the source branch, in the order git reported them.
///
/// Paths are relative to the repository top level and unique, since they
/// come straight from a single diff.
#[derive(Debug, Clone, Default, PartialEq, Eq, new)]
pub struct ChangeSet {
    paths: Vec<PathBuf>,
}

impl ChangeSet {
    /// Parses `git diff --name-only -z` output.
    ///
    /// Entries are NUL separated; empty entries are dropped.
    pub fn parse_name_only(raw: &[u8]) -> Self {
        let paths = raw
            .split(|byte| *byte == b'\0')
            .filter(|entry| !entry.is_empty())
            .map(path_from_bytes)
            .collect::<Vec<_>>();

        ChangeSet { paths }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl std::fmt::Display for ChangeSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Changed files:")?;

        for path in &self.paths {
            writeln!(f, "  {}", path.to_string_lossy().green())?;
        }

        Ok(())
    }
}
