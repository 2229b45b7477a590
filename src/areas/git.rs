use crate::artifacts::change_set::{ChangeSet, path_from_bytes};
use crate::artifacts::revision::Revision;
use anyhow::Context;
use derive_new::new;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

const GIT_BINARY: &str = "git";

/// Captured result of a single git invocation
#[derive(Debug, Clone, new)]
pub struct GitOutput {
    pub status: ExitStatus,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl GitOutput {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Trimmed stderr, falling back to the exit status when git printed nothing.
    pub fn failure_reason(&self) -> String {
        let stderr = String::from_utf8_lossy(&self.stderr).trim().to_string();

        if stderr.is_empty() {
            format!("git exited with {}", self.status)
        } else {
            stderr
        }
    }
}

/// Runs `git` inside a fixed working directory.
///
/// Every query the tool needs (revision lookup, name-only diff, blob read,
/// checkout) goes through [`Git::run`], so each one is a blocking call that
/// finishes before the next one starts.
#[derive(Debug)]
pub struct Git {
    work_dir: Box<Path>,
}

impl Git {
    pub fn new(work_dir: Box<Path>) -> Self {
        Git { work_dir }
    }

    pub fn run<S: AsRef<OsStr>>(&self, args: &[S]) -> anyhow::Result<GitOutput> {
        let args = args.iter().map(AsRef::as_ref).collect::<Vec<&OsStr>>();
        tracing::debug!(?args, dir = %self.work_dir.display(), "running git");

        let output = Command::new(GIT_BINARY)
            .args(&args)
            .current_dir(&self.work_dir)
            .output()
            .with_context(|| format!("Failed to run git {:?}", args))?;

        tracing::debug!(status = %output.status, "git finished");

        Ok(GitOutput::new(output.status, output.stdout, output.stderr))
    }

    pub fn top_level(&self) -> anyhow::Result<PathBuf> {
        let output = self.run(&["rev-parse", "--show-toplevel"])?;

        if !output.success() {
            anyhow::bail!(
                "Failed to locate repository root: {}",
                output.failure_reason()
            );
        }

        Ok(path_from_bytes(output.stdout.trim_ascii_end()))
    }

    pub fn verify_revision(&self, revision: &Revision) -> anyhow::Result<()> {
        let commit_spec = revision.as_commit_spec();
        let output = self.run(&["rev-parse", "--verify", commit_spec.as_str()])?;

        if !output.success() {
            anyhow::bail!(
                "Branch '{}' does not exist: {}",
                revision,
                output.failure_reason()
            );
        }

        Ok(())
    }

    /// Paths that differ between `base` and `source`, read straight from the
    /// object database so the source branch never has to be checked out.
    pub fn changed_paths(&self, base: &Revision, source: &Revision) -> anyhow::Result<ChangeSet> {
        let range = source.range_from(base);
        let output = self.run(&["--no-pager", "diff", "--name-only", "-z", range.as_str(), "--"])?;

        if !output.success() {
            anyhow::bail!("Failed to get changed files: {}", output.failure_reason());
        }

        Ok(ChangeSet::parse_name_only(&output.stdout))
    }

    /// Raw blob bytes of `path` at `revision`, with no textconv or filters.
    pub fn show_file(&self, revision: &Revision, path: &Path) -> anyhow::Result<Vec<u8>> {
        let object_spec = revision.object_spec(path);
        let output = self.run(&[OsStr::new("cat-file"), OsStr::new("blob"), object_spec.as_os_str()])?;

        if !output.success() {
            anyhow::bail!(
                "Failed to read {} from {}: {}",
                path.display(),
                revision,
                output.failure_reason()
            );
        }

        Ok(output.stdout)
    }

    pub fn checkout(&self, revision: &Revision) -> anyhow::Result<()> {
        let output = self.run(&["checkout", revision.as_ref(), "--"])?;

        if !output.success() {
            anyhow::bail!(
                "Failed to checkout {}: {}",
                revision,
                output.failure_reason()
            );
        }

        tracing::info!(target_branch = %revision, "checked out target");
        Ok(())
    }
}
