use crate::common::file::{FileSpec, write_file};
use crate::common::redirect_temp_dir;
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

pub const BASE_BRANCH: &str = "master";
pub const SOURCE_BRANCH: &str = "feature";
pub const TARGET_BRANCH: &str = "target";

#[fixture]
pub fn repository_dir() -> TempDir {
    redirect_temp_dir();
    TempDir::new().expect("Failed to create temp dir")
}

/// Repository with three branches:
///
/// - `master`: base.txt, shared.txt, docs/readme.md
/// - `feature` (from master): adds x.txt and sub/dir/new.txt, modifies shared.txt
/// - `target` (from master): adds its own x.txt
///
/// HEAD is left on `master` with a clean working tree.
#[fixture]
pub fn repository_with_branches(repository_dir: TempDir) -> TempDir {
    let dir = repository_dir.path();
    init_git_repository(dir);

    write_file(FileSpec::text(dir.join("base.txt"), "base content"));
    write_file(FileSpec::text(dir.join("shared.txt"), "shared on master"));
    write_file(FileSpec::text(dir.join("docs").join("readme.md"), "docs"));
    git_commit_all(dir, "Initial commit");

    git(dir, &["checkout", "-b", SOURCE_BRANCH]);
    write_file(FileSpec::text(dir.join("x.txt"), "hello"));
    write_file(FileSpec::text(dir.join("shared.txt"), "shared on feature"));
    write_file(FileSpec::text(
        dir.join("sub").join("dir").join("new.txt"),
        "nested content",
    ));
    git_commit_all(dir, "Feature work");

    git(dir, &["checkout", BASE_BRANCH]);
    git(dir, &["checkout", "-b", TARGET_BRANCH]);
    write_file(FileSpec::text(
        dir.join("x.txt"),
        "previous content on target",
    ));
    git_commit_all(dir, "Target work");

    git(dir, &["checkout", BASE_BRANCH]);

    repository_dir
}

pub fn init_git_repository(dir: &Path) {
    git(dir, &["init", "--quiet"]);
    git(dir, &["symbolic-ref", "HEAD", "refs/heads/master"]);
    git(dir, &["config", "user.name", "fake_user"]);
    git(dir, &["config", "user.email", "fake_email@email.com"]);
    git(dir, &["config", "commit.gpgsign", "false"]);
}

pub fn run_transplant_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("transplant").expect("Failed to find transplant binary");
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("TRANSPLANT_BASE");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Transplant `feature` onto `target` diffing against `master`, answering the prompt with `answer`.
pub fn transplant_with_answer(dir: &Path, answer: impl AsRef<[u8]>) -> Command {
    let mut cmd = run_transplant_command(
        dir,
        &["--base", BASE_BRANCH, SOURCE_BRANCH, TARGET_BRANCH],
    );
    cmd.write_stdin(answer.as_ref().to_vec());
    cmd
}

pub fn run_git_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new("git");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Runs git, asserts success and returns stdout without trailing whitespace.
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = run_git_command(dir, args)
        .output()
        .unwrap_or_else(|e| panic!("Failed to run git {:?}: {}", args, e));

    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

pub fn git_commit_all(dir: &Path, message: &str) {
    git(dir, &["add", "-A"]);
    run_git_command(dir, &["commit", "--quiet", "-m", message])
        .envs(vec![
            ("GIT_AUTHOR_DATE", "2023-01-01 12:00:00 +0000"),
            ("GIT_COMMITTER_DATE", "2023-01-01 12:00:00 +0000"),
        ])
        .assert()
        .success();
}

pub fn current_branch(dir: &Path) -> String {
    git(dir, &["rev-parse", "--abbrev-ref", "HEAD"])
}

pub fn head_oid(dir: &Path) -> String {
    git(dir, &["rev-parse", "HEAD"])
}

pub fn porcelain_status(dir: &Path) -> String {
    git(dir, &["status", "--porcelain", "--untracked-files=normal"])
}
