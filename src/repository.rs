//! # Destination Repository Management
//!
//! This module provides `TargetRepository`, which prepares a local checkout
//! of the branch documentation is published to, and later records and pushes
//! the new content.
//!
//! ## Design
//!
//! All git work goes through a [`CommandRunner`], so tests can swap the real
//! `git` binary for a scripted runner.
//!
//! Establishing the checkout is a two-state decision, reported as
//! [`CheckoutKind`]:
//!
//! - **`ExistingBranchClone`**: the shallow, branch-specific clone worked.
//! - **`OrphanBranchInit`**: it did not, which is taken to mean the branch
//!   does not exist yet. The remote's default branch is cloned instead and an
//!   orphan branch with the requested name is created.
//!
//! This is the only failure in the pipeline that is recovered from. Every
//! other git command must succeed.
//!
//! Once the checkout exists, a local committer identity is configured and all
//! tracked files are removed. The next publish therefore replaces the branch
//! content entirely instead of adding to it.

use std::path::Path;
use std::sync::Arc;

use log::{info, warn};
use secrecy::SecretString;

use crate::config::CommitIdentity;
use crate::error::Result;
use crate::filesystem;
use crate::git;
use crate::runner::CommandRunner;

/// How the destination checkout was established.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutKind {
    /// The destination branch already existed and was cloned directly.
    ExistingBranchClone,
    /// The destination branch was created with no shared history.
    OrphanBranchInit,
}

/// Local checkout manager for the destination branch.
pub struct TargetRepository {
    runner: Arc<dyn CommandRunner>,
    identity: CommitIdentity,
}

impl TargetRepository {
    /// Creates a manager that runs git through `runner` and commits as
    /// `identity`.
    pub fn new(runner: Arc<dyn CommandRunner>, identity: CommitIdentity) -> Self {
        Self { runner, identity }
    }

    /// Prepares `working_dir` as an empty checkout of `branch`.
    ///
    /// `working_dir` must exist and be empty. On return it holds a checkout
    /// with a local committer identity and no tracked files.
    pub fn initialize(
        &self,
        repository_url: &str,
        branch: &str,
        working_dir: &Path,
    ) -> Result<CheckoutKind> {
        let kind = self.checkout(repository_url, branch, working_dir)?;

        let identity = &self.identity;
        self.runner
            .run_required(&git::set_config("user.name", &identity.name, working_dir))?;
        self.runner
            .run_required(&git::set_config("user.email", &identity.email, working_dir))?;

        self.runner.run_required(&git::remove_tracked(working_dir))?;

        Ok(kind)
    }

    fn checkout(
        &self,
        repository_url: &str,
        branch: &str,
        working_dir: &Path,
    ) -> Result<CheckoutKind> {
        let status = self
            .runner
            .run(&git::clone_branch(repository_url, branch, working_dir))?;

        if status.success() {
            info!("Cloned existing branch '{}' from {}", branch, repository_url);
            return Ok(CheckoutKind::ExistingBranchClone);
        }

        warn!(
            "Branch '{}' could not be cloned from {}; creating it as an orphan branch",
            branch, repository_url
        );

        // a failed clone can leave a partial .git behind
        filesystem::clear_dir(working_dir)?;

        self.runner
            .run_required(&git::clone_default(repository_url, working_dir))?;
        self.runner
            .run_required(&git::switch_orphan(branch, working_dir))?;

        Ok(CheckoutKind::OrphanBranchInit)
    }

    /// Stages every file currently in `working_dir`, including deletions.
    pub fn stage_all(&self, working_dir: &Path) -> Result<()> {
        self.runner.run_required(&git::add_all(working_dir))
    }

    /// Records a commit. Fails if nothing is staged.
    pub fn commit(&self, message: &str, working_dir: &Path) -> Result<()> {
        info!("Committing '{}'", message);
        self.runner.run_required(&git::commit(message, working_dir))
    }

    /// Pushes `branch` to `repository_url`, authenticating with `token`.
    pub fn push(
        &self,
        repository_url: &str,
        branch: &str,
        token: &SecretString,
        working_dir: &Path,
    ) -> Result<()> {
        let authenticated = git::authenticated_url(repository_url, token)?;
        info!("Pushing branch '{}' to {}", branch, repository_url);
        self.runner
            .run_required(&git::push(authenticated, branch, working_dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::runner::testing::MockRunner;
    use std::fs;
    use tempfile::TempDir;

    const URL: &str = "https://github.com/vpetrigo/caches.git";

    fn manager(runner: &Arc<MockRunner>) -> TargetRepository {
        TargetRepository::new(runner.clone(), CommitIdentity::default())
    }

    fn token(value: &str) -> SecretString {
        SecretString::new(value.into())
    }

    #[test]
    fn test_initialize_existing_branch() {
        let temp = TempDir::new().unwrap();
        let runner = Arc::new(MockRunner::new());

        let kind = manager(&runner)
            .initialize(URL, "gh-pages", temp.path())
            .unwrap();

        assert_eq!(kind, CheckoutKind::ExistingBranchClone);
        let calls = runner.calls();
        assert_eq!(calls.len(), 4);
        assert_eq!(
            calls[0].args,
            vec!["clone", "--depth=1", "--branch", "gh-pages", URL, "."]
        );
        assert!(calls[1].matches("git", &["config", "--local", "user.name", "docupages"]));
        assert!(calls[2].matches("git", &["config", "--local", "user.email"]));
        assert!(calls[3].matches("git", &["rm", "-r", "-q", "--ignore-unmatch"]));
        assert!(calls.iter().all(|call| call.cwd == temp.path()));
        assert_eq!(runner.count("git", &["switch", "--orphan"]), 0);
    }

    #[test]
    fn test_initialize_missing_branch_creates_orphan() {
        let temp = TempDir::new().unwrap();
        let runner =
            Arc::new(MockRunner::new().failing("git", &["clone", "--depth=1", "--branch"], 128));

        let kind = manager(&runner)
            .initialize(URL, "gh-pages", temp.path())
            .unwrap();

        assert_eq!(kind, CheckoutKind::OrphanBranchInit);
        let calls = runner.calls();
        assert_eq!(calls.len(), 6);
        assert_eq!(calls[1].args, vec!["clone", "--depth=1", URL, "."]);
        assert_eq!(calls[2].args, vec!["switch", "--orphan", "gh-pages"]);
        assert!(calls[3].matches("git", &["config", "--local", "user.name"]));
        assert!(calls[5].matches("git", &["rm"]));
    }

    #[test]
    fn test_initialize_missing_branch_clears_partial_clone() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join(".git")).unwrap();
        let runner =
            Arc::new(MockRunner::new().failing("git", &["clone", "--depth=1", "--branch"], 128));

        manager(&runner)
            .initialize(URL, "gh-pages", temp.path())
            .unwrap();

        assert!(!temp.path().join(".git").exists());
    }

    #[test]
    fn test_initialize_default_clone_failure_is_fatal() {
        let temp = TempDir::new().unwrap();
        let runner = Arc::new(MockRunner::new().failing("git", &["clone"], 128));

        let err = manager(&runner)
            .initialize(URL, "gh-pages", temp.path())
            .unwrap_err();

        assert!(matches!(err, Error::CommandFailed { status: Some(128), .. }));
        assert_eq!(runner.count("git", &["clone"]), 2);
        assert_eq!(runner.count("git", &["switch"]), 0);
        assert_eq!(runner.count("git", &["config"]), 0);
    }

    #[test]
    fn test_initialize_orphan_switch_failure_is_fatal() {
        let temp = TempDir::new().unwrap();
        let runner = Arc::new(
            MockRunner::new()
                .failing("git", &["clone", "--depth=1", "--branch"], 128)
                .failing("git", &["switch"], 1),
        );

        let result = manager(&runner).initialize(URL, "gh-pages", temp.path());

        assert!(result.is_err());
        assert_eq!(runner.count("git", &["rm"]), 0);
    }

    #[test]
    fn test_initialize_identity_failure_stops_before_wipe() {
        let temp = TempDir::new().unwrap();
        let runner = Arc::new(MockRunner::new().failing("git", &["config"], 1));

        let err = manager(&runner)
            .initialize(URL, "gh-pages", temp.path())
            .unwrap_err();

        assert!(err.to_string().contains("git config --local user.name"));
        assert_eq!(runner.count("git", &["rm"]), 0);
    }

    #[test]
    fn test_initialize_uses_custom_identity() {
        let temp = TempDir::new().unwrap();
        let runner = Arc::new(MockRunner::new());
        let identity = CommitIdentity {
            name: "Docs Bot".to_string(),
            email: "bot@example.com".to_string(),
        };

        TargetRepository::new(runner.clone(), identity)
            .initialize(URL, "gh-pages", temp.path())
            .unwrap();

        assert_eq!(
            runner.count("git", &["config", "--local", "user.name", "Docs Bot"]),
            1
        );
        assert_eq!(
            runner.count("git", &["config", "--local", "user.email", "bot@example.com"]),
            1
        );
    }

    #[test]
    fn test_stage_all_is_quiet() {
        let runner = Arc::new(MockRunner::new());
        manager(&runner).stage_all(Path::new("/w")).unwrap();

        let calls = runner.calls();
        assert_eq!(calls[0].args, vec!["add", "--all", "."]);
        assert!(calls[0].quiet);
    }

    #[test]
    fn test_commit_passes_message() {
        let runner = Arc::new(MockRunner::new());
        manager(&runner)
            .commit("Update cache documentation", Path::new("/w"))
            .unwrap();

        assert_eq!(
            runner.calls()[0].args,
            vec!["commit", "--quiet", "-m", "Update cache documentation"]
        );
    }

    #[test]
    fn test_commit_with_nothing_staged_fails() {
        let runner = Arc::new(MockRunner::new().failing("git", &["commit"], 1));
        let err = manager(&runner)
            .commit("Update cache documentation", Path::new("/w"))
            .unwrap_err();
        assert!(matches!(err, Error::CommandFailed { status: Some(1), .. }));
    }

    #[test]
    fn test_push_embeds_token() {
        let runner = Arc::new(MockRunner::new());
        manager(&runner)
            .push(URL, "gh-pages", &token("ghp_secret"), Path::new("/w"))
            .unwrap();

        assert_eq!(
            runner.calls()[0].args,
            vec![
                "push",
                "--quiet",
                "https://ghp_secret@github.com/vpetrigo/caches.git",
                "gh-pages"
            ]
        );
    }

    #[test]
    fn test_push_failure_does_not_leak_token() {
        let runner = Arc::new(MockRunner::new().failing("git", &["push"], 1));
        let err = manager(&runner)
            .push(URL, "gh-pages", &token("ghp_secret"), Path::new("/w"))
            .unwrap_err();

        let display = err.to_string();
        assert!(display.contains("git push --quiet *** gh-pages"));
        assert!(!display.contains("ghp_secret"));
    }

    #[test]
    fn test_push_rejects_url_without_separator() {
        let runner = Arc::new(MockRunner::new());
        let result = manager(&runner).push(
            "git@github.com:o/r.git",
            "gh-pages",
            &token("ghp_secret"),
            Path::new("/w"),
        );

        assert!(matches!(result, Err(Error::InvalidRepositoryUrl { .. })));
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn test_token_never_logged() {
        testing_logger::setup();
        let temp = TempDir::new().unwrap();
        let runner = Arc::new(MockRunner::new().failing("git", &["push"], 1));
        let repo = manager(&runner);

        repo.initialize(URL, "gh-pages", temp.path()).unwrap();
        let _ = repo.push(URL, "gh-pages", &token("ghp_secret"), temp.path());

        testing_logger::validate(|captured_logs| {
            assert!(!captured_logs.is_empty());
            for log in captured_logs {
                assert!(!log.body.contains("ghp_secret"), "token leaked: {}", log.body);
            }
        });
    }
}
