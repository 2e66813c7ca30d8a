//! Shared test utilities for integration and E2E tests.
//!
//! This module provides fixtures for a documentation tree whose generator
//! outputs already exist, plus helpers for local git remotes.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! let fixture = TestFixture::new().with_prebuilt_docs();
//! let remote = fixture.bare_remote();
//! fixture.publish_command(&remote).arg("--dry-run").assert().success();
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_cmd::cargo::cargo_bin_cmd;
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::{file_url, git, git_output, TestFixture, TOKEN};
}

/// Token passed to every test publish.
pub const TOKEN: &str = "ghp_0123456789abcdefghij";

/// Runs git in `dir` and panics on failure.
#[allow(dead_code)]
pub fn git(dir: &Path, args: &[&str]) {
    let status = Command::new("git")
        .args(["-c", "user.name=Test", "-c", "user.email=test@example.com"])
        .args(args)
        .current_dir(dir)
        .status()
        .expect("Failed to run git");
    assert!(status.success(), "git {:?} failed in {}", args, dir.display());
}

/// Runs git in `dir` and returns its trimmed stdout.
#[allow(dead_code)]
pub fn git_output(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run git");
    assert!(output.status.success(), "git {:?} failed", args);
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// `file://` URL of a local path.
#[allow(dead_code)]
pub fn file_url(path: &Path) -> String {
    format!("file://{}", path.display())
}

/// A temporary project directory.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Lay out `docs/` as if both generators had already run, so `true` can
    /// stand in for them.
    #[allow(dead_code)]
    pub fn with_prebuilt_docs(self) -> Self {
        self.with_file("docs/doxygen/Doxyfile", "PROJECT_NAME = cache\n")
            .with_file("docs/doxygen/html/index.html", "<html>api</html>")
            .with_file("docs/mkdocs/mkdocs.yml", "site_name: cache\n")
            .with_file("docs/mkdocs/docs/index.md", "# cache\n")
            .with_file("docs/html/index.html", "<html>site</html>")
            .with_file("docs/html/doxygen/index.html", "<html>api</html>")
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a child path in the temp directory.
    #[allow(dead_code)]
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// Creates a bare repository with one commit on `main` and returns its
    /// path.
    #[allow(dead_code)]
    pub fn bare_remote(&self) -> PathBuf {
        let seed = self.path().join("seed");
        std::fs::create_dir_all(&seed).expect("Failed to create seed directory");
        git(&seed, &["init", "--quiet", "--initial-branch=main"]);
        std::fs::write(seed.join("README.md"), "# cache\n").expect("Failed to write README");
        git(&seed, &["add", "README.md"]);
        git(&seed, &["commit", "--quiet", "-m", "Initial commit"]);

        let remote = self.path().join("remote.git");
        git(
            self.path(),
            &["clone", "--quiet", "--bare", "seed", "remote.git"],
        );
        remote
    }

    /// Create a command configured to run in this fixture's directory.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("docupages");
        cmd.current_dir(self.path());
        cmd.env_remove("RUST_LOG");
        cmd
    }

    /// A publish of `docs/` to `gh-pages` of `remote`, with `true` standing
    /// in for both generators.
    #[allow(dead_code)]
    pub fn publish_command(&self, remote: &Path) -> assert_cmd::Command {
        self.publish_command_with(remote, "true", "true")
    }

    /// Like [`publish_command`](Self::publish_command), running the given
    /// programs as the API-reference and static-site generators.
    #[allow(dead_code)]
    pub fn publish_command_with(
        &self,
        remote: &Path,
        doxygen: &str,
        mkdocs: &str,
    ) -> assert_cmd::Command {
        let mut cmd = self.command();
        cmd.arg("--repo")
            .arg(file_url(remote))
            .args(["--branch", "gh-pages"])
            .args(["--token", TOKEN])
            .args(["--commit", "cache"])
            .args(["--doxygen", doxygen, "--mkdocs", mkdocs])
            .args(["--color", "never"]);
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_creates_temp_dir() {
        let fixture = TestFixture::new();
        assert!(fixture.path().exists());
    }

    #[test]
    fn test_fixture_with_prebuilt_docs() {
        let fixture = TestFixture::new().with_prebuilt_docs();
        assert!(fixture.path().join("docs/doxygen/html/index.html").is_file());
        assert!(fixture.path().join("docs/html/index.html").is_file());
    }

    #[test]
    fn test_file_url() {
        assert_eq!(file_url(Path::new("/srv/remote.git")), "file:///srv/remote.git");
    }
}
