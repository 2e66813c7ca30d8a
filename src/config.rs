//! # Publish Configuration
//!
//! This module defines the immutable values a publish run is driven by. They
//! are built once from caller input (the CLI flags) and passed explicitly to
//! every pipeline component; nothing reads configuration from global state.
//!
//! ## Key Components
//!
//! - **`PublishConfig`**: destination repository URL, branch, push token,
//!   commit label and dry-run flag, plus the committer identity used in the
//!   throwaway checkout. Construction validates every field.
//!
//! - **`CommitIdentity`**: name and email written to the checkout's local
//!   git config.
//!
//! - **`DocsLayout`**: where the two documentation generators run and where
//!   their outputs land, all derived from one documentation root.
//!
//! ## Token Handling
//!
//! The push token is stored as a `secrecy::SecretString`. Its `Debug` output
//! is redacted, so a `PublishConfig` can be logged safely; the token is only
//! exposed when the authenticated push URL is built.

use std::path::{Path, PathBuf};

use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::defaults;
use crate::error::{Error, Result};

/// Committer identity for the destination checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitIdentity {
    pub name: String,
    pub email: String,
}

impl Default for CommitIdentity {
    fn default() -> Self {
        Self {
            name: defaults::COMMIT_NAME.to_string(),
            email: defaults::COMMIT_EMAIL.to_string(),
        }
    }
}

/// Validated parameters of one publish run.
#[derive(Debug)]
pub struct PublishConfig {
    repository_url: String,
    branch: String,
    token: SecretString,
    commit_label: String,
    dry_run: bool,
    identity: CommitIdentity,
}

impl PublishConfig {
    /// Validates caller input and builds the configuration.
    ///
    /// The repository URL must parse as an absolute URL with an authority
    /// component (`scheme://host/path`), since the token is embedded right
    /// after `://` at push time. Branch, label and token must be non-empty.
    pub fn new(
        repository_url: impl Into<String>,
        branch: impl Into<String>,
        token: SecretString,
        commit_label: impl Into<String>,
        dry_run: bool,
    ) -> Result<Self> {
        let repository_url = repository_url.into();
        let branch = branch.into();
        let commit_label = commit_label.into();

        validate_repository_url(&repository_url)?;
        validate_branch(&branch)?;

        if commit_label.trim().is_empty() {
            return Err(Error::Config {
                message: "commit label is empty".to_string(),
                hint: Some("pass --commit <label>, e.g. the project name".to_string()),
            });
        }

        if token.expose_secret().is_empty() {
            return Err(Error::Config {
                message: "push token is empty".to_string(),
                hint: None,
            });
        }

        Ok(Self {
            repository_url,
            branch,
            token,
            commit_label,
            dry_run,
            identity: CommitIdentity::default(),
        })
    }

    /// Replaces the default committer identity.
    pub fn with_identity(mut self, identity: CommitIdentity) -> Self {
        self.identity = identity;
        self
    }

    pub fn repository_url(&self) -> &str {
        &self.repository_url
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    pub fn token(&self) -> &SecretString {
        &self.token
    }

    pub fn commit_label(&self) -> &str {
        &self.commit_label
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn identity(&self) -> &CommitIdentity {
        &self.identity
    }

    /// The message recorded on the destination branch.
    pub fn commit_message(&self) -> String {
        defaults::commit_message(&self.commit_label)
    }
}

fn validate_repository_url(repository_url: &str) -> Result<()> {
    let parsed = Url::parse(repository_url)?;

    if parsed.cannot_be_a_base() || !repository_url.contains("://") {
        return Err(Error::InvalidRepositoryUrl {
            url: repository_url.to_string(),
            message: "expected a scheme://host/path URL".to_string(),
        });
    }

    Ok(())
}

fn validate_branch(branch: &str) -> Result<()> {
    if branch.trim().is_empty() {
        return Err(Error::Config {
            message: "branch name is empty".to_string(),
            hint: Some("pass --branch gh-pages".to_string()),
        });
    }

    // git would read it as an option
    if branch.starts_with('-') {
        return Err(Error::Config {
            message: format!("branch name '{}' starts with '-'", branch),
            hint: None,
        });
    }

    Ok(())
}

/// Locations used by the documentation builder.
///
/// All paths are absolute once constructed, because the generators run with
/// their own working directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocsLayout {
    root: PathBuf,
    doxygen_program: String,
    mkdocs_program: String,
}

impl DocsLayout {
    /// Creates a layout rooted at `root`, resolved against the current
    /// directory when relative.
    pub fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = std::path::absolute(root.as_ref())?;
        Ok(Self {
            root,
            doxygen_program: defaults::DOXYGEN_PROGRAM.to_string(),
            mkdocs_program: defaults::MKDOCS_PROGRAM.to_string(),
        })
    }

    /// Overrides the API-reference generator program.
    pub fn with_doxygen(mut self, program: impl Into<String>) -> Self {
        self.doxygen_program = program.into();
        self
    }

    /// Overrides the static-site generator program.
    pub fn with_mkdocs(mut self, program: impl Into<String>) -> Self {
        self.mkdocs_program = program.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn doxygen_program(&self) -> &str {
        &self.doxygen_program
    }

    pub fn mkdocs_program(&self) -> &str {
        &self.mkdocs_program
    }

    /// Working directory of the API-reference generator.
    pub fn doxygen_dir(&self) -> PathBuf {
        self.root.join(defaults::DOXYGEN_DIR)
    }

    /// HTML tree produced by the API-reference generator.
    pub fn doxygen_html_dir(&self) -> PathBuf {
        self.doxygen_dir().join(defaults::DOXYGEN_HTML_DIR)
    }

    /// Static-site project directory.
    pub fn mkdocs_dir(&self) -> PathBuf {
        self.root.join(defaults::MKDOCS_DIR)
    }

    /// Where the API reference is placed inside the static-site input.
    pub fn reference_dir(&self) -> PathBuf {
        self.mkdocs_dir()
            .join(defaults::MKDOCS_INPUT_DIR)
            .join(defaults::REFERENCE_DIR)
    }

    /// Finished static site.
    pub fn site_dir(&self) -> PathBuf {
        self.root.join(defaults::SITE_DIR)
    }
}
