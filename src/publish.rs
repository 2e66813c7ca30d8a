//! # Publish Orchestration
//!
//! [`Publisher::run`] drives one complete publish:
//!
//! 1. Create an ephemeral working directory.
//! 2. Check out the destination branch into it, creating the branch if
//!    needed, and remove every tracked file.
//! 3. Write the `.nojekyll` marker.
//! 4. Build the documentation into it.
//! 5. Stage everything.
//! 6. Unless this is a dry run, commit and push.
//!
//! The working directory is removed whichever way the run ends. Any failing
//! step aborts the run; nothing is retried.

use std::path::Path;
use std::sync::Arc;

use log::info;
use tempfile::TempDir;

use crate::builder::{DocsBuilder, DocumentationArtifact};
use crate::config::{DocsLayout, PublishConfig};
use crate::defaults;
use crate::error::{Error, Result};
use crate::filesystem;
use crate::repository::{CheckoutKind, TargetRepository};
use crate::runner::CommandRunner;

/// Ephemeral directory holding the destination checkout for one run.
///
/// Dropping it removes the directory; [`close`](WorkingDirectory::close)
/// does the same but reports failures.
#[derive(Debug)]
pub struct WorkingDirectory {
    dir: TempDir,
}

impl WorkingDirectory {
    /// Creates a fresh, empty directory under the system temp location.
    pub fn create() -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix(defaults::WORKDIR_PREFIX)
            .tempdir()
            .map_err(|e| Error::Filesystem {
                message: format!("Failed to create working directory: {}", e),
            })?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Removes the directory and everything in it.
    pub fn close(self) -> Result<()> {
        let path = self.dir.path().to_path_buf();
        self.dir.close().map_err(|e| Error::Filesystem {
            message: format!(
                "Failed to remove working directory '{}': {}",
                path.display(),
                e
            ),
        })
    }
}

/// What a completed run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReport {
    pub checkout: CheckoutKind,
    pub artifact: DocumentationArtifact,
    pub committed: bool,
    pub pushed: bool,
}

/// Runs the publish pipeline against one documentation layout.
pub struct Publisher {
    runner: Arc<dyn CommandRunner>,
    builder: DocsBuilder,
}

impl Publisher {
    pub fn new(runner: Arc<dyn CommandRunner>, layout: DocsLayout) -> Self {
        let builder = DocsBuilder::new(runner.clone(), layout);
        Self { runner, builder }
    }

    /// Publishes the documentation as described by `config`.
    pub fn run(&self, config: &PublishConfig) -> Result<PublishReport> {
        let workdir = WorkingDirectory::create()?;
        info!("Using working directory {}", workdir.path().display());

        // an early return drops `workdir`, which removes it
        let report = self.publish_into(config, workdir.path())?;

        workdir.close()?;
        Ok(report)
    }

    fn publish_into(&self, config: &PublishConfig, dir: &Path) -> Result<PublishReport> {
        let repository = TargetRepository::new(self.runner.clone(), config.identity().clone());

        let checkout = repository.initialize(config.repository_url(), config.branch(), dir)?;

        filesystem::write_marker(dir, defaults::MARKER_FILE)?;

        let artifact = self.builder.generate(dir)?;

        repository.stage_all(dir)?;

        if config.dry_run() {
            info!("Dry run: skipping commit and push");
            return Ok(PublishReport {
                checkout,
                artifact,
                committed: false,
                pushed: false,
            });
        }

        repository.commit(&config.commit_message(), dir)?;
        repository.push(
            config.repository_url(),
            config.branch(),
            config.token(),
            dir,
        )?;

        Ok(PublishReport {
            checkout,
            artifact,
            committed: true,
            pushed: true,
        })
    }
}
