//! # Documentation Builder
//!
//! Produces the static site that gets published, by chaining the two
//! external generators described by a [`DocsLayout`]:
//!
//! 1. The API-reference generator runs in `<root>/doxygen` and writes
//!    `<root>/doxygen/html`.
//! 2. That HTML tree is merged into the static-site input at
//!    `<root>/mkdocs/docs/doxygen`.
//! 3. The static-site generator runs `build --site-dir <root>/html` in
//!    `<root>/mkdocs`.
//! 4. The finished site is merged into the caller's destination directory.
//!
//! Both generators are opaque subprocesses and a non-zero exit from either
//! aborts the build.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::info;

use crate::config::DocsLayout;
use crate::error::Result;
use crate::filesystem;
use crate::runner::{CommandRunner, Invocation};

/// The generated site, as copied into the destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentationArtifact {
    /// Directory the static-site generator wrote to.
    pub site_dir: PathBuf,
    /// Number of files copied into the destination.
    pub files: usize,
}

/// Runs the documentation generators for one layout.
pub struct DocsBuilder {
    runner: Arc<dyn CommandRunner>,
    layout: DocsLayout,
}

impl DocsBuilder {
    pub fn new(runner: Arc<dyn CommandRunner>, layout: DocsLayout) -> Self {
        Self { runner, layout }
    }

    /// Builds the site and merges it into `destination`.
    pub fn generate(&self, destination: &Path) -> Result<DocumentationArtifact> {
        info!("Generating API reference in {}", self.layout.doxygen_dir().display());
        self.runner.run_required(&self.doxygen_invocation())?;

        let reference = filesystem::copy_dir_merge(
            &self.layout.doxygen_html_dir(),
            &self.layout.reference_dir(),
        )?;
        info!(
            "Copied {} API reference files into {}",
            reference,
            self.layout.reference_dir().display()
        );

        info!("Building static site in {}", self.layout.mkdocs_dir().display());
        self.runner.run_required(&self.mkdocs_invocation())?;

        let site_dir = self.layout.site_dir();
        let files = filesystem::copy_dir_merge(&site_dir, destination)?;
        info!("Copied {} site files into {}", files, destination.display());

        Ok(DocumentationArtifact { site_dir, files })
    }

    fn doxygen_invocation(&self) -> Invocation {
        Invocation::new(self.layout.doxygen_program(), self.layout.doxygen_dir())
    }

    fn mkdocs_invocation(&self) -> Invocation {
        Invocation::new(self.layout.mkdocs_program(), self.layout.mkdocs_dir())
            .args(["build", "--site-dir"])
            .arg(self.layout.site_dir())
    }
}
