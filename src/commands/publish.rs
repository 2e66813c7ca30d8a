//! # Publish Command Implementation
//!
//! Builds the documentation under `--docs-dir` and publishes it to
//! `--branch` of `--repo`.
//!
//! ## Functionality
//!
//! - **Validation**: every flag is checked before any external program runs.
//! - **Publishing**: runs the full pipeline through the `docupages` library.
//! - **Reporting**: prints one status line per outcome unless `--quiet`.
//!
//! The push token is wrapped in a `SecretString` as soon as it is parsed and
//! never printed.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use secrecy::SecretString;

use docupages::config::{CommitIdentity, DocsLayout, PublishConfig};
use docupages::defaults;
use docupages::output::OutputConfig;
use docupages::publish::{PublishReport, Publisher};
use docupages::repository::CheckoutKind;
use docupages::runner::SystemRunner;

/// Build the documentation and publish it
#[derive(Args, Debug)]
pub struct PublishArgs {
    /// Destination repository URL (scheme://host/path)
    #[arg(short, long, value_name = "URL")]
    pub repo: String,

    /// Destination branch, e.g. gh-pages
    #[arg(short, long, value_name = "BRANCH")]
    pub branch: String,

    /// Token used to authenticate the push
    #[arg(short, long, value_name = "TOKEN", value_parser = parse_token)]
    pub token: SecretString,

    /// Label for the commit message "Update <LABEL> documentation"
    #[arg(long = "commit", value_name = "LABEL")]
    pub commit_label: String,

    /// Build and stage, but do not commit or push
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Documentation root containing doxygen/ and mkdocs/
    #[arg(long, value_name = "PATH", default_value = defaults::DOCS_DIR)]
    pub docs_dir: PathBuf,

    /// API-reference generator program
    #[arg(long, value_name = "PROGRAM", default_value = defaults::DOXYGEN_PROGRAM)]
    pub doxygen: String,

    /// Static-site generator program
    #[arg(long, value_name = "PROGRAM", default_value = defaults::MKDOCS_PROGRAM)]
    pub mkdocs: String,

    /// Committer name used on the destination branch
    #[arg(long, value_name = "NAME", default_value = defaults::COMMIT_NAME)]
    pub git_name: String,

    /// Committer email used on the destination branch
    #[arg(long, value_name = "EMAIL", default_value = defaults::COMMIT_EMAIL)]
    pub git_email: String,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

fn parse_token(value: &str) -> std::result::Result<SecretString, String> {
    Ok(SecretString::from(value))
}

impl PublishArgs {
    fn config(&self) -> Result<PublishConfig> {
        let config = PublishConfig::new(
            self.repo.as_str(),
            self.branch.as_str(),
            self.token.clone(),
            self.commit_label.as_str(),
            self.dry_run,
        )
        .context("Invalid publish settings")?;

        Ok(config.with_identity(CommitIdentity {
            name: self.git_name.clone(),
            email: self.git_email.clone(),
        }))
    }

    fn layout(&self) -> Result<DocsLayout> {
        let layout = DocsLayout::new(&self.docs_dir).with_context(|| {
            format!(
                "Failed to resolve documentation directory {}",
                self.docs_dir.display()
            )
        })?;
        Ok(layout
            .with_doxygen(self.doxygen.as_str())
            .with_mkdocs(self.mkdocs.as_str()))
    }
}

/// Execute the publish command.
pub fn execute(args: PublishArgs, output: &OutputConfig) -> Result<()> {
    let config = args.config()?;
    let layout = args.layout()?;

    output.status("📚", "[DOCS]", &heading(&config, &layout));

    let report = Publisher::new(Arc::new(SystemRunner), layout)
        .run(&config)
        .context("Publishing documentation failed")?;

    for (emoji, plain, message) in summary(&report, &config) {
        output.status(emoji, plain, &message);
    }

    Ok(())
}

fn heading(config: &PublishConfig, layout: &DocsLayout) -> String {
    format!(
        "Publishing {} documentation from {} to {} ({})",
        config.commit_label(),
        layout.root().display(),
        config.repository_url(),
        config.branch()
    )
}

type StatusLine = (&'static str, &'static str, String);

fn summary(report: &PublishReport, config: &PublishConfig) -> Vec<StatusLine> {
    let mut lines = Vec::new();

    if report.checkout == CheckoutKind::OrphanBranchInit {
        lines.push((
            "🌱",
            "[NEW]",
            format!("Created branch {}", config.branch()),
        ));
    }

    lines.push((
        "📄",
        "[SITE]",
        format!("{} files generated", report.artifact.files),
    ));

    if report.pushed {
        lines.push((
            "🚀",
            "[PUSH]",
            format!("Pushed '{}' to {}", config.commit_message(), config.branch()),
        ));
    } else {
        lines.push((
            "🔍",
            "[DRY]",
            "Dry run: changes staged but not committed or pushed".to_string(),
        ));
    }

    lines
}
