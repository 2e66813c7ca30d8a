//! # docupages
//!
//! This library builds a project's documentation with two external
//! generators and publishes the result to a branch of a git repository, the
//! way GitHub Pages sites are usually hosted. It is used by the `docupages`
//! command-line tool.
//!
//! ## Quick Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use docupages::config::{DocsLayout, PublishConfig};
//! use docupages::publish::Publisher;
//! use docupages::runner::SystemRunner;
//! use secrecy::SecretString;
//!
//! let config = PublishConfig::new(
//!     "https://github.com/vpetrigo/caches.git",
//!     "gh-pages",
//!     SecretString::new("ghp_token".into()),
//!     "cache",
//!     false,
//! )?;
//! let layout = DocsLayout::new("docs")?;
//!
//! let report = Publisher::new(Arc::new(SystemRunner), layout).run(&config)?;
//! println!("{} files published", report.artifact.files);
//! # Ok::<(), docupages::error::Error>(())
//! ```
//!
//! ## Core Concepts
//!
//! - **Configuration (`config`, `defaults`)**: the validated parameters of a
//!   run and the on-disk layout of the documentation sources.
//! - **Command Execution (`runner`)**: every external program goes through the
//!   `CommandRunner` trait, with secret arguments masked in diagnostics.
//! - **Destination Repository (`repository`, `git`)**: clones or creates the
//!   destination branch, wipes it, then commits and pushes new content.
//! - **Documentation Builder (`builder`)**: runs the API-reference generator
//!   and the static-site generator and collects the finished site.
//! - **Orchestration (`publish`)**: ties the above together in an ephemeral
//!   working directory.
//!
//! ## Execution Flow
//!
//! 1.  **Checkout**: clone the destination branch, or create it as an orphan.
//! 2.  **Wipe**: remove every tracked file.
//! 3.  **Build**: generate the site and copy it in, with a `.nojekyll` marker.
//! 4.  **Stage**: add everything to the index.
//! 5.  **Publish**: commit and push, unless running dry.

pub mod builder;
pub mod config;
pub mod defaults;
pub mod error;
pub mod filesystem;
pub mod git;
pub mod output;
pub mod publish;
pub mod repository;
pub mod runner;

mod auth_proptest;
