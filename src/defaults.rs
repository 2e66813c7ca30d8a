//! Default values for docupages configuration.
//!
//! This module provides centralized default values used by the CLI and the
//! library, ensuring consistency and avoiding duplication.

/// Documentation source root, relative to the current directory.
pub const DOCS_DIR: &str = "docs";

/// Directory (under the docs root) in which the API-reference generator runs.
pub const DOXYGEN_DIR: &str = "doxygen";

/// HTML output directory of the API-reference generator, relative to
/// [`DOXYGEN_DIR`].
pub const DOXYGEN_HTML_DIR: &str = "html";

/// Static-site project directory under the docs root.
pub const MKDOCS_DIR: &str = "mkdocs";

/// Input directory of the static-site generator, relative to [`MKDOCS_DIR`].
pub const MKDOCS_INPUT_DIR: &str = "docs";

/// Directory (under the static-site input) that receives the API reference.
pub const REFERENCE_DIR: &str = "doxygen";

/// Finished site directory under the docs root.
pub const SITE_DIR: &str = "html";

/// API-reference generator program.
pub const DOXYGEN_PROGRAM: &str = "doxygen";

/// Static-site generator program.
pub const MKDOCS_PROGRAM: &str = "mkdocs";

/// Version control program.
pub const GIT_PROGRAM: &str = "git";

/// Marker file telling GitHub Pages not to run Jekyll over the site.
pub const MARKER_FILE: &str = ".nojekyll";

/// Committer name configured in the throwaway checkout.
pub const COMMIT_NAME: &str = "docupages";

/// Committer email configured in the throwaway checkout.
pub const COMMIT_EMAIL: &str = "docupages@users.noreply.github.com";

/// Prefix of the ephemeral working directory.
pub const WORKDIR_PREFIX: &str = "docupages-";

/// Returns the commit message for a publish labelled `label`.
pub fn commit_message(label: &str) -> String {
    format!("Update {} documentation", label)
}
