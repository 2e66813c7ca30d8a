//! # Output Configuration
//!
//! Controls how the CLI prints its status lines: whether emoji markers are
//! used, and whether anything is printed at all.
//!
//! ## Respecting User Preferences
//!
//! - `--color=never|always|auto` - CLI flag for color control
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals
//! - `--quiet` - Suppresses status lines entirely; errors still reach stderr
//!
//! ## Usage
//!
//! ```
//! use docupages::output::{ColorChoice, OutputConfig};
//!
//! let output = OutputConfig::new(ColorChoice::Never, false);
//! assert_eq!(output.marker("📚", "[DOCS]"), "[DOCS]");
//! output.status("📚", "[DOCS]", "Building documentation");
//! ```

use std::env;
use std::fmt;
use std::str::FromStr;

/// Value of the `--color` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    Always,
    Never,
    #[default]
    Auto,
}

impl FromStr for ColorChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            "auto" => Ok(Self::Auto),
            other => Err(format!(
                "invalid color choice '{}' (expected always, never or auto)",
                other
            )),
        }
    }
}

impl fmt::Display for ColorChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Always => "always",
            Self::Never => "never",
            Self::Auto => "auto",
        };
        f.write_str(name)
    }
}

/// How status lines are rendered.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether emoji markers should be used.
    pub use_color: bool,
    /// Whether status lines are suppressed.
    pub quiet: bool,
}

impl OutputConfig {
    /// Resolves `choice` against the environment.
    ///
    /// `Always` and `Never` win outright; `Auto` disables colors when
    /// `NO_COLOR` is set, `CLICOLOR=0`, `TERM=dumb`, or stdout is not a TTY
    /// (unless `CLICOLOR_FORCE=1`).
    pub fn new(choice: ColorChoice, quiet: bool) -> Self {
        let use_color = match choice {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => Self::detect_color_support(),
        };

        Self { use_color, quiet }
    }

    fn detect_color_support() -> bool {
        // presence alone disables, even when empty
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }

        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }

        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }

        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }

    /// Picks `emoji` when colors are enabled, `plain` otherwise.
    pub fn marker<'a>(&self, emoji: &'a str, plain: &'a str) -> &'a str {
        if self.use_color {
            emoji
        } else {
            plain
        }
    }

    /// Renders a status line, or `None` when quiet.
    pub fn format_status(&self, emoji: &str, plain: &str, message: &str) -> Option<String> {
        if self.quiet {
            None
        } else {
            Some(format!("{} {}", self.marker(emoji, plain), message))
        }
    }

    /// Prints a status line to stdout unless quiet.
    pub fn status(&self, emoji: &str, plain: &str, message: &str) {
        if let Some(line) = self.format_status(emoji, plain, message) {
            println!("{}", line);
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::new(ColorChoice::Auto, false)
    }
}
