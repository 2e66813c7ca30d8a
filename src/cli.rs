//! CLI argument parsing and logging setup

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use docupages::output::{ColorChoice, OutputConfig};

use crate::commands;

/// Build project documentation and publish it to a git branch
#[derive(Parser, Debug)]
#[command(name = "docupages")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    publish: commands::publish::PublishArgs,

    /// Colorize output (always, never, auto)
    #[arg(long, value_name = "WHEN", default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    /// Set log level (off, error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, value_name = "LEVEL", default_value_t = LevelFilter::Warn)]
    log_level: LevelFilter,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(self.log_level);

        let output = OutputConfig::new(self.color, self.publish.quiet);
        commands::publish::execute(self.publish, &output)
    }
}

fn init_logging(level: LevelFilter) {
    // a logger may already be installed when embedded in tests
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_env("RUST_LOG")
        .format_timestamp(None)
        .try_init();
}
