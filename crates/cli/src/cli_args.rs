//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the `clap`
//! crate and maps the flags onto the action the binary performs.

use std::env;
use std::time::Duration;

use clap::Parser;
use plugconf_core::config::{LoadOptions, DEFAULT_DIRECTIVE_TIMEOUT, DEFAULT_SHELL};

/// Command-line arguments for the `plugconf` tool.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use plugconf_cli::cli_args::Args;
///
/// let args = Args::parse_from(["plugconf", "-c", "/etc/dns/config.yaml"]);
/// assert_eq!(args.config_path.as_deref(), Some("/etc/dns/config.yaml"));
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the configuration YAML.
    ///
    /// If not provided, defaults to `config.yaml` in the working directory.
    #[arg(long, short = 'c')]
    pub config_path: Option<String>,

    /// Write an example configuration to this path and exit.
    #[arg(long = "gen", value_name = "PATH")]
    pub generate_path: Option<String>,

    /// Print the loaded configuration, with every directive resolved.
    #[arg(long, short = 'p', action, conflicts_with = "generate_path")]
    pub print: bool,

    /// Seconds all `${{ ... }}` directives of one load may take together.
    #[arg(long = "timeout", short = 't', value_name = "SECS")]
    pub timeout_seconds: Option<u64>,

    /// Shell that runs directive commands.
    ///
    /// If not provided, `$SHELL` is used, falling back to `/bin/sh`.
    #[arg(long)]
    pub shell: Option<String>,
}

/// What a single invocation does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Write the example configuration to the path.
    Generate(String),
    /// Load and re-encode the configuration.
    Print,
    /// Load the configuration and list its plugins.
    Summary,
}

impl Args {
    pub fn action(&self) -> Action {
        match (&self.generate_path, self.print) {
            (Some(path), _) => Action::Generate(path.clone()),
            (None, true) => Action::Print,
            (None, false) => Action::Summary,
        }
    }

    pub fn load_options(&self) -> LoadOptions {
        let shell = self
            .shell
            .clone()
            .or_else(|| env::var("SHELL").ok())
            .unwrap_or_else(|| DEFAULT_SHELL.to_string());

        let timeout = self
            .timeout_seconds
            .map_or(DEFAULT_DIRECTIVE_TIMEOUT, Duration::from_secs);

        LoadOptions { timeout, shell }
    }
}
