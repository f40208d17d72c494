//! Core library entry for the `unalias` CLI.
//!
//! Rewrites alias-prefixed import specifiers (`from "@/lib/x"`,
//! `import("@/lib/x")`) into paths relative to each file's directory.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod ports;
pub mod rewrite;

use clap::Parser;

pub use config::RewriteConfig;
pub use error::Error;
pub use rewrite::{RootReport, Rewriter};

use crate::adapters::live::filesystem::LiveFileSystem;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error when argument parsing fails, the configuration is
/// invalid, or a rewritten file cannot be written back.
pub fn run<I, T>(args: I) -> Result<(), Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args)?;
    logging::init(cli.verbose);
    let config = RewriteConfig::from_cli(&cli)?;
    run_with_config(&config).map(|_| ())
}

/// Rewrite every configured root in order using the live filesystem.
///
/// Returns one report per root, in the same order as `config.roots`.
///
/// # Errors
///
/// Returns the first fatal error, which stops processing of all later roots.
pub fn run_with_config(config: &RewriteConfig) -> Result<Vec<RootReport>, Error> {
    let fs = LiveFileSystem;
    let rewriter = Rewriter::new(config, &fs)?;
    config.roots.iter().map(|root| rewriter.rewrite(root)).collect()
}
