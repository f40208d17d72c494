//! CLI argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI parser for `unalias`.
#[derive(Debug, Parser)]
#[command(
    name = "unalias",
    version,
    about = "Replace alias-prefixed imports with relative paths"
)]
pub struct Cli {
    /// Root directories to rewrite, processed in order.
    ///
    /// Appended after any roots listed in the config file.
    #[arg(value_name = "ROOTS")]
    pub roots: Vec<PathBuf>,

    /// YAML config file with roots and rewrite options.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Alias token to replace (default `@/`).
    #[arg(long, value_name = "TOKEN")]
    pub alias: Option<String>,

    /// Eligible file extension; repeat to give several (default `ts`, `tsx`).
    #[arg(short, long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Directory name never descended into; repeat to give several
    /// (default `node_modules`, `.next`).
    #[arg(short = 'x', long, value_name = "DIR")]
    pub exclude: Vec<String>,

    /// Report what would change without writing any file.
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Enable debug logging on stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn parses_roots_in_order() {
        let cli = Cli::parse_from(["unalias", "b", "a"]);
        assert_eq!(cli.roots, vec![PathBuf::from("b"), PathBuf::from("a")]);
        assert!(!cli.dry_run);
    }

    #[test]
    fn parses_repeated_options() {
        let cli = Cli::parse_from([
            "unalias", "--ext", "js", "-e", "jsx", "-x", "dist", "--alias", "~/", "-n", "src",
        ]);
        assert_eq!(cli.extensions, vec!["js", "jsx"]);
        assert_eq!(cli.exclude, vec!["dist"]);
        assert_eq!(cli.alias.as_deref(), Some("~/"));
        assert!(cli.dry_run);
        assert_eq!(cli.roots, vec![PathBuf::from("src")]);
    }

    #[test]
    fn rejects_unknown_flag() {
        assert!(Cli::try_parse_from(["unalias", "--bogus"]).is_err());
    }
}
