//! Command-line interface for indentcheck.
//!
//! Defines CLI arguments using clap builder API

use std::path::PathBuf;

use clap::{Arg, ArgAction, Command};

/// CLI arguments parsed from command line
#[derive(Debug, Clone)]
pub struct CliArgs {
    /// Capture file to analyze (absent or `-` means stdin)
    pub input: Option<PathBuf>,

    /// Recognition tokens overriding the default set
    pub tokens: Vec<String>,

    /// Marker glyph overriding the default
    pub marker: Option<String>,

    /// Config file path
    pub config: Option<PathBuf>,

    /// Print only the final verdict line
    pub quiet: bool,

    /// Enable debug output
    pub debug: bool,
}

/// Build the clap Command for parsing CLI arguments
#[must_use]
pub fn build_cli() -> Command {
    Command::new("indentcheck")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Detect cumulative indentation drift in captured terminal output")
        .arg(
            Arg::new("input")
                .help("Capture file to analyze (omit or use '-' for stdin)")
                .value_name("FILE")
                .required(false)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("token")
                .short('t')
                .long("token")
                .help("Recognition token to look for (repeatable, replaces the default set)")
                .value_name("TOKEN")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("marker")
                .long("marker")
                .help("Marker glyph excluding a line from the indentation comparison [default: ✦]")
                .value_name("GLYPH"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("TOML config file with 'tokens' and/or 'marker'")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Suppress the report, print only the verdict line")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("debug")
                .short('D')
                .long("debug")
                .help("Enable debug output on stderr")
                .action(ArgAction::SetTrue),
        )
}

/// Parse CLI arguments from the process environment
#[must_use]
pub fn parse_args() -> CliArgs {
    let matches = build_cli().get_matches();
    matches_to_args(&matches)
}

/// Parse CLI arguments from an explicit argument vector (for testing)
#[must_use]
pub fn parse_args_from(args: Vec<&str>) -> CliArgs {
    let matches = build_cli().get_matches_from(args);
    matches_to_args(&matches)
}

fn matches_to_args(matches: &clap::ArgMatches) -> CliArgs {
    CliArgs {
        input: matches.get_one::<PathBuf>("input").cloned(),
        tokens: matches
            .get_many::<String>("token")
            .map(|vals| vals.cloned().collect())
            .unwrap_or_default(),
        marker: matches.get_one::<String>("marker").cloned(),
        config: matches.get_one::<PathBuf>("config").cloned(),
        quiet: matches.get_flag("quiet"),
        debug: matches.get_flag("debug"),
    }
}
