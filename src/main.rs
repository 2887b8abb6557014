//! indentcheck - Detector for cumulative indentation drift in terminal captures

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::fs::File;
use std::io::{self, IsTerminal, Read};

use indentcheck::{analyze_capture, parse_args, CliArgs, Config, Result};

fn main() -> Result<()> {
    let args = parse_args();

    // If no input and running interactively, print usage instead of hanging
    // on an empty stdin read
    if args.input.is_none() && io::stdin().is_terminal() {
        print_usage();
        return Ok(());
    }

    let config = build_config(&args)?;
    let raw = read_input(&args)?;

    let problem = if args.quiet {
        let summary = analyze_capture(&raw, &config, &mut io::sink())?;
        if summary.problem {
            println!("❌ Cumulative indentation problem detected");
        } else {
            println!("✅ No cumulative indentation problem detected");
        }
        summary.problem
    } else {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        analyze_capture(&raw, &config, &mut out)?.problem
    };

    if problem {
        std::process::exit(1);
    }
    Ok(())
}

/// Build configuration from CLI args and optional config file
///
/// CLI flags override config-file settings, which override the defaults.
fn build_config(args: &CliArgs) -> Result<Config> {
    let mut config = if let Some(config_path) = &args.config {
        if args.debug {
            eprintln!(
                "[DEBUG] Using explicit config file: {}",
                config_path.display()
            );
        }
        Config::from_toml_file(config_path)?
    } else {
        Config::default()
    };

    // Override with CLI arguments
    if !args.tokens.is_empty() {
        config.tokens = args.tokens.clone();
    }
    if let Some(marker) = &args.marker {
        config.marker = marker.clone();
    }

    if args.debug {
        eprintln!("[DEBUG] Configuration:");
        eprintln!("[DEBUG]   tokens: {:?}", config.tokens);
        eprintln!("[DEBUG]   marker: {:?}", config.marker);
    }

    // Validate configuration
    if let Some(error) = config.validate() {
        anyhow::bail!("Invalid configuration: {error}");
    }

    Ok(config)
}

/// Read the capture from the named file, or stdin for `-` or no argument
fn read_input(args: &CliArgs) -> Result<String> {
    let mut raw = String::new();
    match &args.input {
        Some(path) if path.as_os_str() != "-" => {
            File::open(path)?.read_to_string(&mut raw)?;
        }
        _ => {
            io::stdin().read_to_string(&mut raw)?;
        }
    }
    Ok(raw)
}

fn print_usage() {
    println!(
        "indentcheck v{} - cumulative indentation drift detector",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("Inspects a terminal capture for continuation lines whose indentation");
    println!("grows line-over-line instead of staying constant.");
    println!();
    println!("Usage:");
    println!("  indentcheck [OPTIONS] <FILE>");
    println!("  indentcheck [OPTIONS] -            # Read from stdin");
    println!("  some-tool | indentcheck            # Pipe a capture");
    println!();
    println!("Options:");
    println!("  -t, --token <TOKEN>    Recognition token (repeatable, replaces defaults)");
    println!("      --marker <GLYPH>   Marker glyph excluding a line from comparison [default: ✦]");
    println!("  -c, --config <FILE>    TOML config file with 'tokens' and/or 'marker'");
    println!("  -q, --quiet            Print only the verdict line");
    println!("  -D, --debug            Debug output on stderr");
    println!("  -h, --help             Print help");
    println!();
    println!("Exit status is 1 when cumulative indentation growth is detected, 0 otherwise.");
}
