//! Command-line argument parsing for the uberfind binary.
//!
//! This module defines the CLI interface (flags and options) and provides a
//! simple `parse()` helper that returns a populated `Config`. On error (e.g.,
//! a non-numeric `-n` value), `parse()` returns a user-friendly message
//! suitable for printing to stderr.

use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;
use uberfind::Config;

/// Build the clap Command describing uberfind's CLI.
///
/// This is separated for testability and to support `--help`/`--version`
/// handling by clap. Most consumers should call `parse()` instead.
pub fn build_cli() -> Command {
    Command::new("uberfind")
        .about("Recursively search files for sensitive keywords (case-insensitive regex)")
        .arg(
            Arg::new("path")
                .short('p')
                .value_name("PATH")
                .num_args(1)
                .help("Path to search in recursively (default: current directory)"),
        )
        .arg(
            Arg::new("keyword")
                .short('k')
                .value_name("KEYWORD")
                .num_args(1)
                .action(ArgAction::Append)
                .help(
                    "Keyword to search for, treated as a case-insensitive regex \
                     (can be used multiple times; default: password, username)",
                ),
        )
        .arg(
            Arg::new("extension")
                .short('e')
                .value_name("EXT")
                .num_args(1)
                .action(ArgAction::Append)
                .help(
                    "File extension to search in, including the leading dot \
                     (can be used multiple times)",
                ),
        )
        .arg(
            Arg::new("results")
                .short('r')
                .value_name("FILE")
                .num_args(1)
                .help("Results output file, overwritten each run (default: results.txt)"),
        )
        .arg(
            Arg::new("chars")
                .short('n')
                .value_name("NUM")
                .num_args(1)
                .help("Number of characters to return before and after a keyword (default: 20)"),
        )
        .arg(
            Arg::new("all")
                .short('a')
                .action(ArgAction::SetTrue)
                .help("Search ALL files, no extension filter"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Print each matching file's path as it is found"),
        )
        .arg(
            Arg::new("compat")
                .long("compat")
                .action(ArgAction::SetTrue)
                .help("Reproduce the legacy report spacing byte-for-byte"),
        )
}

/// Parse CLI arguments into a `Config`.
///
/// Absent flags keep the defaults from `Config::default()`. Returns
/// `Err(String)` with a human-readable message when validation fails.
pub fn parse() -> Result<Config, String> {
    let matches = build_cli().get_matches();

    let mut cfg = Config::default();

    if let Some(p) = matches.get_one::<String>("path") {
        cfg.root = PathBuf::from(p);
    }
    if let Some(kws) = matches.get_many::<String>("keyword") {
        cfg.keywords = kws.map(|s| s.to_string()).collect();
    }
    if let Some(exts) = matches.get_many::<String>("extension") {
        // Extension comparison is case-insensitive; normalize here once.
        cfg.extensions = exts.map(|e| e.to_lowercase()).collect();
    }
    if let Some(r) = matches.get_one::<String>("results") {
        cfg.report_path = PathBuf::from(r);
    }
    if let Some(n) = matches.get_one::<String>("chars") {
        cfg.context_radius = n
            .parse::<usize>()
            .map_err(|_| format!("uberfind: invalid -n value '{}': expected a non-negative integer", n))?;
    }
    cfg.all_files = matches.get_flag("all");
    cfg.verbose = matches.get_flag("verbose");
    cfg.compat = matches.get_flag("compat");

    Ok(cfg)
}
