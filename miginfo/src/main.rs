//! # miginfo
//!
//! A CLI tool that prints database migration status as an ASCII table.
//!
//! ## Overview
//!
//! miginfo is built on top of miginfolib. It reads migration records as JSON
//! (exported from a schema history table, or produced by a migration
//! resolver) and prints them the way migration tools show `info` output.
//!
//! ## Usage
//!
//! ```bash
//! # Render a file
//! miginfo migrations.json
//!
//! # Read from stdin
//! psql -At -c "select json_agg(m) from migration_view m" | miginfo -
//!
//! # Size the type column from type names instead of descriptions
//! miginfo migrations.json --type-width type-name
//!
//! # Echo the normalized records as JSON
//! miginfo migrations.json --output json
//! ```

use std::io::Read;
use std::process::ExitCode;

use anyhow::Context;
use clap::builder::{PossibleValue, PossibleValuesParser};
use clap::{Arg, ArgAction, ArgMatches, Command};
use console::style;
use miginfolib::{load_records, parse_records, MigrationRecord, TableOptions, TypeWidth};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod render;

use render::OutputFormat;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("miginfo")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Print database migration status as an ASCII table")
        .arg(
            Arg::new("input")
                .help("JSON file with migration records ('-' or omitted reads stdin)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .env("MIGINFO_OUTPUT")
                .value_parser(["table", "json"])
                .default_value("table")
                .help("Output format"),
        )
        .arg(
            Arg::new("type-width")
                .long("type-width")
                .env("MIGINFO_TYPE_WIDTH")
                .value_parser(PossibleValuesParser::new([
                    PossibleValue::new("description").alias("desc"),
                    PossibleValue::new("type-name").aliases(["type_name", "name"]),
                ]))
                .default_value("description")
                .help("Size the type column from descriptions (classic) or type names"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Log debug output to stderr"),
        )
}

/// Install the stderr log subscriber. `-v` wins over `RUST_LOG`.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Load records from the input argument, or stdin
fn read_input(matches: &ArgMatches) -> Result<Vec<MigrationRecord>, anyhow::Error> {
    match matches.get_one::<String>("input").map(|s| s.as_str()) {
        None | Some("-") => {
            info!("reading migrations from stdin");
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            parse_records(&buffer).context("could not parse migrations from stdin")
        }
        Some(path) => {
            info!("reading migrations from {}", path);
            load_records(path).with_context(|| format!("could not load migrations from {path}"))
        }
    }
}

/// Extract table options from matches
fn extract_options(matches: &ArgMatches) -> Result<TableOptions, anyhow::Error> {
    let type_width = matches
        .get_one::<String>("type-width")
        .map(|s| s.parse::<TypeWidth>())
        .transpose()?
        .unwrap_or_default();

    Ok(TableOptions::new().type_width(type_width))
}

fn run(matches: &ArgMatches) -> Result<String, anyhow::Error> {
    let records = read_input(matches)?;
    debug!("loaded {} migration records", records.len());

    let format = matches
        .get_one::<String>("output")
        .map(|s| s.parse::<OutputFormat>())
        .transpose()?
        .unwrap_or_default();
    let options = extract_options(matches)?;
    debug!("rendering as {:?} with {:?}", format, options);

    render::render(&records, format, &options)
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_logging(matches.get_flag("verbose"));

    match run(&matches) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {e:#}", style("Error:").red().bold().for_stderr());
            ExitCode::FAILURE
        }
    }
}
