//! Command-line interface for atomic-candidates
//!
//! Usage:
//!   atoms parse [CANDIDATE]... [--catalog `<file>`] [--prefix `<p>`] [--format json|debug|class]
//!   atoms catalog [--catalog `<file>`]
//!
//! `parse` reads whitespace-separated candidates from stdin when none are
//! given and prints one line per input, `null` for strings that don't parse.
//! Negative utilities go after `--`. Exit status is 0 when everything parsed, 1 otherwise, 2 when the catalog
//! can't be loaded.

use std::io::{self, Read};
use std::process::ExitCode;

use atomic_candidates::catalog::{Catalog, CatalogError, Loader};
use atomic_candidates::{parse_candidate, print_candidate, Candidate, DesignSystem};
use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing::Level;

fn main() -> ExitCode {
    let catalog_arg = Arg::new("catalog")
        .long("catalog")
        .short('c')
        .help("TOML catalog layered over the built-in defaults");

    let matches = Command::new("atoms")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse utility-class candidates against a catalog")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log to stderr (-v debug, -vv trace)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("parse")
                .about("Parse candidates and print their structure")
                .arg(
                    Arg::new("candidates")
                        .help("Candidates to parse (read from stdin when omitted)")
                        .num_args(0..)
                        .index(1),
                )
                .arg(catalog_arg.clone())
                .arg(
                    Arg::new("prefix")
                        .long("prefix")
                        .short('p')
                        .help("Theme prefix, overriding the catalog's"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format")
                        .value_parser(["json", "debug", "class"])
                        .default_value("json"),
                ),
        )
        .subcommand(
            Command::new("catalog")
                .about("Print the effective catalog as JSON")
                .arg(catalog_arg),
        )
        .get_matches();

    let Some((name, sub_matches)) = matches.subcommand() else {
        unreachable!()
    };
    init_tracing(sub_matches.get_count("verbose"));

    match name {
        "parse" => handle_parse_command(sub_matches),
        "catalog" => handle_catalog_command(sub_matches),
        _ => unreachable!(),
    }
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .without_time()
        .init();
}

fn load_catalog(matches: &ArgMatches) -> Result<Catalog, CatalogError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("catalog") {
        loader = loader.with_file(path);
    }
    if let Some(prefix) = matches.try_get_one::<String>("prefix").ok().flatten() {
        loader = loader.set_override("prefix", prefix.as_str())?;
    }
    loader.build()
}

/// Handle the parse command
fn handle_parse_command(matches: &ArgMatches) -> ExitCode {
    let catalog = match load_catalog(matches) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    let inputs: Vec<String> = match matches.get_many::<String>("candidates") {
        Some(values) => values.cloned().collect(),
        None => {
            let mut buffer = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buffer) {
                eprintln!("Error reading stdin: {}", e);
                return ExitCode::FAILURE;
            }
            buffer.split_whitespace().map(str::to_string).collect()
        }
    };

    let format = matches
        .get_one::<String>("format")
        .map_or("json", String::as_str);

    let mut all_parsed = true;
    for raw in &inputs {
        let candidate = parse_candidate(raw, &catalog);
        all_parsed &= candidate.is_some();
        match render(candidate.as_ref(), format, catalog.theme_prefix()) {
            Ok(line) => println!("{}", line),
            Err(e) => {
                eprintln!("Error formatting candidate: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    if all_parsed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn render(
    candidate: Option<&Candidate>,
    format: &str,
    prefix: Option<&str>,
) -> Result<String, serde_json::Error> {
    let Some(candidate) = candidate else {
        return Ok("null".to_string());
    };
    Ok(match format {
        "debug" => format!("{:?}", candidate),
        "class" => print_candidate(candidate, prefix),
        _ => serde_json::to_string(candidate)?,
    })
}

/// Handle the catalog command
fn handle_catalog_command(matches: &ArgMatches) -> ExitCode {
    let catalog = match load_catalog(matches) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    match serde_json::to_string_pretty(&catalog) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error formatting catalog: {}", e);
            ExitCode::FAILURE
        }
    }
}
