//! Hearth CLI entry point.

use hearth_runtime::{Console, Repl};
use hearth_store::store::DEFAULT_FILE;
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// CLI configuration parsed from arguments.
struct CliConfig {
    file: PathBuf,
    show_help: bool,
    show_version: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_FILE),
            show_help: false,
            show_version: false,
        }
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-f" | "--file" => {
                i += 1;
                if i >= args.len() {
                    return Err("--file requires a path".into());
                }
                config.file = PathBuf::from(&args[i]);
            }
            arg => {
                return Err(format!("unknown option: {arg}").into());
            }
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("hearth {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let console = Console::new(config.file)?;
    let mut repl = Repl::new(console)?;
    repl.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "hearth - Interactive console for typed lodging records

USAGE:
    hearth [OPTIONS]

OPTIONS:
    -h, --help         Print help information
    -V, --version      Print version information
    -f, --file PATH    Storage file (default: {DEFAULT_FILE})

COMMANDS:
    create <Kind>                      Create a record, print its id
    show <Kind> <id>                   Print one record
    destroy <Kind> <id>                Delete a record
    update <Kind> <id> <field> <value> Set one attribute
    update <Kind> <id> {{dict}}          Set several attributes at once
    all [Kind]                         List records
    count [Kind]                       Count records
    quit                               Exit (also Ctrl+D)

Every command also accepts the dotted form, e.g. User.show(\"<id>\"),
City.count(), User.update(\"<id>\", {{'age': 27}})."
    );
}
