//! `metacsv` - bulk CSV export/import for metadata entity records.

use clap::Parser;
use metacsv::MetacsvError;
use metacsv::cli::commands;
use metacsv::cli::{Cli, Commands};
use metacsv::logging::init_logging;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose, cli.quiet, cli.log_file.as_deref()) {
        handle_error(&MetacsvError::Other(e), cli.json);
    }

    let overrides = cli.overrides();

    let result = match &cli.command {
        Commands::Export(args) => commands::export::execute(args, cli.json, &overrides),
        Commands::Import(args) => commands::import::execute(args, cli.json, &overrides),
        Commands::Headers(args) => commands::headers::execute(args, cli.json, &overrides),
        Commands::Split(args) => commands::split::execute(args, cli.json),
        Commands::Init { force } => commands::init::execute(*force, cli.json),
        Commands::Completions(args) => commands::completions::execute(args),
        Commands::Version => commands::version::execute(cli.json),
    };

    if let Err(e) = result {
        handle_error(&e, cli.json);
    }
}

/// Print the error (JSON on stdout with `--json`, otherwise text on stderr) and exit.
fn handle_error(err: &MetacsvError, json: bool) -> ! {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&err.to_json()).unwrap_or_else(|_| err.to_string())
        );
    } else {
        eprintln!("{}", err.to_human());
    }
    std::process::exit(err.exit_code());
}
