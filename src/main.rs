//! CLI entry point for `sqlstash`.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use sqlstash::config::Config;
use sqlstash::operations::cursor::NamedArgs;
use sqlstash::operations::registry::Queries;
use sqlstash::output::report;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "sqlstash",
    about = "Load annotated SQL statement files and inspect or assemble their queries"
)]
struct Cli {
    /// Input SQL statement files
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Reject named arguments that match no clause of a built statement
    #[arg(long)]
    strict: bool,

    /// Keep statement names as written instead of uppercasing them
    #[arg(long)]
    preserve_case: bool,

    /// Assemble the named buildable statement and print its SQL
    #[arg(long, value_name = "NAME")]
    build: Option<String>,

    /// Named arguments for --build, as a JSON object
    #[arg(long, value_name = "JSON", default_value = "{}", requires = "build")]
    args: String,

    /// Write a markdown statement catalogue to this file
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,

    /// Print verbose diagnostics
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => match Config::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{e}");
                process::exit(2);
            }
        },
        None => Config::default(),
    };
    if cli.strict {
        config.strict_parse = true;
    }
    if cli.preserve_case {
        config.uppercase_names = false;
    }

    let queries = match Queries::from_files(cli.input.as_slice(), config) {
        Ok(queries) => queries,
        Err(e) => {
            eprintln!("Error loading statements: {e}");
            process::exit(2);
        }
    };

    if let Some(path) = &cli.report {
        if let Err(e) = std::fs::write(path, report::build_catalog(&queries)) {
            eprintln!("Error writing {}: {e}", path.display());
            process::exit(2);
        }
    }

    let Some(name) = &cli.build else {
        for statement in queries.iter() {
            println!("{}\t{}", statement.name(), statement.kind());
        }
        return;
    };

    let args: NamedArgs = match serde_json::from_str(&cli.args) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Invalid --args JSON object: {e}");
            process::exit(2);
        }
    };

    match queries.build(name, &args) {
        Ok(built) => {
            println!("{}", built.sql);
            match serde_json::to_string(&built.params) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    eprintln!("Error encoding parameters: {e}");
                    process::exit(2);
                }
            }
        }
        Err(e) => {
            eprintln!("Error building {name}: {e}");
            process::exit(2);
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "sqlstash=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
