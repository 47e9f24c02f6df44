//! tvd - Tagged Value Diff CLI tool
//!
//! A command line tool for comparing, flattening and merging attribute values
//! stored as JSON or YAML wire documents.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use tagged_value_diff::value::{self, Record, TaggedValue};
use tagged_value_diff::{compare_records, find_updates, flatten, flatten_record, merge};

#[derive(Debug, Parser)]
#[command(name = "tvd", version, about = "Tagged Value Diff CLI tool")]
struct Cli {
    /// Output location. Use '-' for stdout.
    #[arg(short, long, default_value = "-", global = true)]
    output: String,

    /// Indent JSON output.
    #[arg(long, global = true)]
    pretty: bool,

    /// Raise the log level (-v debug, -vv trace). Defaults to RUST_LOG.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print whether two values are structurally equal
    Equals { lhs: PathBuf, rhs: PathBuf },
    /// Flatten a value into path-keyed leaves
    Flatten {
        file: PathBuf,
        /// Path prefix for every flattened key
        #[arg(long, default_value = "")]
        base: String,
    },
    /// Print the attributes of SRC that would update DEST
    Updates { src: PathBuf, dest: PathBuf },
    /// Merge two records, SRC wins on shared keys
    Merge { src: PathBuf, dest: PathBuf },
    /// Report added, removed and modified attributes
    Compare {
        src: PathBuf,
        dest: PathBuf,
        /// Flatten both records first and compare leaf paths
        #[arg(long)]
        deep: bool,
    },
}

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("tagged_value_diff=debug,tvd=debug"),
        _ => EnvFilter::new("tagged_value_diff=trace,tvd=trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> CliResult<()> {
    // Inputs are fully read and rendered before the output is opened, so a bad
    // input never truncates an existing output file.
    let rendered = render(&cli.command, cli.pretty)?;

    let mut output: Box<dyn Write> = if cli.output == "-" {
        Box::new(io::stdout())
    } else {
        Box::new(
            fs::File::create(&cli.output)
                .map_err(|e| format!("Failed to create output file {:?}: {}", cli.output, e))?,
        )
    };
    writeln!(output, "{}", rendered)?;

    Ok(())
}

fn render(command: &Command, pretty: bool) -> CliResult<String> {
    let rendered = match command {
        Command::Equals { lhs, rhs } => {
            value::structural_equals(&read_value(lhs)?, &read_value(rhs)?).to_string()
        }
        Command::Flatten { file, base } => {
            record_json(&flatten(&read_value(file)?, base), pretty)?
        }
        Command::Updates { src, dest } => {
            record_json(&find_updates(&read_record(src)?, &read_record(dest)?), pretty)?
        }
        Command::Merge { src, dest } => {
            record_json(&merge(&read_record(src)?, &read_record(dest)?), pretty)?
        }
        Command::Compare { src, dest, deep } => {
            let (mut src, mut dest) = (read_record(src)?, read_record(dest)?);
            if *deep {
                src = flatten_record(&src);
                dest = flatten_record(&dest);
            }
            let comparison = compare_records(&src, &dest);
            if comparison.is_same() {
                "Records are identical".to_string()
            } else {
                comparison.to_string()
            }
        }
    };

    Ok(rendered)
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

fn read_value(path: &Path) -> CliResult<TaggedValue> {
    let content =
        fs::read_to_string(path).map_err(|e| format!("Failed to read file {:?}: {}", path, e))?;
    debug!(path = %path.display(), bytes = content.len(), "read value");

    let parsed = if is_yaml(path) {
        value::from_yaml(&content)
    } else {
        value::from_json(&content)
    };
    Ok(parsed.map_err(|e| format!("Failed to parse {:?}: {}", path, e))?)
}

fn read_record(path: &Path) -> CliResult<Record> {
    let content =
        fs::read_to_string(path).map_err(|e| format!("Failed to read file {:?}: {}", path, e))?;
    debug!(path = %path.display(), bytes = content.len(), "read record");

    let parsed = if is_yaml(path) {
        value::record_from_yaml(&content)
    } else {
        value::record_from_json(&content)
    };
    Ok(parsed.map_err(|e| format!("Failed to parse {:?}: {}", path, e))?)
}

fn record_json(record: &Record, pretty: bool) -> CliResult<String> {
    let json = if pretty {
        value::record_to_json_pretty(record)?
    } else {
        value::record_to_json(record)?
    };
    Ok(json)
}
