//! `unroll` - expand and count `for_each!` invocations outside rustc.
//!
//! Handy for checking what an invocation turns into without reaching
//! for a full macro expander:
//!
//! ```text
//! $ unroll expand --expr 'square, 1, 2, 3'
//! square ! { 1 }
//! square ! { 2 }
//! square ! { 3 }
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`.

mod commands;
mod error;
mod input;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

use crate::error::Result;
use crate::input::{parse_body, Source};

#[derive(Debug, Parser)]
#[command(name = "unroll", version, about = "Expand and count for_each! invocations")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the expansion of a for_each! invocation, one application per line
    Expand(SourceArgs),
    /// Print the number of elements in a list
    Count(SourceArgs),
}

#[derive(Debug, Args)]
struct SourceArgs {
    /// File holding the invocation; stdin when omitted
    file: Option<PathBuf>,

    /// Invocation text given inline
    #[arg(long, conflicts_with = "file")]
    expr: Option<String>,

    /// Override the element ceiling
    #[arg(long)]
    max_elements: Option<usize>,

    /// Configuration file; defaults to unroll.toml/unroll.yaml in the current directory
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    match run(cli) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<String> {
    let (args, macro_name) = match &cli.command {
        Command::Expand(args) => (args, "for_each"),
        Command::Count(args) => (args, "count"),
    };

    let cwd = std::env::current_dir().map_err(|source| error::CliError::Read {
        path: PathBuf::from("."),
        source,
    })?;
    let config = commands::resolve_config(args.config.as_deref(), &cwd, args.max_elements)?;

    let text = Source::new(args.expr.clone(), args.file.clone()).read()?;
    let body = parse_body(&text, macro_name)?;

    match cli.command {
        Command::Expand(_) => commands::expand(body, &config),
        Command::Count(_) => commands::count(body, &config).map(|n| n.to_string()),
    }
}
