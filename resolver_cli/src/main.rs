//! Pregraph resolver CLI - generates the cubic pregraphs over a corpus of
//! underlying graphs and reports those that could not be disproved.
//!
//! # Examples
//!
//! ```bash
//! # Built-in corpus for 4 orbits
//! resolver 4
//!
//! # Graphs from ./data/underlying_6.g6, every witness printed
//! resolver 6 --data-dir data --verbose
//! ```

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use pregraph_resolver::{
    Report, Resolver, ResolverConfig, ResolverError, SearchPolicy,
};
use tracing_subscriber::EnvFilter;

/// Searches cubic pregraphs for positive kernel certificates
#[derive(Parser)]
#[command(name = "resolver")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of vertex orbits; selects the corpus entry
    orbits: usize,

    /// Directory holding underlying_<n>.g6 files
    #[arg(short, long, env = "PREGRAPH_DATA_DIR", default_value = ".")]
    data_dir: PathBuf,

    /// Sweep every sign variant and print each witness
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all diagnostics except errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Certify pregraphs on all cores
    #[arg(short, long)]
    parallel: bool,

    /// Ignore the built-in corpus for 4 and 5 orbits
    #[arg(long)]
    no_builtin: bool,
}

impl Cli {
    fn config(&self) -> ResolverConfig {
        ResolverConfig {
            policy: if self.verbose {
                SearchPolicy::Exhaustive
            } else {
                SearchPolicy::FirstSuccess
            },
            parallel: self.parallel,
            data_dir: Some(self.data_dir.clone()),
            include_builtin: !self.no_builtin,
        }
    }
}

fn setup_logging(verbose: bool, quiet: bool) {
    let default = if quiet {
        "error"
    } else if verbose {
        "info"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<Report> {
    let config = cli.config();
    let corpus = config.load_corpus().with_context(|| {
        format!("failed to load corpus from {}", cli.data_dir.display())
    })?;
    let report = Resolver::new(&config).resolve(&corpus, cli.orbits)?;
    Ok(report)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let report = match run(&cli) {
        Ok(report) => report,
        Err(e) => {
            let missing = matches!(
                e.downcast_ref::<ResolverError>(),
                Some(ResolverError::MissingCorpus(_))
            );
            if missing {
                println!("{e}");
            } else {
                eprintln!("{} {:#}", "Error:".red().bold(), e);
            }
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = io::stdout().lock();
    let written = report
        .write_summary(&mut stdout, cli.verbose)
        .and_then(|()| stdout.flush());
    match written {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
