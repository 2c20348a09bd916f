mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "testrun",
    about = "Detect a project's test framework and run its test suite",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: walk up from cwd looking for a marker file)
    #[arg(long, global = true, env = "TESTRUN_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the project's test command and run it
    Run {
        /// Ask the test tool for a coverage report
        #[arg(long)]
        coverage: bool,

        /// Ask the test tool for verbose output
        #[arg(long)]
        verbose: bool,

        /// Print the resolved command without running it
        #[arg(long)]
        dry_run: bool,
    },

    /// Resolve and print the test command without running it
    Plan {
        /// Ask the test tool for a coverage report
        #[arg(long)]
        coverage: bool,

        /// Ask the test tool for verbose output
        #[arg(long)]
        verbose: bool,
    },

    /// Report the detected framework with a confidence score
    Detect,

    /// Print the ordered ecosystem marker table
    Rules,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Run {
            coverage,
            verbose,
            dry_run,
        } => cmd::run::run(&root, coverage, verbose, dry_run, cli.json),
        Commands::Plan { coverage, verbose } => cmd::plan::run(&root, coverage, verbose, cli.json),
        Commands::Detect => cmd::detect::run(&root, cli.json),
        Commands::Rules => cmd::rules::run(cli.json),
    };

    match result {
        // The test tool's exit code is ours, verbatim.
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("error: {e:#}");
            std::process::exit(1);
        }
    }
}
