//! shuffle CLI — form balanced breakout groups from a class roster.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(
    name = "shuffle",
    version,
    about = "Stratified breakout group formation for classrooms"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Form groups from a fully responded roster
    Form {
        /// Path to a .toml roster or a name-per-line list
        #[arg(long)]
        roster: PathBuf,

        /// Students per group (overrides config)
        #[arg(long)]
        group_size: Option<usize>,

        /// Seed for reproducible groups (overrides config)
        #[arg(long)]
        seed: Option<u64>,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,

        /// Also save the JSON report to this path
        #[arg(long)]
        output: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show survey progress and roster warnings
    Status {
        /// Path to a .toml roster or a name-per-line list
        #[arg(long)]
        roster: PathBuf,
    },

    /// Create starter config and example roster
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("shuffle=info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Form {
            roster,
            group_size,
            seed,
            format,
            output,
            config,
        } => commands::form::execute(roster, group_size, seed, format, output, config),
        Commands::Status { roster } => commands::status::execute(roster),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
