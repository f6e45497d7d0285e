use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod analyze;
mod io;

#[derive(Debug, Parser)]
#[command(name = "sov-cli")]
#[command(about = "Brand share-of-voice analyzer")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Score collected items and write the summary artifacts
    Analyze {
        /// Project config file
        #[arg(long, default_value = "config.yaml")]
        config: PathBuf,

        /// Item files to read (defaults to every .json/.jsonl in the
        /// configured data dir)
        #[arg(long, num_args = 0..)]
        inputs: Vec<PathBuf>,

        /// Directory for scored.csv, summary.json, brand_summary.csv
        #[arg(long, default_value = "out")]
        out_dir: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Analyze {
            config,
            inputs,
            out_dir,
        }) => analyze::run(&config, &inputs, &out_dir),
        None => {
            println!("sov-cli: run `sov-cli analyze --help` to get started");
            Ok(())
        }
    }
}
