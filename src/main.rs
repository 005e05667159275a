//! Ziprank CLI - Rank ZIP-code areas by household income
//!
//! # Commands
//!
//! ```bash
//! ziprank run                      # Full pipeline with the default files
//! ziprank run -i data.csv -o out.json --top 10
//! ziprank show top10income.json    # Reload a snapshot and print the table
//! ```

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use ziprank::{
    load_snapshot, render_table, run, PipelineOptions, DEFAULT_SNAPSHOT_PATH, DEFAULT_SOURCE_PATH,
    DEFAULT_TOP_N,
};

#[derive(Parser)]
#[command(name = "ziprank")]
#[command(about = "Rank ZIP-code areas by average household income", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline: load, enrich, rank, persist, report
    Run {
        /// Input CSV file
        #[arg(short, long, default_value = DEFAULT_SOURCE_PATH)]
        input: PathBuf,

        /// Output snapshot file
        #[arg(short, long, default_value = DEFAULT_SNAPSHOT_PATH)]
        output: PathBuf,

        /// Number of top rows to keep
        #[arg(long, default_value_t = DEFAULT_TOP_N)]
        top: usize,
    },

    /// Reload a persisted snapshot and print it
    Show {
        /// Snapshot file
        snapshot: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run { input, output, top } => cmd_run(&input, output, top),
        Commands::Show { snapshot } => cmd_show(&snapshot),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_run(input: &Path, output: PathBuf, top: usize) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Processing: {}", input.display());

    let options = PipelineOptions {
        snapshot_path: output,
        top_n: top,
    };

    let summary = run(input, &options)?;

    eprintln!("   Encoding: {}", summary.csv_info.encoding);
    eprintln!("   Rows: {}", summary.csv_info.row_count);
    eprintln!("   Columns: {}", summary.csv_info.headers.join(", "));
    eprintln!(
        "✅ Ranked {} rows, kept top {}",
        summary.csv_info.row_count,
        summary.snapshot.len()
    );

    print!("{}", render_table(&summary.snapshot));

    eprintln!("💾 Snapshot written to: {}", options.snapshot_path.display());
    Ok(())
}

fn cmd_show(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = load_snapshot(path)?;
    eprintln!("📄 {} rows from {}", snapshot.len(), path.display());
    print!("{}", render_table(&snapshot));
    Ok(())
}
