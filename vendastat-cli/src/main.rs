//! Vendastat CLI — one-shot sales statistics report.
//!
//! Reads a comma-delimited sales table (header line first, then
//! `date,region,product,quantity,unit_price,total_value` rows) and prints
//! descriptive statistics to stdout. Any load or parse failure aborts with
//! a non-zero exit status and a diagnostic naming the failing row and
//! column; no partial report is printed.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use vendastat_core::generate_report;

#[derive(Parser)]
#[command(
    name = "vendastat",
    about = "Descriptive statistics report over a sales table"
)]
struct Cli {
    /// Path to the sales table. Defaults to `vendas.csv` in the working directory.
    #[arg(default_value = "vendas.csv")]
    input: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let report = generate_report(&cli.input)
        .with_context(|| format!("failed to analyze '{}'", cli.input.display()))?;
    print!("{report}");

    Ok(())
}
