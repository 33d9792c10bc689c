//! CLI tool to filter an expense file by category and sort by sub-category.
//!
//! Usage:
//!   expense-run                          (in.txt -> out.txt, category Продукты)
//!   expense-run <input> -o <output> -c <category>
//!   expense-run <input> -o -             (write to stdout)

use clap::Parser;
use expense_pipe::{
    DEFAULT_CATEGORY, DEFAULT_INPUT, DEFAULT_OUTPUT, OutputTarget, PipelineConfig, execute,
    init_logging,
};
use std::path::PathBuf;
use std::process;

/// Keep one expense category from a records file and list it by sub-category.
#[derive(Parser)]
#[command(name = "expense-run")]
struct Cli {
    /// Input file: `date category subcategory amount` per line
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Output file, or `-` for stdout
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: String,

    /// Category to keep (exact match)
    #[arg(short, long, default_value = DEFAULT_CATEGORY)]
    category: String,

    /// Log paths, record counts and where input ended on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = PipelineConfig {
        input: cli.input,
        output: OutputTarget::from_arg(&cli.output),
        category: cli.category,
    };

    if let Err(e) = execute(&config) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
