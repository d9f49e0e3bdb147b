mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::report::ReportArgs;
use commands::schedule::{SipArgs, SwpArgs};
use commands::words::WordsArgs;

/// SIP + SWP projection reports
#[derive(Parser)]
#[command(
    name = "sipswp",
    version,
    about = "SIP accumulation and SWP drawdown projections with spreadsheet export",
    long_about = "Projects a Systematic Investment Plan month by month, chains its final \
                  corpus into a Systematic Withdrawal Plan, and exports both schedules \
                  plus a summary (with the corpus spelled out in words) as an xlsx \
                  workbook with an embedded closing-balance chart."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the full SIP + SWP workbook
    Report(ReportArgs),
    /// Print a SIP accumulation schedule
    Sip(SipArgs),
    /// Print an SWP drawdown schedule
    Swp(SwpArgs),
    /// Spell a rupee amount in words
    Words(WordsArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Report(args) => commands::report::run_report(args),
        Commands::Sip(args) => commands::schedule::run_sip(args),
        Commands::Swp(args) => commands::schedule::run_swp(args),
        Commands::Words(args) => commands::words::run_words(args),
        Commands::Version => {
            println!("sipswp {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
