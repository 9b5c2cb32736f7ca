//! Command-line interface definitions and argument parsing

use crate::model::Thresholds;
use clap::Parser;

/// Frequent itemset mining and association rules with Apriori
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the transaction file (one comma separated transaction per line, no header)
    #[arg(short, long, default_value = "transactions.csv")]
    pub input: String,

    /// Minimum support, in (0, 1]
    #[arg(short = 's', long, default_value = "0.15")]
    pub min_support: f64,

    /// Minimum confidence, in [0, 1]
    #[arg(short = 'c', long, default_value = "0.8")]
    pub min_confidence: f64,

    /// Minimum lift, non-negative
    #[arg(short = 'l', long, default_value = "1.0")]
    pub min_lift: f64,

    /// Output path for the rule plot; a level chart is written next to it
    #[arg(short, long)]
    pub output: Option<String>,

    /// Write the full result as JSON to this path
    #[arg(long)]
    pub json: Option<String>,

    /// Print only the first N ranked rules
    #[arg(short = 'n', long)]
    pub top: Option<usize>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Validate the threshold flags
    pub fn thresholds(&self) -> crate::Result<Thresholds> {
        Ok(Thresholds::new(
            self.min_support,
            self.min_confidence,
            self.min_lift,
        )?)
    }

    /// Tracing filter directive matching the verbosity flag
    pub fn log_directive(&self) -> &'static str {
        if self.verbose {
            "ruleforge=debug"
        } else {
            "ruleforge=info"
        }
    }
}
