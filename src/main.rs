//! ruleforge: Apriori association rule mining CLI
//!
//! This is the main entrypoint that orchestrates transaction loading, mining,
//! rule printing and the optional plot and JSON reports.

use anyhow::Result;
use clap::Parser;
use ruleforge::{load_transactions, mine, viz, Args};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(args.log_directive().parse()?),
        )
        .with_target(false)
        .init();

    let thresholds = args.thresholds()?;

    if args.verbose {
        println!("ruleforge - Association Rule Mining with Apriori");
        println!("================================================\n");
        println!("Input file: {}", args.input);
        println!(
            "Thresholds: support >= {}, confidence >= {}, lift >= {}",
            thresholds.min_support(),
            thresholds.min_confidence(),
            thresholds.min_lift()
        );
    }

    let start_time = Instant::now();

    // Step 1: Load transactions
    let db = load_transactions(&args.input)?;
    println!(
        "Finding association rules from {} transactions and {} unique items...\n",
        db.total_transaction_count(),
        db.distinct_items().len()
    );

    // Step 2: Mine frequent itemsets and rules
    let mine_start = Instant::now();
    let result = mine(&db, &thresholds)?;
    let mine_time = mine_start.elapsed();

    // Step 3: Print ranked rules
    viz::print_rules(&result.rules, args.top);

    println!("\n{} rules", result.rules.len());
    println!("{} frequent itemsets", result.frequent_itemsets.len());
    if args.verbose {
        println!("Mining time: {:.2}s", mine_time.as_secs_f64());
    }

    // Step 4: Optional reports
    if let Some(ref output) = args.output {
        viz::generate_report(&db, &result, output)?;
    } else if args.verbose {
        viz::print_summary(&db, &result);
    }

    if let Some(ref json_path) = args.json {
        viz::write_json_report(&result, json_path)?;
    }

    let total_time = start_time.elapsed();
    println!("\n{:.2} seconds to compute", total_time.as_secs_f64());

    Ok(())
}
