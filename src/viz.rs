//! Rule and search reports: console tables, Plotters charts and JSON

use crate::data::TransactionDb;
use crate::model::MiningResult;
use crate::rules::AssociationRule;
use crate::search::LevelStats;
use anyhow::Context;
use plotters::prelude::*;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Point colors by lift band
const LIFT_COLORS: [RGBColor; 4] = [RED, BLUE, GREEN, MAGENTA];

const LIFT_LABELS: [&str; 4] = ["lift < 1", "1 <= lift < 1.5", "1.5 <= lift < 2", "lift >= 2"];

/// Index into `LIFT_COLORS` for a lift value
pub fn lift_band(lift: f64) -> usize {
    if lift < 1.0 {
        0
    } else if lift < 1.5 {
        1
    } else if lift < 2.0 {
        2
    } else {
        3
    }
}

/// One-line rendering of a rule with its metrics
pub fn format_rule(rule: &AssociationRule) -> String {
    format!(
        "{}  support={:.3} confidence={:.3} lift={:.3}",
        rule, rule.support, rule.confidence, rule.lift
    )
}

/// Scatter plot of rules: support vs confidence, colored by lift
///
/// # Arguments
/// * `rules` - Ranked rules to plot
/// * `output_path` - Path to save the PNG plot
/// * `plot_title` - Title for the plot
pub fn create_rule_scatter(
    rules: &[AssociationRule],
    output_path: &str,
    plot_title: Option<&str>,
) -> crate::Result<()> {
    if rules.is_empty() {
        anyhow::bail!("No association rules to plot");
    }
    let title = plot_title.unwrap_or("Association Rules: Support vs Confidence (Colored by Lift)");

    let sup_min = rules.iter().map(|r| r.support).fold(f64::INFINITY, f64::min);
    let sup_max = rules.iter().map(|r| r.support).fold(f64::NEG_INFINITY, f64::max);
    let conf_min = rules.iter().map(|r| r.confidence).fold(f64::INFINITY, f64::min);
    let conf_max = rules.iter().map(|r| r.confidence).fold(f64::NEG_INFINITY, f64::max);

    let x_range = (sup_min - 0.05).max(0.0)..(sup_max + 0.05).min(1.05);
    let y_range = (conf_min - 0.05).max(0.0)..(conf_max + 0.05).min(1.05);

    let root = BitMapBackend::new(output_path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 26))
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc("Support")
        .y_desc("Confidence")
        .axis_desc_style(("sans-serif", 15))
        .draw()?;

    for (band, label) in LIFT_LABELS.iter().enumerate() {
        let color = LIFT_COLORS[band];
        let points: Vec<(f64, f64)> = rules
            .iter()
            .filter(|rule| lift_band(rule.lift) == band)
            .map(|rule| (rule.support, rule.confidence))
            .collect();
        if points.is_empty() {
            continue;
        }

        chart
            .draw_series(
                points
                    .into_iter()
                    .map(move |point| Circle::new(point, 4, color.filled())),
            )?
            .label(*label)
            .legend(move |(x, y)| Circle::new((x + 5, y), 4, color.filled()));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    println!("Rule plot saved to: {}", output_path);

    Ok(())
}

/// Bar chart of frequent itemsets found per level
pub fn create_level_chart(levels: &[LevelStats], output_path: &str) -> crate::Result<()> {
    if levels.is_empty() {
        anyhow::bail!("No search levels to plot");
    }
    let max_frequent = levels.iter().map(|l| l.frequent).max().unwrap_or(0).max(1) as f64;
    let max_size = levels.iter().map(|l| l.size).max().unwrap_or(1) as f64;

    let root = BitMapBackend::new(output_path, (600, 400)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Frequent Itemsets per Level", ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0.5f64..(max_size + 0.5), 0f64..(max_frequent * 1.1))?;

    chart
        .configure_mesh()
        .x_desc("Itemset Size")
        .y_desc("Frequent Itemsets")
        .axis_desc_style(("sans-serif", 15))
        .draw()?;

    chart.draw_series(levels.iter().map(|level| {
        let x = level.size as f64;
        Rectangle::new([(x - 0.4, 0.0), (x + 0.4, level.frequent as f64)], BLUE.filled())
    }))?;

    root.present()?;
    println!("Level chart saved to: {}", output_path);

    Ok(())
}

/// Print the top rules to console
pub fn print_rules(rules: &[AssociationRule], top: Option<usize>) {
    let shown = top.unwrap_or(rules.len()).min(rules.len());
    for rule in &rules[..shown] {
        println!("{}", format_rule(rule));
    }
    if shown < rules.len() {
        println!("... {} more", rules.len() - shown);
    }
}

/// Print search statistics to console
pub fn print_summary(db: &TransactionDb, result: &MiningResult) {
    println!("\n=== Mining Summary ===");
    println!("Transactions: {}", db.total_transaction_count());
    println!("Distinct items: {}", db.distinct_items().len());
    println!("Frequent itemsets: {}", result.frequent_itemsets.len());
    println!("Rules: {}", result.rules.len());

    println!("\n  Size | Candidates | Pruned | Frequent | Infrequent");
    println!("  -----|------------|--------|----------|-----------");
    for level in &result.levels {
        println!(
            "  {:4} | {:10} | {:6} | {:8} | {:10}",
            level.size, level.candidates, level.pruned, level.frequent, level.infrequent
        );
    }
}

/// Write the mining result as pretty JSON
pub fn write_json_report(result: &MiningResult, output_path: &str) -> crate::Result<()> {
    let file = File::create(output_path)
        .with_context(|| format!("Failed to create report file: {}", output_path))?;
    serde_json::to_writer_pretty(BufWriter::new(file), result)?;
    println!("JSON report saved to: {}", output_path);
    Ok(())
}

/// Path of the level chart next to the rule plot: `<stem>_levels.<ext>`
///
/// The extension of the rule plot is kept; without one it defaults to png.
pub fn level_chart_path(base_output_path: &str) -> String {
    let base = Path::new(base_output_path);
    let stem = base.file_stem().and_then(|s| s.to_str()).unwrap_or("rules");
    let extension = base.extension().and_then(|e| e.to_str()).unwrap_or("png");
    base.with_file_name(format!("{}_levels.{}", stem, extension))
        .to_string_lossy()
        .into_owned()
}

/// Generate the rule plot, the level chart and the console summary
///
/// The level chart path comes from [`level_chart_path`].
/// The rule plot is skipped when no rule passed the thresholds.
pub fn generate_report(
    db: &TransactionDb,
    result: &MiningResult,
    base_output_path: &str,
) -> crate::Result<()> {
    if result.rules.is_empty() {
        tracing::warn!("no rules passed the thresholds, skipping rule plot");
    } else {
        create_rule_scatter(&result.rules, base_output_path, None)?;
    }

    create_level_chart(&result.levels, &level_chart_path(base_output_path))?;

    print_summary(db, result);

    Ok(())
}
