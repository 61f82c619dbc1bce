use anyhow::Result;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use crate::models::{AnalysisResult, RiskTier};

/// Render a colored terminal report.
pub fn render(result: &AnalysisResult, source: &str, verbose: bool, quiet: bool) -> Result<()> {
    let high = result.count_tier(RiskTier::High);
    let medium = result.count_tier(RiskTier::Medium);
    let low = result.count_tier(RiskTier::Low);

    if quiet {
        println!(
            "Total: {}  High: {}  Medium: {}  Low: {}",
            result.total_count,
            high.to_string().red(),
            medium.to_string().yellow(),
            low.to_string().green(),
        );
        return Ok(());
    }

    println!("\n {} v{}", "legal-lens".bold(), env!("CARGO_PKG_VERSION"));
    println!(" Document: {}\n", source);

    if result.total_count == 0 {
        println!(" {} No critical clauses detected.", "✓".green().bold());
        println!(" The document contains none of the monitored clause types.\n");
        return Ok(());
    }

    println!(" ┌────────────────────────────────────────────────────┐");
    println!(" │  {:<48} │", "SUMMARY".bold());
    println!(" │  {:<48} │", format!("Clauses detected : {}", result.total_count));
    println!(" │  {:<48} │", format!("{}  High risk     : {:>4}", "●".red(), high));
    println!(" │  {:<48} │", format!("{}  Medium risk   : {:>4}", "●".yellow(), medium));
    println!(" │  {:<48} │", format!("{}  Low risk      : {:>4}", "●".green(), low));
    println!(" └────────────────────────────────────────────────────┘\n");

    for tier in RiskTier::ALL {
        let count = result.count_tier(tier);
        if count == 0 {
            continue;
        }
        println!(" {} {} clause{}:\n", tier_tag(tier), count, if count == 1 { "" } else { "s" });
        render_table(result, tier, verbose);
        println!();
    }

    println!(
        " {}",
        "This is an automated keyword scan and does not replace review by a qualified lawyer."
            .dimmed()
    );
    Ok(())
}

fn tier_tag(tier: RiskTier) -> ColoredString {
    match tier {
        RiskTier::High => "[HIGH]".red().bold(),
        RiskTier::Medium => "[MEDIUM]".yellow().bold(),
        RiskTier::Low => "[LOW]".green().bold(),
    }
}

fn tier_color(tier: RiskTier) -> Color {
    match tier {
        RiskTier::High => Color::Red,
        RiskTier::Medium => Color::Yellow,
        RiskTier::Low => Color::Green,
    }
}

fn render_table(result: &AnalysisResult, tier: RiskTier, verbose: bool) {
    let mut table = Table::new();
    let mut header = vec![
        Cell::new("Clause").add_attribute(Attribute::Bold),
        Cell::new("Keyword").add_attribute(Attribute::Bold),
        Cell::new("Sentence").add_attribute(Attribute::Bold),
    ];
    if verbose {
        header.push(Cell::new("Category").add_attribute(Attribute::Bold));
    }
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);

    for hit in result.hits_in_tier(tier) {
        let mut row = vec![
            Cell::new(&hit.description).fg(tier_color(tier)),
            Cell::new(&hit.matched_keyword).add_attribute(Attribute::Bold),
            Cell::new(format!("\"{}\"", hit.matched_sentence)),
        ];
        if verbose {
            row.push(Cell::new(hit.category.id()));
        }
        table.add_row(row);
    }

    println!("{}", table);
}
