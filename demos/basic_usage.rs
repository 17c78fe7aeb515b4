//! Basic usage example for travelog-rs
//!
//! This example demonstrates how to:
//! - Build visited-city records by hand
//! - Normalize country names to codes
//! - Aggregate records into per-city summaries
//! - Pick the screen a summary should open

use travelog_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== travelog-rs Basic Usage Example ===\n");

    let records = vec![
        VisitedCityRecord::note("Paris", "France").with_rating(4.0).visited(),
        VisitedCityRecord::post("paris", "FR").with_rating(5.0).visited(),
        VisitedCityRecord::note("Tokyo", "JP").visited(),
        VisitedCityRecord::post("Rome", "IT"),
        VisitedCityRecord::post("Rome", "Italy").with_rating(3.0),
        VisitedCityRecord::note("", "FR").with_rating(1.0),
    ];

    // Example 1: Country normalization
    println!("--- Example 1: Country normalization ---");
    for raw in ["fr", "France", "United States of America", "Narnia"] {
        let res = resolve_country(raw);
        println!("{raw:>26} -> {} (resolved: {})", res.code, res.resolved);
    }
    println!();

    // Example 2: Aggregation
    println!("--- Example 2: Aggregate {} records ---", records.len());
    let summaries = aggregate_cities(&records);
    for s in &summaries {
        println!(
            "{} ({}): {} [{}] -> {:?}",
            s.name,
            s.country_code,
            s.display_rating().unwrap_or_else(|| "-".into()),
            s.source_text,
            s.route()
        );
    }
    println!();

    // Example 3: Display order and stats
    println!("--- Example 3: Newest first + stats ---");
    let stats = VisitStats::from_summaries(&summaries);
    for s in newest_first(summaries) {
        println!("- {}", s.name);
    }
    println!("{stats:?}");

    Ok(())
}
