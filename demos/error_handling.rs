//! Error handling example for travelog-rs
//!
//! This example demonstrates proper error handling and edge cases

use travelog_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== travelog-rs Error Handling Example ===\n");

    // Example 1: Missing export file
    println!("--- Example 1: Loading a missing file ---");
    match load_records_from_path("does-not-exist.json") {
        Ok(records) => println!("✓ Loaded {} records", records.len()),
        Err(e) => println!("✗ {e}"),
    }
    println!();

    // Example 2: Malformed JSON
    println!("--- Example 2: Malformed JSON ---");
    match load_records_from_reader("{ not json".as_bytes()) {
        Ok(_) => println!("unexpectedly parsed"),
        Err(e) => println!("✗ {e}"),
    }
    println!();

    // Example 3: Ratings outside the declared scale
    println!("--- Example 3: Out-of-range rating ---");
    let raw = vec![VisitedCityRecord::note("Cusco", "PE").with_rating(8.0)];
    match ingest_records(raw.clone(), RatingScale::Five) {
        Ok(_) => println!("unexpectedly accepted"),
        Err(e) => println!("✗ {e}"),
    }
    let ok = ingest_records(raw, RatingScale::Ten)?;
    println!("✓ As ten-point: stored {:?}", ok[0].rating);
    println!();

    // Example 4: Unknown countries degrade, they do not fail
    println!("--- Example 4: Unknown country ---");
    let summaries = aggregate_cities(&[VisitedCityRecord::note("Atlantis City", "Atlantis")]);
    println!("  code: {}", summaries[0].country_code);
    println!("  name: {:?}", summaries[0].country_name());

    Ok(())
}
