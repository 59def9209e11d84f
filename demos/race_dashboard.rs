//! Race Dashboard Example
//!
//! Simulates one user session: a few form submissions, one of them
//! rejected, then prints the derived page as JSON for a renderer.
//!
//! Run with: cargo run --example race_dashboard
//! Logging:  RUST_LOG=race_tracker=debug cargo run --example race_dashboard

use anyhow::{Context, Result};
use race_tracker::form::RaceForm;
use race_tracker::session::Session;
use race_tracker::view::Dashboard;
use tracing_subscriber::EnvFilter;

fn submission(
    date: &str,
    race: &str,
    participant: &str,
    category: &str,
    distance: f64,
    time: &str,
    position: i64,
) -> RaceForm {
    RaceForm {
        race_date: Some(date.to_string()),
        race_name: race.to_string(),
        participant_name: participant.to_string(),
        age_category: category.to_string(),
        distance,
        completion_time: time.to_string(),
        position,
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== Girls Cycling Race Tracker ===\n");

    let mut session = Session::new();

    // -------------------------------------------------------------------------
    // 1. Empty session
    // -------------------------------------------------------------------------
    if let Dashboard::Placeholder { message } = session.render() {
        println!("1. Before any submission: {message}");
    }

    // -------------------------------------------------------------------------
    // 2. Submit race results
    // -------------------------------------------------------------------------
    println!("\n2. Submitting race results...");

    let forms = [
        submission("2024-05-01", "Spring Sprint", "Amy", "Teen (13-16)", 12.5, "00:44:02", 2),
        submission("2024-05-01", "Spring Sprint", "Bea", "Teen (13-16)", 12.5, "00:41:37", 1),
        submission("2024-04-01", "City Loop", "Cid", "Junior (8-12)", 5.0, "00:21:10", 1),
        submission("2024-04-14", "Hill Climb", "Dee", "Youth (17-19)", 18.2, "01:02", 3),
    ];
    for form in forms {
        let message = session.submit(form).context("valid submission rejected")?;
        println!("   {message}");
    }

    // Out-of-range position is refused and leaves the store untouched
    let bad = submission("2024-04-14", "Hill Climb", "Eve", "Youth (17-19)", 18.2, "01:05:00", 0);
    if let Err(err) = session.submit(bad) {
        println!("   Rejected: {err}");
    }

    // -------------------------------------------------------------------------
    // 3. Render
    // -------------------------------------------------------------------------
    println!("\n3. Rendering {} entries...", session.store().len());

    let page = session.render();
    let view = page.view().context("store unexpectedly empty")?;

    println!("\n   Results (date, then position):");
    for row in &view.table.rows {
        println!(
            "   {}  {:<14} {:<4} #{}  {:>5.1} km  {}",
            row.date, row.race_name, row.participant, row.position, row.distance, row.distance_style.background
        );
    }

    println!("\n   Insights:");
    for tile in &view.metric_tiles {
        println!("   {}: {}", tile.label, tile.value);
    }

    let batch = view.table.to_record_batch()?;
    println!("\n   Arrow export: {} rows x {} columns", batch.num_rows(), batch.num_columns());

    println!("\n4. Page JSON:\n{}", serde_json::to_string_pretty(&page)?);

    Ok(())
}
