//! Mission browsing command handlers.

use stardeck_core::{truncate_text, Mission};

use crate::context::Context;

const TITLE_WIDTH: usize = 60;

/// List missions matching `search` and `category`.
///
/// # Errors
///
/// Returns an error if the load cycle produces no missions.
pub(crate) async fn run_missions_list(
    ctx: &Context,
    search: &str,
    category: &str,
) -> anyhow::Result<()> {
    let outcome = ctx.load(false).await?;
    let matches = outcome.repository.apply_filter(search, category);

    if matches.is_empty() {
        println!("no missions match search '{search}' in category '{category}'");
        return Ok(());
    }

    print_mission_table(&matches);
    println!();
    println!(
        "{} of {} missions (source: {})",
        matches.len(),
        outcome.repository.len(),
        outcome.source
    );
    Ok(())
}

/// Show one mission in full.
///
/// # Errors
///
/// Returns an error if the load cycle fails or the id is unknown.
pub(crate) async fn run_missions_show(ctx: &Context, id: &str) -> anyhow::Result<()> {
    let outcome = ctx.load(false).await?;
    let mission = outcome
        .repository
        .by_id(id)
        .ok_or_else(|| anyhow::anyhow!("mission '{id}' not found"))?;

    print!("{}", render_mission_detail(mission));
    Ok(())
}

/// Missions ordered by year, oldest first.
///
/// # Errors
///
/// Returns an error if the load cycle produces no missions.
pub(crate) async fn run_missions_timeline(ctx: &Context, limit: usize) -> anyhow::Result<()> {
    let outcome = ctx.load(false).await?;

    for mission in outcome.repository.timeline(limit) {
        println!("{}", render_timeline_entry(mission));
    }
    Ok(())
}

/// Re-fetch every query and rewrite the cache.
///
/// # Errors
///
/// Returns an error if no missions could be loaded.
pub(crate) async fn run_missions_refresh(ctx: &Context) -> anyhow::Result<()> {
    let outcome = ctx.load(true).await?;
    println!(
        "refreshed {} missions ({} of {} queries failed)",
        outcome.repository.len(),
        outcome.failed_queries,
        ctx.queries.len()
    );
    Ok(())
}

fn print_mission_table(missions: &[&Mission]) {
    println!("{:<18} {:<9} {:<5} TITLE", "ID", "TARGET", "YEAR");
    for mission in missions {
        println!("{}", render_table_row(mission));
    }
}

/// One table row; columns are always separated even when an id overflows.
pub(crate) fn render_table_row(mission: &Mission) -> String {
    let year = mission.year().map(|y| y.to_string()).unwrap_or_default();
    format!(
        "{:<18} {:<9} {:<5} {}",
        mission.id,
        mission.destination,
        year,
        truncate_text(&mission.title, TITLE_WIDTH)
    )
}

pub(crate) fn render_timeline_entry(mission: &Mission) -> String {
    let year = mission
        .year()
        .map_or_else(|| "----".to_string(), |y| y.to_string());
    format!(
        "{year}  {}  @ {}",
        truncate_text(&mission.title, TITLE_WIDTH),
        mission.destination
    )
}

pub(crate) fn render_mission_detail(mission: &Mission) -> String {
    use std::fmt::Write as _;

    let mut out = String::new();
    let _ = writeln!(out, "{}", mission.title);
    let _ = writeln!(out, "ID:           {}", mission.id);
    let _ = writeln!(out, "Destination:  {}", mission.destination);
    let _ = writeln!(out, "Date:         {}", mission.date_created);
    let _ = writeln!(out, "Center:       {}", mission.center);
    let _ = writeln!(out, "Photographer: {}", mission.photographer);
    if mission.has_specific_location() {
        let _ = writeln!(out, "Location:     {}", mission.location);
    }
    if !mission.keywords.is_empty() {
        let _ = writeln!(out, "Keywords:     {}", mission.keywords.join(", "));
    }
    let _ = writeln!(out, "Image:        {}", mission.image_url);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", mission.description);
    out
}
