//! Launch countdowns and space facts. Neither needs the network.

use chrono::{DateTime, Datelike, Utc};
use stardeck_core::{countdown, default_upcoming_launches, fact_at, UpcomingLaunch};

pub(crate) fn run_launches(now: DateTime<Utc>) {
    print!("{}", render_launches(&default_upcoming_launches(), now));
}

pub(crate) fn run_fact(index: Option<usize>, now: DateTime<Utc>) {
    println!("{}", fact_for(index, now));
}

pub(crate) fn render_launches(launches: &[UpcomingLaunch], now: DateTime<Utc>) -> String {
    use std::fmt::Write as _;

    let mut out = format!("{:<22}{:<24}{:<18}COUNTDOWN\n", "MISSION", "TARGET", "LAUNCH (UTC)");
    for launch in launches {
        let _ = writeln!(
            out,
            "{:<22}{:<24}{:<18}{}",
            launch.name,
            launch.destination,
            launch.launch_at.format("%Y-%m-%d %H:%M"),
            countdown(launch.launch_at, now)
        );
    }
    out
}

/// Explicit index, or one fact per UTC day of the year.
pub(crate) fn fact_for(index: Option<usize>, now: DateTime<Utc>) -> &'static str {
    let index = index.unwrap_or_else(|| usize::try_from(now.ordinal0()).unwrap_or_default());
    fact_at(index)
}
