//! Astronomy Picture of the Day command handler.

use stardeck_nasa::{Apod, ApodMediaType};

use crate::context::Context;

/// Print today's astronomy picture.
///
/// # Errors
///
/// Returns an error if the picture cannot be fetched and today's copy is
/// not cached.
pub(crate) async fn run_apod(ctx: &Context, refresh: bool) -> anyhow::Result<()> {
    let outcome =
        stardeck_nasa::load_apod(&ctx.client, &ctx.cache, chrono::Utc::now(), refresh).await?;
    print!("{}", render_apod(&outcome.apod));
    Ok(())
}

pub(crate) fn render_apod(apod: &Apod) -> String {
    use std::fmt::Write as _;

    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", apod.title, apod.date);
    match apod.media_type {
        ApodMediaType::Image => {
            let _ = writeln!(out, "Image: {}", apod.url);
            if let Some(hd) = &apod.hdurl {
                let _ = writeln!(out, "HD:    {hd}");
            }
        }
        ApodMediaType::Video => {
            let _ = writeln!(out, "Video: {}", apod.url);
        }
        ApodMediaType::Other => {
            let _ = writeln!(out, "Media: {}", apod.url);
        }
    }
    if let Some(credit) = &apod.copyright {
        let _ = writeln!(out, "Credit: {}", credit.trim());
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", apod.explanation);
    out
}
