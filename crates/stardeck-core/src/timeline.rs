use crate::mission::Mission;

pub const DEFAULT_TIMELINE_LIMIT: usize = 15;

/// Missions ordered by creation year (oldest first), capped at `limit`.
///
/// Missions without a parseable year sort as year 0. The sort is stable, so
/// missions from the same year keep their load order.
#[must_use]
pub fn build_timeline(missions: &[Mission], limit: usize) -> Vec<&Mission> {
    let mut ordered: Vec<&Mission> = missions.iter().collect();
    ordered.sort_by_key(|m| m.year().unwrap_or(0));
    ordered.truncate(limit);
    ordered
}

/// Shortens `text` to `max_chars` characters, appending `...` when cut.
#[must_use]
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_owned(),
    }
}
