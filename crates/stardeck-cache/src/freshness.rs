use chrono::{DateTime, TimeZone, Utc};

/// How long a cached entry stays valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    /// Valid while `now - written_at < ttl`.
    Rolling(chrono::Duration),
    /// Valid while `written_at` falls on the same local calendar day as `now`.
    SameLocalDay,
}

impl CachePolicy {
    /// The mission cache default: a rolling 24 hours.
    #[must_use]
    pub fn missions_default() -> Self {
        CachePolicy::Rolling(chrono::Duration::hours(24))
    }

    #[must_use]
    pub fn allows(self, written_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        match self {
            CachePolicy::Rolling(ttl) => is_fresh(written_at, now, ttl),
            CachePolicy::SameLocalDay => is_same_day(written_at, now, &chrono::Local),
        }
    }
}

/// Rolling-window freshness: strictly less than `ttl` has elapsed.
#[must_use]
pub fn is_fresh(written_at: DateTime<Utc>, now: DateTime<Utc>, ttl: chrono::Duration) -> bool {
    now.signed_duration_since(written_at) < ttl
}

/// Day-granularity freshness in the given time zone.
#[must_use]
pub fn is_same_day<Tz: TimeZone>(written_at: DateTime<Utc>, now: DateTime<Utc>, tz: &Tz) -> bool {
    written_at.with_timezone(tz).date_naive() == now.with_timezone(tz).date_naive()
}
