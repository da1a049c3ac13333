use chrono::{DateTime, TimeZone, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingLaunch {
    pub name: String,
    /// Free-form target; not restricted to [`crate::Destination`].
    pub destination: String,
    pub launch_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    Remaining {
        days: i64,
        hours: i64,
        minutes: i64,
        seconds: i64,
    },
    Launched,
}

impl std::fmt::Display for Countdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Countdown::Remaining {
                days,
                hours,
                minutes,
                seconds,
            } => write!(f, "{days:02}d {hours:02}h {minutes:02}m {seconds:02}s"),
            Countdown::Launched => write!(f, "Launched!"),
        }
    }
}

/// Time left until `launch_at`, or [`Countdown::Launched`] once it has passed.
#[must_use]
pub fn countdown(launch_at: DateTime<Utc>, now: DateTime<Utc>) -> Countdown {
    let remaining = launch_at.signed_duration_since(now).num_seconds();
    if remaining <= 0 {
        return Countdown::Launched;
    }
    Countdown::Remaining {
        days: remaining / 86_400,
        hours: (remaining % 86_400) / 3_600,
        minutes: (remaining % 3_600) / 60,
        seconds: remaining % 60,
    }
}

#[must_use]
pub fn default_upcoming_launches() -> Vec<UpcomingLaunch> {
    let launch = |name: &str, destination: &str, (y, mo, d, h, mi): (i32, u32, u32, u32, u32)| {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0)
            .single()
            .map(|launch_at| UpcomingLaunch {
                name: name.to_owned(),
                destination: destination.to_owned(),
                launch_at,
            })
    };

    [
        launch("Artemis III", "Moon", (2026, 9, 15, 12, 0)),
        launch("Europa Clipper", "Jupiter's Moon Europa", (2024, 10, 10, 14, 30)),
        launch("Mars Sample Return", "Mars", (2027, 6, 20, 10, 0)),
    ]
    .into_iter()
    .flatten()
    .collect()
}
