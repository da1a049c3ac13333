//! Interpretation of spoken or typed navigation phrases.

use crate::destination::Destination;
use crate::filter::ALL_CATEGORIES;

/// What a phrase asks the explorer to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandIntent {
    ShowDestination(Destination),
    ShowAll,
    DailyPicture,
    Unrecognized,
}

impl CommandIntent {
    /// Category to filter by, if this intent changes the mission filter.
    #[must_use]
    pub fn category(self) -> Option<&'static str> {
        match self {
            CommandIntent::ShowDestination(d) => Some(d.label()),
            CommandIntent::ShowAll => Some(ALL_CATEGORIES),
            CommandIntent::DailyPicture | CommandIntent::Unrecognized => None,
        }
    }

    #[must_use]
    pub fn reply(self) -> String {
        match self {
            CommandIntent::ShowDestination(d) => format!("Showing {d} missions"),
            CommandIntent::ShowAll => "Showing all missions".to_owned(),
            CommandIntent::DailyPicture => "Here is the astronomy picture of the day".to_owned(),
            CommandIntent::Unrecognized => "Command not recognized".to_owned(),
        }
    }
}

const DESTINATION_CUES: &[(&str, Destination)] = &[
    ("mars", Destination::Mars),
    ("moon", Destination::Moon),
    ("jupiter", Destination::Jupiter),
    ("saturn", Destination::Saturn),
    ("earth", Destination::Earth),
];

/// Maps a free-form phrase to an intent. Destination cues are checked first,
/// in a fixed order, so "moon of mars" resolves to Mars.
#[must_use]
pub fn interpret_command(phrase: &str) -> CommandIntent {
    let phrase = phrase.to_lowercase();

    if let Some((_, destination)) = DESTINATION_CUES
        .iter()
        .find(|(cue, _)| phrase.contains(cue))
    {
        return CommandIntent::ShowDestination(*destination);
    }
    if phrase.contains("all missions") {
        return CommandIntent::ShowAll;
    }
    if phrase.contains("mission of the day") {
        return CommandIntent::DailyPicture;
    }
    CommandIntent::Unrecognized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_destination() {
        assert_eq!(
            interpret_command("Show me Jupiter"),
            CommandIntent::ShowDestination(Destination::Jupiter)
        );
    }

    #[test]
    fn mars_checked_before_moon() {
        assert_eq!(
            interpret_command("the moons of mars"),
            CommandIntent::ShowDestination(Destination::Mars)
        );
    }

    #[test]
    fn recognizes_all_missions() {
        let intent = interpret_command("show all missions please");
        assert_eq!(intent, CommandIntent::ShowAll);
        assert_eq!(intent.category(), Some(ALL_CATEGORIES));
    }

    #[test]
    fn recognizes_daily_picture() {
        let intent = interpret_command("what is the mission of the day");
        assert_eq!(intent, CommandIntent::DailyPicture);
        assert_eq!(intent.category(), None);
    }

    #[test]
    fn venus_is_not_a_voice_cue() {
        assert_eq!(interpret_command("venus"), CommandIntent::Unrecognized);
    }

    #[test]
    fn replies_name_destination() {
        assert_eq!(
            CommandIntent::ShowDestination(Destination::Saturn).reply(),
            "Showing Saturn missions"
        );
        assert_eq!(
            CommandIntent::Unrecognized.reply(),
            "Command not recognized"
        );
    }
}
