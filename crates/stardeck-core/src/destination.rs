//! Destination labels and title/keyword inference.

use serde::{Deserialize, Serialize};

/// Coarse category a mission is classified under for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Destination {
    Moon,
    Mars,
    Saturn,
    Jupiter,
    Earth,
    Venus,
    /// Fallback when nothing more specific applies.
    Space,
}

impl Destination {
    pub const ALL: [Destination; 7] = [
        Destination::Moon,
        Destination::Mars,
        Destination::Saturn,
        Destination::Jupiter,
        Destination::Earth,
        Destination::Venus,
        Destination::Space,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Destination::Moon => "Moon",
            Destination::Mars => "Mars",
            Destination::Saturn => "Saturn",
            Destination::Jupiter => "Jupiter",
            Destination::Earth => "Earth",
            Destination::Venus => "Venus",
            Destination::Space => "Space",
        }
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}

impl std::str::FromStr for Destination {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Destination::ALL
            .into_iter()
            .find(|d| d.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown destination '{s}'"))
    }
}

/// Keyword (exact, lowercase) and title (substring, lowercase) cues for one
/// destination. Rules are evaluated in declaration order; first hit wins.
struct InferenceRule {
    destination: Destination,
    keyword: &'static str,
    title_terms: &'static [&'static str],
}

const INFERENCE_RULES: &[InferenceRule] = &[
    InferenceRule {
        destination: Destination::Mars,
        keyword: "mars",
        title_terms: &["mars"],
    },
    InferenceRule {
        destination: Destination::Moon,
        keyword: "moon",
        title_terms: &["moon", "apollo", "artemis"],
    },
    InferenceRule {
        destination: Destination::Jupiter,
        keyword: "jupiter",
        title_terms: &["jupiter"],
    },
    InferenceRule {
        destination: Destination::Saturn,
        keyword: "saturn",
        title_terms: &["saturn"],
    },
    InferenceRule {
        destination: Destination::Venus,
        keyword: "venus",
        title_terms: &["venus"],
    },
    InferenceRule {
        destination: Destination::Earth,
        keyword: "earth",
        title_terms: &["earth", "iss", "hubble"],
    },
];

/// Infers a destination from a mission's title and keywords.
///
/// Returns [`Destination::Space`] when no rule matches.
#[must_use]
pub fn infer_destination(title: &str, keywords: &[String]) -> Destination {
    let title = title.to_lowercase();
    let keywords: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();

    INFERENCE_RULES
        .iter()
        .find(|rule| {
            keywords.iter().any(|k| k == rule.keyword)
                || rule.title_terms.iter().any(|term| title.contains(term))
        })
        .map_or(Destination::Space, |rule| rule.destination)
}
