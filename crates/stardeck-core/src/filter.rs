//! Free-text search and category filtering over a mission slice.

use crate::mission::Mission;

/// Category sentinel that disables category filtering.
pub const ALL_CATEGORIES: &str = "all";

/// Returns the missions matching both `search_term` and `category`, in input
/// order.
///
/// - Search: case-insensitive substring of the title, description,
///   destination label, or any keyword. An empty term matches everything.
/// - Category: [`ALL_CATEGORIES`], or the destination label equals it
///   (ignoring case), or any keyword / the title contains it (ignoring case).
#[must_use]
pub fn filter_missions<'a>(
    missions: &'a [Mission],
    search_term: &str,
    category: &str,
) -> Vec<&'a Mission> {
    let term = search_term.to_lowercase();
    let category_lower = category.to_lowercase();

    missions
        .iter()
        .filter(|m| matches_search(m, &term) && matches_category(m, category, &category_lower))
        .collect()
}

fn matches_search(mission: &Mission, term: &str) -> bool {
    mission.title.to_lowercase().contains(term)
        || mission.description.to_lowercase().contains(term)
        || mission
            .destination
            .label()
            .to_lowercase()
            .contains(term)
        || mission
            .keywords
            .iter()
            .any(|k| k.to_lowercase().contains(term))
}

fn matches_category(mission: &Mission, category: &str, category_lower: &str) -> bool {
    category == ALL_CATEGORIES
        || mission.destination.label().to_lowercase() == category_lower
        || mission
            .keywords
            .iter()
            .any(|k| k.to_lowercase().contains(category_lower))
        || mission.title.to_lowercase().contains(category_lower)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::destination::Destination;

    fn mission(id: &str, title: &str, destination: Destination, keywords: &[&str]) -> Mission {
        Mission {
            id: id.to_owned(),
            title: title.to_owned(),
            description: "No description available.".to_owned(),
            keywords: keywords.iter().map(|k| (*k).to_owned()).collect(),
            date_created: "Unknown".to_owned(),
            center: "NASA".to_owned(),
            image_url: format!("https://images-assets.nasa.gov/image/{id}/{id}~thumb.jpg"),
            photographer: "NASA".to_owned(),
            location: "Space".to_owned(),
            destination,
        }
    }

    fn sample() -> Vec<Mission> {
        vec![
            mission("M1", "Mars Rover", Destination::Mars, &["rover"]),
            mission("S1", "Cassini Ring Crossing", Destination::Saturn, &["Cassini", "rings"]),
            mission("E1", "Hubble Servicing", Destination::Earth, &[]),
            mission("J1", "Voyager Flyby", Destination::Jupiter, &["Saturn", "outer planets"]),
        ]
    }

    fn ids(found: &[&Mission]) -> Vec<String> {
        found.iter().map(|m| m.id.clone()).collect()
    }

    #[test]
    fn empty_term_and_all_returns_everything_in_order() {
        let missions = sample();
        let found = filter_missions(&missions, "", ALL_CATEGORIES);
        assert_eq!(ids(&found), vec!["M1", "S1", "E1", "J1"]);
        assert!(found.iter().zip(&missions).all(|(a, b)| *a == b));
    }

    #[test]
    fn search_is_case_insensitive() {
        let missions = vec![mission("M1", "Mars Rover", Destination::Mars, &[])];
        assert_eq!(filter_missions(&missions, "MARS", ALL_CATEGORIES).len(), 1);
        assert_eq!(filter_missions(&missions, "mars", "MARS").len(), 1);
    }

    #[test]
    fn search_matches_keywords() {
        let missions = sample();
        let found = filter_missions(&missions, "RINGS", ALL_CATEGORIES);
        assert_eq!(ids(&found), vec!["S1"]);
    }

    #[test]
    fn search_matches_destination_label() {
        let missions = sample();
        let found = filter_missions(&missions, "earth", ALL_CATEGORIES);
        assert_eq!(ids(&found), vec!["E1"]);
    }

    #[test]
    fn search_matches_description() {
        let mut missions = sample();
        missions[2].description = "Astronauts replace gyroscopes".to_owned();
        let found = filter_missions(&missions, "gyroscope", ALL_CATEGORIES);
        assert_eq!(ids(&found), vec!["E1"]);
    }

    #[test]
    fn category_matches_destination_or_keyword() {
        let missions = sample();
        // J1 is a Jupiter mission but carries a "Saturn" keyword.
        let found = filter_missions(&missions, "", "saturn");
        assert_eq!(ids(&found), vec!["S1", "J1"]);
    }

    #[test]
    fn category_matches_title_substring() {
        let missions = sample();
        let found = filter_missions(&missions, "", "hubble");
        assert_eq!(ids(&found), vec!["E1"]);
    }

    #[test]
    fn category_all_is_exact_sentinel() {
        let missions = sample();
        // "ALL" is treated as an ordinary category, which nothing here contains.
        assert!(filter_missions(&missions, "", "ALL").is_empty());
    }

    #[test]
    fn search_and_category_intersect() {
        let missions = sample();
        let found = filter_missions(&missions, "voyager", "saturn");
        assert_eq!(ids(&found), vec!["J1"]);
        assert!(filter_missions(&missions, "rover", "saturn").is_empty());
    }

    #[test]
    fn empty_keywords_never_panic() {
        let missions = vec![mission("X1", "Plain", Destination::Space, &[])];
        assert!(filter_missions(&missions, "nothing", "venus").is_empty());
    }
}
