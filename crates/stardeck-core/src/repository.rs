use crate::filter::filter_missions;
use crate::mission::Mission;
use crate::timeline::build_timeline;

/// The missions loaded for one session, in load order.
///
/// Populated once per load cycle and never partially updated. Lookups are
/// linear scans; a load yields a few dozen records at most.
#[derive(Debug, Clone, Default)]
pub struct MissionRepository {
    missions: Vec<Mission>,
}

impl MissionRepository {
    #[must_use]
    pub fn new(missions: Vec<Mission>) -> Self {
        Self { missions }
    }

    #[must_use]
    pub fn all(&self) -> &[Mission] {
        &self.missions
    }

    #[must_use]
    pub fn by_id(&self, id: &str) -> Option<&Mission> {
        self.missions.iter().find(|m| m.id == id)
    }

    /// See [`filter_missions`].
    #[must_use]
    pub fn apply_filter(&self, search_term: &str, category: &str) -> Vec<&Mission> {
        filter_missions(&self.missions, search_term, category)
    }

    #[must_use]
    pub fn timeline(&self, limit: usize) -> Vec<&Mission> {
        build_timeline(&self.missions, limit)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.missions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.missions.is_empty()
    }

    #[must_use]
    pub fn into_missions(self) -> Vec<Mission> {
        self.missions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::destination::Destination;
    use crate::filter::ALL_CATEGORIES;

    fn mission(id: &str, title: &str, destination: Destination) -> Mission {
        Mission {
            id: id.to_owned(),
            title: title.to_owned(),
            description: "No description available.".to_owned(),
            keywords: vec![],
            date_created: "Unknown".to_owned(),
            center: "NASA".to_owned(),
            image_url: "https://images-assets.nasa.gov/image/x/x~thumb.jpg".to_owned(),
            photographer: "NASA".to_owned(),
            location: "Space".to_owned(),
            destination,
        }
    }

    #[test]
    fn by_id_finds_existing_mission() {
        let repo = MissionRepository::new(vec![
            mission("A1", "Apollo 11", Destination::Moon),
            mission("B2", "Juno", Destination::Jupiter),
        ]);
        assert_eq!(repo.by_id("B2").map(|m| m.title.as_str()), Some("Juno"));
        assert!(repo.by_id("missing").is_none());
    }

    #[test]
    fn apply_filter_delegates_to_filter_engine() {
        let repo = MissionRepository::new(vec![
            mission("A1", "Apollo 11", Destination::Moon),
            mission("B2", "Juno", Destination::Jupiter),
        ]);
        let found = repo.apply_filter("", "moon");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "A1");
        assert_eq!(repo.apply_filter("", ALL_CATEGORIES).len(), 2);
    }

    #[test]
    fn empty_repository() {
        let repo = MissionRepository::default();
        assert!(repo.is_empty());
        assert_eq!(repo.len(), 0);
        assert!(repo.all().is_empty());
    }
}
