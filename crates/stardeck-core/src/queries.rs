use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::destination::Destination;
use crate::ConfigError;

/// One search issued against the media API per load cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuerySpec {
    pub query: String,
    /// Destination assigned to every record this query yields. When absent
    /// the destination is inferred from the record's title and keywords.
    #[serde(default)]
    pub target: Option<Destination>,
    /// Maximum number of results kept from this query.
    pub limit: usize,
}

impl SearchQuerySpec {
    #[must_use]
    pub fn new(query: &str, target: Option<Destination>, limit: usize) -> Self {
        Self {
            query: query.to_owned(),
            target,
            limit,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct QueriesFile {
    pub queries: Vec<SearchQuerySpec>,
}

/// The built-in query set, ordered. Order matters: on duplicate ids the
/// earlier query's record (and destination) wins.
#[must_use]
pub fn default_queries() -> Vec<SearchQuerySpec> {
    use Destination::{Earth, Jupiter, Mars, Moon, Saturn};

    vec![
        SearchQuerySpec::new("apollo moon mission", Some(Moon), 3),
        SearchQuerySpec::new("artemis moon", Some(Moon), 2),
        SearchQuerySpec::new("mars rover perseverance", Some(Mars), 3),
        SearchQuerySpec::new("mars curiosity", Some(Mars), 2),
        SearchQuerySpec::new("mars opportunity spirit", Some(Mars), 2),
        SearchQuerySpec::new("cassini saturn", Some(Saturn), 3),
        SearchQuerySpec::new("juno jupiter", Some(Jupiter), 3),
        SearchQuerySpec::new("galileo jupiter", Some(Jupiter), 2),
        SearchQuerySpec::new("voyager mission", Some(Jupiter), 2),
        SearchQuerySpec::new("hubble space telescope", Some(Earth), 3),
        SearchQuerySpec::new("ISS space station", Some(Earth), 2),
    ]
}

/// Load and validate a query set from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_queries(path: &Path) -> Result<Vec<SearchQuerySpec>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::QueriesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let file: QueriesFile =
        serde_yaml::from_str(&content).map_err(ConfigError::QueriesFileParse)?;

    validate_queries(&file.queries)?;

    Ok(file.queries)
}

fn validate_queries(queries: &[SearchQuerySpec]) -> Result<(), ConfigError> {
    if queries.is_empty() {
        return Err(ConfigError::Validation(
            "at least one query is required".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for spec in queries {
        if spec.query.trim().is_empty() {
            return Err(ConfigError::Validation(
                "query text must be non-empty".to_string(),
            ));
        }

        if spec.limit == 0 {
            return Err(ConfigError::Validation(format!(
                "query '{}' has limit 0; must be at least 1",
                spec.query
            )));
        }

        if !seen.insert(spec.query.trim().to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate query: '{}'",
                spec.query
            )));
        }
    }

    Ok(())
}
