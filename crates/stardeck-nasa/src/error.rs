use thiserror::Error;

#[derive(Debug, Error)]
pub enum NasaError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("invalid base URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("normalization error for item {item}: {reason}")]
    Normalization { item: String, reason: String },

    #[error(
        "no missions could be loaded ({failed_queries} of {total_queries} queries failed); run `stardeck missions refresh` to retry"
    )]
    NoMissions {
        failed_queries: usize,
        total_queries: usize,
    },
}
