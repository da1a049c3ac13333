pub mod app_config;
pub mod command;
pub mod config;
pub mod countdown;
pub mod destination;
pub mod facts;
pub mod filter;
pub mod mission;
pub mod queries;
pub mod repository;
pub mod timeline;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use command::{interpret_command, CommandIntent};
pub use config::{load_app_config, load_app_config_from_env};
pub use countdown::{countdown, default_upcoming_launches, Countdown, UpcomingLaunch};
pub use destination::{infer_destination, Destination};
pub use facts::{fact_at, SPACE_FACTS};
pub use filter::{filter_missions, ALL_CATEGORIES};
pub use mission::Mission;
pub use queries::{default_queries, load_queries, QueriesFile, SearchQuerySpec};
pub use repository::MissionRepository;
pub use timeline::{build_timeline, truncate_text, DEFAULT_TIMELINE_LIMIT};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read queries file {path}: {source}")]
    QueriesFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse queries file: {0}")]
    QueriesFileParse(#[source] serde_yaml::Error),

    #[error("invalid query configuration: {0}")]
    Validation(String),
}
