pub mod apod;
pub mod client;
pub mod error;
pub mod fetch;
pub mod normalize;
pub mod pipeline;
pub mod types;

pub use apod::{load_apod, ApodOutcome};
pub use client::NasaClient;
pub use error::NasaError;
pub use fetch::{fetch_queries, FetchReport, QueryOutcome};
pub use normalize::{dedup_missions, normalize_item};
pub use pipeline::{load_missions, DataSource, LoadOptions, LoadOutcome};
pub use types::{Apod, ApodMediaType, SearchItem};
