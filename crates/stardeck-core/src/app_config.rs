use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub nasa_api_key: String,
    pub images_base_url: String,
    pub apod_base_url: String,
    pub cache_dir: PathBuf,
    /// Optional YAML override for the built-in search query set.
    pub queries_path: Option<PathBuf>,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub max_concurrent_queries: usize,
    pub mission_cache_ttl_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("nasa_api_key", &"[redacted]")
            .field("images_base_url", &self.images_base_url)
            .field("apod_base_url", &self.apod_base_url)
            .field("cache_dir", &self.cache_dir)
            .field("queries_path", &self.queries_path)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("max_concurrent_queries", &self.max_concurrent_queries)
            .field("mission_cache_ttl_secs", &self.mission_cache_ttl_secs)
            .finish()
    }
}
