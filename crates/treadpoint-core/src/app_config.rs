use std::net::SocketAddr;
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

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Path to the locations fixture (JSON array of raw location records).
    pub locations_path: PathBuf,
    /// Path to the price book fixture.
    pub prices_path: PathBuf,
    /// Path to the vehicle category registry.
    pub categories_path: PathBuf,
    /// Quiet period before a search query recompute fires.
    pub search_debounce_ms: u64,
}
