use std::env;

/// Remote store API configuration.
#[derive(Debug, Clone)]
pub struct StoreApiConfig {
    pub base_url: String,
}

impl StoreApiConfig {
    /// Load store API configuration from environment variables
    ///
    /// Environment variables:
    /// - STORE_API_URL: Base URL of the store API (default: "http://localhost:3001")
    pub fn from_env() -> Self {
        let base_url =
            env::var("STORE_API_URL").unwrap_or_else(|_| "http://localhost:3001".to_string());

        Self { base_url }
    }
}
