use super::session_config::SessionConfig;
use super::store_api_config::StoreApiConfig;

pub struct AppConfig {
    pub api: StoreApiConfig,
    pub session: SessionConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            api: StoreApiConfig::from_env(),
            session: SessionConfig::from_env(),
        }
    }
}
