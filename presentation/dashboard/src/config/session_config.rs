use std::env;

/// Session credentials for the signed-in user.
///
/// Either value missing means unauthenticated: the use cases refuse to
/// fetch and the error mapper points the user at these variables.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub user_id: Option<String>,
    pub token: Option<String>,
}

impl SessionConfig {
    /// Load session credentials from environment variables
    ///
    /// Environment variables:
    /// - STORE_USER_ID: account id at the store API
    /// - STORE_TOKEN: bearer credential for the store API
    pub fn from_env() -> Self {
        Self {
            user_id: env::var("STORE_USER_ID").ok(),
            token: env::var("STORE_TOKEN").ok(),
        }
    }
}
