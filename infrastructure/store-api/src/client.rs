use std::sync::Arc;

use reqwest::Client;

use business::domain::session::SessionProvider;

/// Shared HTTP client configuration for the remote store API.
pub struct StoreApiClient {
    pub client: Client,
    pub base_url: String,
    session: Arc<dyn SessionProvider>,
}

impl StoreApiClient {
    pub fn new(base_url: String, session: Arc<dyn SessionProvider>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url,
            session,
        }
    }

    /// Builds the authorization header value from the active session.
    /// `None` means there is no session to authenticate with.
    pub fn auth_header(&self) -> Option<String> {
        self.session
            .current()
            .map(|session| format!("Bearer {}", session.token.as_str()))
    }

    /// Returns the purchase-history endpoint URL for a user.
    pub fn cart_by_user_url(&self, user_id: &str) -> String {
        format!("{}/cart/user/{}", self.base_url, user_id)
    }

    /// Returns the single-purchase endpoint URL.
    pub fn cart_url(&self, id: &str) -> String {
        format!("{}/cart/{}", self.base_url, id)
    }

    /// Returns the product listing endpoint URL.
    pub fn products_url(&self) -> String {
        format!("{}/product", self.base_url)
    }

    /// Returns the category listing endpoint URL.
    pub fn categories_url(&self) -> String {
        format!("{}/category", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::StaticSessionProvider;

    fn client_with_session() -> StoreApiClient {
        let session = Arc::new(StaticSessionProvider::new(
            Some("user-1".to_string()),
            Some("token-1".to_string()),
        ));
        StoreApiClient::new("http://localhost:3001".to_string(), session)
    }

    #[test]
    fn should_build_endpoint_urls() {
        let client = client_with_session();

        assert_eq!(
            client.cart_by_user_url("user-1"),
            "http://localhost:3001/cart/user/user-1"
        );
        assert_eq!(client.cart_url("abc"), "http://localhost:3001/cart/abc");
        assert_eq!(client.products_url(), "http://localhost:3001/product");
        assert_eq!(client.categories_url(), "http://localhost:3001/category");
    }

    #[test]
    fn should_build_bearer_header_from_session() {
        let client = client_with_session();
        assert_eq!(client.auth_header().as_deref(), Some("Bearer token-1"));
    }

    #[test]
    fn should_not_build_header_without_session() {
        let session = Arc::new(StaticSessionProvider::new(None, None));
        let client = StoreApiClient::new("http://localhost:3001".to_string(), session);
        assert!(client.auth_header().is_none());
    }
}
