use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::AUTHORIZATION;

use business::domain::errors::GatewayError;
use business::domain::purchase::gateway::PurchaseGateway;
use business::domain::purchase::model::Purchase;
use business::domain::shared::value_objects::UserId;

use super::entity::CartEntity;
use crate::client::StoreApiClient;

pub struct PurchaseGatewayHttp {
    client: StoreApiClient,
}

impl PurchaseGatewayHttp {
    pub fn new(client: StoreApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PurchaseGateway for PurchaseGatewayHttp {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Purchase>, GatewayError> {
        let auth = self
            .client
            .auth_header()
            .ok_or(GatewayError::Unauthorized)?;

        let response = self
            .client
            .client
            .get(self.client.cart_by_user_url(user_id.as_str()))
            .header(AUTHORIZATION, auth)
            .send()
            .await
            .map_err(|_| GatewayError::Transport)?;

        // 404 is the API's "no purchases yet" signal.
        if response.status() == StatusCode::NOT_FOUND {
            return Err(GatewayError::NotFound);
        }
        if !response.status().is_success() {
            return Err(GatewayError::Transport);
        }

        let entities: Vec<CartEntity> = response
            .json()
            .await
            .map_err(|_| GatewayError::Transport)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Purchase, GatewayError> {
        let auth = self
            .client
            .auth_header()
            .ok_or(GatewayError::Unauthorized)?;

        let response = self
            .client
            .client
            .get(self.client.cart_url(id))
            .header(AUTHORIZATION, auth)
            .send()
            .await
            .map_err(|_| GatewayError::Transport)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(GatewayError::NotFound);
        }
        if !response.status().is_success() {
            return Err(GatewayError::Transport);
        }

        let entity: CartEntity = response
            .json()
            .await
            .map_err(|_| GatewayError::Transport)?;

        Ok(entity.into_domain())
    }
}
