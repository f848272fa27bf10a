use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;

use business::domain::catalog::gateway::CatalogGateway;
use business::domain::catalog::model::{Category, Product};
use business::domain::errors::GatewayError;

use super::entity::{CategoryEntity, ProductEntity};
use crate::client::StoreApiClient;

pub struct CatalogGatewayHttp {
    client: StoreApiClient,
}

impl CatalogGatewayHttp {
    pub fn new(client: StoreApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CatalogGateway for CatalogGatewayHttp {
    async fn products(&self) -> Result<Vec<Product>, GatewayError> {
        let auth = self
            .client
            .auth_header()
            .ok_or(GatewayError::Unauthorized)?;

        let response = self
            .client
            .client
            .get(self.client.products_url())
            .header(AUTHORIZATION, auth)
            .send()
            .await
            .map_err(|_| GatewayError::Transport)?;

        if !response.status().is_success() {
            return Err(GatewayError::Transport);
        }

        let entities: Vec<ProductEntity> = response
            .json()
            .await
            .map_err(|_| GatewayError::Transport)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn categories(&self) -> Result<Vec<Category>, GatewayError> {
        let auth = self
            .client
            .auth_header()
            .ok_or(GatewayError::Unauthorized)?;

        let response = self
            .client
            .client
            .get(self.client.categories_url())
            .header(AUTHORIZATION, auth)
            .send()
            .await
            .map_err(|_| GatewayError::Transport)?;

        if !response.status().is_success() {
            return Err(GatewayError::Transport);
        }

        let entities: Vec<CategoryEntity> = response
            .json()
            .await
            .map_err(|_| GatewayError::Transport)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }
}
