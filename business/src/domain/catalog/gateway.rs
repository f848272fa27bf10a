use async_trait::async_trait;

use crate::domain::errors::GatewayError;

use super::model::{Category, Product};

#[async_trait]
pub trait CatalogGateway: Send + Sync {
    async fn products(&self) -> Result<Vec<Product>, GatewayError>;
    async fn categories(&self) -> Result<Vec<Category>, GatewayError>;
}
