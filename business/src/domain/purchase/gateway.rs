use async_trait::async_trait;

use crate::domain::errors::GatewayError;
use crate::domain::shared::value_objects::UserId;

use super::model::Purchase;

#[async_trait]
pub trait PurchaseGateway: Send + Sync {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Purchase>, GatewayError>;
    async fn find_by_id(&self, id: &str) -> Result<Purchase, GatewayError>;
}
