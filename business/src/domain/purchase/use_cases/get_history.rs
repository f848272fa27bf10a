use async_trait::async_trait;

use crate::domain::purchase::errors::PurchaseError;
use crate::domain::purchase::model::Purchase;

#[async_trait]
pub trait GetPurchaseHistoryUseCase: Send + Sync {
    /// Returns the session user's purchases, newest first. An empty vector
    /// is the legitimate "no purchases yet" state, not an error.
    async fn execute(&self) -> Result<Vec<Purchase>, PurchaseError>;
}
