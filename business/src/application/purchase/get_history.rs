use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::GatewayError;
use crate::domain::logger::Logger;
use crate::domain::purchase::errors::PurchaseError;
use crate::domain::purchase::gateway::PurchaseGateway;
use crate::domain::purchase::model::Purchase;
use crate::domain::purchase::services::sort_newest_first;
use crate::domain::purchase::use_cases::get_history::GetPurchaseHistoryUseCase;
use crate::domain::session::SessionProvider;

pub struct GetPurchaseHistoryUseCaseImpl {
    pub gateway: Arc<dyn PurchaseGateway>,
    pub session: Arc<dyn SessionProvider>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetPurchaseHistoryUseCase for GetPurchaseHistoryUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Purchase>, PurchaseError> {
        let session = self
            .session
            .current()
            .ok_or(PurchaseError::Unauthenticated)?;

        self.logger
            .info(&format!("Fetching purchases for user {}", session.user_id));

        // A 404 from the store API means "no purchases yet", not a failure.
        let purchases = match self.gateway.find_by_user(&session.user_id).await {
            Ok(purchases) => purchases,
            Err(GatewayError::NotFound) => Vec::new(),
            Err(other) => return Err(PurchaseError::Gateway(other)),
        };

        self.logger
            .info(&format!("Found {} purchases", purchases.len()));

        Ok(sort_newest_first(purchases))
    }
}
