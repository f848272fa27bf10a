use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::gateway::CatalogGateway;
use crate::domain::catalog::services::{index_products_by_id, resolve_line_items};
use crate::domain::errors::GatewayError;
use crate::domain::logger::Logger;
use crate::domain::purchase::errors::PurchaseError;
use crate::domain::purchase::gateway::PurchaseGateway;
use crate::domain::purchase::services::aggregate_total;
use crate::domain::purchase::use_cases::get_detail::{
    GetPurchaseDetailParams, GetPurchaseDetailUseCase, PurchaseDetailView,
};
use crate::domain::session::SessionProvider;

pub struct GetPurchaseDetailUseCaseImpl {
    pub purchases: Arc<dyn PurchaseGateway>,
    pub catalog: Arc<dyn CatalogGateway>,
    pub session: Arc<dyn SessionProvider>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetPurchaseDetailUseCase for GetPurchaseDetailUseCaseImpl {
    async fn execute(
        &self,
        params: GetPurchaseDetailParams,
    ) -> Result<PurchaseDetailView, PurchaseError> {
        self.session
            .current()
            .ok_or(PurchaseError::Unauthenticated)?;

        self.logger
            .info(&format!("Fetching purchase detail for {}", params.id));

        let purchase = self
            .purchases
            .find_by_id(&params.id)
            .await
            .map_err(|e| match e {
                GatewayError::NotFound => PurchaseError::NotFound,
                other => PurchaseError::Gateway(other),
            })?;

        // The purchase itself is authoritative; a failed product lookup only
        // degrades the rows to their fallback rendering.
        let products_by_id = match self.catalog.products().await {
            Ok(products) => index_products_by_id(products),
            Err(err) => {
                self.logger
                    .warn(&format!("Product lookup failed, rendering raw ids: {}", err));
                HashMap::new()
            }
        };

        let items = resolve_line_items(&purchase, &products_by_id);
        let computed_total = aggregate_total(&items);

        Ok(PurchaseDetailView {
            id: purchase.id,
            created_at: purchase.created_at,
            status: purchase.status,
            items,
            stored_total: purchase.price,
            computed_total,
            payment_enabled: purchase.status.is_payable(),
        })
    }
}
