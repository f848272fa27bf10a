use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::catalog::services::LineItemView;
use crate::domain::purchase::errors::PurchaseError;
use crate::domain::purchase::value_objects::PurchaseStatus;

pub struct GetPurchaseDetailParams {
    pub id: String,
}

/// Everything the detail page renders for one purchase.
///
/// `stored_total` is the server-computed price and stays authoritative for
/// payment; `computed_total` is the informational sum of resolved line
/// totals and is not reconciled against it.
#[derive(Debug, Clone)]
pub struct PurchaseDetailView {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub status: PurchaseStatus,
    pub items: Vec<LineItemView>,
    pub stored_total: f64,
    pub computed_total: f64,
    pub payment_enabled: bool,
}

#[async_trait]
pub trait GetPurchaseDetailUseCase: Send + Sync {
    async fn execute(&self, params: GetPurchaseDetailParams)
    -> Result<PurchaseDetailView, PurchaseError>;
}
