#[derive(Debug, thiserror::Error)]
pub enum PurchaseError {
    #[error("purchase.unauthenticated")]
    Unauthenticated,
    #[error("purchase.not_found")]
    NotFound,
    #[error("gateway.failure")]
    Gateway(#[from] crate::domain::errors::GatewayError),
}
