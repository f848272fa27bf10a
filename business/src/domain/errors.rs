/// Gateway errors for the domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("gateway.not_found")]
    NotFound,
    #[error("gateway.transport")]
    Transport,
    #[error("gateway.unauthorized")]
    Unauthorized,
}
