use business::domain::catalog::errors::CatalogError;
use business::domain::purchase::errors::PurchaseError;

/// User-facing messages for page-level failures.
pub fn purchase_error_message(err: &PurchaseError) -> &'static str {
    match err {
        PurchaseError::Unauthenticated => {
            "Sessão ausente. Configure STORE_USER_ID e STORE_TOKEN para entrar."
        }
        PurchaseError::NotFound => "Compra não encontrada.",
        PurchaseError::Gateway(_) => {
            "Não foi possível carregar as compras. Tente novamente mais tarde."
        }
    }
}

pub fn catalog_error_message(err: &CatalogError) -> &'static str {
    match err {
        CatalogError::Unauthenticated => {
            "Sessão ausente. Configure STORE_USER_ID e STORE_TOKEN para entrar."
        }
    }
}
