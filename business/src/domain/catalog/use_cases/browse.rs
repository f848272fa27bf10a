use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::{Category, Product};

/// Resolved storefront listing: sellable products (category names already
/// substituted) plus the surviving categories.
///
/// The default empty value doubles as the quiescent "not yet resolved"
/// state callers must treat as valid.
#[derive(Debug, Clone, Default)]
pub struct CatalogView {
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
}

#[async_trait]
pub trait BrowseCatalogUseCase: Send + Sync {
    async fn execute(&self) -> Result<CatalogView, CatalogError>;
}
