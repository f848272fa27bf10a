use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::gateway::CatalogGateway;
use crate::domain::catalog::model::Category;
use crate::domain::catalog::services::{build_category_index, filter_catalog};
use crate::domain::catalog::use_cases::browse::{BrowseCatalogUseCase, CatalogView};
use crate::domain::logger::Logger;
use crate::domain::session::SessionProvider;

pub struct BrowseCatalogUseCaseImpl {
    pub gateway: Arc<dyn CatalogGateway>,
    pub session: Arc<dyn SessionProvider>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl BrowseCatalogUseCase for BrowseCatalogUseCaseImpl {
    async fn execute(&self) -> Result<CatalogView, CatalogError> {
        if self.session.current().is_none() {
            return Err(CatalogError::Unauthenticated);
        }

        self.logger.info("Fetching products and categories");

        // Both fetches must land before resolution; a failure of either
        // abandons the whole load and leaves the catalog in its quiescent
        // empty state. Best-effort policy, no retry here.
        let (products, categories) =
            tokio::join!(self.gateway.products(), self.gateway.categories());

        let (products, categories) = match (products, categories) {
            (Ok(products), Ok(categories)) => (products, categories),
            (Err(err), _) | (_, Err(err)) => {
                self.logger
                    .error(&format!("Failed to fetch products and categories: {}", err));
                return Ok(CatalogView::default());
            }
        };

        let index = build_category_index(&categories);
        let products = filter_catalog(products, &index);
        let categories: Vec<Category> = categories
            .into_iter()
            .filter(|category| !category.deleted)
            .collect();

        self.logger.info(&format!(
            "Catalog resolved with {} sellable products",
            products.len()
        ));

        Ok(CatalogView {
            products,
            categories,
        })
    }
}
