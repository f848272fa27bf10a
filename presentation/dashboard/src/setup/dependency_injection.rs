use std::sync::Arc;

use logger::TracingLogger;
use store_api::catalog::gateway::CatalogGatewayHttp;
use store_api::client::StoreApiClient;
use store_api::purchase::gateway::PurchaseGatewayHttp;
use store_api::session::StaticSessionProvider;

use business::application::catalog::browse::BrowseCatalogUseCaseImpl;
use business::application::purchase::get_detail::GetPurchaseDetailUseCaseImpl;
use business::application::purchase::get_history::GetPurchaseHistoryUseCaseImpl;
use business::domain::catalog::use_cases::browse::BrowseCatalogUseCase;
use business::domain::purchase::use_cases::get_detail::GetPurchaseDetailUseCase;
use business::domain::purchase::use_cases::get_history::GetPurchaseHistoryUseCase;
use business::domain::session::SessionProvider;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub browse_catalog: Arc<dyn BrowseCatalogUseCase>,
    pub get_history: Arc<dyn GetPurchaseHistoryUseCase>,
    pub get_detail: Arc<dyn GetPurchaseDetailUseCase>,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> Self {
        let logger = Arc::new(TracingLogger);
        let session: Arc<dyn SessionProvider> = Arc::new(StaticSessionProvider::new(
            config.session.user_id.clone(),
            config.session.token.clone(),
        ));

        // Infrastructure adapters
        let purchase_client = StoreApiClient::new(config.api.base_url.clone(), session.clone());
        let catalog_client = StoreApiClient::new(config.api.base_url.clone(), session.clone());
        let purchase_gateway = Arc::new(PurchaseGatewayHttp::new(purchase_client));
        let catalog_gateway = Arc::new(CatalogGatewayHttp::new(catalog_client));

        // Use cases
        let browse_catalog = Arc::new(BrowseCatalogUseCaseImpl {
            gateway: catalog_gateway.clone(),
            session: session.clone(),
            logger: logger.clone(),
        });
        let get_history = Arc::new(GetPurchaseHistoryUseCaseImpl {
            gateway: purchase_gateway.clone(),
            session: session.clone(),
            logger: logger.clone(),
        });
        let get_detail = Arc::new(GetPurchaseDetailUseCaseImpl {
            purchases: purchase_gateway,
            catalog: catalog_gateway,
            session,
            logger,
        });

        Self {
            browse_catalog,
            get_history,
            get_detail,
        }
    }
}
