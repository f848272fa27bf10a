#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog.unauthenticated")]
    Unauthenticated,
}
