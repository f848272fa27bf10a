use std::collections::HashMap;

use super::model::{Category, Product};
use crate::domain::purchase::model::Purchase;

/// A purchase line item resolved against the live catalog.
///
/// When the referenced product has vanished, `name` falls back to the raw
/// product id and `line_total` is zero; the row itself is never dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItemView {
    pub name: String,
    pub quantity: u32,
    pub line_total: f64,
}

/// Builds the id → display name index over non-deleted categories.
pub fn build_category_index(categories: &[Category]) -> HashMap<String, String> {
    categories
        .iter()
        .filter(|category| !category.deleted)
        .map(|category| (category.id.clone(), category.name.clone()))
        .collect()
}

/// Narrows the raw product list to what the storefront may offer.
///
/// A product survives only if it is not deleted, its category resolves in
/// the index, and it has stock. Survivors get their `category` field
/// rewritten from id to display name. Input order is preserved.
pub fn filter_catalog(products: Vec<Product>, index: &HashMap<String, String>) -> Vec<Product> {
    products
        .into_iter()
        .filter(|product| !product.deleted && product.quantity > 0)
        .filter_map(|mut product| {
            let name = index.get(&product.category)?;
            product.category = name.clone();
            Some(product)
        })
        .collect()
}

/// Indexes products by id for the line-item join.
pub fn index_products_by_id(products: Vec<Product>) -> HashMap<String, Product> {
    products
        .into_iter()
        .map(|product| (product.id.clone(), product))
        .collect()
}

/// Resolves every line item of a purchase against the product index.
///
/// The output row count always equals the purchase's line-item count: a
/// missing product degrades to a fallback row instead of failing or being
/// dropped.
pub fn resolve_line_items(
    purchase: &Purchase,
    products_by_id: &HashMap<String, Product>,
) -> Vec<LineItemView> {
    purchase
        .items
        .iter()
        .map(|item| match products_by_id.get(&item.product_id) {
            Some(product) => LineItemView {
                name: product.name.clone(),
                quantity: item.quantity,
                line_total: product.price * f64::from(item.quantity),
            },
            None => LineItemView {
                name: item.product_id.clone(),
                quantity: item.quantity,
                line_total: 0.0,
            },
        })
        .collect()
}
