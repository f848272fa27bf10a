use serde::Deserialize;

use business::domain::catalog::model::{Category, Product};

/// Wire record for a catalog product (Mongo field names).
#[derive(Debug, Deserialize)]
pub struct ProductEntity {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "PRODUCT_NAME")]
    pub name: String,
    #[serde(rename = "PRODUCT_CATEGORY")]
    pub category: String,
    #[serde(rename = "PRODUCT_DELETED")]
    pub deleted: bool,
    #[serde(rename = "PRODUCT_PRICE")]
    pub price: f64,
    #[serde(rename = "PRODUCT_QUANTITY")]
    pub quantity: u32,
    /// Legacy reference present on some records only; the catalog join
    /// always uses `_id`.
    #[serde(rename = "PRODUCT_ID", default)]
    pub product_ref: Option<String>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product {
            id: self.id,
            name: self.name,
            category: self.category,
            deleted: self.deleted,
            price: self.price,
            quantity: self.quantity,
        }
    }
}

/// Wire record for a product category (Mongo field names).
#[derive(Debug, Deserialize)]
pub struct CategoryEntity {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "CATEGORY_NAME")]
    pub name: String,
    #[serde(rename = "CATEGORY_DELETED")]
    pub deleted: bool,
}

impl CategoryEntity {
    pub fn into_domain(self) -> Category {
        Category {
            id: self.id,
            name: self.name,
            deleted: self.deleted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_wire_product_into_domain() {
        let json = r#"{
            "_id": "p1",
            "PRODUCT_NAME": "Suco de Laranja",
            "PRODUCT_CATEGORY": "cat-1",
            "PRODUCT_DELETED": false,
            "PRODUCT_PRICE": 7.5,
            "PRODUCT_QUANTITY": 12,
            "PRODUCT_ID": "legacy-1"
        }"#;
        let entity: ProductEntity = serde_json::from_str(json).unwrap();
        let product = entity.into_domain();

        assert_eq!(product.id, "p1");
        assert_eq!(product.name, "Suco de Laranja");
        assert_eq!(product.category, "cat-1");
        assert!(!product.deleted);
        assert_eq!(product.price, 7.5);
        assert_eq!(product.quantity, 12);
    }

    #[test]
    fn should_tolerate_missing_legacy_product_ref() {
        let json = r#"{
            "_id": "p2",
            "PRODUCT_NAME": "Café",
            "PRODUCT_CATEGORY": "cat-1",
            "PRODUCT_DELETED": true,
            "PRODUCT_PRICE": 15.0,
            "PRODUCT_QUANTITY": 0
        }"#;
        let entity: ProductEntity = serde_json::from_str(json).unwrap();

        assert!(entity.product_ref.is_none());
        assert!(entity.into_domain().deleted);
    }

    #[test]
    fn should_map_wire_category_into_domain() {
        let json = r#"{
            "_id": "cat-1",
            "CATEGORY_NAME": "Bebidas",
            "CATEGORY_DELETED": false
        }"#;
        let entity: CategoryEntity = serde_json::from_str(json).unwrap();
        let category = entity.into_domain();

        assert_eq!(category.id, "cat-1");
        assert_eq!(category.name, "Bebidas");
        assert!(!category.deleted);
    }
}
