use chrono::{DateTime, Utc};
use serde::Deserialize;

use business::domain::purchase::model::{LineItem, Purchase, PurchaseSnapshot};
use business::domain::purchase::value_objects::PurchaseStatus;
use business::domain::shared::value_objects::UserId;

/// Wire record for a cart as served by the store API (Mongo field names).
#[derive(Debug, Deserialize)]
pub struct CartEntity {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "CART_USER_ID")]
    pub user_id: String,
    #[serde(rename = "CART_PRODUCT", default)]
    pub items: Vec<CartProductEntity>,
    #[serde(rename = "CART_PRICE")]
    pub price: f64,
    #[serde(rename = "CART_STATUS")]
    pub status: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "__v", default)]
    pub version: i64,
}

#[derive(Debug, Deserialize)]
pub struct CartProductEntity {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(rename = "PRODUCT_ID")]
    pub product_id: String,
    #[serde(rename = "PRODUCT_QUANTITY")]
    pub quantity: u32,
}

impl CartEntity {
    pub fn into_domain(self) -> Purchase {
        Purchase::from_gateway(PurchaseSnapshot {
            id: self.id,
            user_id: UserId::new(self.user_id),
            items: self
                .items
                .into_iter()
                .map(|item| LineItem {
                    id: item.id,
                    product_id: item.product_id,
                    quantity: item.quantity,
                })
                .collect(),
            price: self.price,
            status: PurchaseStatus::parse(&self.status),
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CART_JSON: &str = r#"{
        "_id": "665f1a2b3c4d5e6f70a1b2c3",
        "CART_USER_ID": "user-1",
        "CART_PRODUCT": [
            { "PRODUCT_ID": "p1", "PRODUCT_QUANTITY": 2, "_id": "l1" }
        ],
        "CART_PRICE": 21.0,
        "CART_STATUS": "active",
        "createdAt": "2024-01-02T10:00:00.000Z",
        "updatedAt": "2024-01-02T10:05:00.000Z",
        "__v": 0
    }"#;

    #[test]
    fn should_map_wire_cart_into_domain_purchase() {
        let entity: CartEntity = serde_json::from_str(CART_JSON).unwrap();
        let purchase = entity.into_domain();

        assert_eq!(purchase.id, "665f1a2b3c4d5e6f70a1b2c3");
        assert_eq!(purchase.user_id.as_str(), "user-1");
        assert_eq!(purchase.items.len(), 1);
        assert_eq!(purchase.items[0].product_id, "p1");
        assert_eq!(purchase.items[0].quantity, 2);
        assert_eq!(purchase.price, 21.0);
        assert_eq!(purchase.status, PurchaseStatus::Active);
    }

    #[test]
    fn should_degrade_unrecognized_wire_status_to_unknown() {
        let json = CART_JSON.replace("\"active\"", "\"refunded\"");
        let entity: CartEntity = serde_json::from_str(&json).unwrap();

        assert_eq!(entity.into_domain().status, PurchaseStatus::Unknown);
    }

    #[test]
    fn should_tolerate_missing_product_array_and_version() {
        let json = r#"{
            "_id": "abc",
            "CART_USER_ID": "user-1",
            "CART_PRICE": 0,
            "CART_STATUS": "canceled",
            "createdAt": "2024-01-02T10:00:00.000Z",
            "updatedAt": "2024-01-02T10:00:00.000Z"
        }"#;
        let entity: CartEntity = serde_json::from_str(json).unwrap();
        let purchase = entity.into_domain();

        assert!(purchase.items.is_empty());
        assert_eq!(purchase.status, PurchaseStatus::Canceled);
    }
}
