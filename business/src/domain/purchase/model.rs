use chrono::{DateTime, Utc};

use super::value_objects::PurchaseStatus;
use crate::domain::shared::value_objects::UserId;

/// A user's purchase (cart) as served by the remote store API.
///
/// Purchases are read-only snapshots in this layer: nothing is ever
/// created or written back locally.
#[derive(Debug, Clone)]
pub struct Purchase {
    pub id: String,
    pub user_id: UserId,
    pub items: Vec<LineItem>,
    /// Total amount computed server-side; authoritative for payment.
    pub price: f64,
    pub status: PurchaseStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A quantity of a referenced product within a purchase.
#[derive(Debug, Clone)]
pub struct LineItem {
    pub id: String,
    pub product_id: String,
    pub quantity: u32,
}

pub struct PurchaseSnapshot {
    pub id: String,
    pub user_id: UserId,
    pub items: Vec<LineItem>,
    pub price: f64,
    pub status: PurchaseStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Purchase {
    /// Constructor for data already materialized by a gateway (no validation).
    pub fn from_gateway(snapshot: PurchaseSnapshot) -> Self {
        Self {
            id: snapshot.id,
            user_id: snapshot.user_id,
            items: snapshot.items,
            price: snapshot.price,
            status: snapshot.status,
            created_at: snapshot.created_at,
            updated_at: snapshot.updated_at,
        }
    }
}
