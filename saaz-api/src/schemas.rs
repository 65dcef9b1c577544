//! Request schemas for the six record kinds.
//!
//! Each struct corresponds to a document collection; the collection name is
//! the lowercase of the type name (e.g. `Product` -> "product"). Validation
//! happens in two phases at the request boundary: serde deserialization
//! rejects missing required fields and wrong types and applies defaults, then
//! `Validate::validate()` collects every range and format violation into a
//! field-keyed error map. Records that pass both phases are the only values
//! that reach the document store.

use serde::{Deserialize, Serialize};
use validator::Validate;

use saaz_store::document::Document;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Address {
    pub line1: String,
    pub line2: Option<String>,
    pub city: String,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct User {
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub phone: Option<String>,
    /// Stored as received; hashing is out of scope for this demo backend.
    pub password: String,
    #[validate(nested)]
    pub address: Option<Address>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Category {
    pub name: String,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Product {
    pub name: String,
    /// Free-text category label, not a reference into the category collection.
    pub category: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub stock: i64,
    pub description: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 5.0))]
    pub ratings: f64,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 100.0))]
    pub discount_percent: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OrderItem {
    pub product_id: String,
    pub name: String,
    pub price: f64,
    #[validate(range(min = 1))]
    pub quantity: i64,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Order {
    pub user_id: String,
    #[validate(nested)]
    pub items: Vec<OrderItem>,
    /// Expected to be "cod", "card" or "wallet"; accepted as any string.
    pub payment_method: String,
    #[validate(range(min = 0.0))]
    pub total_amount: f64,
    #[serde(default = "default_order_status")]
    pub order_status: String,
    #[validate(nested)]
    pub shipping_address: Address,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Wishlist {
    pub user_id: String,
    pub product_id: String,
}

fn default_order_status() -> String {
    "pending".to_string()
}

impl Document for User {
    fn collection_name() -> &'static str {
        "user"
    }
}

impl Document for Category {
    fn collection_name() -> &'static str {
        "category"
    }
}

impl Document for Product {
    fn collection_name() -> &'static str {
        "product"
    }
}

impl Document for Order {
    fn collection_name() -> &'static str {
        "order"
    }
}

impl Document for Wishlist {
    fn collection_name() -> &'static str {
        "wishlist"
    }
}
