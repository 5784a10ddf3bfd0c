use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub product_id: i32,
    pub product_code: String,
    pub description: Option<String>,
    pub quantity_on_hand: Option<i32>,
    pub available: Option<bool>,
}
