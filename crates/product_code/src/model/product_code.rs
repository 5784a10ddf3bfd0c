use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row of `PRODUCT_CODE`. The products referencing it are loaded separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct ProductCode {
    pub prod_code: String,
    pub discount_code: String,
    pub description: Option<String>,
}
