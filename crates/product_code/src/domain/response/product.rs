use crate::model::Product as ProductModel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub product_id: i32,
    pub product_code: String,
    pub description: Option<String>,
    pub quantity_on_hand: Option<i32>,
    pub available: Option<bool>,
}

impl From<ProductModel> for ProductResponse {
    fn from(value: ProductModel) -> Self {
        ProductResponse {
            product_id: value.product_id,
            product_code: value.product_code,
            description: value.description,
            quantity_on_hand: value.quantity_on_hand,
            available: value.available,
        }
    }
}
