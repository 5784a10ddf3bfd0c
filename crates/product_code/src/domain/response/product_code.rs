use crate::model::ProductCode as ProductCodeModel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProductCodeResponse {
    #[schema(example = "A1")]
    pub prod_code: String,
    #[schema(example = "D")]
    pub discount_code: String,
    #[schema(example = "Widget")]
    pub description: Option<String>,
}

impl From<ProductCodeModel> for ProductCodeResponse {
    fn from(value: ProductCodeModel) -> Self {
        ProductCodeResponse {
            prod_code: value.prod_code,
            discount_code: value.discount_code,
            description: value.description,
        }
    }
}
