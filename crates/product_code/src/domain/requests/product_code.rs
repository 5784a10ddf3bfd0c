use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductCodeRequest {
    #[validate(
        length(min = 1, max = 10, message = "Product code must be 1 to 10 characters"),
        custom(function = "validate_prod_code")
    )]
    #[schema(example = "A1")]
    pub prod_code: String,

    #[validate(length(equal = 1, message = "Discount code must be a single character"))]
    #[schema(example = "D")]
    pub discount_code: String,

    #[validate(length(max = 255, message = "Description must be at most 255 characters"))]
    #[schema(example = "Widget")]
    pub description: Option<String>,
}

/// Fields left out keep their stored value; an explicit `"description": null`
/// clears it. `prodCode` is accepted so a full record can be sent back, but it
/// must match the path identifier.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductCodeRequest {
    #[schema(example = "A1")]
    pub prod_code: Option<String>,

    #[validate(length(equal = 1, message = "Discount code must be a single character"))]
    #[schema(example = "D")]
    pub discount_code: Option<String>,

    #[serde(
        default,
        deserialize_with = "present_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    #[validate(length(max = 255, message = "Description must be at most 255 characters"))]
    #[schema(value_type = Option<String>, example = "Widget deluxe")]
    pub description: Option<Option<String>>,
}

/// `Some(None)` for an explicit null, `None` (via `default`) when the key is absent.
fn present_or_null<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

fn validate_prod_code(code: &str) -> Result<(), ValidationError> {
    if code.chars().any(|c| c.is_whitespace() || c == '/') {
        return Err(ValidationError::new("prod_code")
            .with_message("Product code must not contain whitespace or '/'".into()));
    }
    Ok(())
}
