use crate::domain::response::{product::ProductResponse, product_code::ProductCodeResponse};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynProductCodeQueryService = Arc<dyn ProductCodeQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductCodeQueryServiceTrait {
    async fn find_all(&self) -> Result<Vec<ProductCodeResponse>, ServiceError>;
    /// Zero or one element; an unknown code is not an error here.
    async fn find_by_code(&self, prod_code: &str) -> Result<Vec<ProductCodeResponse>, ServiceError>;
    /// Fails with `NotFound` when the code itself does not exist.
    async fn find_products(&self, prod_code: &str) -> Result<Vec<ProductResponse>, ServiceError>;
}
