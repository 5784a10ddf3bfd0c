use crate::domain::{
    requests::product_code::{CreateProductCodeRequest, UpdateProductCodeRequest},
    response::product_code::ProductCodeResponse,
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynProductCodeCommandService = Arc<dyn ProductCodeCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductCodeCommandServiceTrait {
    async fn create_product_code(
        &self,
        req: &CreateProductCodeRequest,
    ) -> Result<ProductCodeResponse, ServiceError>;
    async fn update_product_code(
        &self,
        prod_code: &str,
        req: &UpdateProductCodeRequest,
    ) -> Result<ProductCodeResponse, ServiceError>;
    async fn delete_product_code(&self, prod_code: &str) -> Result<(), ServiceError>;
}
