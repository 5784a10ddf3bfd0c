use crate::{
    domain::requests::product_code::{CreateProductCodeRequest, UpdateProductCodeRequest},
    model::ProductCode as ProductCodeModel,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductCodeCommandRepository =
    Arc<dyn ProductCodeCommandRepositoryTrait + Send + Sync>;

/// Every method runs in its own transaction.
#[async_trait]
pub trait ProductCodeCommandRepositoryTrait {
    /// Fails with `AlreadyExists` when the code is taken.
    async fn create_product_code(
        &self,
        req: &CreateProductCodeRequest,
    ) -> Result<ProductCodeModel, RepositoryError>;

    /// Overwrites only the fields present in `req`. Fails with `NotFound`
    /// when no row has `prod_code`.
    async fn update_product_code(
        &self,
        prod_code: &str,
        req: &UpdateProductCodeRequest,
    ) -> Result<ProductCodeModel, RepositoryError>;

    /// Fails with `NotFound` for an unknown code and `ForeignKey` while
    /// products still reference it.
    async fn delete_product_code(&self, prod_code: &str) -> Result<(), RepositoryError>;
}
