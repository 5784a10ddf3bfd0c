use crate::model::{Product as ProductModel, ProductCode as ProductCodeModel};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductCodeQueryRepository = Arc<dyn ProductCodeQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductCodeQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<ProductCodeModel>, RepositoryError>;
    async fn find_by_code(
        &self,
        prod_code: &str,
    ) -> Result<Option<ProductCodeModel>, RepositoryError>;
    async fn find_products(&self, prod_code: &str) -> Result<Vec<ProductModel>, RepositoryError>;
}
