use crate::{
    abstract_trait::product_code::repository::ProductCodeQueryRepositoryTrait,
    model::{Product as ProductModel, ProductCode as ProductCodeModel},
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductCodeQueryRepository {
    db: ConnectionPool,
}

impl ProductCodeQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCodeQueryRepositoryTrait for ProductCodeQueryRepository {
    async fn find_all(&self) -> Result<Vec<ProductCodeModel>, RepositoryError> {
        info!("🔍 Fetching all product codes");

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let rows = sqlx::query_as::<_, ProductCodeModel>(
            r#"
            SELECT prod_code, discount_code, description
            FROM product_code
            ORDER BY prod_code
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch product codes: {:?}", e);
            RepositoryError::from(e)
        })?;

        info!("✅ Fetched {} product codes", rows.len());

        Ok(rows)
    }

    async fn find_by_code(
        &self,
        prod_code: &str,
    ) -> Result<Option<ProductCodeModel>, RepositoryError> {
        info!("🆔 Fetching product code: {}", prod_code);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, ProductCodeModel>(
            r#"
            SELECT prod_code, discount_code, description
            FROM product_code
            WHERE prod_code = $1
            "#,
        )
        .bind(prod_code)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch product code {}: {:?}", prod_code, e);
            RepositoryError::from(e)
        })?;

        Ok(result)
    }

    async fn find_products(&self, prod_code: &str) -> Result<Vec<ProductModel>, RepositoryError> {
        info!("📦 Fetching products for product code: {}", prod_code);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let rows = sqlx::query_as::<_, ProductModel>(
            r#"
            SELECT product_id, product_code, description, quantity_on_hand, available
            FROM product
            WHERE product_code = $1
            ORDER BY product_id
            "#,
        )
        .bind(prod_code)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch products for {}: {:?}", prod_code, e);
            RepositoryError::from(e)
        })?;

        Ok(rows)
    }
}
