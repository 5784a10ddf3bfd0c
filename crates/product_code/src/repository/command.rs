use crate::{
    abstract_trait::product_code::repository::ProductCodeCommandRepositoryTrait,
    domain::requests::product_code::{CreateProductCodeRequest, UpdateProductCodeRequest},
    model::ProductCode as ProductCodeModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct ProductCodeCommandRepository {
    db: ConnectionPool,
}

impl ProductCodeCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCodeCommandRepositoryTrait for ProductCodeCommandRepository {
    async fn create_product_code(
        &self,
        req: &CreateProductCodeRequest,
    ) -> Result<ProductCodeModel, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(|e| {
            error!("❌ Failed to begin transaction: {:?}", e);
            RepositoryError::from(e)
        })?;

        let result = sqlx::query_as::<_, ProductCodeModel>(
            r#"
            INSERT INTO product_code (prod_code, discount_code, description)
            VALUES ($1, $2, $3)
            RETURNING prod_code, discount_code, description
            "#,
        )
        .bind(&req.prod_code)
        .bind(&req.discount_code)
        .bind(&req.description)
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to create product code {}: {:?}", req.prod_code, err);
            RepositoryError::from(err)
        })?;

        tx.commit().await.map_err(RepositoryError::from)?;

        info!("✅ Created product code {}", result.prod_code);
        Ok(result)
    }

    async fn update_product_code(
        &self,
        prod_code: &str,
        req: &UpdateProductCodeRequest,
    ) -> Result<ProductCodeModel, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let existing = sqlx::query_as::<_, ProductCodeModel>(
            r#"
            SELECT prod_code, discount_code, description
            FROM product_code
            WHERE prod_code = $1
            FOR UPDATE
            "#,
        )
        .bind(prod_code)
        .fetch_optional(&mut *tx)
        .await
        .map_err(RepositoryError::from)?;

        let Some(existing) = existing else {
            warn!("⚠️ Product code {} not found for update", prod_code);
            return Err(RepositoryError::NotFound);
        };

        let discount_code = req
            .discount_code
            .clone()
            .unwrap_or(existing.discount_code);
        let description = match &req.description {
            Some(description) => description.clone(),
            None => existing.description,
        };

        let result = sqlx::query_as::<_, ProductCodeModel>(
            r#"
            UPDATE product_code
            SET discount_code = $2,
                description = $3
            WHERE prod_code = $1
            RETURNING prod_code, discount_code, description
            "#,
        )
        .bind(prod_code)
        .bind(&discount_code)
        .bind(&description)
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to update product code {}: {:?}", prod_code, err);
            RepositoryError::from(err)
        })?;

        tx.commit().await.map_err(RepositoryError::from)?;

        info!("🔄 Updated product code {}", result.prod_code);
        Ok(result)
    }

    async fn delete_product_code(&self, prod_code: &str) -> Result<(), RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let deleted = sqlx::query_scalar::<_, String>(
            r#"
            DELETE FROM product_code
            WHERE prod_code = $1
            RETURNING prod_code
            "#,
        )
        .bind(prod_code)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to delete product code {}: {:?}", prod_code, err);
            RepositoryError::from(err)
        })?;

        if deleted.is_none() {
            warn!("⚠️ Product code {} not found for delete", prod_code);
            return Err(RepositoryError::NotFound);
        }

        tx.commit().await.map_err(RepositoryError::from)?;

        info!("🗑️ Deleted product code {}", prod_code);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::product_code::repository::ProductCodeQueryRepositoryTrait,
        repository::query::ProductCodeQueryRepository,
    };
    use sqlx::PgPool;

    fn widget() -> CreateProductCodeRequest {
        CreateProductCodeRequest {
            prod_code: "A1".into(),
            discount_code: "D".into(),
            description: Some("Widget".into()),
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "needs a PostgreSQL DATABASE_URL"]
    async fn create_then_find(pool: PgPool) {
        let command = ProductCodeCommandRepository::new(pool.clone());
        let query = ProductCodeQueryRepository::new(pool);

        command.create_product_code(&widget()).await.unwrap();

        let found = query.find_by_code("A1").await.unwrap().unwrap();
        assert_eq!(found.discount_code, "D");
        assert_eq!(found.description.as_deref(), Some("Widget"));
        assert_eq!(query.find_all().await.unwrap().len(), 1);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "needs a PostgreSQL DATABASE_URL"]
    async fn duplicate_code_is_rejected(pool: PgPool) {
        let command = ProductCodeCommandRepository::new(pool);

        command.create_product_code(&widget()).await.unwrap();
        let err = command.create_product_code(&widget()).await.unwrap_err();

        assert!(matches!(err, RepositoryError::AlreadyExists(_)));
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "needs a PostgreSQL DATABASE_URL"]
    async fn blank_code_violates_the_check_constraint(pool: PgPool) {
        let command = ProductCodeCommandRepository::new(pool);

        let err = command
            .create_product_code(&CreateProductCodeRequest {
                prod_code: "   ".into(),
                ..widget()
            })
            .await
            .unwrap_err();

        assert!(matches!(err, RepositoryError::Constraint(_)));
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "needs a PostgreSQL DATABASE_URL"]
    async fn update_keeps_fields_that_are_not_supplied(pool: PgPool) {
        let command = ProductCodeCommandRepository::new(pool);
        command.create_product_code(&widget()).await.unwrap();

        let updated = command
            .update_product_code(
                "A1",
                &UpdateProductCodeRequest {
                    description: Some(Some("Gadget".into())),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.prod_code, "A1");
        assert_eq!(updated.discount_code, "D");
        assert_eq!(updated.description.as_deref(), Some("Gadget"));

        let missing = command
            .update_product_code("ZZ", &UpdateProductCodeRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(missing, RepositoryError::NotFound));
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "needs a PostgreSQL DATABASE_URL"]
    async fn update_with_null_description_clears_the_column(pool: PgPool) {
        let command = ProductCodeCommandRepository::new(pool);
        command.create_product_code(&widget()).await.unwrap();

        let updated = command
            .update_product_code(
                "A1",
                &UpdateProductCodeRequest {
                    description: Some(None),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.description, None);
        assert_eq!(updated.discount_code, "D");
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "needs a PostgreSQL DATABASE_URL"]
    async fn delete_is_blocked_by_referencing_products(pool: PgPool) {
        let command = ProductCodeCommandRepository::new(pool.clone());
        command.create_product_code(&widget()).await.unwrap();

        sqlx::query("INSERT INTO product (product_id, product_code, description) VALUES ($1, $2, $3)")
            .bind(1_i32)
            .bind("A1")
            .bind("Blue widget")
            .execute(&pool)
            .await
            .unwrap();

        let err = command.delete_product_code("A1").await.unwrap_err();
        assert!(matches!(err, RepositoryError::ForeignKey(_)));

        sqlx::query("DELETE FROM product WHERE product_id = 1")
            .execute(&pool)
            .await
            .unwrap();

        command.delete_product_code("A1").await.unwrap();
        let missing = command.delete_product_code("A1").await.unwrap_err();
        assert!(matches!(missing, RepositoryError::NotFound));
    }
}
