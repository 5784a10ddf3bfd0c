use crate::{
    abstract_trait::product_code::{
        repository::DynProductCodeQueryRepository, service::ProductCodeQueryServiceTrait,
    },
    domain::response::{product::ProductResponse, product_code::ProductCodeResponse},
};
use anyhow::Result;
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::{
    errors::{RepositoryError, ServiceError},
    utils::{Method, Metrics, Status as StatusUtils, TracingContext},
};
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductCodeQueryService {
    pub query: DynProductCodeQueryRepository,
    pub metrics: Metrics,
}

impl ProductCodeQueryService {
    pub fn new(query: DynProductCodeQueryRepository, registry: &mut Registry) -> Result<Self> {
        let metrics = Metrics::new();
        metrics.register(registry, "product_code_query_service");

        Ok(Self { query, metrics })
    }

    fn complete_tracing_success(&self, tracing_ctx: &TracingContext, message: &str) {
        self.complete_tracing_internal(tracing_ctx, true, message);
    }

    fn complete_tracing_error(&self, tracing_ctx: &TracingContext, message: &str) {
        self.complete_tracing_internal(tracing_ctx, false, message);
    }

    fn complete_tracing_internal(
        &self,
        tracing_ctx: &TracingContext,
        is_success: bool,
        message: &str,
    ) {
        let _entered = tracing_ctx.span.enter();
        let elapsed = tracing_ctx.elapsed_secs();

        let status = if is_success {
            info!("✅ Operation completed successfully: {message} ({elapsed:.4}s)");
            StatusUtils::Success
        } else {
            error!("❌ Operation failed: {message} ({elapsed:.4}s)");
            StatusUtils::Error
        };

        self.metrics.record(Method::Get, status, elapsed);
    }
}

#[async_trait]
impl ProductCodeQueryServiceTrait for ProductCodeQueryService {
    async fn find_all(&self) -> Result<Vec<ProductCodeResponse>, ServiceError> {
        info!("🔍 Finding all product codes");

        let tracing_ctx = TracingContext::start("product_code_find_all", "product_code");

        match self.query.find_all().await {
            Ok(rows) => {
                let data: Vec<ProductCodeResponse> =
                    rows.into_iter().map(ProductCodeResponse::from).collect();
                self.complete_tracing_success(
                    &tracing_ctx,
                    &format!("Retrieved {} product codes", data.len()),
                );
                Ok(data)
            }
            Err(e) => {
                self.complete_tracing_error(
                    &tracing_ctx,
                    &format!("Failed to fetch all product codes: {e}"),
                );
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn find_by_code(&self, prod_code: &str) -> Result<Vec<ProductCodeResponse>, ServiceError> {
        info!("🆔 Finding product code: {prod_code}");

        let tracing_ctx = TracingContext::start("product_code_find_by_code", "product_code");

        match self.query.find_by_code(prod_code).await {
            Ok(row) => {
                let data: Vec<ProductCodeResponse> =
                    row.into_iter().map(ProductCodeResponse::from).collect();
                self.complete_tracing_success(
                    &tracing_ctx,
                    &format!("Product code {prod_code}: {} match(es)", data.len()),
                );
                Ok(data)
            }
            Err(e) => {
                self.complete_tracing_error(
                    &tracing_ctx,
                    &format!("Failed to fetch product code {prod_code}: {e}"),
                );
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn find_products(&self, prod_code: &str) -> Result<Vec<ProductResponse>, ServiceError> {
        info!("📦 Finding products for product code: {prod_code}");

        let tracing_ctx = TracingContext::start("product_code_find_products", "product_code");

        let lookup = match self.query.find_by_code(prod_code).await {
            Ok(Some(_)) => self.query.find_products(prod_code).await,
            Ok(None) => Err(RepositoryError::NotFound),
            Err(e) => Err(e),
        };

        match lookup {
            Ok(rows) => {
                let data: Vec<ProductResponse> =
                    rows.into_iter().map(ProductResponse::from).collect();
                self.complete_tracing_success(
                    &tracing_ctx,
                    &format!("Retrieved {} products for {prod_code}", data.len()),
                );
                Ok(data)
            }
            Err(e) => {
                self.complete_tracing_error(
                    &tracing_ctx,
                    &format!("Failed to fetch products for {prod_code}: {e}"),
                );
                Err(ServiceError::Repo(e))
            }
        }
    }
}
