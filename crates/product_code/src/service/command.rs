use crate::{
    abstract_trait::product_code::{
        repository::DynProductCodeCommandRepository, service::ProductCodeCommandServiceTrait,
    },
    domain::{
        requests::{
            json_field_name,
            product_code::{CreateProductCodeRequest, UpdateProductCodeRequest},
        },
        response::product_code::ProductCodeResponse,
    },
};
use anyhow::Result;
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics, Status as StatusUtils, TracingContext},
};
use tracing::{error, info};
use validator::{Validate, ValidationErrors};

#[derive(Clone)]
pub struct ProductCodeCommandService {
    pub command: DynProductCodeCommandRepository,
    pub metrics: Metrics,
}

impl ProductCodeCommandService {
    pub fn new(command: DynProductCodeCommandRepository, registry: &mut Registry) -> Result<Self> {
        let metrics = Metrics::new();
        metrics.register(registry, "product_code_command_service");

        Ok(Self { command, metrics })
    }

    fn complete_tracing_success(&self, tracing_ctx: &TracingContext, method: Method, message: &str) {
        self.complete_tracing_internal(tracing_ctx, method, true, message);
    }

    fn complete_tracing_error(&self, tracing_ctx: &TracingContext, method: Method, message: &str) {
        self.complete_tracing_internal(tracing_ctx, method, false, message);
    }

    fn complete_tracing_internal(
        &self,
        tracing_ctx: &TracingContext,
        method: Method,
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

        self.metrics.record(method, status, elapsed);
    }

    fn fail(&self, tracing_ctx: &TracingContext, method: Method, err: ServiceError) -> ServiceError {
        self.complete_tracing_error(tracing_ctx, method, &err.to_string());
        err
    }
}

#[async_trait]
impl ProductCodeCommandServiceTrait for ProductCodeCommandService {
    async fn create_product_code(
        &self,
        req: &CreateProductCodeRequest,
    ) -> Result<ProductCodeResponse, ServiceError> {
        info!("🆕 Creating product code: {}", req.prod_code);

        let method = Method::Post;
        let tracing_ctx = TracingContext::start("product_code_create", "product_code");

        if let Err(errors) = req.validate() {
            return Err(self.fail(
                &tracing_ctx,
                method,
                ServiceError::Validation(validation_messages(&errors)),
            ));
        }

        let created = self
            .command
            .create_product_code(req)
            .await
            .map_err(|e| self.fail(&tracing_ctx, method.clone(), ServiceError::Repo(e)))?;

        self.complete_tracing_success(
            &tracing_ctx,
            method,
            &format!("Product code {} created", created.prod_code),
        );

        Ok(ProductCodeResponse::from(created))
    }

    async fn update_product_code(
        &self,
        prod_code: &str,
        req: &UpdateProductCodeRequest,
    ) -> Result<ProductCodeResponse, ServiceError> {
        info!("🔄 Updating product code: {prod_code}");

        let method = Method::Put;
        let tracing_ctx = TracingContext::start("product_code_update", "product_code");

        if let Some(body_code) = req.prod_code.as_deref() {
            if body_code != prod_code {
                return Err(self.fail(
                    &tracing_ctx,
                    method,
                    ServiceError::Validation(vec![format!(
                        "prodCode: product code is immutable (path '{prod_code}', body '{body_code}')"
                    )]),
                ));
            }
        }

        if let Err(errors) = req.validate() {
            return Err(self.fail(
                &tracing_ctx,
                method,
                ServiceError::Validation(validation_messages(&errors)),
            ));
        }

        let updated = self
            .command
            .update_product_code(prod_code, req)
            .await
            .map_err(|e| self.fail(&tracing_ctx, method.clone(), ServiceError::Repo(e)))?;

        self.complete_tracing_success(
            &tracing_ctx,
            method,
            &format!("Product code {prod_code} updated"),
        );

        Ok(ProductCodeResponse::from(updated))
    }

    async fn delete_product_code(&self, prod_code: &str) -> Result<(), ServiceError> {
        info!("🗑️ Deleting product code: {prod_code}");

        let method = Method::Delete;
        let tracing_ctx = TracingContext::start("product_code_delete", "product_code");

        self.command
            .delete_product_code(prod_code)
            .await
            .map_err(|e| self.fail(&tracing_ctx, method.clone(), ServiceError::Repo(e)))?;

        self.complete_tracing_success(
            &tracing_ctx,
            method,
            &format!("Product code {prod_code} deleted"),
        );

        Ok(())
    }
}

fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid {field}"));
                format!("{}: {message}", json_field_name(&field))
            })
        })
        .collect();

    messages.sort();
    messages
}
