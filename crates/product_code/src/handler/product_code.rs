use crate::{
    abstract_trait::product_code::service::{
        DynProductCodeCommandService, DynProductCodeQueryService,
    },
    domain::{
        requests::product_code::{CreateProductCodeRequest, UpdateProductCodeRequest},
        response::{product::ProductResponse, product_code::ProductCodeResponse},
    },
    middleware::validate::SimpleValidatedJson,
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use shared::errors::{ErrorResponse, HttpError};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/productCode",
    tag = "ProductCode",
    responses(
        (status = 200, description = "All product codes ordered by code", body = Vec<ProductCodeResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_product_codes(
    Extension(service): Extension<DynProductCodeQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/productCode/{id}",
    tag = "ProductCode",
    params(("id" = String, Path, description = "Product code")),
    responses(
        (status = 200, description = "Zero or one matching product code", body = Vec<ProductCodeResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_product_code(
    Extension(service): Extension<DynProductCodeQueryService>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_code(&id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/productCode/{id}/products",
    tag = "ProductCode",
    params(("id" = String, Path, description = "Product code")),
    responses(
        (status = 200, description = "Products referencing the code", body = Vec<ProductResponse>),
        (status = 404, description = "Product code not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_product_code_products(
    Extension(service): Extension<DynProductCodeQueryService>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_products(&id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/productCode",
    tag = "ProductCode",
    request_body = CreateProductCodeRequest,
    responses(
        (status = 201, description = "Product code created", body = ProductCodeResponse),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 409, description = "Product code already exists", body = ErrorResponse),
        (status = 413, description = "Body too large", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_product_code(
    Extension(service): Extension<DynProductCodeCommandService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateProductCodeRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_product_code(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/productCode/{id}",
    tag = "ProductCode",
    params(("id" = String, Path, description = "Product code")),
    request_body = UpdateProductCodeRequest,
    responses(
        (status = 200, description = "Product code updated", body = ProductCodeResponse),
        (status = 400, description = "Invalid payload or mismatched code", body = ErrorResponse),
        (status = 404, description = "Product code not found", body = ErrorResponse),
        (status = 413, description = "Body too large", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn update_product_code(
    Extension(service): Extension<DynProductCodeCommandService>,
    Path(id): Path<String>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateProductCodeRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_product_code(&id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/productCode/{id}",
    tag = "ProductCode",
    params(("id" = String, Path, description = "Product code")),
    responses(
        (status = 204, description = "Product code deleted"),
        (status = 404, description = "Product code not found", body = ErrorResponse),
        (status = 409, description = "Products still reference the code", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn delete_product_code(
    Extension(service): Extension<DynProductCodeCommandService>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    service.delete_product_code(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn product_code_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route(
            "/productCode",
            get(get_product_codes).post(create_product_code),
        )
        .route(
            "/productCode/{id}",
            get(get_product_code)
                .put(update_product_code)
                .delete(delete_product_code),
        )
        .route("/productCode/{id}/products", get(get_product_code_products))
        .layer(Extension(app_state.di_container.product_code_query.clone()))
        .layer(Extension(app_state.di_container.product_code_command.clone()))
}
