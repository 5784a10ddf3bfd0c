#![allow(dead_code)]

use async_trait::async_trait;
use product_code::{
    abstract_trait::product_code::repository::{
        ProductCodeCommandRepositoryTrait, ProductCodeQueryRepositoryTrait,
    },
    di::DependenciesInjectDeps,
    domain::requests::product_code::{CreateProductCodeRequest, UpdateProductCodeRequest},
    model::{Product, ProductCode},
    state::AppState,
};
use shared::errors::RepositoryError;
use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex},
};

#[derive(Default)]
struct Tables {
    product_codes: BTreeMap<String, ProductCode>,
    products: BTreeMap<i32, Product>,
}

/// Stands in for the two Postgres tables, enforcing the same key rules.
#[derive(Clone, Default)]
pub struct InMemoryProductCodes {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryProductCodes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_product(&self, product_id: i32, product_code: &str) {
        let mut tables = self.tables.lock().unwrap();
        tables.products.insert(
            product_id,
            Product {
                product_id,
                product_code: product_code.to_string(),
                description: Some(format!("Product {product_id}")),
                quantity_on_hand: Some(10),
                available: Some(true),
            },
        );
    }

    pub fn stored(&self, prod_code: &str) -> Option<ProductCode> {
        self.tables
            .lock()
            .unwrap()
            .product_codes
            .get(prod_code)
            .cloned()
    }

    pub fn deps(&self) -> DependenciesInjectDeps {
        DependenciesInjectDeps {
            query_repository: Arc::new(self.clone()),
            command_repository: Arc::new(self.clone()),
        }
    }

    pub fn app_state(&self) -> AppState {
        AppState::from_deps(self.deps()).unwrap()
    }
}

#[async_trait]
impl ProductCodeQueryRepositoryTrait for InMemoryProductCodes {
    async fn find_all(&self) -> Result<Vec<ProductCode>, RepositoryError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.product_codes.values().cloned().collect())
    }

    async fn find_by_code(&self, prod_code: &str) -> Result<Option<ProductCode>, RepositoryError> {
        Ok(self.stored(prod_code))
    }

    async fn find_products(&self, prod_code: &str) -> Result<Vec<Product>, RepositoryError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .products
            .values()
            .filter(|p| p.product_code == prod_code)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ProductCodeCommandRepositoryTrait for InMemoryProductCodes {
    async fn create_product_code(
        &self,
        req: &CreateProductCodeRequest,
    ) -> Result<ProductCode, RepositoryError> {
        let mut tables = self.tables.lock().unwrap();

        if tables.product_codes.contains_key(&req.prod_code) {
            return Err(RepositoryError::AlreadyExists(format!(
                "product code {} already exists",
                req.prod_code
            )));
        }

        let record = ProductCode {
            prod_code: req.prod_code.clone(),
            discount_code: req.discount_code.clone(),
            description: req.description.clone(),
        };
        tables
            .product_codes
            .insert(record.prod_code.clone(), record.clone());

        Ok(record)
    }

    async fn update_product_code(
        &self,
        prod_code: &str,
        req: &UpdateProductCodeRequest,
    ) -> Result<ProductCode, RepositoryError> {
        let mut tables = self.tables.lock().unwrap();
        let record = tables
            .product_codes
            .get_mut(prod_code)
            .ok_or(RepositoryError::NotFound)?;

        if let Some(discount_code) = &req.discount_code {
            record.discount_code = discount_code.clone();
        }
        if let Some(description) = &req.description {
            record.description = description.clone();
        }

        Ok(record.clone())
    }

    async fn delete_product_code(&self, prod_code: &str) -> Result<(), RepositoryError> {
        let mut tables = self.tables.lock().unwrap();

        if !tables.product_codes.contains_key(prod_code) {
            return Err(RepositoryError::NotFound);
        }
        if tables.products.values().any(|p| p.product_code == prod_code) {
            return Err(RepositoryError::ForeignKey(format!(
                "product code {prod_code} is still referenced by products"
            )));
        }

        tables.product_codes.remove(prod_code);
        Ok(())
    }
}

/// Reads and updates fail like an exhausted connection pool; creates fail with
/// a non-transient driver error.
#[derive(Clone, Default)]
pub struct UnavailableProductCodes;

impl UnavailableProductCodes {
    pub fn app_state() -> AppState {
        AppState::from_deps(DependenciesInjectDeps {
            query_repository: Arc::new(Self),
            command_repository: Arc::new(Self),
        })
        .unwrap()
    }
}

#[async_trait]
impl ProductCodeQueryRepositoryTrait for UnavailableProductCodes {
    async fn find_all(&self) -> Result<Vec<ProductCode>, RepositoryError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn find_by_code(&self, _: &str) -> Result<Option<ProductCode>, RepositoryError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn find_products(&self, _: &str) -> Result<Vec<Product>, RepositoryError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }
}

#[async_trait]
impl ProductCodeCommandRepositoryTrait for UnavailableProductCodes {
    async fn create_product_code(
        &self,
        _: &CreateProductCodeRequest,
    ) -> Result<ProductCode, RepositoryError> {
        Err(sqlx::Error::Protocol("unexpected message from server".into()).into())
    }

    async fn update_product_code(
        &self,
        _: &str,
        _: &UpdateProductCodeRequest,
    ) -> Result<ProductCode, RepositoryError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn delete_product_code(&self, _: &str) -> Result<(), RepositoryError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }
}

pub fn create_request(prod_code: &str, discount_code: &str, description: &str) -> CreateProductCodeRequest {
    CreateProductCodeRequest {
        prod_code: prod_code.to_string(),
        discount_code: discount_code.to_string(),
        description: Some(description.to_string()),
    }
}
