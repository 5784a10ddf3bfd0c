use crate::{
    abstract_trait::product_code::{
        repository::{DynProductCodeCommandRepository, DynProductCodeQueryRepository},
        service::{DynProductCodeCommandService, DynProductCodeQueryService},
    },
    repository::{command::ProductCodeCommandRepository, query::ProductCodeQueryRepository},
    service::{command::ProductCodeCommandService, query::ProductCodeQueryService},
};
use anyhow::{Context, Result};
use prometheus_client::registry::Registry;
use shared::config::ConnectionPool;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_code_query: DynProductCodeQueryService,
    pub product_code_command: DynProductCodeCommandService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("product_code_query", &"ProductCodeQueryService")
            .field("product_code_command", &"ProductCodeCommandService")
            .finish()
    }
}

#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub query_repository: DynProductCodeQueryRepository,
    pub command_repository: DynProductCodeCommandRepository,
}

impl DependenciesInjectDeps {
    pub fn postgres(pool: ConnectionPool) -> Self {
        Self {
            query_repository: Arc::new(ProductCodeQueryRepository::new(pool.clone())),
            command_repository: Arc::new(ProductCodeCommandRepository::new(pool)),
        }
    }
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps, registry: &mut Registry) -> Result<Self> {
        let DependenciesInjectDeps {
            query_repository,
            command_repository,
        } = deps;

        let product_code_query = ProductCodeQueryService::new(query_repository, registry)
            .context("failed initialize product code query")?;

        let product_code_command = ProductCodeCommandService::new(command_repository, registry)
            .context("failed initialize product code command")?;

        Ok(Self {
            product_code_query: Arc::new(product_code_query),
            product_code_command: Arc::new(product_code_command),
        })
    }
}
