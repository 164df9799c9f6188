use std::sync::Arc;

use crate::cache::{Cache, create_cache};
use crate::config::Config;
use crate::db::Store;
use crate::services::{
    AuthService, CachedEmployeeService, CsvImportService, DepartmentService, EmployeeService,
    ImportService, JwtAuthService, RepositoryDepartmentService,
};

#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<Config>,

    pub store: Store,

    pub employee_service: Arc<dyn EmployeeService>,

    pub department_service: Arc<dyn DepartmentService>,

    pub import_service: Arc<dyn ImportService>,

    pub auth_service: Arc<dyn AuthService>,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let cache = create_cache(&config.cache).await;
        Self::with_cache(config, cache).await
    }

    /// Builds the state around an existing cache backend.
    pub async fn with_cache(config: Config, cache: Arc<dyn Cache>) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_path,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        let delimiter = u8::try_from(config.import.delimiter).map_err(|_| {
            anyhow::anyhow!(
                "Import delimiter must be a single-byte character, got '{}'",
                config.import.delimiter
            )
        })?;

        let employee_service: Arc<dyn EmployeeService> = Arc::new(CachedEmployeeService::new(
            store.employee_repository(),
            cache,
            config.cache_ttl(),
            config.cache.invalidation,
        ));

        let department_service: Arc<dyn DepartmentService> = Arc::new(
            RepositoryDepartmentService::new(store.department_repository()),
        );

        let import_service: Arc<dyn ImportService> = Arc::new(CsvImportService::new(
            store.employee_repository(),
            store.department_repository(),
            store.location_repository(),
            delimiter,
        ));

        let auth_service: Arc<dyn AuthService> = Arc::new(JwtAuthService::new(&config.auth));

        Ok(Self {
            config: Arc::new(config),
            store,
            employee_service,
            department_service,
            import_service,
            auth_service,
        })
    }
}
