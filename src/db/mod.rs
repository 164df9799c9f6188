use anyhow::Result;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub mod migrator;
pub mod repositories;

use repositories::{
    DepartmentRepository, EmployeeRepository, LocationRepository, SeaOrmDepartmentRepository,
    SeaOrmEmployeeRepository, SeaOrmLocationRepository,
};

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        if !db_url.contains(":memory:") {
            let path_str = db_url
                .trim_start_matches("sqlite://")
                .trim_start_matches("sqlite:");
            let path_str = path_str.split('?').next().unwrap_or(path_str);
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                tokio::fs::File::create(path_str).await?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    #[must_use]
    pub fn employee_repository(&self) -> Arc<dyn EmployeeRepository> {
        Arc::new(SeaOrmEmployeeRepository::new(self.conn.clone()))
    }

    #[must_use]
    pub fn department_repository(&self) -> Arc<dyn DepartmentRepository> {
        Arc::new(SeaOrmDepartmentRepository::new(self.conn.clone()))
    }

    #[must_use]
    pub fn location_repository(&self) -> Arc<dyn LocationRepository> {
        Arc::new(SeaOrmLocationRepository::new(self.conn.clone()))
    }
}
