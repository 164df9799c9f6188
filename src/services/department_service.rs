use crate::db::repositories::{DepartmentRepository, RepositoryError};
use crate::models::{Department, DepartmentLevels};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DepartmentError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

#[async_trait::async_trait]
pub trait DepartmentService: Send + Sync {
    async fn list_departments(&self) -> Result<Vec<Department>, DepartmentError>;

    /// Inserts a department as given. Unlike the import there is no
    /// natural-key lookup first.
    async fn create_department(
        &self,
        levels: DepartmentLevels,
    ) -> Result<Department, DepartmentError>;
}

pub struct RepositoryDepartmentService {
    repo: Arc<dyn DepartmentRepository>,
}

impl RepositoryDepartmentService {
    #[must_use]
    pub fn new(repo: Arc<dyn DepartmentRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait::async_trait]
impl DepartmentService for RepositoryDepartmentService {
    async fn list_departments(&self) -> Result<Vec<Department>, DepartmentError> {
        Ok(self.repo.find_all().await?)
    }

    async fn create_department(
        &self,
        levels: DepartmentLevels,
    ) -> Result<Department, DepartmentError> {
        let id = self.repo.create(&levels).await?;
        Ok(Department::from_levels(id, levels))
    }
}
