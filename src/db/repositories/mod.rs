//! Repository contract over employees, departments and locations.
//!
//! Services depend on these traits only. [`Lookup`] carries "no matching row"
//! so callers never inspect backend error values to detect absence.

pub mod department;
pub mod employee;
pub mod location;

pub use department::SeaOrmDepartmentRepository;
pub use employee::SeaOrmEmployeeRepository;
pub use location::SeaOrmLocationRepository;

use crate::domain::{DepartmentId, EmployeeId, LocationId, Lookup};
use crate::models::{Department, DepartmentLevels, Employee, EmployeeRecord, Location};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for RepositoryError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[async_trait::async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Inserts a new row and returns it with its assigned id.
    async fn create(&self, record: EmployeeRecord) -> RepositoryResult<Employee>;

    async fn find_all(&self) -> RepositoryResult<Vec<Employee>>;

    /// Returns one page (1-based) ordered by id, plus the total row count.
    /// A page whose offset does not fit an `i64` has no rows.
    async fn find_all_paginated(
        &self,
        page: u64,
        page_size: u64,
    ) -> RepositoryResult<(Vec<Employee>, u64)>;

    async fn find_by_id(&self, id: EmployeeId) -> RepositoryResult<Lookup<Employee>>;

    /// Replaces every field of the row with `employee.id`. Returns `false`
    /// when no such row exists.
    async fn update(&self, employee: &Employee) -> RepositoryResult<bool>;

    /// Returns `false` when no such row exists.
    async fn delete(&self, id: EmployeeId) -> RepositoryResult<bool>;
}

#[async_trait::async_trait]
pub trait DepartmentRepository: Send + Sync {
    async fn create(&self, levels: &DepartmentLevels) -> RepositoryResult<DepartmentId>;

    async fn find_all(&self) -> RepositoryResult<Vec<Department>>;

    /// Exact, case-sensitive match on all five levels.
    async fn find_by_levels(&self, levels: &DepartmentLevels)
    -> RepositoryResult<Lookup<Department>>;
}

#[async_trait::async_trait]
pub trait LocationRepository: Send + Sync {
    async fn create(&self, name: &str) -> RepositoryResult<LocationId>;

    /// Exact name match.
    async fn find_by_name(&self, name: &str) -> RepositoryResult<Lookup<Location>>;
}
