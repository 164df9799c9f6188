//! Domain service for employee records and the cached listing.

use crate::db::repositories::RepositoryError;
use crate::domain::{EmployeeId, Pagination};
use crate::models::{Employee, EmployeeRecord};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmployeeError {
    #[error("Employee not found: {0}")]
    NotFound(EmployeeId),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for EmployeeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[async_trait::async_trait]
pub trait EmployeeService: Send + Sync {
    /// Returns the serialized listing envelope for one page. A cache hit
    /// returns the stored bytes without touching storage.
    async fn list_employees(&self, pagination: Pagination) -> Result<Vec<u8>, EmployeeError>;

    async fn get_employee(&self, id: EmployeeId) -> Result<Employee, EmployeeError>;

    async fn create_employee(&self, record: EmployeeRecord) -> Result<Employee, EmployeeError>;

    /// Replaces every field of the employee.
    async fn update_employee(
        &self,
        id: EmployeeId,
        record: EmployeeRecord,
    ) -> Result<Employee, EmployeeError>;

    async fn delete_employee(&self, id: EmployeeId) -> Result<(), EmployeeError>;

    /// Drops cached listing data after an out-of-band write such as an import.
    /// Failures are logged and swallowed.
    async fn invalidate_listing(&self);
}
