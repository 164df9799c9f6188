//! Cache-aside implementation of [`EmployeeService`].

use crate::cache::Cache;
use crate::config::InvalidationMode;
use crate::constants::listing::EMPLOYEES_CACHE_KEY;
use crate::db::repositories::EmployeeRepository;
use crate::domain::{EmployeeId, Lookup, Pagination};
use crate::models::{Employee, EmployeePage, EmployeeRecord};
use crate::services::employee_service::{EmployeeError, EmployeeService};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

pub struct CachedEmployeeService {
    repo: Arc<dyn EmployeeRepository>,
    cache: Arc<dyn Cache>,
    ttl: Duration,
    invalidation: InvalidationMode,
}

impl CachedEmployeeService {
    #[must_use]
    pub fn new(
        repo: Arc<dyn EmployeeRepository>,
        cache: Arc<dyn Cache>,
        ttl: Duration,
        invalidation: InvalidationMode,
    ) -> Self {
        Self {
            repo,
            cache,
            ttl,
            invalidation,
        }
    }

    fn validate(record: EmployeeRecord) -> Result<EmployeeRecord, EmployeeError> {
        if let Some(field) = record.missing_required_field() {
            return Err(EmployeeError::Validation(format!("{field} is required")));
        }
        Ok(record.normalized())
    }

    async fn invalidate(&self) {
        let result = match self.invalidation {
            InvalidationMode::BaseKey => self.cache.delete(&[EMPLOYEES_CACHE_KEY]).await,
            InvalidationMode::Namespace => self.cache.delete_prefix(EMPLOYEES_CACHE_KEY).await,
        };

        if let Err(e) = result {
            warn!(
                key = EMPLOYEES_CACHE_KEY,
                mode = ?self.invalidation,
                error = %e,
                "Failed to invalidate employee listing cache"
            );
        }
    }
}

#[async_trait]
impl EmployeeService for CachedEmployeeService {
    async fn list_employees(&self, pagination: Pagination) -> Result<Vec<u8>, EmployeeError> {
        let key = pagination.cache_key();

        match self.cache.get(&key).await {
            Ok(Some(payload)) => {
                debug!(key = %key, "employee listing cache hit");
                metrics::counter!("employee_cache_hits_total").increment(1);
                return Ok(payload);
            }
            Ok(None) => {}
            Err(e) => warn!(key = %key, error = %e, "Cache read failed, using storage"),
        }
        metrics::counter!("employee_cache_misses_total").increment(1);

        let (employees, total) = self
            .repo
            .find_all_paginated(pagination.page(), pagination.page_size())
            .await?;

        let payload = serde_json::to_vec(&EmployeePage::new(employees, total, pagination))?;

        if let Err(e) = self.cache.set(&key, payload.clone(), self.ttl).await {
            warn!(key = %key, error = %e, "Failed to cache employee listing");
        }

        Ok(payload)
    }

    async fn get_employee(&self, id: EmployeeId) -> Result<Employee, EmployeeError> {
        match self.repo.find_by_id(id).await? {
            Lookup::Found(employee) => Ok(employee),
            Lookup::NotFound => Err(EmployeeError::NotFound(id)),
        }
    }

    async fn create_employee(&self, record: EmployeeRecord) -> Result<Employee, EmployeeError> {
        let record = Self::validate(record)?;
        let employee = self.repo.create(record).await?;
        self.invalidate().await;
        Ok(employee)
    }

    async fn update_employee(
        &self,
        id: EmployeeId,
        record: EmployeeRecord,
    ) -> Result<Employee, EmployeeError> {
        let employee = Employee::new(id, Self::validate(record)?);

        if !self.repo.update(&employee).await? {
            return Err(EmployeeError::NotFound(id));
        }

        self.invalidate().await;
        Ok(employee)
    }

    async fn delete_employee(&self, id: EmployeeId) -> Result<(), EmployeeError> {
        if !self.repo.delete(id).await? {
            return Err(EmployeeError::NotFound(id));
        }

        self.invalidate().await;
        Ok(())
    }

    async fn invalidate_listing(&self) {
        self.invalidate().await;
    }
}
