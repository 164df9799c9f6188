use crate::db::repositories::{EmployeeRepository, RepositoryResult};
use crate::domain::{DepartmentId, EmployeeId, LocationId, Lookup, page_offset};
use crate::entities::{employees, prelude::*};
use crate::models::{Employee, EmployeeRecord};
use sea_orm::{
    ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use tracing::debug;

pub struct SeaOrmEmployeeRepository {
    conn: DatabaseConnection,
}

impl SeaOrmEmployeeRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    // ========================================================================
    // Model Conversion Helpers
    // ========================================================================

    fn map_model(m: employees::Model) -> Employee {
        Employee::new(
            EmployeeId::new(m.id),
            EmployeeRecord {
                name: m.name,
                email: m.email,
                corporate_email: m.corporate_email,
                department_id: m.department_id.map(DepartmentId::new),
                position: m.position,
                role: m.role,
                location_id: m.location_id.map(LocationId::new),
                time_at_company: m.time_at_company,
                gender: m.gender,
                generation: m.generation,
                response_date: m.response_date,
                position_interest: m.position_interest,
                position_interest_comments: m.position_interest_comments,
                contribution: m.contribution,
                contribution_comments: m.contribution_comments,
                learning_development: m.learning_development,
                learning_development_comments: m.learning_development_comments,
                feedback: m.feedback,
                feedback_comments: m.feedback_comments,
                manager_interaction: m.manager_interaction,
                manager_interaction_comments: m.manager_interaction_comments,
                career_clarity: m.career_clarity,
                career_clarity_comments: m.career_clarity_comments,
                retention_expectation: m.retention_expectation,
                retention_expectation_comments: m.retention_expectation_comments,
                enps: m.enps,
                enps_comments: m.enps_comments,
                open_enps: m.open_enps,
            },
        )
    }

    fn active_model(r: EmployeeRecord) -> employees::ActiveModel {
        employees::ActiveModel {
            id: NotSet,
            name: Set(r.name),
            email: Set(r.email),
            corporate_email: Set(r.corporate_email),
            department_id: Set(r.department_id.map(i32::from)),
            position: Set(r.position),
            role: Set(r.role),
            location_id: Set(r.location_id.map(i32::from)),
            time_at_company: Set(r.time_at_company),
            gender: Set(r.gender),
            generation: Set(r.generation),
            response_date: Set(r.response_date),
            position_interest: Set(r.position_interest),
            position_interest_comments: Set(r.position_interest_comments),
            contribution: Set(r.contribution),
            contribution_comments: Set(r.contribution_comments),
            learning_development: Set(r.learning_development),
            learning_development_comments: Set(r.learning_development_comments),
            feedback: Set(r.feedback),
            feedback_comments: Set(r.feedback_comments),
            manager_interaction: Set(r.manager_interaction),
            manager_interaction_comments: Set(r.manager_interaction_comments),
            career_clarity: Set(r.career_clarity),
            career_clarity_comments: Set(r.career_clarity_comments),
            retention_expectation: Set(r.retention_expectation),
            retention_expectation_comments: Set(r.retention_expectation_comments),
            enps: Set(r.enps),
            enps_comments: Set(r.enps_comments),
            open_enps: Set(r.open_enps),
        }
    }
}

#[async_trait::async_trait]
impl EmployeeRepository for SeaOrmEmployeeRepository {
    async fn create(&self, record: EmployeeRecord) -> RepositoryResult<Employee> {
        let res = Employees::insert(Self::active_model(record.clone()))
            .exec(&self.conn)
            .await?;

        debug!(employee_id = res.last_insert_id, "Inserted employee");
        Ok(Employee::new(EmployeeId::new(res.last_insert_id), record))
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Employee>> {
        let rows = Employees::find()
            .order_by_asc(employees::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Self::map_model).collect())
    }

    async fn find_all_paginated(
        &self,
        page: u64,
        page_size: u64,
    ) -> RepositoryResult<(Vec<Employee>, u64)> {
        let total = Employees::find().count(&self.conn).await?;

        let Some(offset) = page_offset(page, page_size) else {
            debug!(page, page_size, "Page offset out of range, returning no rows");
            return Ok((Vec::new(), total));
        };

        let rows = Employees::find()
            .order_by_asc(employees::Column::Id)
            .offset(offset)
            .limit(page_size)
            .all(&self.conn)
            .await?;

        Ok((rows.into_iter().map(Self::map_model).collect(), total))
    }

    async fn find_by_id(&self, id: EmployeeId) -> RepositoryResult<Lookup<Employee>> {
        let row = Employees::find_by_id(id.value()).one(&self.conn).await?;
        Ok(row.map(Self::map_model).into())
    }

    async fn update(&self, employee: &Employee) -> RepositoryResult<bool> {
        let result = Employees::update_many()
            .set(Self::active_model(employee.record.clone()))
            .filter(employees::Column::Id.eq(employee.id.value()))
            .exec(&self.conn)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn delete(&self, id: EmployeeId) -> RepositoryResult<bool> {
        let result = Employees::delete_by_id(id.value())
            .exec(&self.conn)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
