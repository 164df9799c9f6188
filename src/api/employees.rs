use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use super::validation::parse_employee_id;
use super::{ApiError, ApiResponse, AppState, ListQuery};
use crate::domain::Pagination;
use crate::models::{Employee, EmployeeRecord};
use crate::services::EmployeeError;

impl From<EmployeeError> for ApiError {
    fn from(err: EmployeeError) -> Self {
        match err {
            EmployeeError::NotFound(id) => Self::not_found("Employee", id),
            EmployeeError::Validation(msg) => Self::validation(msg),
            EmployeeError::Repository(e) => Self::DatabaseError(e.to_string()),
            EmployeeError::Serialization(msg) => Self::internal(msg),
        }
    }
}

/// `GET /api/employees?page=&pageSize=`
///
/// The body is the listing envelope itself, byte for byte what the cache
/// holds.
pub async fn list_employees(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Result<Response, ApiError> {
    let pagination = Pagination::from_query(query.page.as_deref(), query.page_size.as_deref());
    let payload = state.employees().list_employees(pagination).await?;

    Ok(([(header::CONTENT_TYPE, "application/json")], payload).into_response())
}

/// `GET /api/employees/{id}`
pub async fn get_employee(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Employee>>, ApiError> {
    let id = parse_employee_id(&id)?;
    let employee = state.employees().get_employee(id).await?;
    Ok(Json(ApiResponse::success(employee)))
}

/// `POST /api/employees`
pub async fn create_employee(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<EmployeeRecord>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(record) = payload?;
    let employee = state.employees().create_employee(record).await?;

    tracing::info!(employee_id = %employee.id, "Created employee");
    Ok((StatusCode::CREATED, Json(ApiResponse::success(employee))))
}

/// `PUT /api/employees/{id}`
pub async fn update_employee(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<EmployeeRecord>, JsonRejection>,
) -> Result<Json<ApiResponse<Employee>>, ApiError> {
    let id = parse_employee_id(&id)?;
    let Json(record) = payload?;
    let employee = state.employees().update_employee(id, record).await?;

    tracing::info!(employee_id = %id, "Updated employee");
    Ok(Json(ApiResponse::success(employee)))
}

/// `DELETE /api/employees/{id}`
pub async fn delete_employee(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_employee_id(&id)?;
    state.employees().delete_employee(id).await?;

    tracing::info!(employee_id = %id, "Deleted employee");
    Ok(StatusCode::NO_CONTENT)
}
