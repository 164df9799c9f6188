use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState};
use crate::models::{Department, NewDepartment};
use crate::services::DepartmentError;

impl From<DepartmentError> for ApiError {
    fn from(err: DepartmentError) -> Self {
        match err {
            DepartmentError::Repository(e) => Self::DatabaseError(e.to_string()),
        }
    }
}

/// `GET /api/departments`
pub async fn list_departments(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<Department>>>, ApiError> {
    let departments = state.departments().list_departments().await?;
    Ok(Json(ApiResponse::success(departments)))
}

/// `POST /api/departments`
pub async fn create_department(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewDepartment>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(department) = payload?;
    let department = state
        .departments()
        .create_department(department.into())
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(department))))
}
