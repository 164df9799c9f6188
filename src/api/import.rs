use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use std::path::PathBuf;
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState, ImportRequest};
use crate::services::{ImportError, ImportSummary, RecordError};

impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        match &err {
            ImportError::Open { .. } => Self::NotFound(err.to_string()),
            ImportError::Record {
                source: RecordError::Repository(_),
                ..
            } => Self::DatabaseError(err.to_string()),
            ImportError::EmptyFile
            | ImportError::Header(_)
            | ImportError::MissingColumns { .. }
            | ImportError::Record { .. } => Self::validation(err.to_string()),
        }
    }
}

/// `POST /api/import`
///
/// Runs the CSV import synchronously. Without a `path` the configured default
/// file is used.
pub async fn run_import(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ImportRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<ImportSummary>>, ApiError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(JsonRejection::MissingJsonContentType(_)) => ImportRequest::default(),
        Err(e) => return Err(e.into()),
    };

    let path = request
        .path
        .filter(|p| !p.is_empty())
        .map_or_else(
            || PathBuf::from(&state.config().import.default_path),
            PathBuf::from,
        );

    let result = state.importer().import_file(&path).await;

    // rows before a failing record are already committed
    state.employees().invalidate_listing().await;

    let summary = result.map_err(|e| {
        tracing::warn!(path = %path.display(), error = %e, "Employee import failed");
        ApiError::from(e)
    })?;

    Ok(Json(ApiResponse::success(summary)))
}

