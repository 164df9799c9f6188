use axum::{
    Json,
    extract::{Request, State, rejection::JsonRejection},
    http::{HeaderMap, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState, LoginRequest, LoginResponse};
use crate::services::AuthError;

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => Self::Unauthorized("Invalid credentials".to_string()),
            AuthError::InvalidToken(_) => Self::Unauthorized("Invalid token".to_string()),
            AuthError::Internal(msg) => Self::internal(msg),
        }
    }
}

/// Requires `Authorization: Bearer <token>` and stores the verified claims
/// in the request extensions.
pub async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer(&headers)?;

    let claims = state.auth().verify(token).map_err(|e| {
        tracing::debug!("Token validation failed: {e}");
        ApiError::from(e)
    })?;

    tracing::Span::current().record("user_id", claims.sub.as_str());
    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}

fn extract_bearer(headers: &HeaderMap) -> Result<&str, ApiError> {
    let value = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::Unauthorized("Missing auth token".to_string()))?;

    value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty() && !token.contains(' '))
        .ok_or_else(|| ApiError::Unauthorized("Invalid token format".to_string()))
}

/// `POST /login`
pub async fn login(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    let Json(payload) = payload?;
    let token = state.auth().login(&payload.username)?;

    tracing::info!(username = %payload.username, "Issued API token");
    Ok(Json(ApiResponse::success(LoginResponse { token })))
}
