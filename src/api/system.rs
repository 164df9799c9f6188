use axum::Json;

use super::PingResponse;

/// `GET /ping`
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        status: "ok",
        message: "pong",
    })
}
