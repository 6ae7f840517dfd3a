//! Status message endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use gateway::StatusGateway;
use serde::Serialize;

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<G: StatusGateway> {
    pub gateway: G,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// GET / — fetches the status message from the database.
pub async fn get<G: StatusGateway>(
    State(state): State<Arc<AppState<G>>>,
) -> Result<Json<MessageResponse>, ApiError> {
    let message = state.gateway.fetch_message().await?;
    Ok(Json(MessageResponse { message }))
}
