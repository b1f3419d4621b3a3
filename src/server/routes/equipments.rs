use std::sync::Arc;

use axum::extract::State;
use axum::response::Json;

use crate::models::Equipment;
use crate::server::error::AppError;
use crate::server::state::AppState;

/// GET /equipments
///
/// The whole catalog. Store failures answer 409 with the store's message.
pub async fn list_equipments(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Equipment>>, AppError> {
    let items = state
        .store
        .run(|a| a.equipments().list())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "listing equipments failed");
            AppError::conflict(e.to_string())
        })?;

    Ok(Json(items))
}
