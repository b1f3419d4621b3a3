use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;

use crate::models::{Loadout, LoadoutUpdate, NewLoadout};
use crate::queries::parse_id;
use crate::server::error::{AppError, CREATE_FAILED, UPDATE_FAILED};
use crate::server::state::AppState;

/// GET /loadouts
///
/// Every saved loadout. Store failures answer 409 with the store's message.
pub async fn list_loadouts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Loadout>>, AppError> {
    let loadouts = state
        .store
        .run(|a| a.loadouts().list())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "listing loadouts failed");
            AppError::conflict(e.to_string())
        })?;

    Ok(Json(loadouts))
}

/// POST /loadouts
///
/// Save a new loadout. 201 with the stored row, 409 when the name is taken.
pub async fn create_loadout(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewLoadout>, JsonRejection>,
) -> Result<(StatusCode, Json<Loadout>), AppError> {
    let Json(new) = payload?;

    let created = state
        .store
        .run(move |a| a.loadouts().create(&new))
        .await
        .map_err(|e| AppError::from_write(e, CREATE_FAILED))?;

    tracing::info!(id = created.id, name = %created.name, "loadout created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /loadout/{id}
///
/// A malformed id answers 404 like a missing one.
pub async fn get_loadout(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Loadout>, AppError> {
    let id = parse_id(&id)?;
    let loadout = state.store.run(move |a| a.loadouts().get(id)).await?;
    Ok(Json(loadout))
}

/// PATCH /loadout/{id}
///
/// Replace every mutable field. 409 when the new name belongs to another
/// loadout.
pub async fn update_loadout(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<LoadoutUpdate>, JsonRejection>,
) -> Result<Json<Loadout>, AppError> {
    let id = parse_id(&id)?;
    let Json(update) = payload?;

    let updated = state
        .store
        .run(move |a| a.loadouts().update(id, &update))
        .await
        .map_err(|e| AppError::from_write(e, UPDATE_FAILED))?;

    tracing::info!(id, name = %updated.name, "loadout updated");
    Ok(Json(updated))
}

/// DELETE /loadout/{id}
///
/// Hard delete; answers with the row that was removed.
pub async fn delete_loadout(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Loadout>, AppError> {
    let id = parse_id(&id)?;
    let deleted = state
        .store
        .run(move |a| a.loadouts().delete(id))
        .await
        .map_err(|e| {
            if !matches!(e, crate::ArmoryError::NotFound(_)) {
                tracing::error!(error = %e, id, "deleting loadout failed");
            }
            AppError::from(e)
        })?;

    tracing::info!(id, "loadout deleted");
    Ok(Json(deleted))
}
