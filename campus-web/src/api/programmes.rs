//! Programme routes

use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use campus_common::db::Programme;
use tracing::debug;

use crate::db::programmes::{find_programme, list_programmes, modules_for_programme};
use crate::error::{ApiError, JsonError};
use crate::views;
use crate::AppState;

/// GET /all-programmes
pub async fn all_programmes(
    State(state): State<AppState>,
) -> Result<Json<Vec<Programme>>, JsonError> {
    let programmes = list_programmes(&state.db).await?;
    debug!("Returning {} programmes", programmes.len());
    Ok(Json(programmes))
}

/// GET /programmes
pub async fn programmes(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let programmes = list_programmes(&state.db).await?;
    Ok(views::programmes::programmes(&programmes))
}

/// GET /single-programme/:id
///
/// The programme lookup completes before the module query so the title
/// always precedes the module table.
pub async fn single_programme(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, ApiError> {
    let programme = find_programme(&state.db, &id).await?;

    let modules = modules_for_programme(&state.db, &programme.id).await?;
    debug!("Programme {}: {} modules", programme.id, modules.len());

    Ok(views::programmes::single_programme(&programme, &modules))
}
