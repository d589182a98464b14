//! Module routes

use axum::{
    extract::{Path, State},
    response::Html,
};
use tracing::debug;

use crate::db::modules::{find_module, programmes_for_module, students_on_programmes};
use crate::error::ApiError;
use crate::views;
use crate::AppState;

/// GET /single-module/:code
///
/// Module name, the programmes teaching it, then every student enrolled on
/// one of those programmes.
pub async fn single_module(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Html<String>, ApiError> {
    let module = find_module(&state.db, &code).await?;

    let programmes = programmes_for_module(&state.db, &module.code).await?;

    let programme_ids: Vec<String> = programmes.iter().map(|p| p.id.clone()).collect();
    let students = students_on_programmes(&state.db, &programme_ids).await?;

    debug!(
        "Module {}: {} programmes, {} students",
        module.code,
        programmes.len(),
        students.len()
    );

    Ok(views::modules::single_module(&module, &programmes, &students))
}
