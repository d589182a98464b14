//! Calendar routes: list stored dates and add new ones

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};
use campus_common::time::{format_huge, parse_form_date};
use serde::Deserialize;
use tracing::{debug, error, info, warn};

use crate::db::calendar::{insert_date, list_dates};
use crate::error::ApiError;
use crate::views;
use crate::AppState;

/// Body text for any failed date submission
pub const SET_DATE_ERROR: &str = "sorry there was an error";

/// Body text for a stored date
pub const SET_DATE_OK: &str = "date added";

#[derive(Debug, Deserialize)]
pub struct SetDateForm {
    #[serde(default)]
    pub date: String,
}

/// GET /calendar
pub async fn calendar(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let dates: Vec<String> = list_dates(&state.db)
        .await?
        .into_iter()
        .map(|row| format_huge(row.date))
        .collect();

    Ok(views::calendar::calendar(&dates))
}

/// POST /set-date
///
/// Plain-text reply: `date added` on success, otherwise the error text with
/// 400 (unparseable date) or 500 (insert failed).
pub async fn set_date(State(state): State<AppState>, Form(form): Form<SetDateForm>) -> Response {
    debug!("set-date submitted: {:?}", form.date);

    let date = match parse_form_date(&form.date) {
        Ok(date) => date,
        Err(e) => {
            warn!("Rejected date: {}", e);
            return (StatusCode::BAD_REQUEST, SET_DATE_ERROR).into_response();
        }
    };

    match insert_date(&state.db, date).await {
        Ok(id) => {
            info!("Added date {} (id {})", date, id);
            (StatusCode::OK, SET_DATE_OK).into_response()
        }
        Err(e) => {
            error!("Error while adding date: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, SET_DATE_ERROR).into_response()
        }
    }
}
