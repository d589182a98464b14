//! Student routes

use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form, Json,
};
use campus_common::db::Student;
use serde::Deserialize;
use tracing::debug;

use crate::db::students::{list_students, load_student_record};
use crate::error::{ApiError, JsonError};
use crate::views;
use crate::AppState;

/// Form posted by the index page drop-down
#[derive(Debug, Deserialize)]
pub struct StudentSelectForm {
    #[serde(rename = "studentParam")]
    pub student_param: Option<String>,
}

/// GET /
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let students = list_students(&state.db).await?;
    Ok(views::students::index(&students))
}

/// POST /student-select
///
/// Redirects to the chosen student's page.
pub async fn student_select(Form(form): Form<StudentSelectForm>) -> Result<Redirect, ApiError> {
    let id = form
        .student_param
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::BadRequest("No student selected".to_string()))?;

    let id = parse_student_id(id)?;
    debug!("Student selected: {}", id);

    Ok(Redirect::to(&format!("/single-student/{}", id)))
}

/// GET /all-students
pub async fn all_students(State(state): State<AppState>) -> Result<Json<Vec<Student>>, JsonError> {
    let students = list_students(&state.db).await?;
    debug!("Returning {} students", students.len());
    Ok(Json(students))
}

/// GET /all-students-formatted
pub async fn all_students_formatted(
    State(state): State<AppState>,
) -> Result<Html<String>, ApiError> {
    let students = list_students(&state.db).await?;
    Ok(views::students::all_students(&students))
}

/// GET /single-student/:id
pub async fn single_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, ApiError> {
    let id = parse_student_id(&id)?;

    let record = load_student_record(&state.db, id).await?;

    debug!(
        "Student {} ({}): programme={:?}, {} modules",
        record.id,
        record.name,
        record.programme.as_ref().map(|p| p.id.as_str()),
        record.modules.len()
    );

    Ok(views::students::student(&record))
}

fn parse_student_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>()
        .map_err(|_| ApiError::BadRequest(format!("Invalid student id: {}", raw)))
}
