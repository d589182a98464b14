//! Student queries
//!
//! A student's page needs three dependent lookups: the student row, the
//! programme they are enrolled on, and that programme's modules.

use campus_common::db::{Module, Programme, Student};
use campus_common::{Error, Result};
use serde::Serialize;
use sqlx::SqlitePool;

use super::programmes::modules_for_programme;

/// Student with programme and modules resolved
#[derive(Debug, Clone, Serialize)]
pub struct StudentRecord {
    pub id: i64,
    pub name: String,
    /// `None` when the student is not enrolled on any programme
    pub programme: Option<Programme>,
    pub modules: Vec<Module>,
}

/// All students ordered by id
pub async fn list_students(pool: &SqlitePool) -> Result<Vec<Student>> {
    let students = sqlx::query_as::<_, Student>("SELECT id, name FROM Students ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(students)
}

/// Student by id; `Error::NotFound` if there is no such row
pub async fn find_student(pool: &SqlitePool, id: i64) -> Result<Student> {
    sqlx::query_as::<_, Student>("SELECT id, name FROM Students WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| Error::NotFound(format!("No student with id {}", id)))
}

/// Programme the student is enrolled on, if any
pub async fn student_programme(pool: &SqlitePool, student_id: i64) -> Result<Option<Programme>> {
    let programme = sqlx::query_as::<_, Programme>(
        r#"
        SELECT p.id, p.name
        FROM Student_Programme sp
        JOIN Programmes p ON p.id = sp.programme
        WHERE sp.id = ?
        "#,
    )
    .bind(student_id)
    .fetch_optional(pool)
    .await?;

    Ok(programme)
}

/// Load a student with programme and modules
pub async fn load_student_record(pool: &SqlitePool, id: i64) -> Result<StudentRecord> {
    let student = find_student(pool, id).await?;

    let programme = student_programme(pool, student.id).await?;

    let modules = match &programme {
        Some(p) => modules_for_programme(pool, &p.id).await?,
        None => Vec::new(),
    };

    Ok(StudentRecord {
        id: student.id,
        name: student.name,
        programme,
        modules,
    })
}
