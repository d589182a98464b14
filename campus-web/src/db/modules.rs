//! Module queries
//!
//! The module page walks module → programmes teaching it → students on any
//! of those programmes. The last step binds a variable-length `IN` list.

use campus_common::db::{Module, ModuleStudent, Programme};
use campus_common::{Error, Result};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

/// Module by code; `Error::NotFound` if there is no such row
pub async fn find_module(pool: &SqlitePool, code: &str) -> Result<Module> {
    sqlx::query_as::<_, Module>("SELECT code, name FROM Modules WHERE code = ?")
        .bind(code)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| Error::NotFound(format!("No module with code {}", code)))
}

/// Programmes that include the module, ordered by programme id
pub async fn programmes_for_module(pool: &SqlitePool, code: &str) -> Result<Vec<Programme>> {
    let programmes = sqlx::query_as::<_, Programme>(
        r#"
        SELECT p.id, p.name
        FROM Programme_Modules pm
        JOIN Programmes p ON p.id = pm.programme
        WHERE pm.module = ?
        ORDER BY p.id
        "#,
    )
    .bind(code)
    .fetch_all(pool)
    .await?;

    Ok(programmes)
}

/// Students enrolled on any of `programme_ids`
///
/// An empty list yields no students without touching the database
/// (`IN ()` is not valid SQL).
pub async fn students_on_programmes(
    pool: &SqlitePool,
    programme_ids: &[String],
) -> Result<Vec<ModuleStudent>> {
    if programme_ids.is_empty() {
        return Ok(Vec::new());
    }

    let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(
        "SELECT s.id, s.name, sp.programme \
         FROM Student_Programme sp \
         JOIN Students s ON s.id = sp.id \
         WHERE sp.programme IN (",
    );

    let mut ids = builder.separated(", ");
    for id in programme_ids {
        ids.push_bind(id.clone());
    }
    ids.push_unseparated(")");

    builder.push(" ORDER BY s.id");

    let students = builder
        .build_query_as::<ModuleStudent>()
        .fetch_all(pool)
        .await?;

    Ok(students)
}
