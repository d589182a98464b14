//! Programme queries

use campus_common::db::{Module, Programme};
use campus_common::{Error, Result};
use sqlx::SqlitePool;

/// All programmes ordered by id
pub async fn list_programmes(pool: &SqlitePool) -> Result<Vec<Programme>> {
    let programmes = sqlx::query_as::<_, Programme>("SELECT id, name FROM Programmes ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(programmes)
}

/// Programme by id; `Error::NotFound` if there is no such row
pub async fn find_programme(pool: &SqlitePool, id: &str) -> Result<Programme> {
    sqlx::query_as::<_, Programme>("SELECT id, name FROM Programmes WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| Error::NotFound(format!("No programme with id {}", id)))
}

/// Modules taught on a programme, ordered by module code
pub async fn modules_for_programme(pool: &SqlitePool, programme_id: &str) -> Result<Vec<Module>> {
    let modules = sqlx::query_as::<_, Module>(
        r#"
        SELECT m.code, m.name
        FROM Programme_Modules pm
        JOIN Modules m ON m.code = pm.module
        WHERE pm.programme = ?
        ORDER BY m.code
        "#,
    )
    .bind(programme_id)
    .fetch_all(pool)
    .await?;

    Ok(modules)
}
