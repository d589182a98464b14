//! Connectivity check table

use campus_common::db::TestRow;
use campus_common::Result;
use sqlx::SqlitePool;

pub async fn list_test_rows(pool: &SqlitePool) -> Result<Vec<TestRow>> {
    let rows = sqlx::query_as::<_, TestRow>("SELECT id, name FROM test_table ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(rows)
}
