//! Calendar date queries

use campus_common::db::CalendarDate;
use campus_common::time::to_sql_date;
use campus_common::Result;
use chrono::NaiveDate;
use sqlx::SqlitePool;

/// All stored dates in chronological order
pub async fn list_dates(pool: &SqlitePool) -> Result<Vec<CalendarDate>> {
    let dates = sqlx::query_as::<_, CalendarDate>("SELECT id, date FROM dates ORDER BY date, id")
        .fetch_all(pool)
        .await?;

    Ok(dates)
}

/// Store a date, returning the new row id
pub async fn insert_date(pool: &SqlitePool, date: NaiveDate) -> Result<i64> {
    let result = sqlx::query("INSERT INTO dates (date) VALUES (?)")
        .bind(to_sql_date(date))
        .execute(pool)
        .await?;

    Ok(result.last_insert_rowid())
}
