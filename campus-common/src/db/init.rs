//! Database initialization
//!
//! Creates the database file and its parent directory when missing, then
//! applies the schema idempotently. A fresh database can optionally be
//! seeded with a small demo data set so every page renders something.

use crate::Result;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::path::Path;
use tracing::{debug, info};

/// Open (creating if needed) the database at `db_path` and apply the schema
pub async fn init_database(db_path: &Path, seed_demo: bool) -> Result<SqlitePool> {
    let newly_created = !db_path.exists();

    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect(&db_url)
        .await?;

    if newly_created {
        info!("Initialized new database: {}", db_path.display());
    } else {
        info!("Opened existing database: {}", db_path.display());
    }

    create_schema(&pool).await?;

    if seed_demo {
        seed_demo_data(&pool).await?;
    }

    Ok(pool)
}

/// Apply `CREATE TABLE IF NOT EXISTS` for every table (safe to call repeatedly)
pub async fn create_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query("PRAGMA foreign_keys = ON").execute(pool).await?;

    create_students_table(pool).await?;
    create_programmes_table(pool).await?;
    create_modules_table(pool).await?;

    // Linking tables
    create_programme_modules_table(pool).await?;
    create_student_programme_table(pool).await?;

    create_dates_table(pool).await?;
    create_test_table(pool).await?;

    Ok(())
}

async fn create_students_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS Students (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_programmes_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS Programmes (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_modules_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS Modules (
            code TEXT PRIMARY KEY,
            name TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_programme_modules_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS Programme_Modules (
            programme TEXT NOT NULL REFERENCES Programmes(id) ON DELETE CASCADE,
            module TEXT NOT NULL REFERENCES Modules(code) ON DELETE CASCADE,
            PRIMARY KEY (programme, module)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_programme_modules_module ON Programme_Modules(module)",
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// One programme per student: `id` is the student id
async fn create_student_programme_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS Student_Programme (
            id INTEGER PRIMARY KEY REFERENCES Students(id) ON DELETE CASCADE,
            programme TEXT NOT NULL REFERENCES Programmes(id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_student_programme_programme ON Student_Programme(programme)",
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_dates_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS dates (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            date DATE NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_test_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS test_table (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

const DEMO_PROGRAMMES: &[(&str, &str)] = &[
    ("09UU0001", "BSc Computer Science"),
    ("09UU0002", "BSc Software Engineering"),
    ("09UU0003", "BSc Cyber Security"),
];

const DEMO_MODULES: &[(&str, &str)] = &[
    ("CMP1040", "Introduction to Programming"),
    ("CMP1041", "Computer Systems"),
    ("CMP1042", "Databases"),
    ("CMP2010", "Software Development 2"),
    ("CMP2020", "Network Security"),
];

const DEMO_PROGRAMME_MODULES: &[(&str, &str)] = &[
    ("09UU0001", "CMP1040"),
    ("09UU0001", "CMP1041"),
    ("09UU0001", "CMP1042"),
    ("09UU0001", "CMP2010"),
    ("09UU0002", "CMP1040"),
    ("09UU0002", "CMP1042"),
    ("09UU0002", "CMP2010"),
    ("09UU0003", "CMP1041"),
    ("09UU0003", "CMP2020"),
];

const DEMO_STUDENTS: &[(i64, &str)] = &[
    (1, "Amara Okafor"),
    (2, "Ben Turner"),
    (3, "Chloe Martin"),
    (4, "Dev Patel"),
    (5, "Elena Rossi"),
    (6, "Farah Khan"),
];

// Student 6 is deliberately left without a programme
const DEMO_STUDENT_PROGRAMMES: &[(i64, &str)] = &[
    (1, "09UU0001"),
    (2, "09UU0001"),
    (3, "09UU0002"),
    (4, "09UU0003"),
    (5, "09UU0002"),
];

const DEMO_TEST_ROWS: &[(i64, &str)] = &[(1, "Lisa"), (2, "Kimia")];

/// Insert the demo data set if `Students` is empty
///
/// Returns `true` when rows were inserted.
pub async fn seed_demo_data(pool: &SqlitePool) -> Result<bool> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM Students")
        .fetch_one(pool)
        .await?;
    if existing > 0 {
        debug!("Students table has {} rows, skipping demo seed", existing);
        return Ok(false);
    }

    let mut tx = pool.begin().await?;

    for &(id, name) in DEMO_PROGRAMMES {
        sqlx::query("INSERT OR IGNORE INTO Programmes (id, name) VALUES (?, ?)")
            .bind(id)
            .bind(name)
            .execute(&mut *tx)
            .await?;
    }

    for &(code, name) in DEMO_MODULES {
        sqlx::query("INSERT OR IGNORE INTO Modules (code, name) VALUES (?, ?)")
            .bind(code)
            .bind(name)
            .execute(&mut *tx)
            .await?;
    }

    for &(programme, module) in DEMO_PROGRAMME_MODULES {
        sqlx::query("INSERT OR IGNORE INTO Programme_Modules (programme, module) VALUES (?, ?)")
            .bind(programme)
            .bind(module)
            .execute(&mut *tx)
            .await?;
    }

    for &(id, name) in DEMO_STUDENTS {
        sqlx::query("INSERT OR IGNORE INTO Students (id, name) VALUES (?, ?)")
            .bind(id)
            .bind(name)
            .execute(&mut *tx)
            .await?;
    }

    for &(id, programme) in DEMO_STUDENT_PROGRAMMES {
        sqlx::query("INSERT OR IGNORE INTO Student_Programme (id, programme) VALUES (?, ?)")
            .bind(id)
            .bind(programme)
            .execute(&mut *tx)
            .await?;
    }

    for &(id, name) in DEMO_TEST_ROWS {
        sqlx::query("INSERT OR IGNORE INTO test_table (id, name) VALUES (?, ?)")
            .bind(id)
            .bind(name)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;

    info!(
        "Seeded demo data: {} students, {} programmes, {} modules",
        DEMO_STUDENTS.len(),
        DEMO_PROGRAMMES.len(),
        DEMO_MODULES.len()
    );

    Ok(true)
}
