//! Database row models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row of `Students`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Student {
    pub id: i64,
    pub name: String,
}

/// Row of `Programmes`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Programme {
    pub id: String,
    pub name: String,
}

/// Row of `Modules`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Module {
    pub code: String,
    pub name: String,
}

/// Student enrolled on a programme that teaches a given module
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ModuleStudent {
    pub id: i64,
    pub name: String,
    pub programme: String,
}

/// Row of `dates`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct CalendarDate {
    pub id: i64,
    pub date: NaiveDate,
}

/// Row of `test_table`, used by the connectivity check route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct TestRow {
    pub id: i64,
    pub name: String,
}
