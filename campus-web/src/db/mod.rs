//! Per-entity queries used by the route handlers

pub mod calendar;
pub mod modules;
pub mod programmes;
pub mod students;
pub mod test_table;
