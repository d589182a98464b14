//! HTTP route handlers for campus-web

pub mod buildinfo;
pub mod calendar;
pub mod greetings;
pub mod health;
pub mod modules;
pub mod programmes;
pub mod students;

pub use buildinfo::get_build_info;
pub use calendar::{calendar, set_date};
pub use db_test::db_test;
pub use greetings::{goodbye, hello};
pub use health::health_routes;
pub use modules::single_module;
pub use programmes::{all_programmes, programmes, single_programme};
pub use students::{all_students, all_students_formatted, index, single_student, student_select};
