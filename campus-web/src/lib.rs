//! campus-web library
//!
//! Server-rendered pages and JSON endpoints over the students, programmes,
//! modules and calendar tables.

use std::path::PathBuf;

use axum::Router;
use sqlx::SqlitePool;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod db;
pub mod error;
pub mod views;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
    /// Directory served for any path no route claims
    pub static_dir: PathBuf,
    /// Directory served under `/bootstrap`
    pub bootstrap_dir: PathBuf,
}

impl AppState {
    pub fn new(db: SqlitePool, static_dir: PathBuf, bootstrap_dir: PathBuf) -> Self {
        Self {
            db,
            static_dir,
            bootstrap_dir,
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    let static_files = ServeDir::new(&state.static_dir);
    let bootstrap_files = ServeDir::new(&state.bootstrap_dir);

    // Server-rendered pages
    let pages = Router::new()
        .route("/", get(api::index))
        .route("/all-students-formatted", get(api::all_students_formatted))
        .route("/single-student/:id", get(api::single_student))
        .route("/programmes", get(api::programmes))
        .route("/single-programme/:id", get(api::single_programme))
        .route("/single-module/:code", get(api::single_module))
        .route("/calendar", get(api::calendar));

    // Form submissions
    let forms = Router::new()
        .route("/set-date", post(api::set_date))
        .route("/student-select", post(api::student_select));

    // JSON and plain-text endpoints
    let data = Router::new()
        .route("/all-students", get(api::all_students))
        .route("/all-programmes", get(api::all_programmes))
        .route("/db_test", get(api::db_test))
        .route("/buildinfo", get(api::get_build_info))
        .route("/goodbye", get(api::goodbye))
        .route("/hello/:name", get(api::hello))
        .merge(api::health_routes());

    Router::new()
        .merge(pages)
        .merge(forms)
        .merge(data)
        .nest_service("/bootstrap", bootstrap_files)
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
