//! Integration tests for campus-web routes
//!
//! Each test gets its own temporary SQLite database seeded with the demo
//! data set, plus temporary static and bootstrap directories.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use campus_common::db::init_database;
use campus_web::{build_router, AppState};
use serde_json::Value;
use sqlx::SqlitePool;
use tempfile::TempDir;
use tower::util::ServiceExt; // for `oneshot` method

struct TestApp {
    // Held so the temporary directory outlives the test
    _dir: TempDir,
    app: Router,
    pool: SqlitePool,
}

impl TestApp {
    async fn get(&self, uri: &str) -> Response {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.app.clone().oneshot(request).await.unwrap()
    }

    async fn post_form(&self, uri: &str, form: &str) -> Response {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .unwrap();
        self.app.clone().oneshot(request).await.unwrap()
    }
}

/// Test helper: seeded database and router
async fn setup_app() -> TestApp {
    let dir = TempDir::new().unwrap();
    let pool = init_database(&dir.path().join("campus.db"), true)
        .await
        .expect("Should initialize test database");

    let static_dir = dir.path().join("static");
    std::fs::create_dir_all(static_dir.join("css")).unwrap();
    std::fs::write(static_dir.join("css").join("style.css"), "body {}").unwrap();

    let bootstrap_dir = dir.path().join("bootstrap");
    std::fs::create_dir_all(bootstrap_dir.join("css")).unwrap();
    std::fs::write(bootstrap_dir.join("css").join("bootstrap.min.css"), ".btn {}").unwrap();

    let state = AppState::new(pool.clone(), static_dir, bootstrap_dir);

    TestApp {
        _dir: dir,
        app: build_router(state),
        pool,
    }
}

async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Should read body");
    String::from_utf8(bytes.to_vec()).expect("Body should be UTF-8")
}

async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

fn position(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("Expected {:?} in page", needle))
}

// =============================================================================
// Health, greetings, build info
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let t = setup_app().await;
    let response = t.get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "campus-web");
    assert!(body["version"].is_string());
    assert_eq!(body["database"], "ok");
    assert_eq!(body["students"], 6);
}

#[tokio::test]
async fn test_health_reports_unavailable_database() {
    let t = setup_app().await;
    t.pool.close().await;

    let response = t.get("/health").await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body = body_json(response).await;
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["database"], "unavailable");
    assert!(body["students"].is_null());
}

#[tokio::test]
async fn test_buildinfo_endpoint() {
    let t = setup_app().await;
    let response = t.get("/buildinfo").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert!(body["version"].is_string());
    assert!(body["git_hash"].is_string());
    assert!(body["build_timestamp"].is_string());
}

#[tokio::test]
async fn test_goodbye() {
    let t = setup_app().await;
    let response = t.get("/goodbye").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "Goodbye world!");
}

#[tokio::test]
async fn test_hello_name() {
    let t = setup_app().await;
    let response = t.get("/hello/Ada").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "Hello Ada");
}

// =============================================================================
// JSON listings
// =============================================================================

#[tokio::test]
async fn test_all_students_json() {
    let t = setup_app().await;
    let response = t.get("/all-students").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let students = body.as_array().expect("Should be an array");
    assert_eq!(students.len(), 6);
    assert_eq!(students[0]["id"], 1);
    assert_eq!(students[0]["name"], "Amara Okafor");
}

#[tokio::test]
async fn test_all_programmes_json() {
    let t = setup_app().await;
    let response = t.get("/all-programmes").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let programmes = body.as_array().expect("Should be an array");
    assert_eq!(programmes.len(), 3);
    assert_eq!(programmes[0]["id"], "09UU0001");
    assert_eq!(programmes[0]["name"], "BSc Computer Science");
}

#[tokio::test]
async fn test_db_test_json() {
    let t = setup_app().await;
    let response = t.get("/db_test").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Lisa", "Kimia"]);
}

#[tokio::test]
async fn test_json_database_error_hides_details() {
    let t = setup_app().await;
    sqlx::query("DROP TABLE Student_Programme").execute(&t.pool).await.unwrap();
    sqlx::query("DROP TABLE Students").execute(&t.pool).await.unwrap();

    let response = t.get("/all-students").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Internal server error");
}

// =============================================================================
// Student pages
// =============================================================================

#[tokio::test]
async fn test_index_lists_students_in_select() {
    let t = setup_app().await;
    let response = t.get("/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/html; charset=utf-8"
    );

    let html = body_text(response).await;
    assert!(html.contains(r#"action="/student-select""#));
    assert!(html.contains(r#"name="studentParam""#));
    assert!(html.contains(r#"<option value="1">Amara Okafor</option>"#));
    assert!(html.contains(r#"<option value="6">Farah Khan</option>"#));
}

#[tokio::test]
async fn test_all_students_formatted() {
    let t = setup_app().await;
    let response = t.get("/all-students-formatted").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains(r#"<a href="/single-student/2">Ben Turner</a>"#));
    assert!(html.contains("<table"));
}

#[tokio::test]
async fn test_student_names_are_escaped() {
    let t = setup_app().await;
    sqlx::query("INSERT INTO Students (id, name) VALUES (7, '<script>alert(1)</script>')")
        .execute(&t.pool)
        .await
        .unwrap();

    let html = body_text(t.get("/all-students-formatted").await).await;
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(!html.contains("<script>"));
}

#[tokio::test]
async fn test_single_student_with_programme_and_modules() {
    let t = setup_app().await;
    let response = t.get("/single-student/1").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("<h1>Amara Okafor</h1>"));
    assert!(html.contains(r#"<a href="/single-programme/09UU0001">BSc Computer Science</a>"#));
    assert!(html.contains(r#"<a href="/single-module/CMP1040">CMP1040</a>"#));
    assert!(html.contains(r#"<a href="/single-module/CMP2010">CMP2010</a>"#));
    assert!(!html.contains("CMP2020"));
}

#[tokio::test]
async fn test_single_student_without_programme() {
    let t = setup_app().await;
    let response = t.get("/single-student/6").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("Farah Khan"));
    assert!(html.contains("Not enrolled on a programme"));
    assert!(html.contains("No modules"));
}

#[tokio::test]
async fn test_single_student_unknown_id() {
    let t = setup_app().await;
    let response = t.get("/single-student/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let html = body_text(response).await;
    assert!(html.contains("No student with id 999"));
}

#[tokio::test]
async fn test_single_student_non_numeric_id() {
    let t = setup_app().await;
    let response = t.get("/single-student/abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_student_select_redirects() {
    let t = setup_app().await;
    let response = t.post_form("/student-select", "studentParam=3").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/single-student/3");
}

#[tokio::test]
async fn test_student_select_missing_param() {
    let t = setup_app().await;
    let response = t.post_form("/student-select", "").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Programme pages
// =============================================================================

#[tokio::test]
async fn test_programmes_table_links() {
    let t = setup_app().await;
    let response = t.get("/programmes").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains(r#"<a href="./single-programme/09UU0001">BSc Computer Science</a>"#));
    assert!(html.contains(r#"<a href="./single-programme/09UU0003">BSc Cyber Security</a>"#));
}

#[tokio::test]
async fn test_single_programme_title_before_modules() {
    let t = setup_app().await;
    let response = t.get("/single-programme/09UU0003").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    let heading = position(&html, "<h1>Programme</h1>");
    let name = position(&html, "<p class=\"lead\">BSc Cyber Security</p>");
    let modules = position(&html, "<h2>Modules</h2>");
    let first_module = position(&html, r#"<a href="/single-module/CMP1041">CMP1041</a>"#);

    assert!(heading < name && name < modules && modules < first_module);
    assert!(html.contains("Network Security"));
    assert!(!html.contains("CMP1040"));
}

#[tokio::test]
async fn test_single_programme_unknown() {
    let t = setup_app().await;
    let response = t.get("/single-programme/NOPE").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// Module page
// =============================================================================

#[tokio::test]
async fn test_single_module_shared_by_two_programmes() {
    let t = setup_app().await;
    let response = t.get("/single-module/CMP2010").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("Software Development 2"));

    let programmes = position(&html, "<h2>Programmes with this module</h2>");
    let students = position(&html, "<h2>Students on this module</h2>");
    assert!(programmes < students);

    assert!(html.contains(r#"<a href="/single-programme/09UU0001">BSc Computer Science</a>"#));
    assert!(html.contains(r#"<a href="/single-programme/09UU0002">BSc Software Engineering</a>"#));
    assert!(!html.contains("BSc Cyber Security"));

    for link in [
        r#"<a href="/single-student/1">Amara Okafor</a>"#,
        r#"<a href="/single-student/2">Ben Turner</a>"#,
        r#"<a href="/single-student/3">Chloe Martin</a>"#,
        r#"<a href="/single-student/5">Elena Rossi</a>"#,
    ] {
        let at = position(&html, link);
        assert!(at > students, "{} should be in the students table", link);
    }
    assert!(!html.contains("Dev Patel"));
    assert!(!html.contains("Farah Khan"));
}

#[tokio::test]
async fn test_single_module_single_programme() {
    let t = setup_app().await;
    let html = body_text(t.get("/single-module/CMP2020").await).await;

    assert!(html.contains(r#"<a href="/single-student/4">Dev Patel</a>"#));
    assert!(!html.contains("Amara Okafor"));
}

#[tokio::test]
async fn test_single_module_without_programmes() {
    let t = setup_app().await;
    sqlx::query("INSERT INTO Modules (code, name) VALUES ('CMP9999', 'Unassigned Module')")
        .execute(&t.pool)
        .await
        .unwrap();

    let response = t.get("/single-module/CMP9999").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("Unassigned Module"));
    assert!(!html.contains("/single-student/"));
    assert!(!html.contains("/single-programme/"));
}

#[tokio::test]
async fn test_module_links_survive_reserved_characters() {
    let t = setup_app().await;
    sqlx::query("INSERT INTO Modules (code, name) VALUES ('C#101', 'Hash Module')")
        .execute(&t.pool)
        .await
        .unwrap();
    sqlx::query("INSERT INTO Programme_Modules (programme, module) VALUES ('09UU0001', 'C#101')")
        .execute(&t.pool)
        .await
        .unwrap();

    let html = body_text(t.get("/single-programme/09UU0001").await).await;
    let href = r#"<a href="/single-module/C%23101">C#101</a>"#;
    assert!(html.contains(href), "module link should be percent-encoded");

    let response = t.get("/single-module/C%23101").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("Hash Module"));
    assert!(html.contains(r#"<a href="/single-programme/09UU0001">BSc Computer Science</a>"#));
}

#[tokio::test]
async fn test_programme_links_survive_slash_in_id() {
    let t = setup_app().await;
    sqlx::query("INSERT INTO Programmes (id, name) VALUES ('PG/2024?', 'MSc Data Science')")
        .execute(&t.pool)
        .await
        .unwrap();

    let html = body_text(t.get("/programmes").await).await;
    assert!(html.contains(r#"<a href="./single-programme/PG%2F2024%3F">MSc Data Science</a>"#));

    let response = t.get("/single-programme/PG%2F2024%3F").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("MSc Data Science"));
}

#[tokio::test]
async fn test_single_module_unknown() {
    let t = setup_app().await;
    let response = t.get("/single-module/NOPE").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let html = body_text(response).await;
    assert!(html.contains("No module with code NOPE"));
}

// =============================================================================
// Calendar
// =============================================================================

#[tokio::test]
async fn test_calendar_empty() {
    let t = setup_app().await;
    let response = t.get("/calendar").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("No dates yet"));
    assert!(html.contains(r#"action="/set-date""#));
}

#[tokio::test]
async fn test_set_date_then_calendar_shows_it() {
    let t = setup_app().await;

    let response = t.post_form("/set-date", "date=2024-3-05").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "date added");

    let response = t.post_form("/set-date", "date=1983-10-14").await;
    assert_eq!(response.status(), StatusCode::OK);

    let stored: Vec<String> = sqlx::query_scalar("SELECT date FROM dates ORDER BY id")
        .fetch_all(&t.pool)
        .await
        .unwrap();
    assert_eq!(stored, vec!["2024-03-05", "1983-10-14"]);

    let html = body_text(t.get("/calendar").await).await;
    let earlier = position(&html, "<li>Friday, October 14, 1983</li>");
    let later = position(&html, "<li>Tuesday, March 5, 2024</li>");
    assert!(earlier < later, "dates should be listed chronologically");
}

#[tokio::test]
async fn test_set_date_rejects_bad_input() {
    let t = setup_app().await;

    let response = t.post_form("/set-date", "date=tomorrow").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "sorry there was an error");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM dates")
        .fetch_one(&t.pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_set_date_insert_failure() {
    let t = setup_app().await;
    sqlx::query("DROP TABLE dates").execute(&t.pool).await.unwrap();

    let response = t.post_form("/set-date", "date=2024-01-01").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, "sorry there was an error");
}

// =============================================================================
// Static files
// =============================================================================

#[tokio::test]
async fn test_static_file_served_from_root() {
    let t = setup_app().await;
    let response = t.get("/css/style.css").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "body {}");
}

#[tokio::test]
async fn test_bootstrap_files_served() {
    let t = setup_app().await;
    let response = t.get("/bootstrap/css/bootstrap.min.css").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, ".btn {}");
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let t = setup_app().await;
    let response = t.get("/no-such-page.html").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
