//! Static greeting routes

use axum::extract::Path;
use tracing::debug;

/// GET /goodbye
pub async fn goodbye() -> &'static str {
    "Goodbye world!"
}

/// GET /hello/:name
pub async fn hello(Path(name): Path<String>) -> String {
    debug!("hello name={}", name);
    format!("Hello {}", name)
}
