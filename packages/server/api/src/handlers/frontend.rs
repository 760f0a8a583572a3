use crate::handlers::{self, ServiceError};
use crate::state::AppState;
use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index).fallback(handlers::not_found))
        .route("/index", get(index).fallback(handlers::not_found))
        .route("/index.html", get(index).fallback(handlers::not_found))
}

/// Serve the front-end verbatim. The file is read per request, never cached.
pub async fn index(State(state): State<AppState>) -> Result<Response, ServiceError> {
    let path = state.frontend_dir.join("index.html");
    let bytes = tokio::fs::read(&path).await.map_err(|e| {
        tracing::error!("failed to read front-end asset {}: {}", path.display(), e);
        ServiceError::InternalError("front-end asset unavailable".to_string())
    })?;

    Ok(([(header::CONTENT_TYPE, "text/html; charset=utf-8")], bytes).into_response())
}
