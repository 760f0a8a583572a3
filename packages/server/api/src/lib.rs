use axum::{http, Router};
use tower_http::cors::{Any, CorsLayer};

pub mod handlers;
pub mod state;

use state::AppState;

/// Assemble the service router.
///
/// The JSON API routes sit behind a permissive CORS layer; the static
/// front-end and the catch-all 404 are merged outside it and carry no
/// cross-origin headers.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([http::Method::GET]);

    let api = handlers::risks::router().layer(cors);

    Router::new()
        .merge(api)
        .merge(handlers::frontend::router())
        .fallback(handlers::not_found)
        .with_state(state)
}
