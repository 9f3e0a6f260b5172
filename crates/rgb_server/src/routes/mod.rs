pub mod forms;

pub use forms::form_routes;

use axum::{Router, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "RGB Table API Server" }))
        .merge(form_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
