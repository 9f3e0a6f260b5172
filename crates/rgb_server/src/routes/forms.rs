use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::handlers::{self, AppState};

pub fn form_routes() -> Router<AppState> {
    Router::new()
        .route("/api/forms", post(handlers::create_form))
        .route("/api/forms/{id}", get(handlers::get_form))
        .route("/api/forms/{id}", delete(handlers::delete_form))
        // Structural changes rebuild the whole form
        .route("/api/forms/{id}/tables", post(handlers::add_table))
        .route("/api/forms/{id}/rows", post(handlers::add_row))
        .route("/api/forms/{id}/submit", post(handlers::submit_form))
}
