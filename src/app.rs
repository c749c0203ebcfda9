use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/api/journal",
            get(handlers::list_entries).post(handlers::create_entry),
        )
        .route(
            "/api/journal/:id",
            get(handlers::get_entry)
                .put(handlers::update_entry)
                .delete(handlers::delete_entry),
        )
        .route("/api/insights", get(handlers::get_insights))
        .with_state(state)
}
