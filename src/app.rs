use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/habits", get(handlers::get_habits).post(handlers::create_habit))
        .route("/api/habits/:id", delete(handlers::delete_habit))
        .route("/api/habits/:id/log", post(handlers::log_habit))
        .route("/api/stats", get(handlers::get_stats))
        .route(
            "/api/reminders",
            get(handlers::get_reminders).post(handlers::create_reminder),
        )
        .route("/api/reminders/:id", delete(handlers::delete_reminder))
        .with_state(state)
}
