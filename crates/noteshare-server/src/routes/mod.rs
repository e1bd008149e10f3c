//! Route definitions for the HTTP API.

pub mod health;
pub mod metrics;
pub mod notes;
pub mod requests;
pub mod students;

use axum::Router;

use crate::state::AppState;

/// Build the complete router with all routes.
///
/// Domain routes are nested under `/api/storage`; health and metrics sit
/// at the root.
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .merge(notes::routes())
        .merge(students::routes())
        .merge(requests::routes());

    Router::new()
        .nest("/api/storage", api)
        .merge(health::routes())
        .merge(metrics::routes())
        .with_state(state)
}
