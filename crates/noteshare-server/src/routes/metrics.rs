//! Metrics exposition endpoint.

use axum::{Router, extract::State, http::header, response::IntoResponse, routing::get};

use crate::metrics;
use crate::state::AppState;

/// GET /metrics - Prometheus text exposition of the service counters.
async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let body = metrics::render(state.service().counters());
    ([(header::CONTENT_TYPE, metrics::CONTENT_TYPE)], body)
}

/// Build metrics routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/metrics", get(metrics_endpoint))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use noteshare_store::{AccessService, AdminGate, Catalog};

    #[tokio::test]
    async fn counters_show_up_after_traffic() {
        let state = AppState::new(
            AccessService::new(Catalog::sample(), AdminGate::open()),
            ServerConfig::default(),
        );
        state
            .service()
            .submit_request(Some("alice".into()), Some(1u64.into()))
            .unwrap();

        let body = metrics::render(state.service().counters());
        assert!(body.contains("noteshare_requests_submitted_total 1"));
        assert!(body.contains("noteshare_approvals_processed_total 0"));
    }
}
