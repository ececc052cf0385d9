//! Route modules for the IMC server
//!
//! - page: the static HTML front end (`GET /`)
//! - calculate: index calculation (`POST /calculate`)
//! - health: liveness and calculator self-check (`GET /health`)

pub mod calculate;
pub mod health;
pub mod page;

use axum::Router;
use imc_core::Calculator;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::error::handle_panic;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Calculator built once at startup
    pub calculator: Arc<Calculator>,
}

impl AppState {
    /// Share `calculator` with every handler
    pub fn new(calculator: Arc<Calculator>) -> Self {
        Self { calculator }
    }
}

/// Build the main application router by merging all route modules
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(page::routes())
        .merge(calculate::routes())
        .merge(health::routes())
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CatchPanicLayer::custom(handle_panic)),
        )
}

#[cfg(test)]
pub(crate) fn test_state() -> AppState {
    AppState::new(Arc::new(Calculator::new()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_router_merges_all_route_groups() {
        let router = build_router(test_state());

        let response = router
            .clone()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = router
            .clone()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"weight":70,"height":1.75}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_route_returns_404() {
        let router = build_router(test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/unknown/path")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    async fn boom() -> &'static str {
        panic!("lookup table missing")
    }

    #[tokio::test]
    async fn test_panicking_handler_returns_500_json() {
        let router: Router = Router::new()
            .route("/boom", get(boom))
            .layer(CatchPanicLayer::custom(handle_panic));

        let response = router
            .oneshot(Request::builder().uri("/boom").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "internal error: lookup table missing");
    }

    #[test]
    fn test_app_state_shares_calculator() {
        let state = test_state();
        let cloned = state.clone();
        assert!(Arc::ptr_eq(&state.calculator, &cloned.calculator));
    }
}
