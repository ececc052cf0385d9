//! Liveness plus a calculator self-check.
//!
//! `GET /health` runs the reference measurement (70 kg, 1.75 m) through the
//! shared calculator and reports 503 if it no longer yields 22.86 in the
//! normal band.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use imc_core::{Band, Calculator};
use serde::{Deserialize, Serialize};

use super::AppState;

const REFERENCE_WEIGHT_KG: f64 = 70.0;
const REFERENCE_HEIGHT_M: f64 = 1.75;
const REFERENCE_INDEX: f64 = 22.86;

/// Health report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `"ok"` or `"degraded"`
    pub status: String,
    pub version: String,
    /// Number of bands in the calculator's table
    pub bands: usize,
    /// Index computed for the reference measurement, if it computed at all
    pub reference_index: Option<f64>,
}

/// Build the health routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_handler))
}

/// Run the reference measurement; `Some(index)` is returned even when wrong.
fn self_check(calculator: &Calculator) -> (bool, Option<f64>) {
    match calculator.assess(REFERENCE_WEIGHT_KG, REFERENCE_HEIGHT_M) {
        Ok(assessment) => (
            assessment.index == REFERENCE_INDEX && assessment.band == Band::Normal,
            Some(assessment.index),
        ),
        Err(err) => {
            tracing::error!(%err, "Reference measurement rejected");
            (false, None)
        }
    }
}

/// GET /health
async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let (passed, reference_index) = self_check(&state.calculator);
    let (status, label) = if passed {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    let response = HealthResponse {
        status: label.to_string(),
        version: crate::VERSION.to_string(),
        bands: state.calculator.reference_table().len(),
        reference_index,
    };

    (status, Json(response))
}
