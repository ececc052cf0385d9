//! Index calculation endpoint
//!
//! `POST /calculate` takes `{ "weight": .., "height": .. }` where each value
//! is a JSON number or a numeric string. Missing fields count as `0` and
//! therefore fail validation.

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
    routing::post,
    Router,
};
use imc_core::{parse_decimal, Assessment, Field, ImcError, Measurement, Severity};
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::error::ApiError;

/// A measurement as sent by the client
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumericField {
    Number(f64),
    Text(String),
}

impl NumericField {
    fn resolve(&self, field: Field) -> Result<f64, ImcError> {
        match self {
            NumericField::Number(value) => Ok(*value),
            NumericField::Text(text) => parse_decimal(text, field),
        }
    }
}

/// Calculation request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalculateRequest {
    #[serde(default)]
    pub weight: Option<NumericField>,
    #[serde(default)]
    pub height: Option<NumericField>,
}

impl CalculateRequest {
    /// Resolve both fields and validate them as a pair.
    pub fn measurement(&self) -> Result<Measurement, ImcError> {
        let weight = resolve(self.weight.as_ref(), Field::Weight)?;
        let height = resolve(self.height.as_ref(), Field::Height)?;
        Measurement::new(weight, height)
    }
}

fn resolve(value: Option<&NumericField>, field: Field) -> Result<f64, ImcError> {
    value.map_or(Ok(0.0), |v| v.resolve(field))
}

/// Band details in the response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationBody {
    pub name: String,
    pub severity: Severity,
    pub icon: String,
}

/// Successful calculation response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateResponse {
    pub success: bool,
    pub index: f64,
    pub classification: ClassificationBody,
    pub recommendation: String,
}

impl From<&Assessment> for CalculateResponse {
    fn from(assessment: &Assessment) -> Self {
        Self {
            success: true,
            index: assessment.index,
            classification: ClassificationBody {
                name: assessment.band.label().to_string(),
                severity: assessment.band.severity(),
                icon: assessment.band.icon().to_string(),
            },
            recommendation: assessment.recommendation.to_string(),
        }
    }
}

/// Build the calculation routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/calculate", post(calculate_handler))
}

/// POST /calculate
///
/// All validation happens here, while building the [`Measurement`]: every
/// rejection (unparsable text, range checks, vanishing height) becomes a 400
/// at this boundary. The calculator then only sees validated measurements
/// through the infallible [`Calculator::assess_measurement`], so it has no
/// 400 path of its own to reach.
///
/// [`Calculator::assess_measurement`]: imc_core::Calculator::assess_measurement
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> Result<Json<CalculateResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        ApiError::InvalidInput(format!("Requisição inválida: {}", rejection.body_text()))
    })?;

    let measurement = request.measurement()?;
    let assessment = state.calculator.assess_measurement(measurement);

    tracing::info!(
        index = assessment.index,
        band = %assessment.band,
        "Index calculated"
    );

    Ok(Json(CalculateResponse::from(&assessment)))
}
