//! Index computation.
//!
//! `weight_kg / height_m²`, rounded to two decimal places, after validating
//! both measurements. Checks run in a fixed order and the first violation
//! wins:
//!
//! 1. weight > 0
//! 2. height > 0
//! 3. height ≤ 3.0 m
//! 4. weight ≤ 500 kg
//! 5. height large enough that the index stays finite
//!
//! NaN fails the positivity check and infinities fail the upper bounds.
//! The last check only trips for heights around 1e-152 m and below, where
//! `height²` underflows or the quotient overflows.

use crate::band::{Band, BandRange, BandTable};
use crate::error::ImcError;

/// Largest accepted height in metres
pub const MAX_HEIGHT_M: f64 = 3.0;

/// Largest accepted weight in kilograms
pub const MAX_WEIGHT_KG: f64 = 500.0;

const WEIGHT_NOT_POSITIVE: &str = "Peso deve ser maior que zero";
const HEIGHT_NOT_POSITIVE: &str = "Altura deve ser maior que zero";
const HEIGHT_TOO_LARGE: &str = "Altura deve ser menor que 3 metros";
const WEIGHT_TOO_LARGE: &str = "Peso deve ser menor que 500 kg";
const HEIGHT_TOO_SMALL: &str = "Altura muito pequena para o cálculo";

/// A validated weight/height pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    weight_kg: f64,
    height_m: f64,
}

impl Measurement {
    /// Validate and build a measurement.
    ///
    /// # Errors
    /// `ImcError::InvalidInput` with the reason of the first failed check.
    pub fn new(weight_kg: f64, height_m: f64) -> Result<Self, ImcError> {
        if !is_positive(weight_kg) {
            return Err(ImcError::invalid_input(WEIGHT_NOT_POSITIVE));
        }
        if !is_positive(height_m) {
            return Err(ImcError::invalid_input(HEIGHT_NOT_POSITIVE));
        }
        if height_m > MAX_HEIGHT_M {
            return Err(ImcError::invalid_input(HEIGHT_TOO_LARGE));
        }
        if weight_kg > MAX_WEIGHT_KG {
            return Err(ImcError::invalid_input(WEIGHT_TOO_LARGE));
        }
        if !index_is_finite(height_m) {
            return Err(ImcError::invalid_input(HEIGHT_TOO_SMALL));
        }
        Ok(Self {
            weight_kg,
            height_m,
        })
    }

    /// Check a weight on its own (positive, at most 500 kg).
    pub fn validate_weight(weight_kg: f64) -> Result<f64, ImcError> {
        if !is_positive(weight_kg) {
            return Err(ImcError::invalid_input(WEIGHT_NOT_POSITIVE));
        }
        if weight_kg > MAX_WEIGHT_KG {
            return Err(ImcError::invalid_input(WEIGHT_TOO_LARGE));
        }
        Ok(weight_kg)
    }

    /// Check a height on its own (positive, at most 3 m, and not so small
    /// that any accepted weight would overflow the index).
    pub fn validate_height(height_m: f64) -> Result<f64, ImcError> {
        if !is_positive(height_m) {
            return Err(ImcError::invalid_input(HEIGHT_NOT_POSITIVE));
        }
        if height_m > MAX_HEIGHT_M {
            return Err(ImcError::invalid_input(HEIGHT_TOO_LARGE));
        }
        if !index_is_finite(height_m) {
            return Err(ImcError::invalid_input(HEIGHT_TOO_SMALL));
        }
        Ok(height_m)
    }

    /// Weight in kilograms
    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Height in metres
    pub fn height_m(&self) -> f64 {
        self.height_m
    }

    /// Index value rounded to two decimal places
    pub fn index(&self) -> f64 {
        round_to_cents(self.weight_kg / self.height_m.powi(2))
    }
}

#[inline]
fn is_positive(value: f64) -> bool {
    value > 0.0
}

/// Whether the heaviest accepted weight still gives a finite index,
/// rounding included, at this height.
#[inline]
fn index_is_finite(height_m: f64) -> bool {
    (MAX_WEIGHT_KG / height_m.powi(2) * 100.0).is_finite()
}

/// Round half away from zero to two decimal places.
#[inline]
fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compute the index value for a weight (kg) and height (m).
///
/// # Examples
/// ```
/// use imc_core::compute_index;
///
/// assert_eq!(compute_index(70.0, 1.75).unwrap(), 22.86);
/// assert!(compute_index(0.0, 1.75).is_err());
/// ```
pub fn compute_index(weight_kg: f64, height_m: f64) -> Result<f64, ImcError> {
    Measurement::new(weight_kg, height_m).map(|m| m.index())
}

/// Everything a front end shows for one measurement.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    /// The validated input
    pub measurement: Measurement,
    /// Index value, two decimal places
    pub index: f64,
    /// Band containing the index
    pub band: Band,
    /// Recommendation for the band
    pub recommendation: &'static str,
}

/// Immutable calculator holding the band table.
///
/// Build one at startup and pass it by reference (or `Arc`) to whatever
/// needs it; every method takes `&self`.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    bands: BandTable,
}

impl Calculator {
    /// Calculator using the standard six-band table
    pub fn new() -> Self {
        Self {
            bands: BandTable::standard(),
        }
    }

    /// See [`compute_index`].
    pub fn compute_index(&self, weight_kg: f64, height_m: f64) -> Result<f64, ImcError> {
        compute_index(weight_kg, height_m)
    }

    /// Band whose `[lower, upper)` interval contains `index`.
    ///
    /// Returns [`Band::Unclassified`] when nothing matches (negative or NaN
    /// values). A validated measurement always has a finite, positive index
    /// and cannot reach it.
    pub fn classify(&self, index: f64) -> Band {
        self.bands.lookup(index)
    }

    /// Recommendation for `index`, taken from its band.
    pub fn recommend(&self, index: f64) -> &'static str {
        self.classify(index).recommendation()
    }

    /// Validate, compute, classify and recommend in one step.
    pub fn assess(&self, weight_kg: f64, height_m: f64) -> Result<Assessment, ImcError> {
        Measurement::new(weight_kg, height_m).map(|m| self.assess_measurement(m))
    }

    /// Classify and recommend for an already validated measurement.
    pub fn assess_measurement(&self, measurement: Measurement) -> Assessment {
        let index = measurement.index();
        let band = self.classify(index);

        Assessment {
            measurement,
            index,
            band,
            recommendation: band.recommendation(),
        }
    }

    /// The band intervals in ascending order, for reference printouts
    pub fn reference_table(&self) -> &[BandRange] {
        self.bands.ranges()
    }
}
