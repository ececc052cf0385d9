//! Classification bands over the index value.
//!
//! Six half-open ranges partition `[0, +inf)`:
//!
//! | Range          | Band                 | Severity |
//! |----------------|----------------------|----------|
//! | `[0, 18.5)`    | `Underweight`        | caution  |
//! | `[18.5, 25)`   | `Normal`             | normal   |
//! | `[25, 30)`     | `Overweight`         | caution  |
//! | `[30, 35)`     | `ObesityClass1`      | alert    |
//! | `[35, 40)`     | `ObesityClass2`      | alert    |
//! | `[40, +inf)`   | `ObesityClass3`      | alert    |
//!
//! The recommendation is a property of the band, so the thresholds live in
//! exactly one table.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse visual category attached to a band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Healthy range
    Normal,
    /// Worth attention
    Caution,
    /// Needs medical follow-up
    Alert,
    /// Only used by [`Band::Unclassified`]
    Unknown,
}

impl Severity {
    /// Lowercase tag as sent over the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Normal => "normal",
            Severity::Caution => "caution",
            Severity::Alert => "alert",
            Severity::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the six classification bands.
///
/// `Unclassified` is a fallback for index values outside every range (negative
/// or NaN). Validated measurements never produce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Band {
    /// `[0, 18.5)`
    Underweight,
    /// `[18.5, 25)`
    Normal,
    /// `[25, 30)`
    Overweight,
    /// `[30, 35)`
    ObesityClass1,
    /// `[35, 40)`
    ObesityClass2,
    /// `[40, +inf)`
    ObesityClass3,
    /// No band matched
    Unclassified,
}

impl Band {
    /// The six real bands in ascending order
    pub const ALL: [Band; 6] = [
        Band::Underweight,
        Band::Normal,
        Band::Overweight,
        Band::ObesityClass1,
        Band::ObesityClass2,
        Band::ObesityClass3,
    ];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Band::Underweight => "Abaixo do peso",
            Band::Normal => "Peso normal",
            Band::Overweight => "Sobrepeso",
            Band::ObesityClass1 => "Obesidade grau I",
            Band::ObesityClass2 => "Obesidade grau II",
            Band::ObesityClass3 => "Obesidade grau III",
            Band::Unclassified => "Classificação não encontrada",
        }
    }

    /// Severity tag
    pub fn severity(&self) -> Severity {
        match self {
            Band::Normal => Severity::Normal,
            Band::Underweight | Band::Overweight => Severity::Caution,
            Band::ObesityClass1 | Band::ObesityClass2 | Band::ObesityClass3 => Severity::Alert,
            Band::Unclassified => Severity::Unknown,
        }
    }

    /// Icon glyph shown next to the label
    pub fn icon(&self) -> &'static str {
        match self.severity() {
            Severity::Normal => "✅",
            Severity::Caution => "⚠️",
            Severity::Alert => "🔴",
            Severity::Unknown => "❓",
        }
    }

    /// Recommendation text.
    ///
    /// The three obesity bands share one recommendation. Below-range values
    /// get the underweight advice.
    pub fn recommendation(&self) -> &'static str {
        match self {
            Band::Underweight | Band::Unclassified => {
                "Consulte um nutricionista para ganho de peso saudável"
            }
            Band::Normal => "Parabéns! Mantenha seus hábitos saudáveis",
            Band::Overweight => "Considere uma dieta balanceada e exercícios regulares",
            Band::ObesityClass1 | Band::ObesityClass2 | Band::ObesityClass3 => {
                "Recomendamos consulta médica para acompanhamento"
            }
        }
    }

    /// Half-open `[lower, upper)` interval covered by this band
    pub fn range(&self) -> Option<(f64, f64)> {
        match self {
            Band::Underweight => Some((0.0, 18.5)),
            Band::Normal => Some((18.5, 25.0)),
            Band::Overweight => Some((25.0, 30.0)),
            Band::ObesityClass1 => Some((30.0, 35.0)),
            Band::ObesityClass2 => Some((35.0, 40.0)),
            Band::ObesityClass3 => Some((40.0, f64::INFINITY)),
            Band::Unclassified => None,
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A `[lower, upper)` interval mapped to a band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandRange {
    /// Inclusive lower bound
    pub lower: f64,
    /// Exclusive upper bound (`f64::INFINITY` for the last band, which is
    /// open-ended and so also holds `+inf`)
    pub upper: f64,
    /// Band selected by this interval
    pub band: Band,
}

impl BandRange {
    /// Whether `index` falls inside this interval
    #[inline]
    pub fn contains(&self, index: f64) -> bool {
        self.lower <= index && (index < self.upper || self.upper == f64::INFINITY)
    }

    /// Human-readable interval, e.g. `18.5 ≤ IMC < 25`
    pub fn describe(&self) -> String {
        if self.lower <= 0.0 {
            format!("IMC < {}", self.upper)
        } else if self.upper.is_infinite() {
            format!("IMC ≥ {}", self.lower)
        } else {
            format!("{} ≤ IMC < {}", self.lower, self.upper)
        }
    }
}

/// Ordered list of band intervals, scanned in ascending order.
#[derive(Debug, Clone, PartialEq)]
pub struct BandTable {
    ranges: Vec<BandRange>,
}

impl BandTable {
    /// Build the standard six-band table
    pub fn standard() -> Self {
        let ranges = Band::ALL
            .iter()
            .filter_map(|band| {
                band.range().map(|(lower, upper)| BandRange {
                    lower,
                    upper,
                    band: *band,
                })
            })
            .collect();
        Self { ranges }
    }

    /// Select the band whose interval contains `index`
    pub fn lookup(&self, index: f64) -> Band {
        self.ranges
            .iter()
            .find(|range| range.contains(index))
            .map(|range| range.band)
            .unwrap_or(Band::Unclassified)
    }

    /// All intervals in ascending order
    pub fn ranges(&self) -> &[BandRange] {
        &self.ranges
    }
}

impl Default for BandTable {
    fn default() -> Self {
        Self::standard()
    }
}
