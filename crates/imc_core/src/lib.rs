//! # imc_core: Body-Mass Index Calculation
//!
//! Pure computation shared by the interactive shell and the HTTP service:
//! - Input validation for weight and height (`calculator::Measurement`)
//! - Index computation rounded to two decimal places (`calculator`)
//! - Classification into six fixed bands (`band`)
//! - Recommendations derived from the band (`band::Band::recommendation`)
//! - Decimal parsing that accepts `,` or `.` (`input`)
//!
//! Nothing here performs I/O or holds mutable state. A [`Calculator`] is built
//! once at startup and handed to whatever front end needs it.
//!
//! ## Usage Examples
//!
//! ```rust
//! use imc_core::{Band, Calculator};
//!
//! let calculator = Calculator::new();
//! let index = calculator.compute_index(70.0, 1.75).unwrap();
//! assert_eq!(index, 22.86);
//! assert_eq!(calculator.classify(index), Band::Normal);
//! assert_eq!(
//!     calculator.recommend(index),
//!     "Parabéns! Mantenha seus hábitos saudáveis"
//! );
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod band;
pub mod calculator;
pub mod error;
pub mod input;

pub use band::{Band, BandRange, BandTable, Severity};
pub use calculator::{compute_index, Assessment, Calculator, Measurement};
pub use error::ImcError;
pub use input::{parse_decimal, Field};
