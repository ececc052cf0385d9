//! HTTP service for the IMC calculator
//!
//! Serves a static page at `/` and computes the body-mass index at
//! `POST /calculate`, returning the index, its classification and a
//! recommendation as JSON.

pub mod config;
pub mod error;
pub mod routes;
pub mod server;

pub use imc_core;

/// Server version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
