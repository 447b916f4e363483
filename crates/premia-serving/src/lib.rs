//! Serving layer for the premia insurance charges predictor.
//!
//! This crate turns a loaded model artifact into an interactive local app:
//! a typed request surface with domain validation, the inference façade
//! that aligns records and derives the display band, currency formatting,
//! and a single-page web form.
//!
//! # Overview
//!
//! - **PredictionRequest**: the six typed inputs with declared domains
//! - **Predictor**: dependency-injected façade over a [`ModelArtifact`]
//! - **PredictionResult**: point estimate plus the fixed ±20% display band
//! - **web**: axum router serving the form page and the JSON API
//! - **display**: currency and summary formatting
//!
//! # Architecture
//!
//! ```text
//! ┌──────────┐   POST /api/predict   ┌───────────┐   align + predict   ┌───────────────┐
//! │ Form page│ ────────────────────▶ │ Predictor │ ──────────────────▶ │ ModelArtifact │
//! └──────────┘ ◀──────────────────── └───────────┘ ◀────────────────── └───────────────┘
//!                 formatted result        band
//! ```
//!
//! # Quick Start
//!
//! ```
//! use premia_model::demo;
//! use premia_serving::{PredictionRequest, Predictor};
//! use std::sync::Arc;
//!
//! # fn main() -> premia_serving::ServingResult<()> {
//! let predictor = Predictor::new(Arc::new(demo::insurance_demo()));
//! let result = predictor.predict(&PredictionRequest::default())?;
//! assert!(result.lower <= result.point && result.point <= result.upper);
//! # Ok(())
//! # }
//! ```
//!
//! [`ModelArtifact`]: premia_model::ModelArtifact

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod display;
pub mod error;
pub mod facade;
pub mod request;
pub mod web;

// Re-export main types at crate root for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use error::{ServingError, ServingResult};
pub use facade::{
    PredictionResult, Predictor, RANGE_LOWER_FACTOR, RANGE_UPPER_FACTOR,
};
pub use request::{
    PredictionRequest, Region, RequestError, Sex, SmokerStatus, AGE_RANGE, BMI_RANGE,
    CHILDREN_RANGE,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert_eq!(NAME, "premia-serving");
    }

    #[test]
    fn test_re_exports() {
        let _ = AppConfig::default();
        let _ = PredictionRequest::default();
        assert_eq!(AGE_RANGE, (18, 100));
        assert_eq!(RANGE_LOWER_FACTOR, 0.8);
        assert_eq!(RANGE_UPPER_FACTOR, 1.2);
    }
}
