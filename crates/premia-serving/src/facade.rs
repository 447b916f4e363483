//! The inference façade: validate, align, predict, band.

use crate::error::ServingResult;
use crate::request::PredictionRequest;
use premia_model::{ModelArtifact, Record};
use serde::Serialize;
use std::sync::Arc;

/// Lower multiplier of the display range.
pub const RANGE_LOWER_FACTOR: f64 = 0.8;

/// Upper multiplier of the display range.
pub const RANGE_UPPER_FACTOR: f64 = 1.2;

/// Point estimate plus the fixed display band.
///
/// The band is a presentation heuristic, not a confidence interval: it is
/// always the point estimate scaled by [`RANGE_LOWER_FACTOR`] and
/// [`RANGE_UPPER_FACTOR`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PredictionResult {
    /// Model point estimate in dollars.
    pub point: f64,

    /// `point * 0.8`.
    pub lower: f64,

    /// `point * 1.2`.
    pub upper: f64,
}

impl PredictionResult {
    /// Derive the display band around a point estimate.
    pub fn from_point(point: f64) -> Self {
        Self {
            point,
            lower: point * RANGE_LOWER_FACTOR,
            upper: point * RANGE_UPPER_FACTOR,
        }
    }
}

/// Stateless prediction façade over an injected artifact handle.
///
/// The artifact is loaded once at startup and shared read-only for the
/// process lifetime; the façade holds no other state and takes no locks.
#[derive(Debug, Clone)]
pub struct Predictor {
    artifact: Arc<ModelArtifact>,
}

impl Predictor {
    /// Create a façade over a loaded artifact.
    pub fn new(artifact: Arc<ModelArtifact>) -> Self {
        Self { artifact }
    }

    /// The artifact backing this façade.
    pub fn artifact(&self) -> &ModelArtifact {
        &self.artifact
    }

    /// Align a natural record to the artifact's schema.
    ///
    /// Exposed separately so callers can inspect what the model actually
    /// consumes (synthetic columns included).
    pub fn align(&self, record: &Record) -> ServingResult<Record> {
        Ok(self.artifact.schema.align(record)?)
    }

    /// Run one prediction: validate the request, align its record to the
    /// schema, invoke the regressor, and derive the display band.
    ///
    /// One call per user action; failures surface immediately with no
    /// retry or fallback value.
    pub fn predict(&self, request: &PredictionRequest) -> ServingResult<PredictionResult> {
        request.validate()?;

        let record = request.to_record();
        let aligned = self.artifact.schema.align(&record)?;
        let point = self.artifact.predict(&aligned)?;

        tracing::debug!(
            point,
            age = request.age,
            smoker = request.smoker.as_str(),
            "Prediction complete"
        );
        Ok(PredictionResult::from_point(point))
    }
}
