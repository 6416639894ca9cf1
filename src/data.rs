//! Data
//!
//! The paired series of observed and predicted values a granule is fitted on.
use crate::errors::GranuleError;
use crate::metric::mean_absolute_error;

/// Index-aligned true and predicted values.
///
/// Both slices are borrowed for the duration of a fit and never mutated,
/// so a `SampleSeries` can be shared freely across rayon workers.
#[derive(Debug, Clone, Copy)]
pub struct SampleSeries<'a> {
    pub y_true: &'a [f64],
    pub y_pred: &'a [f64],
}

impl<'a> SampleSeries<'a> {
    /// Validate and wrap a pair of series.
    /// * `y_true` - Observed values.
    /// * `y_pred` - Predictions, `y_pred[i]` corresponds to `y_true[i]`.
    pub fn new(y_true: &'a [f64], y_pred: &'a [f64]) -> Result<Self, GranuleError> {
        if y_true.len() != y_pred.len() {
            return Err(GranuleError::LengthMismatch(y_true.len(), y_pred.len()));
        }
        if y_true.is_empty() {
            return Err(GranuleError::EmptySeries);
        }
        if let Some(i) = y_true.iter().position(|v| !v.is_finite()) {
            return Err(GranuleError::NonFiniteValue("y_true".to_string(), i));
        }
        if let Some(i) = y_pred.iter().position(|v| !v.is_finite()) {
            return Err(GranuleError::NonFiniteValue("y_pred".to_string(), i));
        }
        Ok(SampleSeries { y_true, y_pred })
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.y_true.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y_true.is_empty()
    }

    /// Iterate over `(y_true, y_pred)` pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.y_true.iter().copied().zip(self.y_pred.iter().copied())
    }

    /// Mean absolute error between the two series.
    pub fn mae(&self) -> f64 {
        mean_absolute_error(self.y_true, self.y_pred)
    }
}
