//! Granule Fit
//!
//! The fitted granule and helpers to apply it to new predictions.
use crate::bounds::Bounds;
use crate::coverage::{granule_coverage, membership};
use crate::data::SampleSeries;
use crate::errors::GranuleError;
use crate::granule::config::GranuleIO;
use crate::objective::specificity;
use crate::optimizer::TerminationReason;
use serde::{Deserialize, Serialize};

/// Result of fitting a granule to a sample series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GranuleFit {
    /// Left spread.
    pub alpha: f64,
    /// Right spread.
    pub beta: f64,
    /// Objective at `(alpha, beta)`, more negative is better.
    pub cost: f64,
    /// Search space the spreads were drawn from.
    pub bounds: Bounds,
    /// Mean absolute error of the training series.
    pub mae: f64,
    /// Rate used in the specificity term.
    pub specificity_rate: f64,
    /// Number of search iterations completed.
    pub iterations: usize,
    pub termination: TerminationReason,
    /// Global best cost after each iteration.
    #[serde(default)]
    pub cost_history: Vec<f64>,
}

impl GranuleFit {
    /// The `((alpha, beta), cost)` tuple.
    pub fn into_tuple(self) -> ((f64, f64), f64) {
        ((self.alpha, self.beta), self.cost)
    }

    /// Support `[pred - alpha, pred + beta]` of the granule around `pred`.
    pub fn interval(&self, pred: f64) -> (f64, f64) {
        (pred - self.alpha, pred + self.beta)
    }

    /// Support around every prediction.
    pub fn intervals(&self, y_pred: &[f64]) -> Vec<(f64, f64)> {
        y_pred.iter().map(|p| self.interval(*p)).collect()
    }

    /// Membership of `truth` in the granule centered on `pred`.
    pub fn membership(&self, pred: f64, truth: f64) -> f64 {
        membership(pred, truth, self.alpha, self.beta)
    }

    /// Membership of each true value, aligned with the inputs.
    pub fn memberships(&self, y_pred: &[f64], y_true: &[f64]) -> Result<Vec<f64>, GranuleError> {
        let series = SampleSeries::new(y_true, y_pred)?;
        Ok(series
            .pairs()
            .map(|(truth, pred)| membership(pred, truth, self.alpha, self.beta))
            .collect())
    }

    /// Coverage sum of this granule over a series.
    pub fn coverage(&self, y_pred: &[f64], y_true: &[f64]) -> Result<f64, GranuleError> {
        let series = SampleSeries::new(y_true, y_pred)?;
        Ok(granule_coverage(&series, self.alpha, self.beta))
    }

    pub fn specificity(&self) -> f64 {
        specificity(self.alpha, self.beta, self.specificity_rate)
    }
}

impl GranuleIO for GranuleFit {}
