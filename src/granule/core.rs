use crate::bounds::Bounds;
use crate::constants::GRANULE_DIMENSIONS;
use crate::data::SampleSeries;
use crate::errors::GranuleError;
use crate::granule::config::GranuleConfig;
use crate::granule::fit::GranuleFit;
use crate::objective::{BatchObjective, GranuleObjective};
use crate::optimizer::{CancelToken, GlobalOptimizer, SearchControl, TerminationReason};
use log::info;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Granule Optimizer object
///
/// Fits a single asymmetric triangular granule `(alpha, beta)` around a series of
/// predictions, trading specificity (narrow granules) against coverage of the
/// observed values.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct GranuleOptimizer {
    pub cfg: GranuleConfig,
    #[serde(skip)]
    pub cancel: Option<CancelToken>,
}

impl GranuleOptimizer {
    /// Granule Optimizer object
    ///
    /// * `cfg` - Search configuration, see [`GranuleConfig`].
    pub fn new(cfg: GranuleConfig) -> Result<Self, GranuleError> {
        cfg.validate()?;
        Ok(GranuleOptimizer { cfg, cancel: None })
    }

    /// Fit the granule.
    ///
    /// * `y_pred` - Predictions.
    /// * `y_true` - True values, index-aligned with `y_pred`.
    ///
    /// Both series are searched over `[0, bound_scale * MAE]` per spread. If the
    /// predictions are exact (`MAE = 0`) the granule is `(0, 0)` with cost `0`
    /// and no search is run.
    pub fn optimize(&self, y_pred: &[f64], y_true: &[f64]) -> Result<GranuleFit, GranuleError> {
        self.cfg.validate()?;
        let series = SampleSeries::new(y_true, y_pred)?;
        let mae = series.mae();
        if !(mae * self.cfg.bound_scale).is_finite() {
            return Err(GranuleError::NonFiniteError(mae, self.cfg.bound_scale));
        }
        let bounds = Bounds::from_mae(mae, self.cfg.bound_scale)?;

        if bounds.is_degenerate() {
            info!("Mean absolute error is 0, returning a zero width granule.");
            return Ok(GranuleFit {
                alpha: 0.0,
                beta: 0.0,
                cost: 0.0,
                bounds,
                mae,
                specificity_rate: self.cfg.specificity_rate,
                iterations: 0,
                termination: TerminationReason::Completed,
                cost_history: Vec::new(),
            });
        }

        let start = Instant::now();
        let num_threads = self.cfg.num_threads.unwrap_or(0);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()
            .map_err(|e| GranuleError::ThreadPool(e.to_string()))?;

        let objective = GranuleObjective::new(series, self.cfg.specificity_rate, self.cfg.parallel);
        let control = SearchControl {
            seed: self.cfg.seed,
            log_iterations: self.cfg.log_iterations,
            timeout: self.cfg.timeout,
            cancel: self.cancel.clone(),
        };

        let res = pool.install(|| {
            self.cfg.optimizer.minimize(
                &objective,
                &bounds,
                self.cfg.population_size,
                self.cfg.iterations,
                &control,
            )
        });

        let mut position = res.best_position;
        if position.len() != GRANULE_DIMENSIONS || position.iter().any(|v| !v.is_finite()) {
            return Err(GranuleError::InvalidParameter(
                "best_position".to_string(),
                format!("{} finite values", GRANULE_DIMENSIONS),
                format!("{:?}", position),
            ));
        }
        let mut cost = res.best_cost;
        if !bounds.contains(&position) {
            bounds.clamp(&mut position);
            cost = f64::NAN;
        }
        // Nothing was evaluated, or the point was moved back into the bounds.
        if !cost.is_finite() {
            cost = objective.evaluate(std::slice::from_ref(&position))[0];
        }

        let (alpha, beta) = (position[0], position[1]);
        if self.cfg.log_iterations > 0 {
            info!(
                "Finished fitting granule alpha: {}, beta: {}, cost: {} in {} seconds.",
                alpha,
                beta,
                cost,
                start.elapsed().as_secs_f32()
            );
        }

        Ok(GranuleFit {
            alpha,
            beta,
            cost,
            bounds,
            mae,
            specificity_rate: self.cfg.specificity_rate,
            iterations: res.iterations,
            termination: res.termination,
            cost_history: res.cost_history,
        })
    }
}

/// Fit a granule with the default configuration and `iterations` search steps,
/// returning `((alpha, beta), cost)`.
///
/// * `y_pred` - Predictions.
/// * `y_true` - True values.
/// * `iterations` - Search budget, 40000 when `None`.
pub fn optimize(y_pred: &[f64], y_true: &[f64], iterations: Option<usize>) -> Result<((f64, f64), f64), GranuleError> {
    let mut optimizer = GranuleOptimizer::default();
    if let Some(iterations) = iterations {
        optimizer = optimizer.set_iterations(iterations);
    }
    Ok(optimizer.optimize(y_pred, y_true)?.into_tuple())
}
