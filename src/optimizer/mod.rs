//! Optimizer
//!
//! Population based global optimizers used to search for the best granule.
//! The granule fitting code only depends on the [`GlobalOptimizer`] trait, any
//! strategy implementing it can be plugged in through [`Optimizer::Custom`].
mod swarm;

pub use swarm::ParticleSwarm;

use crate::bounds::Bounds;
use crate::objective::BatchObjective;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Why a search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerminationReason {
    /// The full iteration budget was used.
    Completed,
    /// A [`CancelToken`] was triggered.
    Cancelled,
    /// The timeout elapsed.
    Timeout,
}

/// Shared flag used to stop a running search from another thread.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        CancelToken::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Run controls shared by every optimizer.
#[derive(Debug, Clone)]
pub struct SearchControl {
    /// Seed for random number generation.
    pub seed: u64,
    /// Log the global best every N iterations, 0 disables logging.
    pub log_iterations: usize,
    /// Hard limit for search time (seconds).
    pub timeout: Option<f32>,
    /// Checked once per iteration.
    pub cancel: Option<CancelToken>,
}

impl Default for SearchControl {
    fn default() -> Self {
        SearchControl {
            seed: 0,
            log_iterations: 0,
            timeout: None,
            cancel: None,
        }
    }
}

impl SearchControl {
    /// Returns the reason to stop before starting the next iteration, if any.
    pub fn should_stop(&self, start: &Instant) -> Option<TerminationReason> {
        if self.cancel.as_ref().is_some_and(|c| c.is_cancelled()) {
            return Some(TerminationReason::Cancelled);
        }
        if let Some(t) = self.timeout {
            if start.elapsed().as_secs_f32() > t {
                return Some(TerminationReason::Timeout);
            }
        }
        None
    }
}

/// Outcome of a minimization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub best_position: Vec<f64>,
    pub best_cost: f64,
    /// Global best cost after each completed iteration.
    pub cost_history: Vec<f64>,
    /// Number of iterations completed.
    pub iterations: usize,
    pub termination: TerminationReason,
}

/// A population based global optimizer.
pub trait GlobalOptimizer: Send + Sync {
    /// Minimize `objective` inside `bounds`.
    /// * `objective` - Evaluated once per iteration on the whole population.
    /// * `bounds` - Box constraints, every evaluated position lies inside them.
    /// * `population_size` - Number of candidates per iteration.
    /// * `iterations` - Iteration budget.
    /// * `control` - Seed, logging, timeout and cancellation.
    fn minimize(
        &self,
        objective: &dyn BatchObjective,
        bounds: &Bounds,
        population_size: usize,
        iterations: usize,
        control: &SearchControl,
    ) -> OptimizationResult;
}

/// Optimizer used to fit granules.
#[derive(Serialize, Deserialize, Clone)]
pub enum Optimizer {
    ParticleSwarm(ParticleSwarm),
    #[serde(skip)]
    Custom(Arc<dyn GlobalOptimizer>),
}

impl Default for Optimizer {
    fn default() -> Self {
        Optimizer::ParticleSwarm(ParticleSwarm::default())
    }
}

impl Optimizer {
    pub fn new_custom<T>(optimizer: T) -> Self
    where
        T: GlobalOptimizer + 'static,
    {
        Optimizer::Custom(Arc::new(optimizer))
    }
}

impl GlobalOptimizer for Optimizer {
    fn minimize(
        &self,
        objective: &dyn BatchObjective,
        bounds: &Bounds,
        population_size: usize,
        iterations: usize,
        control: &SearchControl,
    ) -> OptimizationResult {
        match self {
            Optimizer::ParticleSwarm(pso) => pso.minimize(objective, bounds, population_size, iterations, control),
            Optimizer::Custom(arc) => arc.minimize(objective, bounds, population_size, iterations, control),
        }
    }
}
