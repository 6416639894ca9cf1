//! Particle Swarm
//!
//! Global best particle swarm optimization. Every particle is pulled toward
//! its own best position (cognitive term) and toward the best position found
//! by the swarm (social term), while keeping a share of its previous velocity
//! (inertia). Positions are clamped back into the bounds after each move.
use crate::bounds::Bounds;
use crate::constants::{COGNITIVE, INERTIA, SOCIAL};
use crate::metric::is_comparison_better;
use crate::objective::BatchObjective;
use crate::optimizer::{GlobalOptimizer, OptimizationResult, SearchControl, TerminationReason};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::time::Instant;

fn default_inertia() -> f64 {
    INERTIA
}
fn default_cognitive() -> f64 {
    COGNITIVE
}
fn default_social() -> f64 {
    SOCIAL
}

/// Particle swarm hyperparameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleSwarm {
    /// Share of the previous velocity that is kept, `w`.
    #[serde(default = "default_inertia")]
    pub inertia: f64,
    /// Attraction toward the particle's own best, `c1`.
    #[serde(default = "default_cognitive")]
    pub cognitive: f64,
    /// Attraction toward the swarm's best, `c2`.
    #[serde(default = "default_social")]
    pub social: f64,
}

impl Default for ParticleSwarm {
    fn default() -> Self {
        ParticleSwarm {
            inertia: INERTIA,
            cognitive: COGNITIVE,
            social: SOCIAL,
        }
    }
}

impl ParticleSwarm {
    pub fn new(inertia: f64, cognitive: f64, social: f64) -> Self {
        ParticleSwarm {
            inertia,
            cognitive,
            social,
        }
    }
}

/// Internal state of a running swarm, owned by a single `minimize` call.
struct Swarm {
    position: Vec<Vec<f64>>,
    velocity: Vec<Vec<f64>>,
    personal_best: Vec<Vec<f64>>,
    personal_best_cost: Vec<f64>,
    best_position: Vec<f64>,
    best_cost: f64,
}

impl Swarm {
    /// Positions uniform inside the bounds, velocities uniform in `[0, 1)`.
    fn new(rng: &mut StdRng, bounds: &Bounds, n_particles: usize) -> Self {
        let position: Vec<Vec<f64>> = (0..n_particles)
            .map(|_| {
                bounds
                    .min
                    .iter()
                    .zip(&bounds.max)
                    .map(|(lo, hi)| lo + rng.random::<f64>() * (hi - lo))
                    .collect()
            })
            .collect();
        let velocity: Vec<Vec<f64>> = (0..n_particles)
            .map(|_| (0..bounds.dimensions()).map(|_| rng.random::<f64>()).collect())
            .collect();
        Swarm {
            personal_best: position.clone(),
            personal_best_cost: vec![f64::INFINITY; n_particles],
            best_position: position[0].clone(),
            best_cost: f64::INFINITY,
            position,
            velocity,
        }
    }

    /// Record the costs of the current positions, updating personal and global bests.
    fn update_best(&mut self, cost: &[f64]) {
        for (i, c) in cost.iter().enumerate() {
            if is_comparison_better(self.personal_best_cost[i], *c, false) {
                self.personal_best_cost[i] = *c;
                self.personal_best[i].clone_from(&self.position[i]);
            }
            if is_comparison_better(self.best_cost, *c, false) {
                self.best_cost = *c;
                self.best_position.clone_from(&self.position[i]);
            }
        }
    }

    fn step(&mut self, rng: &mut StdRng, params: &ParticleSwarm, bounds: &Bounds) {
        for ((x, v), pbest) in self
            .position
            .iter_mut()
            .zip(self.velocity.iter_mut())
            .zip(&self.personal_best)
        {
            for d in 0..x.len() {
                let r1 = rng.random::<f64>();
                let r2 = rng.random::<f64>();
                v[d] = params.inertia * v[d]
                    + params.cognitive * r1 * (pbest[d] - x[d])
                    + params.social * r2 * (self.best_position[d] - x[d]);
                x[d] += v[d];
            }
            bounds.clamp(x);
        }
    }
}

impl GlobalOptimizer for ParticleSwarm {
    fn minimize(
        &self,
        objective: &dyn BatchObjective,
        bounds: &Bounds,
        population_size: usize,
        iterations: usize,
        control: &SearchControl,
    ) -> OptimizationResult {
        let start = Instant::now();
        let mut rng = StdRng::seed_from_u64(control.seed);
        let mut swarm = Swarm::new(&mut rng, bounds, population_size.max(1));
        let mut cost_history = Vec::with_capacity(iterations);
        let mut termination = TerminationReason::Completed;

        for i in 0..iterations {
            if let Some(reason) = control.should_stop(&start) {
                warn!(
                    "Stopping particle swarm after {} of {} iterations: {:?}.",
                    i, iterations, reason
                );
                termination = reason;
                break;
            }

            let cost = objective.evaluate(&swarm.position);
            swarm.update_best(&cost);
            cost_history.push(swarm.best_cost);

            if control.log_iterations > 0 && (i + 1) % control.log_iterations == 0 {
                info!(
                    "iteration {}, best cost: {}, best position: {:?}",
                    i + 1,
                    swarm.best_cost,
                    swarm.best_position
                );
            }

            swarm.step(&mut rng, self, bounds);
        }

        if control.log_iterations > 0 {
            info!(
                "Finished particle swarm with {0} iterations in {1} seconds.",
                cost_history.len(),
                start.elapsed().as_secs_f32()
            );
        }

        OptimizationResult {
            best_position: swarm.best_position,
            best_cost: swarm.best_cost,
            iterations: cost_history.len(),
            cost_history,
            termination,
        }
    }
}
