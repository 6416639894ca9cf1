use crate::granule::core::GranuleOptimizer;
use crate::optimizer::{CancelToken, Optimizer};

impl GranuleOptimizer {
    // Set methods for paramters

    /// Set the search algorithm.
    /// * `optimizer` - Any global optimizer, the particle swarm by default.
    pub fn set_optimizer(mut self, optimizer: Optimizer) -> Self {
        self.cfg.optimizer = optimizer;
        self
    }

    /// Set the number of search iterations.
    /// * `iterations` - Positive number of iterations, every one evaluates the full population.
    pub fn set_iterations(mut self, iterations: usize) -> Self {
        self.cfg.iterations = iterations;
        self
    }

    /// Set the population size.
    /// * `population_size` - Number of candidate granules per iteration.
    pub fn set_population_size(mut self, population_size: usize) -> Self {
        self.cfg.population_size = population_size;
        self
    }

    /// Set the bound scale.
    /// * `bound_scale` - Both spreads are searched in `[0, bound_scale * MAE]`.
    pub fn set_bound_scale(mut self, bound_scale: f64) -> Self {
        self.cfg.bound_scale = bound_scale;
        self
    }

    /// Set the specificity rate.
    /// * `specificity_rate` - Larger values favor narrower granules over coverage.
    pub fn set_specificity_rate(mut self, specificity_rate: f64) -> Self {
        self.cfg.specificity_rate = specificity_rate;
        self
    }

    /// Set the number of threads.
    /// * `num_threads` - Set the number of threads to be used during the search.
    pub fn set_num_threads(mut self, num_threads: Option<usize>) -> Self {
        self.cfg.num_threads = num_threads;
        self
    }

    /// Set whether candidates are scored in parallel.
    pub fn set_parallel(mut self, parallel: bool) -> Self {
        self.cfg.parallel = parallel;
        self
    }

    /// Set the seed.
    /// * `seed` - Integer value used to seed any randomness used in the search.
    pub fn set_seed(mut self, seed: u64) -> Self {
        self.cfg.seed = seed;
        self
    }

    /// Set log iterations.
    /// * `log_iterations` - Log the best granule every N iterations, 0 disables logging.
    pub fn set_log_iterations(mut self, log_iterations: usize) -> Self {
        self.cfg.log_iterations = log_iterations;
        self
    }

    /// Set the timeout.
    /// * `timeout` - Stop the search after this many seconds, keeping the best granule found.
    pub fn set_timeout(mut self, timeout: Option<f32>) -> Self {
        self.cfg.timeout = timeout;
        self
    }

    /// Set the cancel token.
    /// * `cancel` - Token checked once per iteration, cancelling keeps the best granule found.
    pub fn set_cancel_token(mut self, cancel: Option<CancelToken>) -> Self {
        self.cancel = cancel;
        self
    }
}
