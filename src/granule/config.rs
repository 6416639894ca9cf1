//! Granule Configuration
//!
//! Defines the configuration used by the [`GranuleOptimizer`](crate::GranuleOptimizer)
//! and the JSON persistence shared by configurations and fitted granules.
use crate::constants::{BOUND_SCALE, DEFAULT_ITERATIONS, POPULATION_SIZE, SPECIFICITY_RATE};
use crate::errors::GranuleError;
use crate::optimizer::Optimizer;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_iterations() -> usize {
    DEFAULT_ITERATIONS
}
fn default_population_size() -> usize {
    POPULATION_SIZE
}
fn default_bound_scale() -> f64 {
    BOUND_SCALE
}
fn default_specificity_rate() -> f64 {
    SPECIFICITY_RATE
}
fn default_parallel() -> bool {
    true
}
fn default_timeout() -> Option<f32> {
    None
}
fn default_log_iterations() -> usize {
    0
}

/// Configuration for the `GranuleOptimizer`.
#[derive(Clone, Serialize, Deserialize)]
pub struct GranuleConfig {
    /// Search algorithm.
    #[serde(default)]
    pub optimizer: Optimizer,
    /// Number of search iterations.
    #[serde(default = "default_iterations")]
    pub iterations: usize,
    /// Number of candidate granules evaluated per iteration.
    #[serde(default = "default_population_size")]
    pub population_size: usize,
    /// Upper bound of both spreads, as a multiple of the mean absolute error.
    #[serde(default = "default_bound_scale")]
    pub bound_scale: f64,
    /// Decay rate of the specificity term `exp(-rate * (alpha + beta))`.
    #[serde(default = "default_specificity_rate")]
    pub specificity_rate: f64,
    /// Number of threads for parallel tasks.
    #[serde(default)]
    pub num_threads: Option<usize>,
    /// Whether candidates are scored in parallel.
    #[serde(default = "default_parallel")]
    pub parallel: bool,
    /// Seed for random number generation.
    #[serde(default)]
    pub seed: u64,
    /// Logging frequency (every N iterations).
    #[serde(default = "default_log_iterations")]
    pub log_iterations: usize,
    /// Hard limit for search time (seconds).
    #[serde(default = "default_timeout")]
    pub timeout: Option<f32>,
}

impl Default for GranuleConfig {
    fn default() -> Self {
        GranuleConfig {
            optimizer: Optimizer::default(),
            iterations: DEFAULT_ITERATIONS,
            population_size: POPULATION_SIZE,
            bound_scale: BOUND_SCALE,
            specificity_rate: SPECIFICITY_RATE,
            num_threads: None,
            parallel: true,
            seed: 0,
            log_iterations: 0,
            timeout: None,
        }
    }
}

impl GranuleConfig {
    /// Check parameter values before a fit starts.
    pub fn validate(&self) -> Result<(), GranuleError> {
        if self.iterations == 0 {
            return Err(GranuleError::InvalidParameter(
                "iterations".to_string(),
                "a positive integer".to_string(),
                self.iterations.to_string(),
            ));
        }
        if self.population_size == 0 {
            return Err(GranuleError::InvalidParameter(
                "population_size".to_string(),
                "a positive integer".to_string(),
                self.population_size.to_string(),
            ));
        }
        if !(self.bound_scale.is_finite() && self.bound_scale > 0.0) {
            return Err(GranuleError::InvalidParameter(
                "bound_scale".to_string(),
                "a finite positive number".to_string(),
                self.bound_scale.to_string(),
            ));
        }
        if !(self.specificity_rate.is_finite() && self.specificity_rate >= 0.0) {
            return Err(GranuleError::InvalidParameter(
                "specificity_rate".to_string(),
                "a finite non-negative number".to_string(),
                self.specificity_rate.to_string(),
            ));
        }
        if let Some(t) = self.timeout {
            if t.is_nan() || t <= 0.0 {
                return Err(GranuleError::InvalidParameter(
                    "timeout".to_string(),
                    "a positive number of seconds".to_string(),
                    t.to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// IO
pub trait GranuleIO: Serialize + DeserializeOwned + Sized {
    /// Save as a json object to a file.
    ///
    /// * `path` - Path to save to.
    fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), GranuleError> {
        fs::write(path, self.json_dump()?).map_err(|e| GranuleError::UnableToWrite(e.to_string()))
    }

    /// Dump as a json object
    fn json_dump(&self) -> Result<String, GranuleError> {
        serde_json::to_string(self).map_err(|e| GranuleError::UnableToWrite(e.to_string()))
    }

    /// Load from Json string
    ///
    /// * `json_str` - String object, which can be serialized to json.
    fn from_json(json_str: &str) -> Result<Self, GranuleError> {
        serde_json::from_str::<Self>(json_str).map_err(|e| GranuleError::UnableToRead(e.to_string()))
    }

    /// Load from a path to a json object.
    ///
    /// * `path` - Path to load from.
    fn load<P: AsRef<Path>>(path: P) -> Result<Self, GranuleError> {
        let json_str = fs::read_to_string(path).map_err(|e| GranuleError::UnableToRead(e.to_string()))?;
        Self::from_json(&json_str)
    }
}

impl GranuleIO for GranuleConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_granule_config_default() {
        let config = GranuleConfig::default();
        assert_eq!(config.iterations, 40_000);
        assert_eq!(config.population_size, 10);
        assert_eq!(config.bound_scale, 100.0);
        assert_eq!(config.specificity_rate, 0.5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_granule_config_validate() {
        let mut config = GranuleConfig::default();
        config.iterations = 0;
        assert!(matches!(config.validate(), Err(GranuleError::InvalidParameter(ref p, _, _)) if p == "iterations"));

        let mut config = GranuleConfig::default();
        config.bound_scale = -1.0;
        assert!(config.validate().is_err());

        let mut config = GranuleConfig::default();
        config.timeout = Some(0.0);
        assert!(config.validate().is_err());
        config.timeout = Some(f32::NAN);
        assert!(config.validate().is_err());
        config.timeout = Some(1.5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_granule_config_partial_json() {
        let json = r#"{"iterations": 500, "seed": 3}"#;
        let config = GranuleConfig::from_json(json).unwrap();
        assert_eq!(config.iterations, 500);
        assert_eq!(config.seed, 3);
        assert_eq!(config.population_size, 10);
        assert!(config.parallel);
        assert!(matches!(config.optimizer, Optimizer::ParticleSwarm(_)));

        let json = r#"{"optimizer": {"ParticleSwarm": {"inertia": 0.7}}}"#;
        let config = GranuleConfig::from_json(json).unwrap();
        let Optimizer::ParticleSwarm(pso) = config.optimizer else {
            panic!("expected a particle swarm");
        };
        assert_eq!(pso.inertia, 0.7);
        assert_eq!(pso.social, 0.3);
    }

    #[test]
    fn test_granule_config_io_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("config.json");
        let mut config = GranuleConfig::default();
        config.iterations = 123;
        config.save(&file_path).unwrap();
        let config2 = GranuleConfig::load(&file_path).unwrap();
        assert_eq!(config2.iterations, 123);
        assert!(GranuleConfig::load(dir.path().join("missing.json")).is_err());
    }
}
