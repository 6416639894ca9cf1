// Modules
pub mod bounds;
pub mod constants;
pub mod coverage;
pub mod data;
pub mod errors;
pub mod granule;
pub mod metric;
pub mod objective;
pub mod optimizer;

// Individual classes, and functions
pub use bounds::Bounds;
pub use data::SampleSeries;
pub use errors::GranuleError;
pub use granule::config::{GranuleConfig, GranuleIO};
pub use granule::core::{optimize, GranuleOptimizer};
pub use granule::fit::GranuleFit;
pub use optimizer::{CancelToken, GlobalOptimizer, Optimizer, ParticleSwarm};
