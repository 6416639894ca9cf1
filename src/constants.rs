pub const DEFAULT_ITERATIONS: usize = 40_000;
pub const POPULATION_SIZE: usize = 10;
pub const BOUND_SCALE: f64 = 100.0;
pub const SPECIFICITY_RATE: f64 = 0.5;
pub const INERTIA: f64 = 0.9;
pub const COGNITIVE: f64 = 0.5;
pub const SOCIAL: f64 = 0.3;
pub const GRANULE_DIMENSIONS: usize = 2;
