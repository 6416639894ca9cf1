//! Bounds
//!
//! Per-dimension box constraints for the search space.
use crate::constants::GRANULE_DIMENSIONS;
use crate::errors::GranuleError;
use serde::{Deserialize, Serialize};

/// Box constraints, `min[d] <= x[d] <= max[d]` for every dimension `d`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Vec<f64>,
    pub max: Vec<f64>,
}

impl Bounds {
    pub fn new(min: Vec<f64>, max: Vec<f64>) -> Result<Self, GranuleError> {
        if min.len() != max.len() || min.is_empty() {
            return Err(GranuleError::InvalidParameter(
                "bounds".to_string(),
                "non-empty min and max of equal length".to_string(),
                format!("{} and {}", min.len(), max.len()),
            ));
        }
        let valid = |d: usize| min[d].is_finite() && max[d].is_finite() && min[d] <= max[d];
        if let Some(d) = (0..min.len()).find(|d| !valid(*d)) {
            return Err(GranuleError::InvalidParameter(
                "bounds".to_string(),
                "finite min <= max".to_string(),
                format!("[{}, {}] in dimension {}", min[d], max[d], d),
            ));
        }
        Ok(Bounds { min, max })
    }

    /// Search space of a granule: `[0, scale * mae]` for both `alpha` and `beta`.
    pub fn from_mae(mae: f64, scale: f64) -> Result<Self, GranuleError> {
        let upper = mae * scale;
        Bounds::new(vec![0.0; GRANULE_DIMENSIONS], vec![upper; GRANULE_DIMENSIONS])
    }

    pub fn dimensions(&self) -> usize {
        self.min.len()
    }

    /// True when every dimension collapsed to a single point.
    pub fn is_degenerate(&self) -> bool {
        self.min.iter().zip(&self.max).all(|(lo, hi)| lo == hi)
    }

    pub fn contains(&self, x: &[f64]) -> bool {
        x.len() == self.dimensions()
            && x.iter()
                .zip(self.min.iter().zip(&self.max))
                .all(|(v, (lo, hi))| v >= lo && v <= hi)
    }

    /// Clamp a point back into the box, in place.
    pub fn clamp(&self, x: &mut [f64]) {
        x.iter_mut()
            .zip(self.min.iter().zip(&self.max))
            .for_each(|(v, (lo, hi))| *v = v.clamp(*lo, *hi));
    }
}
