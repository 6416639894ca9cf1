//! Errors
//!
//! Custom error types used throughout the `granular` crate.
use thiserror::Error;

/// Errors that can occur while fitting a granule.
#[derive(Debug, Error)]
pub enum GranuleError {
    /// The sample series contains no values.
    #[error("The sample series is empty, at least one value is required.")]
    EmptySeries,
    /// The true and predicted series differ in length.
    #[error("Length of y_true ({0}) does not match length of y_pred ({1}).")]
    LengthMismatch(usize, usize),
    /// NaN or infinite value found in one of the series.
    #[error("Non finite value found in {0} at index {1}.")]
    NonFiniteValue(String, usize),
    /// The scaled mean absolute error overflows, the series are too far apart.
    #[error("Mean absolute error {0} scaled by {1} is not finite.")]
    NonFiniteError(f64, f64),
    /// First value is the name of the parameter, second is expected, third is what was passed.
    #[error("Invalid parameter value passed for {0}, expected {1} but {2} provided.")]
    InvalidParameter(String, String, String),
    /// The rayon thread pool could not be built.
    #[error("Unable to build thread pool: {0}")]
    ThreadPool(String),
    /// Unable to write fit to file.
    #[error("Unable to write fit to file: {0}")]
    UnableToWrite(String),
    /// Unable to read fit from file.
    #[error("Unable to read fit from a file {0}")]
    UnableToRead(String),
}
