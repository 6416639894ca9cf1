//! Metric
//!
//! Error metrics over paired true and predicted values, and the comparison used
//! to track the best objective value.
/// Compare to metric values, determining if b is better.
/// If one of them is NaN favor the non NaN value.
/// If both are NaN, consider the first value to be better.
pub fn is_comparison_better(value: f64, comparison: f64, maximize: bool) -> bool {
    match (value.is_nan(), comparison.is_nan()) {
        // Both nan, comparison is not better,
        // Or comparison is nan, also not better
        (true, true) | (false, true) => false,
        // comparison is not Nan, it's better
        (true, false) => true,
        // Perform numerical comparison.
        (false, false) => {
            if maximize {
                value < comparison
            } else {
                value > comparison
            }
        }
    }
}

/// Average of `|y_true[i] - y_pred[i]|`. Returns NaN for empty input.
pub fn mean_absolute_error(y_true: &[f64], y_pred: &[f64]) -> f64 {
    let res = y_true.iter().zip(y_pred).map(|(y_, yhat_)| (y_ - yhat_).abs()).sum::<f64>();
    res / y_true.len() as f64
}
