//! Coverage
//!
//! Graded (fuzzy) coverage of true values by an asymmetric triangular granule
//! centered on each prediction. The granule `(alpha, beta)` has support
//! `[pred - alpha, pred + beta]` and membership 1 at `pred`.
//!
//! Membership is a total function. When the spread governing a side of the
//! triangle is 0, that side is empty and contributes 0, so no division by zero
//! can occur. With `alpha = 0` a sample lying exactly on its prediction also
//! scores 0, since it falls on the collapsed left edge.
use crate::data::SampleSeries;
use rayon::prelude::*;

/// Membership of `truth` in the triangular granule centered on `pred`.
///
/// Both the edge test and the ramp use the same signed error `truth - pred`,
/// so the result stays within `[0, 1]` at the support edges.
#[inline]
pub fn membership(pred: f64, truth: f64, alpha: f64, beta: f64) -> f64 {
    let d = truth - pred;
    if d <= 0.0 {
        if alpha > 0.0 && -d < alpha {
            1.0 + d / alpha
        } else {
            0.0
        }
    } else if beta > 0.0 && d < beta {
        1.0 - d / beta
    } else {
        0.0
    }
}

/// Coverage of a single granule: the sum (not the mean) of memberships
/// over every sample. Always within `[0, n]`.
pub fn granule_coverage(series: &SampleSeries, alpha: f64, beta: f64) -> f64 {
    series
        .pairs()
        .map(|(truth, pred)| membership(pred, truth, alpha, beta))
        .sum()
}

/// Score a population of candidate granules.
/// * `series` - The samples to score against.
/// * `alphas` - Left spread of each candidate.
/// * `betas` - Right spread of each candidate, same length as `alphas`.
/// * `parallel` - Score candidates on the current rayon pool.
///
/// Returns one coverage value per candidate, aligned by position.
pub fn coverage(series: &SampleSeries, alphas: &[f64], betas: &[f64], parallel: bool) -> Vec<f64> {
    debug_assert_eq!(alphas.len(), betas.len());
    if parallel {
        alphas
            .par_iter()
            .zip(betas.par_iter())
            .map(|(a, b)| granule_coverage(series, *a, *b))
            .collect()
    } else {
        alphas
            .iter()
            .zip(betas)
            .map(|(a, b)| granule_coverage(series, *a, *b))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership_shape() {
        // left ramp
        assert_eq!(membership(0.0, -1.0, 2.0, 4.0), 0.5);
        assert_eq!(membership(0.0, -2.0, 2.0, 4.0), 0.0);
        assert_eq!(membership(0.0, -3.0, 2.0, 4.0), 0.0);
        // peak
        assert_eq!(membership(0.0, 0.0, 2.0, 4.0), 1.0);
        // right ramp
        assert_eq!(membership(0.0, 1.0, 2.0, 4.0), 0.75);
        assert_eq!(membership(0.0, 4.0, 2.0, 4.0), 0.0);
        assert_eq!(membership(0.0, 5.0, 2.0, 4.0), 0.0);
    }

    #[test]
    fn test_membership_zero_spread() {
        assert_eq!(membership(1.0, 1.0, 0.0, 0.0), 0.0);
        assert_eq!(membership(1.0, 0.5, 0.0, 1.0), 0.0);
        assert_eq!(membership(1.0, 1.5, 1.0, 0.0), 0.0);
        // a collapsed right side keeps the peak
        assert_eq!(membership(1.0, 1.0, 1.0, 0.0), 1.0);
    }

    #[test]
    fn test_membership_at_rounded_support_edge() {
        // 3.2 - 3.0 rounds to slightly more than 0.2
        assert_eq!(membership(3.0, 3.2, 1.0, 0.2), 0.0);
        assert_eq!(membership(3.2, 3.0, 0.2, 1.0), 0.0);
        for i in 1..200 {
            let s = i as f64 * 0.1;
            let pred = i as f64 * 0.7;
            for truth in [pred - s, pred + s, pred - s * 0.999, pred + s * 0.999] {
                let m = membership(pred, truth, s, s);
                assert!((0.0..=1.0).contains(&m), "membership {} at pred {} truth {}", m, pred, truth);
            }
        }

        let y_true = vec![3.2, 3.0];
        let y_pred = vec![3.0, 3.0];
        let series = SampleSeries::new(&y_true, &y_pred).unwrap();
        assert_eq!(granule_coverage(&series, 1.0, 0.2), 1.0);
    }

    #[test]
    fn test_perfect_predictions_cover_every_sample() {
        let y = vec![1., 2., 3., 4., 5.];
        let series = SampleSeries::new(&y, &y).unwrap();
        let alphas = vec![0.1, 1.0, 50.0];
        let betas = vec![0.3, 2.0, 0.01];
        let c = coverage(&series, &alphas, &betas, false);
        assert_eq!(c, vec![5.0, 5.0, 5.0]);
    }

    #[test]
    fn test_outlier_is_not_covered() {
        let y_true = vec![0., 10.];
        let y_pred = vec![0., 0.];
        let series = SampleSeries::new(&y_true, &y_pred).unwrap();
        let c = coverage(&series, &[1.0, 3.0, 0.5], &[9.99, 5.0, 0.5], false);
        assert_eq!(c, vec![1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_coverage_bounded_and_monotone_in_spread() {
        let y_true = vec![0., 1.5, 2., 7., 3.2, -1.];
        let y_pred = vec![0.5, 1., 2.5, 4., 3., 0.];
        let series = SampleSeries::new(&y_true, &y_pred).unwrap();
        let spreads: Vec<f64> = (1..60).map(|i| i as f64 * 0.1).collect();
        let c = coverage(&series, &spreads, &spreads, false);
        for w in c.windows(2) {
            assert!(w[1] >= w[0]);
        }
        assert!(c.iter().all(|v| *v >= 0.0 && *v <= series.len() as f64));

        // widening only one side
        let fixed = vec![1.0; spreads.len()];
        let c_left = coverage(&series, &spreads, &fixed, false);
        let c_right = coverage(&series, &fixed, &spreads, false);
        for i in 1..spreads.len() {
            assert!(c_left[i] >= c_left[i - 1]);
            assert!(c_right[i] >= c_right[i - 1]);
        }
    }

    #[test]
    fn test_coverage_non_increasing_in_error() {
        let y_pred = vec![0.0; 8];
        let errors: Vec<f64> = (0..8).map(|i| i as f64 * 0.5).collect();
        let mut last_left = f64::INFINITY;
        let mut last_right = f64::INFINITY;
        for e in errors {
            let below = vec![-e; 8];
            let above = vec![e; 8];
            let s_below = SampleSeries::new(&below, &y_pred).unwrap();
            let s_above = SampleSeries::new(&above, &y_pred).unwrap();
            let l = granule_coverage(&s_below, 2.0, 3.0);
            let r = granule_coverage(&s_above, 2.0, 3.0);
            assert!(l <= last_left);
            assert!(r <= last_right);
            last_left = l;
            last_right = r;
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let y_true: Vec<f64> = (0..100).map(|i| (i as f64 * 0.37).sin() * 3.0).collect();
        let y_pred: Vec<f64> = (0..100).map(|i| (i as f64 * 0.35).sin() * 3.0).collect();
        let series = SampleSeries::new(&y_true, &y_pred).unwrap();
        let alphas: Vec<f64> = (1..20).map(|i| i as f64 * 0.2).collect();
        let betas: Vec<f64> = (1..20).map(|i| i as f64 * 0.3).collect();
        let seq = coverage(&series, &alphas, &betas, false);
        let par = coverage(&series, &alphas, &betas, true);
        assert_eq!(seq, par);
    }
}
