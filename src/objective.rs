//! Objective
//!
//! The quantity a global optimizer minimizes. For granules it is the negated
//! product of specificity and coverage:
//!
//! `objective = -(exp(-rate * (alpha + beta)) * coverage)`
//!
//! The coverage term is the raw sum over samples, it is not normalized by `n`.
use crate::coverage::coverage;
use crate::data::SampleSeries;

/// An objective evaluated on a whole population in one call.
pub trait BatchObjective: Sync {
    /// Returns one cost per position, aligned by index. Lower is better.
    fn evaluate(&self, population: &[Vec<f64>]) -> Vec<f64>;
}

impl<F> BatchObjective for F
where
    F: Fn(&[Vec<f64>]) -> Vec<f64> + Sync,
{
    fn evaluate(&self, population: &[Vec<f64>]) -> Vec<f64> {
        self(population)
    }
}

/// Specificity of a granule, decays toward 0 as it widens.
#[inline]
pub fn specificity(alpha: f64, beta: f64, rate: f64) -> f64 {
    (rate * (-alpha - beta)).exp()
}

/// Coverage weighted specificity objective over a fixed sample series.
/// Positions are `[alpha, beta]`, a missing coordinate scores NaN.
pub struct GranuleObjective<'a> {
    pub series: SampleSeries<'a>,
    pub specificity_rate: f64,
    pub parallel: bool,
}

impl<'a> GranuleObjective<'a> {
    pub fn new(series: SampleSeries<'a>, specificity_rate: f64, parallel: bool) -> Self {
        GranuleObjective {
            series,
            specificity_rate,
            parallel,
        }
    }
}

impl BatchObjective for GranuleObjective<'_> {
    fn evaluate(&self, population: &[Vec<f64>]) -> Vec<f64> {
        let (alphas, betas): (Vec<f64>, Vec<f64>) = population
            .iter()
            .map(|p| (p.first().copied().unwrap_or(f64::NAN), p.get(1).copied().unwrap_or(f64::NAN)))
            .unzip();
        coverage(&self.series, &alphas, &betas, self.parallel)
            .iter()
            .zip(alphas.iter().zip(&betas))
            .map(|(c, (a, b))| -(specificity(*a, *b, self.specificity_rate) * c))
            .collect()
    }
}
