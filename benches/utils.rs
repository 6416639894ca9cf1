#![allow(dead_code)]
use rand::distr::Uniform;
use rand::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

// prediction_pair
//
// Generates (y_true, y_pred)-tuple with
// skewed noise, so predictions err
// more often to one side
pub(crate) fn prediction_pair(n_samples: usize) -> (Vec<f64>, Vec<f64>) {

    // reproducible seed
    let mut rng = StdRng::seed_from_u64(1903);

    // generate distributions
    let y_distribution = Uniform::new(0.0, 10.0).unwrap();
    let noise_distribution = Uniform::new(-0.5, 1.5).unwrap();

    // populate vectors
    let mut y_true: Vec<f64> = Vec::with_capacity(n_samples);
    let mut y_pred: Vec<f64> = Vec::with_capacity(n_samples);
    for _ in 0..n_samples {
        let y = rng.sample(y_distribution);
        y_true.push(y);
        y_pred.push(y + rng.sample(noise_distribution));
    }

    (y_true, y_pred)
}
