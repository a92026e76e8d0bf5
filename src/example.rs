//! This module contains example models and logic to demonstrate practical usage of the crate
//! on continuous optimization problems over real valued vectors.

#[cfg(test)]
#[path = "../tests/unit/example_test.rs"]
mod example_test;

use crate::evolution::{CandidateGenerator, FitnessEvaluator, SelectionStrategy, VariationOperator};
use crate::population::RankedPopulation;
use crate::utils::{GenericResult, RandomGen};
use rand::Rng;
use rand_distr::{Distribution, Normal};
use std::sync::Arc;

/// An objective function which calculates a fitness of a vector.
pub type VectorFunction = Arc<dyn Fn(&[f64]) -> f64 + Send + Sync>;

/// A fitness evaluator which scores vectors with an objective function. The score is
/// minimized, so lower values mean fitter candidates.
pub struct VectorFunctionEvaluator {
    function: VectorFunction,
}

impl VectorFunctionEvaluator {
    /// Creates a new instance of `VectorFunctionEvaluator`.
    pub fn new(function: VectorFunction) -> Self {
        Self { function }
    }
}

impl FitnessEvaluator for VectorFunctionEvaluator {
    type Candidate = Vec<f64>;

    fn get_fitness(&self, candidate: &Self::Candidate, _: &[Self::Candidate]) -> GenericResult<f64> {
        Ok((self.function)(candidate))
    }

    fn is_natural(&self) -> bool {
        false
    }
}

/// Generates random vectors of a fixed dimension with coordinates drawn uniformly from
/// the given range.
pub struct UniformVectorGenerator {
    dimension: usize,
    min: f64,
    max: f64,
}

impl UniformVectorGenerator {
    /// Creates a new instance of `UniformVectorGenerator`.
    pub fn new(dimension: usize, min: f64, max: f64) -> Self {
        assert_ne!(dimension, 0);
        assert!(min < max);

        Self { dimension, min, max }
    }
}

impl CandidateGenerator for UniformVectorGenerator {
    type Candidate = Vec<f64>;

    fn generate_candidate(&self, rng: &mut RandomGen) -> Self::Candidate {
        (0..self.dimension).map(|_| rng.gen_range(self.min..self.max)).collect()
    }
}

/// A selection strategy which picks parents uniformly from the fittest fraction of the
/// ranked population.
pub struct TruncationSelection {
    ratio: f64,
}

impl TruncationSelection {
    /// Creates a new instance of `TruncationSelection` keeping the given fraction of the
    /// population in the breeding pool.
    pub fn new(ratio: f64) -> Self {
        assert!(ratio > 0. && ratio <= 1.);

        Self { ratio }
    }
}

impl SelectionStrategy for TruncationSelection {
    type Candidate = Vec<f64>;

    fn select(
        &self,
        population: &RankedPopulation<Self::Candidate>,
        selection_size: usize,
        rng: &mut RandomGen,
    ) -> Vec<Self::Candidate> {
        let pool_size = ((population.len() as f64 * self.ratio) as usize).max(1);

        (0..selection_size)
            .map(|_| population.as_slice()[rng.gen_range(0..pool_size)].candidate().clone())
            .collect()
    }
}

/// A variation operator which perturbs vector coordinates with gaussian noise.
pub struct GaussianMutation {
    probability: f64,
    distribution: Normal<f64>,
}

impl GaussianMutation {
    /// Creates a new instance of `GaussianMutation` which mutates each coordinate with
    /// the given probability adding noise with the given standard deviation.
    pub fn new(probability: f64, std_dev: f64) -> Self {
        assert!((0. ..=1.).contains(&probability));
        assert!(std_dev > 0.);

        Self { probability, distribution: Normal::new(0., std_dev).expect("cannot create gaussian distribution") }
    }
}

impl VariationOperator for GaussianMutation {
    type Candidate = Vec<f64>;

    fn apply(&self, selected: Vec<Self::Candidate>, rng: &mut RandomGen) -> Vec<Self::Candidate> {
        selected
            .into_iter()
            .map(|mut candidate| {
                candidate.iter_mut().for_each(|value| {
                    if rng.gen_bool(self.probability) {
                        *value += self.distribution.sample(rng);
                    }
                });

                candidate
            })
            .collect()
    }
}

/// Creates a multidimensional sphere function: the sum of squared coordinates with the
/// global minimum of zero at the origin.
pub fn create_sphere_function() -> VectorFunction {
    Arc::new(|input| input.iter().map(|&value| value * value).sum())
}

/// Creates a multidimensional Rosenbrock function, also referred to as the Valley or Banana
/// function. The global minimum of zero lies in a narrow parabolic valley at (1, .., 1).
pub fn create_rosenbrock_function() -> VectorFunction {
    Arc::new(|input| {
        assert!(input.len() > 1);

        input.windows(2).fold(0., |acc, pair| match pair {
            [x1, x2] => acc + 100. * (x2 - x1.powi(2)).powi(2) + (x1 - 1.).powi(2),
            _ => unreachable!(),
        })
    })
}
