#[cfg(test)]
#[path = "../../tests/unit/evaluation/evaluator_test.rs"]
mod evaluator_test;

use super::*;
use crate::models::{Candidate, ParameterSet};
use crate::simulation::final_levels;
use ecr_heuristics::prelude::*;
use ecr_heuristics::utils::parallel_foreach_mut;
use std::sync::Arc;

/// A structured cost and penalty breakdown of a candidate.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FitnessBreakdown {
    /// Base cost terms.
    pub cost: CostBreakdown,
    /// Constraint penalty terms.
    pub penalty: PenaltyBreakdown,
    /// A total base cost.
    pub base_cost: Float,
    /// A total constraint penalty.
    pub constraint_penalty: Float,
    /// An imbalance penalty, zero when balance mode is off.
    pub imbalance_penalty: Float,
    /// A weighted objective: base cost or a blend of base cost and imbalance penalty.
    pub weighted_objective: Float,
    /// A final fitness: negative sum of weighted objective and constraint penalty.
    pub fitness: Float,
}

/// Evaluates fitness of candidates. Evaluation is a pure function of candidate and parameters.
pub struct Evaluator {
    parameters: Arc<ParameterSet>,
    penalties: PenaltyConfig,
    imbalance: Option<ImbalanceConfig>,
}

impl Evaluator {
    /// Creates a new instance of `Evaluator`. When `imbalance` is specified, balance optimization
    /// mode is used.
    pub fn new(parameters: Arc<ParameterSet>, penalties: PenaltyConfig, imbalance: Option<ImbalanceConfig>) -> Self {
        Self { parameters, penalties, imbalance }
    }

    /// Returns parameters used for evaluation.
    pub fn parameters(&self) -> &ParameterSet {
        self.parameters.as_ref()
    }

    /// Calculates fitness of the candidate. Candidate's inventory is always current.
    pub fn evaluate(&self, candidate: &Candidate) -> Float {
        self.breakdown(candidate).fitness
    }

    /// Calculates a structured breakdown of candidate's fitness.
    pub fn breakdown(&self, candidate: &Candidate) -> FitnessBreakdown {
        let parameters = self.parameters.as_ref();

        let cost = CostBreakdown::new(candidate, parameters);
        let penalty = PenaltyBreakdown::new(candidate, parameters, &self.penalties);

        let base_cost = cost.total();
        let constraint_penalty = penalty.total();

        let (imbalance_penalty, weighted_objective) = match &self.imbalance {
            Some(config) => {
                let levels = final_levels(candidate.inventory(), parameters);
                let imbalance = imbalance_penalty(levels.as_slice(), config);
                (imbalance, config.alpha * base_cost + config.beta * imbalance)
            }
            None => (0., base_cost),
        };

        FitnessBreakdown {
            cost,
            penalty,
            base_cost,
            constraint_penalty,
            imbalance_penalty,
            weighted_objective,
            fitness: -(weighted_objective + constraint_penalty),
        }
    }

    /// Evaluates all unevaluated candidates in parallel.
    pub fn evaluate_population(&self, population: &mut [Candidate], environment: &Environment) {
        environment.parallelism.execute(|| {
            parallel_foreach_mut(population, |candidate| {
                if !candidate.is_evaluated() {
                    let fitness = self.evaluate(candidate);
                    candidate.set_fitness(fitness);
                }
            })
        });
    }
}
