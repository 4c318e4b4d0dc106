#[cfg(test)]
#[path = "../../tests/unit/solver/population_test.rs"]
mod population_test;

use crate::models::{Candidate, ParameterSet};
use ecr_heuristics::algorithms::math::mean_pairwise_distance;
use ecr_heuristics::prelude::*;
use ecr_heuristics::utils::parallel_into_collect;
use std::sync::Arc;

/// A standard deviation of noise added to seeded genes of initial candidates.
const INITIAL_NOISE: Float = 0.5;

/// Creates an initial population. Every candidate is seeded in parallel using its own random
/// stream, streams are derived sequentially from the environment's random, so the result is
/// reproducible under a fixed seed.
pub fn create_initial_population(parameters: &ParameterSet, size: usize, environment: &Environment) -> Vec<Candidate> {
    let streams = (0..size).map(|_| environment.random.split()).collect::<Vec<Arc<dyn Random>>>();

    environment.parallelism.execute(|| {
        parallel_into_collect(streams, |random| create_seeded_candidate(parameters, random.as_ref()))
    })
}

/// Creates a candidate with full containers close to route's demand share per schedule and empty
/// containers close to theta times route capacity. Genes are floored at zero.
pub fn create_seeded_candidate(parameters: &ParameterSet, random: &dyn Random) -> Candidate {
    let (full, empty) = (0..parameters.schedules().len())
        .map(|idx| {
            let full = random.normal(get_demand_share(parameters, idx), INITIAL_NOISE).max(0.);
            let empty = random.normal(parameters.expected_empty(idx), INITIAL_NOISE).max(0.);
            (full, empty)
        })
        .unzip();

    Candidate::from_genes(full, empty, parameters)
}

/// Returns route's demand divided evenly among route's schedules.
pub(crate) fn get_demand_share(parameters: &ParameterSet, schedule: usize) -> Float {
    let route = parameters.schedules()[schedule].route;
    let sailings = parameters.route_schedules(route).len().max(1);

    parameters.routes()[route].demand / sailings as Float
}

/// Measures population diversity as mean pairwise euclidean distance between candidates' genes
/// using at most `sample` first candidates.
pub fn get_diversity(population: &[Candidate], sample: usize) -> Float {
    let sample = &population[..sample.min(population.len())];

    mean_pairwise_distance(sample, |candidate| candidate.genes())
}
