//! Genetic operators: selection, crossover, mutation and reproduction.

#[cfg(test)]
#[path = "../../tests/unit/solver/operators_test.rs"]
mod operators_test;

use super::population::get_demand_share;
use crate::evaluation::Evaluator;
use crate::models::{Candidate, ParameterSet};
use ecr_heuristics::prelude::*;
use ecr_heuristics::utils::compare_fitness_desc;

/// A standard deviation of noise added to full containers of re-seeded schedules.
const RESEED_FULL_NOISE: Float = 3.;
/// A standard deviation of noise added to empty containers of re-seeded schedules.
const RESEED_EMPTY_NOISE: Float = 1.;

/// A result of selection step.
pub struct Selection {
    /// Best candidates copied verbatim, ordered by fitness.
    pub elites: Vec<Candidate>,
    /// Candidates drawn by roulette wheel with replacement.
    pub drawn: Vec<Candidate>,
    /// The best candidate of the generation.
    pub best: Candidate,
}

/// Evaluates unevaluated candidates, sorts population by fitness descending, copies elites and
/// draws the rest using fitness proportionate selection over the whole population.
///
/// Population must not be empty.
pub fn select(
    population: &mut [Candidate],
    evaluator: &Evaluator,
    elite_size: usize,
    environment: &Environment,
) -> Selection {
    evaluator.evaluate_population(population, environment);
    population.sort_by(|a, b| compare_fitness_desc(a.fitness(), b.fitness()));

    let elite_size = elite_size.min(population.len());
    let elites = population[..elite_size].to_vec();

    let weights = get_roulette_weights(population);
    let drawn = (elite_size..population.len())
        .map(|_| {
            let idx = spin_roulette(weights.as_deref(), population.len(), environment.random.as_ref());
            population[idx].clone()
        })
        .collect();

    Selection { elites, drawn, best: population[0].clone() }
}

/// Returns shifted fitness weights `f - min(f) + 1` or none when they cannot be used for
/// proportionate selection.
fn get_roulette_weights(population: &[Candidate]) -> Option<Vec<Float>> {
    let min = population.iter().map(|c| c.fitness()).filter(|f| f.is_finite()).fold(Float::INFINITY, Float::min);

    let weights = population
        .iter()
        .map(|c| if c.fitness().is_finite() { c.fitness() - min + 1. } else { 0. })
        .collect::<Vec<_>>();

    let total = weights.iter().sum::<Float>();

    if total > 0. && total.is_finite() { Some(weights) } else { None }
}

/// Draws an index proportionally to weights, falls back to uniform draw when there are no weights.
fn spin_roulette(weights: Option<&[Float]>, size: usize, random: &dyn Random) -> usize {
    let Some(weights) = weights else {
        return random.uniform_int(0, size as i32 - 1) as usize;
    };

    let total = weights.iter().sum::<Float>();
    let target = random.uniform_real(0., total);
    let mut cumulative = 0.;

    weights
        .iter()
        .position(|weight| {
            cumulative += weight;
            target < cumulative
        })
        .unwrap_or(weights.len() - 1)
}

/// Applies uniform crossover with given probability: each full and each empty gene is swapped
/// between children independently with probability 0.5. Parents are copied unchanged otherwise.
pub fn crossover(
    first: &Candidate,
    second: &Candidate,
    probability: Float,
    parameters: &ParameterSet,
    random: &dyn Random,
) -> (Candidate, Candidate) {
    if !random.is_hit(probability) {
        return (first.clone(), second.clone());
    }

    let (mut first_full, mut first_empty) = first.clone().into_genes();
    let (mut second_full, mut second_empty) = second.clone().into_genes();

    (0..first_full.len()).for_each(|idx| {
        if random.is_head_not_tails() {
            std::mem::swap(&mut first_full[idx], &mut second_full[idx]);
        }
        if random.is_head_not_tails() {
            std::mem::swap(&mut first_empty[idx], &mut second_empty[idx]);
        }
    });

    (
        Candidate::from_genes(first_full, first_empty, parameters),
        Candidate::from_genes(second_full, second_empty, parameters),
    )
}

/// Mutation settings.
pub struct MutationSettings {
    /// Current mutation rate, each gene is perturbed with probability of its half.
    pub rate: Float,
    /// A probability to re-seed a subset of schedules.
    pub reseed_probability: Float,
    /// A share of re-seeded schedules.
    pub reseed_ratio: Float,
}

/// Mutates candidate: perturbs genes with gaussian noise proportional to their magnitude and,
/// rarely, re-seeds a random subset of schedules around the same targets as initial candidates. Inventory is re-derived when any gene changes.
pub fn mutate(candidate: &mut Candidate, settings: &MutationSettings, parameters: &ParameterSet, random: &dyn Random) {
    let gene_probability = settings.rate * 0.5;

    let mut full = candidate.full().to_vec();
    let mut empty = candidate.empty().to_vec();

    let mut is_mutated = perturb_genes(full.as_mut_slice(), gene_probability, 0.2, random);
    is_mutated |= perturb_genes(empty.as_mut_slice(), gene_probability, 0.3, random);

    if random.is_hit(settings.reseed_probability) {
        let size = full.len();
        let amount = ((size as Float * settings.reseed_ratio).floor() as usize).clamp(1, size.max(1));

        get_distinct_indices(size, amount, random).into_iter().for_each(|idx| {
            full[idx] = random.normal(get_demand_share(parameters, idx), RESEED_FULL_NOISE).max(0.);
            empty[idx] = random.normal(parameters.expected_empty(idx), RESEED_EMPTY_NOISE).max(0.);
        });

        is_mutated = true;
    }

    if is_mutated {
        candidate.modify(parameters, |full_genes, empty_genes| {
            full_genes.copy_from_slice(full.as_slice());
            empty_genes.copy_from_slice(empty.as_slice());
        });
    }
}

fn perturb_genes(genes: &mut [Float], probability: Float, strength_ratio: Float, random: &dyn Random) -> bool {
    genes.iter_mut().fold(false, |is_mutated, gene| {
        if random.is_hit(probability) {
            let strength = (*gene * strength_ratio).max(1.);
            *gene = random.normal(*gene, strength).max(0.);
            true
        } else {
            is_mutated
        }
    })
}

/// Returns `amount` distinct indices from `[0, size)` using partial Fisher-Yates shuffle.
fn get_distinct_indices(size: usize, amount: usize, random: &dyn Random) -> Vec<usize> {
    let mut indices = (0..size).collect::<Vec<_>>();
    let amount = amount.min(size);

    (0..amount).for_each(|idx| {
        let other = random.uniform_int(idx as i32, (size - 1) as i32) as usize;
        indices.swap(idx, other);
    });

    indices.truncate(amount);
    indices
}

/// Produces the next generation: elites verbatim followed by crossed over and mutated offspring of
/// distinct randomly chosen parents until population size is reached.
pub fn reproduce(
    selection: Selection,
    population_size: usize,
    crossover_probability: Float,
    mutation: &MutationSettings,
    parameters: &ParameterSet,
    random: &dyn Random,
) -> Vec<Candidate> {
    let Selection { elites, drawn, .. } = selection;

    let parents = elites.iter().chain(drawn.iter()).collect::<Vec<_>>();
    let mut next = Vec::with_capacity(population_size + 1);
    next.extend(elites.iter().cloned());

    if parents.is_empty() {
        return next;
    }

    while next.len() < population_size {
        let (first, second) = get_parent_pair(parents.len(), random);
        let (mut first, mut second) =
            crossover(parents[first], parents[second], crossover_probability, parameters, random);

        mutate(&mut first, mutation, parameters, random);
        mutate(&mut second, mutation, parameters, random);

        next.push(first);
        next.push(second);
    }

    next.truncate(population_size);
    next
}

fn get_parent_pair(size: usize, random: &dyn Random) -> (usize, usize) {
    if size < 2 {
        return (0, 0);
    }

    let first = random.uniform_int(0, (size - 1) as i32) as usize;
    let second = random.uniform_int(0, (size - 2) as i32) as usize;

    (first, if second >= first { second + 1 } else { second })
}

/// Calculates mutation rate from population diversity and generation progress: low diversity
/// raises the rate, and it grows mildly towards the end of the generation budget.
pub fn get_adaptive_mutation_rate(
    base_rate: Float,
    max_rate: Float,
    diversity: Float,
    generation: usize,
    max_generations: usize,
) -> Float {
    let normalized_diversity = (diversity / 100.).min(1.);

    let diversity_factor =
        if normalized_diversity < 0.3 { 1.5 + (0.3 - normalized_diversity) * 2. } else { 1. };

    let progress = if max_generations == 0 { 1. } else { generation as Float / max_generations as Float };
    let generation_factor = 1. + 0.3 * progress;

    (base_rate * diversity_factor * generation_factor).min(max_rate)
}
