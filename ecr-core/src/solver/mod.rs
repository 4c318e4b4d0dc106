//! The solver module contains a genetic algorithm which searches for the best container allocation.
//!
//! A run goes through `initialization` and `evolution` phases. Each generation is evaluated in
//! parallel, then the best candidates survive verbatim and the rest of the next generation is
//! produced by roulette wheel selection, uniform crossover and adaptive mutation. The run stops
//! when the target fitness is reached, the search stagnates, the generation budget is exhausted or
//! the environment's quota is reached.

#[cfg(test)]
#[path = "../../tests/unit/solver/solver_test.rs"]
mod solver_test;

mod config;
pub use self::config::*;

mod operators;
pub use self::operators::*;

mod population;
pub use self::population::*;

mod state;
pub use self::state::RunState;

use crate::evaluation::Evaluator;
use crate::models::{Candidate, ParameterSet};
use ecr_heuristics::prelude::*;
use ecr_heuristics::termination::{MaxGeneration, MaxStagnation, QuotaInterruption, TargetFitness};
use ecr_heuristics::utils::Timer;
use std::sync::Arc;

/// A result of the search.
pub struct SearchResult {
    /// The best candidate observed across all generations.
    pub best: Candidate,
    /// The best fitness of every generation actually run.
    pub history: Vec<Float>,
    /// Amount of generations run.
    pub generations: usize,
    /// A reason of termination.
    pub reason: TerminationReason,
    /// Collected metrics, if telemetry mode allows it.
    pub metrics: Option<TelemetryMetrics>,
}

/// A genetic algorithm solver.
pub struct Solver {
    parameters: Arc<ParameterSet>,
    config: SolverConfig,
    environment: Arc<Environment>,
    telemetry_mode: TelemetryMode,
}

impl Solver {
    /// Creates a new instance of `Solver`. Returns an error if configuration is invalid.
    pub fn new(parameters: Arc<ParameterSet>, config: SolverConfig, environment: Arc<Environment>) -> GenericResult<Self> {
        config.validate()?;

        if parameters.schedules().is_empty() {
            return Err("cannot solve problem without schedules".into());
        }

        Ok(Self { parameters, config, environment, telemetry_mode: TelemetryMode::None })
    }

    /// Sets telemetry mode. Default is no telemetry.
    pub fn with_telemetry_mode(mut self, mode: TelemetryMode) -> Self {
        self.telemetry_mode = mode;
        self
    }

    /// Returns an evaluator which is used by the solver.
    pub fn evaluator(&self) -> Evaluator {
        Evaluator::new(self.parameters.clone(), self.config.penalties.clone(), self.config.imbalance.clone())
    }

    /// Runs the search.
    pub fn solve(self) -> GenericResult<SearchResult> {
        let config = &self.config;
        let environment = self.environment.as_ref();
        let parameters = self.parameters.as_ref();
        let evaluator = self.evaluator();
        let termination = self.create_termination();
        let mut telemetry = Telemetry::new(self.telemetry_mode.clone());

        let init_time = Timer::start();
        let mut population = create_initial_population(parameters, config.population_size, environment);
        evaluator.evaluate_population(population.as_mut_slice(), environment);

        let initial_best = population.iter().map(|c| c.fitness()).fold(Float::NEG_INFINITY, Float::max);
        telemetry.on_initial(population.len(), initial_best, init_time);

        let mut state = RunState::new(config.mutation_probability);

        let reason = loop {
            let generation_time = Timer::start();

            let selection = select(population.as_mut_slice(), &evaluator, config.elite_size, environment);
            let is_improved = state.on_generation(&selection.best, config.convergence_threshold);

            state.diversity = get_diversity(population.as_slice(), config.diversity_sample);
            state.mutation_rate = get_adaptive_mutation_rate(
                config.mutation_probability,
                config.max_mutation_rate,
                state.diversity,
                state.last_generation_index(),
                config.max_generations,
            );
            state.statistics.termination_estimate = termination.estimate(&state.statistics);

            telemetry.on_generation(&state.statistics, state.diversity, state.mutation_rate, generation_time, is_improved);

            if let Some(reason) = termination.check(&state.statistics) {
                break reason;
            }

            let mutation = MutationSettings {
                rate: state.mutation_rate,
                reseed_probability: config.reseed_probability,
                reseed_ratio: config.reseed_ratio,
            };

            population = reproduce(
                selection,
                config.population_size,
                config.crossover_probability,
                &mutation,
                parameters,
                environment.random.as_ref(),
            );
        };

        telemetry.on_result(&state.statistics, reason);

        let best = state.best.ok_or_else(|| GenericError::from("no candidates were evaluated"))?;

        Ok(SearchResult {
            best,
            history: state.history,
            generations: state.statistics.generation,
            reason,
            metrics: telemetry.take_metrics(),
        })
    }

    fn create_termination(&self) -> CompositeTermination {
        let mut terminations: Vec<Box<dyn Termination + Send + Sync>> = vec![
            Box::new(TargetFitness::new(self.config.target_fitness)),
            Box::new(MaxStagnation::new(self.config.patience)),
            Box::new(MaxGeneration::new(self.config.max_generations)),
        ];

        if let Some(quota) = self.environment.quota.clone() {
            terminations.push(Box::new(QuotaInterruption::new(quota)));
        }

        CompositeTermination::new(terminations)
    }
}
