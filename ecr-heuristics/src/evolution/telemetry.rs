//! A module which provides the logic to collect metrics about algorithm execution and simple logging.

#[cfg(test)]
#[path = "../../tests/unit/evolution/telemetry_test.rs"]
mod telemetry_test;

use crate::HeuristicStatistics;
use crate::termination::TerminationReason;
use crate::utils::{Float, InfoLogger, Timer};

/// Encapsulates different measurements regarding algorithm evaluation.
#[derive(Clone, Debug, Default)]
pub struct TelemetryMetrics {
    /// Algorithm duration in seconds.
    pub duration: usize,
    /// Total amount of generations.
    pub generations: usize,
    /// Speed: generations per second.
    pub speed: Float,
    /// Evolution progress.
    pub evolution: Vec<TelemetryGeneration>,
}

/// Represents information about generation.
#[derive(Clone, Debug)]
pub struct TelemetryGeneration {
    /// Generation sequence number (starting from one).
    pub number: usize,
    /// Time since evolution started.
    pub timestamp: Float,
    /// The best fitness of the generation.
    pub best_fitness: Float,
    /// Population diversity measured at the generation.
    pub diversity: Float,
    /// Mutation rate used to produce the next generation.
    pub mutation_rate: Float,
    /// True if this generation considered as improvement.
    pub is_improvement: bool,
    /// Overall improvement ratio.
    pub i_all_ratio: Float,
}

/// Specifies a telemetry mode.
#[derive(Clone)]
pub enum TelemetryMode {
    /// No telemetry at all.
    None,
    /// Only logging.
    OnlyLogging {
        /// A logger type.
        logger: InfoLogger,
        /// Specifies how often best fitness is logged.
        log_best: usize,
    },
    /// Only metrics collection.
    OnlyMetrics {
        /// Specifies how often generation is tracked.
        track_generation: usize,
    },
    /// Both logging and metrics collection.
    All {
        /// A logger type.
        logger: InfoLogger,
        /// Specifies how often best fitness is logged.
        log_best: usize,
        /// Specifies how often generation is tracked.
        track_generation: usize,
    },
}

/// Provides way to collect metrics and write information into log. It is supposed to be called at
/// generation boundaries only.
pub struct Telemetry {
    metrics: TelemetryMetrics,
    time: Timer,
    mode: TelemetryMode,
}

impl Telemetry {
    /// Creates a new instance of `Telemetry`.
    pub fn new(mode: TelemetryMode) -> Self {
        Self { metrics: TelemetryMetrics::default(), time: Timer::start(), mode }
    }

    /// Reports initial population statistics.
    pub fn on_initial(&mut self, population_size: usize, best_fitness: Float, init_time: Timer) {
        self.log(
            format!(
                "[{}s] created initial population of {} individuals in {}ms, best fitness: {:.3}",
                self.time.elapsed_secs(),
                population_size,
                init_time.elapsed_millis(),
                best_fitness
            )
            .as_str(),
        );
    }

    /// Reports statistics of completed generation.
    pub fn on_generation(
        &mut self,
        statistics: &HeuristicStatistics,
        diversity: Float,
        mutation_rate: Float,
        generation_time: Timer,
        is_improved: bool,
    ) {
        let number = statistics.generation;
        let best_fitness = statistics.last_fitness.unwrap_or(Float::NEG_INFINITY);

        self.metrics.generations = number;

        let (log_best, track_generation) = match &self.mode {
            TelemetryMode::None => return,
            TelemetryMode::OnlyLogging { log_best, .. } => (Some(*log_best), None),
            TelemetryMode::OnlyMetrics { track_generation } => (None, Some(*track_generation)),
            TelemetryMode::All { log_best, track_generation, .. } => (Some(*log_best), Some(*track_generation)),
        };

        let is_every = |interval: Option<usize>| interval.is_some_and(|interval| number % interval.max(1) == 0);

        if is_every(log_best) || (log_best.is_some() && is_improved) {
            self.log(
                format!(
                    "[{}s] generation {} took {}ms, fitness: {:.3}, best: {:.3}, diversity: {:.3}, mutation rate: {:.3}{}",
                    self.time.elapsed_secs(),
                    number,
                    generation_time.elapsed_millis(),
                    best_fitness,
                    statistics.best_fitness.unwrap_or(best_fitness),
                    diversity,
                    mutation_rate,
                    if is_improved { ", improved" } else { "" }
                )
                .as_str(),
            );
        }

        if is_every(track_generation) {
            self.metrics.evolution.push(TelemetryGeneration {
                number,
                timestamp: self.time.elapsed_secs_as_float(),
                best_fitness,
                diversity,
                mutation_rate,
                is_improvement: is_improved,
                i_all_ratio: statistics.improvement_ratio(),
            });
        }
    }

    /// Reports final statistic.
    pub fn on_result(&mut self, statistics: &HeuristicStatistics, reason: TerminationReason) {
        let generations = statistics.generation;
        let elapsed = self.time.elapsed_secs() as usize;
        let elapsed_float = self.time.elapsed_secs_as_float();
        let speed = if elapsed_float > 0. { generations as Float / elapsed_float } else { 0. };

        self.metrics.generations = generations;
        self.metrics.duration = elapsed;
        self.metrics.speed = speed;

        self.log(
            format!(
                "[{elapsed}s] total generations: {generations}, speed: {speed:.2} gen/sec, termination: {reason}, improvement ratio: {:.3}",
                statistics.improvement_ratio()
            )
            .as_str(),
        );

        match statistics.best_fitness {
            Some(best) => self.log(format!("\tbest fitness: {best:.3}").as_str()),
            None => self.log("no solutions found"),
        }
    }

    /// Gets metrics.
    pub fn take_metrics(self) -> Option<TelemetryMetrics> {
        match &self.mode {
            TelemetryMode::OnlyMetrics { .. } | TelemetryMode::All { .. } => Some(self.metrics),
            _ => None,
        }
    }

    /// Writes log message.
    pub fn log(&self, message: &str) {
        match &self.mode {
            TelemetryMode::OnlyLogging { logger, .. } => (logger)(message),
            TelemetryMode::All { logger, .. } => (logger)(message),
            _ => {}
        }
    }
}
