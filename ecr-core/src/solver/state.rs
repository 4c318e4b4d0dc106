use crate::models::Candidate;
use ecr_heuristics::prelude::*;

/// A mutable state of one search run which is threaded through the generation loop.
pub struct RunState {
    /// Search statistics: generation counter, stagnation and best fitness.
    pub statistics: HeuristicStatistics,
    /// The best candidate observed across all generations.
    pub best: Option<Candidate>,
    /// The best fitness of every completed generation.
    pub history: Vec<Float>,
    /// A mutation rate used to produce the next generation.
    pub mutation_rate: Float,
    /// Population diversity measured at the last generation.
    pub diversity: Float,
}

impl RunState {
    /// Creates a new instance of `RunState`.
    pub fn new(mutation_rate: Float) -> Self {
        Self { statistics: HeuristicStatistics::default(), best: None, history: vec![], mutation_rate, diversity: 0. }
    }

    /// Registers the best candidate of a completed generation and returns true if it is considered
    /// as a sufficient improvement.
    pub fn on_generation(&mut self, generation_best: &Candidate, min_relative_improvement: Float) -> bool {
        let fitness = generation_best.fitness();

        if self.best.as_ref().is_none_or(|best| fitness > best.fitness()) {
            self.best = Some(generation_best.clone());
        }

        self.history.push(fitness);

        self.statistics.on_generation(fitness, min_relative_improvement)
    }

    /// Returns index of the last completed generation, starting from zero.
    pub fn last_generation_index(&self) -> usize {
        self.statistics.generation.saturating_sub(1)
    }
}
