#[cfg(test)]
#[path = "../../tests/unit/solver/config_test.rs"]
mod config_test;

use crate::evaluation::{ImbalanceConfig, PenaltyConfig};
use ecr_heuristics::prelude::*;
use std::str::FromStr;

/// A named configuration preset which defines population size, generation budget, elite size and
/// patience.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SolverPreset {
    /// 50 individuals, 20 generations, 10 elites, patience 10.
    Quick,
    /// 100 individuals, 50 generations, 20 elites, patience 25.
    Medium,
    /// 200 individuals, 100 generations, 40 elites, patience 50.
    Standard,
    /// 1000 individuals, 2000 generations, 200 elites, patience 200.
    Full,
    /// 100 individuals, 100 generations, 20 elites, patience 50.
    Default,
}

impl FromStr for SolverPreset {
    type Err = GenericError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "quick" => Ok(SolverPreset::Quick),
            "medium" => Ok(SolverPreset::Medium),
            "standard" => Ok(SolverPreset::Standard),
            "full" => Ok(SolverPreset::Full),
            "default" => Ok(SolverPreset::Default),
            _ => Err(format!("unknown preset: '{value}', expected one of: quick, medium, standard, full, default").into()),
        }
    }
}

/// A configuration which controls the genetic search.
#[derive(Clone, Debug, PartialEq)]
pub struct SolverConfig {
    /// Population size, constant across generations.
    pub population_size: usize,
    /// A maximum amount of generations.
    pub max_generations: usize,
    /// Amount of best candidates copied verbatim into the next generation.
    pub elite_size: usize,
    /// Amount of generations without sufficient improvement which stops the search.
    pub patience: usize,
    /// A minimum relative improvement of the best fitness which resets stagnation.
    pub convergence_threshold: Float,
    /// A fitness which stops the search when reached.
    pub target_fitness: Float,
    /// A probability to cross over a pair of parents.
    pub crossover_probability: Float,
    /// A base mutation rate.
    pub mutation_probability: Float,
    /// A maximum adaptive mutation rate.
    pub max_mutation_rate: Float,
    /// A probability to re-seed a subset of schedules of a mutated candidate.
    pub reseed_probability: Float,
    /// A share of schedules which are re-seeded, at least one schedule is re-seeded.
    pub reseed_ratio: Float,
    /// Amount of best candidates used to measure population diversity.
    pub diversity_sample: usize,
    /// Constraint penalty weights.
    pub penalties: PenaltyConfig,
    /// Balance optimization mode settings, disabled when not set.
    pub imbalance: Option<ImbalanceConfig>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::from_preset(SolverPreset::Default)
    }
}

impl SolverConfig {
    /// Creates a configuration from a named preset. Other parameters have default values.
    pub fn from_preset(preset: SolverPreset) -> Self {
        let (population_size, max_generations, elite_size, patience) = match preset {
            SolverPreset::Quick => (50, 20, 10, 10),
            SolverPreset::Medium => (100, 50, 20, 25),
            SolverPreset::Standard => (200, 100, 40, 50),
            SolverPreset::Full => (1000, 2000, 200, 200),
            SolverPreset::Default => (100, 100, 20, 50),
        };

        Self {
            population_size,
            max_generations,
            elite_size,
            patience,
            convergence_threshold: 0.0005,
            target_fitness: -3000.,
            crossover_probability: 0.85,
            mutation_probability: 0.25,
            max_mutation_rate: 0.5,
            reseed_probability: 0.05,
            reseed_ratio: 0.1,
            diversity_sample: 50,
            penalties: PenaltyConfig::default(),
            imbalance: None,
        }
    }

    /// Validates configuration.
    pub fn validate(&self) -> GenericResult<()> {
        let mut errors = Vec::<String>::new();

        if self.population_size == 0 {
            errors.push("population size must be positive".to_string());
        }

        if self.max_generations == 0 {
            errors.push("max generations must be positive".to_string());
        }

        if self.elite_size >= self.population_size {
            errors.push(format!(
                "elite size ({}) must be less than population size ({})",
                self.elite_size, self.population_size
            ));
        }

        let probabilities = [
            ("crossover probability", self.crossover_probability),
            ("mutation probability", self.mutation_probability),
            ("max mutation rate", self.max_mutation_rate),
            ("reseed probability", self.reseed_probability),
            ("reseed ratio", self.reseed_ratio),
        ];
        probabilities.iter().filter(|(_, value)| !(0. ..=1.).contains(value)).for_each(|(name, value)| {
            errors.push(format!("{name} must be in [0, 1] range, got {value}"));
        });

        if self.convergence_threshold < 0. || !self.convergence_threshold.is_finite() {
            errors.push("convergence threshold must be non-negative".to_string());
        }

        if let Some(Err(err)) = self.imbalance.as_ref().map(|imbalance| imbalance.validate()) {
            errors.push(err.to_string());
        }

        if errors.is_empty() { Ok(()) } else { Err(errors.join(", ").into()) }
    }
}
