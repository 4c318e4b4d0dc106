//! Solver configuration which is read from a json file. Every field is optional: missing values
//! are taken from the selected preset or from core defaults.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/config_test.rs"]
mod config_test;

use ecr_core::prelude::*;
use serde::Deserialize;
use std::io::{BufReader, Read};
use std::str::FromStr;

/// An algorithm configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// A named preset, see `SolverPreset`.
    pub preset: Option<String>,
    /// Specifies evolution configuration.
    pub evolution: Option<EvolutionConfig>,
    /// Specifies algorithm termination configuration.
    pub termination: Option<TerminationConfig>,
    /// Specifies constraint penalties.
    pub penalties: Option<PenaltiesConfig>,
    /// Specifies balance optimization mode.
    pub balance: Option<BalanceConfig>,
    /// Specifies rebalancing plan constants.
    pub rebalance: Option<RebalancingConfig>,
    /// Specifies telemetry configuration.
    pub telemetry: Option<TelemetryConfig>,
    /// Specifies environment configuration.
    pub environment: Option<EnvironmentConfig>,
}

/// An evolution configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvolutionConfig {
    /// A population size.
    pub population_size: Option<usize>,
    /// An amount of elites.
    pub elite_size: Option<usize>,
    /// A crossover probability.
    pub crossover_probability: Option<f64>,
    /// A base mutation rate.
    pub mutation_probability: Option<f64>,
    /// A maximum adaptive mutation rate.
    pub max_mutation_rate: Option<f64>,
    /// A re-seed probability.
    pub reseed_probability: Option<f64>,
    /// A share of re-seeded schedules.
    pub reseed_ratio: Option<f64>,
    /// A sample size used to measure diversity.
    pub diversity_sample: Option<usize>,
}

/// A termination configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminationConfig {
    /// A maximum amount of generations.
    pub max_generations: Option<usize>,
    /// An amount of generations without improvement.
    pub patience: Option<usize>,
    /// A minimum relative improvement.
    pub convergence_threshold: Option<f64>,
    /// A target fitness.
    pub target_fitness: Option<f64>,
}

/// A weight and a tolerance of one constraint.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstraintConfig {
    /// A penalty weight, zero disables the constraint.
    pub weight: f64,
    /// A tolerated violation. Default is zero.
    pub tolerance: Option<f64>,
}

/// Constraint penalties configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PenaltiesConfig {
    /// Route demand.
    pub demand: Option<ConstraintConfig>,
    /// Route capacity.
    pub capacity: Option<ConstraintConfig>,
    /// Schedule empty ratio.
    pub empty_ratio: Option<ConstraintConfig>,
    /// Empty ratio policy: `equality` or `at-least`.
    pub empty_ratio_policy: Option<String>,
    /// Flow consistency.
    pub flow: Option<ConstraintConfig>,
    /// Non negativity.
    pub non_negativity: Option<ConstraintConfig>,
}

/// A balance optimization mode configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceConfig {
    /// Enables balance mode.
    pub enabled: bool,
    /// A weight of base cost.
    pub alpha: Option<f64>,
    /// A weight of imbalance penalty.
    pub beta: Option<f64>,
    /// An imbalance scale.
    pub scale: Option<f64>,
}

/// Rebalancing plan configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RebalancingConfig {
    /// Amount of last inventory rows used to get port levels.
    pub level_window: Option<usize>,
    /// A classification threshold factor.
    pub classification_factor: Option<f64>,
    /// A maximum repositioning distance.
    pub max_distance: Option<f64>,
    /// A cost per TEU-km.
    pub cost_per_teu_km: Option<f64>,
}

/// A telemetry configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryConfig {
    /// Logging configuration.
    pub logging: Option<LoggingConfig>,
    /// Metrics configuration.
    pub metrics: Option<MetricsConfig>,
}

/// A logging configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Enables logging.
    pub enabled: bool,
    /// Specifies how often best fitness is logged. Default is 10 (generations).
    pub log_best: Option<usize>,
}

/// A metrics configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsConfig {
    /// Enables metrics collection.
    pub enabled: bool,
    /// Specifies how often generation is tracked. Default is 1.
    pub track_generation: Option<usize>,
}

/// An environment configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentConfig {
    /// A random seed.
    pub seed: Option<u64>,
    /// Amount of threads used for parallel evaluation. Default is amount of cpus.
    pub threads: Option<usize>,
}

/// Reads config from a json reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<Config, String> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'"))
}

/// Creates a solver configuration: preset values overlaid by configured ones. A preset given
/// explicitly overrides the one from the configuration.
pub fn create_solver_config(config: &Config, preset: Option<SolverPreset>) -> Result<SolverConfig, String> {
    let preset = match (preset, config.preset.as_deref()) {
        (Some(preset), _) => preset,
        (None, Some(name)) => SolverPreset::from_str(name).map_err(|err| err.to_string())?,
        (None, None) => SolverPreset::Default,
    };

    let mut solver_config = SolverConfig::from_preset(preset);

    if let Some(evolution) = &config.evolution {
        configure_from_evolution(&mut solver_config, evolution);
    }

    if let Some(termination) = &config.termination {
        configure_from_termination(&mut solver_config, termination);
    }

    if let Some(penalties) = &config.penalties {
        solver_config.penalties = create_penalty_config(penalties)?;
    }

    if let Some(balance) = config.balance.as_ref().filter(|balance| balance.enabled) {
        let defaults = ImbalanceConfig::default();
        solver_config.imbalance = Some(ImbalanceConfig {
            alpha: balance.alpha.unwrap_or(defaults.alpha),
            beta: balance.beta.unwrap_or(defaults.beta),
            scale: balance.scale.unwrap_or(defaults.scale),
            ..defaults
        });
    }

    Ok(solver_config)
}

fn configure_from_evolution(config: &mut SolverConfig, evolution: &EvolutionConfig) {
    config.population_size = evolution.population_size.unwrap_or(config.population_size);
    config.elite_size = evolution.elite_size.unwrap_or(config.elite_size);
    config.crossover_probability = evolution.crossover_probability.unwrap_or(config.crossover_probability);
    config.mutation_probability = evolution.mutation_probability.unwrap_or(config.mutation_probability);
    config.max_mutation_rate = evolution.max_mutation_rate.unwrap_or(config.max_mutation_rate);
    config.reseed_probability = evolution.reseed_probability.unwrap_or(config.reseed_probability);
    config.reseed_ratio = evolution.reseed_ratio.unwrap_or(config.reseed_ratio);
    config.diversity_sample = evolution.diversity_sample.unwrap_or(config.diversity_sample);
}

fn configure_from_termination(config: &mut SolverConfig, termination: &TerminationConfig) {
    config.max_generations = termination.max_generations.unwrap_or(config.max_generations);
    config.patience = termination.patience.unwrap_or(config.patience);
    config.convergence_threshold = termination.convergence_threshold.unwrap_or(config.convergence_threshold);
    config.target_fitness = termination.target_fitness.unwrap_or(config.target_fitness);
}

fn create_penalty_config(penalties: &PenaltiesConfig) -> Result<PenaltyConfig, String> {
    let defaults = PenaltyConfig::default();
    let get_penalty = |config: &Option<ConstraintConfig>, default: ConstraintPenalty| {
        config
            .as_ref()
            .map_or(default, |config| ConstraintPenalty::new(config.weight, config.tolerance.unwrap_or(0.)))
    };

    let empty_ratio_policy = match penalties.empty_ratio_policy.as_deref() {
        None => defaults.empty_ratio_policy,
        Some("equality") => EmptyRatioPolicy::Equality,
        Some("at-least") => EmptyRatioPolicy::AtLeast,
        Some(other) => return Err(format!("unknown empty ratio policy: '{other}', expected: equality or at-least")),
    };

    Ok(PenaltyConfig {
        demand: get_penalty(&penalties.demand, defaults.demand),
        capacity: get_penalty(&penalties.capacity, defaults.capacity),
        empty_ratio: get_penalty(&penalties.empty_ratio, defaults.empty_ratio),
        empty_ratio_policy,
        flow: get_penalty(&penalties.flow, defaults.flow),
        non_negativity: get_penalty(&penalties.non_negativity, defaults.non_negativity),
    })
}

/// Creates rebalancing constants from configuration.
pub fn create_rebalance_config(config: &Config) -> RebalanceConfig {
    let defaults = RebalanceConfig::default();

    match &config.rebalance {
        Some(rebalance) => RebalanceConfig {
            level_window: rebalance.level_window.unwrap_or(defaults.level_window),
            classification_factor: rebalance.classification_factor.unwrap_or(defaults.classification_factor),
            max_distance: rebalance.max_distance.unwrap_or(defaults.max_distance),
            cost_per_teu_km: rebalance.cost_per_teu_km.unwrap_or(defaults.cost_per_teu_km),
            ..defaults
        },
        None => defaults,
    }
}

/// Creates a telemetry mode from configuration. Logging can be forced on by a command line flag.
pub fn create_telemetry_mode(config: &Config, is_logging_forced: bool, logger: InfoLogger) -> TelemetryMode {
    const LOG_BEST: usize = 10;
    const TRACK_GENERATION: usize = 1;

    let telemetry = config.telemetry.as_ref();
    let logging = telemetry.and_then(|telemetry| telemetry.logging.as_ref());
    let metrics = telemetry.and_then(|telemetry| telemetry.metrics.as_ref()).filter(|metrics| metrics.enabled);

    let log_best = logging.filter(|logging| logging.enabled || is_logging_forced).map(|logging| logging.log_best);
    let log_best = match (log_best, is_logging_forced) {
        (Some(log_best), _) => Some(log_best.unwrap_or(LOG_BEST)),
        (None, true) => Some(LOG_BEST),
        (None, false) => None,
    };
    let track_generation = metrics.map(|metrics| metrics.track_generation.unwrap_or(TRACK_GENERATION));

    match (log_best, track_generation) {
        (Some(log_best), Some(track_generation)) => TelemetryMode::All { logger, log_best, track_generation },
        (Some(log_best), None) => TelemetryMode::OnlyLogging { logger, log_best },
        (None, Some(track_generation)) => TelemetryMode::OnlyMetrics { track_generation },
        (None, None) => TelemetryMode::None,
    }
}
