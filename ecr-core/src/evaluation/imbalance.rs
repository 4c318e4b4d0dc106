#[cfg(test)]
#[path = "../../tests/unit/evaluation/imbalance_test.rs"]
mod imbalance_test;

use ecr_heuristics::algorithms::math::{get_gini, get_median, get_variance_mean};
use ecr_heuristics::prelude::*;

/// Configures balance optimization mode: an imbalance penalty of end of horizon port levels is
/// blended with the base cost as `alpha * cost + beta * imbalance`.
#[derive(Clone, Debug, PartialEq)]
pub struct ImbalanceConfig {
    /// A weight of base cost, `alpha + beta` must be one.
    pub alpha: Float,
    /// A weight of imbalance penalty.
    pub beta: Float,
    /// A scale applied to weighted sum of imbalance components.
    pub scale: Float,
    /// A weight of coefficient of variation (variance over squared mean).
    pub variance_weight: Float,
    /// A weight of Gini coefficient.
    pub gini_weight: Float,
    /// A weight of excess/shortage mismatch.
    pub mismatch_weight: Float,
    /// A weight of threshold violations.
    pub threshold_weight: Float,
    /// A weight of redistribution demand.
    pub redistribution_weight: Float,
}

impl Default for ImbalanceConfig {
    fn default() -> Self {
        Self {
            alpha: 0.7,
            beta: 0.3,
            scale: 10_000.,
            variance_weight: 0.3,
            gini_weight: 0.25,
            mismatch_weight: 0.15,
            threshold_weight: 0.2,
            redistribution_weight: 0.1,
        }
    }
}

impl ImbalanceConfig {
    /// Validates configuration.
    pub fn validate(&self) -> GenericResult<()> {
        if self.alpha < 0. || self.beta < 0. || ((self.alpha + self.beta) - 1.).abs() > 1E-6 {
            return Err(format!("alpha and beta must be non-negative and sum to one, got {} and {}", self.alpha, self.beta).into());
        }

        Ok(())
    }
}

/// Components of port level imbalance, each in a relative (dimensionless) scale.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImbalanceComponents {
    /// Variance of levels divided by squared mean.
    pub variance: Float,
    /// Gini coefficient of levels.
    pub gini: Float,
    /// The smaller of total excess above mean and total shortage below mean, relative to total inventory.
    pub mismatch: Float,
    /// Tiered violations of level bands around the mean, averaged per port.
    pub threshold: Float,
    /// Total absolute deviation from the median level, relative to total inventory.
    pub redistribution: Float,
}

impl ImbalanceComponents {
    /// Calculates imbalance components of given port levels.
    pub fn new(levels: &[Float]) -> Self {
        let total = levels.iter().sum::<Float>();
        if levels.len() < 2 || total <= 0. {
            return Self::default();
        }

        let (variance, mean) = get_variance_mean(levels);

        let (excess, shortage) = levels.iter().fold((0., 0.), |(excess, shortage), &level| {
            if level > mean { (excess + level - mean, shortage) } else { (excess, shortage + mean - level) }
        });

        let threshold = levels.iter().map(|&level| get_threshold_violation(level, mean)).sum::<Float>() / levels.len() as Float;

        let median = get_median(levels);
        let redistribution = levels.iter().map(|level| (level - median).abs()).sum::<Float>() / total;

        Self {
            variance: variance / (mean * mean),
            gini: get_gini(levels),
            mismatch: excess.min(shortage) / total,
            threshold,
            redistribution,
        }
    }
}

/// Returns tiered violation of a level: critical bands (below 20% or above 200% of the mean) are
/// weighted higher than normal bands (below 40% or above 160% of the mean).
fn get_threshold_violation(level: Float, mean: Float) -> Float {
    const CRITICAL_WEIGHT: Float = 3.;
    const NORMAL_WEIGHT: Float = 1.;

    let ratio = level / mean;

    match ratio {
        ratio if ratio < 0.2 => CRITICAL_WEIGHT * (0.2 - ratio),
        ratio if ratio > 2.0 => CRITICAL_WEIGHT * (ratio - 2.0),
        ratio if ratio < 0.4 => NORMAL_WEIGHT * (0.4 - ratio),
        ratio if ratio > 1.6 => NORMAL_WEIGHT * (ratio - 1.6),
        _ => 0.,
    }
}

/// Calculates imbalance penalty of given port levels.
pub fn imbalance_penalty(levels: &[Float], config: &ImbalanceConfig) -> Float {
    let components = ImbalanceComponents::new(levels);

    config.scale
        * (config.variance_weight * components.variance
            + config.gini_weight * components.gini
            + config.mismatch_weight * components.mismatch
            + config.threshold_weight * components.threshold
            + config.redistribution_weight * components.redistribution)
}
