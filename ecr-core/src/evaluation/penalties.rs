#[cfg(test)]
#[path = "../../tests/unit/evaluation/penalties_test.rs"]
mod penalties_test;

use crate::models::{Candidate, InventoryMatrix, ParameterSet};
use ecr_heuristics::prelude::*;

/// A weight and a tolerance of one constraint. A deviation within tolerance is not penalized, a
/// deviation beyond it is penalized proportionally to its absolute value. Zero weight disables
/// the constraint.
#[derive(Clone, Debug, PartialEq)]
pub struct ConstraintPenalty {
    /// A penalty per unit of violation.
    pub weight: Float,
    /// A violation which is tolerated.
    pub tolerance: Float,
}

impl ConstraintPenalty {
    /// Creates a new instance of `ConstraintPenalty`.
    pub fn new(weight: Float, tolerance: Float) -> Self {
        Self { weight, tolerance }
    }

    /// Returns a penalty for given violation amount.
    pub fn apply(&self, violation: Float) -> Float {
        let violation = violation.abs();
        if self.weight == 0. || violation <= self.tolerance { 0. } else { self.weight * violation }
    }
}

/// Specifies how the empty ratio constraint is interpreted.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum EmptyRatioPolicy {
    /// Empty containers on each schedule have to be equal to theta times route capacity.
    #[default]
    Equality,
    /// Empty containers on each schedule have to be at least theta times route capacity.
    AtLeast,
}

/// Penalty weights of all constraints.
#[derive(Clone, Debug, PartialEq)]
pub struct PenaltyConfig {
    /// Route demand equality.
    pub demand: ConstraintPenalty,
    /// Route capacity inequality.
    pub capacity: ConstraintPenalty,
    /// Schedule empty ratio.
    pub empty_ratio: ConstraintPenalty,
    /// Empty ratio interpretation.
    pub empty_ratio_policy: EmptyRatioPolicy,
    /// Flow balance of inventory at sailing endpoints.
    pub flow: ConstraintPenalty,
    /// Negative genes or inventory levels.
    pub non_negativity: ConstraintPenalty,
}

impl Default for PenaltyConfig {
    fn default() -> Self {
        Self {
            demand: ConstraintPenalty::new(500., 0.1),
            capacity: ConstraintPenalty::new(200., 0.),
            empty_ratio: ConstraintPenalty::new(200., 0.1),
            empty_ratio_policy: EmptyRatioPolicy::default(),
            flow: ConstraintPenalty::new(1000., 0.),
            non_negativity: ConstraintPenalty::new(5000., 0.),
        }
    }
}

/// A constraint penalty of a candidate split into its terms.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PenaltyBreakdown {
    /// Demand penalty.
    pub demand: Float,
    /// Capacity penalty.
    pub capacity: Float,
    /// Empty ratio penalty.
    pub empty_ratio: Float,
    /// Flow consistency penalty.
    pub flow: Float,
    /// Non negativity penalty.
    pub non_negativity: Float,
}

impl PenaltyBreakdown {
    /// Calculates penalty terms of given candidate.
    pub fn new(candidate: &Candidate, parameters: &ParameterSet, config: &PenaltyConfig) -> Self {
        Self {
            demand: demand_penalty(candidate, parameters, &config.demand),
            capacity: capacity_penalty(candidate, parameters, &config.capacity),
            empty_ratio: empty_ratio_penalty(candidate, parameters, &config.empty_ratio, config.empty_ratio_policy),
            flow: flow_penalty(candidate, parameters, &config.flow),
            non_negativity: non_negativity_penalty(candidate, &config.non_negativity),
        }
    }

    /// Returns a total penalty.
    pub fn total(&self) -> Float {
        self.demand + self.capacity + self.empty_ratio + self.flow + self.non_negativity
    }
}

fn route_sum<F>(parameters: &ParameterSet, route: usize, value_fn: F) -> Float
where
    F: Fn(usize) -> Float,
{
    parameters.route_schedules(route).iter().map(|&idx| value_fn(idx)).sum()
}

/// Penalizes deviation of route's full containers from route's demand.
pub fn demand_penalty(candidate: &Candidate, parameters: &ParameterSet, penalty: &ConstraintPenalty) -> Float {
    parameters
        .routes()
        .iter()
        .enumerate()
        .map(|(route_idx, route)| {
            let shipped = route_sum(parameters, route_idx, |idx| candidate.full()[idx]);
            penalty.apply(shipped - route.demand)
        })
        .sum()
}

/// Penalizes route's total shipped containers above route's capacity.
pub fn capacity_penalty(candidate: &Candidate, parameters: &ParameterSet, penalty: &ConstraintPenalty) -> Float {
    parameters
        .routes()
        .iter()
        .enumerate()
        .map(|(route_idx, route)| {
            let shipped = route_sum(parameters, route_idx, |idx| candidate.full()[idx] + candidate.empty()[idx]);
            penalty.apply((shipped - route.capacity).max(0.))
        })
        .sum()
}

/// Penalizes deviation of schedule's empty containers from theta times route capacity.
pub fn empty_ratio_penalty(
    candidate: &Candidate,
    parameters: &ParameterSet,
    penalty: &ConstraintPenalty,
    policy: EmptyRatioPolicy,
) -> Float {
    candidate
        .empty()
        .iter()
        .enumerate()
        .map(|(idx, &empty)| {
            let deviation = empty - parameters.expected_empty(idx);
            match policy {
                EmptyRatioPolicy::Equality => penalty.apply(deviation),
                EmptyRatioPolicy::AtLeast => penalty.apply(deviation.min(0.)),
            }
        })
        .sum()
}

/// Penalizes inventory which breaks flow balance at origin or destination of any sailing.
pub fn flow_penalty(candidate: &Candidate, parameters: &ParameterSet, penalty: &ConstraintPenalty) -> Float {
    if penalty.weight == 0. {
        return 0.;
    }

    penalty.apply(get_flow_divergence(candidate.full(), candidate.empty(), candidate.inventory(), parameters))
}

/// Returns total absolute divergence of inventory rows from the flow rule. Every row is checked
/// against the previous one (initial inventories for the first row), the matrix is not simulated.
pub(crate) fn get_flow_divergence(
    full: &[Float],
    empty: &[Float],
    inventory: &InventoryMatrix,
    parameters: &ParameterSet,
) -> Float {
    let initial = parameters.initial_inventories();

    parameters
        .rank_order()
        .iter()
        .zip(inventory.iter())
        .enumerate()
        .map(|(row_idx, (&idx, row))| {
            let previous = if row_idx == 0 { initial.as_slice() } else { inventory[row_idx - 1].as_slice() };
            let schedule = &parameters.schedules()[idx];
            let shipped = full.get(idx).copied().unwrap_or(0.) + empty.get(idx).copied().unwrap_or(0.);
            let (origin, destination) = (schedule.origin, schedule.destination);
            let remaining = (previous[origin] - shipped).max(0.);

            if origin == destination {
                (row[origin] - remaining - shipped).abs()
            } else {
                (row[origin] - remaining).abs() + (row[destination] - previous[destination] - shipped).abs()
            }
        })
        .sum()
}

/// Penalizes negative genes and inventory levels.
pub fn non_negativity_penalty(candidate: &Candidate, penalty: &ConstraintPenalty) -> Float {
    let negative = candidate
        .genes()
        .chain(candidate.inventory().iter().flatten().cloned())
        .filter(|value| *value < 0.)
        .map(|value| value.abs())
        .sum::<Float>();

    penalty.apply(negative)
}
