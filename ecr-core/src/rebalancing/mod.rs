//! The rebalancing module computes a plan to reposition empty containers from ports with excess
//! inventory to ports with shortage. It is a downstream consumer of a scored candidate and does
//! not feed back into the search.

#[cfg(test)]
#[path = "../../tests/unit/rebalancing/rebalance_test.rs"]
mod rebalance_test;

mod classification;
pub use self::classification::ImbalanceAnalysis;

mod network;
pub use self::network::{DEFAULT_PORT_IMPORTANCE, PortNetwork};

mod paths;
pub use self::paths::*;

use crate::models::{Candidate, ParameterSet};
use crate::simulation::window_levels;
use ecr_heuristics::prelude::*;
use std::sync::Arc;

/// Rebalancing constants.
#[derive(Clone, Debug, PartialEq)]
pub struct RebalanceConfig {
    /// Amount of last inventory rows averaged to get a port level.
    pub level_window: usize,
    /// A multiplier of standard deviation which defines excess and shortage thresholds.
    pub classification_factor: Float,
    /// A cost per TEU per km.
    pub cost_per_teu_km: Float,
    /// A weight of distance cost in path cost.
    pub distance_weight: Float,
    /// A weight of urgency cost in path cost.
    pub urgency_weight: Float,
    /// A weight of capacity cost in path cost.
    pub capacity_weight: Float,
    /// A fixed urgency cost of a shortage port.
    pub urgency_cost: Float,
    /// A fixed capacity (congestion) cost of a path.
    pub capacity_cost: Float,
    /// A maximum repositioning distance in km.
    pub max_distance: Float,
    /// A weight of inverse distance in path priority.
    pub priority_distance_weight: Float,
    /// A weight of port importance in path priority.
    pub priority_importance_weight: Float,
    /// A base amount of containers moved along a path.
    pub base_amount: usize,
    /// A minimum lot size.
    pub min_amount: usize,
    /// A maximum amount of containers per path.
    pub max_amount_per_path: usize,
    /// A distance above which the amount is reduced.
    pub long_distance: Float,
    /// A factor applied to the base amount for long distances.
    pub long_distance_factor: Float,
    /// A distance below which the amount is increased.
    pub short_distance: Float,
    /// A factor applied to the base amount for short distances.
    pub short_distance_factor: Float,
    /// A distance covered per day in km.
    pub speed_per_day: Float,
}

impl Default for RebalanceConfig {
    fn default() -> Self {
        Self {
            level_window: 5,
            classification_factor: 0.5,
            cost_per_teu_km: 0.1,
            distance_weight: 0.4,
            urgency_weight: 0.3,
            capacity_weight: 0.3,
            urgency_cost: 100.,
            capacity_cost: 50.,
            max_distance: 10_000.,
            priority_distance_weight: 0.6,
            priority_importance_weight: 0.4,
            base_amount: 500,
            min_amount: 100,
            max_amount_per_path: 1000,
            long_distance: 5000.,
            long_distance_factor: 0.7,
            short_distance: 1000.,
            short_distance_factor: 1.3,
            speed_per_day: 500.,
        }
    }
}

/// Aggregated totals of a plan.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlanSummary {
    /// Total containers moved.
    pub total_containers: usize,
    /// Total TEU-km.
    pub total_distance: Float,
    /// Total cost.
    pub total_cost: Float,
    /// Amount of selected paths.
    pub total_paths: usize,
    /// Amount of excess ports.
    pub excess_ports: usize,
    /// Amount of shortage ports.
    pub shortage_ports: usize,
}

/// A repositioning plan.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RebalancePlan {
    /// Port classification.
    pub analysis: ImbalanceAnalysis,
    /// Selected repositioning paths.
    pub paths: Vec<RepositioningPath>,
    /// Plan totals.
    pub summary: PlanSummary,
    /// Human readable recommendations.
    pub recommendations: Vec<String>,
    /// True if assignment failed and paths were selected greedily by priority.
    pub is_fallback: bool,
}

/// Computes repositioning plans for scored candidates. Stateless per call.
pub struct RebalanceOptimizer {
    parameters: Arc<ParameterSet>,
    network: PortNetwork,
    config: RebalanceConfig,
}

impl RebalanceOptimizer {
    /// Creates a new instance of `RebalanceOptimizer`.
    pub fn new(parameters: Arc<ParameterSet>, network: PortNetwork, config: RebalanceConfig) -> Self {
        Self { parameters, network, config }
    }

    /// Classifies ports of the candidate by their inventory level.
    pub fn analyze(&self, candidate: &Candidate) -> ImbalanceAnalysis {
        let levels = window_levels(candidate.inventory(), self.parameters.as_ref(), self.config.level_window);

        let port_levels =
            self.parameters.ports().iter().zip(levels).map(|(port, level)| (port.id.clone(), level)).collect();

        ImbalanceAnalysis::new(port_levels, self.config.classification_factor)
    }

    /// Computes a repositioning plan for the candidate. Returns an empty plan when there are no
    /// excess or no shortage ports.
    pub fn rebalance(&self, candidate: &Candidate) -> RebalancePlan {
        let analysis = self.analyze(candidate);

        if analysis.is_balanced() {
            return create_plan(analysis, vec![], false);
        }

        let paths = create_paths(&analysis, &self.network, &self.config);
        let (selected, is_fallback) = match_paths(paths.as_slice(), &self.config);

        create_plan(analysis, selected, is_fallback)
    }
}

fn create_plan(analysis: ImbalanceAnalysis, paths: Vec<RepositioningPath>, is_fallback: bool) -> RebalancePlan {
    let summary = PlanSummary {
        total_containers: paths.iter().map(|path| path.containers).sum(),
        total_distance: paths.iter().map(|path| path.distance * path.containers as Float).sum(),
        total_cost: paths.iter().map(|path| path.cost * path.containers as Float).sum(),
        total_paths: paths.len(),
        excess_ports: analysis.excess_ports.len(),
        shortage_ports: analysis.shortage_ports.len(),
    };

    let recommendations = create_recommendations(&analysis, paths.as_slice());

    RebalancePlan { analysis, paths, summary, recommendations, is_fallback }
}

fn create_recommendations(analysis: &ImbalanceAnalysis, paths: &[RepositioningPath]) -> Vec<String> {
    let mut recommendations = Vec::new();

    if analysis.is_balanced() {
        recommendations.push("port inventories are balanced, no repositioning needed".to_string());
        return recommendations;
    }

    recommendations.push(format!(
        "use or reposition empty containers from excess ports: {}",
        analysis.excess_ports.join(", ")
    ));
    recommendations.push(format!(
        "prioritize empty container supply to shortage ports: {}",
        analysis.shortage_ports.join(", ")
    ));

    if paths.is_empty() {
        recommendations.push("no feasible repositioning path within maximum distance".to_string());
        return recommendations;
    }

    let size = paths.len() as Float;
    let avg_cost = paths.iter().map(|path| path.cost).sum::<Float>() / size;
    let avg_days = paths.iter().map(|path| path.transit_days as Float).sum::<Float>() / size;

    recommendations.push(format!("average repositioning cost: {avg_cost:.2} per TEU, prefer cost efficient paths"));
    recommendations.push(format!("average transit time: {avg_days:.1} days, prefer short paths for urgent needs"));

    recommendations
}
