#[cfg(test)]
#[path = "../../tests/unit/rebalancing/paths_test.rs"]
mod paths_test;

use super::*;
use ecr_heuristics::algorithms::assignment::solve_assignment;
use ecr_heuristics::utils::compare_fitness_desc;

/// A repositioning move of empty containers from an excess port to a shortage port.
#[derive(Clone, Debug, PartialEq)]
pub struct RepositioningPath {
    /// An origin (excess) port.
    pub from: String,
    /// A destination (shortage) port.
    pub to: String,
    /// An estimated amount of containers in TEU.
    pub containers: usize,
    /// A distance in km.
    pub distance: Float,
    /// A cost per TEU.
    pub cost: Float,
    /// An estimated transit time in whole days.
    pub transit_days: usize,
    /// A priority, higher is more important.
    pub priority: Float,
}

/// Builds all feasible paths between excess and shortage ports ordered by priority descending.
/// Pairs of the same port, pairs with unknown distance and pairs beyond maximum distance are skipped.
pub fn create_paths(analysis: &ImbalanceAnalysis, network: &PortNetwork, config: &RebalanceConfig) -> Vec<RepositioningPath> {
    let mut paths = analysis
        .excess_ports
        .iter()
        .flat_map(|from| analysis.shortage_ports.iter().map(move |to| (from, to)))
        .filter(|(from, to)| from != to)
        .filter_map(|(from, to)| {
            let distance = network.distance(from, to).filter(|&distance| distance <= config.max_distance)?;

            Some(RepositioningPath {
                from: from.clone(),
                to: to.clone(),
                containers: 0,
                distance,
                cost: get_path_cost(distance, config),
                transit_days: (distance / config.speed_per_day).floor().max(0.) as usize,
                priority: get_path_priority(from, to, distance, network, config),
            })
        })
        .collect::<Vec<_>>();

    // NOTE stable sort keeps excess/shortage order for equal priorities
    paths.sort_by(|a, b| compare_fitness_desc(a.priority, b.priority));

    paths
}

/// Returns a cost per TEU: a weighted blend of distance proportional cost, a fixed urgency cost of
/// the shortage side and a fixed capacity cost.
pub fn get_path_cost(distance: Float, config: &RebalanceConfig) -> Float {
    config.distance_weight * distance * config.cost_per_teu_km
        + config.urgency_weight * config.urgency_cost
        + config.capacity_weight * config.capacity_cost
}

/// Returns a priority as a blend of inverse distance and an average importance of both ports.
pub fn get_path_priority(from: &str, to: &str, distance: Float, network: &PortNetwork, config: &RebalanceConfig) -> Float {
    let distance_score = 1. / (1. + distance / 1000.);
    let importance_score = (network.importance(from) + network.importance(to)) / 2.;

    config.priority_distance_weight * distance_score + config.priority_importance_weight * importance_score
}

/// Estimates amount of containers moved along a path: a base amount reduced for long distances,
/// increased for short ones, bounded by minimum lot size and maximum per path.
pub fn get_path_containers(distance: Float, config: &RebalanceConfig) -> usize {
    let base = config.base_amount as Float;

    let amount = if distance > config.long_distance {
        (base * config.long_distance_factor).floor()
    } else if distance < config.short_distance {
        (base * config.short_distance_factor).floor()
    } else {
        base
    };

    (amount as usize).max(config.min_amount).min(config.max_amount_per_path)
}

/// Selects one path per matched pair of excess and shortage ports using a min cost assignment.
/// Returns selected paths and a flag whether the greedy fallback was used.
pub fn match_paths(paths: &[RepositioningPath], config: &RebalanceConfig) -> (Vec<RepositioningPath>, bool) {
    if paths.is_empty() {
        return (vec![], false);
    }

    let excess_ports = get_unique(paths.iter().map(|path| path.from.as_str()));
    let shortage_ports = get_unique(paths.iter().map(|path| path.to.as_str()));

    let find_path = |from: &str, to: &str| paths.iter().find(|path| path.from == from && path.to == to);

    let matrix = excess_ports
        .iter()
        .map(|from| shortage_ports.iter().map(|to| find_path(*from, *to).map(|path| path.cost)).collect::<Vec<_>>())
        .collect::<Vec<_>>();

    let costs = get_finite_costs(matrix.as_slice());

    let selected = costs.and_then(|costs| solve_assignment(costs.as_slice())).map(|assignment| {
        assignment
            .pairs
            .iter()
            .filter_map(|&(row, col)| find_path(excess_ports[row], shortage_ports[col]))
            .cloned()
            .collect::<Vec<_>>()
    });

    let (selected, is_fallback) = match selected {
        Ok(selected) => (selected, false),
        Err(_) => (paths.iter().take(excess_ports.len()).cloned().collect(), true),
    };

    let selected = selected
        .into_iter()
        .map(|mut path| {
            path.containers = get_path_containers(path.distance, config);
            path
        })
        .collect();

    (selected, is_fallback)
}

/// Replaces missing cells with twice the maximum known cost.
fn get_finite_costs(matrix: &[Vec<Option<Float>>]) -> GenericResult<Vec<Vec<Float>>> {
    let max_cost = matrix
        .iter()
        .flatten()
        .filter_map(|cost| *cost)
        .filter(|cost| cost.is_finite())
        .fold(None, |acc: Option<Float>, cost| Some(acc.map_or(cost, |acc| acc.max(cost))))
        .ok_or_else(|| GenericError::from("cost matrix has no finite costs"))?;

    let penalty = if max_cost > 0. { max_cost * 2. } else { 1. };

    Ok(matrix
        .iter()
        .map(|row| row.iter().map(|cost| cost.filter(|cost| cost.is_finite()).unwrap_or(penalty)).collect())
        .collect())
}

fn get_unique<'a>(ids: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    ids.fold(Vec::new(), |mut acc, id| {
        if !acc.contains(&id) {
            acc.push(id);
        }
        acc
    })
}
