//! Contains json problem and result formats.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/formats_test.rs"]
mod formats_test;

use ecr_core::prelude::*;
use ecr_core::rebalancing::RepositioningPath;
use serde::{Deserialize, Serialize};
use std::io::{BufReader, BufWriter, Read, Write};

/// A problem definition: raw records of ports, vessels, routes and schedules.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    /// Ports.
    pub ports: Vec<PortDef>,
    /// Vessels.
    #[serde(default)]
    pub vessels: Vec<VesselDef>,
    /// Routes.
    #[serde(default)]
    pub routes: Vec<RouteDef>,
    /// Schedules.
    pub schedules: Vec<ScheduleDef>,
    /// Cost constants, defaults are used for missing values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub costs: Option<CostsDef>,
    /// A port network. A built-in major ports network is used when it is not specified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<NetworkDef>,
}

/// A port definition.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortDef {
    /// A port id.
    pub id: String,
    /// An initial empty container inventory, TEU.
    pub initial_inventory: f64,
}

/// A vessel definition.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VesselDef {
    /// A vessel id.
    pub id: String,
    /// A capacity, TEU.
    pub capacity: f64,
}

/// A route definition.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDef {
    /// A route id.
    pub id: String,
    /// An assigned vessel id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vessel_id: Option<String>,
    /// A total order weight, kg.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_weight: Option<f64>,
}

/// A schedule definition, times are in days.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDef {
    /// A schedule id.
    pub id: String,
    /// A route id.
    pub route_id: String,
    /// An origin port id.
    pub origin: String,
    /// A destination port id.
    pub destination: String,
    /// A planned departure.
    pub departure: f64,
    /// A planned arrival.
    pub planned_arrival: f64,
    /// An actual arrival.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_arrival: Option<f64>,
}

/// Cost constants definition.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostsDef {
    /// Shipping rate per TEU.
    pub shipping_rate: Option<f64>,
    /// Fuel surcharge per TEU.
    pub fuel_surcharge: Option<f64>,
    /// Delay penalty per day per full TEU.
    pub delay_penalty: Option<f64>,
    /// Holding cost per TEU.
    pub holding_rate: Option<f64>,
    /// A minimum empty to capacity ratio.
    pub theta: Option<f64>,
    /// A weight of one TEU, kg.
    pub weight_per_teu: Option<f64>,
}

/// A port network definition.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkDef {
    /// Symmetric distances between ports, km.
    #[serde(default)]
    pub distances: Vec<DistanceDef>,
    /// Port importance in `[0, 1]` range.
    #[serde(default)]
    pub importance: Vec<ImportanceDef>,
}

/// A distance between two ports.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DistanceDef {
    /// A first port.
    pub from: String,
    /// A second port.
    pub to: String,
    /// A distance, km.
    pub distance: f64,
}

/// An importance of a port.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ImportanceDef {
    /// A port id.
    pub port: String,
    /// An importance value.
    pub value: f64,
}

/// Reads a problem from json and derives parameter set and port network.
pub fn read_problem<R: Read>(reader: BufReader<R>) -> Result<(ParameterSet, PortNetwork), String> {
    let problem: Problem =
        serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize problem: '{err}'"))?;

    map_problem(problem)
}

/// Maps problem definition to parameter set and port network.
pub fn map_problem(problem: Problem) -> Result<(ParameterSet, PortNetwork), String> {
    let mut builder = ParameterSetBuilder::default();

    problem.ports.into_iter().for_each(|port| {
        builder.add_port(PortRow { id: port.id, initial_inventory: port.initial_inventory });
    });
    problem.vessels.into_iter().for_each(|vessel| {
        builder.add_vessel(VesselRow { id: vessel.id, capacity: vessel.capacity });
    });
    problem.routes.into_iter().for_each(|route| {
        builder.add_route(RouteRow { id: route.id, vessel_id: route.vessel_id, order_weight: route.order_weight });
    });
    problem.schedules.into_iter().for_each(|schedule| {
        builder.add_schedule(ScheduleRow {
            id: schedule.id,
            route_id: schedule.route_id,
            origin_id: schedule.origin,
            destination_id: schedule.destination,
            departure: schedule.departure,
            planned_arrival: schedule.planned_arrival,
            actual_arrival: schedule.actual_arrival,
        });
    });

    if let Some(costs) = problem.costs {
        let defaults = CostConstants::default();
        builder.with_costs(CostConstants {
            shipping_rate: costs.shipping_rate.unwrap_or(defaults.shipping_rate),
            fuel_surcharge: costs.fuel_surcharge.unwrap_or(defaults.fuel_surcharge),
            delay_penalty: costs.delay_penalty.unwrap_or(defaults.delay_penalty),
            holding_rate: costs.holding_rate.unwrap_or(defaults.holding_rate),
            theta: costs.theta.unwrap_or(defaults.theta),
            weight_per_teu: costs.weight_per_teu.unwrap_or(defaults.weight_per_teu),
        });
    }

    let parameters = builder.build().map_err(|err| format!("cannot create parameters: '{err}'"))?;

    let network = match problem.network {
        Some(network) => {
            let mut result = PortNetwork::default();
            network.distances.iter().for_each(|def| {
                result.add_distance(def.from.as_str(), def.to.as_str(), def.distance);
            });
            network.importance.iter().for_each(|def| {
                result.set_importance(def.port.as_str(), def.value);
            });
            result
        }
        None => PortNetwork::major_ports(),
    };

    Ok((parameters, network))
}

/// A result of the solve command.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveResult {
    /// The best candidate.
    pub best: CandidateResult,
    /// The best fitness of every generation.
    pub history: Vec<f64>,
    /// Amount of generations run.
    pub generations: usize,
    /// A termination reason.
    pub reason: String,
    /// A cost and penalty breakdown of the best candidate.
    pub breakdown: BreakdownResult,
    /// A repositioning plan of the best candidate.
    pub plan: PlanResult,
    /// Messages about substituted defaults in the problem.
    pub diagnostics: Vec<String>,
    /// Telemetry metrics, if collected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<MetricsResult>,
}

/// A candidate allocation.
#[derive(Clone, Debug, Serialize)]
pub struct CandidateResult {
    /// Schedule ids in chronological order.
    pub schedules: Vec<String>,
    /// Full containers per schedule.
    #[serde(rename = "xF")]
    pub full: Vec<f64>,
    /// Empty containers per schedule.
    #[serde(rename = "xE")]
    pub empty: Vec<f64>,
    /// Port ids.
    pub ports: Vec<String>,
    /// Simulated inventory: a row per schedule, a column per port.
    #[serde(rename = "y")]
    pub inventory: Vec<Vec<f64>>,
    /// A fitness.
    pub fitness: f64,
}

/// A fitness breakdown.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownResult {
    /// Transport cost.
    pub transport: f64,
    /// Fuel surcharge.
    pub fuel_surcharge: f64,
    /// Delay cost.
    pub delay: f64,
    /// Holding cost.
    pub holding: f64,
    /// Total base cost.
    pub base_cost: f64,
    /// Demand penalty.
    pub demand_penalty: f64,
    /// Capacity penalty.
    pub capacity_penalty: f64,
    /// Empty ratio penalty.
    pub empty_ratio_penalty: f64,
    /// Flow consistency penalty.
    pub flow_penalty: f64,
    /// Non negativity penalty.
    pub non_negativity_penalty: f64,
    /// Total constraint penalty.
    pub constraint_penalty: f64,
    /// Imbalance penalty.
    pub imbalance_penalty: f64,
    /// Weighted objective.
    pub weighted_objective: f64,
    /// A final fitness.
    pub fitness: f64,
}

/// A repositioning plan.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanResult {
    /// Excess ports.
    pub excess_ports: Vec<String>,
    /// Shortage ports.
    pub shortage_ports: Vec<String>,
    /// Balanced ports.
    pub balanced_ports: Vec<String>,
    /// Selected paths.
    pub paths: Vec<PathResult>,
    /// Total containers moved.
    pub total_containers: usize,
    /// Total TEU-km.
    pub total_distance: f64,
    /// Total cost.
    pub total_cost: f64,
    /// True if greedy fallback was used.
    pub is_fallback: bool,
    /// Recommendations.
    pub recommendations: Vec<String>,
}

/// A repositioning path.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathResult {
    /// An origin port.
    pub from: String,
    /// A destination port.
    pub to: String,
    /// Containers moved.
    pub containers: usize,
    /// A distance, km.
    pub distance: f64,
    /// A cost per TEU.
    pub cost: f64,
    /// Transit days.
    pub transit_days: usize,
    /// A priority.
    pub priority: f64,
}

/// Collected metrics.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsResult {
    /// Duration in seconds.
    pub duration: usize,
    /// Speed, generations per second.
    pub speed: f64,
    /// Tracked generations.
    pub evolution: Vec<GenerationResult>,
}

/// A tracked generation.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    /// A generation number.
    pub number: usize,
    /// Time since start, seconds.
    pub timestamp: f64,
    /// The best fitness.
    pub best_fitness: f64,
    /// Diversity.
    pub diversity: f64,
    /// Mutation rate.
    pub mutation_rate: f64,
    /// True if generation improved the best fitness.
    pub is_improvement: bool,
}

/// Creates a serializable result of the solve command.
pub fn create_solve_result(
    parameters: &ParameterSet,
    result: SearchResult,
    breakdown: &FitnessBreakdown,
    plan: &RebalancePlan,
) -> SolveResult {
    let SearchResult { best, history, generations, reason, metrics } = result;

    SolveResult {
        best: CandidateResult {
            schedules: parameters.schedules().iter().map(|schedule| schedule.id.clone()).collect(),
            full: best.full().to_vec(),
            empty: best.empty().to_vec(),
            ports: parameters.ports().iter().map(|port| port.id.clone()).collect(),
            inventory: best.inventory().clone(),
            fitness: best.fitness(),
        },
        history,
        generations,
        reason: reason.to_string(),
        breakdown: create_breakdown_result(breakdown),
        plan: create_plan_result(plan),
        diagnostics: parameters.diagnostics().to_vec(),
        metrics: metrics.map(create_metrics_result),
    }
}

fn create_breakdown_result(breakdown: &FitnessBreakdown) -> BreakdownResult {
    BreakdownResult {
        transport: breakdown.cost.transport,
        fuel_surcharge: breakdown.cost.fuel_surcharge,
        delay: breakdown.cost.delay,
        holding: breakdown.cost.holding,
        base_cost: breakdown.base_cost,
        demand_penalty: breakdown.penalty.demand,
        capacity_penalty: breakdown.penalty.capacity,
        empty_ratio_penalty: breakdown.penalty.empty_ratio,
        flow_penalty: breakdown.penalty.flow,
        non_negativity_penalty: breakdown.penalty.non_negativity,
        constraint_penalty: breakdown.constraint_penalty,
        imbalance_penalty: breakdown.imbalance_penalty,
        weighted_objective: breakdown.weighted_objective,
        fitness: breakdown.fitness,
    }
}

fn create_plan_result(plan: &RebalancePlan) -> PlanResult {
    let create_path = |path: &RepositioningPath| PathResult {
        from: path.from.clone(),
        to: path.to.clone(),
        containers: path.containers,
        distance: path.distance,
        cost: path.cost,
        transit_days: path.transit_days,
        priority: path.priority,
    };

    PlanResult {
        excess_ports: plan.analysis.excess_ports.clone(),
        shortage_ports: plan.analysis.shortage_ports.clone(),
        balanced_ports: plan.analysis.balanced_ports.clone(),
        paths: plan.paths.iter().map(create_path).collect(),
        total_containers: plan.summary.total_containers,
        total_distance: plan.summary.total_distance,
        total_cost: plan.summary.total_cost,
        is_fallback: plan.is_fallback,
        recommendations: plan.recommendations.clone(),
    }
}

fn create_metrics_result(metrics: TelemetryMetrics) -> MetricsResult {
    MetricsResult {
        duration: metrics.duration,
        speed: metrics.speed,
        evolution: metrics
            .evolution
            .into_iter()
            .map(|generation| GenerationResult {
                number: generation.number,
                timestamp: generation.timestamp,
                best_fitness: generation.best_fitness,
                diversity: generation.diversity,
                mutation_rate: generation.mutation_rate,
                is_improvement: generation.is_improvement,
            })
            .collect(),
    }
}

/// Writes solve result as pretty printed json.
pub fn write_solve_result<W: Write>(writer: BufWriter<W>, result: &SolveResult) -> Result<(), String> {
    let mut writer = writer;
    serde_json::to_writer_pretty(&mut writer, result).map_err(|err| format!("cannot serialize result: '{err}'"))?;

    writer.flush().map_err(|err| format!("cannot write result: '{err}'"))
}
