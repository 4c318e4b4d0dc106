#[cfg(test)]
#[path = "../../tests/unit/models/builder_test.rs"]
mod builder_test;

use super::*;
use ecr_heuristics::prelude::*;
use rustc_hash::FxHashMap;

/// A capacity used when route's vessel is unknown.
pub const FALLBACK_CAPACITY: Float = 10_000.;

/// A demand used when route's order weight is unknown or the route itself is missing.
pub const FALLBACK_DEMAND: Float = 1.;

/// A raw port record.
#[derive(Clone, Debug)]
pub struct PortRow {
    /// A port id.
    pub id: String,
    /// An initial empty container inventory in TEU.
    pub initial_inventory: Float,
}

/// A raw vessel record.
#[derive(Clone, Debug)]
pub struct VesselRow {
    /// A vessel id.
    pub id: String,
    /// A vessel capacity in TEU.
    pub capacity: Float,
}

/// A raw route record.
#[derive(Clone, Debug)]
pub struct RouteRow {
    /// A route id.
    pub id: String,
    /// An assigned vessel id.
    pub vessel_id: Option<String>,
    /// A total order weight in kilograms.
    pub order_weight: Option<Float>,
}

/// A raw schedule record. All times are in days.
#[derive(Clone, Debug)]
pub struct ScheduleRow {
    /// A schedule id.
    pub id: String,
    /// A route id.
    pub route_id: String,
    /// An origin port id.
    pub origin_id: String,
    /// A destination port id.
    pub destination_id: String,
    /// A planned departure time.
    pub departure: Float,
    /// A planned arrival time.
    pub planned_arrival: Float,
    /// An actual (delayed) arrival time, if known.
    pub actual_arrival: Option<Float>,
}

/// Derives an immutable `ParameterSet` from raw records. Malformed records never fail the build:
/// a documented default is used instead and a diagnostic message is recorded.
#[derive(Default)]
pub struct ParameterSetBuilder {
    ports: Vec<PortRow>,
    vessels: Vec<VesselRow>,
    routes: Vec<RouteRow>,
    schedules: Vec<ScheduleRow>,
    costs: Option<CostConstants>,
}

impl ParameterSetBuilder {
    /// Adds a port.
    pub fn add_port(&mut self, port: PortRow) -> &mut Self {
        self.ports.push(port);
        self
    }

    /// Adds a vessel.
    pub fn add_vessel(&mut self, vessel: VesselRow) -> &mut Self {
        self.vessels.push(vessel);
        self
    }

    /// Adds a route.
    pub fn add_route(&mut self, route: RouteRow) -> &mut Self {
        self.routes.push(route);
        self
    }

    /// Adds a schedule.
    pub fn add_schedule(&mut self, schedule: ScheduleRow) -> &mut Self {
        self.schedules.push(schedule);
        self
    }

    /// Sets cost constants. Default is `CostConstants::default()`.
    pub fn with_costs(&mut self, costs: CostConstants) -> &mut Self {
        self.costs = Some(costs);
        self
    }

    /// Builds a parameter set. Fails only when there are no schedules.
    pub fn build(&self) -> GenericResult<ParameterSet> {
        if self.schedules.is_empty() {
            return Err("cannot build parameter set without schedules".into());
        }

        let mut diagnostics = Vec::new();
        let mut costs = self.costs.clone().unwrap_or_default();
        if !(costs.weight_per_teu.is_finite() && costs.weight_per_teu > 0.) {
            let fallback = CostConstants::default().weight_per_teu;
            diagnostics.push(format!("weight per TEU must be positive, {fallback} is used"));
            costs.weight_per_teu = fallback;
        }

        let mut ports = Vec::<Port>::new();
        let mut port_index = FxHashMap::<String, usize>::default();
        self.ports.iter().for_each(|row| {
            if port_index.contains_key(&row.id) {
                diagnostics.push(format!("duplicate port '{}' is ignored", row.id));
                return;
            }

            if row.initial_inventory < 0. || !row.initial_inventory.is_finite() {
                diagnostics.push(format!("port '{}' has invalid initial inventory, zero is used", row.id));
            }

            let initial_inventory = if row.initial_inventory.is_finite() { row.initial_inventory.max(0.) } else { 0. };
            port_index.insert(row.id.clone(), ports.len());
            ports.push(Port { id: row.id.clone(), initial_inventory });
        });

        let vessels = self.vessels.iter().map(|row| (row.id.as_str(), row.capacity)).collect::<FxHashMap<_, _>>();

        let mut routes = Vec::<Route>::new();
        let mut route_index = FxHashMap::<String, usize>::default();
        self.routes.iter().for_each(|row| {
            if route_index.contains_key(&row.id) {
                diagnostics.push(format!("duplicate route '{}' is ignored", row.id));
                return;
            }

            let capacity = match row.vessel_id.as_deref().and_then(|id| vessels.get(id)) {
                Some(&capacity) if capacity.is_finite() && capacity >= 0. => capacity,
                _ => {
                    diagnostics.push(format!(
                        "route '{}' has no known vessel capacity, {FALLBACK_CAPACITY} is used",
                        row.id
                    ));
                    FALLBACK_CAPACITY
                }
            };

            let demand = match row.order_weight {
                Some(weight) if weight > 0. && weight.is_finite() => {
                    (weight / costs.weight_per_teu).ceil().max(FALLBACK_DEMAND)
                }
                _ => {
                    diagnostics.push(format!("route '{}' has no order weight, {FALLBACK_DEMAND} is used", row.id));
                    FALLBACK_DEMAND
                }
            };

            route_index.insert(row.id.clone(), routes.len());
            routes.push(Route { id: row.id.clone(), vessel_id: row.vessel_id.clone(), demand, capacity });
        });

        let mut get_port = |id: &str, diagnostics: &mut Vec<String>| {
            *port_index.entry(id.to_string()).or_insert_with(|| {
                diagnostics.push(format!("unknown port '{id}' is registered with zero inventory"));
                ports.push(Port { id: id.to_string(), initial_inventory: 0. });
                ports.len() - 1
            })
        };

        let mut ordered = self.schedules.iter().collect::<Vec<_>>();
        // NOTE sort is stable: ties keep input order
        ordered.sort_by(|a, b| compare_floats(a.departure, b.departure));

        let schedules = ordered
            .into_iter()
            .map(|row| {
                let route = *route_index.entry(row.route_id.clone()).or_insert_with(|| {
                    diagnostics.push(format!(
                        "schedule '{}' refers to unknown route '{}', an implicit route is created",
                        row.id, row.route_id
                    ));
                    routes.push(Route {
                        id: row.route_id.clone(),
                        vessel_id: None,
                        demand: FALLBACK_DEMAND,
                        capacity: FALLBACK_CAPACITY,
                    });
                    routes.len() - 1
                });

                let origin = get_port(row.origin_id.as_str(), &mut diagnostics);
                let destination = get_port(row.destination_id.as_str(), &mut diagnostics);

                let delay_days = row
                    .actual_arrival
                    .filter(|actual| actual.is_finite())
                    .map_or(0., |actual| (actual - row.planned_arrival).floor().max(0.));

                Schedule { id: row.id.clone(), route, origin, destination, departure: row.departure, delay_days }
            })
            .collect::<Vec<_>>();

        Ok(ParameterSet::new(ports, routes, schedules, costs)?.with_diagnostics(diagnostics))
    }
}
