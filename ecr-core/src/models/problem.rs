#[cfg(test)]
#[path = "../../tests/unit/models/problem_test.rs"]
mod problem_test;

use ecr_heuristics::prelude::*;

/// Represents a port with its initial empty container inventory in TEU.
#[derive(Clone, Debug, PartialEq)]
pub struct Port {
    /// A port id.
    pub id: String,
    /// An initial empty container inventory.
    pub initial_inventory: Float,
}

/// Represents a shipping lane served by one vessel across possibly many sailings.
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    /// A route id.
    pub id: String,
    /// An assigned vessel id, if known.
    pub vessel_id: Option<String>,
    /// Full container demand in TEU which has to be shipped over all route's schedules.
    pub demand: Float,
    /// Capacity of assigned vessel in TEU.
    pub capacity: Float,
}

/// Represents one sailing of a route.
#[derive(Clone, Debug, PartialEq)]
pub struct Schedule {
    /// A schedule id.
    pub id: String,
    /// An index of the route in parameter set.
    pub route: usize,
    /// An index of origin port in parameter set.
    pub origin: usize,
    /// An index of destination port in parameter set.
    pub destination: usize,
    /// A planned departure time in days, defines chronological order of schedules.
    pub departure: Float,
    /// Arrival delay in days, never negative.
    pub delay_days: Float,
}

/// Cost constants used by evaluation.
#[derive(Clone, Debug, PartialEq)]
pub struct CostConstants {
    /// Shipping rate per TEU.
    pub shipping_rate: Float,
    /// Fuel surcharge per TEU.
    pub fuel_surcharge: Float,
    /// Delay penalty per day per full TEU.
    pub delay_penalty: Float,
    /// Holding cost per TEU of simulated inventory.
    pub holding_rate: Float,
    /// A minimum empty to capacity ratio.
    pub theta: Float,
    /// A weight of one TEU in kilograms, used to derive demand from order weight.
    pub weight_per_teu: Float,
}

impl Default for CostConstants {
    fn default() -> Self {
        Self {
            shipping_rate: 1000.,
            fuel_surcharge: 100.,
            delay_penalty: 150.,
            holding_rate: 0.,
            theta: 0.001,
            weight_per_teu: 30_000.,
        }
    }
}

/// An immutable snapshot of ports, routes, schedules and cost constants used by one optimization run.
///
/// Schedules are kept in chronological rank order: a gene index of a candidate is the schedule's
/// position in this collection.
#[derive(Clone, Debug)]
pub struct ParameterSet {
    ports: Vec<Port>,
    routes: Vec<Route>,
    schedules: Vec<Schedule>,
    costs: CostConstants,
    rank_order: Vec<usize>,
    route_schedules: Vec<Vec<usize>>,
    diagnostics: Vec<String>,
}

impl ParameterSet {
    /// Creates a new instance of `ParameterSet`. Returns an error when there are no schedules or
    /// schedules refer to unknown ports or routes.
    pub fn new(
        ports: Vec<Port>,
        routes: Vec<Route>,
        schedules: Vec<Schedule>,
        costs: CostConstants,
    ) -> GenericResult<Self> {
        if schedules.is_empty() {
            return Err("parameter set has no schedules".into());
        }

        if let Some(schedule) = schedules
            .iter()
            .find(|s| s.route >= routes.len() || s.origin >= ports.len() || s.destination >= ports.len())
        {
            return Err(format!("schedule '{}' refers to unknown port or route", schedule.id).into());
        }

        let mut rank_order = (0..schedules.len()).collect::<Vec<_>>();
        // NOTE sort is stable: schedules with the same departure keep their order
        rank_order.sort_by(|&a, &b| compare_floats(schedules[a].departure, schedules[b].departure));

        let route_schedules = schedules.iter().enumerate().fold(vec![Vec::new(); routes.len()], |mut acc, (idx, s)| {
            acc[s.route].push(idx);
            acc
        });

        Ok(Self { ports, routes, schedules, costs, rank_order, route_schedules, diagnostics: vec![] })
    }

    /// Returns a new parameter set with diagnostic messages attached.
    pub fn with_diagnostics(mut self, diagnostics: Vec<String>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Returns ports.
    pub fn ports(&self) -> &[Port] {
        self.ports.as_slice()
    }

    /// Returns routes.
    pub fn routes(&self) -> &[Route] {
        self.routes.as_slice()
    }

    /// Returns schedules.
    pub fn schedules(&self) -> &[Schedule] {
        self.schedules.as_slice()
    }

    /// Returns cost constants.
    pub fn costs(&self) -> &CostConstants {
        &self.costs
    }

    /// Returns schedule indices in chronological order.
    pub fn rank_order(&self) -> &[usize] {
        self.rank_order.as_slice()
    }

    /// Returns indices of schedules which belong to the route with given index.
    pub fn route_schedules(&self, route: usize) -> &[usize] {
        self.route_schedules.get(route).map(|schedules| schedules.as_slice()).unwrap_or(&[])
    }

    /// Returns a route of given schedule.
    pub fn schedule_route(&self, schedule: usize) -> &Route {
        &self.routes[self.schedules[schedule].route]
    }

    /// Returns an expected amount of empty containers on the given schedule: theta times route capacity.
    pub fn expected_empty(&self, schedule: usize) -> Float {
        self.costs.theta * self.schedule_route(schedule).capacity
    }

    /// Returns initial inventories of all ports.
    pub fn initial_inventories(&self) -> Vec<Float> {
        self.ports.iter().map(|port| port.initial_inventory).collect()
    }

    /// Returns diagnostic messages collected while the parameter set was derived from raw data.
    pub fn diagnostics(&self) -> &[String] {
        self.diagnostics.as_slice()
    }
}
