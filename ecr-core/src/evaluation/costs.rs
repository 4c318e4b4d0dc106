use crate::models::{Candidate, ParameterSet};
use ecr_heuristics::prelude::*;

/// A base cost of a candidate split into its terms.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CostBreakdown {
    /// Shipping cost of full and empty containers.
    pub transport: Float,
    /// Fuel surcharge of full and empty containers.
    pub fuel_surcharge: Float,
    /// Delay penalty of full containers.
    pub delay: Float,
    /// Holding cost of simulated inventory.
    pub holding: Float,
}

impl CostBreakdown {
    /// Calculates cost terms of given candidate.
    pub fn new(candidate: &Candidate, parameters: &ParameterSet) -> Self {
        let costs = parameters.costs();

        let (shipped, delayed) = parameters.schedules().iter().enumerate().fold((0., 0.), |(shipped, delayed), (idx, s)| {
            let full = candidate.full()[idx];
            (shipped + full + candidate.empty()[idx], delayed + s.delay_days * full)
        });

        let holding = if costs.holding_rate == 0. {
            0.
        } else {
            costs.holding_rate * candidate.inventory().iter().flatten().sum::<Float>()
        };

        Self {
            transport: costs.shipping_rate * shipped,
            fuel_surcharge: costs.fuel_surcharge * shipped,
            delay: costs.delay_penalty * delayed,
            holding,
        }
    }

    /// Returns a total cost.
    pub fn total(&self) -> Float {
        self.transport + self.fuel_surcharge + self.delay + self.holding
    }
}
