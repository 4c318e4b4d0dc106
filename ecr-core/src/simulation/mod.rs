//! A container flow simulator which turns an allocation into per-port empty container inventory.

#[cfg(test)]
#[path = "../../tests/unit/simulation/simulate_test.rs"]
mod simulate_test;

use crate::models::{InventoryMatrix, ParameterSet};
use ecr_heuristics::algorithms::math::get_mean_iter;
use ecr_heuristics::prelude::*;

/// Simulates empty container inventory of every port after every schedule.
///
/// Starting from initial inventories, schedules are processed in chronological rank order: the
/// shipped amount (full and empty) is taken from origin port, floored at zero, and added to
/// destination port as full containers become empty on arrival. A row of the result is a snapshot
/// of all port levels after the corresponding sailing. Missing genes are treated as zero.
pub fn simulate(full: &[Float], empty: &[Float], parameters: &ParameterSet) -> InventoryMatrix {
    let mut levels = parameters.initial_inventories();

    parameters
        .rank_order()
        .iter()
        .map(|&idx| {
            let schedule = &parameters.schedules()[idx];
            let shipped = full.get(idx).copied().unwrap_or(0.) + empty.get(idx).copied().unwrap_or(0.);

            levels[schedule.origin] = (levels[schedule.origin] - shipped).max(0.);
            levels[schedule.destination] += shipped;

            levels.clone()
        })
        .collect()
}

/// Returns the last simulated level of every port or initial inventories when there are no rows.
pub fn final_levels(inventory: &InventoryMatrix, parameters: &ParameterSet) -> Vec<Float> {
    inventory.last().cloned().unwrap_or_else(|| parameters.initial_inventories())
}

/// Returns a mean level of every port over the last `window` rows of simulated inventory.
pub fn window_levels(inventory: &InventoryMatrix, parameters: &ParameterSet, window: usize) -> Vec<Float> {
    let window = window.max(1).min(inventory.len());
    if window == 0 {
        return parameters.initial_inventories();
    }

    let rows = &inventory[inventory.len() - window..];

    (0..parameters.ports().len()).map(|port| get_mean_iter(rows.iter().map(|row| row[port]))).collect()
}
