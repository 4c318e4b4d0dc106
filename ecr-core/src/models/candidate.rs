#[cfg(test)]
#[path = "../../tests/unit/models/candidate_test.rs"]
mod candidate_test;

use super::ParameterSet;
use crate::simulation::simulate;
use ecr_heuristics::prelude::*;

/// A simulated empty container inventory: rows are schedules in chronological order, columns are ports.
pub type InventoryMatrix = Vec<Vec<Float>>;

/// A unit of search: amount of full and empty containers shipped on every schedule.
///
/// The inventory matrix is always derived from the allocation by the simulator: there is no way to
/// change the allocation without re-deriving inventory and invalidating fitness.
#[derive(Clone, Debug)]
pub struct Candidate {
    full: Vec<Float>,
    empty: Vec<Float>,
    inventory: InventoryMatrix,
    fitness: Float,
}

impl Candidate {
    /// Creates a new unevaluated candidate. Returns an error if allocation size does not match
    /// amount of schedules.
    pub fn new(full: Vec<Float>, empty: Vec<Float>, parameters: &ParameterSet) -> GenericResult<Self> {
        let size = parameters.schedules().len();
        if full.len() != size || empty.len() != size {
            return Err(format!(
                "allocation size mismatch: expected {size} schedules, got {} full and {} empty",
                full.len(),
                empty.len()
            )
            .into());
        }

        let inventory = simulate(full.as_slice(), empty.as_slice(), parameters);

        Ok(Self { full, empty, inventory, fitness: Float::NEG_INFINITY })
    }

    /// Returns full containers per schedule.
    pub fn full(&self) -> &[Float] {
        self.full.as_slice()
    }

    /// Returns empty containers per schedule.
    pub fn empty(&self) -> &[Float] {
        self.empty.as_slice()
    }

    /// Returns simulated inventory.
    pub fn inventory(&self) -> &InventoryMatrix {
        &self.inventory
    }

    /// Returns fitness, negative infinity means unevaluated candidate.
    pub fn fitness(&self) -> Float {
        self.fitness
    }

    /// Returns true if fitness is known.
    pub fn is_evaluated(&self) -> bool {
        self.fitness != Float::NEG_INFINITY
    }

    /// Changes allocation genes. Inventory is re-derived and fitness is invalidated.
    pub fn modify<F>(&mut self, parameters: &ParameterSet, modify_fn: F)
    where
        F: FnOnce(&mut [Float], &mut [Float]),
    {
        modify_fn(self.full.as_mut_slice(), self.empty.as_mut_slice());
        self.resimulate(parameters);
    }

    /// Returns a position of the candidate in allocation space: full genes followed by empty genes.
    pub fn genes(&self) -> impl Iterator<Item = Float> + '_ {
        self.full.iter().chain(self.empty.iter()).cloned()
    }

    pub(crate) fn set_fitness(&mut self, fitness: Float) {
        self.fitness = fitness;
    }

    /// Creates a candidate from genes which are known to have the right size.
    pub(crate) fn from_genes(full: Vec<Float>, empty: Vec<Float>, parameters: &ParameterSet) -> Self {
        debug_assert_eq!(full.len(), parameters.schedules().len());
        debug_assert_eq!(empty.len(), parameters.schedules().len());

        let inventory = simulate(full.as_slice(), empty.as_slice(), parameters);

        Self { full, empty, inventory, fitness: Float::NEG_INFINITY }
    }

    /// Splits candidate into its genes.
    pub(crate) fn into_genes(self) -> (Vec<Float>, Vec<Float>) {
        (self.full, self.empty)
    }

    fn resimulate(&mut self, parameters: &ParameterSet) {
        self.inventory = simulate(self.full.as_slice(), self.empty.as_slice(), parameters);
        self.fitness = Float::NEG_INFINITY;
    }
}
