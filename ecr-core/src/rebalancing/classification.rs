#[cfg(test)]
#[path = "../../tests/unit/rebalancing/classification_test.rs"]
mod classification_test;

use ecr_heuristics::algorithms::math::get_variance_mean;
use ecr_heuristics::prelude::*;

/// A result of port classification by inventory level.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImbalanceAnalysis {
    /// Ports with level above excess threshold.
    pub excess_ports: Vec<String>,
    /// Ports with level below shortage threshold.
    pub shortage_ports: Vec<String>,
    /// Other ports.
    pub balanced_ports: Vec<String>,
    /// A level of every port.
    pub port_levels: Vec<(String, Float)>,
    /// A mean level across ports.
    pub mean: Float,
    /// A standard deviation of levels across ports.
    pub std_dev: Float,
    /// A level above which a port is in excess.
    pub excess_threshold: Float,
    /// A level below which a port is in shortage.
    pub shortage_threshold: Float,
}

impl ImbalanceAnalysis {
    /// Classifies ports as excess (level > mean + factor * std), shortage (level < mean - factor * std)
    /// or balanced.
    pub fn new(port_levels: Vec<(String, Float)>, factor: Float) -> Self {
        let levels = port_levels.iter().map(|(_, level)| *level).collect::<Vec<_>>();
        let (variance, mean) = get_variance_mean(levels.as_slice());
        let std_dev = variance.sqrt();

        let excess_threshold = mean + factor * std_dev;
        let shortage_threshold = mean - factor * std_dev;

        let (mut excess_ports, mut shortage_ports, mut balanced_ports) = (vec![], vec![], vec![]);
        port_levels.iter().for_each(|(port, level)| match *level {
            level if level > excess_threshold => excess_ports.push(port.clone()),
            level if level < shortage_threshold => shortage_ports.push(port.clone()),
            _ => balanced_ports.push(port.clone()),
        });

        Self {
            excess_ports,
            shortage_ports,
            balanced_ports,
            port_levels,
            mean,
            std_dev,
            excess_threshold,
            shortage_threshold,
        }
    }

    /// Returns true if there is nothing to reposition.
    pub fn is_balanced(&self) -> bool {
        self.excess_ports.is_empty() || self.shortage_ports.is_empty()
    }
}
