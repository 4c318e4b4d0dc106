#[cfg(test)]
#[path = "../../tests/unit/rebalancing/network_test.rs"]
mod network_test;

use ecr_heuristics::prelude::*;
use rustc_hash::FxHashMap;

/// An importance of a port which is not specified explicitly.
pub const DEFAULT_PORT_IMPORTANCE: Float = 0.5;

/// Keeps symmetric inter-port distances (km) and static port importance in `[0, 1]` range.
#[derive(Clone, Debug, Default)]
pub struct PortNetwork {
    distances: FxHashMap<(String, String), Float>,
    importance: FxHashMap<String, Float>,
}

impl PortNetwork {
    /// Adds a symmetric distance between two ports.
    pub fn add_distance(&mut self, from: &str, to: &str, distance: Float) -> &mut Self {
        self.distances.insert(Self::key(from, to), distance);
        self
    }

    /// Sets port importance.
    pub fn set_importance(&mut self, port: &str, importance: Float) -> &mut Self {
        self.importance.insert(port.to_string(), importance);
        self
    }

    /// Returns a distance between two ports: zero for the same port, none if unknown.
    pub fn distance(&self, from: &str, to: &str) -> Option<Float> {
        if from == to {
            return Some(0.);
        }

        self.distances.get(&Self::key(from, to)).copied()
    }

    /// Returns port importance or a default one.
    pub fn importance(&self, port: &str) -> Float {
        self.importance.get(port).copied().unwrap_or(DEFAULT_PORT_IMPORTANCE)
    }

    /// Returns true if network has no distances.
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Creates a network of major ports served by trans-pacific and north american lanes.
    pub fn major_ports() -> Self {
        const DISTANCES: &[(&str, &str, Float)] = &[
            ("BUSAN", "LONG BEACH", 9500.),
            ("BUSAN", "NEW YORK", 11000.),
            ("BUSAN", "SAVANNAH", 12000.),
            ("BUSAN", "HOUSTON", 11500.),
            ("BUSAN", "MOBILE", 11800.),
            ("BUSAN", "SEATTLE", 7500.),
            ("LONG BEACH", "NEW YORK", 4200.),
            ("LONG BEACH", "SAVANNAH", 3800.),
            ("LONG BEACH", "HOUSTON", 2200.),
            ("LONG BEACH", "MOBILE", 2800.),
            ("LONG BEACH", "SEATTLE", 1800.),
            ("NEW YORK", "SAVANNAH", 1200.),
            ("NEW YORK", "HOUSTON", 2100.),
            ("NEW YORK", "MOBILE", 1800.),
            ("NEW YORK", "SEATTLE", 4000.),
            ("SAVANNAH", "HOUSTON", 1400.),
            ("SAVANNAH", "MOBILE", 800.),
            ("SAVANNAH", "SEATTLE", 4200.),
            ("HOUSTON", "MOBILE", 600.),
            ("HOUSTON", "SEATTLE", 3200.),
            ("MOBILE", "SEATTLE", 3800.),
        ];

        const IMPORTANCE: &[(&str, Float)] = &[
            ("BUSAN", 0.9),
            ("LONG BEACH", 0.8),
            ("NEW YORK", 0.9),
            ("SAVANNAH", 0.7),
            ("HOUSTON", 0.8),
            ("MOBILE", 0.6),
            ("SEATTLE", 0.7),
        ];

        let mut network = Self::default();
        DISTANCES.iter().for_each(|&(from, to, distance)| {
            network.add_distance(from, to, distance);
        });
        IMPORTANCE.iter().for_each(|&(port, importance)| {
            network.set_importance(port, importance);
        });

        network
    }

    fn key(from: &str, to: &str) -> (String, String) {
        if from <= to { (from.to_string(), to.to_string()) } else { (to.to_string(), from.to_string()) }
    }
}
