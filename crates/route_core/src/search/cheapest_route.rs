use serde::{Deserialize, Serialize};

use crate::constants::{TotalCost, ROUTE_SEPARATOR};

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct CheapestRoute {
    pub airports: Vec<String>,
    pub total_cost: TotalCost,
}

impl CheapestRoute {
    pub fn new(airports: Vec<String>, total_cost: TotalCost) -> Self {
        CheapestRoute {
            airports,
            total_cost,
        }
    }

    /// Airports in travel order, e.g. `GRU - BRC - SCL`
    pub fn description(&self) -> String {
        self.airports.join(ROUTE_SEPARATOR)
    }
}
