use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::constants::TotalCost;
use crate::error::{Endpoint, RouteError};
use crate::graph::RouteGraph;
use crate::search::cheapest_route::CheapestRoute;
use crate::statistics::SearchStats;
use log::{debug, info};
use rustc_hash::FxHashMap;

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Candidate<'a> {
    pub(crate) cost: TotalCost,
    pub(crate) airport: &'a str,
}

impl<'a> Candidate<'a> {
    pub(crate) fn new(cost: TotalCost, airport: &'a str) -> Self {
        Self { cost, airport }
    }
}

impl PartialOrd for Candidate<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: the heap pops the cheapest candidate first, equal costs by airport code.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.airport.cmp(self.airport))
    }
}

/// Search state of a single airport. `total_cost` is `None` while unreached.
#[derive(Debug, Clone, Default)]
pub(crate) struct Label<'a> {
    pub(crate) total_cost: Option<TotalCost>,
    pub(crate) predecessor: Option<&'a str>,
    pub(crate) visited: bool,
}

/// Label setting search for the cheapest route between two airports.
///
/// Among unvisited airports with equal cost the one with the smallest code is
/// settled first, so the reported route is the same on every run.
pub struct CheapestRouteSearch<'a> {
    pub stats: SearchStats,
    g: &'a RouteGraph,
}

impl<'a> CheapestRouteSearch<'a> {
    pub fn new(graph: &'a RouteGraph) -> Self {
        CheapestRouteSearch {
            g: graph,
            stats: SearchStats::default(),
        }
    }

    pub fn search(
        &mut self,
        origin: &str,
        destination: &str,
    ) -> Result<CheapestRoute, RouteError> {
        self.stats.init();
        let g = self.g;

        let Some((origin, _)) = g.edges_out.get_key_value(origin) else {
            return Err(RouteError::NotFound {
                endpoint: Endpoint::Origin,
                airport: origin.to_string(),
            });
        };
        let origin = origin.as_str();

        // Sinks get a label too, otherwise they could never be a destination
        let mut labels: FxHashMap<&'a str, Label<'a>> = g
            .airports()
            .into_iter()
            .map(|airport| (airport, Label::default()))
            .collect();

        if !labels.contains_key(destination) {
            return Err(RouteError::NotFound {
                endpoint: Endpoint::Destination,
                airport: destination.to_string(),
            });
        }

        if let Some(label) = labels.get_mut(origin) {
            label.total_cost = Some(0);
        }

        let mut queue = BinaryHeap::new();
        queue.push(Candidate::new(0, origin));

        // An empty queue means every airport left is unreachable
        while let Some(Candidate { cost, airport }) = queue.pop() {
            let Some(label) = labels.get_mut(airport) else {
                continue;
            };
            // Stale entry of an airport settled earlier
            if label.visited {
                continue;
            }
            label.visited = true;
            self.stats.nodes_settled += 1;

            if airport == destination {
                break;
            }

            for route in g.routes_from(airport) {
                // A path has fewer hops than there are airports and every hop is
                // at most `Cost::MAX`, so a `u64` sum cannot saturate in practice.
                let new_cost = cost.saturating_add(TotalCost::from(route.cost));

                let Some(neighbor) = labels.get_mut(route.destination.as_str()) else {
                    continue;
                };
                if neighbor.total_cost.map_or(true, |current| new_cost < current) {
                    neighbor.total_cost = Some(new_cost);
                    neighbor.predecessor = Some(airport);
                    queue.push(Candidate::new(new_cost, route.destination.as_str()));
                }
            }
        }
        self.stats.finish();

        let route = super::reconstruct_path(destination, &labels).ok_or_else(|| {
            RouteError::Unreachable {
                origin: origin.to_string(),
                destination: destination.to_string(),
            }
        })?;

        debug!("Route found: {:?}", route);
        info!(
            "Route found: {:?}/{} airports settled",
            self.stats.duration.unwrap_or_default(),
            self.stats.nodes_settled
        );

        Ok(route)
    }
}
