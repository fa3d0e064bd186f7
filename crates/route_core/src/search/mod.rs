use rustc_hash::FxHashMap;

use crate::{error::RouteError, graph::FlightRoute, graph::RouteGraph};

use self::cheapest_route::CheapestRoute;
use self::dijkstra::{CheapestRouteSearch, Label};

pub mod cheapest_route;
pub mod dijkstra;

/// Cheapest route from `origin` to `destination` over `routes`.
///
/// The graph is built from scratch for every call, nothing is shared between
/// calls.
pub fn cheapest_route(
    routes: &[FlightRoute],
    origin: &str,
    destination: &str,
) -> Result<CheapestRoute, RouteError> {
    let g = RouteGraph::from_routes(routes.iter().cloned());
    CheapestRouteSearch::new(&g).search(origin, destination)
}

/// Walks the predecessor links back from `target`.
///
/// Returns `None` if `target` was never reached.
pub(crate) fn reconstruct_path(
    target: &str,
    labels: &FxHashMap<&str, Label<'_>>,
) -> Option<CheapestRoute> {
    let total_cost = labels.get(target)?.total_cost?;

    let mut path = vec![target.to_string()];
    let mut previous = labels.get(target)?.predecessor;
    while let Some(prev_airport) = previous {
        path.push(prev_airport.to_string());
        previous = labels.get(prev_airport)?.predecessor;
    }
    path.reverse();
    Some(CheapestRoute::new(path, total_cost))
}
