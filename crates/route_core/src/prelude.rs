//! Re-exports of the most commonly used items in `route_core`.
pub use crate::error::{Endpoint, RouteError, StoreError};
pub use crate::graph::{FlightRoute, RouteGraph};
pub use crate::search::cheapest_route::CheapestRoute;
pub use crate::search::dijkstra::CheapestRouteSearch;
pub use crate::service::{ErrorKind, RouteService, ServiceError};
pub use crate::store::{CsvRouteStore, ProvidesRoutes, RouteStore};
pub use crate::validation::{CheapestRouteRequest, FlightRouteRequest, Validate};

pub use crate::search;
pub use crate::util::cli;
