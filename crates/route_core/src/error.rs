use std::fmt;

use thiserror::Error;

use crate::constants::RouteId;

/// Endpoint of a cheapest route query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Origin,
    Destination,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Origin => write!(f, "Origin"),
            Endpoint::Destination => write!(f, "Destination"),
        }
    }
}

/// Failures of a cheapest route search.
///
/// `NotFound` means the airport does not appear in the route list at all,
/// `Unreachable` means both airports are known but no directed path connects them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("FlightRoute not found with {endpoint}: {airport}")]
    NotFound { endpoint: Endpoint, airport: String },
    #[error("No route found from {origin} to {destination}")]
    Unreachable { origin: String, destination: String },
}

/// Failures of a route store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("FlightRoute not found with id: {0}")]
    RouteNotFound(RouteId),
    #[error("Route with id {0} already exists.")]
    DuplicateRoute(RouteId),
    #[error("Failed to read or write route file: {0}")]
    Csv(#[from] csv::Error),
    #[error("Failed to access route file: {0}")]
    Io(#[from] std::io::Error),
}
