/// Caller assigned route identifier
pub type RouteId = u32;
/// Cost of a single flight route
pub type Cost = u32;
/// Accumulated cost along a path. Wider than `Cost` so sums over the full route list fit.
pub type TotalCost = u64;

/// Airport codes are IATA style three letter codes
pub const AIRPORT_CODE_LEN: usize = 3;
/// Upper bound for the cost of a single route accepted by the validators
pub const MAX_ROUTE_COST: Cost = 100;
/// Separator used when a path is rendered as text
pub const ROUTE_SEPARATOR: &str = " - ";
