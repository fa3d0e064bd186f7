//! Crate to find the cheapest route between two airports.
//!
//! The route network is rebuilt from the given list of flight routes on every
//! query, nothing is cached between queries.
//!
//! # Basic usage
//! ```
//! use route_core::graph::FlightRoute;
//! use route_core::search::cheapest_route;
//!
//! let routes = vec![
//!     FlightRoute::new(1, "GRU", "BRC", 10),
//!     FlightRoute::new(2, "BRC", "SCL", 5),
//!     FlightRoute::new(3, "GRU", "SCL", 20),
//! ];
//!
//! let route = cheapest_route(&routes, "GRU", "SCL").expect("GRU and SCL are connected");
//!
//! assert_eq!(route.description(), "GRU - BRC - SCL");
//! assert_eq!(route.total_cost, 15);
//!```
pub mod constants;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod search;
pub mod service;
pub mod statistics;
pub mod store;
pub mod util;
pub mod validation;
