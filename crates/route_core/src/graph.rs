use crate::constants::{Cost, RouteId};
use anyhow::Context;
use log::info;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, path::Path};

/// Directed flight connection between two airports
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct FlightRoute {
    pub id: RouteId,
    pub origin: String,
    pub destination: String,
    pub cost: Cost,
}

impl FlightRoute {
    pub fn new(
        id: RouteId,
        origin: impl Into<String>,
        destination: impl Into<String>,
        cost: Cost,
    ) -> Self {
        FlightRoute {
            id,
            origin: origin.into(),
            destination: destination.into(),
            cost,
        }
    }
}

/// Adjacency structure over airport codes.
///
/// Routes are grouped by their origin, the order of the input is kept inside
/// every group. Duplicate routes, parallel routes and self loops are kept as
/// distinct edges.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    pub edges_out: FxHashMap<String, Vec<FlightRoute>>,
    num_routes: usize,
}

impl RouteGraph {
    pub fn new() -> Self {
        Self {
            edges_out: FxHashMap::default(),
            num_routes: 0,
        }
    }

    /// Build a graph from a list of routes.
    pub fn from_routes<I>(routes: I) -> Self
    where
        I: IntoIterator<Item = FlightRoute>,
    {
        let mut g = RouteGraph::new();
        for route in routes {
            g.add_route(route);
        }
        g
    }

    pub fn add_route(&mut self, route: FlightRoute) {
        self.edges_out
            .entry(route.origin.clone())
            .or_default()
            .push(route);
        self.num_routes += 1;
    }

    /// Outgoing routes of `airport`. Empty for sinks and unknown airports.
    pub fn routes_from(&self, airport: &str) -> &[FlightRoute] {
        self.edges_out
            .get(airport)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// True if at least one route starts at `airport`
    pub fn has_outgoing(&self, airport: &str) -> bool {
        self.edges_out.contains_key(airport)
    }

    /// All airports that appear as origin or destination, sorted by code.
    pub fn airports(&self) -> BTreeSet<&str> {
        let mut airports: BTreeSet<&str> = self.edges_out.keys().map(String::as_str).collect();
        for route in self.routes() {
            airports.insert(route.destination.as_str());
        }
        airports
    }

    /// Returns an iterator over all routes of the graph
    pub fn routes(&self) -> impl Iterator<Item = &FlightRoute> {
        self.edges_out.values().flatten()
    }

    pub fn num_airports(&self) -> usize {
        self.airports().len()
    }

    pub fn num_routes(&self) -> usize {
        self.num_routes
    }

    pub fn print_info(&self) {
        println!(
            "RouteGraph:\t#Airports: {}, #Routes: {}",
            self.num_airports(),
            self.num_routes()
        );
    }

    /// Reads routes from a csv file with the header `id,origin,destination,cost`
    pub fn from_csv(path_to_routes: &Path) -> anyhow::Result<Self> {
        info!("Reading routes from {:?}", path_to_routes);

        let mut g = RouteGraph::new();
        let mut reader = csv::Reader::from_path(path_to_routes)
            .with_context(|| format!("Could not open {:?}", path_to_routes))?;
        for result in reader.deserialize() {
            let route: FlightRoute = result.context("Failed to parse FlightRoute")?;
            g.add_route(route);
        }

        info!(
            "Graph has {} airports and {} routes",
            g.num_airports(),
            g.num_routes()
        );
        Ok(g)
    }
}

/// Macro to create a flight route
///
/// route!(1, "GRU" => "BRC", 10)
#[macro_export]
macro_rules! route {
    ($id:expr, $origin:expr => $destination:expr, $cost:expr) => {
        $crate::graph::FlightRoute::new($id, $origin, $destination, $cost)
    };
}
