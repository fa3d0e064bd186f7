use std::{
    fmt::Display,
    time::{Duration, Instant},
};

use crate::graph::RouteGraph;

#[derive(Debug, Default)]
pub struct SearchStats {
    pub nodes_settled: usize,
    pub duration: Option<Duration>,
    start_time: Option<Instant>,
}

impl SearchStats {
    pub fn init(&mut self) {
        self.nodes_settled = 0;
        self.duration = None;
        self.start_timer();
    }

    fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn finish(&mut self) {
        if let Some(start_time) = self.start_time {
            self.duration = Some(start_time.elapsed());
        }
    }
}

impl Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Stats: {} airports settled in {:?}",
            self.nodes_settled,
            self.duration.unwrap_or_default()
        )
    }
}

/// Number of outgoing routes per airport, sinks included with degree 0
pub fn out_degrees(g: &RouteGraph) -> Vec<(&str, usize)> {
    g.airports()
        .into_iter()
        .map(|airport| (airport, g.routes_from(airport).len()))
        .collect()
}

pub fn average_out_degree(g: &RouteGraph) -> f64 {
    let num_airports = g.num_airports();
    if num_airports == 0 {
        return 0.0;
    }
    g.num_routes() as f64 / num_airports as f64
}

/// Airports with the most outgoing routes, ties by code
pub fn busiest_airports(g: &RouteGraph, n: usize) -> Vec<(&str, usize)> {
    let mut degrees = out_degrees(g);
    degrees.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    degrees.truncate(n);
    degrees
}

#[cfg(test)]
mod tests {
    use crate::{
        graph::RouteGraph,
        search::dijkstra::CheapestRouteSearch,
        statistics::{average_out_degree, busiest_airports, out_degrees},
        util::test_graphs::sample_routes,
    };

    #[test]
    fn stats_work() {
        let g = RouteGraph::from_routes(sample_routes());

        let mut search = CheapestRouteSearch::new(&g);
        search.search("BRC", "SCL").unwrap();

        assert!(search.stats.duration.is_some());
        assert_eq!(search.stats.nodes_settled, 2);
        assert!(search.stats.to_string().starts_with("Stats: 2 airports settled"));
    }

    #[test]
    fn degrees() {
        let g = RouteGraph::from_routes(sample_routes());

        assert_eq!(
            out_degrees(&g),
            vec![("BRC", 1), ("CDG", 0), ("GRU", 4), ("ORL", 1), ("SCL", 1)]
        );
        assert_eq!(busiest_airports(&g, 2), vec![("GRU", 4), ("BRC", 1)]);
        assert!((average_out_degree(&g) - 7.0 / 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_graph() {
        let g = RouteGraph::new();
        assert_eq!(average_out_degree(&g), 0.0);
        assert!(out_degrees(&g).is_empty());
    }
}
