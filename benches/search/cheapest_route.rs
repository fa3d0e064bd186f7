use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use route_core::{
    graph::{FlightRoute, RouteGraph},
    search::{cheapest_route, dijkstra::CheapestRouteSearch},
    util::test_graphs::grid_routes,
};

criterion_group!(benches, query_on_grid, query_on_prebuilt_graph, random_network);
criterion_main!(benches);

/// Includes building the graph, like every real query does
pub fn query_on_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("cheapest_route_on_grid");
    for n in [4, 8, 16, 32].iter() {
        let routes = grid_routes(*n);
        let destination = format!("A{:02}{:02}", n - 1, n - 1);
        group.throughput(criterion::Throughput::Elements(routes.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &routes, |b, routes| {
            b.iter(|| cheapest_route(black_box(routes), "A0000", &destination))
        });
    }
    group.finish();
}

pub fn query_on_prebuilt_graph(c: &mut Criterion) {
    let g = RouteGraph::from_routes(grid_routes(32));

    c.bench_with_input(
        BenchmarkId::new("search_only", stringify!(grid_32)),
        &g,
        |b, g| {
            b.iter(|| {
                let mut search = CheapestRouteSearch::new(g);
                search.search("A0000", "A3131")
            })
        },
    );
}

/// Random network with a few thousand routes between three letter airports
fn random_network(c: &mut Criterion) {
    const AIRPORTS: usize = 500;
    const ROUTES: usize = 5_000;

    let mut rng = StdRng::seed_from_u64(42);
    let code = |i: usize| {
        let bytes = [b'A' + (i / 676) as u8, b'A' + (i / 26 % 26) as u8, b'A' + (i % 26) as u8];
        String::from_utf8_lossy(&bytes).into_owned()
    };
    let routes: Vec<FlightRoute> = (0..ROUTES)
        .map(|id| {
            FlightRoute::new(
                id as u32,
                code(rng.gen_range(0..AIRPORTS)),
                code(rng.gen_range(0..AIRPORTS)),
                rng.gen_range(1..=100),
            )
        })
        .collect();
    let (origin, destination) = (routes[0].origin.clone(), routes[1].destination.clone());

    c.bench_function("random_network_5000_routes", |b| {
        b.iter(|| cheapest_route(black_box(&routes), &origin, &destination))
    });
}
