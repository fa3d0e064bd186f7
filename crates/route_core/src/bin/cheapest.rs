use route_core::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cfg = cli::parse();

    if cfg.validate {
        CheapestRouteRequest::new(&cfg.origin, &cfg.destination)
            .validate()
            .map_err(|errors| anyhow::anyhow!("{}: {}", errors, errors.messages().join(", ")))?;
    }

    let g = RouteGraph::from_csv(&cfg.routes_file)?;
    let mut search = CheapestRouteSearch::new(&g);
    let route = search.search(&cfg.origin, &cfg.destination)?;

    println!("{}", route.description());
    println!("Costs: {}", route.total_cost);

    if cfg.print_stats {
        g.print_info();
        println!("{}", search.stats);
    }

    Ok(())
}
