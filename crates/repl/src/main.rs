//! Interactive shell over a routes file
use std::path::PathBuf;

use rand::seq::SliceRandom;
use reedline_repl_rs::clap::{value_parser, Arg, ArgMatches, Command};
use reedline_repl_rs::{Repl, Result};
use route_core::constants::{Cost, RouteId};
use route_core::prelude::*;
use route_core::statistics::{average_out_degree, busiest_airports};

/// Print route network info
fn info(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let g = match context.graph() {
        Ok(g) => g,
        Err(e) => return Ok(Some(format!("Error: {}", e))),
    };

    let mut out = format!(
        "Network has {} airports and {} routes (avg. {:.2} routes per airport)",
        g.num_airports(),
        g.num_routes(),
        average_out_degree(&g)
    );
    for (airport, degree) in busiest_airports(&g, 3) {
        out.push_str(&format!("\n{}: {} routes", airport, degree));
    }
    Ok(Some(out))
}

fn cheapest(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let origin = args.get_one::<String>("origin").unwrap();
    let destination = args.get_one::<String>("destination").unwrap();

    match context
        .service
        .cheapest(&CheapestRouteRequest::new(origin, destination))
    {
        Ok(route) => Ok(Some(format!(
            "{}\nCosts: {}",
            route.description(),
            route.total_cost
        ))),
        Err(e) => Ok(Some(error_message(&e))),
    }
}

fn list(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    match context.service.routes() {
        Ok(routes) if routes.is_empty() => Ok(Some("No routes".to_string())),
        Ok(routes) => Ok(Some(
            routes
                .iter()
                .map(format_route)
                .collect::<Vec<_>>()
                .join("\n"),
        )),
        Err(e) => Ok(Some(error_message(&e))),
    }
}

fn get(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let id = *args.get_one::<RouteId>("id").unwrap();

    match context.service.route(id) {
        Ok(route) => Ok(Some(format_route(&route))),
        Err(e) => Ok(Some(error_message(&e))),
    }
}

fn add(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    match context.service.create(route_request(&args)) {
        Ok(routes) => Ok(Some(format!("Added, {} routes in total", routes.len()))),
        Err(e) => Ok(Some(error_message(&e))),
    }
}

fn update(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    match context.service.update(route_request(&args)) {
        Ok(route) => Ok(Some(format!("Updated {}", format_route(&route)))),
        Err(e) => Ok(Some(error_message(&e))),
    }
}

fn delete(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let id = *args.get_one::<RouteId>("id").unwrap();

    match context.service.delete(id) {
        Ok(()) => Ok(Some(format!("Deleted route {}", id))),
        Err(e) => Ok(Some(error_message(&e))),
    }
}

fn measure(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let n = *args.get_one::<usize>("n").unwrap_or(&10);

    let g = match context.graph() {
        Ok(g) => g,
        Err(e) => return Ok(Some(format!("Error: {}", e))),
    };
    let airports: Vec<&str> = g.airports().into_iter().collect();
    if airports.is_empty() {
        return Ok(Some("No routes".to_string()));
    }

    // Select n random origin and destination airports
    let mut rng = rand::thread_rng();
    let mut res = String::new();
    for _ in 0..n {
        let (Some(origin), Some(destination)) =
            (airports.choose(&mut rng), airports.choose(&mut rng))
        else {
            continue;
        };
        let mut search = CheapestRouteSearch::new(&g);
        let outcome = match search.search(origin, destination) {
            Ok(route) => format!("{}", route.total_cost),
            Err(e) => e.to_string(),
        };
        res.push_str(&format!(
            "{} -> {}: {} ({:?})\n",
            origin,
            destination,
            outcome,
            search.stats.duration.unwrap_or_default()
        ));
    }

    Ok(Some(res))
}

fn route_request(args: &ArgMatches) -> FlightRouteRequest {
    FlightRouteRequest::new(
        *args.get_one::<RouteId>("id").unwrap(),
        args.get_one::<String>("origin").unwrap(),
        args.get_one::<String>("destination").unwrap(),
        *args.get_one::<Cost>("cost").unwrap(),
    )
}

fn format_route(route: &FlightRoute) -> String {
    format!(
        "#{} {} -> {}: {}",
        route.id, route.origin, route.destination, route.cost
    )
}

fn error_message(e: &ServiceError) -> String {
    match e {
        ServiceError::Validation(errors) => format!("{}\n{}", e, errors.messages().join("\n")),
        _ => format!("[{}] {}", e.status_code(), e),
    }
}

fn route_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("id")
                .value_parser(value_parser!(RouteId))
                .required(true)
                .help("ID of the route"),
        )
        .arg(
            Arg::new("origin")
                .required(true)
                .help("Airport code of the origin"),
        )
        .arg(
            Arg::new("destination")
                .required(true)
                .help("Airport code of the destination"),
        )
        .arg(
            Arg::new("cost")
                .value_parser(value_parser!(Cost))
                .required(true)
                .help("Cost of the flight"),
        )
}

struct Context {
    service: RouteService<CsvRouteStore>,
}

impl Context {
    fn new(store: CsvRouteStore) -> Self {
        Self {
            service: RouteService::new(store),
        }
    }

    /// Graph of the current routes, rebuilt on every call
    fn graph(&self) -> std::result::Result<RouteGraph, ServiceError> {
        Ok(RouteGraph::from_routes(self.service.routes()?))
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let path_to_routes = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "routes.csv".to_string());
    let context = Context::new(CsvRouteStore::new(path_to_routes));

    let mut repl = Repl::new(context)
        .with_name("Routefinder")
        .with_version("v0.1.0")
        .with_description("Simple REPL to find cheap flight routes")
        .with_banner("Welcome to Routefinder")
        .with_history(PathBuf::from("history"), 100)
        .with_command(Command::new("info").about("Print route network info"), info)
        .with_command(
            Command::new("cheapest")
                .arg(
                    Arg::new("origin")
                        .required(true)
                        .help("Airport code of the origin"),
                )
                .arg(
                    Arg::new("destination")
                        .required(true)
                        .help("Airport code of the destination"),
                )
                .about("Find the cheapest route between two airports"),
            cheapest,
        )
        .with_command(Command::new("list").about("List all routes"), list)
        .with_command(
            Command::new("get")
                .arg(
                    Arg::new("id")
                        .value_parser(value_parser!(RouteId))
                        .required(true)
                        .help("ID of the route"),
                )
                .about("Show a single route"),
            get,
        )
        .with_command(route_args(Command::new("add")).about("Add a new route"), add)
        .with_command(
            route_args(Command::new("update")).about("Replace the route with the same ID"),
            update,
        )
        .with_command(
            Command::new("delete")
                .arg(
                    Arg::new("id")
                        .value_parser(value_parser!(RouteId))
                        .required(true)
                        .help("ID of the route"),
                )
                .about("Delete a route"),
            delete,
        )
        .with_command(
            Command::new("measure")
                .arg(
                    Arg::new("n")
                        .value_parser(value_parser!(usize))
                        .required(false)
                        .help("Number of random queries"),
                )
                .about("Measure `n` random cheapest route queries"),
            measure,
        );

    repl.run()
}
