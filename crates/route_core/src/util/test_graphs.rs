use crate::{graph::FlightRoute, route};

/// Route network used throughout the tests.
///
/// ```text
///  GRU -10-> BRC -5-> SCL -20-> ORL -5-> CDG
///   |                  ^         ^        ^
///   +-------20---------+         |        |
///   +-------56-------------------+        |
///   +-------75----------------------------+
/// ```
pub fn sample_routes() -> Vec<FlightRoute> {
    vec![
        route!(1, "GRU" => "BRC", 10),
        route!(2, "BRC" => "SCL", 5),
        route!(3, "GRU" => "CDG", 75),
        route!(4, "GRU" => "SCL", 20),
        route!(5, "GRU" => "ORL", 56),
        route!(6, "ORL" => "CDG", 5),
        route!(7, "SCL" => "ORL", 20),
    ]
}

/// Two components that are not connected in either direction
pub fn disconnected_routes() -> Vec<FlightRoute> {
    // AAA -> BBB -> CCC
    // DDD -> EEE -> FFF
    vec![
        route!(1, "AAA" => "BBB", 1),
        route!(2, "BBB" => "CCC", 1),
        route!(3, "DDD" => "EEE", 3),
        route!(4, "EEE" => "FFF", 1),
    ]
}

/// Square grid of `n * n` airports with routes to the right and downwards.
///
/// Airport codes are `A0000`, `A0001`, ... which are longer than IATA codes.
/// Only the validators care about the code length, the engine does not.
pub fn grid_routes(n: usize) -> Vec<FlightRoute> {
    let code = |row: usize, col: usize| format!("A{:02}{:02}", row, col);
    let mut routes = Vec::with_capacity(2 * n * n);
    let mut id = 0;
    for row in 0..n {
        for col in 0..n {
            if col + 1 < n {
                id += 1;
                let cost = ((row * 7 + col * 3) % 11 + 1) as u32;
                routes.push(route!(id, code(row, col) => code(row, col + 1), cost));
            }
            if row + 1 < n {
                id += 1;
                let cost = ((row * 5 + col * 2) % 13 + 1) as u32;
                routes.push(route!(id, code(row, col) => code(row + 1, col), cost));
            }
        }
    }
    routes
}
