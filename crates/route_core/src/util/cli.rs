use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(author = "Daniel Holzner", version, about, long_about = None)]
struct Cli {
    /// Path to the routes .csv file (id,origin,destination,cost)
    routes_file: String,

    /// Airport code of the origin
    origin: String,

    /// Airport code of the destination
    destination: String,

    /// Print search statistics of the query
    #[arg(short, long, default_value = "false")]
    stats: bool,

    /// Skip request validation and query the engine directly
    #[arg(long, default_value = "false")]
    raw: bool,
}

#[derive(Debug, Clone)]
pub struct Cfg {
    pub routes_file: PathBuf,
    pub origin: String,
    pub destination: String,
    pub print_stats: bool,
    pub validate: bool,
}

pub fn parse() -> Cfg {
    let cli = Cli::parse();

    Cfg {
        routes_file: PathBuf::from(cli.routes_file),
        origin: cli.origin,
        destination: cli.destination,
        print_stats: cli.stats,
        validate: !cli.raw,
    }
}
