use clap::{Parser, Subcommand};

use crate::{route::RouteArgs, traverse::TraverseSubcommands};

mod inspect;
mod romania;
mod route;
mod traverse;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long, env = "MERIDIAN_DEBUG")]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Shortest route between two cities
    #[command(visible_alias = "r")]
    Route {
        #[command(flatten)]
        args: RouteArgs,
    },
    #[command(visible_alias = "t")]
    Traverse {
        #[command(subcommand)]
        commands: TraverseSubcommands,
    },
    /// Great-circle distance between two cities, in kilometres
    Distance { a: String, b: String },
    /// City closest to a coordinate
    Nearest {
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lng: f64,
    },
    /// Road names of the network
    Roads,
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let mut graph = romania::create_network()?;

    match cli.command {
        Some(Commands::Route { args }) => route::run(&mut graph, args)?,
        Some(Commands::Traverse { commands }) => traverse::run(&graph, commands)?,
        Some(Commands::Distance { a, b }) => inspect::distance(&graph, &a, &b)?,
        Some(Commands::Nearest { lat, lng }) => inspect::nearest(&graph, lat, lng)?,
        Some(Commands::Roads) => inspect::roads(&graph),
        None => {
            tracing::info!(
                cities = graph.vertex_count(),
                roads = graph.edge_count() / 2,
                "Loaded sample network, use --help to list commands"
            );
        }
    }

    Ok(())
}
