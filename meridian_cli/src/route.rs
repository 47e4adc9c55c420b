use anyhow::Context;
use clap::Args;
use meridian_graph::{GeoPoint, Graph};
use serde::Serialize;
use tracing::{info, warn};

#[derive(Args)]
pub struct RouteArgs {
    from: String,
    to: String,

    /// Count hops instead of summing road lengths (closed roads stay usable)
    #[arg(short, long)]
    unweighted: bool,

    /// Close a road before routing, e.g. `pitesti:bucharest` (repeatable)
    #[arg(short, long = "block", value_name = "ROAD_ID")]
    blocked: Vec<String>,

    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct RouteStop<'a> {
    id: &'a str,
    name: &'a str,
    point: GeoPoint,
}

#[derive(Serialize)]
struct RouteOutput<'a> {
    from: &'a str,
    to: &'a str,
    unweighted: bool,
    distance: f64,
    straight_line_km: f64,
    path: Vec<RouteStop<'a>>,
}

fn route<'a>(
    graph: &'a Graph<String>,
    from: &'a String,
    to: &'a String,
    unweighted: bool,
) -> Result<RouteOutput<'a>, anyhow::Error> {
    let tree = if unweighted {
        graph.unweighted_shortest_path(from)
    } else {
        graph.dijkstra_shortest_path(from)
    }
    .with_context(|| format!("Cannot route from {from}"))?;

    let ids = tree
        .path_to(to)
        .with_context(|| format!("No route from {from} to {to}"))?;
    let path = ids
        .iter()
        .map(|id| {
            let vertex = graph
                .vertex(id)
                .with_context(|| format!("Unknown city {id}"))?;
            Ok(RouteStop {
                id: vertex.id(),
                name: vertex.name(),
                point: *vertex.point(),
            })
        })
        .collect::<Result<Vec<_>, anyhow::Error>>()?;

    Ok(RouteOutput {
        from,
        to,
        unweighted,
        distance: tree.distance(to).unwrap_or(f64::INFINITY),
        straight_line_km: graph.calculate_dist(from, to)?,
        path,
    })
}

pub fn run(graph: &mut Graph<String>, args: RouteArgs) -> Result<(), anyhow::Error> {
    for road in &args.blocked {
        if graph.set_edge_blocked(road, true) == 0 {
            warn!(road = %road, "No road with this id, nothing blocked");
        }
    }

    let output = route(graph, &args.from, &args.to, args.unweighted)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        let stops: Vec<&str> = output.path.iter().map(|stop| stop.name).collect();
        info!(
            distance = output.distance,
            straight_line_km = %format!("{:.1}", output.straight_line_km),
            "{}",
            stops.join(" -> ")
        );
    }

    Ok(())
}
