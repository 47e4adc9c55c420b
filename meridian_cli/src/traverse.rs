use clap::Subcommand;
use meridian_graph::Graph;
use tracing::info;

#[derive(Subcommand)]
pub enum TraverseSubcommands {
    /// Depth-first order over the whole network
    Dfs,
    /// Breadth-first order from one city
    Bfs { from: String },
    /// Topological order, fails when the network has a cycle
    Topsort,
    /// Whether the network is acyclic
    Dag,
    /// Vertex reached from `from` that discovers the most new children
    Hub { from: String },
}

pub fn run(graph: &Graph<String>, subcommand: TraverseSubcommands) -> Result<(), anyhow::Error> {
    match subcommand {
        TraverseSubcommands::Dfs => info!("{}", graph.dfs().join(", ")),
        TraverseSubcommands::Bfs { from } => {
            let order = graph.bfs(&from);
            if order.is_empty() {
                anyhow::bail!("Unknown city {from}");
            }
            info!("{}", order.join(", "));
        }
        TraverseSubcommands::Topsort => info!("{}", graph.topsort()?.join(", ")),
        TraverseSubcommands::Dag => info!(is_dag = graph.is_dag()),
        TraverseSubcommands::Hub { from } => match graph.max_new_children(&from) {
            Some(hub) => info!(children = hub.children, "{}", hub.vertex),
            None => anyhow::bail!("Unknown city {from}"),
        },
    }

    Ok(())
}
