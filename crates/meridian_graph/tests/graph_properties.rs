use std::collections::HashSet;

use meridian_graph::{EdgeProperties, Graph, GraphError, LocationIndex};

/// Small city grid: vertices `row * width + col`, one-way edges going east
/// and south with weight equal to the haversine distance between endpoints.
fn create_grid(width: u32, height: u32) -> Graph<u32> {
    let mut graph = Graph::new();
    for row in 0..height {
        for col in 0..width {
            let id = row * width + col;
            graph
                .add_vertex(
                    id,
                    format!("r{row}c{col}"),
                    -8.63 + col as f64 * 0.001,
                    41.16 - row as f64 * 0.001,
                )
                .unwrap();
        }
    }

    let mut edge_id = 10_000;
    for row in 0..height {
        for col in 0..width {
            let id = row * width + col;
            let mut neighbors = Vec::new();
            if col + 1 < width {
                neighbors.push(id + 1);
            }
            if row + 1 < height {
                neighbors.push(id + width);
            }

            for next in neighbors {
                let weight = graph.calculate_dist(&id, &next).unwrap();
                graph
                    .add_edge(&id, &next, EdgeProperties::new(edge_id, weight))
                    .unwrap();
                edge_id += 1;
            }
        }
    }

    graph
}

#[test]
fn dfs_and_bfs_visit_each_reachable_vertex_once() {
    let graph = create_grid(6, 5);

    let dfs = graph.dfs();
    assert_eq!(dfs.len(), 30);
    assert_eq!(dfs.iter().collect::<HashSet<_>>().len(), 30);

    let bfs = graph.bfs(&0);
    assert_eq!(bfs.len(), 30);
    assert_eq!(bfs.iter().collect::<HashSet<_>>().len(), 30);

    // Bottom-right corner reaches nothing
    assert_eq!(graph.bfs(&29), vec![29]);
}

#[test]
fn topsort_respects_every_edge() {
    let graph = create_grid(5, 4);
    let order = graph.topsort().unwrap();
    assert_eq!(order.len(), graph.vertex_count());

    let position = |id: &u32| order.iter().position(|other| other == id).unwrap();
    for (idx, vertex) in graph.indexed_vertices() {
        for edge in vertex.edges() {
            let destination = graph[edge.destination()].id();
            assert!(
                position(vertex.id()) < position(destination),
                "{:?} -> {:?} out of order",
                idx,
                destination
            );
        }
    }
}

#[test]
fn closing_a_loop_breaks_the_order() {
    let mut graph = create_grid(3, 3);
    assert!(graph.is_dag());

    graph
        .add_edge(&8, &0, EdgeProperties::new(1, 1.0))
        .unwrap();

    assert!(!graph.is_dag());
    assert_eq!(graph.topsort(), Err(GraphError::Cyclic));
}

#[test]
fn dijkstra_on_grid_matches_manhattan_walk() {
    let graph = create_grid(4, 4);
    let tree = graph.dijkstra_shortest_path(&0).unwrap();

    // Every monotone walk to the far corner has 6 hops
    let path = tree.path_to(&15).unwrap();
    assert_eq!(path.len(), 7);
    assert_eq!(path.first(), Some(&0));
    assert_eq!(path.last(), Some(&15));

    let hops = graph.unweighted_shortest_path(&0).unwrap();
    assert_eq!(hops.distance(&15), Some(6.0));
}

#[test]
fn blocking_every_exit_isolates_the_source() {
    let mut graph = create_grid(3, 3);
    let exits: Vec<u32> = graph
        .vertex(&0)
        .unwrap()
        .edges()
        .iter()
        .map(|edge| *edge.id())
        .collect();

    for exit in &exits {
        assert_eq!(graph.set_edge_blocked(exit, true), 1);
    }

    let tree = graph.dijkstra_shortest_path(&0).unwrap();
    assert_eq!(tree.reached(), 1);
    assert!(matches!(
        tree.path_to(&8),
        Err(GraphError::Unreachable(_))
    ));
}

#[test]
fn removing_a_vertex_reroutes() {
    let mut graph = create_grid(3, 1);
    graph
        .add_edge(&0, &2, EdgeProperties::new(1, 100.0))
        .unwrap();

    let via_middle = graph.dijkstra_shortest_path(&0).unwrap().path_to(&2).unwrap();
    assert_eq!(via_middle, vec![0, 1, 2]);

    graph.remove_vertex(&1).unwrap();
    let tree = graph.dijkstra_shortest_path(&0).unwrap();
    assert_eq!(tree.path_to(&2), Ok(vec![0, 2]));
    assert_eq!(tree.distance(&2), Some(100.0));
}

#[test]
fn location_index_snaps_to_the_grid() {
    let graph = create_grid(4, 4);
    let index = LocationIndex::build(&graph);

    // Slightly off vertex r1c2
    let point = meridian_graph::GeoPoint::new(41.159_1, -8.628_1);
    assert_eq!(index.nearest_id(&graph, &point), Some(&6));
}

#[test]
fn string_ids() {
    let mut graph: Graph<String> = Graph::new();
    graph
        .add_vertex("porto".to_owned(), "Porto", -8.6291, 41.1579)
        .unwrap();
    graph
        .add_vertex("lisboa".to_owned(), "Lisboa", -9.1393, 38.7223)
        .unwrap();
    graph
        .add_two_way_edge(
            &"porto".to_owned(),
            &"lisboa".to_owned(),
            EdgeProperties::new("A1".to_owned(), 313.0).with_name("Autoestrada do Norte"),
        )
        .unwrap();

    let tree = graph.dijkstra_shortest_path(&"lisboa".to_owned()).unwrap();
    assert_eq!(
        tree.path_to(&"porto".to_owned()),
        Ok(vec!["lisboa".to_owned(), "porto".to_owned()])
    );

    let distance = graph
        .calculate_dist(&"porto".to_owned(), &"lisboa".to_owned())
        .unwrap();
    assert!((distance - 274.3).abs() < 0.5, "got {distance}");

    assert_eq!(graph.set_edge_blocked(&"A1".to_owned(), true), 2);
    assert!(
        graph
            .dijkstra_shortest_path(&"lisboa".to_owned())
            .unwrap()
            .distance(&"porto".to_owned())
            .is_none()
    );
}
