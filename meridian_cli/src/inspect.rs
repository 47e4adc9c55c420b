use anyhow::Context;
use meridian_graph::{GeoPoint, Graph, LocationIndex};
use tracing::info;

pub fn distance(graph: &Graph<String>, a: &str, b: &str) -> Result<(), anyhow::Error> {
    let km = graph.calculate_dist(&a.to_owned(), &b.to_owned())?;
    info!("{a} -> {b}: {km:.1} km");

    Ok(())
}

pub fn nearest(graph: &Graph<String>, lat: f64, lng: f64) -> Result<(), anyhow::Error> {
    let point = GeoPoint::from(geo_types::Point::new(lng, lat));
    let index = LocationIndex::build(graph);

    let id = index
        .nearest_id(graph, &point)
        .context("The network has no cities")?;
    let vertex = graph.vertex(id).context("Index out of date")?;
    info!(
        km = %format!("{:.1}", vertex.point().haversine_distance(&point)),
        "{} ({})",
        vertex.name(),
        id
    );

    Ok(())
}

pub fn roads(graph: &Graph<String>) {
    for name in graph.edge_names() {
        println!("{name}");
    }
}
