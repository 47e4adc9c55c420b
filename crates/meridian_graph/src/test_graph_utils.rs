use crate::{edge::EdgeProperties, graph::Graph};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RomaniaCity {
    Arad = 1,
    Bucharest = 2,
    Craiova = 3,
    Dobreta = 4,
    Eforie = 5,
    Fagaras = 6,
    Giurgiu = 7,
    Hirsova = 8,
    Iasi = 9,
    Lugoj = 10,
    Mehadia = 11,
    Neamt = 12,
    Oradea = 13,
    Pitesti = 14,
    RimnicuVilcea = 15,
    Sibiu = 16,
    Timisoara = 17,
    Urziceni = 18,
    Vaslui = 19,
    Zerind = 20,
}

impl From<RomaniaCity> for u32 {
    fn from(value: RomaniaCity) -> Self {
        value as u32
    }
}

impl RomaniaCity {
    pub fn id(self) -> u32 {
        self.into()
    }
}

// (city, name, lat, lng)
fn romania_cities() -> Vec<(RomaniaCity, &'static str, f64, f64)> {
    vec![
        (RomaniaCity::Arad, "Arad", 46.1866, 21.3123),
        (RomaniaCity::Bucharest, "Bucharest", 44.4268, 26.1025),
        (RomaniaCity::Craiova, "Craiova", 44.3302, 23.7949),
        (RomaniaCity::Dobreta, "Dobreta", 44.6369, 22.6597),
        (RomaniaCity::Eforie, "Eforie", 44.0586, 28.6336),
        (RomaniaCity::Fagaras, "Fagaras", 45.8416, 24.9731),
        (RomaniaCity::Giurgiu, "Giurgiu", 43.9037, 25.9699),
        (RomaniaCity::Hirsova, "Hirsova", 44.6893, 27.9457),
        (RomaniaCity::Iasi, "Iasi", 47.1585, 27.6014),
        (RomaniaCity::Lugoj, "Lugoj", 45.6886, 21.9031),
        (RomaniaCity::Mehadia, "Mehadia", 44.9040, 22.3647),
        (RomaniaCity::Neamt, "Neamt", 47.2035, 26.3587),
        (RomaniaCity::Oradea, "Oradea", 47.0465, 21.9189),
        (RomaniaCity::Pitesti, "Pitesti", 44.8565, 24.8692),
        (RomaniaCity::RimnicuVilcea, "Rimnicu Vilcea", 45.0997, 24.3693),
        (RomaniaCity::Sibiu, "Sibiu", 45.7983, 24.1256),
        (RomaniaCity::Timisoara, "Timisoara", 45.7489, 21.2087),
        (RomaniaCity::Urziceni, "Urziceni", 44.7181, 26.6453),
        (RomaniaCity::Vaslui, "Vaslui", 46.6407, 27.7276),
        (RomaniaCity::Zerind, "Zerind", 46.6225, 21.5174),
    ]
}

// The road id of each entry is its position in this list.
// https://user-images.githubusercontent.com/43790152/97784960-1a142580-1bc4-11eb-9070-39c03eb16df2.png
pub fn romania_roads() -> Vec<(RomaniaCity, RomaniaCity, f64)> {
    use RomaniaCity::*;

    vec![
        (Oradea, Zerind, 71.0),
        (Oradea, Sibiu, 151.0),
        (Zerind, Arad, 75.0),
        (Arad, Sibiu, 140.0),
        (Arad, Timisoara, 118.0),
        (Timisoara, Lugoj, 111.0),
        (Lugoj, Mehadia, 70.0),
        (Mehadia, Dobreta, 75.0),
        (Dobreta, Craiova, 120.0),
        (Craiova, RimnicuVilcea, 146.0),
        (Craiova, Pitesti, 138.0),
        (RimnicuVilcea, Pitesti, 97.0),
        (RimnicuVilcea, Sibiu, 80.0),
        (Sibiu, Fagaras, 99.0),
        (Fagaras, Bucharest, 211.0),
        (Pitesti, Bucharest, 101.0),
        (Bucharest, Giurgiu, 90.0),
        (Bucharest, Urziceni, 85.0),
        (Urziceni, Hirsova, 98.0),
        (Hirsova, Eforie, 86.0),
        (Urziceni, Vaslui, 142.0),
        (Vaslui, Iasi, 92.0),
        (Iasi, Neamt, 87.0),
    ]
}

pub fn road_id(from: RomaniaCity, to: RomaniaCity) -> u32 {
    romania_roads()
        .iter()
        .position(|&(a, b, _)| (a, b) == (from, to) || (a, b) == (to, from))
        .map(|position| position as u32)
        .unwrap_or_else(|| panic!("No road between {:?} and {:?}", from, to))
}

/// Romania road map, every road inserted in both directions.
pub fn create_romania_graph() -> Graph<u32> {
    let mut graph = Graph::new();

    for (city, name, lat, lng) in romania_cities() {
        graph.add_vertex(city.id(), name, lng, lat).unwrap();
    }

    for (road_id, (from, to, distance)) in romania_roads().into_iter().enumerate() {
        graph
            .add_two_way_edge(
                &from.id(),
                &to.id(),
                EdgeProperties::new(road_id as u32, distance)
                    .with_name(format!("{:?}-{:?}", from, to)),
            )
            .unwrap();
    }

    graph
}

/// Builds a graph whose vertices are `0..vertices` (all at the origin) with
/// unit-less one-way edges. Edge ids count up from 100.
pub fn create_graph(vertices: u32, edges: &[(u32, u32, f64)]) -> Graph<u32> {
    let mut graph = Graph::new();
    for id in 0..vertices {
        graph.add_vertex(id, format!("v{id}"), 0.0, 0.0).unwrap();
    }

    for (position, &(from, to, weight)) in edges.iter().enumerate() {
        graph
            .add_edge(&from, &to, EdgeProperties::new(100 + position as u32, weight))
            .unwrap();
    }

    graph
}
