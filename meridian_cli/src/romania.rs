use meridian_graph::{EdgeProperties, Graph};

// (id, name, lat, lng)
const CITIES: &[(&str, &str, f64, f64)] = &[
    ("arad", "Arad", 46.1866, 21.3123),
    ("bucharest", "Bucharest", 44.4268, 26.1025),
    ("craiova", "Craiova", 44.3302, 23.7949),
    ("dobreta", "Drobeta-Turnu Severin", 44.6369, 22.6597),
    ("eforie", "Eforie", 44.0586, 28.6336),
    ("fagaras", "Fagaras", 45.8416, 24.9731),
    ("giurgiu", "Giurgiu", 43.9037, 25.9699),
    ("hirsova", "Hirsova", 44.6893, 27.9457),
    ("iasi", "Iasi", 47.1585, 27.6014),
    ("lugoj", "Lugoj", 45.6886, 21.9031),
    ("mehadia", "Mehadia", 44.9040, 22.3647),
    ("neamt", "Targu Neamt", 47.2035, 26.3587),
    ("oradea", "Oradea", 47.0465, 21.9189),
    ("pitesti", "Pitesti", 44.8565, 24.8692),
    ("rimnicu-vilcea", "Rimnicu Vilcea", 45.0997, 24.3693),
    ("sibiu", "Sibiu", 45.7983, 24.1256),
    ("timisoara", "Timisoara", 45.7489, 21.2087),
    ("urziceni", "Urziceni", 44.7181, 26.6453),
    ("vaslui", "Vaslui", 46.6407, 27.7276),
    ("zerind", "Zerind", 46.6225, 21.5174),
];

// (from, to, km, road name)
const ROADS: &[(&str, &str, f64, &str)] = &[
    ("oradea", "zerind", 71.0, "DN19"),
    ("oradea", "sibiu", 151.0, "DN1"),
    ("zerind", "arad", 75.0, "DN79"),
    ("arad", "sibiu", 140.0, "A1"),
    ("arad", "timisoara", 118.0, "DN69"),
    ("timisoara", "lugoj", 111.0, "DN6"),
    ("lugoj", "mehadia", 70.0, "DN6"),
    ("mehadia", "dobreta", 75.0, "DN6"),
    ("dobreta", "craiova", 120.0, "DN6"),
    ("craiova", "rimnicu-vilcea", 146.0, "DN64"),
    ("craiova", "pitesti", 138.0, "DN65"),
    ("rimnicu-vilcea", "pitesti", 97.0, "DN7"),
    ("rimnicu-vilcea", "sibiu", 80.0, "DN7"),
    ("sibiu", "fagaras", 99.0, "DN1"),
    ("fagaras", "bucharest", 211.0, "DN73"),
    ("pitesti", "bucharest", 101.0, "A1"),
    ("bucharest", "giurgiu", 90.0, "DN5"),
    ("bucharest", "urziceni", 85.0, "DN2"),
    ("urziceni", "hirsova", 98.0, "DN2A"),
    ("hirsova", "eforie", 86.0, "DN22A"),
    ("urziceni", "vaslui", 142.0, "DN2"),
    ("vaslui", "iasi", 92.0, "DN24"),
    ("iasi", "neamt", 87.0, "DN28"),
];

/// Road id used for blocking: both city ids joined by `:`.
pub fn road_id(from: &str, to: &str) -> String {
    format!("{from}:{to}")
}

/// The classic Romania road map, every road open in both directions.
pub fn create_network() -> anyhow::Result<Graph<String>> {
    let mut graph = Graph::with_capacity(CITIES.len());

    for &(id, name, lat, lng) in CITIES {
        graph.add_vertex(id.to_owned(), name, lng, lat)?;
    }

    for &(from, to, km, name) in ROADS {
        graph.add_two_way_edge(
            &from.to_owned(),
            &to.to_owned(),
            EdgeProperties::new(road_id(from, to), km).with_name(name),
        )?;
    }

    Ok(graph)
}
