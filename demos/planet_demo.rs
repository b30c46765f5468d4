//! Demonstration of HexPlanet generation and usage
//!
//! Run with `RUST_LOG=debug cargo run --example planet_demo` to see the
//! subdivision passes.

use hex_planet::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Generating planet...");

    let config = PlanetConfigBuilder::new()
        .subdivisions(4)?
        .radius(20.0)?
        .build()?;

    let planet = HexPlanet::generate(config)?;

    println!("Generated {} nodes, {} edges", planet.node_count(), planet.edge_count());
    println!("Radius: {}", planet.radius());

    // Degree distribution: 12 pentagons, the rest hexagons
    let mut degrees = std::collections::BTreeMap::new();
    for node in 0..planet.node_count() {
        *degrees.entry(planet.neighbors(node)?.len()).or_insert(0) += 1;
    }
    println!("\nDegree distribution:");
    for (degree, count) in &degrees {
        println!("  {} neighbors: {} nodes", degree, count);
    }

    // Resolve a world position to a node
    let pos = Vec3::new(planet.radius(), 0.0, 0.0);
    let node = planet.nearest_node(pos)?;
    println!("\nPosition {:?} is nearest node {}", pos, node);

    #[cfg(feature = "spatial-index")]
    {
        let indexed = planet.find_node_at(pos)?;
        println!("KD-tree agrees: node {}", indexed);
    }

    // Movement ranges
    for budget in 0..=3 {
        let range = planet.movement_range(node, budget)?;
        println!("Budget {}: {} reachable nodes", budget, range.len());
    }

    // Block the southern hemisphere
    let positions = planet.graph().positions();
    let northern = |_from: NodeId, to: NodeId| positions[to].y >= 0.0;
    let range = planet.movement_range_with(node, 3, &northern)?;
    println!("Budget 3, northern hemisphere only: {} reachable nodes", range.len());

    // Render buffers
    let mesh = generate_mesh(&planet);
    println!("\nMesh: {} vertices, {} triangles", mesh.vertex_count(), mesh.triangle_count());
    let indexed = generate_indexed_mesh(&planet);
    println!("Indexed mesh: {} vertices, {} triangles", indexed.vertex_count(), indexed.triangle_count());

    Ok(())
}
