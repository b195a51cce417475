//! Basic usage: draw constrained graphs and check a property over them.

use graphstrat::*;

fn main() {
    // At least 6 nodes, split into at least 3 components of at least 2
    // nodes each.
    let constraints = Constraints::new()
        .with_min_nodes(6)
        .with_min_num_components(3)
        .with_min_component_size(2);

    let strategy = GraphStrategy::new(constraints.clone()).expect("constraints are satisfiable");

    println!("Drawing 5 graphs under {constraints:?}");
    println!();
    for i in 0..5u64 {
        let graph = strategy.draw(Size::new(80), Seed::from_u64(i)).value;
        println!(
            "  draw {}: {} nodes, {} edges, component sizes {:?}",
            i,
            graph.node_count(),
            graph.edge_count(),
            graph.connected_component_sizes(),
        );
    }
    println!();

    // Every draw satisfies the constraints, so this passes.
    let prop = for_all_named(graphs(constraints).unwrap(), "graph", |g: &Graph| {
        g.connected_component_sizes().len() >= 3
    });
    match prop.run(&Config::default()) {
        result @ TestResult::Pass { .. } => println!("{result}"),
        result => println!("Unexpected result: {result}"),
    }

    // Over-constrained sets fail at construction, not mid-run.
    let infeasible = Constraints::new()
        .with_min_num_components(2)
        .with_min_component_size(2)
        .with_max_nodes(3);
    match GraphStrategy::new(infeasible) {
        Err(err) => println!("  ✓ rejected up front: {err}"),
        Ok(_) => println!("  ✗ expected an infeasibility error"),
    }
}
