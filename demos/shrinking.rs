//! Shrinking walkthrough: a failing predicate drives the drawn graph down
//! to the minimal graph satisfying the constraints.

use graphstrat::*;

fn main() {
    let constraints = Constraints::new()
        .with_min_nodes(6)
        .with_min_num_components(3)
        .with_min_component_size(2);

    // Show the raw shrink chain for one partition.
    let partition = Partition::sample(&constraints, Size::new(100), Seed::from_u64(1));
    println!("Sampled partition: {:?}", partition.sizes());
    for (step, shrunk) in partition.shrink_chain(&constraints).iter().enumerate() {
        println!("  shrink {}: {:?}", step + 1, shrunk.sizes());
    }
    println!();

    // A predicate that rejects every graph forces the runner down the whole
    // chain; the minimal counterexample is three components of two nodes.
    println!("Running an always-failing property to expose the progression:");
    let prop = for_all_named(graphs(constraints).unwrap(), "graph", |_: &Graph| false);
    match prop.run(&Config::default()) {
        result @ TestResult::Fail { .. } => println!("{result}"),
        result => println!("Unexpected result: {result}"),
    }
}
