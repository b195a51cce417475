//! End-to-end properties of the constrained graph strategy.
//!
//! Self-hosted: the crate's own runner fuzzes the strategy across seeds and
//! sizes, checking the structural guarantees every draw must satisfy.

use graphstrat::*;

fn multiset(mut sizes: Vec<usize>) -> Vec<usize> {
    sizes.sort_unstable();
    sizes
}

/// The constraint sets the fuzz properties run under, spanning the corners
/// of the bound space.
fn constraint_cases() -> Vec<Constraints> {
    vec![
        Constraints::new(),
        Constraints::new().with_min_nodes(12),
        Constraints::new().with_min_nodes(8).with_max_nodes(8),
        Constraints::new()
            .with_min_nodes(6)
            .with_min_num_components(3)
            .with_min_component_size(2),
        Constraints::new()
            .with_min_nodes(5)
            .with_max_nodes(14)
            .with_min_num_components(2)
            .with_max_num_components(4),
        Constraints::new()
            .with_min_nodes(10)
            .with_max_component_size(3),
        Constraints::new()
            .with_min_nodes(4)
            .with_max_nodes(9)
            .with_min_component_size(2)
            .with_max_component_size(4),
        Constraints::new()
            .with_min_num_components(1)
            .with_max_num_components(1),
    ]
}

fn satisfies(graph: &Graph, c: &Constraints) -> bool {
    let sizes = graph.connected_component_sizes();
    let total: usize = sizes.iter().sum();
    sizes.len() >= c.min_num_components
        && c.max_num_components.map_or(true, |max| sizes.len() <= max)
        && total >= c.min_nodes
        && c.max_nodes.map_or(true, |max| total <= max)
        && sizes.iter().all(|&s| {
            s >= c.min_component_size && c.max_component_size.map_or(true, |max| s <= max)
        })
}

#[test]
fn drawn_graphs_satisfy_their_constraints() {
    for (case, constraints) in constraint_cases().into_iter().enumerate() {
        let c = constraints.clone();
        let prop = for_all_named(graphs(constraints).unwrap(), "graph", move |g| {
            satisfies(g, &c)
        });
        let result = prop.run_with_seed(&Config::default(), Seed::from_u64(case as u64));
        assert!(result.is_pass(), "case {case} failed: {result}");
    }
}

#[test]
fn no_edge_crosses_declared_ranges() {
    for (case, constraints) in constraint_cases().into_iter().enumerate() {
        let prop = for_all_named(graphs(constraints).unwrap(), "graph", |g: &Graph| {
            g.edges().iter().all(|&(a, b)| {
                g.components()
                    .iter()
                    .any(|r| r.contains(&a) && r.contains(&b))
            })
        });
        let result = prop.run_with_seed(&Config::default(), Seed::from_u64(case as u64));
        assert!(result.is_pass(), "case {case} failed: {result}");
    }
}

#[test]
fn declared_ranges_are_the_connected_components() {
    for (case, constraints) in constraint_cases().into_iter().enumerate() {
        let prop = for_all_named(graphs(constraints).unwrap(), "graph", |g: &Graph| {
            multiset(g.connected_component_sizes()) == multiset(g.declared_sizes())
        });
        let result = prop.run_with_seed(&Config::default(), Seed::from_u64(case as u64));
        assert!(result.is_pass(), "case {case} failed: {result}");
    }
}

#[test]
fn shrinking_reaches_the_floor_partition() {
    for constraints in constraint_cases() {
        let strategy = GraphStrategy::new(constraints.clone()).unwrap();
        let floor_sizes = multiset(strategy.floor().sizes().to_vec());

        for seed in 0..20u64 {
            let tree = strategy.draw(Size::new(100), Seed::from_u64(seed));
            let shrinks = tree.shrinks();
            let last_sizes = match shrinks.last() {
                Some(graph) => multiset(graph.declared_sizes()),
                // No shrinks means the draw already sat on the floor
                None => multiset(tree.value.declared_sizes()),
            };
            assert_eq!(
                last_sizes, floor_sizes,
                "shrinking under {constraints:?} stopped short of the floor"
            );
        }
    }
}

#[test]
fn runner_shrinks_failures_to_the_minimal_graph() {
    // An always-failing predicate forces the runner down the whole chain;
    // the minimal counterexample is the floor: components {0,1},{2,3},{4,5}.
    let constraints = Constraints::new()
        .with_min_nodes(6)
        .with_min_num_components(3)
        .with_min_component_size(2);
    let prop = for_all(graphs(constraints).unwrap(), |_: &Graph| false);

    match prop.run_with_seed(&Config::default(), Seed::from_u64(42)) {
        TestResult::Fail { counterexample, .. } => {
            assert!(
                counterexample.contains("components: [0..2, 2..4, 4..6]"),
                "unexpected minimal counterexample: {counterexample}"
            );
        }
        result => panic!("expected failure, got {result:?}"),
    }
}

#[test]
fn runner_reports_a_failure_above_a_size_threshold() {
    // Small graphs pass, so the failure only appears once the size ramp
    // produces draws above 8 nodes; every shrink candidate at or below the
    // threshold passes and is discarded.
    let prop = for_all_named(
        graphs(Constraints::new().with_min_nodes(3)).unwrap(),
        "graph",
        |g: &Graph| g.node_count() <= 8,
    );

    match prop.run_with_seed(&Config::default(), Seed::from_u64(13)) {
        TestResult::Fail {
            tests_run,
            shrink_steps,
            ..
        } => {
            // Size-0 draws sit on the floor (3 nodes) and pass
            assert!(tests_run > 1);
            assert_eq!(shrink_steps[0].step, 0);
            assert!(shrink_steps
                .iter()
                .all(|s| s.variable_name.as_deref() == Some("graph")));
        }
        result => panic!("expected a failure above the threshold, got {result:?}"),
    }
}

#[test]
fn draws_are_deterministic_under_a_fixed_seed() {
    let make = || {
        graphs(
            Constraints::new()
                .with_min_nodes(7)
                .with_min_num_components(2),
        )
        .unwrap()
    };
    let (a, b) = (make(), make());

    for seed in 0..50u64 {
        let left = a.generate(Size::new(63), Seed::from_u64(seed));
        let right = b.generate(Size::new(63), Seed::from_u64(seed));
        assert_eq!(left.value.components(), right.value.components());
        assert_eq!(left.value.edges(), right.value.edges());
    }
}

#[test]
fn scenario_minimum_three_components_of_two() {
    // min_nodes=6, min_num_components=3, min_component_size=2
    let constraints = Constraints::new()
        .with_min_nodes(6)
        .with_min_num_components(3)
        .with_min_component_size(2);
    let strategy = GraphStrategy::new(constraints).unwrap();

    for seed in 0..200u64 {
        let graph = strategy.draw(Size::new(90), Seed::from_u64(seed)).value;
        let sizes = graph.connected_component_sizes();
        assert!(sizes.len() >= 3);
        assert!(sizes.iter().all(|&s| s >= 2));
        assert!(sizes.iter().sum::<usize>() >= 6);
    }
}

#[test]
fn scenario_default_shrink_target_is_one_isolated_node() {
    let prop = for_all(graphs(Constraints::new()).unwrap(), |_: &Graph| false);
    match prop.run_with_seed(&Config::default(), Seed::from_u64(7)) {
        TestResult::Fail { counterexample, .. } => {
            assert!(
                counterexample.contains("components: [0..1], edges: []"),
                "expected a single isolated node, got: {counterexample}"
            );
        }
        result => panic!("expected failure, got {result:?}"),
    }
}

#[test]
fn scenario_over_constrained_fails_at_construction() {
    // 2 components of size >= 2 cannot fit in max_nodes = 3
    let err = graphs(
        Constraints::new()
            .with_min_num_components(2)
            .with_min_component_size(2)
            .with_max_nodes(3),
    )
    .unwrap_err();
    assert!(matches!(err, GraphStratError::InfeasibleConstraints { .. }));
}

#[test]
fn scenario_three_singleton_components() {
    let graph = Graph::assemble(&Partition::from_sizes(vec![1, 1, 1]), Seed::from_u64(0));
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.connected_component_sizes(), vec![1, 1, 1]);
}

#[test]
fn calibration_is_a_one_time_cost() {
    let strategy = GraphStrategy::new(Constraints::new().with_min_nodes(5)).unwrap();
    assert!(!strategy.is_calibrated());
    assert!(strategy.calibration().is_none());

    strategy.draw(Size::new(10), Seed::from_u64(1));
    assert!(strategy.is_calibrated());
    let calibration = strategy.calibration().unwrap();
    assert_eq!(calibration.trials, CALIBRATION_TRIALS);

    // Later draws reuse the cached parameters
    strategy.draw(Size::new(90), Seed::from_u64(2));
    assert_eq!(strategy.calibration().unwrap(), calibration);
}

#[test]
fn larger_sizes_draw_larger_graphs_on_average() {
    let strategy = GraphStrategy::new(Constraints::new().with_min_nodes(3)).unwrap();

    let mean_nodes = |size: usize| -> f64 {
        let total: usize = (0..200u64)
            .map(|s| strategy.draw(Size::new(size), Seed::from_u64(s)).value.node_count())
            .sum();
        total as f64 / 200.0
    };

    assert!(mean_nodes(0) < mean_nodes(100));
}
