//! Behaviour shared by every strategy: determinism under a fixed seed and
//! well-formed output lines.

use rand::{SeedableRng, rngs::SmallRng};
use rstest::rstest;

use flowgen_test_support::edge_list::parse_edge_list;

use super::{Bipartite, FixedDegree, Mesh, RandomDensity, Topology};
use crate::{CapacityRange, EdgeList};

fn capacity() -> CapacityRange {
    CapacityRange::new(1, 250).expect("valid range")
}

fn run<T: Topology>(topology: &T, seed: u64) -> EdgeList {
    topology
        .generate(&mut SmallRng::seed_from_u64(seed))
        .expect("generation must succeed")
}

fn assert_deterministic<T: Topology>(topology: &T) {
    let first = run(topology, 2024).to_text();
    let second = run(topology, 2024).to_text();
    assert_eq!(first, second);
}

fn assert_well_formed<T: Topology>(topology: &T) {
    let text = run(topology, 7).to_text();
    let parsed = parse_edge_list(&text).expect("emitted line grammar must parse");
    assert_eq!(parsed.len(), text.lines().count());
}

#[rstest]
fn fixed_degree_is_deterministic_and_well_formed() {
    let graph = FixedDegree::new(40, 6, capacity()).expect("valid parameters");
    assert_deterministic(&graph);
    assert_well_formed(&graph);
}

#[rstest]
fn mesh_is_deterministic_and_well_formed() {
    let graph = Mesh::new(6, 7, 40, false).expect("valid parameters");
    assert_deterministic(&graph);
    assert_well_formed(&graph);
}

#[rstest]
fn random_density_is_deterministic_and_well_formed() {
    let graph = RandomDensity::new(30, 45, capacity()).expect("valid parameters");
    assert_deterministic(&graph);
    assert_well_formed(&graph);
}

#[rstest]
fn bipartite_is_deterministic_and_well_formed() {
    let graph = Bipartite::new(12, 9, 0.6, capacity()).expect("valid parameters");
    assert_deterministic(&graph);
    assert_well_formed(&graph);
}

#[test]
fn different_seeds_diverge() {
    let graph = RandomDensity::new(30, 50, capacity()).expect("valid parameters");
    assert_ne!(run(&graph, 1).to_text(), run(&graph, 2).to_text());
}

#[rstest]
#[case(FixedDegree::new(3, 1, capacity()).map(|g| g.name()), "fixed-degree")]
#[case(Mesh::new(1, 1, 1, true).map(|g| g.name()), "mesh")]
#[case(RandomDensity::new(2, 1, capacity()).map(|g| g.name()), "random-density")]
#[case(Bipartite::new(1, 1, 0.5, capacity()).map(|g| g.name()), "bipartite")]
fn strategies_report_stable_names(
    #[case] name: crate::Result<&'static str>,
    #[case] expected: &str,
) {
    assert_eq!(name.expect("valid parameters"), expected);
}
