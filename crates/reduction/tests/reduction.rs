// Copyright 2025 Irreducible Inc.

use kmatch_csp::{Constraint, CspInstance};
use kmatch_reduction::{reduce, Vertex};
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn names(names: &[&str]) -> Vec<String> {
	names.iter().map(|name| name.to_string()).collect()
}

/// R=3, k=2, four variables in round-robin partitions (0, 1, 0, 1) and two
/// binary constraints with two allowed assignments each.
fn worked_example() -> CspInstance {
	CspInstance::new(
		3,
		2,
		names(&["v1", "v2", "v3", "v4"]),
		vec![
			Constraint::new(names(&["v1", "v3"]), vec![vec![0, 1], vec![1, 2]]),
			Constraint::new(names(&["v2", "v4"]), vec![vec![2, 0], vec![1, 1]]),
		],
	)
	.unwrap()
}

#[test]
fn test_worked_example_counts() {
	let instance = reduce(&worked_example());

	// k·R populated partitions, R² vertices per gadget.
	assert_eq!(instance.partitions().len(), 6);
	assert_eq!(instance.vertices().len(), 4 * 9);

	// Each constraint: 2 allowed assignments × 3² line combinations.
	assert_eq!(instance.edges().len(), 36);
	assert!(instance.edges().iter().all(|edge| edge.len() == 6));
}

#[test]
fn test_edge_vertices_are_registered() {
	let instance = reduce(&worked_example());
	for edge in instance.edges() {
		for vertex in edge {
			assert!(instance.vertices().contains(vertex));
			assert!(instance
				.partitions()
				.values()
				.any(|members| members.contains(vertex)));
		}
	}
}

#[test]
fn test_hyperedges_keep_constraint_variable_order() {
	let instance = reduce(&worked_example());
	// First constraint lists (v1, v3): the first R vertices of each of its
	// edges come from v1's gadget, the rest from v3's.
	let edge = &instance.edges()[0];
	assert!(edge[..3].iter().all(|vertex| vertex.variable() == "v1"));
	assert!(edge[3..].iter().all(|vertex| vertex.variable() == "v3"));
}

// The a-class registration places every gadget vertex into all R partitions
// of its variable's base: each a-class covers the full R² vertex set, so the
// k·R partition structure is not vertex-disjoint. That is the construction's
// actual behavior and is asserted here rather than silently "fixed".
#[test]
fn test_partitions_of_one_base_share_all_gadget_vertices() {
	let instance = reduce(&worked_example());

	// v1 sits in CSP partition 0, so its base partitions are 0, 1, 2.
	for a in 0..3 {
		let members = &instance.partitions()[&a];
		for x in 0..3 {
			for y in 0..3 {
				assert!(members.contains(&Vertex::new("v1", x, y)));
			}
		}
	}

	// Consequently the three base partitions hold identical member sets
	// (v1's and v3's gadgets, both in CSP partition 0).
	assert_eq!(instance.partitions()[&0], instance.partitions()[&1]);
	assert_eq!(instance.partitions()[&1], instance.partitions()[&2]);
	assert_eq!(instance.partitions()[&0].len(), 18);
}

// With overlapping partitions, every vertex of an edge is attributed to its
// variable's base partition, so edges collapse onto far fewer distinct
// partitions than their length and the structural verifier rejects the
// instance.
#[test]
fn test_verifier_rejects_overlapping_partition_structure() {
	let instance = reduce(&worked_example());
	let verification = instance.verify();
	assert!(!verification.ok);
	assert_eq!(verification.diagnostics.len(), 1);
	assert!(verification.diagnostics[0].contains("distinct partitions"));
}

proptest! {
	#[test]
	fn test_constraint_expansion_counts(
		r in 2..=4usize,
		k in 1..=3usize,
		arity in 1..=2usize,
		n_allowed in 1..=3usize,
		seed in any::<u64>(),
	) {
		let mut rng = StdRng::seed_from_u64(seed);
		let variables: Vec<String> = (0..k * 2).map(|i| format!("x{i}")).collect();

		let mut allowed: Vec<Vec<usize>> = (0..n_allowed)
			.map(|_| (0..arity).map(|_| rng.gen_range(0..r)).collect())
			.collect();
		allowed.sort();
		allowed.dedup();
		let n_assignments = allowed.len();

		let constraint = Constraint::new(variables[..arity].to_vec(), allowed);
		let csp = CspInstance::new(r, k, variables, vec![constraint]).unwrap();
		let instance = reduce(&csp);

		prop_assert_eq!(instance.partitions().len(), k * r);
		prop_assert_eq!(instance.edges().len(), n_assignments * r.pow(arity as u32));
		prop_assert!(instance.edges().iter().all(|edge| edge.len() == r * arity));
		prop_assert!(instance
			.edges()
			.iter()
			.flatten()
			.all(|vertex| instance.vertices().contains(vertex)));
	}
}
