// Copyright 2025 Irreducible Inc.

use std::collections::HashMap;

use itertools::Itertools;
use kmatch_csp::CspInstance;
use tracing::{debug, instrument};

use crate::{gadget::Gadget, matching::MatchingInstance};

/// Expands a CSP instance into its k·R-partite matching instance.
///
/// One gadget is built per variable. For every variable v and slope a, the
/// vertices covered by v's a-class are registered under partition
/// `partition_of(v)·R + a`, so the instance ends up with k·R populated
/// partitions. Every allowed assignment of a t-ary constraint then contributes
/// one hyperedge per combination of line choices, Rᵗ edges of length R·t; the
/// combinations are enumerated lazily, so memory stays proportional to one
/// hyperedge during emission. This blow-up is the construction itself, not an
/// inefficiency to optimize away.
///
/// The instance is returned unverified; running [`MatchingInstance::verify`]
/// is the caller's explicit, separate step.
#[instrument(skip_all, name = "reduce_csp_to_matching", level = "debug")]
pub fn reduce(csp: &CspInstance) -> MatchingInstance {
	let r = csp.r();

	let gadgets = csp
		.variables()
		.iter()
		.map(|variable| (variable.as_str(), Gadget::new(r, variable.as_str())))
		.collect::<HashMap<_, _>>();

	let mut instance = MatchingInstance::new(csp.k(), r);

	for variable in csp.variables() {
		let gadget = &gadgets[variable.as_str()];
		let base = csp
			.partition_of(variable)
			.expect("every declared variable has a partition")
			* r;
		for a in 0..r {
			let members = gadget.a_class(a).iter().flatten().cloned();
			instance.register_vertices(base + a, members);
		}
	}

	for constraint in csp.constraints() {
		for assignment in &constraint.allowed {
			let line_choices = constraint
				.variables
				.iter()
				.zip(assignment)
				.map(|(variable, &symbol)| gadgets[variable.as_str()].a_class(symbol).iter());
			for combination in line_choices.multi_cartesian_product() {
				let edge = combination.into_iter().flatten().cloned().collect();
				instance.push_edge(edge);
			}
		}
	}

	debug!(
		vertices = instance.vertices().len(),
		partitions = instance.partitions().len(),
		edges = instance.edges().len(),
		"reduction complete"
	);
	instance
}
