// Copyright 2025 Irreducible Inc.

use std::collections::HashMap;

use crate::error::Error;

/// An element of the CSP alphabet, in the range `[0, R)`.
pub type Symbol = usize;

/// A constraint over an ordered tuple of variables.
///
/// Each allowed assignment lists one symbol per constraint variable, in the
/// same order as `variables`. Assignments are kept in declaration order so the
/// reduction emits hyperedges deterministically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
	pub variables: Vec<String>,
	pub allowed: Vec<Vec<Symbol>>,
}

impl Constraint {
	pub fn new(variables: Vec<String>, allowed: Vec<Vec<Symbol>>) -> Self {
		Self { variables, allowed }
	}

	/// The number of variables the constraint ranges over.
	pub fn arity(&self) -> usize {
		self.variables.len()
	}
}

/// A bounded-degree CSP over an alphabet of size R, with variables assigned
/// to k partitions.
///
/// The variable-to-partition mapping is computed once at construction. The
/// default policy is round-robin over the declaration order (`index % k`); it
/// is a pure structural labeling, independent of any grouping the caller may
/// have intended. Callers needing a different assignment supply one via
/// [`Self::with_partition_policy`].
#[derive(Debug, Clone)]
pub struct CspInstance {
	r: usize,
	k: usize,
	variables: Vec<String>,
	constraints: Vec<Constraint>,
	partition_of: HashMap<String, usize>,
}

impl CspInstance {
	/// Constructs a CSP instance with the round-robin partition policy.
	pub fn new(
		r: usize,
		k: usize,
		variables: Vec<String>,
		constraints: Vec<Constraint>,
	) -> Result<Self, Error> {
		Self::with_partition_policy(r, k, variables, constraints, |index| index % k)
	}

	/// Constructs a CSP instance with a caller-supplied partition policy
	/// mapping a variable's declaration index to a partition in `[0, k)`.
	///
	/// Validates, in order: every constraint references only declared
	/// variables, uses symbols below R and assignments of matching arity;
	/// then the degree bound, which requires every variable to appear in at
	/// most R constraints. Any violation is fatal since the gadgets built by
	/// the reduction have capacity for exactly R constraint participations.
	pub fn with_partition_policy(
		r: usize,
		k: usize,
		variables: Vec<String>,
		constraints: Vec<Constraint>,
		policy: impl Fn(usize) -> usize,
	) -> Result<Self, Error> {
		if r == 0 || k == 0 {
			return Err(Error::InvalidParameters { r, k });
		}

		let partition_of = variables
			.iter()
			.enumerate()
			.map(|(index, variable)| (variable.clone(), policy(index)))
			.collect::<HashMap<_, _>>();

		let mut constraint_count = HashMap::<&str, usize>::new();
		for (index, constraint) in constraints.iter().enumerate() {
			for variable in &constraint.variables {
				if !partition_of.contains_key(variable) {
					return Err(Error::UnknownVariable {
						constraint: index,
						variable: variable.clone(),
					});
				}
				*constraint_count.entry(variable.as_str()).or_default() += 1;
			}
			for assignment in &constraint.allowed {
				if assignment.len() != constraint.arity() {
					return Err(Error::ArityMismatch {
						constraint: index,
						expected: constraint.arity(),
						got: assignment.len(),
					});
				}
				if let Some(&symbol) = assignment.iter().find(|&&symbol| symbol >= r) {
					return Err(Error::SymbolOutOfRange {
						constraint: index,
						symbol,
						r,
					});
				}
			}
		}

		// Report the first offender in declaration order.
		for variable in &variables {
			let count = constraint_count
				.get(variable.as_str())
				.copied()
				.unwrap_or(0);
			if count > r {
				return Err(Error::DegreeBoundExceeded {
					variable: variable.clone(),
					count,
					bound: r,
				});
			}
		}

		Ok(Self {
			r,
			k,
			variables,
			constraints,
			partition_of,
		})
	}

	pub fn r(&self) -> usize {
		self.r
	}

	pub fn k(&self) -> usize {
		self.k
	}

	pub fn variables(&self) -> &[String] {
		&self.variables
	}

	pub fn constraints(&self) -> &[Constraint] {
		&self.constraints
	}

	/// The partition index assigned to a declared variable.
	pub fn partition_of(&self, variable: &str) -> Option<usize> {
		self.partition_of.get(variable).copied()
	}
}
