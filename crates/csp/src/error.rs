// Copyright 2025 Irreducible Inc.

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("alphabet size R={r} and partition count k={k} must both be positive")]
	InvalidParameters { r: usize, k: usize },

	#[error("variable {variable} appears in {count} constraints, exceeding the degree bound R={bound}")]
	DegreeBoundExceeded {
		variable: String,
		count: usize,
		bound: usize,
	},

	#[error("constraint {constraint} references undeclared variable {variable}")]
	UnknownVariable { constraint: usize, variable: String },

	#[error("constraint {constraint} allows an assignment of length {got}, expected {expected}")]
	ArityMismatch {
		constraint: usize,
		expected: usize,
		got: usize,
	},

	#[error("constraint {constraint} uses symbol {symbol}, outside the alphabet [0, {r})")]
	SymbolOutOfRange {
		constraint: usize,
		symbol: usize,
		r: usize,
	},
}
