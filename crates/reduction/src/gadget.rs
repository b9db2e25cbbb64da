// Copyright 2025 Irreducible Inc.

use std::{fmt, sync::Arc};

/// One of the R² elements of a variable's gadget, identified by
/// (variable, x, y) with x, y in `[0, R)`.
///
/// The variable name is shared, so cloning a vertex does not copy the string.
/// Vertices are created once at gadget construction and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vertex {
	variable: Arc<str>,
	x: usize,
	y: usize,
}

impl Vertex {
	pub fn new(variable: impl Into<Arc<str>>, x: usize, y: usize) -> Self {
		Self {
			variable: variable.into(),
			x,
			y,
		}
	}

	pub fn variable(&self) -> &str {
		&self.variable
	}

	pub fn x(&self) -> usize {
		self.x
	}

	pub fn y(&self) -> usize {
		self.y
	}
}

impl fmt::Display for Vertex {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({}, {}, {})", self.variable, self.x, self.y)
	}
}

/// An ordered sequence of R vertices, `(x, (a·x + b) mod R)` for x = 0..R.
pub type Line = Vec<Vertex>;

/// The per-variable gadget: R² vertices and, for each slope a, the a-class of
/// R disjoint affine lines (one per offset b).
///
/// For fixed a, the R lines partition the vertex set, since each vertex (x, y)
/// lies on exactly the line with b = (y − a·x) mod R. Across slope classes the
/// same vertex recurs; at x = 0 the vertex (v, 0, b) lies on every a-class's
/// b-line.
#[derive(Debug, Clone)]
pub struct Gadget {
	r: usize,
	variable: Arc<str>,
	vertices: Vec<Vertex>,
	classes: Vec<Vec<Line>>,
}

impl Gadget {
	/// Eagerly builds the gadget for one variable. No mutation afterwards.
	pub fn new(r: usize, variable: impl Into<Arc<str>>) -> Self {
		let variable: Arc<str> = variable.into();

		let mut vertices = Vec::with_capacity(r * r);
		for x in 0..r {
			for y in 0..r {
				vertices.push(Vertex::new(variable.clone(), x, y));
			}
		}

		let classes = (0..r)
			.map(|a| {
				(0..r)
					.map(|b| {
						(0..r)
							.map(|x| Vertex::new(variable.clone(), x, (a * x + b) % r))
							.collect()
					})
					.collect()
			})
			.collect();

		Self {
			r,
			variable,
			vertices,
			classes,
		}
	}

	pub fn r(&self) -> usize {
		self.r
	}

	pub fn variable(&self) -> &str {
		&self.variable
	}

	/// All R² gadget vertices, in x-major order.
	pub fn vertices(&self) -> &[Vertex] {
		&self.vertices
	}

	/// The R lines of slope `a`, ordered by offset b.
	///
	/// Panics if `a >= R`.
	pub fn a_class(&self, a: usize) -> &[Line] {
		&self.classes[a]
	}
}
