// Copyright 2025 Irreducible Inc.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use tracing::warn;

use crate::gadget::Vertex;

/// An ordered vertex sequence representing one matching-instance edge; a
/// hyperedge arising from a t-ary constraint has length R·t.
pub type Hyperedge = Vec<Vertex>;

/// Outcome of [`MatchingInstance::verify`]. Non-fatal by design: the caller
/// decides whether a failed verification is an error.
#[derive(Debug, Clone)]
pub struct Verification {
	pub ok: bool,
	pub diagnostics: Vec<String>,
}

/// Write-once accumulator for the k·R-partite matching instance.
///
/// Vertices are registered under partition indices as gadget slope classes
/// are processed; hyperedges are appended without validation. The only
/// validation gate is [`Self::verify`], a read-only pass over the finished
/// instance.
#[derive(Debug, Clone)]
pub struct MatchingInstance {
	k: usize,
	r: usize,
	vertices: BTreeSet<Vertex>,
	partitions: BTreeMap<usize, BTreeSet<Vertex>>,
	edges: Vec<Hyperedge>,
	// First partition each vertex was registered under. Stands in for a
	// linear first-match scan over partitions during verification; the two
	// agree because registration proceeds in ascending partition order.
	first_partition: HashMap<Vertex, usize>,
}

impl MatchingInstance {
	pub fn new(k: usize, r: usize) -> Self {
		Self {
			k,
			r,
			vertices: BTreeSet::new(),
			partitions: BTreeMap::new(),
			edges: Vec::new(),
			first_partition: HashMap::new(),
		}
	}

	/// Adds each vertex to the given partition's member set and to the overall
	/// vertex set. Re-adding a vertex is a no-op for set membership, and the
	/// same vertex may be registered under multiple partition indices; the
	/// builder does not prevent that, the verifier reports it per edge.
	pub fn register_vertices(
		&mut self,
		partition_index: usize,
		vertices: impl IntoIterator<Item = Vertex>,
	) {
		let partition = self.partitions.entry(partition_index).or_default();
		for vertex in vertices {
			self.vertices.insert(vertex.clone());
			self.first_partition
				.entry(vertex.clone())
				.or_insert(partition_index);
			partition.insert(vertex);
		}
	}

	/// Appends a hyperedge. No validation happens here; the edge may reference
	/// vertices not yet registered in any partition.
	pub fn push_edge(&mut self, edge: Hyperedge) {
		self.edges.push(edge);
	}

	pub fn k(&self) -> usize {
		self.k
	}

	pub fn r(&self) -> usize {
		self.r
	}

	pub fn vertices(&self) -> &BTreeSet<Vertex> {
		&self.vertices
	}

	pub fn partitions(&self) -> &BTreeMap<usize, BTreeSet<Vertex>> {
		&self.partitions
	}

	pub fn edges(&self) -> &[Hyperedge] {
		&self.edges
	}

	/// Read-only structural check of the finished instance.
	///
	/// Two checks, each reporting at most its own first failure: the number of
	/// populated partitions must equal k·R exactly, and every hyperedge must
	/// touch as many distinct partitions as it has vertices, attributing each
	/// vertex to the first partition it was registered under. Diagnostics are
	/// returned and also emitted as warnings.
	pub fn verify(&self) -> Verification {
		let mut diagnostics = Vec::new();

		let expected = self.k * self.r;
		if self.partitions.len() != expected {
			diagnostics.push(format!(
				"expected {expected} partitions, found {}",
				self.partitions.len()
			));
		}

		for (index, edge) in self.edges.iter().enumerate() {
			match self.distinct_partitions_touched(edge) {
				Ok(touched) if touched == edge.len() => {}
				Ok(touched) => {
					diagnostics.push(format!(
						"edge {index} touches {touched} distinct partitions, expected {}",
						edge.len()
					));
					break;
				}
				Err(vertex) => {
					diagnostics.push(format!(
						"edge {index}: vertex {vertex} is not registered in any partition"
					));
					break;
				}
			}
		}

		for diagnostic in &diagnostics {
			warn!("{diagnostic}");
		}
		Verification {
			ok: diagnostics.is_empty(),
			diagnostics,
		}
	}

	/// Attributes every vertex of the edge to a partition and counts the
	/// distinct partitions hit, or returns the first unattributable vertex.
	fn distinct_partitions_touched<'a>(&self, edge: &'a [Vertex]) -> Result<usize, &'a Vertex> {
		let mut touched = BTreeSet::new();
		for vertex in edge {
			match self.first_partition.get(vertex) {
				Some(&partition_index) => {
					touched.insert(partition_index);
				}
				None => return Err(vertex),
			}
		}
		Ok(touched.len())
	}
}
