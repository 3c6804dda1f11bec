//! Graph snapshot construction from a triple list.
//!
//! One node per distinct subject/object identifier and one edge per ordered
//! (subject, object) pair. The first triple to mention a node or pair decides
//! its attributes; later triples never update them.

use std::collections::HashSet;

use log::debug;

use crate::components::force_graph::{GraphLink, GraphNode, GraphSnapshot};
use crate::rdf::{Triple, display_label};

/// Radius multiplier given to every node.
pub const NODE_SIZE: f64 = 13.0;
/// Stroke color shared by every edge.
pub const EDGE_COLOR: &str = "#878686";
/// Initial positions fall in `[0, LAYOUT_EXTENT)` on both axes.
pub const LAYOUT_EXTENT: f64 = 100.0;

/// Key of the directed edge between two nodes.
pub fn edge_key(source: &str, target: &str) -> String {
	format!("{source}->{target}")
}

/// Builds snapshots whose positions and colors are drawn from `seed`.
///
/// The same seed and triples always give the same snapshot; callers wanting a
/// fresh layout on every rebuild pass a fresh seed.
#[derive(Clone, Copy, Debug)]
pub struct GraphBuilder {
	seed: u64,
}

impl GraphBuilder {
	/// Builder drawing layout and colors from `seed`.
	pub fn new(seed: u64) -> Self {
		Self { seed }
	}

	/// Builds the snapshot for `triples`, skipping any with an empty field.
	pub fn build(&self, triples: &[Triple]) -> GraphSnapshot {
		let mut snapshot = GraphSnapshot::default();
		let mut seen_nodes = HashSet::new();
		let mut seen_edges = HashSet::new();

		for triple in triples.iter().filter(|t| t.is_complete()) {
			for id in [&triple.subject, &triple.object] {
				if seen_nodes.insert(id.as_str()) {
					snapshot.nodes.push(self.node(id));
				}
			}

			let key = edge_key(&triple.subject, &triple.object);
			if seen_edges.contains(&key) {
				snapshot.collapsed += 1;
				continue;
			}
			seen_edges.insert(key.clone());
			snapshot.links.push(GraphLink {
				key,
				source: triple.subject.clone(),
				target: triple.object.clone(),
				label: display_label(&triple.predicate),
				color: EDGE_COLOR.to_string(),
			});
		}

		debug!(
			"built graph: {} nodes, {} edges, {} collapsed",
			snapshot.nodes.len(),
			snapshot.links.len(),
			snapshot.collapsed
		);
		snapshot
	}

	fn node(&self, id: &str) -> GraphNode {
		GraphNode {
			id: id.to_string(),
			label: display_label(id),
			color: format!("#{:06x}", self.hash(id, 0) & 0xff_ffff),
			x: unit(self.hash(id, 1)) * LAYOUT_EXTENT,
			y: unit(self.hash(id, 2)) * LAYOUT_EXTENT,
			size: NODE_SIZE,
		}
	}

	/// FNV-1a over seed, salt and id, finished with a splitmix64 avalanche.
	fn hash(&self, id: &str, salt: u8) -> u64 {
		let mut h: u64 = 0xcbf2_9ce4_8422_2325;
		let seed = self.seed.to_le_bytes();
		for byte in seed.iter().chain(std::iter::once(&salt)).chain(id.as_bytes()) {
			h ^= *byte as u64;
			h = h.wrapping_mul(0x0000_0100_0000_01b3);
		}
		h ^= h >> 30;
		h = h.wrapping_mul(0xbf58_476d_1ce4_e5b9);
		h ^= h >> 27;
		h = h.wrapping_mul(0x94d0_49bb_1331_11eb);
		h ^ (h >> 31)
	}
}

/// Maps a hash to `[0, 1)` using its top 53 bits.
fn unit(h: u64) -> f64 {
	(h >> 11) as f64 / (1u64 << 53) as f64
}
