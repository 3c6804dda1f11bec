//! Graph snapshot consumed by the force graph component.
//!
//! A snapshot is derived from the triple list and replaced wholesale whenever
//! the triples change; the component never patches one in place.

use serde::{Deserialize, Serialize};

/// A node in the graph.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
	/// Sanitized identifier. Unique within a snapshot and referenced by links.
	pub id: String,
	/// Display label (identifier with underscores shown as spaces).
	pub label: String,
	/// CSS color, `#rrggbb`.
	pub color: String,
	/// Initial position in graph space.
	pub x: f64,
	/// Vertical counterpart of `x`.
	pub y: f64,
	/// Base radius multiplier relative to the canvas node scale.
	pub size: f64,
}

/// A directed edge between two nodes, keyed by the ordered pair.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphLink {
	/// `"<source>-><target>"`.
	pub key: String,
	/// Subject node identifier.
	pub source: String,
	/// Object node identifier.
	pub target: String,
	/// Display label of the predicate that created the edge.
	pub label: String,
	/// CSS stroke color.
	pub color: String,
}

/// Complete graph data: nodes and links in first-seen order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
	/// One node per distinct identifier.
	pub nodes: Vec<GraphNode>,
	/// One link per ordered node pair.
	pub links: Vec<GraphLink>,
	/// Triples whose edge collapsed into an earlier one between the same pair.
	#[serde(default)]
	pub collapsed: usize,
}

impl GraphSnapshot {
	/// Whether the snapshot has no nodes.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Node with identifier `id`.
	pub fn node(&self, id: &str) -> Option<&GraphNode> {
		self.nodes.iter().find(|n| n.id == id)
	}

	/// Link from `source` to `target`.
	pub fn link(&self, source: &str, target: &str) -> Option<&GraphLink> {
		self.links
			.iter()
			.find(|l| l.source == source && l.target == target)
	}
}
