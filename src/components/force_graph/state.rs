//! Graph simulation state and interaction tracking.
//!
//! Wraps the `force_graph` physics simulation with per-node metadata taken from
//! a [`GraphSnapshot`], the pan/zoom transform, drag state for a single node,
//! and smoothly animated hover highlighting of a node's neighborhood.

use std::collections::{HashMap, HashSet};

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use super::scale::{ScaleConfig, ScaledValues};
use super::types::GraphSnapshot;

/// Smallest zoom factor.
pub const MIN_ZOOM: f64 = 0.1;
/// Largest zoom factor.
pub const MAX_ZOOM: f64 = 10.0;

/// Per-node display metadata attached to each node in the simulation.
#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	/// Sanitized identifier.
	pub id: String,
	/// Display label.
	pub label: String,
	/// CSS fill color.
	pub color: String,
	/// Radius multiplier.
	pub size: f64,
}

/// A drawn edge with its predicate label.
#[derive(Clone, Debug)]
pub struct EdgeInfo {
	/// Subject node.
	pub source: DefaultNodeIdx,
	/// Object node.
	pub target: DefaultNodeIdx,
	/// Predicate label.
	pub label: String,
	/// CSS stroke color.
	pub color: String,
}

/// Pan and zoom transform applied to the entire graph view.
#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	/// Horizontal offset in screen pixels.
	pub x: f64,
	/// Vertical offset in screen pixels.
	pub y: f64,
	/// Zoom factor (1.0 = 100%, clamped to MIN_ZOOM..MAX_ZOOM).
	pub k: f64,
}

/// Tracks an in-progress node drag. At most one node is dragged at a time.
#[derive(Clone, Debug, Default)]
pub struct DragState {
	/// Node being dragged.
	pub node_idx: Option<DefaultNodeIdx>,
	/// Pointer position when the drag began.
	pub start_x: f64,
	/// Pointer position when the drag began.
	pub start_y: f64,
	/// Node position when the drag began.
	pub node_start_x: f32,
	/// Node position when the drag began.
	pub node_start_y: f32,
}

impl DragState {
	/// Whether a node is being dragged.
	pub fn is_active(&self) -> bool {
		self.node_idx.is_some()
	}
}

/// Tracks an in-progress canvas pan operation.
#[derive(Clone, Debug, Default)]
pub struct PanState {
	/// Whether the canvas is being panned.
	pub active: bool,
	/// Pointer position when the pan began.
	pub start_x: f64,
	/// Pointer position when the pan began.
	pub start_y: f64,
	/// Transform offset when the pan began.
	pub transform_start_x: f64,
	/// Transform offset when the pan began.
	pub transform_start_y: f64,
}

/// Per-node highlight intensities that ease towards the hovered neighborhood.
///
/// Intensities rise quickly for the hovered node and its neighbors and decay
/// once they leave the set. A short hold time keeps a highlight from
/// flickering when the pointer grazes a node's edge.
#[derive(Clone, Debug, Default)]
pub struct HighlightState {
	/// Node under the pointer.
	pub hovered_node: Option<DefaultNodeIdx>,
	target_set: HashSet<DefaultNodeIdx>,
	node_intensity: HashMap<DefaultNodeIdx, f64>,
	ring_intensity: HashMap<DefaultNodeIdx, f64>,
	hold_timer: HashMap<DefaultNodeIdx, f64>,
	cached_max: f64,
}

const MIN_HOLD_TIME: f64 = 0.12;
const FADE_IN_SPEED: f64 = 6.0;
const FADE_OUT_SPEED: f64 = 4.0;
const VISIBLE_EPSILON: f64 = 0.005;

impl HighlightState {
	/// Sets the hovered node; its highlight set is the node plus every node one
	/// edge away in either direction.
	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>, edges: &[EdgeInfo]) {
		if self.hovered_node == node {
			return;
		}
		self.hovered_node = node;
		self.target_set.clear();
		let Some(idx) = node else {
			return;
		};

		self.target_set.insert(idx);
		for edge in edges {
			if edge.source == idx {
				self.target_set.insert(edge.target);
			} else if edge.target == idx {
				self.target_set.insert(edge.source);
			}
		}
		for &n in &self.target_set {
			self.hold_timer.insert(n, MIN_HOLD_TIME);
		}
	}

	/// Whether `idx` is in the current highlight set.
	pub fn is_target(&self, idx: DefaultNodeIdx) -> bool {
		self.target_set.contains(&idx)
	}

	/// Eases intensities with exponential smoothing: `v += (target - v) * (1 - e^(-speed*dt))`.
	pub fn tick(&mut self, dt: f64) {
		let rise = 1.0 - (-FADE_IN_SPEED * dt).exp();
		let decay = (-FADE_OUT_SPEED * dt).exp();

		for &idx in &self.target_set {
			let v = self.node_intensity.entry(idx).or_insert(0.0);
			*v += (1.0 - *v) * rise;
		}
		if let Some(idx) = self.hovered_node {
			let v = self.ring_intensity.entry(idx).or_insert(0.0);
			*v += (1.0 - *v) * rise;
		}

		let targets = &self.target_set;
		self.hold_timer.retain(|idx, timer| {
			if targets.contains(idx) {
				return true;
			}
			*timer -= dt;
			*timer > 0.0
		});

		let held = |idx: &DefaultNodeIdx| self.hold_timer.get(idx).is_some_and(|t| *t > 0.0);
		let mut max: f64 = 0.0;
		self.node_intensity.retain(|idx, v| {
			if !targets.contains(idx) && !held(idx) {
				*v *= decay;
			}
			max = max.max(*v);
			targets.contains(idx) || *v > VISIBLE_EPSILON
		});
		let hovered = self.hovered_node;
		self.ring_intensity.retain(|idx, v| {
			if hovered == Some(*idx) {
				return true;
			}
			if !held(idx) {
				*v *= decay;
			}
			*v > VISIBLE_EPSILON
		});
		self.cached_max = max;
	}

	/// Highlight strength of a node, 0.0 to 1.0.
	pub fn node_intensity(&self, idx: DefaultNodeIdx) -> f64 {
		self.node_intensity.get(&idx).copied().unwrap_or(0.0)
	}

	/// Hover ring strength of a node, 0.0 to 1.0.
	pub fn ring_intensity(&self, idx: DefaultNodeIdx) -> f64 {
		self.ring_intensity.get(&idx).copied().unwrap_or(0.0)
	}

	/// Geometric mean of the endpoint intensities, so edges fade with their nodes.
	pub fn edge_intensity(&self, a: DefaultNodeIdx, b: DefaultNodeIdx) -> f64 {
		(self.node_intensity(a) * self.node_intensity(b)).sqrt()
	}

	/// Strongest highlight on screen, used to dim everything else.
	pub fn max_intensity(&self) -> f64 {
		self.cached_max
	}
}

/// Pointer input, in canvas pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Interaction {
	/// Button pressed at `(x, y)`.
	Press {
		/// Canvas x.
		x: f64,
		/// Canvas y.
		y: f64,
	},
	/// Pointer moved to `(x, y)`.
	Move {
		/// Canvas x.
		x: f64,
		/// Canvas y.
		y: f64,
	},
	/// Button released.
	Release,
	/// Pointer left the canvas.
	Leave,
	/// Wheel turned over `(x, y)`; positive `delta_y` zooms out.
	Zoom {
		/// Canvas x.
		x: f64,
		/// Canvas y.
		y: f64,
		/// Wheel delta.
		delta_y: f64,
	},
}

/// Interaction events reported to the host.
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceEvent {
	/// A node was pressed; a drag starts.
	NodePress {
		/// Identifier of the pressed node.
		id: String,
	},
	/// A dragged node moved to `(x, y)` in graph space.
	NodeMove {
		/// Identifier of the dragged node.
		id: String,
		/// Graph-space x.
		x: f64,
		/// Graph-space y.
		y: f64,
	},
	/// A dragged node was dropped.
	NodeRelease {
		/// Identifier of the dropped node.
		id: String,
	},
	/// The background was pressed; a pan starts.
	CanvasPress,
}

/// Core graph state combining physics simulation with interaction and highlight tracking.
///
/// Built from one snapshot; a new snapshot means a new state, so dragged
/// positions never outlive the snapshot they were made on.
pub struct ForceGraphState {
	/// Physics simulation holding node positions.
	pub graph: ForceGraph<NodeInfo, ()>,
	/// Current pan and zoom.
	pub transform: ViewTransform,
	/// Node drag in progress.
	pub drag: DragState,
	/// Background pan in progress.
	pub pan: PanState,
	/// Hover highlight fades.
	pub highlight: HighlightState,
	/// Canvas width in pixels.
	pub width: f64,
	/// Canvas height in pixels.
	pub height: f64,
	/// Advance the simulation on each tick.
	pub animation_running: bool,
	edges: Vec<EdgeInfo>,
	edge_lookup: HashMap<(DefaultNodeIdx, DefaultNodeIdx), usize>,
	id_to_idx: HashMap<String, DefaultNodeIdx>,
}

impl ForceGraphState {
	/// Builds the simulation for `snapshot` on a `width` by `height` canvas.
	///
	/// With `simulate` off, nodes stay at their snapshot positions.
	pub fn new(snapshot: &GraphSnapshot, width: f64, height: f64, simulate: bool) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});
		let mut id_to_idx = HashMap::new();

		for node in &snapshot.nodes {
			let idx = graph.add_node(NodeData {
				x: node.x as f32,
				y: node.y as f32,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeInfo {
					id: node.id.clone(),
					label: node.label.clone(),
					color: node.color.clone(),
					size: node.size,
				},
			});
			id_to_idx.insert(node.id.clone(), idx);
		}

		let mut edges = Vec::with_capacity(snapshot.links.len());
		let mut edge_lookup = HashMap::new();
		for link in &snapshot.links {
			let (Some(&source), Some(&target)) =
				(id_to_idx.get(&link.source), id_to_idx.get(&link.target))
			else {
				continue;
			};
			if edge_lookup.contains_key(&(source, target)) {
				continue;
			}
			// The simulation cannot hold a node pulling on itself.
			if source != target {
				graph.add_edge(source, target, EdgeData::default());
			}
			edge_lookup.insert((source, target), edges.len());
			edges.push(EdgeInfo {
				source,
				target,
				label: link.label.clone(),
				color: link.color.clone(),
			});
		}

		// Center the snapshot's bounding box on the canvas.
		let (cx, cy) = bounds_center(snapshot);
		Self {
			graph,
			edges,
			edge_lookup,
			id_to_idx,
			transform: ViewTransform {
				x: width / 2.0 - cx,
				y: height / 2.0 - cy,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			highlight: HighlightState::default(),
			width,
			height,
			animation_running: simulate,
		}
	}

	/// Drawn edges in snapshot order, self-loops included.
	pub fn edges(&self) -> &[EdgeInfo] {
		&self.edges
	}

	/// Edge from `source` to `target`, if one exists.
	pub fn edge(&self, source: DefaultNodeIdx, target: DefaultNodeIdx) -> Option<&EdgeInfo> {
		self.edge_lookup.get(&(source, target)).map(|&i| &self.edges[i])
	}

	/// Simulation index of the node with identifier `id`.
	pub fn node_index(&self, id: &str) -> Option<DefaultNodeIdx> {
		self.id_to_idx.get(id).copied()
	}

	/// Current graph-space position of a node.
	pub fn node_position(&self, idx: DefaultNodeIdx) -> Option<(f32, f32)> {
		let mut found = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				found = Some((node.x(), node.y()));
			}
		});
		found
	}

	fn node_id(&self, idx: DefaultNodeIdx) -> String {
		let mut id = String::new();
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				id = node.data.user_data.id.clone();
			}
		});
		id
	}

	/// Converts canvas pixels to graph space.
	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	/// Converts graph space to canvas pixels.
	pub fn graph_to_screen(&self, gx: f64, gy: f64) -> (f64, f64) {
		(
			gx * self.transform.k + self.transform.x,
			gy * self.transform.k + self.transform.y,
		)
	}

	/// Nearest node whose hit circle contains the screen point.
	pub fn node_at_position(
		&self,
		sx: f64,
		sy: f64,
		config: &ScaleConfig,
	) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let scale = ScaledValues::new(config, self.transform.k);
		let mut best: Option<(f64, DefaultNodeIdx)> = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			let dist = (dx * dx + dy * dy).sqrt();
			if dist < scale.hit_radius_for(node.data.user_data.size)
				&& best.is_none_or(|(d, _)| dist < d)
			{
				best = Some((dist, node.index()));
			}
		});
		best.map(|(_, idx)| idx)
	}

	/// Highlights `node` and its neighbors, or clears the highlight.
	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) {
		self.highlight.set_hover(node, &self.edges);
	}

	/// Applies one pointer interaction and reports what happened to the host.
	pub fn handle(&mut self, input: Interaction, config: &ScaleConfig) -> Option<SurfaceEvent> {
		match input {
			Interaction::Press { x, y } => Some(self.press(x, y, config)),
			Interaction::Move { x, y } => self.pointer_move(x, y, config),
			Interaction::Release => self.release(),
			Interaction::Leave => {
				let event = self.release();
				self.set_hover(None);
				event
			}
			Interaction::Zoom { x, y, delta_y } => {
				self.zoom(x, y, delta_y);
				None
			}
		}
	}

	fn press(&mut self, x: f64, y: f64, config: &ScaleConfig) -> SurfaceEvent {
		match self.node_at_position(x, y, config) {
			Some(idx) => {
				let (nx, ny) = self.node_position(idx).unwrap_or_default();
				self.drag = DragState {
					node_idx: Some(idx),
					start_x: x,
					start_y: y,
					node_start_x: nx,
					node_start_y: ny,
				};
				SurfaceEvent::NodePress {
					id: self.node_id(idx),
				}
			}
			None => {
				self.pan = PanState {
					active: true,
					start_x: x,
					start_y: y,
					transform_start_x: self.transform.x,
					transform_start_y: self.transform.y,
				};
				SurfaceEvent::CanvasPress
			}
		}
	}

	fn pointer_move(&mut self, x: f64, y: f64, config: &ScaleConfig) -> Option<SurfaceEvent> {
		if let Some(idx) = self.drag.node_idx {
			let (nx, ny) = (
				self.drag.node_start_x + ((x - self.drag.start_x) / self.transform.k) as f32,
				self.drag.node_start_y + ((y - self.drag.start_y) / self.transform.k) as f32,
			);
			let mut id = String::new();
			self.graph.visit_nodes_mut(|node| {
				if node.index() == idx {
					node.data.x = nx;
					node.data.y = ny;
					node.data.is_anchor = true;
					id = node.data.user_data.id.clone();
				}
			});
			return Some(SurfaceEvent::NodeMove {
				id,
				x: nx as f64,
				y: ny as f64,
			});
		}

		let hovered = self.node_at_position(x, y, config);
		self.set_hover(hovered);
		if self.pan.active {
			self.transform.x = self.pan.transform_start_x + (x - self.pan.start_x);
			self.transform.y = self.pan.transform_start_y + (y - self.pan.start_y);
		}
		None
	}

	/// Ends a drag or pan. A dragged node stays pinned where it was dropped.
	fn release(&mut self) -> Option<SurfaceEvent> {
		self.pan.active = false;
		let idx = self.drag.node_idx.take()?;
		Some(SurfaceEvent::NodeRelease {
			id: self.node_id(idx),
		})
	}

	/// Zooms about the cursor so the point under it stays fixed.
	pub fn zoom(&mut self, x: f64, y: f64, delta_y: f64) {
		let factor = if delta_y > 0.0 { 0.9 } else { 1.1 };
		let new_k = (self.transform.k * factor).clamp(MIN_ZOOM, MAX_ZOOM);
		let ratio = new_k / self.transform.k;
		self.transform.x = x - (x - self.transform.x) * ratio;
		self.transform.y = y - (y - self.transform.y) * ratio;
		self.transform.k = new_k;
	}

	/// Advances physics and highlight fades by `dt` seconds.
	pub fn tick(&mut self, dt: f32) {
		if self.animation_running {
			self.graph.update(dt);
		}
		self.highlight.tick(dt as f64);
	}

	/// Records a new canvas size.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

fn bounds_center(snapshot: &GraphSnapshot) -> (f64, f64) {
	if snapshot.nodes.is_empty() {
		return (0.0, 0.0);
	}
	let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
	let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
	for node in &snapshot.nodes {
		min_x = min_x.min(node.x);
		max_x = max_x.max(node.x);
		min_y = min_y.min(node.y);
		max_y = max_y.max(node.y);
	}
	((min_x + max_x) / 2.0, (min_y + max_y) / 2.0)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::force_graph::{GraphLink, GraphNode};

	fn node(id: &str, x: f64, y: f64) -> GraphNode {
		GraphNode {
			id: id.into(),
			label: id.into(),
			color: "#336699".into(),
			x,
			y,
			size: 13.0,
		}
	}

	fn link(source: &str, target: &str, label: &str) -> GraphLink {
		GraphLink {
			key: format!("{source}->{target}"),
			source: source.into(),
			target: target.into(),
			label: label.into(),
			color: "#878686".into(),
		}
	}

	/// Alice -> Bob, Bob -> Carol, Dave isolated; far enough apart not to overlap.
	fn state() -> ForceGraphState {
		let snapshot = GraphSnapshot {
			nodes: vec![
				node("Alice", 0.0, 0.0),
				node("Bob", 100.0, 0.0),
				node("Carol", 100.0, 100.0),
				node("Dave", 0.0, 100.0),
			],
			links: vec![link("Alice", "Bob", "knows"), link("Bob", "Carol", "likes")],
			collapsed: 0,
		};
		ForceGraphState::new(&snapshot, 800.0, 600.0, false)
	}

	fn screen_of(s: &ForceGraphState, id: &str) -> (f64, f64) {
		let (x, y) = s.node_position(s.node_index(id).unwrap()).unwrap();
		s.graph_to_screen(x as f64, y as f64)
	}

	#[test]
	fn builds_from_snapshot() {
		let s = state();
		assert_eq!(s.edges().len(), 2);
		let (alice, bob) = (s.node_index("Alice").unwrap(), s.node_index("Bob").unwrap());
		assert_eq!(s.edge(alice, bob).unwrap().label, "knows");
		assert!(s.edge(bob, alice).is_none());
		assert_eq!(s.node_position(bob), Some((100.0, 0.0)));
		// Bounding box center (50, 50) sits in the middle of the canvas.
		assert_eq!(s.graph_to_screen(50.0, 50.0), (400.0, 300.0));
	}

	#[test]
	fn self_loop_survives_simulation() {
		let snapshot = GraphSnapshot {
			nodes: vec![node("Class", 0.0, 0.0), node("Thing", 50.0, 0.0)],
			links: vec![link("Class", "Class", "type"), link("Class", "Thing", "subClassOf")],
			collapsed: 0,
		};
		let mut s = ForceGraphState::new(&snapshot, 800.0, 600.0, true);
		for _ in 0..10 {
			s.tick(0.016);
		}
		let class = s.node_index("Class").unwrap();
		assert_eq!(s.edge(class, class).unwrap().label, "type");
		assert_eq!(s.edges().len(), 2);
		let (x, y) = s.node_position(class).unwrap();
		assert!(x.is_finite() && y.is_finite());

		s.set_hover(Some(class));
		assert!(s.highlight.is_target(s.node_index("Thing").unwrap()));
	}

	#[test]
	fn links_to_unknown_nodes_are_ignored() {
		let snapshot = GraphSnapshot {
			nodes: vec![node("Alice", 0.0, 0.0)],
			links: vec![link("Alice", "Ghost", "knows")],
			collapsed: 0,
		};
		assert!(ForceGraphState::new(&snapshot, 100.0, 100.0, false).edges().is_empty());
	}

	#[test]
	fn press_on_node_starts_drag() {
		let mut s = state();
		let config = ScaleConfig::default();
		let (x, y) = screen_of(&s, "Bob");
		let event = s.handle(Interaction::Press { x, y }, &config);
		assert_eq!(event, Some(SurfaceEvent::NodePress { id: "Bob".into() }));
		assert!(s.drag.is_active());
		assert!(!s.pan.active);
	}

	#[test]
	fn drag_moves_only_the_pressed_node() {
		let mut s = state();
		let config = ScaleConfig::default();
		let (x, y) = screen_of(&s, "Bob");
		s.handle(Interaction::Press { x, y }, &config);
		let event = s.handle(Interaction::Move { x: x + 20.0, y: y - 10.0 }, &config);
		assert_eq!(
			event,
			Some(SurfaceEvent::NodeMove {
				id: "Bob".into(),
				x: 120.0,
				y: -10.0
			})
		);
		let bob = s.node_index("Bob").unwrap();
		assert_eq!(s.node_position(bob), Some((120.0, -10.0)));
		let alice = s.node_index("Alice").unwrap();
		assert_eq!(s.node_position(alice), Some((0.0, 0.0)));

		let event = s.handle(Interaction::Release, &config);
		assert_eq!(event, Some(SurfaceEvent::NodeRelease { id: "Bob".into() }));
		assert!(!s.drag.is_active());
	}

	#[test]
	fn drag_distance_accounts_for_zoom() {
		let mut s = state();
		let config = ScaleConfig::default();
		s.transform.k = 2.0;
		let (x, y) = screen_of(&s, "Alice");
		s.handle(Interaction::Press { x, y }, &config);
		s.handle(Interaction::Move { x: x + 20.0, y }, &config);
		let alice = s.node_index("Alice").unwrap();
		assert_eq!(s.node_position(alice), Some((10.0, 0.0)));
	}

	#[test]
	fn press_on_canvas_pans() {
		let mut s = state();
		let config = ScaleConfig::default();
		let start = s.transform.clone();
		let (x, y) = s.graph_to_screen(50.0, 50.0);
		assert_eq!(
			s.handle(Interaction::Press { x, y }, &config),
			Some(SurfaceEvent::CanvasPress)
		);
		assert_eq!(
			s.handle(Interaction::Move { x: x + 30.0, y: y + 5.0 }, &config),
			None
		);
		assert_eq!(s.transform.x, start.x + 30.0);
		assert_eq!(s.transform.y, start.y + 5.0);
		assert_eq!(s.handle(Interaction::Release, &config), None);
		assert!(!s.pan.active);
	}

	#[test]
	fn hover_highlights_neighborhood() {
		let mut s = state();
		let config = ScaleConfig::default();
		let (x, y) = screen_of(&s, "Bob");
		s.handle(Interaction::Move { x, y }, &config);
		let bob = s.node_index("Bob").unwrap();
		assert_eq!(s.highlight.hovered_node, Some(bob));
		for id in ["Alice", "Bob", "Carol"] {
			assert!(s.highlight.is_target(s.node_index(id).unwrap()), "{id}");
		}
		assert!(!s.highlight.is_target(s.node_index("Dave").unwrap()));

		s.tick(0.1);
		assert!(s.highlight.node_intensity(bob) > 0.0);
		assert!(s.highlight.max_intensity() > 0.0);
		assert_eq!(s.highlight.node_intensity(s.node_index("Dave").unwrap()), 0.0);
	}

	#[test]
	fn highlight_fades_after_leave() {
		let mut s = state();
		let config = ScaleConfig::default();
		let (x, y) = screen_of(&s, "Alice");
		s.handle(Interaction::Move { x, y }, &config);
		for _ in 0..10 {
			s.tick(0.016);
		}
		let alice = s.node_index("Alice").unwrap();
		let lit = s.highlight.node_intensity(alice);
		s.handle(Interaction::Leave, &config);
		assert_eq!(s.highlight.hovered_node, None);
		for _ in 0..200 {
			s.tick(0.016);
		}
		assert!(s.highlight.node_intensity(alice) < lit);
		assert_eq!(s.highlight.max_intensity(), 0.0);
	}

	#[test]
	fn leave_ends_drag() {
		let mut s = state();
		let config = ScaleConfig::default();
		let (x, y) = screen_of(&s, "Carol");
		s.handle(Interaction::Press { x, y }, &config);
		assert_eq!(
			s.handle(Interaction::Leave, &config),
			Some(SurfaceEvent::NodeRelease { id: "Carol".into() })
		);
		assert!(!s.drag.is_active());
	}

	#[test]
	fn zoom_keeps_cursor_point_fixed_and_clamps() {
		let mut s = state();
		let (cx, cy) = (123.0, 77.0);
		let before = s.screen_to_graph(cx, cy);
		s.zoom(cx, cy, -1.0);
		let after = s.screen_to_graph(cx, cy);
		assert!((before.0 - after.0).abs() < 1e-9 && (before.1 - after.1).abs() < 1e-9);
		assert!((s.transform.k - 1.1).abs() < 1e-12);

		for _ in 0..100 {
			s.zoom(cx, cy, 1.0);
		}
		assert_eq!(s.transform.k, MIN_ZOOM);
	}

	#[test]
	fn frozen_layout_does_not_move() {
		let mut s = state();
		s.tick(0.016);
		let bob = s.node_index("Bob").unwrap();
		assert_eq!(s.node_position(bob), Some((100.0, 0.0)));
	}
}
