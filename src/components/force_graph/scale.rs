//! Zoom-dependent scaling configuration for graph visuals.
//!
//! # Coordinate Spaces
//!
//! - **World-space**: the coordinate system of the graph. Values in world-space
//!   scale proportionally with zoom.
//! - **Screen-space**: pixel coordinates on the canvas. Values in screen-space
//!   stay constant regardless of zoom level.
//!
//! Drawing happens after the canvas transform, so every value in
//! [`ScaledValues`] is already converted to world-space for the current zoom `k`.

/// Defines how a visual property scales with zoom level.
#[derive(Clone, Debug)]
pub enum ScaleBehavior {
	/// Constant screen-space size (pixels). Unaffected by zoom.
	Screen,
	/// World-space scaling, clamped to min/max screen-space bounds.
	Clamped {
		/// Smallest on-screen size.
		min_screen: f64,
		/// Largest on-screen size.
		max_screen: f64,
	},
}

impl ScaleBehavior {
	/// World-space value for a base value at zoom `k`.
	pub fn apply(&self, base: f64, k: f64) -> f64 {
		match self {
			ScaleBehavior::Screen => base / k,
			ScaleBehavior::Clamped {
				min_screen,
				max_screen,
			} => base.clamp(min_screen / k, max_screen / k),
		}
	}
}

/// Defines how alpha/opacity scales with zoom level.
#[derive(Clone, Debug)]
pub enum AlphaBehavior {
	/// Alpha scales linearly with zoom, clamped to [0, 1].
	ScaleWithZoom,
	/// Fully visible at `full_alpha_k`, fades to zero at `zero_alpha_k`.
	Fade {
		/// Zoom at which the element disappears.
		zero_alpha_k: f64,
		/// Zoom at which the element is fully opaque.
		full_alpha_k: f64,
	},
}

impl AlphaBehavior {
	/// Opacity at zoom `k`.
	pub fn apply(&self, k: f64) -> f64 {
		match self {
			AlphaBehavior::ScaleWithZoom => k.clamp(0.0, 1.0),
			AlphaBehavior::Fade {
				zero_alpha_k,
				full_alpha_k,
			} => {
				if zero_alpha_k == full_alpha_k {
					return 1.0;
				}
				((k - zero_alpha_k) / (full_alpha_k - zero_alpha_k)).clamp(0.0, 1.0)
			}
		}
	}
}

/// Node sizing. Radii are per unit of the snapshot's node `size`.
#[derive(Clone, Debug)]
pub struct NodeScaleConfig {
	/// Drawn radius per unit of node size.
	pub radius_per_size: f64,
	/// How the drawn radius follows zoom.
	pub radius_behavior: ScaleBehavior,
	/// Pointer hit radius per unit of node size.
	pub hit_radius_per_size: f64,
	/// How the hit radius follows zoom.
	pub hit_behavior: ScaleBehavior,
	/// Label font size in screen pixels.
	pub label_size: f64,
	/// Zoom below which label fonts stop shrinking.
	pub label_min_k: f64,
}

/// Edge line and label sizing.
#[derive(Clone, Debug)]
pub struct EdgeScaleConfig {
	/// Line width in screen pixels.
	pub line_width: f64,
	/// Predicate label font size in screen pixels.
	pub label_size: f64,
	/// Predicate labels fade out when zoomed out.
	pub label_alpha_behavior: AlphaBehavior,
}

/// Arrowhead sizing and fading.
#[derive(Clone, Debug)]
pub struct ArrowScaleConfig {
	/// Arrow size in world units.
	pub size: f64,
	/// How the arrow size follows zoom.
	pub size_behavior: ScaleBehavior,
	/// How arrow opacity follows zoom.
	pub alpha_behavior: AlphaBehavior,
	/// Minimum alpha to bother drawing.
	pub cull_alpha: f64,
}

/// Hover ring sizing.
#[derive(Clone, Debug)]
pub struct RingScaleConfig {
	/// Stroke width in screen pixels.
	pub width: f64,
	/// Offset from node edge in screen pixels.
	pub offset: f64,
}

/// Complete scale configuration for all graph elements.
#[derive(Clone, Debug)]
pub struct ScaleConfig {
	/// Node sizing.
	pub node: NodeScaleConfig,
	/// Edge sizing.
	pub edge: EdgeScaleConfig,
	/// Arrowhead sizing.
	pub arrow: ArrowScaleConfig,
	/// Hover ring sizing.
	pub ring: RingScaleConfig,
}

impl Default for ScaleConfig {
	fn default() -> Self {
		Self {
			node: NodeScaleConfig {
				radius_per_size: 0.5,
				radius_behavior: ScaleBehavior::Clamped {
					min_screen: 3.0,
					max_screen: f64::INFINITY,
				},
				hit_radius_per_size: 0.9,
				hit_behavior: ScaleBehavior::Clamped {
					min_screen: 6.0,
					max_screen: f64::INFINITY,
				},
				label_size: 12.0,
				label_min_k: 0.5,
			},
			edge: EdgeScaleConfig {
				line_width: 1.5,
				label_size: 10.0,
				label_alpha_behavior: AlphaBehavior::Fade {
					zero_alpha_k: 0.5,
					full_alpha_k: 0.9,
				},
			},
			arrow: ArrowScaleConfig {
				size: 6.0,
				size_behavior: ScaleBehavior::Clamped {
					min_screen: 0.0,
					max_screen: 18.0,
				},
				alpha_behavior: AlphaBehavior::ScaleWithZoom,
				cull_alpha: 0.05,
			},
			ring: RingScaleConfig {
				width: 1.5,
				offset: 2.0,
			},
		}
	}
}

/// Pre-computed scale values for one zoom level, created once per frame.
#[derive(Clone, Debug)]
pub struct ScaledValues {
	/// Zoom factor these values were computed for.
	pub k: f64,
	/// CSS font for node labels.
	pub label_font: String,
	/// Edge stroke width.
	pub edge_line_width: f64,
	/// CSS font for predicate labels.
	pub edge_label_font: String,
	/// Opacity multiplier for predicate labels.
	pub edge_label_alpha: f64,
	/// Arrowhead length.
	pub arrow_size: f64,
	/// Opacity multiplier for arrowheads.
	pub arrow_alpha: f64,
	/// Arrowheads too faint to draw.
	pub cull_arrows: bool,
	/// Hover ring stroke width.
	pub ring_width: f64,
	/// Gap between a node and its hover ring.
	pub ring_offset: f64,
	node: NodeScaleConfig,
}

impl ScaledValues {
	/// Resolves `config` at zoom `k`.
	pub fn new(config: &ScaleConfig, k: f64) -> Self {
		let label_k = k.max(config.node.label_min_k);
		let arrow_alpha = config.arrow.alpha_behavior.apply(k);
		Self {
			k,
			label_font: format!("{}px sans-serif", config.node.label_size / label_k),
			edge_line_width: ScaleBehavior::Screen.apply(config.edge.line_width, k),
			edge_label_font: format!("{}px sans-serif", config.edge.label_size / label_k),
			edge_label_alpha: config.edge.label_alpha_behavior.apply(k),
			arrow_size: config.arrow.size_behavior.apply(config.arrow.size, k),
			arrow_alpha,
			cull_arrows: arrow_alpha < config.arrow.cull_alpha,
			ring_width: config.ring.width / k,
			ring_offset: config.ring.offset / k,
			node: config.node.clone(),
		}
	}

	/// Node radius in world-space for a snapshot node `size`.
	pub fn radius_for(&self, size: f64) -> f64 {
		self.node
			.radius_behavior
			.apply(self.node.radius_per_size * size, self.k)
	}

	/// Pointer hit radius in world-space for a snapshot node `size`.
	pub fn hit_radius_for(&self, size: f64) -> f64 {
		self.node
			.hit_behavior
			.apply(self.node.hit_radius_per_size * size, self.k)
	}
}
