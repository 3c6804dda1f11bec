//! Canvas rendering for the force graph.
//!
//! Drawing happens in passes for correct z-ordering:
//! 1. Background (screen space)
//! 2. Edge lines and arrowheads, then predicate labels (world space)
//! 3. Dimmed or resting nodes, then highlighted nodes on top
//! 4. Vignette (screen space)

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::scale::{ScaleConfig, ScaledValues};
use super::state::{ForceGraphState, NodeInfo};
use super::theme::{Color, Theme};

type Node = force_graph::Node<NodeInfo>;

fn smooth_step(t: f64) -> f64 {
	t * t * (3.0 - 2.0 * t)
}

/// Renders the complete graph to the canvas.
pub fn render(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	config: &ScaleConfig,
	theme: &Theme,
) {
	let scale = ScaledValues::new(config, state.transform.k);

	draw_background(state, ctx, theme);

	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);

	draw_edges(state, ctx, &scale, theme);
	draw_nodes(state, ctx, &scale, theme);

	ctx.restore();

	if theme.background.vignette > 0.0 {
		draw_vignette(state, ctx, theme);
	}
}

fn draw_background(state: &ForceGraphState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let (w, h) = (state.width, state.height);
	let gradient = theme
		.background
		.use_gradient
		.then(|| ctx.create_radial_gradient(w / 2.0, h / 2.0, 0.0, w / 2.0, h / 2.0, w.max(h) * 0.8))
		.and_then(Result::ok);

	match gradient {
		Some(gradient) => {
			let _ = gradient.add_color_stop(0.0, &theme.background.color_secondary.to_css());
			let _ = gradient.add_color_stop(1.0, &theme.background.color.to_css());
			#[allow(deprecated)]
			ctx.set_fill_style(&gradient);
		}
		None => ctx.set_fill_style_str(&theme.background.color.to_css()),
	}
	ctx.fill_rect(0.0, 0.0, w, h);
}

fn draw_vignette(state: &ForceGraphState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let (w, h) = (state.width, state.height);
	let Ok(gradient) =
		ctx.create_radial_gradient(w / 2.0, h / 2.0, w.min(h) * 0.3, w / 2.0, h / 2.0, w.max(h) * 0.7)
	else {
		return;
	};
	let _ = gradient.add_color_stop(0.0, "rgba(0, 0, 0, 0)");
	let _ = gradient.add_color_stop(
		1.0,
		&Color::rgba(0, 0, 0, theme.background.vignette).to_css(),
	);
	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill_rect(0.0, 0.0, w, h);
}

/// Edge opacity and width multiplier given the highlight state.
fn edge_emphasis(state: &ForceGraphState, n1: &Node, n2: &Node) -> (f64, f64) {
	let edge_t = smooth_step(state.highlight.edge_intensity(n1.index(), n2.index()));
	let max_t = smooth_step(state.highlight.max_intensity());
	if edge_t > 0.01 {
		(0.7 + 0.3 * edge_t, 1.0 + 0.4 * edge_t)
	} else if max_t > 0.01 {
		(0.7 - 0.6 * max_t, 1.0 - 0.3 * max_t)
	} else {
		(0.7, 1.0)
	}
}

fn draw_edges(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	theme: &Theme,
) {
	state.graph.visit_edges(|n1, n2, _| {
		draw_edge(state, ctx, scale, theme, n1, n2);
	});
	// Self-loops are kept out of the simulation, so walk the nodes for them.
	state.graph.visit_nodes(|node| {
		draw_self_loop(state, ctx, scale, theme, node);
	});

	if scale.edge_label_alpha <= 0.01 {
		return;
	}
	ctx.set_font(&scale.edge_label_font);
	ctx.set_text_align("center");
	state.graph.visit_edges(|n1, n2, _| {
		draw_edge_label(state, ctx, scale, theme, n1, n2);
	});
	state.graph.visit_nodes(|node| {
		draw_self_loop_label(state, ctx, scale, theme, node);
	});
	ctx.set_text_align("start");
}

fn edge_color(state: &ForceGraphState, n1: &Node, n2: &Node, theme: &Theme) -> Color {
	let base = state
		.edge(n1.index(), n2.index())
		.map(|e| Color::parse(&e.color))
		.unwrap_or(Color::rgb(135, 134, 134));
	let (emphasis, _) = edge_emphasis(state, n1, n2);
	let alpha = theme.edge.alpha * emphasis / 0.7;
	base.with_alpha(alpha.clamp(0.0, 1.0))
}

/// Sideways offset of the curve's control point, zero for a straight edge.
fn curve_bend(theme: &Theme, scale: &ScaledValues, dist: f64, r1: f64, r2: f64) -> f64 {
	if theme.edge.curved && dist > r1 + r2 + scale.arrow_size {
		dist * theme.edge.curve_tension * 0.3
	} else {
		0.0
	}
}

/// Point halfway along the edge: the curve's apex when bent, else the midpoint.
///
/// A quadratic curve passes through half of its control point's offset at
/// `t = 0.5`, so opposite edges of a pair land on opposite sides.
fn label_anchor(x1: f64, y1: f64, x2: f64, y2: f64, bend: f64) -> (f64, f64) {
	let (dx, dy) = (x2 - x1, y2 - y1);
	let dist = (dx * dx + dy * dy).sqrt();
	let (mx, my) = ((x1 + x2) / 2.0, (y1 + y2) / 2.0);
	if dist < 0.001 {
		return (mx, my);
	}
	let (ux, uy) = (dx / dist, dy / dist);
	(mx - uy * bend * 0.5, my + ux * bend * 0.5)
}

/// Center and radius of the loop drawn above a node with radius `r`.
fn loop_geometry(x: f64, y: f64, r: f64) -> (f64, f64, f64) {
	let loop_r = r * 0.75;
	(x, y - r - loop_r * 0.5, loop_r)
}

fn draw_edge(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	theme: &Theme,
	n1: &Node,
	n2: &Node,
) {
	let (x1, y1, x2, y2) = (n1.x() as f64, n1.y() as f64, n2.x() as f64, n2.y() as f64);
	let (dx, dy) = (x2 - x1, y2 - y1);
	let dist = (dx * dx + dy * dy).sqrt();
	if dist < 0.001 {
		return;
	}

	let color = edge_color(state, n1, n2, theme);
	let (_, width_mult) = edge_emphasis(state, n1, n2);
	let r1 = scale.radius_for(n1.data.user_data.size);
	let r2 = scale.radius_for(n2.data.user_data.size);
	let (ux, uy) = (dx / dist, dy / dist);
	let bend = curve_bend(theme, scale, dist, r1, r2);

	ctx.set_stroke_style_str(&color.to_css());
	ctx.set_line_width(scale.edge_line_width * width_mult);
	ctx.begin_path();
	ctx.move_to(x1 + ux * r1, y1 + uy * r1);
	let (end_x, end_y) = (x2 - ux * (r2 + scale.arrow_size), y2 - uy * (r2 + scale.arrow_size));
	if bend > 0.0 {
		let (cx, cy) = ((x1 + x2) / 2.0 - uy * bend, (y1 + y2) / 2.0 + ux * bend);
		let _ = ctx.quadratic_curve_to(cx, cy, end_x, end_y);
	} else {
		ctx.line_to(end_x, end_y);
	}
	ctx.stroke();

	if scale.cull_arrows {
		return;
	}
	ctx.set_fill_style_str(&color.with_alpha(color.a * scale.arrow_alpha).to_css());
	let (tip_x, tip_y) = (x2 - ux * r2, y2 - uy * r2);
	let (back_x, back_y) = (tip_x - ux * scale.arrow_size, tip_y - uy * scale.arrow_size);
	let (px, py) = (-uy * scale.arrow_size * 0.5, ux * scale.arrow_size * 0.5);
	ctx.begin_path();
	ctx.move_to(tip_x, tip_y);
	ctx.line_to(back_x + px, back_y + py);
	ctx.line_to(back_x - px, back_y - py);
	ctx.close_path();
	ctx.fill();
}

fn draw_self_loop(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	theme: &Theme,
	node: &Node,
) {
	if state.edge(node.index(), node.index()).is_none() {
		return;
	}
	let color = edge_color(state, node, node, theme);
	let (_, width_mult) = edge_emphasis(state, node, node);
	let r = scale.radius_for(node.data.user_data.size);
	let (cx, cy, loop_r) = loop_geometry(node.x() as f64, node.y() as f64, r);

	ctx.set_stroke_style_str(&color.to_css());
	ctx.set_line_width(scale.edge_line_width * width_mult);
	ctx.begin_path();
	let _ = ctx.arc(cx, cy, loop_r, 0.0, 2.0 * PI);
	ctx.stroke();
}

/// Draws the predicate label along the edge, kept upright.
fn draw_edge_label(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	theme: &Theme,
	n1: &Node,
	n2: &Node,
) {
	let Some(edge) = state.edge(n1.index(), n2.index()) else {
		return;
	};
	if edge.label.is_empty() {
		return;
	}
	let (x1, y1, x2, y2) = (n1.x() as f64, n1.y() as f64, n2.x() as f64, n2.y() as f64);
	let dist = ((x2 - x1).powi(2) + (y2 - y1).powi(2)).sqrt();
	let bend = curve_bend(
		theme,
		scale,
		dist,
		scale.radius_for(n1.data.user_data.size),
		scale.radius_for(n2.data.user_data.size),
	);
	let (ax, ay) = label_anchor(x1, y1, x2, y2, bend);
	let mut angle = (y2 - y1).atan2(x2 - x1);
	if angle.abs() > PI / 2.0 {
		angle += PI;
	}

	ctx.save();
	let _ = ctx.translate(ax, ay);
	let _ = ctx.rotate(angle);
	ctx.set_fill_style_str(&label_color(state, scale, theme, n1, n2).to_css());
	let _ = ctx.fill_text(&edge.label, 0.0, -3.0 / scale.k);
	ctx.restore();
}

fn draw_self_loop_label(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	theme: &Theme,
	node: &Node,
) {
	let Some(edge) = state.edge(node.index(), node.index()) else {
		return;
	};
	if edge.label.is_empty() {
		return;
	}
	let r = scale.radius_for(node.data.user_data.size);
	let (cx, cy, loop_r) = loop_geometry(node.x() as f64, node.y() as f64, r);
	ctx.set_fill_style_str(&label_color(state, scale, theme, node, node).to_css());
	let _ = ctx.fill_text(&edge.label, cx, cy - loop_r - 3.0 / scale.k);
}

fn label_color(
	state: &ForceGraphState,
	scale: &ScaledValues,
	theme: &Theme,
	n1: &Node,
	n2: &Node,
) -> Color {
	let (emphasis, _) = edge_emphasis(state, n1, n2);
	let color = theme.edge.label_color;
	color.with_alpha(color.a * scale.edge_label_alpha * (emphasis / 0.7).min(1.0))
}

fn draw_nodes(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	theme: &Theme,
) {
	let max_t = smooth_step(state.highlight.max_intensity());
	let has_highlight = max_t > 0.01;

	// Pass 1: nodes outside the highlight, faded towards the dimmed color
	state.graph.visit_nodes(|node| {
		if state.highlight.node_intensity(node.index()) > 0.001 {
			return;
		}
		let base = Color::parse(&node.data.user_data.color);
		let (color, radius_mult) = if has_highlight {
			(base.lerp(theme.node.dimmed, max_t), 1.0 - 0.15 * max_t)
		} else {
			(base, 1.0)
		};
		let label_alpha = if has_highlight { 1.0 - 0.8 * max_t } else { 1.0 };
		draw_node(ctx, node, scale, theme, color, radius_mult, label_alpha);
	});

	if !has_highlight {
		return;
	}

	// Pass 2: the hovered neighborhood on top
	state.graph.visit_nodes(|node| {
		let idx = node.index();
		let node_t = smooth_step(state.highlight.node_intensity(idx));
		if node_t <= 0.001 {
			return;
		}
		let ring_t = smooth_step(state.highlight.ring_intensity(idx));
		let radius_mult = 1.0 + 0.15 * node_t + 0.2 * ring_t;
		let color = Color::parse(&node.data.user_data.color);
		draw_node(ctx, node, scale, theme, color, radius_mult, 1.0);

		if ring_t > 0.01 {
			let radius = scale.radius_for(node.data.user_data.size) * radius_mult;
			ctx.begin_path();
			let _ = ctx.arc(node.x() as f64, node.y() as f64, radius + scale.ring_offset, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str(&theme.node.ring_color.with_alpha(0.8 * ring_t).to_css());
			ctx.set_line_width(scale.ring_width);
			ctx.stroke();
		}
	});
}

fn draw_node(
	ctx: &CanvasRenderingContext2d,
	node: &Node,
	scale: &ScaledValues,
	theme: &Theme,
	color: Color,
	radius_mult: f64,
	label_alpha: f64,
) {
	let (x, y) = (node.x() as f64, node.y() as f64);
	let radius = scale.radius_for(node.data.user_data.size) * radius_mult;

	ctx.begin_path();
	let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
	let gradient = theme
		.node
		.use_gradient
		.then(|| ctx.create_radial_gradient(x - radius * 0.3, y - radius * 0.3, 0.0, x, y, radius))
		.and_then(Result::ok);
	match gradient {
		Some(gradient) => {
			let _ = gradient.add_color_stop(0.0, &color.lighten(0.4).to_css());
			let _ = gradient.add_color_stop(0.7, &color.to_css());
			let _ = gradient.add_color_stop(1.0, &color.darken(0.2).to_css());
			#[allow(deprecated)]
			ctx.set_fill_style(&gradient);
		}
		None => ctx.set_fill_style_str(&color.to_css()),
	}
	ctx.fill();

	if theme.node.border_width > 0.0 {
		ctx.set_stroke_style_str(&theme.node.border_color.to_css());
		ctx.set_line_width(theme.node.border_width / scale.k);
		ctx.stroke();
	}

	let label = &node.data.user_data.label;
	if label.is_empty() || label_alpha < 0.05 {
		return;
	}
	let ink = theme.node.label_color;
	ctx.set_fill_style_str(&ink.with_alpha(ink.a * label_alpha).to_css());
	ctx.set_font(&scale.label_font);
	let _ = ctx.fill_text(label, x + radius + 4.0 / scale.k, y + 3.0 / scale.k);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn straight_edge_label_sits_at_midpoint() {
		assert_eq!(label_anchor(0.0, 0.0, 100.0, 0.0, 0.0), (50.0, 0.0));
	}

	#[test]
	fn opposite_edges_put_labels_on_their_own_curves() {
		let forward = label_anchor(0.0, 0.0, 100.0, 0.0, 20.0);
		let backward = label_anchor(100.0, 0.0, 0.0, 0.0, 20.0);
		assert_eq!(forward, (50.0, 10.0));
		assert_eq!(backward, (50.0, -10.0));
	}

	#[test]
	fn coincident_endpoints_do_not_divide_by_zero() {
		let (x, y) = label_anchor(5.0, 5.0, 5.0, 5.0, 20.0);
		assert!(x.is_finite() && y.is_finite());
	}

	#[test]
	fn self_loop_sits_above_its_node() {
		let (cx, cy, loop_r) = loop_geometry(10.0, 10.0, 8.0);
		assert_eq!(cx, 10.0);
		assert_eq!(loop_r, 6.0);
		// Bottom of the loop overlaps the node so the two read as joined.
		assert!(cy + loop_r > 10.0 - 8.0);
		assert!(cy < 10.0 - 8.0);
	}
}
