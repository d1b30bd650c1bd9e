//! Canvas rendering for the topology view.
//!
//! Drawing happens in passes for correct z-ordering:
//! 1. Background and dot grid (screen space)
//! 2. Edge halos, then edge lines (world space)
//! 3. Nodes, the hovered node last so it grows on top
//! 4. Minimap (screen space)

use std::f64::consts::PI;

use force_graph::Node;
use web_sys::CanvasRenderingContext2d;

use super::minimap::draw_minimap;
use super::scale::{ScaleConfig, ScaledValues};
use super::state::{GraphState, NodeInfo};
use super::theme::Theme;

/// Smooths transitions that would otherwise change abruptly.
fn smooth_step(t: f64) -> f64 {
	t * t * (3.0 - 2.0 * t)
}

/// Renders the complete view to the canvas.
pub fn render(
	state: &GraphState,
	ctx: &CanvasRenderingContext2d,
	config: &ScaleConfig,
	theme: &Theme,
) {
	let scale = ScaledValues::new(config, state.transform.k);

	draw_background(state, ctx, &scale, theme);

	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);

	draw_edges(state, ctx, &scale, theme);
	draw_nodes(state, ctx, &scale, theme);

	ctx.restore();

	draw_minimap(state, ctx, theme);
}

fn draw_background(
	state: &GraphState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	theme: &Theme,
) {
	let bg = &theme.background;
	ctx.set_fill_style_str(&bg.color.to_css());
	ctx.fill_rect(0.0, 0.0, state.width, state.height);

	if scale.grid_alpha <= 0.0 {
		return;
	}

	// Grid follows the pan offset so dots stay pinned to world coordinates.
	let step = bg.dot_gap * state.transform.k;
	let (ox, oy) = (
		state.transform.x.rem_euclid(step),
		state.transform.y.rem_euclid(step),
	);
	ctx.set_fill_style_str(&bg.dot_color.with_alpha(scale.grid_alpha).to_css());
	let mut y = oy;
	while y < state.height {
		let mut x = ox;
		while x < state.width {
			ctx.fill_rect(x, y, bg.dot_size, bg.dot_size);
			x += step;
		}
		y += step;
	}
}

fn draw_edges(
	state: &GraphState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	theme: &Theme,
) {
	let style = &theme.edge;
	let max_t = smooth_step(state.hover.max_intensity());
	let edges = state.drawable_edges();

	for pass in [EdgePass::Halo, EdgePass::Line] {
		let (width, alpha) = match pass {
			EdgePass::Halo => (style.halo_width, style.halo_alpha),
			EdgePass::Line => (style.line_width, style.line_alpha),
		};
		ctx.set_line_width(width * scale.edge_width_scale);

		for edge in &edges {
			// Edges away from the hovered node recede while it is emphasised.
			let edge_t = smooth_step(edge.hover);
			let dim = 1.0 - (1.0 - style.dimmed_alpha) * (max_t - edge_t).max(0.0);
			ctx.set_stroke_style_str(&edge.color.with_alpha(alpha * dim).to_css());
			ctx.begin_path();
			ctx.move_to(edge.from.0, edge.from.1);
			ctx.line_to(edge.to.0, edge.to.1);
			ctx.stroke();
		}
	}
}

#[derive(Clone, Copy)]
enum EdgePass {
	Halo,
	Line,
}

fn draw_nodes(
	state: &GraphState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	theme: &Theme,
) {
	let hovered = state.hover.hovered;

	state.graph.visit_nodes(|node| {
		if node.data.user_data.visible && Some(node.index()) != hovered {
			draw_node(state, ctx, node, scale, theme);
		}
	});

	if let Some(idx) = hovered {
		state.graph.visit_nodes(|node| {
			if node.index() == idx && node.data.user_data.visible {
				draw_node(state, ctx, node, scale, theme);
			}
		});
	}
}

fn draw_node(
	state: &GraphState,
	ctx: &CanvasRenderingContext2d,
	node: &Node<NodeInfo>,
	scale: &ScaledValues,
	theme: &Theme,
) {
	let info = &node.data.user_data;
	let (x, y) = (node.x() as f64, node.y() as f64);
	let hover_t = smooth_step(state.hover.node_intensity(node.index()));
	let radius = info.radius() * (1.0 + (theme.node.hover_scale - 1.0) * hover_t);
	let [from, to] = info.visual.color_stops;

	ctx.set_global_alpha(info.visual.opacity);

	ctx.set_shadow_color(&theme.node.shadow_color.to_css());
	ctx.set_shadow_blur(theme.node.shadow_blur);

	let gradient = ctx.create_linear_gradient(x - radius, y - radius, x + radius, y + radius);
	let _ = gradient.add_color_stop(0.0, &from.to_css());
	let _ = gradient.add_color_stop(1.0, &to.to_css());

	ctx.begin_path();
	let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill();

	ctx.set_shadow_blur(0.0);
	ctx.set_shadow_color("transparent");

	if scale.label_alpha > 0.01 {
		ctx.set_global_alpha(info.visual.opacity * scale.label_alpha);
		ctx.set_fill_style_str(&theme.node.label_color.to_css());
		ctx.set_font(&scale.label_font(theme.node.label_weight));
		ctx.set_text_align("center");
		ctx.set_text_baseline("middle");
		let _ = ctx.fill_text_with_max_width(&info.id, x, y, radius * 2.0 - 4.0);
	}

	ctx.set_global_alpha(1.0);
}
