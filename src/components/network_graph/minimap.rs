//! Overview panel in the bottom-right corner of the canvas.
//!
//! Shows every visible node as a dot in its role's minimap color and outlines
//! the part of the world that is currently on screen. Clicking the panel
//! recenters the main view on the clicked spot.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::{Bounds, GraphState};
use super::theme::{MinimapStyle, Theme};

/// Smallest dot radius drawn, in screen pixels.
const MIN_DOT_RADIUS: f64 = 1.5;

/// Mapping between world coordinates and the minimap panel.
#[derive(Clone, Debug)]
pub struct MinimapLayout {
	/// Panel rectangle in screen pixels: `(x, y, width, height)`.
	pub panel: (f64, f64, f64, f64),
	/// World extent shown: visible nodes plus the current viewport.
	pub world: Bounds,
	pub scale: f64,
	origin: (f64, f64),
}

impl MinimapLayout {
	pub fn new(state: &GraphState, style: &MinimapStyle) -> Self {
		let viewport = state.viewport();
		let world = state
			.visible_bounds()
			.map_or(viewport, |nodes| nodes.union(viewport));

		let panel_x = state.width - style.width - style.margin;
		let panel_y = state.height - style.height - style.margin;
		let (inner_w, inner_h) = (
			style.width - 2.0 * style.padding,
			style.height - 2.0 * style.padding,
		);
		let scale = (inner_w / world.width().max(1.0)).min(inner_h / world.height().max(1.0));
		let origin = (
			panel_x + style.padding + (inner_w - world.width() * scale) / 2.0,
			panel_y + style.padding + (inner_h - world.height() * scale) / 2.0,
		);

		Self {
			panel: (panel_x, panel_y, style.width, style.height),
			world,
			scale,
			origin,
		}
	}

	/// World point to panel pixels.
	pub fn project(&self, gx: f64, gy: f64) -> (f64, f64) {
		(
			self.origin.0 + (gx - self.world.min_x) * self.scale,
			self.origin.1 + (gy - self.world.min_y) * self.scale,
		)
	}

	/// Panel pixels back to a world point.
	pub fn unproject(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			self.world.min_x + (sx - self.origin.0) / self.scale,
			self.world.min_y + (sy - self.origin.1) / self.scale,
		)
	}

	pub fn contains(&self, sx: f64, sy: f64) -> bool {
		let (x, y, w, h) = self.panel;
		sx >= x && sx <= x + w && sy >= y && sy <= y + h
	}
}

/// Draws the minimap in screen space. Call after restoring the world transform.
pub fn draw_minimap(state: &GraphState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let style = &theme.minimap;
	let layout = MinimapLayout::new(state, style);
	let (x, y, w, h) = layout.panel;

	ctx.save();
	ctx.set_fill_style_str(&style.background.to_css());
	ctx.fill_rect(x, y, w, h);

	// Keep dots and the viewport frame inside the panel.
	ctx.begin_path();
	ctx.rect(x, y, w, h);
	ctx.clip();

	state.graph.visit_nodes(|node| {
		let info = &node.data.user_data;
		if !info.visible {
			return;
		}
		let (mx, my) = layout.project(node.x() as f64, node.y() as f64);
		let radius = (info.radius() * layout.scale).max(MIN_DOT_RADIUS);
		ctx.begin_path();
		let _ = ctx.arc(mx, my, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&info.visual.minimap_color.to_css());
		ctx.fill();
	});

	let viewport = state.viewport();
	let (vx, vy) = layout.project(viewport.min_x, viewport.min_y);
	let (vw, vh) = (
		viewport.width() * layout.scale,
		viewport.height() * layout.scale,
	);
	ctx.set_fill_style_str(&style.mask.to_css());
	ctx.fill_rect(vx, vy, vw, vh);
	ctx.set_stroke_style_str(&style.viewport.to_css());
	ctx.set_line_width(1.0);
	let _ = ctx.set_line_dash(&js_sys::Array::of2(
		&wasm_bindgen::JsValue::from_f64(4.0),
		&wasm_bindgen::JsValue::from_f64(3.0),
	));
	ctx.stroke_rect(vx, vy, vw, vh);
	let _ = ctx.set_line_dash(&js_sys::Array::new());
	ctx.restore();

	ctx.set_stroke_style_str(&style.border.to_css());
	ctx.set_line_width(1.0);
	ctx.stroke_rect(x, y, w, h);
}
