//! Visual theming for the topology canvas.
//!
//! Role colors come from the classifier; the theme covers everything that does
//! not depend on a node's role.

use crate::color::Color;

/// Canvas background with a dot grid.
#[derive(Clone, Debug)]
pub struct BackgroundStyle {
	/// Canvas fill.
	pub color: Color,
	/// Grid dot fill.
	pub dot_color: Color,
	/// Grid spacing in world units.
	pub dot_gap: f64,
	/// Dot edge length in screen pixels.
	pub dot_size: f64,
}

/// Edge stroke: a solid line over a wider, fainter halo.
#[derive(Clone, Debug)]
pub struct EdgeStyle {
	/// Line width in world units.
	pub line_width: f64,
	/// Line alpha before dimming.
	pub line_alpha: f64,
	/// Halo width in world units.
	pub halo_width: f64,
	/// Halo alpha before dimming.
	pub halo_alpha: f64,
	/// Alpha multiplier for edges away from the hovered node.
	pub dimmed_alpha: f64,
}

/// Node label and drop shadow.
#[derive(Clone, Debug)]
pub struct NodeStyle {
	/// Label text fill.
	pub label_color: Color,
	/// Font weight prefix for the CSS font string.
	pub label_weight: &'static str,
	/// Scale reached by a fully hovered node.
	pub hover_scale: f64,
	/// Drop shadow under each node body.
	pub shadow_color: Color,
	/// Shadow blur radius in screen pixels.
	pub shadow_blur: f64,
}

/// Minimap panel in the bottom-right corner, in screen pixels.
#[derive(Clone, Debug)]
pub struct MinimapStyle {
	/// Panel width.
	pub width: f64,
	/// Panel height.
	pub height: f64,
	/// Gap to the canvas edges.
	pub margin: f64,
	/// Inner gap around the projected world.
	pub padding: f64,
	/// Panel fill.
	pub background: Color,
	/// Panel outline.
	pub border: Color,
	/// Outline of the on-screen region.
	pub viewport: Color,
	/// Shade over the off-screen region.
	pub mask: Color,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	/// Canvas fill and dot grid.
	pub background: BackgroundStyle,
	/// Edge strokes.
	pub edge: EdgeStyle,
	/// Labels and shadows.
	pub node: NodeStyle,
	/// Overview panel.
	pub minimap: MinimapStyle,
}

impl Theme {
	/// Dark netmaker look (default).
	pub fn netmaker() -> Self {
		Self {
			background: BackgroundStyle {
				color: Color::hex(0x111827),
				dot_color: Color::hex(0x2a2a2a),
				dot_gap: 16.0,
				dot_size: 1.0,
			},
			edge: EdgeStyle {
				line_width: 2.0,
				line_alpha: 0.5,
				halo_width: 4.0,
				halo_alpha: 0.2,
				dimmed_alpha: 0.4,
			},
			node: NodeStyle {
				label_color: Color::rgb(255, 255, 255),
				label_weight: "600",
				hover_scale: 1.1,
				shadow_color: Color::rgba(0, 0, 0, 0.45),
				shadow_blur: 12.0,
			},
			minimap: MinimapStyle {
				width: 200.0,
				height: 150.0,
				margin: 16.0,
				padding: 8.0,
				background: Color::rgba(40, 40, 40, 0.7),
				border: Color::hex(0x555555),
				viewport: Color::rgba(255, 255, 255, 0.6),
				mask: Color::rgba(17, 24, 39, 0.35),
			},
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::netmaker()
	}
}
