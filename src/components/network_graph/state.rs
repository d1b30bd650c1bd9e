//! Canvas view state and interaction tracking.
//!
//! Wraps a `force_graph` simulation seeded from the topology store with
//! per-node display metadata, the pan/zoom transform, drag and pan tracking,
//! and smoothed hover intensities. The store itself is never touched: dragging
//! moves the simulation's copy of a node.

use std::collections::{HashMap, HashSet};

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use super::scale::ScaledValues;
use crate::color::Color;
use crate::config::{LayoutMode, ViewConfig};
use crate::topology::{Role, TopologyStore, VisualSpec, classify};

/// Fraction of the fitted extent left empty on each side by [`GraphState::fit_view`].
const FIT_PADDING: f64 = 0.1;

/// Per-node display metadata attached to each node in the simulation.
#[derive(Clone, Debug)]
pub struct NodeInfo {
	pub id: String,
	pub role: Role,
	pub visual: VisualSpec,
	/// Whether the current search lets this node through.
	pub visible: bool,
}

impl NodeInfo {
	pub fn radius(&self) -> f64 {
		self.visual.size_tier.radius()
	}
}

/// An edge resolved to simulation indices.
#[derive(Clone, Copy, Debug)]
pub struct EdgeInfo {
	pub source: DefaultNodeIdx,
	pub target: DefaultNodeIdx,
	pub color: Color,
}

/// An edge whose endpoints are both visible, ready to stroke.
#[derive(Clone, Copy, Debug)]
pub struct DrawableEdge {
	pub from: (f64, f64),
	pub to: (f64, f64),
	pub color: Color,
	/// Largest hover intensity of the two endpoints.
	pub hover: f64,
}

/// Axis-aligned rectangle in world units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
	pub min_x: f64,
	pub min_y: f64,
	pub max_x: f64,
	pub max_y: f64,
}

impl Bounds {
	/// Square enclosing a circle.
	pub fn around(x: f64, y: f64, r: f64) -> Self {
		Self {
			min_x: x - r,
			min_y: y - r,
			max_x: x + r,
			max_y: y + r,
		}
	}

	pub fn union(self, other: Bounds) -> Self {
		Self {
			min_x: self.min_x.min(other.min_x),
			min_y: self.min_y.min(other.min_y),
			max_x: self.max_x.max(other.max_x),
			max_y: self.max_y.max(other.max_y),
		}
	}

	pub fn width(&self) -> f64 {
		self.max_x - self.min_x
	}

	pub fn height(&self) -> f64 {
		self.max_y - self.min_y
	}

	pub fn center(&self) -> (f64, f64) {
		(
			(self.min_x + self.max_x) / 2.0,
			(self.min_y + self.max_y) / 2.0,
		)
	}
}

/// Pan and zoom transform applied to the entire graph view.
#[derive(Clone, Debug)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	/// Zoom factor, kept inside the configured bounds.
	pub k: f64,
}

impl Default for ViewTransform {
	fn default() -> Self {
		Self {
			x: 0.0,
			y: 0.0,
			k: 1.0,
		}
	}
}

/// Tracks an in-progress node drag operation.
#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

/// Tracks an in-progress canvas pan operation.
#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// Smoothed hover emphasis.
///
/// Each node carries an intensity in `0.0..=1.0` that eases towards 1.0 while
/// hovered and back to 0.0 afterwards, using exponential smoothing:
/// `value += (target - value) * (1 - e^(-speed * dt))`.
#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub hovered: Option<DefaultNodeIdx>,
	intensity: HashMap<DefaultNodeIdx, f64>,
	cached_max: f64,
}

/// ~95% of the way in 300ms.
const HOVER_SPEED: f64 = 10.0;

impl HoverState {
	pub fn set(&mut self, node: Option<DefaultNodeIdx>) {
		self.hovered = node;
	}

	pub fn tick(&mut self, dt: f64) {
		let factor = 1.0 - (-HOVER_SPEED * dt).exp();

		if let Some(idx) = self.hovered {
			let value = self.intensity.entry(idx).or_insert(0.0);
			*value += (1.0 - *value) * factor;
		}

		let hovered = self.hovered;
		let mut new_max: f64 = 0.0;
		self.intensity.retain(|idx, value| {
			if hovered != Some(*idx) {
				*value -= *value * factor;
			}
			new_max = new_max.max(*value);
			hovered == Some(*idx) || *value > 0.005
		});
		self.cached_max = new_max;
	}

	pub fn node_intensity(&self, idx: DefaultNodeIdx) -> f64 {
		self.intensity.get(&idx).copied().unwrap_or(0.0)
	}

	/// Strongest emphasis currently on screen.
	pub fn max_intensity(&self) -> f64 {
		self.cached_max
	}
}

/// View state for one mounted canvas.
///
/// Created when the component mounts and mutated by event handlers and the
/// animation loop. Search results arrive through [`GraphState::set_visible`].
pub struct GraphState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub hover: HoverState,
	pub view: ViewConfig,
	pub width: f64,
	pub height: f64,
	/// Whether the force simulation advances each frame.
	pub layout_running: bool,
	edges: Vec<EdgeInfo>,
	index: HashMap<String, DefaultNodeIdx>,
}

impl GraphState {
	pub fn new(store: &TopologyStore, view: &ViewConfig, width: f64, height: f64) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});
		let relaxed = view.layout == LayoutMode::Relaxed;
		let mut index = HashMap::with_capacity(store.len());
		let mut edges = Vec::with_capacity(store.all_edges().len());

		for node in store.all_nodes() {
			let idx = graph.add_node(NodeData {
				x: node.position.x as f32,
				y: node.position.y as f32,
				mass: 10.0,
				// Hubs stay put so a relaxed layout settles around them.
				is_anchor: !relaxed || node.role == Role::Egress,
				user_data: NodeInfo {
					id: node.id.clone(),
					role: node.role,
					visual: classify(node.role),
					visible: true,
				},
			});
			index.insert(node.id.clone(), idx);
		}

		for edge in store.all_edges() {
			if let (Some(&source), Some(&target)) = (index.get(&edge.source), index.get(&edge.target))
			{
				graph.add_edge(source, target, EdgeData::default());
				edges.push(EdgeInfo {
					source,
					target,
					color: edge.color,
				});
			}
		}

		let mut state = Self {
			graph,
			transform: ViewTransform::default(),
			drag: DragState::default(),
			pan: PanState::default(),
			hover: HoverState::default(),
			view: view.clone(),
			width,
			height,
			layout_running: relaxed,
			edges,
			index,
		};
		if view.fit_view {
			state.fit_view();
		}
		state
	}

	/// Applies a search result. Nodes absent from `visible` are hidden.
	pub fn set_visible(&mut self, visible: &HashSet<&str>) {
		self.graph.visit_nodes_mut(|node| {
			let info = &mut node.data.user_data;
			info.visible = visible.contains(info.id.as_str());
		});
		if let Some(idx) = self.hover.hovered
			&& !self.is_visible(idx)
		{
			self.hover.set(None);
		}
	}

	pub fn is_visible(&self, idx: DefaultNodeIdx) -> bool {
		let mut visible = false;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				visible = node.data.user_data.visible;
			}
		});
		visible
	}

	pub fn index_of(&self, id: &str) -> Option<DefaultNodeIdx> {
		self.index.get(id).copied()
	}

	pub fn id_of(&self, idx: DefaultNodeIdx) -> Option<String> {
		let mut id = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				id = Some(node.data.user_data.id.clone());
			}
		});
		id
	}

	/// Current world position of a node.
	pub fn node_position(&self, idx: DefaultNodeIdx) -> Option<(f64, f64)> {
		let mut position = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				position = Some((node.x() as f64, node.y() as f64));
			}
		});
		position
	}

	pub fn node_radius(&self, idx: DefaultNodeIdx) -> Option<f64> {
		let mut radius = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				radius = Some(node.data.user_data.radius());
			}
		});
		radius
	}

	/// World positions of the visible nodes.
	pub fn visible_positions(&self) -> HashMap<DefaultNodeIdx, (f64, f64)> {
		let mut positions = HashMap::new();
		self.graph.visit_nodes(|node| {
			if node.data.user_data.visible {
				positions.insert(node.index(), (node.x() as f64, node.y() as f64));
			}
		});
		positions
	}

	/// Edges with both endpoints visible.
	///
	/// The search never removes edges, so an edge may point at a hidden node;
	/// such edges are skipped here rather than drawn into empty space.
	pub fn drawable_edges(&self) -> Vec<DrawableEdge> {
		let positions = self.visible_positions();
		self.edges
			.iter()
			.filter_map(|edge| {
				let from = *positions.get(&edge.source)?;
				let to = *positions.get(&edge.target)?;
				Some(DrawableEdge {
					from,
					to,
					color: edge.color,
					hover: self
						.hover
						.node_intensity(edge.source)
						.max(self.hover.node_intensity(edge.target)),
				})
			})
			.collect()
	}

	pub fn edge_count(&self) -> usize {
		self.edges.len()
	}

	/// Extent of the visible nodes, bodies included.
	pub fn visible_bounds(&self) -> Option<Bounds> {
		let mut bounds: Option<Bounds> = None;
		self.graph.visit_nodes(|node| {
			let info = &node.data.user_data;
			if !info.visible {
				return;
			}
			let b = Bounds::around(node.x() as f64, node.y() as f64, info.radius());
			bounds = Some(bounds.map_or(b, |acc| acc.union(b)));
		});
		bounds
	}

	/// The world rectangle currently on screen.
	pub fn viewport(&self) -> Bounds {
		let (min_x, min_y) = self.screen_to_graph(0.0, 0.0);
		let (max_x, max_y) = self.screen_to_graph(self.width, self.height);
		Bounds {
			min_x,
			min_y,
			max_x,
			max_y,
		}
	}

	/// Centers the visible nodes and zooms so they fill the canvas.
	pub fn fit_view(&mut self) {
		let Some(bounds) = self.visible_bounds() else {
			return;
		};
		let pad = 1.0 + 2.0 * FIT_PADDING;
		let (bw, bh) = (bounds.width().max(1.0) * pad, bounds.height().max(1.0) * pad);
		let k = self.view.clamp_zoom((self.width / bw).min(self.height / bh));
		let (cx, cy) = bounds.center();
		self.transform = ViewTransform {
			x: self.width / 2.0 - cx * k,
			y: self.height / 2.0 - cy * k,
			k,
		};
	}

	/// Pans so that a world point sits in the middle of the canvas.
	pub fn center_on(&mut self, gx: f64, gy: f64) {
		self.transform.x = self.width / 2.0 - gx * self.transform.k;
		self.transform.y = self.height / 2.0 - gy * self.transform.k;
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn graph_to_screen(&self, gx: f64, gy: f64) -> (f64, f64) {
		(
			gx * self.transform.k + self.transform.x,
			gy * self.transform.k + self.transform.y,
		)
	}

	/// Zooms by `factor` keeping the screen point `(sx, sy)` fixed.
	pub fn zoom_at(&mut self, sx: f64, sy: f64, factor: f64) {
		let new_k = self.view.clamp_zoom(self.transform.k * factor);
		let ratio = new_k / self.transform.k;
		self.transform.x = sx - (sx - self.transform.x) * ratio;
		self.transform.y = sy - (sy - self.transform.y) * ratio;
		self.transform.k = new_k;
	}

	/// Topmost visible node under a screen point.
	pub fn node_at_position(&self, sx: f64, sy: f64, scale: &ScaledValues) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let info = &node.data.user_data;
			if !info.visible {
				return;
			}
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			if (dx * dx + dy * dy).sqrt() < info.radius() + scale.hit_padding {
				found = Some(node.index());
			}
		});
		found
	}

	pub fn begin_drag(&mut self, idx: DefaultNodeIdx, sx: f64, sy: f64) {
		let Some((x, y)) = self.node_position(idx) else {
			return;
		};
		self.drag = DragState {
			active: true,
			node_idx: Some(idx),
			start_x: sx,
			start_y: sy,
			node_start_x: x as f32,
			node_start_y: y as f32,
		};
	}

	pub fn begin_pan(&mut self, sx: f64, sy: f64) {
		self.pan = PanState {
			active: true,
			start_x: sx,
			start_y: sy,
			transform_start_x: self.transform.x,
			transform_start_y: self.transform.y,
		};
	}

	/// Continues whichever drag or pan is in progress.
	pub fn pointer_moved(&mut self, sx: f64, sy: f64) {
		if self.drag.active {
			let Some(idx) = self.drag.node_idx else {
				return;
			};
			let (dx, dy) = (
				(sx - self.drag.start_x) / self.transform.k,
				(sy - self.drag.start_y) / self.transform.k,
			);
			let (nx, ny) = (
				self.drag.node_start_x + dx as f32,
				self.drag.node_start_y + dy as f32,
			);
			self.graph.visit_nodes_mut(|node| {
				if node.index() == idx {
					node.data.x = nx;
					node.data.y = ny;
					node.data.is_anchor = true;
				}
			});
		} else if self.pan.active {
			self.transform.x = self.pan.transform_start_x + (sx - self.pan.start_x);
			self.transform.y = self.pan.transform_start_y + (sy - self.pan.start_y);
		}
	}

	pub fn end_interaction(&mut self) {
		self.drag = DragState::default();
		self.pan = PanState::default();
	}

	pub fn is_interacting(&self) -> bool {
		self.drag.active || self.pan.active
	}

	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) {
		self.hover.set(node);
	}

	pub fn tick(&mut self, dt: f32) {
		if self.layout_running {
			self.graph.update(dt);
		}
		self.hover.tick(dt as f64);
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}
