//! Leptos component wrapping the topology canvas.
//!
//! The component creates an HTML canvas element and wires up mouse/wheel event
//! handlers for node dragging, panning, zooming and hover tooltips. An
//! animation loop runs via `requestAnimationFrame`, advancing hover transitions
//! (and the relaxed layout, when enabled) and redrawing each frame.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use leptos::prelude::*;
use log::{debug, error, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent, Window};

use super::minimap::MinimapLayout;
use super::render;
use super::scale::{ScaleConfig, ScaledValues};
use super::state::GraphState;
use super::theme::Theme;
use super::tooltip::{NodeTooltip, TooltipData};
use crate::config::ViewConfig;
use crate::topology::{SearchFilter, TopologyStore};

/// Bundles view state with visual configuration.
struct GraphContext {
	state: GraphState,
	scale: ScaleConfig,
	theme: Theme,
}

impl GraphContext {
	fn scaled(&self) -> ScaledValues {
		ScaledValues::new(&self.scale, self.state.transform.k)
	}

	/// Tooltip for the hovered node, anchored above it on screen.
	fn tooltip(&self, store: &TopologyStore) -> Option<TooltipData> {
		let idx = self.state.hover.hovered?;
		let id = self.state.id_of(idx)?;
		let (gx, gy) = self.state.node_position(idx)?;
		let radius = self.state.node_radius(idx)?;
		let anchor = self.state.graph_to_screen(gx, gy - radius);
		match TooltipData::for_node(store, &id, anchor) {
			Ok(tip) => Some(tip),
			Err(err) => {
				error!("netgraph: tooltip for `{id}`: {err}");
				None
			}
		}
	}
}

fn viewport_size(window: &Window) -> Option<(f64, f64)> {
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

/// Drawing-buffer size for the canvas: the viewport when fullscreen, otherwise
/// the explicit size or the parent container's.
fn canvas_size(
	window: &Window,
	canvas: &HtmlCanvasElement,
	fullscreen: bool,
	width: Option<f64>,
	height: Option<f64>,
) -> (f64, f64) {
	if fullscreen {
		return viewport_size(window).unwrap_or((800.0, 600.0));
	}
	let parent = canvas.parent_element();
	(
		width.unwrap_or_else(|| {
			parent
				.as_ref()
				.map(|p| p.client_width() as f64)
				.unwrap_or(800.0)
		}),
		height.unwrap_or_else(|| {
			parent
				.as_ref()
				.map(|p| p.client_height() as f64)
				.unwrap_or(600.0)
		}),
	)
}

fn canvas_point(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

/// Renders the topology on a canvas element with a hover tooltip overlay.
///
/// `query` is read-only here: the owner updates it and the component re-applies
/// the search to decide which nodes are drawn. The component sizes itself to
/// its parent container by default, or fills the viewport with
/// `fullscreen = true`. Either way it follows window resizes unless both
/// `width` and `height` are given.
#[component]
pub fn NetworkGraphCanvas(
	store: Arc<TopologyStore>,
	#[prop(into)] query: Signal<String>,
	#[prop(optional)] view: ViewConfig,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let tooltip = RwSignal::new(None::<TooltipData>);
	let context: Rc<RefCell<Option<GraphContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (context_init, animate_init, resize_cb_init, store_init) =
		(context.clone(), animate.clone(), resize_cb.clone(), store.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			error!("netgraph: no window, canvas not initialised");
			return;
		};

		let (w, h) = canvas_size(&window, &canvas, fullscreen, width, height);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = match canvas.get_context("2d") {
			Ok(Some(ctx)) => match ctx.dyn_into() {
				Ok(ctx) => ctx,
				Err(_) => {
					error!("netgraph: 2d context has an unexpected type");
					return;
				}
			},
			_ => {
				error!("netgraph: canvas 2d context unavailable");
				return;
			}
		};

		let mut state = GraphState::new(&store_init, &view, w, h);
		let query_now = query.get_untracked();
		if !query_now.is_empty() {
			state.set_visible(&SearchFilter::new(&query_now).visible_ids(&store_init));
		}
		debug!("netgraph: canvas mounted at {w}x{h}, zoom {:.2}", state.transform.k);

		*context_init.borrow_mut() = Some(GraphContext {
			state,
			scale: ScaleConfig::default(),
			theme: Theme::default(),
		});

		// A fixed-size canvas never follows the window.
		if width.is_none() || height.is_none() {
			let (context_resize, canvas_resize) = (context_init.clone(), canvas.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let Some(window) = web_sys::window() else {
					return;
				};
				let (nw, nh) = canvas_size(&window, &canvas_resize, fullscreen, width, height);
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				if let Some(ref mut c) = *context_resize.borrow_mut() {
					c.state.resize(nw, nh);
				}
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		let (context_anim, animate_inner) = (context_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				c.state.tick(0.016);
				render::render(&c.state, &ctx, &c.scale, &c.theme);
			}
			if let (Some(cb), Some(win)) = (&*animate_inner.borrow(), web_sys::window()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	// Re-apply the search whenever the owner changes the query.
	let (context_query, store_query) = (context.clone(), store.clone());
	Effect::new(move |_| {
		let filter = SearchFilter::new(&query.get());
		let visible = filter.visible_ids(&store_query);
		debug!(
			"netgraph: query {:?} shows {} of {} nodes",
			filter.query(),
			visible.len(),
			store_query.len()
		);
		if let Some(ref mut c) = *context_query.borrow_mut() {
			c.state.set_visible(&visible);
		}
		if tooltip.with_untracked(|tip| {
			tip.as_ref()
				.is_some_and(|tip| !visible.contains(tip.id.as_str()))
		}) {
			tooltip.set(None);
		}
	});

	let context_md = context.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (x, y) = canvas_point(&canvas, &ev);

		if let Some(ref mut c) = *context_md.borrow_mut() {
			let minimap = MinimapLayout::new(&c.state, &c.theme.minimap);
			if minimap.contains(x, y) {
				let (gx, gy) = minimap.unproject(x, y);
				c.state.center_on(gx, gy);
				return;
			}
			let scale = c.scaled();
			match c.state.node_at_position(x, y, &scale) {
				Some(idx) => c.state.begin_drag(idx, x, y),
				None => c.state.begin_pan(x, y),
			}
		}
	};

	let (context_mm, store_mm) = (context.clone(), store.clone());
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (x, y) = canvas_point(&canvas, &ev);

		let next = match *context_mm.borrow_mut() {
			Some(ref mut c) => {
				// Hover follows the pointer unless a node is being dragged.
				if !c.state.drag.active {
					let scale = c.scaled();
					let hovered = c.state.node_at_position(x, y, &scale);
					c.state.set_hover(hovered);
				}
				c.state.pointer_moved(x, y);
				c.tooltip(&store_mm)
			}
			None => None,
		};
		if tooltip.with_untracked(|tip| *tip != next) {
			tooltip.set(next);
		}
	};

	let context_mu = context.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_mu.borrow_mut() {
			c.state.end_interaction();
		}
	};

	let context_ml = context.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_ml.borrow_mut() {
			c.state.end_interaction();
			c.state.set_hover(None);
		}
		tooltip.set(None);
	};

	let (context_wh, store_wh) = (context.clone(), store.clone());
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (x, y) = canvas_point(&canvas, &ev);

		let next = match *context_wh.borrow_mut() {
			Some(ref mut c) => {
				let factor = if ev.delta_y() > 0.0 { 0.9 } else { 1.1 };
				c.state.zoom_at(x, y, factor);
				c.tooltip(&store_wh)
			}
			None => {
				warn!("netgraph: wheel event before canvas initialised");
				None
			}
		};
		tooltip.set(next);
	};

	view! {
		<div class="network-graph" style="position: relative; width: 100%; height: 100%; overflow: hidden;">
			<canvas
				node_ref=canvas_ref
				class="network-graph-canvas"
				on:mousedown=on_mousedown
				on:mousemove=on_mousemove
				on:mouseup=on_mouseup
				on:mouseleave=on_mouseleave
				on:wheel=on_wheel
				style="display: block; cursor: grab;"
			/>
			<NodeTooltip data=tooltip />
		</div>
	}
}
