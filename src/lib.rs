//! netgraph: interactive network topology diagram.
//!
//! This crate provides a WASM app that draws a network's egress hub, servers,
//! gateways and peers on a canvas, with search filtering, hover tooltips,
//! pan/zoom and a minimap. The topology core (store, role classifier, search)
//! is plain Rust under [`topology`].

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, error, info};

pub mod color;
pub mod components;
pub mod config;
pub mod topology;

pub use components::network_graph::{NetworkGraphCanvas, Theme, TooltipData};
pub use components::search_bar::SearchBar;
pub use config::{LayoutMode, TopologyConfig, ViewConfig, load_config};
pub use topology::{
	NetworkEdge, NetworkNode, Role, SearchFilter, SizeTier, TopologyError, TopologyStore,
	VisualSpec, classify,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("netgraph: logging initialized");
}

/// Loads and validates the topology. Both steps fail fast on a broken dataset.
fn load_topology() -> Result<(TopologyStore, ViewConfig), TopologyError> {
	let config = load_config()?;
	let view = config.view.clone();
	Ok((TopologyStore::from_config(config)?, view))
}

/// Shown instead of the graph when the dataset is unusable.
#[component]
fn ConfigError(message: String) -> impl IntoView {
	view! {
		<div class="config-error">
			<h2>"Topology could not be loaded"</h2>
			<p>{message}</p>
		</div>
	}
}

/// Main application component.
///
/// Owns the search query; the search bar reports edits through a callback and
/// the canvas reads the query to decide what to draw.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let (query, set_query) = signal(String::new());
	let on_query = Callback::new(move |next: String| set_query.set(next));

	let graph = match load_topology() {
		Ok((store, view_config)) => {
			let store = Arc::new(store);
			view! {
				<SearchBar value=query on_change=on_query />
				<NetworkGraphCanvas store=store query=query view=view_config />
			}
			.into_any()
		}
		Err(err) => {
			error!("netgraph: {err}");
			view! { <ConfigError message=err.to_string() /> }.into_any()
		}
	};

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="netmaker · Network Graph" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="app-shell">
			<header class="top-bar">
				<h1>"netmaker"</h1>
			</header>
			<main class="graph-area">{graph}</main>
		</div>
	}
}
