//! Configuration documents consumed at startup.
//!
//! A [`TopologyConfig`] is the raw, unvalidated dataset: node roles are plain
//! strings and edges may reference anything. It becomes trustworthy only after
//! [`TopologyStore::from_config`](crate::topology::TopologyStore::from_config)
//! accepts it.

use log::{debug, info};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

use crate::topology::{Attributes, Position, TopologyError};

/// DOM id of the optional `<script type="application/json">` carrying a dataset.
pub const TOPOLOGY_ELEMENT_ID: &str = "topology-data";

/// Mock netmaker topology shipped with the crate.
const BUNDLED_TOPOLOGY: &str = include_str!("../data/topology.json");

/// A node as authored in the configuration document.
#[derive(Clone, Debug, Deserialize)]
pub struct NodeConfig {
	/// Unique identifier, also shown as the node label.
	pub id: String,
	/// Role name; must be one of `egress`, `server`, `gateway`, `node`.
	pub role: String,
	/// Initial layout position in world units.
	pub position: Position,
	/// `ip`, `os`, `location` and any extra descriptive keys.
	pub attributes: Attributes,
}

/// A link between two authored nodes.
#[derive(Clone, Debug, Deserialize)]
pub struct EdgeConfig {
	/// Unique edge identifier.
	pub id: String,
	/// Source node ID.
	pub source: String,
	/// Target node ID.
	pub target: String,
}

/// How node positions evolve after mount.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
	/// Nodes stay where they were authored until dragged.
	#[default]
	Authored,
	/// Non-hub nodes are handed to the force simulation and settle from their
	/// authored positions.
	Relaxed,
}

/// Viewport behaviour of the interaction shell.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
	/// Lower zoom bound (fraction of 1:1).
	pub min_zoom: f64,
	/// Upper zoom bound.
	pub max_zoom: f64,
	/// Fit all visible nodes into the viewport on mount.
	pub fit_view: bool,
	/// Whether nodes stay at their authored positions.
	pub layout: LayoutMode,
}

impl Default for ViewConfig {
	fn default() -> Self {
		Self {
			min_zoom: 0.2,
			max_zoom: 1.5,
			fit_view: true,
			layout: LayoutMode::Authored,
		}
	}
}

impl ViewConfig {
	/// Rejects zoom bounds the viewport cannot honour.
	///
	/// Both bounds must be positive and finite; a zero zoom cannot be undone
	/// by later zoom steps.
	pub fn validate(&self) -> Result<(), TopologyError> {
		for (name, value) in [("min_zoom", self.min_zoom), ("max_zoom", self.max_zoom)] {
			if !value.is_finite() || value <= 0.0 {
				return Err(TopologyError::InvalidView(format!(
					"{name} must be a positive number, got {value}"
				)));
			}
		}
		Ok(())
	}

	/// Clamps a zoom factor into the configured bounds.
	///
	/// Inverted bounds are treated as a single fixed zoom at `min_zoom`.
	pub fn clamp_zoom(&self, k: f64) -> f64 {
		if self.max_zoom < self.min_zoom {
			return self.min_zoom;
		}
		k.clamp(self.min_zoom, self.max_zoom)
	}
}

/// Complete configuration document: nodes, edges and view options.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TopologyConfig {
	/// Nodes in display order.
	pub nodes: Vec<NodeConfig>,
	/// Edges in display order.
	pub edges: Vec<EdgeConfig>,
	/// Viewport options; every field has a default.
	#[serde(default)]
	pub view: ViewConfig,
}

impl TopologyConfig {
	/// Parses a configuration document and checks its view settings.
	pub fn from_json(text: &str) -> Result<Self, TopologyError> {
		let config: Self = serde_json::from_str(text)?;
		config.view.validate()?;
		Ok(config)
	}

	/// The mock dataset compiled into the crate.
	pub fn bundled() -> Result<Self, TopologyError> {
		Self::from_json(BUNDLED_TOPOLOGY)
	}
}

/// Reads the text of the page's topology `<script>` element, if there is one.
fn embedded_document() -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id(TOPOLOGY_ELEMENT_ID)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Loads the configuration from the page, falling back to the bundled dataset.
pub fn load_config() -> Result<TopologyConfig, TopologyError> {
	let config = match embedded_document() {
		Some(text) => {
			debug!("netgraph: reading topology from #{TOPOLOGY_ELEMENT_ID}");
			TopologyConfig::from_json(&text)?
		}
		None => {
			debug!("netgraph: no #{TOPOLOGY_ELEMENT_ID} element, using bundled topology");
			TopologyConfig::bundled()?
		}
	};
	info!(
		"netgraph: loaded {} nodes, {} edges",
		config.nodes.len(),
		config.edges.len()
	);
	Ok(config)
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn bundled_dataset_parses() {
		let config = TopologyConfig::bundled().unwrap();
		assert_eq!(config.nodes.len(), 13);
		assert_eq!(config.edges.len(), 12);
		assert_eq!(config.view.layout, LayoutMode::Authored);
	}

	#[test]
	fn view_section_is_optional() {
		let config = TopologyConfig::from_json(r#"{ "nodes": [], "edges": [] }"#).unwrap();
		assert_eq!(config.view.min_zoom, 0.2);
		assert_eq!(config.view.max_zoom, 1.5);
		assert!(config.view.fit_view);
	}

	#[test]
	fn partial_view_section_keeps_other_defaults() {
		let config = TopologyConfig::from_json(
			r#"{ "nodes": [], "edges": [], "view": { "max_zoom": 3.0, "layout": "relaxed" } }"#,
		)
		.unwrap();
		assert_eq!(config.view.min_zoom, 0.2);
		assert_eq!(config.view.max_zoom, 3.0);
		assert_eq!(config.view.layout, LayoutMode::Relaxed);
	}

	#[test]
	fn missing_required_attribute_is_a_parse_error() {
		let err = TopologyConfig::from_json(
			r#"{
				"nodes": [{
					"id": "a", "role": "node", "position": { "x": 0, "y": 0 },
					"attributes": { "ip": "10.0.0.1", "os": "Debian 12" }
				}],
				"edges": []
			}"#,
		)
		.unwrap_err();
		assert!(matches!(err, TopologyError::Parse(_)));
		assert!(err.to_string().contains("location"));
	}

	#[test]
	fn non_positive_zoom_bounds_are_rejected() {
		for view in [
			r#"{ "min_zoom": 0.0 }"#,
			r#"{ "min_zoom": -0.5 }"#,
			r#"{ "max_zoom": 0 }"#,
		] {
			let err = TopologyConfig::from_json(&format!(
				r#"{{ "nodes": [], "edges": [], "view": {view} }}"#
			))
			.unwrap_err();
			assert!(matches!(err, TopologyError::InvalidView(_)), "{view}: {err}");
		}
	}

	#[test]
	fn non_finite_zoom_bounds_are_rejected() {
		let view = ViewConfig {
			max_zoom: f64::INFINITY,
			..ViewConfig::default()
		};
		assert!(matches!(
			view.validate(),
			Err(TopologyError::InvalidView(msg)) if msg.contains("max_zoom")
		));
		let view = ViewConfig {
			min_zoom: f64::NAN,
			..ViewConfig::default()
		};
		assert!(view.validate().is_err());
		assert!(ViewConfig::default().validate().is_ok());
	}

	#[test]
	fn zoom_clamps_into_bounds() {
		let view = ViewConfig::default();
		assert_eq!(view.clamp_zoom(0.01), 0.2);
		assert_eq!(view.clamp_zoom(1.0), 1.0);
		assert_eq!(view.clamp_zoom(9.0), 1.5);
	}
}
