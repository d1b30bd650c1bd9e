//! Hover tooltip listing a node's attributes.

use leptos::prelude::*;

use crate::topology::{TopologyError, TopologyStore};

/// Gap between the top of a node and the tooltip, in screen pixels.
const TOOLTIP_GAP: f64 = 8.0;

/// Everything the tooltip shows, plus where to anchor it.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipData {
	/// Node id, used as the title.
	pub id: String,
	/// Node IP address.
	pub ip: String,
	/// Operating system.
	pub os: String,
	/// Site name.
	pub location: String,
	/// Role name.
	pub role: String,
	/// Any further attributes, sorted by key.
	pub extra: Vec<(String, String)>,
	/// Screen x of the node center.
	pub x: f64,
	/// Screen y of the node's top edge.
	pub y: f64,
}

impl TooltipData {
	/// Collects tooltip content for a node anchored at a screen point.
	pub fn for_node(
		store: &TopologyStore,
		id: &str,
		anchor: (f64, f64),
	) -> Result<Self, TopologyError> {
		let node = store.get_node(id)?;
		let attrs = &node.attributes;
		Ok(Self {
			id: node.id.clone(),
			ip: attrs.ip.clone(),
			os: attrs.os.clone(),
			location: attrs.location.clone(),
			role: node.role.to_string(),
			extra: attrs
				.extra
				.iter()
				.map(|(key, value)| (key.clone(), value.clone()))
				.collect(),
			x: anchor.0,
			y: anchor.1 - TOOLTIP_GAP,
		})
	}
}

/// Floating tooltip positioned above the hovered node.
#[component]
pub fn NodeTooltip(#[prop(into)] data: Signal<Option<TooltipData>>) -> impl IntoView {
	move || {
		data.get().map(|tip| {
			let style = format!(
				"position: absolute; left: {}px; top: {}px; transform: translate(-50%, -100%); pointer-events: none;",
				tip.x, tip.y
			);
			view! {
				<div class="node-tooltip" style=style>
					<p class="node-tooltip-title">{tip.id}</p>
					<p><span class="node-tooltip-key">"IP:"</span>" "{tip.ip}</p>
					<p><span class="node-tooltip-key">"OS:"</span>" "{tip.os}</p>
					<p><span class="node-tooltip-key">"Location:"</span>" "{tip.location}</p>
					<p><span class="node-tooltip-key">"Type:"</span>" "{tip.role}</p>
					{tip
						.extra
						.into_iter()
						.map(|(key, value)| {
							view! {
								<p><span class="node-tooltip-key">{key}":"</span>" "{value}</p>
							}
						})
						.collect_view()}
				</div>
			}
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::TopologyConfig;
	use pretty_assertions::assert_eq;

	#[test]
	fn lists_attributes_and_role() {
		let store = TopologyStore::from_config(TopologyConfig::bundled().unwrap()).unwrap();
		let tip = TooltipData::for_node(&store, "gateway", (300.0, 120.0)).unwrap();
		assert_eq!(
			tip,
			TooltipData {
				id: "gateway".into(),
				ip: "10.104.0.1".into(),
				os: "pfSense 2.5".into(),
				location: "Miami".into(),
				role: "gateway".into(),
				extra: Vec::new(),
				x: 300.0,
				y: 112.0,
			}
		);
	}

	#[test]
	fn extra_attributes_follow_the_required_ones() {
		let config = TopologyConfig::from_json(
			r#"{
				"nodes": [{
					"id": "edge-1", "role": "node", "position": { "x": 0, "y": 0 },
					"attributes": {
						"ip": "10.0.0.2", "os": "Alpine", "location": "Oslo",
						"rack": "b7", "owner": "ops"
					}
				}],
				"edges": []
			}"#,
		)
		.unwrap();
		let store = TopologyStore::from_config(config).unwrap();
		let tip = TooltipData::for_node(&store, "edge-1", (0.0, 0.0)).unwrap();
		assert_eq!(
			tip.extra,
			[
				("owner".to_string(), "ops".to_string()),
				("rack".to_string(), "b7".to_string()),
			]
		);
	}

	#[test]
	fn unknown_node_is_surfaced() {
		let store = TopologyStore::from_config(TopologyConfig::bundled().unwrap()).unwrap();
		assert!(matches!(
			TooltipData::for_node(&store, "ghost", (0.0, 0.0)),
			Err(TopologyError::NotFound(_))
		));
	}
}
