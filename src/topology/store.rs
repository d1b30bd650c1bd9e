//! The authoritative, read-only topology snapshot.

use std::collections::{HashMap, HashSet};

use log::{debug, warn};

use super::classify::edge_color;
use super::error::TopologyError;
use super::model::{Attributes, NetworkEdge, NetworkNode, Role};
use crate::config::TopologyConfig;

/// Nodes and edges that passed validation, with O(1) lookup by node id.
///
/// Built once from a [`TopologyConfig`] and never mutated afterwards.
#[derive(Clone, Debug, Default)]
pub struct TopologyStore {
	nodes: Vec<NetworkNode>,
	edges: Vec<NetworkEdge>,
	index: HashMap<String, usize>,
}

impl TopologyStore {
	/// Validates a configuration document and builds the store.
	///
	/// Fails on the first integrity problem: a duplicate node or edge id, a
	/// role outside the closed set, or an edge endpoint that names no node.
	pub fn from_config(config: TopologyConfig) -> Result<Self, TopologyError> {
		let mut nodes = Vec::with_capacity(config.nodes.len());
		let mut index = HashMap::with_capacity(config.nodes.len());

		for node in config.nodes {
			let role = node.role.parse::<Role>()?;
			if index.contains_key(&node.id) {
				return Err(TopologyError::DuplicateNode(node.id));
			}
			index.insert(node.id.clone(), nodes.len());
			nodes.push(NetworkNode {
				id: node.id,
				role,
				position: node.position,
				attributes: node.attributes,
			});
		}

		let mut store = Self {
			nodes,
			edges: Vec::with_capacity(config.edges.len()),
			index,
		};

		let mut edge_ids = HashSet::new();
		for edge in config.edges {
			let source = store.get_node(&edge.source)?.role;
			let target = store.get_node(&edge.target)?.role;
			if !edge_ids.insert(edge.id.clone()) {
				return Err(TopologyError::DuplicateEdge(edge.id));
			}
			// Links are colored by the end that is not the hub.
			let far_end = if target == Role::Egress { source } else { target };
			store.edges.push(NetworkEdge {
				id: edge.id,
				source: edge.source,
				target: edge.target,
				color: edge_color(far_end),
			});
		}

		let hubs = store.hubs().count();
		if hubs != 1 && !store.is_empty() {
			warn!("netgraph: topology has {hubs} egress nodes, expected exactly one");
		}
		debug!(
			"netgraph: topology store ready ({} nodes, {} edges)",
			store.nodes.len(),
			store.edges.len()
		);

		Ok(store)
	}

	/// Looks up a node by id.
	pub fn get_node(&self, id: &str) -> Result<&NetworkNode, TopologyError> {
		self.index
			.get(id)
			.map(|&i| &self.nodes[i])
			.ok_or_else(|| TopologyError::NotFound(id.to_string()))
	}

	/// Looks up a node's attributes by id.
	pub fn get_attributes(&self, id: &str) -> Result<&Attributes, TopologyError> {
		self.get_node(id).map(|node| &node.attributes)
	}

	/// All nodes in insertion order.
	pub fn all_nodes(&self) -> &[NetworkNode] {
		&self.nodes
	}

	/// All edges in insertion order.
	pub fn all_edges(&self) -> &[NetworkEdge] {
		&self.edges
	}

	/// Nodes with the egress role.
	pub fn hubs(&self) -> impl Iterator<Item = &NetworkNode> {
		self.nodes.iter().filter(|n| n.role == Role::Egress)
	}

	/// Whether a node with this id exists.
	pub fn contains(&self, id: &str) -> bool {
		self.index.contains_key(id)
	}

	/// Number of nodes.
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// True when the store holds no nodes.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}
}
