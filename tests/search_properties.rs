//! Property-based checks of the search filter and store validation over
//! generated topologies.

use std::collections::BTreeMap;

use netgraph::config::{EdgeConfig, NodeConfig};
use netgraph::topology::{Attributes, Position};
use netgraph::{Role, SearchFilter, TopologyConfig, TopologyError, TopologyStore};
use proptest::prelude::*;

// Strategy for one node: role, id stem, ip, os, location
fn node_strategy() -> impl Strategy<Value = (Role, String, String, String, String)> {
	(
		prop::sample::select(Role::ALL.to_vec()),
		"[a-zA-Z]{1,8}",
		"[0-9a-fA-F.:]{1,15}",
		"[a-zA-Z0-9 .]{1,12}",
		"[a-zA-Z .]{1,12}",
	)
}

// Strategy for a document: every node after the first hangs off the first
fn topology_strategy() -> impl Strategy<Value = TopologyConfig> {
	prop::collection::vec(node_strategy(), 1..12).prop_map(|specs| {
		let nodes: Vec<NodeConfig> = specs
			.into_iter()
			.enumerate()
			.map(|(i, (role, stem, ip, os, location))| NodeConfig {
				id: format!("{stem}-{i}"),
				role: role.as_str().to_string(),
				position: Position {
					x: i as f64 * 50.0,
					y: 0.0,
				},
				attributes: Attributes {
					ip,
					os,
					location,
					extra: BTreeMap::new(),
				},
			})
			.collect();
		let edges = nodes
			.iter()
			.skip(1)
			.enumerate()
			.map(|(i, node)| EdgeConfig {
				id: format!("e{i}"),
				source: nodes[0].id.clone(),
				target: node.id.clone(),
			})
			.collect();
		TopologyConfig {
			nodes,
			edges,
			..TopologyConfig::default()
		}
	})
}

// Strategy for search queries: printable ASCII, spaces included
fn query_strategy() -> impl Strategy<Value = String> {
	"[ -~]{0,6}"
}

fn store(config: TopologyConfig) -> TopologyStore {
	TopologyStore::from_config(config).unwrap()
}

fn ids(filter: &SearchFilter, store: &TopologyStore) -> Vec<String> {
	filter.apply(store).into_iter().map(|n| n.id.clone()).collect()
}

proptest! {
	#![proptest_config(ProptestConfig::with_cases(64))]

	#[test]
	fn empty_query_keeps_every_node_in_order(config in topology_strategy()) {
		let store = store(config);
		let all: Vec<_> = store.all_nodes().iter().map(|n| n.id.clone()).collect();
		prop_assert_eq!(ids(&SearchFilter::new(""), &store), all);
	}

	#[test]
	fn extending_a_query_never_widens_the_result(
		config in topology_strategy(),
		query in query_strategy(),
		prefix in query_strategy(),
		suffix in query_strategy(),
	) {
		let store = store(config);
		let wide = SearchFilter::new(&query).visible_ids(&store);
		let narrow = SearchFilter::new(&format!("{prefix}{query}{suffix}")).visible_ids(&store);
		prop_assert!(narrow.is_subset(&wide), "{:?} widened {:?}", narrow, wide);
	}

	#[test]
	fn refiltering_changes_nothing(
		config in topology_strategy(),
		query in query_strategy(),
	) {
		let store = store(config);
		let filter = SearchFilter::new(&query);
		let once = filter.apply(&store);
		let twice = filter.filter(once.iter().copied());
		prop_assert_eq!(&once, &twice);
		prop_assert_eq!(ids(&filter, &store), ids(&filter, &store));
	}

	#[test]
	fn unknown_endpoint_fails_construction(
		config in topology_strategy(),
		ghost in "[a-z]{1,8}",
		as_source in any::<bool>(),
	) {
		let mut config = config;
		// Generated node ids never contain a colon.
		let ghost = format!("ghost:{ghost}");
		let anchor = config.nodes[0].id.clone();
		let (source, target) = if as_source {
			(ghost.clone(), anchor)
		} else {
			(anchor, ghost.clone())
		};
		config.edges.push(EdgeConfig {
			id: "dangling".to_string(),
			source,
			target,
		});
		match TopologyStore::from_config(config) {
			Err(TopologyError::NotFound(id)) => prop_assert_eq!(id, ghost),
			other => prop_assert!(false, "expected NotFound, got {:?}", other.map(|s| s.len())),
		}
	}
}
