//! Free-text node search.

use std::collections::HashSet;

use super::model::NetworkNode;
use super::store::TopologyStore;

/// A search query, lower-cased once up front.
///
/// Matches a node when its id, OS or location contains the query
/// case-insensitively, or its IP contains the query verbatim. An empty query
/// matches everything. Edges are never filtered here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchFilter {
	raw: String,
	folded: String,
}

impl SearchFilter {
	/// Builds a filter for the query exactly as typed, whitespace included.
	pub fn new(query: &str) -> Self {
		Self {
			raw: query.to_string(),
			folded: query.to_lowercase(),
		}
	}

	/// The query as typed.
	pub fn query(&self) -> &str {
		&self.raw
	}

	/// True for the empty query, which matches every node.
	pub fn is_empty(&self) -> bool {
		self.raw.is_empty()
	}

	/// Whether a single node passes the filter.
	pub fn matches(&self, node: &NetworkNode) -> bool {
		if self.is_empty() {
			return true;
		}
		let attrs = &node.attributes;
		node.id.to_lowercase().contains(&self.folded)
			|| attrs.ip.contains(&self.raw)
			|| attrs.os.to_lowercase().contains(&self.folded)
			|| attrs.location.to_lowercase().contains(&self.folded)
	}

	/// Matching nodes, in store order.
	pub fn apply<'a>(&self, store: &'a TopologyStore) -> Vec<&'a NetworkNode> {
		self.filter(store.all_nodes())
	}

	/// Narrows an arbitrary node sequence, keeping its order.
	pub fn filter<'a, I>(&self, nodes: I) -> Vec<&'a NetworkNode>
	where
		I: IntoIterator<Item = &'a NetworkNode>,
	{
		nodes.into_iter().filter(|node| self.matches(node)).collect()
	}

	/// Ids of the matching nodes.
	pub fn visible_ids<'a>(&self, store: &'a TopologyStore) -> HashSet<&'a str> {
		self.apply(store)
			.into_iter()
			.map(|node| node.id.as_str())
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::TopologyConfig;
	use pretty_assertions::assert_eq;

	fn bundled() -> TopologyStore {
		TopologyStore::from_config(TopologyConfig::bundled().unwrap()).unwrap()
	}

	fn ids(nodes: &[&NetworkNode]) -> Vec<String> {
		nodes.iter().map(|n| n.id.clone()).collect()
	}

	#[test]
	fn empty_query_keeps_everything_in_order() {
		let store = bundled();
		let all: Vec<_> = store.all_nodes().iter().map(|n| n.id.clone()).collect();
		assert_eq!(ids(&SearchFilter::new("").apply(&store)), all);
		assert_eq!(SearchFilter::default().apply(&store).len(), 13);
	}

	#[test]
	fn id_os_and_location_ignore_case() {
		let store = bundled();
		assert_eq!(ids(&SearchFilter::new("UBUNTU").apply(&store)), ["egress"]);
		assert_eq!(ids(&SearchFilter::new("new york").apply(&store)), ["egress"]);
		assert_eq!(
			ids(&SearchFilter::new("Hidden").apply(&store)),
			["hidden-brook", "hidden-water"]
		);
		assert_eq!(
			ids(&SearchFilter::new("bsd").apply(&store)),
			["hidden-brook", "hidden-water"]
		);
	}

	#[test]
	fn ip_matches_by_substring() {
		let store = bundled();
		assert_eq!(ids(&SearchFilter::new("10.104").apply(&store)), ["gateway"]);
		// "192.168.1.1" is a prefix of .10 through .17 as well.
		assert_eq!(SearchFilter::new("192.168.1.1").apply(&store).len(), 9);
		assert!(SearchFilter::new("192.168.1.9").apply(&store).is_empty());
	}

	#[test]
	fn ip_is_matched_case_sensitively() {
		let config = TopologyConfig::from_json(
			r#"{
				"nodes": [{
					"id": "link-local", "role": "node", "position": { "x": 0, "y": 0 },
					"attributes": { "ip": "FE80::1", "os": "Debian 12", "location": "Oslo" }
				}],
				"edges": []
			}"#,
		)
		.unwrap();
		let store = TopologyStore::from_config(config).unwrap();
		assert!(SearchFilter::new("fe80").apply(&store).is_empty());
		assert_eq!(ids(&SearchFilter::new("FE80").apply(&store)), ["link-local"]);
		assert_eq!(ids(&SearchFilter::new("::1").apply(&store)), ["link-local"]);
	}

	#[test]
	fn role_is_not_searched() {
		let store = bundled();
		assert_eq!(ids(&SearchFilter::new("server").apply(&store)), ["test-server"]);
	}

	#[test]
	fn query_is_not_trimmed() {
		let store = bundled();
		// Only OS and location strings contain spaces.
		let spaced = SearchFilter::new(" ").apply(&store);
		assert!(spaced.iter().any(|n| n.id == "egress"));
		assert!(spaced.iter().all(|n| !n.id.contains(' ')));
		assert!(!spaced.iter().any(|n| n.id == "patient-sunset"));
		assert!(SearchFilter::new(" egress").apply(&store).is_empty());
	}

	#[test]
	fn longer_queries_narrow_results() {
		let store = bundled();
		let chains = [
			["l", "li", "lin", "linux"],
			["1", "19", "192.168.1", "192.168.1.1"],
			["o", "or", "ork", "york"],
		];
		for chain in chains {
			for pair in chain.windows(2) {
				let wide = SearchFilter::new(pair[0]).visible_ids(&store);
				let narrow = SearchFilter::new(pair[1]).visible_ids(&store);
				assert!(narrow.is_subset(&wide), "{:?} vs {:?}", pair[1], pair[0]);
			}
		}
	}

	#[test]
	fn refiltering_is_stable() {
		let store = bundled();
		for query in ["", "linux", "192.168.1.1", "a", "nothing-matches"] {
			let filter = SearchFilter::new(query);
			let once = filter.apply(&store);
			let twice = filter.filter(once.iter().copied());
			assert_eq!(ids(&once), ids(&twice));
			assert_eq!(ids(&once), ids(&filter.apply(&store)));
		}
	}
}
