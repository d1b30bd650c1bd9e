//! Validated topology records.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::error::TopologyError;
use crate::color::Color;

/// What a node does in the network. Drives its visual encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
	/// The hub all modelled traffic exits through.
	Egress,
	/// An application host behind the hub.
	Server,
	/// Bridges an external network into the mesh.
	Gateway,
	/// A generic peer.
	Node,
}

impl Role {
	/// Every role, largest visual tier first.
	pub const ALL: [Role; 4] = [Role::Egress, Role::Server, Role::Gateway, Role::Node];

	/// The lowercase name used in configuration documents.
	pub fn as_str(self) -> &'static str {
		match self {
			Role::Egress => "egress",
			Role::Server => "server",
			Role::Gateway => "gateway",
			Role::Node => "node",
		}
	}
}

impl FromStr for Role {
	type Err = TopologyError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"egress" => Ok(Role::Egress),
			"server" => Ok(Role::Server),
			"gateway" => Ok(Role::Gateway),
			"node" => Ok(Role::Node),
			other => Err(TopologyError::UnknownRole(other.to_string())),
		}
	}
}

impl fmt::Display for Role {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Position in world units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct Position {
	/// Horizontal coordinate, growing rightwards.
	pub x: f64,
	/// Vertical coordinate, growing downwards.
	pub y: f64,
}

/// Descriptive metadata attached to a node.
///
/// `ip`, `os` and `location` are mandatory; a document missing any of them is
/// rejected when parsed. Anything else lands in `extra`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Attributes {
	/// Address shown in the tooltip; searched verbatim.
	pub ip: String,
	/// Operating system label.
	pub os: String,
	/// Human-readable site name.
	pub location: String,
	/// Any other keys in the document, sorted by name.
	#[serde(flatten)]
	pub extra: BTreeMap<String, String>,
}

/// A node that passed validation.
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkNode {
	/// Unique identifier, doubling as the display label.
	pub id: String,
	/// Parsed role; decides size, color and opacity.
	pub role: Role,
	/// Authored layout position. The shell keeps its own copy for dragging.
	pub position: Position,
	/// Descriptive metadata for search and tooltips.
	pub attributes: Attributes,
}

/// A link whose endpoints both exist in the store.
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkEdge {
	/// Unique edge identifier.
	pub id: String,
	/// Id of the node the link starts at, usually the hub.
	pub source: String,
	/// Id of the node the link ends at.
	pub target: String,
	/// Stroke color, fixed when the store is built.
	pub color: Color,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn role_names_round_trip() {
		for role in Role::ALL {
			assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
		}
	}

	#[test]
	fn role_parsing_is_closed_and_exact() {
		for bad in ["router", "Egress", " node", ""] {
			match bad.parse::<Role>() {
				Err(TopologyError::UnknownRole(name)) => assert_eq!(name, bad),
				other => panic!("expected UnknownRole for {bad:?}, got {other:?}"),
			}
		}
	}

	#[test]
	fn unknown_attribute_keys_land_in_extra() {
		let attrs: Attributes = serde_json::from_str(
			r#"{ "ip": "10.0.0.2", "os": "Alpine", "location": "Oslo", "rack": "b7" }"#,
		)
		.unwrap();
		assert_eq!(attrs.location, "Oslo");
		assert_eq!(attrs.extra.len(), 1);
		assert_eq!(attrs.extra.get("rack").map(String::as_str), Some("b7"));
	}
}
