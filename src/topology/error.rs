//! Configuration-integrity errors.

use thiserror::Error;

/// Failures raised while loading or querying a topology.
///
/// Every variant means the dataset itself is broken. None of them are retried;
/// they are surfaced to the operator before the first render.
#[derive(Debug, Error)]
pub enum TopologyError {
	/// An id that names no node, as a lookup key or an edge endpoint.
	#[error("unknown node id `{0}`")]
	NotFound(String),

	/// A role outside `egress`, `server`, `gateway`, `node`.
	#[error("unknown node role `{0}` (expected egress, server, gateway or node)")]
	UnknownRole(String),

	/// Two nodes share an id.
	#[error("node id `{0}` is defined more than once")]
	DuplicateNode(String),

	/// Two edges share an id.
	#[error("edge id `{0}` is defined more than once")]
	DuplicateEdge(String),

	/// Zoom bounds that are not positive finite numbers.
	#[error("invalid view settings: {0}")]
	InvalidView(String),

	/// The document is not valid JSON or lacks a required field.
	#[error("malformed topology document: {0}")]
	Parse(#[from] serde_json::Error),
}
