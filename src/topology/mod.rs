//! Topology core: the validated dataset, role-driven visual encoding, and
//! search filtering.
//!
//! Nothing in here touches the DOM. The canvas component consumes these types
//! but the store, classifier and filter are plain Rust and are tested natively.

mod classify;
mod error;
mod model;
mod search;
mod store;

pub use classify::{SizeTier, VisualSpec, classify, edge_color};
pub use error::TopologyError;
pub use model::{Attributes, NetworkEdge, NetworkNode, Position, Role};
pub use search::SearchFilter;
pub use store::TopologyStore;
