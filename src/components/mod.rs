//! UI components.

pub mod network_graph;
pub mod search_bar;
