//! Interactive topology canvas.
//!
//! Draws the nodes that pass the current search on an HTML canvas with:
//! - Role-driven node size, gradient and opacity
//! - Edges colored at load time, skipped while an endpoint is hidden
//! - Pan, bounded zoom and node dragging
//! - A minimap and hover tooltips
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use netgraph::{NetworkGraphCanvas, TopologyConfig, TopologyStore};
//!
//! let config = TopologyConfig::bundled()?;
//! let view = config.view.clone();
//! let store = Arc::new(TopologyStore::from_config(config)?);
//! let (query, _set_query) = signal(String::new());
//!
//! view! { <NetworkGraphCanvas store=store query=query view=view fullscreen=true /> }
//! ```

mod component;
mod minimap;
mod render;
pub mod scale;
mod state;
pub mod theme;
mod tooltip;

pub use component::NetworkGraphCanvas;
pub use theme::Theme;
pub use tooltip::TooltipData;
