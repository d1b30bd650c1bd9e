//! Role-driven visual encoding.

use super::model::Role;
use crate::color::Color;

const PURPLE_600: Color = Color::hex(0x9333ea);
const PURPLE_800: Color = Color::hex(0x6b21a8);
const PURPLE_500: Color = Color::hex(0xa855f7);
const PURPLE_700: Color = Color::hex(0x7e22ce);
const VIOLET_500: Color = Color::hex(0x8b5cf6);
const GREEN_500: Color = Color::hex(0x22c55e);
const GREEN_700: Color = Color::hex(0x15803d);
const BLUE_400: Color = Color::hex(0x60a5fa);
const BLUE_600: Color = Color::hex(0x2563eb);

/// Relative node size, largest for the hub.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum SizeTier {
	/// Plain peers.
	Tiny,
	/// Gateways.
	Small,
	/// Servers.
	Medium,
	/// The egress hub.
	Large,
}

impl SizeTier {
	/// Node diameter in world units.
	pub fn diameter(self) -> f64 {
		match self {
			SizeTier::Large => 80.0,
			SizeTier::Medium => 64.0,
			SizeTier::Small => 56.0,
			SizeTier::Tiny => 40.0,
		}
	}

	/// Half the diameter.
	pub fn radius(self) -> f64 {
		self.diameter() / 2.0
	}
}

/// Rendering parameters derived from a node's role.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualSpec {
	/// Node size.
	pub size_tier: SizeTier,
	/// Fill gradient, top-left to bottom-right.
	pub color_stops: [Color; 2],
	/// Dot color in the minimap.
	pub minimap_color: Color,
	/// Body opacity, below one for plain peers.
	pub opacity: f64,
}

/// Maps a role to its visual encoding. Total over [`Role`].
pub fn classify(role: Role) -> VisualSpec {
	match role {
		Role::Egress => VisualSpec {
			size_tier: SizeTier::Large,
			color_stops: [PURPLE_600, PURPLE_800],
			minimap_color: PURPLE_600,
			opacity: 1.0,
		},
		Role::Server => VisualSpec {
			size_tier: SizeTier::Medium,
			color_stops: [PURPLE_500, PURPLE_700],
			minimap_color: VIOLET_500,
			opacity: 1.0,
		},
		Role::Gateway => VisualSpec {
			size_tier: SizeTier::Small,
			color_stops: [GREEN_500, GREEN_700],
			minimap_color: GREEN_500,
			opacity: 1.0,
		},
		Role::Node => VisualSpec {
			size_tier: SizeTier::Tiny,
			color_stops: [BLUE_400, BLUE_600],
			minimap_color: BLUE_400,
			opacity: 0.7,
		},
	}
}

/// Stroke color for a link, keyed on the role of the node at its far end.
///
/// Links into the purple tier (egress and servers) share one purple.
pub fn edge_color(far_end: Role) -> Color {
	match far_end {
		Role::Egress | Role::Server => PURPLE_600,
		Role::Gateway => GREEN_500,
		Role::Node => BLUE_400,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn gateway_is_small_green_and_opaque() {
		let spec = classify(Role::Gateway);
		assert_eq!(spec.size_tier, SizeTier::Small);
		assert_eq!(spec.opacity, 1.0);
		assert_eq!(spec.minimap_color.to_css(), "#22c55e");
	}

	#[test]
	fn mapping_table() {
		let rows: Vec<_> = Role::ALL
			.iter()
			.map(|&role| {
				let spec = classify(role);
				(role, spec.size_tier, spec.opacity, spec.minimap_color.to_css())
			})
			.collect();
		assert_eq!(
			rows,
			vec![
				(Role::Egress, SizeTier::Large, 1.0, "#9333ea".to_string()),
				(Role::Server, SizeTier::Medium, 1.0, "#8b5cf6".to_string()),
				(Role::Gateway, SizeTier::Small, 1.0, "#22c55e".to_string()),
				(Role::Node, SizeTier::Tiny, 0.7, "#60a5fa".to_string()),
			]
		);
	}

	#[test]
	fn hub_is_the_largest_tier() {
		let hub = classify(Role::Egress).size_tier;
		for role in Role::ALL {
			assert!(classify(role).size_tier <= hub);
			assert_eq!(classify(role), classify(role));
		}
		assert!(SizeTier::Large.diameter() > SizeTier::Medium.diameter());
		assert!(SizeTier::Small.diameter() > SizeTier::Tiny.diameter());
	}

	#[test]
	fn edge_palette() {
		assert_eq!(edge_color(Role::Server).to_css(), "#9333ea");
		assert_eq!(edge_color(Role::Egress).to_css(), "#9333ea");
		assert_eq!(edge_color(Role::Gateway).to_css(), "#22c55e");
		assert_eq!(edge_color(Role::Node).to_css(), "#60a5fa");
	}
}
