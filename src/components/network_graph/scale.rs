//! Zoom-dependent scaling for canvas visuals.
//!
//! Node bodies and edges live in world space and grow with zoom, like the rest
//! of the diagram. Labels, hit padding and the background grid need limits so
//! they stay legible and clickable at the zoom bounds.
//!
//! # Coordinate Spaces
//!
//! - **World-space**: the coordinate system of the authored positions.
//! - **Screen-space**: pixel coordinates on the canvas.

/// Defines how a visual property scales with zoom level.
#[derive(Clone, Debug)]
pub enum ScaleBehavior {
	/// Constant world-space size. Appears larger when zoomed in.
	World,
	/// Constant screen-space size (pixels). Unaffected by zoom.
	Screen,
	/// World-space scaling, clamped to min/max screen-space bounds.
	Clamped { min_screen: f64, max_screen: f64 },
}

impl ScaleBehavior {
	/// World-space value for a base value at zoom `k`.
	pub fn apply(&self, base: f64, k: f64) -> f64 {
		match self {
			ScaleBehavior::World => base,
			ScaleBehavior::Screen => base / k,
			ScaleBehavior::Clamped {
				min_screen,
				max_screen,
			} => base.clamp(min_screen / k, max_screen / k),
		}
	}
}

/// Zoom-driven fade: fully visible at `full_alpha_k`, invisible at or below
/// `zero_alpha_k`.
#[derive(Clone, Debug)]
pub struct AlphaFade {
	/// Zoom at or below which the element is hidden.
	pub zero_alpha_k: f64,
	/// Zoom at or above which the element is fully opaque.
	pub full_alpha_k: f64,
}

impl AlphaFade {
	/// Alpha multiplier for zoom `k`.
	pub fn apply(&self, k: f64) -> f64 {
		if self.zero_alpha_k == self.full_alpha_k {
			return 1.0;
		}
		((k - self.zero_alpha_k) / (self.full_alpha_k - self.zero_alpha_k)).clamp(0.0, 1.0)
	}
}

/// Node label sizing and fade-out.
#[derive(Clone, Debug)]
pub struct LabelScaleConfig {
	/// Label font size in world units.
	pub size: f64,
	/// How `size` follows zoom.
	pub size_behavior: ScaleBehavior,
	/// Labels disappear when zoomed far out.
	pub fade: AlphaFade,
}

/// Edge stroke sizing.
#[derive(Clone, Debug)]
pub struct EdgeScaleConfig {
	/// How themed edge widths follow zoom.
	pub width_behavior: ScaleBehavior,
}

/// Pointer hit-testing tolerance.
#[derive(Clone, Debug)]
pub struct HitScaleConfig {
	/// Extra radius around a node that still counts as a hit.
	pub padding: f64,
	/// How `padding` follows zoom.
	pub padding_behavior: ScaleBehavior,
}

/// Background dot grid.
#[derive(Clone, Debug)]
pub struct GridScaleConfig {
	/// The grid fades out when zoomed far out.
	pub fade: AlphaFade,
}

/// Complete scale configuration for all canvas elements.
#[derive(Clone, Debug)]
pub struct ScaleConfig {
	/// Node labels.
	pub label: LabelScaleConfig,
	/// Edge strokes.
	pub edge: EdgeScaleConfig,
	/// Hit-testing.
	pub hit: HitScaleConfig,
	/// Background grid.
	pub grid: GridScaleConfig,
}

impl Default for ScaleConfig {
	fn default() -> Self {
		Self {
			label: LabelScaleConfig {
				size: 12.0,
				size_behavior: ScaleBehavior::Clamped {
					min_screen: 9.0,
					max_screen: 18.0,
				},
				fade: AlphaFade {
					zero_alpha_k: 0.25,
					full_alpha_k: 0.45,
				},
			},
			edge: EdgeScaleConfig {
				width_behavior: ScaleBehavior::World,
			},
			hit: HitScaleConfig {
				padding: 4.0,
				padding_behavior: ScaleBehavior::Screen,
			},
			grid: GridScaleConfig {
				fade: AlphaFade {
					zero_alpha_k: 0.15,
					full_alpha_k: 0.35,
				},
			},
		}
	}
}

/// Pre-computed scale values for a specific zoom level.
///
/// Create this once per frame and pass it to rendering functions.
/// Sizes are in world-space unless noted.
#[derive(Clone, Debug)]
pub struct ScaledValues {
	/// Zoom factor these values were computed for.
	pub k: f64,
	/// Label font size in world-space.
	pub label_size: f64,
	/// Label opacity multiplier.
	pub label_alpha: f64,
	/// Multiplier for themed edge widths.
	pub edge_width_scale: f64,
	/// Hit-test padding in world-space.
	pub hit_padding: f64,
	/// Grid opacity multiplier.
	pub grid_alpha: f64,
}

impl ScaledValues {
	/// Evaluates every behavior in `config` at zoom `k`.
	pub fn new(config: &ScaleConfig, k: f64) -> Self {
		Self {
			k,
			label_size: config.label.size_behavior.apply(config.label.size, k),
			label_alpha: config.label.fade.apply(k),
			edge_width_scale: config.edge.width_behavior.apply(1.0, k),
			hit_padding: config.hit.padding_behavior.apply(config.hit.padding, k),
			grid_alpha: config.grid.fade.apply(k),
		}
	}

	/// CSS font string for node labels.
	pub fn label_font(&self, weight: &str) -> String {
		format!("{} {}px sans-serif", weight, self.label_size)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn clamped_labels_stay_legible() {
		let config = ScaleConfig::default();
		// 12 world units at k=0.2 would be 2.4px on screen.
		let far = ScaledValues::new(&config, 0.2);
		assert!((far.label_size * 0.2 - 9.0).abs() < 1e-9);
		let near = ScaledValues::new(&config, 1.0);
		assert_eq!(near.label_size, 12.0);
		let close = ScaledValues::new(&config, 1.5);
		assert!((close.label_size * 1.5 - 18.0).abs() < 1e-9);
	}

	#[test]
	fn hit_padding_is_constant_on_screen() {
		let config = ScaleConfig::default();
		for k in [0.2, 0.5, 1.0, 1.5] {
			let scale = ScaledValues::new(&config, k);
			assert!((scale.hit_padding * k - 4.0).abs() < 1e-9);
			assert_eq!(scale.edge_width_scale, 1.0);
		}
	}

	#[test]
	fn fade_ramps_between_thresholds() {
		let fade = AlphaFade {
			zero_alpha_k: 0.2,
			full_alpha_k: 0.6,
		};
		assert_eq!(fade.apply(0.1), 0.0);
		assert!((fade.apply(0.4) - 0.5).abs() < 1e-9);
		assert_eq!(fade.apply(1.0), 1.0);

		let flat = AlphaFade {
			zero_alpha_k: 0.3,
			full_alpha_k: 0.3,
		};
		assert_eq!(flat.apply(0.01), 1.0);
	}
}
