//! Tunable parameters for shape generation, interaction and transitions.
//!
//! Every constant the simulation depends on lives here so the behaviour can
//! be tuned in one place. Distances are in canvas pixels; per-frame factors
//! assume one simulation step per animation frame.

/// Parameters for procedural silhouette generation.
#[derive(Clone, Debug)]
pub struct SamplerConfig {
	/// Canvas extent (min of width/height) at which the scale factor is 1.0.
	pub reference_extent: f64,
	/// Grid step between seeds on procedural silhouettes, before scaling.
	pub grid_step: f64,
	/// Title string rendered as glyph particles.
	pub title: String,
	/// Title font size in pixels, before scaling.
	pub title_size: f64,
	/// Vertical placement of the title centre as a fraction of height.
	pub title_y: f64,
	/// Pixel stride when scanning the rasterized title.
	pub text_stride: usize,
	/// Alpha above which a title pixel counts as ink.
	pub alpha_threshold: u8,
	/// Fraction of ink pixels dropped to break up the solid glyphs.
	pub text_skip: f64,
	/// Sphere surface samples for the globe.
	pub globe_samples: usize,
	/// Candidate points for the globe's orbit ring.
	pub orbit_samples: usize,
	/// Globe radius, before scaling.
	pub globe_radius: f64,
}

impl Default for SamplerConfig {
	fn default() -> Self {
		Self {
			reference_extent: 900.0,
			grid_step: 5.0,
			title: "JIA SONG".to_string(),
			title_size: 145.0,
			title_y: 0.12,
			text_stride: 2,
			alpha_threshold: 128,
			text_skip: 0.1,
			globe_samples: 1800,
			orbit_samples: 200,
			globe_radius: 140.0,
		}
	}
}

/// Pointer repulsion and spring-home parameters.
#[derive(Clone, Debug)]
pub struct InteractionConfig {
	/// Pointer influence radius in canvas pixels.
	pub radius: f64,
	/// A sprung particle closes `1 / spring_divisor` of the gap each frame.
	pub spring_divisor: f64,
}

impl Default for InteractionConfig {
	fn default() -> Self {
		Self {
			radius: 100.0,
			spring_divisor: 10.0,
		}
	}
}

/// Hover focus targets and smoothing.
#[derive(Clone, Debug)]
pub struct FocusConfig {
	/// Fraction of the remaining gap closed per frame.
	pub smoothing: f64,
	/// Scale of the hovered group.
	pub focused_scale: f64,
	/// Opacity of the hovered group.
	pub focused_opacity: f64,
	/// Scale of the other two groups while one is hovered.
	pub dimmed_scale: f64,
	/// Opacity of the other two groups while one is hovered.
	pub dimmed_opacity: f64,
}

impl Default for FocusConfig {
	fn default() -> Self {
		Self {
			smoothing: 0.05,
			focused_scale: 1.2,
			focused_opacity: 1.0,
			dimmed_scale: 0.8,
			dimmed_opacity: 0.5,
		}
	}
}

/// The collapse-and-vanish transition after a commit.
#[derive(Clone, Debug)]
pub struct DisperseConfig {
	/// Fraction of the distance to the canvas centre covered per frame.
	pub pull: f64,
	/// Radius lost per frame.
	pub shrink: f64,
	/// Wall-clock delay between the commit and the host's view switch.
	pub view_switch_delay_ms: u64,
}

impl Default for DisperseConfig {
	fn default() -> Self {
		Self {
			pull: 0.08,
			shrink: 0.1,
			view_switch_delay_ms: 600,
		}
	}
}

/// Horizontal band boundaries, as fractions of canvas width.
#[derive(Clone, Debug)]
pub struct ZoneConfig {
	/// Start of the folder band; everything left of it is the computer band.
	pub folder_start: f64,
	/// Start of the map band.
	pub map_start: f64,
}

impl Default for ZoneConfig {
	fn default() -> Self {
		Self {
			folder_start: 0.35,
			map_start: 0.65,
		}
	}
}

/// Complete scene configuration.
#[derive(Clone, Debug, Default)]
pub struct SceneConfig {
	/// Silhouette and title sampling.
	pub sampler: SamplerConfig,
	/// Pointer repulsion and spring.
	pub interaction: InteractionConfig,
	/// Hover focus.
	pub focus: FocusConfig,
	/// Commit transition.
	pub disperse: DisperseConfig,
	/// Hover band boundaries.
	pub zones: ZoneConfig,
}

impl SceneConfig {
	/// Default configuration with a custom title.
	pub fn with_title(title: impl Into<String>) -> Self {
		let mut config = Self::default();
		config.sampler.title = title.into();
		config
	}
}
