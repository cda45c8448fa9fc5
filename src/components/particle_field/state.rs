//! Scene state and interaction tracking.
//!
//! [`SceneState`] is the single context object for one mounted scene: the
//! particle store, focus channels, simulation mode and the latest pointer
//! input. Event handlers write the pointer and hover fields; the frame
//! callback reads them and advances the simulation with [`SceneState::tick`].

use log::{debug, info};
use rand::rngs::SmallRng;

use super::config::{SceneConfig, ZoneConfig};
use super::focus::FocusState;
use super::glyph::GlyphRaster;
use super::particles::ParticleStore;
use super::physics::{self, Branch};
use super::theme::SilhouettePalette;
use super::types::{Mode, Point, Zone};

/// Maps a canvas-local x coordinate to its hover band.
///
/// Bands are half-open on the right except the last, which includes the
/// right edge.
pub fn zone_at(x: f64, width: f64, zones: &ZoneConfig) -> Option<Zone> {
	if !(width > 0.0) || !x.is_finite() {
		return None;
	}
	if x < width * zones.folder_start {
		Some(Zone::Computer)
	} else if x < width * zones.map_start {
		Some(Zone::Folder)
	} else {
		Some(Zone::Map)
	}
}

/// How many particles took each branch in one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
	/// Particles pushed by the pointer.
	pub repelled: usize,
	/// Particles pulled toward their anchor.
	pub sprung: usize,
	/// Particles in the disperse step.
	pub dispersed: usize,
}

impl FrameStats {
	fn record(&mut self, branch: Branch) {
		match branch {
			Branch::Repelled => self.repelled += 1,
			Branch::Sprung => self.sprung += 1,
			Branch::Dispersed => self.dispersed += 1,
		}
	}

	/// Sum over all branches.
	pub fn total(&self) -> usize {
		self.repelled + self.sprung + self.dispersed
	}
}

/// Everything one mounted particle scene owns.
///
/// Created once when the component mounts, then mutated each frame by the
/// animation loop and by pointer events in between.
pub struct SceneState {
	/// All particles and the layout they were built for.
	pub store: ParticleStore,
	/// Per-zone focus channels.
	pub focus: FocusState,
	/// Current simulation mode.
	pub mode: Mode,
	/// Zone under the pointer.
	pub hover: Option<Zone>,
	/// Latest pointer position in canvas space; `None` while off-canvas.
	pub pointer: Option<Point>,
	/// Canvas width the store was built for.
	pub width: f64,
	/// Canvas height the store was built for.
	pub height: f64,
	/// Frames simulated so far.
	pub frame: u64,
	config: SceneConfig,
	palette: SilhouettePalette,
	raster: Box<dyn GlyphRaster>,
	rng: SmallRng,
}

impl SceneState {
	/// Builds a scene and generates its particles for `width` x `height`.
	pub fn new(
		width: f64,
		height: f64,
		config: SceneConfig,
		palette: SilhouettePalette,
		raster: Box<dyn GlyphRaster>,
		rng: SmallRng,
	) -> Self {
		let mut state = Self {
			store: ParticleStore::default(),
			focus: FocusState::default(),
			mode: Mode::Interactive,
			hover: None,
			pointer: None,
			width,
			height,
			frame: 0,
			config,
			palette,
			raster,
			rng,
		};
		state.resize(width, height);
		state
	}

	/// The tuning this scene runs with.
	pub fn config(&self) -> &SceneConfig {
		&self.config
	}

	/// Regenerates the whole particle store for the new canvas size.
	pub fn resize(&mut self, width: f64, height: f64) {
		let store = ParticleStore::generate(
			width,
			height,
			&self.config.sampler,
			&self.palette,
			self.raster.as_ref(),
			&mut self.rng,
		);
		info!(
			"particle-portfolio: generated {} particles for {}x{}",
			store.len(),
			width,
			height
		);
		self.store = store;
		self.width = width;
		self.height = height;
	}

	/// Records a pointer move in canvas-local coordinates and returns the
	/// hovered zone. Ignored once dispersing.
	pub fn pointer_moved(&mut self, x: f64, y: f64) -> Option<Zone> {
		if self.mode == Mode::Dispersing {
			return None;
		}
		self.pointer = Some(Point::new(x, y));
		self.hover = zone_at(x, self.width, &self.config.zones);
		self.hover
	}

	/// The pointer left the scene: stop repelling and let focus relax.
	pub fn pointer_left(&mut self) {
		self.pointer = None;
		self.hover = None;
	}

	/// The zone a click would commit to right now, if any.
	pub fn pending_commit(&self) -> Option<Zone> {
		match self.mode {
			Mode::Dispersing => None,
			Mode::Interactive => self.hover,
		}
	}

	/// Enters the terminal dispersing mode.
	pub fn disperse(&mut self) {
		if self.mode == Mode::Dispersing {
			return;
		}
		debug!("particle-portfolio: dispersing {} particles", self.store.len());
		self.mode = Mode::Dispersing;
	}

	/// Commits to the hovered zone: `on_interact` receives the zone, then the
	/// scene starts dispersing. Returns whether a commit happened.
	pub fn commit(&mut self, on_interact: impl FnOnce(Zone)) -> bool {
		let Some(zone) = self.pending_commit() else {
			return false;
		};
		on_interact(zone);
		self.disperse();
		true
	}

	/// Applies the host's expanded flag. Expanding forces dispersal; clearing
	/// it cannot bring an instance back, a fresh scene is mounted instead.
	pub fn set_expanded(&mut self, expanded: bool) {
		if expanded {
			self.disperse();
		}
	}

	/// Advances focus and every particle by one frame.
	pub fn tick(&mut self) -> FrameStats {
		self.frame += 1;
		self.focus.update(self.hover, self.mode, &self.config.focus);

		let mut stats = FrameStats::default();
		let Some(layout) = self.store.layout() else {
			return stats;
		};

		let (focus, config, pointer) = (&self.focus, &self.config, self.pointer);
		for p in &mut self.store.particles {
			let branch = match self.mode {
				Mode::Dispersing => physics::step_disperse(p, layout.center, &config.disperse),
				Mode::Interactive => {
					let anchor = physics::home_anchor(p, layout.origin(p.group), focus.scale(p.group));
					physics::step_interactive(p, anchor, pointer, &config.interaction)
				}
			};
			stats.record(branch);
		}
		stats
	}
}
