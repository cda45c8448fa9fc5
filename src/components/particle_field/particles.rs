//! Particle records and the store that owns them.

use rand::Rng;

use super::config::SamplerConfig;
use super::glyph::GlyphRaster;
use super::shapes::{self, Layout, ParticleSeed};
use super::theme::{Color, SilhouettePalette};
use super::types::{Group, Point};

/// A single simulated point.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Current position in canvas space.
	pub position: Point,
	/// Rest position on its silhouette. Never changes after creation.
	pub home: Point,
	/// Current radius; only shrinks, and only while dispersing.
	pub size: f64,
	/// How strongly the pointer pushes this particle.
	pub density: f64,
	/// Fill colour.
	pub color: Color,
	/// Silhouette this particle belongs to.
	pub group: Group,
}

impl Particle {
	/// Spawns a particle for `seed` at a random point on the canvas so the
	/// silhouettes assemble out of scatter.
	pub fn from_seed(seed: &ParticleSeed, layout: &Layout, rng: &mut impl Rng) -> Self {
		Self {
			position: Point::new(
				rng.random_range(0.0..layout.width),
				rng.random_range(0.0..layout.height),
			),
			home: seed.home,
			size: rng.random_range(1.0..3.0) * layout.scale * seed.size_hint,
			density: rng.random_range(1.0..31.0),
			color: seed.color,
			group: seed.group,
		}
	}

	/// Whether the particle still has a visible radius.
	pub fn is_live(&self) -> bool {
		self.size > 0.0
	}
}

/// Every particle for the current canvas size, with the layout they were
/// generated for.
///
/// The store is never resized in place: a new one is generated and swapped in.
#[derive(Clone, Debug, Default)]
pub struct ParticleStore {
	/// Every particle, text first, then computer, folder and globe.
	pub particles: Vec<Particle>,
	layout: Option<Layout>,
}

impl ParticleStore {
	/// Samples all silhouettes for a `width` x `height` canvas. Degenerate
	/// extents yield an empty store.
	pub fn generate(
		width: f64,
		height: f64,
		config: &SamplerConfig,
		palette: &SilhouettePalette,
		raster: &dyn GlyphRaster,
		rng: &mut impl Rng,
	) -> Self {
		let Some(layout) = Layout::new(width, height, config.reference_extent) else {
			return Self::default();
		};
		let particles = shapes::generate(&layout, config, palette, raster, rng)
			.iter()
			.map(|seed| Particle::from_seed(seed, &layout, rng))
			.collect();

		Self {
			particles,
			layout: Some(layout),
		}
	}

	/// Layout the store was generated for; `None` when the canvas was degenerate.
	pub fn layout(&self) -> Option<Layout> {
		self.layout
	}

	/// Number of particles.
	pub fn len(&self) -> usize {
		self.particles.len()
	}

	/// Whether the store holds no particles.
	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	/// Particles belonging to `group`.
	pub fn count(&self, group: Group) -> usize {
		self.particles.iter().filter(|p| p.group == group).count()
	}

	/// Particles with a positive radius.
	pub fn live_count(&self) -> usize {
		self.particles.iter().filter(|p| p.is_live()).count()
	}
}
