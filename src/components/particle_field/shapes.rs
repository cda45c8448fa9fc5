//! Procedural silhouettes: the seed positions particles assemble into.
//!
//! Topology is deterministic. Every "texture" decision (eroded edges, scanline
//! gaps, globe sample points) comes from [`texture`], a coordinate hash, so the
//! same canvas size always yields the same homes. The caller's random source
//! only picks between the two case shades of the computer.

use std::f64::consts::{PI, TAU};

use rand::Rng;

use super::config::SamplerConfig;
use super::glyph::{self, GlyphRaster};
use super::theme::{Color, SilhouettePalette};
use super::types::{Group, Point};

/// A home position waiting to become a particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleSeed {
	/// Rest position.
	pub home: Point,
	/// Fill colour.
	pub color: Color,
	/// Multiplier on the particle's random base size.
	pub size_hint: f64,
	/// Owning silhouette.
	pub group: Group,
}

/// Where each silhouette sits for a given canvas size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
	/// Canvas width in pixels.
	pub width: f64,
	/// Canvas height in pixels.
	pub height: f64,
	/// `min(width, height) / reference_extent`.
	pub scale: f64,
	/// Computer centre, a fifth of the way across.
	pub computer: Point,
	/// Folder centre, mid-canvas.
	pub folder: Point,
	/// Globe centre, four fifths of the way across.
	pub globe: Point,
	/// Canvas centre; dispersal target.
	pub center: Point,
}

impl Layout {
	/// Returns `None` for empty, negative or non-finite extents.
	pub fn new(width: f64, height: f64, reference_extent: f64) -> Option<Self> {
		let valid = |v: f64| v.is_finite() && v > 0.0;
		if !valid(width) || !valid(height) || !valid(reference_extent) {
			return None;
		}
		let mid = height / 2.0;
		Some(Self {
			width,
			height,
			scale: width.min(height) / reference_extent,
			computer: Point::new(width * 0.2, mid),
			folder: Point::new(width * 0.5, mid),
			globe: Point::new(width * 0.8, mid),
			center: Point::new(width / 2.0, mid),
		})
	}

	/// The fixed centre a group breathes around under focus scaling.
	pub fn origin(&self, group: Group) -> Option<Point> {
		match group {
			Group::Computer => Some(self.computer),
			Group::Folder => Some(self.folder),
			Group::Map => Some(self.globe),
			Group::Text => None,
		}
	}
}

/// Deterministic hash in `[0, 1)` for a coordinate pair and a decision salt.
pub fn texture(a: f64, b: f64, salt: u32) -> f64 {
	let s = salt as f64;
	let v = ((a + s * 17.31) * 12.9898 + (b - s * 5.77) * 78.233).sin() * 43758.5453;
	v - v.floor()
}

/// `start, start + step, ...` strictly below `start + len`.
fn steps(start: f64, len: f64, step: f64) -> impl Iterator<Item = f64> {
	let count = if step > 0.0 && len > 0.0 {
		(len / step).ceil() as usize
	} else {
		0
	};
	(0..count)
		.map(move |i| start + i as f64 * step)
		.filter(move |v| *v < start + len)
}

/// Cell parity along one axis, for stripes and checkerboards.
fn band(offset: f64, cell: f64) -> i64 {
	((offset / cell).floor() as i64).rem_euclid(2)
}

struct Emitter<'a> {
	seeds: &'a mut Vec<ParticleSeed>,
	group: Group,
}

impl Emitter<'_> {
	fn emit(&mut self, x: f64, y: f64, color: Color, size_hint: f64) {
		self.seeds.push(ParticleSeed {
			home: Point::new(x, y),
			color,
			size_hint,
			group: self.group,
		});
	}

	/// A horizontal label underline centred on `cx`.
	fn underline(&mut self, cx: f64, y: f64, width: f64, step: f64, color: Color) {
		for x in steps(cx - width / 2.0, width, step) {
			self.emit(x, y, color, 0.6);
		}
	}
}

/// Generates every seed for the canvas described by `layout`.
pub fn generate(
	layout: &Layout,
	config: &SamplerConfig,
	palette: &SilhouettePalette,
	raster: &dyn GlyphRaster,
	rng: &mut impl Rng,
) -> Vec<ParticleSeed> {
	let mut seeds = Vec::new();
	glyph::sample_title(layout, config, palette, raster, &mut seeds);
	computer(layout, config, palette, rng, &mut seeds);
	folder(layout, config, palette, &mut seeds);
	globe(layout, config, palette, &mut seeds);
	seeds
}

/// Retro monitor with a scanline screen, over a keyboard with a trackball.
pub fn computer(
	layout: &Layout,
	config: &SamplerConfig,
	palette: &SilhouettePalette,
	rng: &mut impl Rng,
	seeds: &mut Vec<ParticleSeed>,
) {
	let s = layout.scale;
	let gap = config.grid_step * s;
	let Point { x: cx, y: cy } = layout.computer;
	let mut out = Emitter {
		seeds,
		group: Group::Computer,
	};

	let (mon_w, mon_h) = (280.0 * s, 220.0 * s);
	let (mon_x, mon_y) = (cx - mon_w / 2.0, cy - 120.0 * s);
	let margin = 25.0 * s;

	for y in steps(mon_y, mon_h, gap) {
		for x in steps(mon_x, mon_w, gap) {
			let in_screen_x = x > mon_x + margin && x < mon_x + mon_w - margin;
			let in_screen_y = y > mon_y + margin && y < mon_y + mon_h - margin * 1.2;

			if !(in_screen_x && in_screen_y) {
				let is_edge = x < mon_x + 10.0
					|| x > mon_x + mon_w - 10.0
					|| y < mon_y + 10.0
					|| y > mon_y + mon_h - 10.0;
				if !is_edge || texture(x, y, 1) > 0.4 {
					let color = if rng.random_bool(0.5) {
						palette.case_light
					} else {
						palette.case_shadow
					};
					out.emit(x, y, color, 1.0);
				}
			} else if band(y - (mon_y + margin), 12.0 * s) == 0 && texture(x, y, 2) > 0.3 {
				out.emit(x, y, palette.screen_text, 0.8);
			}
		}
	}

	let (key_w, key_h) = (300.0 * s, 80.0 * s);
	let (key_x, key_y) = (cx - key_w / 2.0, mon_y + mon_h - 5.0 * s);
	let ball = Point::new(key_x + key_w * 0.8, key_y + key_h * 0.5);
	let key_cell = 15.0 * s;

	for y in steps(key_y, key_h, gap) {
		for x in steps(key_x, key_w, gap) {
			let dist = Point::new(x, y).distance(ball);
			if dist < 20.0 * s {
				out.emit(x, y, palette.trackball, 1.0);
			} else if dist < 25.0 * s {
				out.emit(x, y, palette.case_shadow, 1.0);
			} else {
				let in_keys = x > key_x + key_cell
					&& x < key_x + key_w * 0.65
					&& y > key_y + key_cell
					&& y < key_y + key_h - key_cell;
				let color = if !in_keys {
					palette.case_light
				} else if band(x - key_x, key_cell) != 0 && band(y - key_y, key_cell) != 0 {
					palette.key_dark
				} else {
					palette.case_shadow
				};
				out.emit(x, y, color, 1.0);
			}
		}
	}

	out.underline(cx, key_y + key_h + 20.0 * s, 120.0 * s, gap, palette.case_light);
}

/// Folder with a tab, a darker back strip, peeking pages and a ring badge.
pub fn folder(
	layout: &Layout,
	config: &SamplerConfig,
	palette: &SilhouettePalette,
	seeds: &mut Vec<ParticleSeed>,
) {
	let s = layout.scale;
	let gap = config.grid_step * s;
	let Point { x: cx, y: cy } = layout.folder;
	let mut out = Emitter {
		seeds,
		group: Group::Folder,
	};

	let (body_w, body_h) = (240.0 * s, 180.0 * s);
	let (body_x, body_y) = (cx - body_w / 2.0, cy - body_h / 3.0);
	let (tab_w, tab_h) = (90.0 * s, 30.0 * s);

	for y in steps(body_y - tab_h, tab_h, gap) {
		for x in steps(body_x, tab_w, gap) {
			out.emit(x, y, palette.folder_dark, 1.0);
		}
	}

	for y in steps(body_y, body_h, gap) {
		for x in steps(body_x, body_w, gap) {
			let is_front = y > body_y + 20.0 * s;
			if is_front {
				if texture(x, y, 3) > 0.1 {
					out.emit(x, y, palette.folder_main, 1.0);
				}
			} else {
				out.emit(x, y, palette.folder_dark, 1.0);
				let inside = x > body_x + 20.0 && x < body_x + body_w - 20.0;
				if inside && texture(x, y, 4) > 0.8 {
					out.emit(x, y - 10.0, palette.folder_page, 1.0);
				}
			}
		}
	}

	let badge = Point::new(body_x + body_w / 2.0, body_y + body_h / 2.0 + 10.0);
	for r in steps(0.0, 30.0 * s, gap) {
		for theta in steps(0.0, TAU, 0.5) {
			out.emit(
				badge.x + r * theta.cos(),
				badge.y + r * theta.sin(),
				palette.folder_highlight,
				0.8,
			);
		}
	}

	out.underline(cx, body_y + body_h + 20.0 * s, 120.0 * s, gap, palette.folder_main);
}

/// Sphere of land, grid lines and sparse water, circled by a tilted orbit ring.
pub fn globe(
	layout: &Layout,
	config: &SamplerConfig,
	palette: &SilhouettePalette,
	seeds: &mut Vec<ParticleSeed>,
) {
	let s = layout.scale;
	let gap = config.grid_step * s;
	let Point { x: cx, y: cy } = layout.globe;
	let radius = config.globe_radius * s;
	let mut out = Emitter {
		seeds,
		group: Group::Map,
	};

	for i in 0..config.globe_samples {
		let n = i as f64;
		// Uniform on the sphere: z uniform in [-1, 1], azimuth uniform.
		let z = 2.0 * texture(n, 1.0, 5) - 1.0;
		let ring = (1.0 - z * z).sqrt();
		let theta = TAU * texture(n, 2.0, 5);

		let x3 = radius * ring * theta.cos();
		let y3 = radius * ring * theta.sin();
		let z3 = radius * z;

		let px = cx + x3;
		let py = cy + y3 * 0.9 + z3 * 0.2;

		let noise = (x3 * 0.05).sin() * (y3 * 0.05).cos() + (z3 * 0.05).sin();
		let is_land = noise > 0.2;
		let is_lat_line = z3.abs() % (radius / 5.0) < 3.0;
		let is_long_line = (theta % (PI / 4.0)).abs() < 0.1;

		if is_land {
			out.emit(px, py, palette.map_land, 0.9);
		} else if is_lat_line || is_long_line {
			out.emit(px, py, palette.map_grid, 0.6);
		} else if texture(n, 3.0, 5) > 0.7 {
			out.emit(px, py, palette.map_water, 0.5);
		}
	}

	for i in 0..config.orbit_samples {
		let n = i as f64;
		if texture(n, 6.0, 6) <= 0.5 {
			continue;
		}
		let angle = TAU * texture(n, 4.0, 6);
		let dist = radius * (1.2 + 0.3 * texture(n, 5.0, 6));
		let (ox, oy) = (dist * angle.cos(), dist * 0.3 * angle.sin());
		out.emit(
			cx + ox * 0.9 - oy * 0.4,
			cy + ox * 0.4 + oy * 0.9,
			palette.map_atmosphere,
			0.4,
		);
	}

	out.underline(cx, cy + radius + 40.0 * s, 120.0 * s, gap, palette.map_land);
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;

	fn layout() -> Layout {
		Layout::new(900.0, 600.0, 900.0).unwrap()
	}

	fn homes(seeds: &[ParticleSeed]) -> Vec<(f64, f64)> {
		seeds.iter().map(|s| (s.home.x, s.home.y)).collect()
	}

	#[test]
	fn degenerate_extents_have_no_layout() {
		assert!(Layout::new(0.0, 600.0, 900.0).is_none());
		assert!(Layout::new(900.0, -1.0, 900.0).is_none());
		assert!(Layout::new(f64::NAN, 600.0, 900.0).is_none());
		assert!(Layout::new(f64::INFINITY, 600.0, 900.0).is_none());
	}

	#[test]
	fn layout_places_silhouettes_in_thirds() {
		let l = layout();
		assert_eq!(l.computer, Point::new(180.0, 300.0));
		assert_eq!(l.folder, Point::new(450.0, 300.0));
		assert_eq!(l.globe, Point::new(720.0, 300.0));
		assert!((l.scale - 600.0 / 900.0).abs() < 1e-12);
		assert_eq!(l.origin(Group::Text), None);
	}

	#[test]
	fn texture_stays_in_unit_interval() {
		for i in 0..500 {
			let v = texture(i as f64 * 3.7, i as f64 * -1.3, i % 7);
			assert!((0.0..1.0).contains(&v), "texture out of range: {v}");
		}
	}

	#[test]
	fn steps_excludes_the_end() {
		let v: Vec<f64> = steps(0.0, 10.0, 5.0).collect();
		assert_eq!(v, vec![0.0, 5.0]);
		assert_eq!(steps(0.0, 10.0, 0.0).count(), 0);
		assert_eq!(steps(0.0, -3.0, 1.0).count(), 0);
	}

	#[test]
	fn computer_topology_ignores_rng_seed() {
		let (l, config, palette) = (layout(), SamplerConfig::default(), SilhouettePalette::retro());
		let mut a = Vec::new();
		let mut b = Vec::new();
		computer(&l, &config, &palette, &mut SmallRng::seed_from_u64(1), &mut a);
		computer(&l, &config, &palette, &mut SmallRng::seed_from_u64(99), &mut b);
		assert!(!a.is_empty());
		assert_eq!(homes(&a), homes(&b));
		assert!(a.iter().all(|s| s.group == Group::Computer));
	}

	#[test]
	fn computer_has_trackball_and_scanlines() {
		let (l, config, palette) = (layout(), SamplerConfig::default(), SilhouettePalette::retro());
		let mut seeds = Vec::new();
		computer(&l, &config, &palette, &mut SmallRng::seed_from_u64(3), &mut seeds);
		assert!(seeds.iter().any(|s| s.color == palette.trackball));
		assert!(seeds.iter().any(|s| s.color == palette.screen_text));
		assert!(seeds.iter().any(|s| s.color == palette.key_dark));
	}

	#[test]
	fn folder_has_tab_pages_and_badge() {
		let (l, config, palette) = (layout(), SamplerConfig::default(), SilhouettePalette::retro());
		let mut seeds = Vec::new();
		folder(&l, &config, &palette, &mut seeds);
		assert!(seeds.iter().all(|s| s.group == Group::Folder));
		assert!(seeds.iter().any(|s| s.color == palette.folder_page));
		assert!(seeds.iter().any(|s| s.color == palette.folder_highlight));
		let tab_top = l.folder.y - 180.0 * l.scale / 3.0 - 30.0 * l.scale;
		assert!(seeds.iter().any(|s| (s.home.y - tab_top).abs() < 1e-9));
	}

	#[test]
	fn globe_stays_near_its_centre() {
		let (l, config, palette) = (layout(), SamplerConfig::default(), SilhouettePalette::retro());
		let mut seeds = Vec::new();
		globe(&l, &config, &palette, &mut seeds);
		assert!(seeds.iter().all(|s| s.group == Group::Map));
		let r = config.globe_radius * l.scale;
		let underline_y = l.globe.y + r + 40.0 * l.scale;
		for s in &seeds {
			if (s.home.y - underline_y).abs() < 1e-9 {
				continue;
			}
			// Orbit ring reaches at most ~1.53 radii after rotation.
			assert!(s.home.distance(l.globe) <= r * 1.6, "seed too far: {:?}", s.home);
		}
		assert!(seeds.iter().any(|s| s.color == palette.map_land));
		assert!(seeds.iter().any(|s| s.color == palette.map_atmosphere));
	}

	#[test]
	fn band_alternates() {
		assert_eq!(band(0.0, 12.0), 0);
		assert_eq!(band(12.5, 12.0), 1);
		assert_eq!(band(24.0, 12.0), 0);
		assert_eq!(band(-1.0, 12.0), 1);
	}
}
