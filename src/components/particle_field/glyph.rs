//! Title glyphs rendered to an alpha mask and sampled into particle seeds.
//!
//! In the browser the title is drawn with the real monospace font on an
//! offscreen canvas ([`CanvasGlyphRaster`]). When no canvas is available, and
//! in native tests, a built-in 5x7 block font stands in ([`BlockGlyphRaster`]).

use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use super::config::SamplerConfig;
use super::shapes::{Layout, ParticleSeed, texture};
use super::types::{Group, Point};
use super::theme::SilhouettePalette;

/// Per-pixel coverage of a rasterized string, row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct AlphaMask {
	width: usize,
	height: usize,
	alpha: Vec<u8>,
}

impl AlphaMask {
	/// An empty (fully transparent) mask.
	pub fn new(width: usize, height: usize) -> Self {
		Self {
			width,
			height,
			alpha: vec![0; width * height],
		}
	}

	/// Extracts the alpha channel from tightly packed RGBA pixels.
	pub fn from_rgba(width: usize, height: usize, rgba: &[u8]) -> Option<Self> {
		if rgba.len() != width * height * 4 {
			return None;
		}
		Some(Self {
			width,
			height,
			alpha: rgba.chunks_exact(4).map(|px| px[3]).collect(),
		})
	}

	/// Mask width in pixels.
	pub fn width(&self) -> usize {
		self.width
	}

	/// Mask height in pixels.
	pub fn height(&self) -> usize {
		self.height
	}

	/// Alpha at `(x, y)`; zero outside the mask.
	pub fn get(&self, x: usize, y: usize) -> u8 {
		if x >= self.width || y >= self.height {
			return 0;
		}
		self.alpha[y * self.width + x]
	}

	/// Fills the pixel rectangle covering `[x0, x1) x [y0, y1)`, clipped.
	fn fill(&mut self, x0: f64, y0: f64, x1: f64, y1: f64) {
		let clip = |v: f64, max: usize| (v.round().max(0.0) as usize).min(max);
		let (xa, xb) = (clip(x0, self.width), clip(x1, self.width));
		let (ya, yb) = (clip(y0, self.height), clip(y1, self.height));
		for y in ya..yb {
			self.alpha[y * self.width + xa..y * self.width + xb].fill(255);
		}
	}
}

/// Renders text centred on a point into an [`AlphaMask`] of the given size.
pub trait GlyphRaster {
	fn rasterize(
		&self,
		text: &str,
		font_px: f64,
		center: Point,
		width: usize,
		height: usize,
	) -> Option<AlphaMask>;
}

/// Bitmap rows for a 5x7 glyph; bit 4 is the leftmost column.
fn block_glyph(c: char) -> [u8; 7] {
	match c.to_ascii_uppercase() {
		'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
		'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
		'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
		'D' => [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
		'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
		'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
		'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111],
		'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
		'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
		'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
		'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
		'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
		'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
		'N' => [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001],
		'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
		'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
		'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
		'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
		'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
		'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
		'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
		'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
		'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010],
		'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
		'Y' => [0b10001, 0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100],
		'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
		'0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
		'1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
		'2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
		'3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
		'4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
		'5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
		'6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
		'7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
		'8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
		'9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
		' ' => [0; 7],
		'-' => [0, 0, 0, 0b11111, 0, 0, 0],
		'.' => [0, 0, 0, 0, 0, 0b01100, 0b01100],
		'\'' => [0b00100, 0b00100, 0b01000, 0, 0, 0, 0],
		_ => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0, 0b00100],
	}
}

/// Pure-Rust block font: 5x7 cells, one-cell spacing, cap height `0.7 em`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BlockGlyphRaster;

impl GlyphRaster for BlockGlyphRaster {
	fn rasterize(
		&self,
		text: &str,
		font_px: f64,
		center: Point,
		width: usize,
		height: usize,
	) -> Option<AlphaMask> {
		if width == 0 || height == 0 || !(font_px > 0.0) || !center.is_finite() {
			return None;
		}
		let mut mask = AlphaMask::new(width, height);
		let cell = font_px * 0.1;
		let count = text.chars().count() as f64;
		let left = center.x - (count * 6.0 - 1.0) * cell / 2.0;
		let top = center.y - 3.5 * cell;

		for (i, c) in text.chars().enumerate() {
			let origin = left + i as f64 * 6.0 * cell;
			for (row, bits) in block_glyph(c).iter().enumerate() {
				for col in 0..5 {
					if bits & (0b10000 >> col) == 0 {
						continue;
					}
					let x = origin + col as f64 * cell;
					let y = top + row as f64 * cell;
					mask.fill(x, y, x + cell, y + cell);
				}
			}
		}
		Some(mask)
	}
}

/// Draws the title with the page's monospace font on an offscreen canvas.
pub struct CanvasGlyphRaster {
	document: Document,
}

impl CanvasGlyphRaster {
	/// Uses `document` to create offscreen canvases.
	pub fn new(document: Document) -> Self {
		Self { document }
	}

	fn draw(
		&self,
		text: &str,
		font_px: f64,
		center: Point,
		width: usize,
		height: usize,
	) -> Option<AlphaMask> {
		let canvas: HtmlCanvasElement = self
			.document
			.create_element("canvas")
			.ok()?
			.dyn_into()
			.ok()?;
		canvas.set_width(width as u32);
		canvas.set_height(height as u32);
		let ctx: CanvasRenderingContext2d = canvas.get_context("2d").ok()??.dyn_into().ok()?;

		ctx.set_font(&format!("bold {}px \"Share Tech Mono\", monospace", font_px));
		ctx.set_fill_style_str("white");
		ctx.set_text_align("center");
		ctx.set_text_baseline("middle");
		ctx.fill_text(text, center.x, center.y).ok()?;

		let image = ctx
			.get_image_data(0.0, 0.0, width as f64, height as f64)
			.ok()?;
		AlphaMask::from_rgba(width, height, &image.data().0)
	}
}

impl GlyphRaster for CanvasGlyphRaster {
	fn rasterize(
		&self,
		text: &str,
		font_px: f64,
		center: Point,
		width: usize,
		height: usize,
	) -> Option<AlphaMask> {
		if width == 0 || height == 0 {
			return None;
		}
		self.draw(text, font_px, center, width, height).or_else(|| {
			warn!("particle-portfolio: offscreen text canvas unavailable, using block font");
			BlockGlyphRaster.rasterize(text, font_px, center, width, height)
		})
	}
}

/// Scans the rasterized title on a fixed stride and emits `Text` seeds.
pub fn sample_title(
	layout: &Layout,
	config: &SamplerConfig,
	palette: &SilhouettePalette,
	raster: &dyn GlyphRaster,
	seeds: &mut Vec<ParticleSeed>,
) {
	let font_px = (config.title_size * layout.scale).floor();
	if config.title.trim().is_empty() || font_px < 1.0 {
		return;
	}
	let (width, height) = (layout.width as usize, layout.height as usize);
	let center = Point::new(layout.width / 2.0, layout.height * config.title_y);
	let Some(mask) = raster.rasterize(&config.title, font_px, center, width, height) else {
		return;
	};

	let stride = config.text_stride.max(1);
	for y in (0..mask.height()).step_by(stride) {
		for x in (0..mask.width()).step_by(stride) {
			if mask.get(x, y) <= config.alpha_threshold {
				continue;
			}
			if texture(x as f64, y as f64, 0) <= config.text_skip {
				continue;
			}
			seeds.push(ParticleSeed {
				home: Point::new(x as f64, y as f64),
				color: palette.text_main,
				size_hint: 0.8,
				group: Group::Text,
			});
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn rgba_mask_keeps_alpha_channel() {
		let rgba = [255, 255, 255, 10, 0, 0, 0, 200];
		let mask = AlphaMask::from_rgba(2, 1, &rgba).unwrap();
		assert_eq!(mask.get(0, 0), 10);
		assert_eq!(mask.get(1, 0), 200);
		assert_eq!(mask.get(2, 0), 0);
		assert!(AlphaMask::from_rgba(2, 2, &rgba).is_none());
	}

	#[test]
	fn block_font_inks_the_centre_of_an_i() {
		let mask = BlockGlyphRaster
			.rasterize("I", 100.0, Point::new(50.0, 50.0), 100, 100)
			.unwrap();
		// The stem of the I is the middle column.
		assert_eq!(mask.get(50, 50), 255);
		assert_eq!(mask.get(5, 5), 0);
	}

	#[test]
	fn block_font_clips_to_the_mask() {
		let mask = BlockGlyphRaster
			.rasterize("WWWWWWWW", 200.0, Point::new(10.0, 10.0), 40, 20)
			.unwrap();
		assert_eq!(mask.width(), 40);
		assert_eq!(mask.height(), 20);
	}

	#[test]
	fn block_font_rejects_degenerate_input() {
		let r = BlockGlyphRaster;
		assert!(r.rasterize("A", 0.0, Point::new(1.0, 1.0), 10, 10).is_none());
		assert!(r.rasterize("A", 10.0, Point::new(1.0, 1.0), 0, 10).is_none());
		assert!(r.rasterize("A", f64::NAN, Point::new(1.0, 1.0), 10, 10).is_none());
	}

	#[test]
	fn title_seeds_sit_in_the_upper_band_on_the_stride() {
		let layout = Layout::new(900.0, 600.0, 900.0).unwrap();
		let config = SamplerConfig::default();
		let mut seeds = Vec::new();
		sample_title(&layout, &config, &SilhouettePalette::retro(), &BlockGlyphRaster, &mut seeds);

		assert!(!seeds.is_empty());
		for s in &seeds {
			assert_eq!(s.group, Group::Text);
			assert_eq!(s.home.x as usize % 2, 0);
			assert_eq!(s.home.y as usize % 2, 0);
			assert!(s.home.y < 600.0 * 0.3, "title seed too low: {:?}", s.home);
		}
	}

	#[test]
	fn title_sampling_skips_some_ink() {
		let layout = Layout::new(900.0, 600.0, 900.0).unwrap();
		let mut config = SamplerConfig::default();
		let mut full = Vec::new();
		config.text_skip = 0.0;
		sample_title(&layout, &config, &SilhouettePalette::retro(), &BlockGlyphRaster, &mut full);
		let mut sparse = Vec::new();
		config.text_skip = 0.1;
		sample_title(&layout, &config, &SilhouettePalette::retro(), &BlockGlyphRaster, &mut sparse);

		assert!(sparse.len() < full.len());
		// Roughly one in ten ink pixels is dropped.
		let kept = sparse.len() as f64 / full.len() as f64;
		assert!((0.8..0.97).contains(&kept), "kept fraction {kept}");
	}

	#[test]
	fn blank_title_emits_nothing() {
		let layout = Layout::new(900.0, 600.0, 900.0).unwrap();
		let config = SamplerConfig {
			title: "   ".into(),
			..SamplerConfig::default()
		};
		let mut seeds = Vec::new();
		sample_title(&layout, &config, &SilhouettePalette::retro(), &BlockGlyphRaster, &mut seeds);
		assert!(seeds.is_empty());
	}
}
