//! Visual theming for the particle field.
//!
//! Provides the color type and the per-silhouette palette used by the shape
//! sampler.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha in `0.0..=1.0`.
	pub a: f64,
}

impl Color {
	/// Opaque colour.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Colour with explicit alpha.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same colour, different alpha.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// CSS `rgba(..)` string.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Colors for every silhouette part.
#[derive(Clone, Debug)]
pub struct SilhouettePalette {
	/// Computer case, lit faces.
	pub case_light: Color,
	/// Computer case, bevels and shadow.
	pub case_shadow: Color,
	/// Screen scanlines.
	pub screen_text: Color,
	/// Keyboard keys and screen bezel.
	pub key_dark: Color,
	/// Trackball accent.
	pub trackball: Color,

	/// Globe land masses.
	pub map_land: Color,
	/// Globe oceans.
	pub map_water: Color,
	/// Meridians and parallels.
	pub map_grid: Color,
	/// Orbit ring.
	pub map_atmosphere: Color,

	/// Folder body.
	pub folder_main: Color,
	/// Folder tab and front lip.
	pub folder_highlight: Color,
	/// Folder back and shading.
	pub folder_dark: Color,
	/// Pages sticking out of the folder.
	pub folder_page: Color,

	/// Title glyphs.
	pub text_main: Color,
}

impl SilhouettePalette {
	/// Beige retro hardware, emerald globe, blue folder, amber title.
	pub fn retro() -> Self {
		Self {
			case_light: Color::rgb(229, 229, 229),
			case_shadow: Color::rgb(212, 212, 212),
			screen_text: Color::rgb(245, 158, 11),
			key_dark: Color::rgb(163, 163, 163),
			trackball: Color::rgb(239, 68, 68),

			map_land: Color::rgb(16, 185, 129),
			map_water: Color::rgb(6, 78, 59),
			map_grid: Color::rgb(5, 150, 105),
			map_atmosphere: Color::rgb(52, 211, 153),

			folder_main: Color::rgb(59, 130, 246),
			folder_highlight: Color::rgb(96, 165, 250),
			folder_dark: Color::rgb(29, 78, 216),
			folder_page: Color::rgb(255, 255, 255),

			text_main: Color::rgb(245, 158, 11),
		}
	}

	/// Green-on-black phosphor look.
	pub fn phosphor() -> Self {
		let bright = Color::rgb(74, 222, 128);
		let mid = Color::rgb(34, 197, 94);
		let dim = Color::rgb(21, 128, 61);
		Self {
			case_light: bright,
			case_shadow: mid,
			screen_text: bright,
			key_dark: dim,
			trackball: bright,

			map_land: bright,
			map_water: dim.with_alpha(0.8),
			map_grid: mid,
			map_atmosphere: bright.with_alpha(0.7),

			folder_main: mid,
			folder_highlight: bright,
			folder_dark: dim,
			folder_page: bright,

			text_main: bright,
		}
	}
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	/// Display name.
	pub name: &'static str,
	/// Fill drawn under the particles each frame; `None` clears to transparent
	/// so the host page background shows through.
	pub background: Option<Color>,
	/// Silhouette colours.
	pub palette: SilhouettePalette,
}

impl Theme {
	/// Warm beige computer with amber accents.
	pub fn retro() -> Self {
		Self {
			name: "retro",
			background: None,
			palette: SilhouettePalette::retro(),
		}
	}

	/// Monochrome green terminal look.
	pub fn phosphor() -> Self {
		Self {
			name: "phosphor",
			background: Some(Color::rgb(3, 7, 5)),
			palette: SilhouettePalette::phosphor(),
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::retro()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn opaque_colors_render_as_hex() {
		assert_eq!(Color::rgb(245, 158, 11).to_css(), "#f59e0b");
	}

	#[test]
	fn translucent_colors_render_as_rgba() {
		assert_eq!(
			Color::rgb(16, 185, 129).with_alpha(0.5).to_css(),
			"rgba(16, 185, 129, 0.5)"
		);
	}
}
