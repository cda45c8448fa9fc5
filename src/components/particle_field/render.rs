//! Canvas rendering for the particle field.
//!
//! Drawing goes through the small [`Surface`] trait so the same pass runs
//! against the browser's 2D context and against a recorder in tests.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::SceneState;
use super::theme::{Color, Theme};
use super::types::{Group, Mode, Point};

/// The handful of drawing operations the particle pass needs.
pub trait Surface {
	/// Clears `width` x `height`, then paints `background` if given.
	fn clear(&mut self, width: f64, height: f64, background: Option<Color>);
	fn set_alpha(&mut self, alpha: f64);
	fn fill_disk(&mut self, center: Point, radius: f64, color: Color);
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&mut self, width: f64, height: f64, background: Option<Color>) {
		self.clear_rect(0.0, 0.0, width, height);
		if let Some(bg) = background {
			self.set_fill_style_str(&bg.to_css());
			self.fill_rect(0.0, 0.0, width, height);
		}
	}

	fn set_alpha(&mut self, alpha: f64) {
		self.set_global_alpha(alpha);
	}

	fn fill_disk(&mut self, center: Point, radius: f64, color: Color) {
		self.set_fill_style_str(&color.to_css());
		self.begin_path();
		let _ = self.arc(center.x, center.y, radius, 0.0, PI * 2.0);
		self.fill();
	}
}

/// Radius multiplier for `group` this frame. Dispersing particles shrink
/// through their own size instead, so focus no longer applies.
pub fn size_multiplier(state: &SceneState, group: Group) -> f64 {
	match state.mode {
		Mode::Interactive => state.focus.scale(group),
		Mode::Dispersing => 1.0,
	}
}

/// Draws every live particle.
pub fn render(state: &SceneState, surface: &mut impl Surface, theme: &Theme) {
	surface.clear(state.width, state.height, theme.background);

	for p in state.store.particles.iter().filter(|p| p.is_live()) {
		surface.set_alpha(state.focus.opacity(p.group));
		surface.fill_disk(p.position, p.size * size_multiplier(state, p.group), p.color);
	}

	surface.set_alpha(1.0);
}
