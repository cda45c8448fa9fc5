//! Hover focus: per-group scale and opacity with smooth transitions.
//!
//! Each interactive group owns a channel whose current values chase a target
//! with exponential smoothing (`value += (target - value) * factor` once per
//! frame). The hovered group grows, the others shrink and dim, and everything
//! drifts back to neutral when nothing is hovered or the scene is dispersing.

use super::config::FocusConfig;
use super::types::{Group, Mode, Zone};

/// Smoothed scale/opacity for one focus group.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FocusChannel {
	/// Current size multiplier.
	pub scale: f64,
	/// Multiplier `scale` is easing toward.
	pub target_scale: f64,
	/// Current draw alpha.
	pub opacity: f64,
	/// Alpha `opacity` is easing toward.
	pub target_opacity: f64,
}

impl FocusChannel {
	/// Unfocused: full size, fully opaque.
	pub const NEUTRAL: Self = Self {
		scale: 1.0,
		target_scale: 1.0,
		opacity: 1.0,
		target_opacity: 1.0,
	};

	fn set_target(&mut self, scale: f64, opacity: f64) {
		self.target_scale = scale;
		self.target_opacity = opacity;
	}

	fn tick(&mut self, factor: f64) {
		self.scale += (self.target_scale - self.scale) * factor;
		self.opacity += (self.target_opacity - self.opacity) * factor;
	}
}

impl Default for FocusChannel {
	fn default() -> Self {
		Self::NEUTRAL
	}
}

/// Focus channels for the three interactive groups. `Text` has none.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FocusState {
	computer: FocusChannel,
	folder: FocusChannel,
	map: FocusChannel,
}

impl FocusState {
	/// The channel driven by `zone`.
	pub fn channel(&self, zone: Zone) -> &FocusChannel {
		match zone {
			Zone::Computer => &self.computer,
			Zone::Folder => &self.folder,
			Zone::Map => &self.map,
		}
	}

	fn channel_mut(&mut self, zone: Zone) -> &mut FocusChannel {
		match zone {
			Zone::Computer => &mut self.computer,
			Zone::Folder => &mut self.folder,
			Zone::Map => &mut self.map,
		}
	}

	/// Points every channel at the targets implied by `hover` and `mode`.
	pub fn retarget(&mut self, hover: Option<Zone>, mode: Mode, config: &FocusConfig) {
		let focused = match mode {
			Mode::Dispersing => None,
			Mode::Interactive => hover,
		};
		for zone in Zone::ALL {
			let (scale, opacity) = match focused {
				None => (1.0, 1.0),
				Some(f) if f == zone => (config.focused_scale, config.focused_opacity),
				Some(_) => (config.dimmed_scale, config.dimmed_opacity),
			};
			self.channel_mut(zone).set_target(scale, opacity);
		}
	}

	/// Advances every channel one frame toward its target.
	pub fn tick(&mut self, factor: f64) {
		let factor = factor.clamp(0.0, 1.0);
		for zone in Zone::ALL {
			self.channel_mut(zone).tick(factor);
		}
	}

	/// One frame of focus: retarget, then smooth.
	pub fn update(&mut self, hover: Option<Zone>, mode: Mode, config: &FocusConfig) {
		self.retarget(hover, mode, config);
		self.tick(config.smoothing);
	}

	/// Smoothed scale for `group`; always 1.0 for `Text`.
	pub fn scale(&self, group: Group) -> f64 {
		group.zone().map_or(1.0, |z| self.channel(z).scale)
	}

	/// Smoothed opacity for `group`; always 1.0 for `Text`.
	pub fn opacity(&self, group: Group) -> f64 {
		group.zone().map_or(1.0, |z| self.channel(z).opacity)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn run(state: &mut FocusState, hover: Option<Zone>, mode: Mode, frames: usize) {
		let config = FocusConfig::default();
		for _ in 0..frames {
			state.update(hover, mode, &config);
		}
	}

	#[test]
	fn starts_neutral() {
		let s = FocusState::default();
		for group in Group::ALL {
			assert_eq!(s.scale(group), 1.0);
			assert_eq!(s.opacity(group), 1.0);
		}
	}

	#[test]
	fn hovered_group_grows_and_others_dim() {
		let mut s = FocusState::default();
		s.retarget(Some(Zone::Map), Mode::Interactive, &FocusConfig::default());
		assert_eq!(s.channel(Zone::Map).target_scale, 1.2);
		assert_eq!(s.channel(Zone::Map).target_opacity, 1.0);
		assert_eq!(s.channel(Zone::Folder).target_scale, 0.8);
		assert_eq!(s.channel(Zone::Computer).target_opacity, 0.5);
	}

	#[test]
	fn dispersing_ignores_hover() {
		let mut s = FocusState::default();
		s.retarget(Some(Zone::Computer), Mode::Dispersing, &FocusConfig::default());
		for zone in Zone::ALL {
			assert_eq!(s.channel(zone).target_scale, 1.0);
			assert_eq!(s.channel(zone).target_opacity, 1.0);
		}
	}

	#[test]
	fn converges_within_one_percent_after_ninety_frames() {
		let mut s = FocusState::default();
		run(&mut s, Some(Zone::Folder), Mode::Interactive, 90);
		let folder = s.channel(Zone::Folder);
		let map = s.channel(Zone::Map);
		assert!((folder.scale - 1.2).abs() <= 0.01 * 1.2);
		assert!((map.scale - 0.8).abs() <= 0.01 * 0.8);
		assert!((map.opacity - 0.5).abs() <= 0.01);
	}

	#[test]
	fn approach_is_monotone_without_overshoot() {
		let mut s = FocusState::default();
		let mut last_up = 1.0;
		let mut last_down = 1.0;
		for _ in 0..400 {
			run(&mut s, Some(Zone::Computer), Mode::Interactive, 1);
			let up = s.channel(Zone::Computer).scale;
			let down = s.channel(Zone::Map).scale;
			assert!(up >= last_up && up <= 1.2);
			assert!(down <= last_down && down >= 0.8);
			last_up = up;
			last_down = down;
		}
	}

	#[test]
	fn decays_back_to_neutral_when_hover_ends() {
		let mut s = FocusState::default();
		run(&mut s, Some(Zone::Map), Mode::Interactive, 120);
		run(&mut s, None, Mode::Interactive, 200);
		for zone in Zone::ALL {
			assert!((s.channel(zone).scale - 1.0).abs() < 1e-3);
			assert!((s.channel(zone).opacity - 1.0).abs() < 1e-3);
		}
	}

	#[test]
	fn text_is_never_modulated() {
		let mut s = FocusState::default();
		run(&mut s, Some(Zone::Map), Mode::Interactive, 60);
		assert_eq!(s.scale(Group::Text), 1.0);
		assert_eq!(s.opacity(Group::Text), 1.0);
	}
}
