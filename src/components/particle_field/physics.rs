//! Per-frame particle integration.
//!
//! Forces are heuristic displacements applied directly to position; there is
//! no velocity state. Interactive particles are either pushed by the pointer
//! or pulled toward their anchor, never both in the same frame. Dispersing
//! particles collapse toward the canvas centre and shrink away.

use super::config::{DisperseConfig, InteractionConfig};
use super::particles::Particle;
use super::types::{Group, Point};

/// Which rule moved a particle this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Branch {
	/// Pushed away from the pointer.
	Repelled,
	/// Moved toward its anchor.
	Sprung,
	/// Pulled to the centre and shrunk.
	Dispersed,
}

/// Where the particle rests this frame: its home scaled about the group
/// origin by the group's focus scale. `Text` always rests at home.
pub fn home_anchor(particle: &Particle, origin: Option<Point>, scale: f64) -> Point {
	match (particle.group, origin) {
		(Group::Text, _) | (_, None) => particle.home,
		(_, Some(o)) => Point::new(
			o.x + (particle.home.x - o.x) * scale,
			o.y + (particle.home.y - o.y) * scale,
		),
	}
}

/// One interactive frame. Inside the pointer radius the particle is pushed
/// away from the pointer, linearly weaker with distance; outside it closes a
/// fixed fraction of the gap to `anchor`.
pub fn step_interactive(
	particle: &mut Particle,
	anchor: Point,
	pointer: Option<Point>,
	config: &InteractionConfig,
) -> Branch {
	if let Some(pointer) = pointer {
		let (dx, dy) = (pointer.x - particle.position.x, pointer.y - particle.position.y);
		let distance = (dx * dx + dy * dy).sqrt();
		if distance < config.radius {
			// Directly under the pointer the push direction is undefined.
			if distance > f64::EPSILON {
				let force = (config.radius - distance) / config.radius * particle.density;
				particle.position.x -= dx / distance * force;
				particle.position.y -= dy / distance * force;
			}
			return Branch::Repelled;
		}
	}

	particle.position.x -= (particle.position.x - anchor.x) / config.spring_divisor;
	particle.position.y -= (particle.position.y - anchor.y) / config.spring_divisor;
	Branch::Sprung
}

/// One dispersing frame: pull toward `center` and shrink, floored at zero.
pub fn step_disperse(particle: &mut Particle, center: Point, config: &DisperseConfig) -> Branch {
	particle.position.x += (center.x - particle.position.x) * config.pull;
	particle.position.y += (center.y - particle.position.y) * config.pull;
	particle.size = (particle.size - config.shrink).max(0.0);
	Branch::Dispersed
}
