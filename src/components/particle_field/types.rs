//! Core value types shared by the sampler, simulation and renderer.

/// A point in canvas pixel space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	/// Horizontal pixels from the left edge.
	pub x: f64,
	/// Vertical pixels from the top edge.
	pub y: f64,
}

impl Point {
	/// Creates a point.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Euclidean distance to `other`.
	pub fn distance(self, other: Point) -> f64 {
		let (dx, dy) = (other.x - self.x, other.y - self.y);
		(dx * dx + dy * dy).sqrt()
	}

	/// Whether both coordinates are finite.
	pub fn is_finite(self) -> bool {
		self.x.is_finite() && self.y.is_finite()
	}
}

/// Which silhouette a particle belongs to.
///
/// `Text` is the name label: it reacts to the pointer but is never rescaled
/// or dimmed by focus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Group {
	/// Retro computer on the left.
	Computer,
	/// Globe on the right.
	Map,
	/// Folder in the middle.
	Folder,
	/// The owner's name.
	Text,
}

impl Group {
	/// Every group, in draw order.
	pub const ALL: [Group; 4] = [Group::Computer, Group::Map, Group::Folder, Group::Text];

	/// The interactive zone driving this group's focus channel, if any.
	pub fn zone(self) -> Option<Zone> {
		match self {
			Group::Computer => Some(Zone::Computer),
			Group::Folder => Some(Zone::Folder),
			Group::Map => Some(Zone::Map),
			Group::Text => None,
		}
	}
}

/// One of the three horizontal hover bands, each owning a focus group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Zone {
	/// Left band.
	Computer,
	/// Middle band.
	Folder,
	/// Right band.
	Map,
}

impl Zone {
	/// Every zone, left to right.
	pub const ALL: [Zone; 3] = [Zone::Computer, Zone::Folder, Zone::Map];

	/// The silhouette this zone focuses.
	pub fn group(self) -> Group {
		match self {
			Zone::Computer => Group::Computer,
			Zone::Folder => Group::Folder,
			Zone::Map => Group::Map,
		}
	}

	/// Caption shown under the zone's silhouette.
	pub fn label(self) -> &'static str {
		match self {
			Zone::Computer => "RESUME & SKILLS",
			Zone::Folder => "PROJECT SHOWCASE",
			Zone::Map => "LIFE TIMELINE",
		}
	}
}

/// Simulation mode. `Dispersing` is terminal for an engine instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
	/// Pointer repulsion and spring back home.
	#[default]
	Interactive,
	/// Pull to the centre and shrink away.
	Dispersing,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn zone_group_mapping_is_inverse() {
		for zone in Zone::ALL {
			assert_eq!(zone.group().zone(), Some(zone));
		}
		assert_eq!(Group::Text.zone(), None);
	}

	#[test]
	fn distance_is_euclidean() {
		let d = Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0));
		assert!((d - 5.0).abs() < 1e-12);
	}
}
