//! End-to-end scene scenarios on a 900x600 canvas, run natively.

#![allow(unused_crate_dependencies)]

use particle_portfolio::components::particle_field::theme::SilhouettePalette;
use particle_portfolio::components::particle_field::{
	BlockGlyphRaster, Group, Mode, Point, SceneConfig, SceneState, Zone,
};
use rand::SeedableRng;
use rand::rngs::SmallRng;

const WIDTH: f64 = 900.0;
const HEIGHT: f64 = 600.0;

fn scene(seed: u64) -> SceneState {
	SceneState::new(
		WIDTH,
		HEIGHT,
		SceneConfig::default(),
		SilhouettePalette::retro(),
		Box::new(BlockGlyphRaster),
		SmallRng::seed_from_u64(seed),
	)
}

fn homes(s: &SceneState) -> Vec<(Point, Group)> {
	s.store.particles.iter().map(|p| (p.home, p.group)).collect()
}

#[test]
fn every_silhouette_is_populated_inside_the_canvas() {
	let s = scene(1);
	for group in Group::ALL {
		assert!(s.store.count(group) > 0, "{group:?} has no particles");
	}
	let margin = 0.1 * WIDTH;
	for p in &s.store.particles {
		assert!(p.home.x >= -margin && p.home.x <= WIDTH + margin, "{:?}", p.home);
		assert!(p.home.y >= -margin && p.home.y <= HEIGHT + margin, "{:?}", p.home);
		assert!(p.size > 0.0);
		assert!(p.position.x >= 0.0 && p.position.x <= WIDTH);
		assert!(p.position.y >= 0.0 && p.position.y <= HEIGHT);
	}
}

#[test]
fn hovering_the_folder_focuses_it() {
	let mut s = scene(2);
	assert_eq!(s.pointer_moved(450.0, 595.0), Some(Zone::Folder));
	for _ in 0..200 {
		s.tick();
	}
	let folder = s.focus.scale(Group::Folder);
	let computer = s.focus.scale(Group::Computer);
	let map = s.focus.scale(Group::Map);
	assert!((folder - 1.2).abs() < 1e-3, "folder scale {folder}");
	assert!((computer - 0.8).abs() < 1e-3, "computer scale {computer}");
	assert!((map - 0.8).abs() < 1e-3, "map scale {map}");
	assert!((s.focus.opacity(Group::Folder) - 1.0).abs() < 1e-3);
	assert!((s.focus.opacity(Group::Map) - 0.5).abs() < 1e-3);
	assert_eq!(s.focus.opacity(Group::Text), 1.0);
}

#[test]
fn clicking_the_globe_commits_once() {
	let mut s = scene(3);
	assert_eq!(s.pointer_moved(800.0, 300.0), Some(Zone::Map));
	let mut calls = Vec::new();
	assert!(s.commit(|zone| calls.push(zone)));
	assert_eq!(s.mode, Mode::Dispersing);

	for _ in 0..5 {
		s.pointer_moved(800.0, 300.0);
		assert!(!s.commit(|zone| calls.push(zone)));
		s.tick();
	}
	assert_eq!(calls, vec![Zone::Map]);
}

#[test]
fn dispersal_shrinks_and_converges_monotonically() {
	let mut s = scene(4);
	for _ in 0..30 {
		s.tick();
	}
	s.disperse();
	let center = Point::new(WIDTH / 2.0, HEIGHT / 2.0);

	let mut frames = 0;
	while s.store.live_count() > 0 {
		let before: Vec<(f64, f64)> = s
			.store
			.particles
			.iter()
			.map(|p| (p.size, p.position.distance(center)))
			.collect();
		let stats = s.tick();
		assert_eq!(stats.dispersed, s.store.len());
		for (p, (size, dist)) in s.store.particles.iter().zip(before) {
			assert!(p.size >= 0.0);
			assert!(p.size <= size);
			assert!(p.position.distance(center) <= dist + 1e-9);
		}
		frames += 1;
		assert!(frames < 1000, "particles never vanished");
	}
	assert!(s.store.particles.iter().all(|p| p.size == 0.0));
}

#[test]
fn topology_does_not_depend_on_the_seed() {
	let a = scene(5);
	let b = scene(6);
	assert_eq!(homes(&a), homes(&b));
}

#[test]
fn regenerating_for_the_same_size_is_idempotent() {
	let mut s = scene(7);
	let first = homes(&s);
	s.resize(WIDTH, HEIGHT);
	assert_eq!(homes(&s), first);
}

#[test]
fn particles_settle_on_focus_scaled_anchors() {
	let mut s = scene(8);
	s.hover = Some(Zone::Folder);
	s.pointer = None;
	for _ in 0..600 {
		s.tick();
	}
	let layout = s.store.layout().expect("900x600 has a layout");

	for p in &s.store.particles {
		let expected = match p.group {
			Group::Text => p.home,
			group => {
				let origin = match group {
					Group::Computer => layout.computer,
					Group::Folder => layout.folder,
					_ => layout.globe,
				};
				let scale = s.focus.scale(group);
				Point::new(
					origin.x + (p.home.x - origin.x) * scale,
					origin.y + (p.home.y - origin.y) * scale,
				)
			}
		};
		assert!(
			p.position.distance(expected) < 1e-6,
			"{:?} at {:?}, expected {:?}",
			p.group,
			p.position,
			expected
		);
	}
	assert!((s.focus.scale(Group::Folder) - 1.2).abs() < 1e-9);
	assert!((s.focus.scale(Group::Map) - 0.8).abs() < 1e-9);
}
