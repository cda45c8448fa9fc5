//! Particle-field scene: thousands of points that assemble into a retro
//! computer, a folder, a globe and the owner's name.
//!
//! Renders on an HTML canvas with:
//! - Procedural silhouettes sampled on a grid, plus rasterized title glyphs
//! - Pointer repulsion and a spring back to each particle's home
//! - Hover focus that grows one silhouette and dims the other two
//! - A one-way "disperse" transition when the visitor commits to a zone
//!
//! The simulation ([`SceneState`]) is plain Rust and runs natively in tests;
//! only [`ParticleScene`] and the canvas-backed raster and surface touch the
//! browser.
//!
//! # Example
//!
//! ```ignore
//! use particle_portfolio::components::particle_field::{ParticleScene, Zone};
//!
//! let expanded = RwSignal::new(false);
//! let on_interact = Callback::new(move |zone: Zone| expanded.set(true));
//!
//! view! { <ParticleScene on_interact=on_interact expanded=expanded /> }
//! ```

mod component;
pub mod config;
pub mod focus;
pub mod glyph;
pub mod particles;
pub mod physics;
pub mod render;
pub mod shapes;
pub mod state;
pub mod theme;
mod types;

pub use component::{MountError, ParticleScene};
pub use config::SceneConfig;
pub use glyph::{AlphaMask, BlockGlyphRaster, GlyphRaster};
pub use particles::{Particle, ParticleStore};
pub use state::{FrameStats, SceneState, zone_at};
pub use theme::Theme;
pub use types::{Group, Mode, Point, Zone};
