//! Leptos component driving the particle scene.
//!
//! The component creates a canvas inside a full-size container, wires pointer
//! handlers on the container, regenerates the scene on window resize, and runs
//! the simulation and renderer once per `requestAnimationFrame`. Unmounting
//! cancels the pending frame and removes the resize listener.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, MouseEvent, Window};

use super::config::SceneConfig;
use super::glyph::CanvasGlyphRaster;
use super::render;
use super::state::SceneState;
use super::theme::Theme;
use super::types::Zone;

/// Why a scene could not start. The scene then stays blank.
#[derive(Debug, thiserror::Error)]
pub enum MountError {
	/// No global `window` (not running in a browser).
	#[error("no browser window")]
	NoWindow,
	/// The window has no document.
	#[error("no document on window")]
	NoDocument,
	/// The canvas refused a 2D context.
	#[error("2d canvas context unavailable")]
	NoContext,
}

/// Bundles scene state with its visual theme.
struct SceneContext {
	state: SceneState,
	theme: Theme,
}

/// Browser resources that must be released on unmount.
#[derive(Default)]
struct LoopHandles {
	animate: RefCell<Option<Closure<dyn FnMut()>>>,
	resize: RefCell<Option<Closure<dyn FnMut()>>>,
	frame: Cell<Option<i32>>,
}

impl LoopHandles {
	fn schedule(&self, window: &Window) {
		if let Some(ref cb) = *self.animate.borrow() {
			self.frame.set(
				window
					.request_animation_frame(cb.as_ref().unchecked_ref())
					.ok(),
			);
		}
	}

	fn teardown(&self) {
		if let Some(window) = web_sys::window() {
			if let Some(id) = self.frame.take() {
				let _ = window.cancel_animation_frame(id);
			}
			if let Some(ref cb) = *self.resize.borrow() {
				let _ =
					window.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}
		self.animate.borrow_mut().take();
		self.resize.borrow_mut().take();
		debug!("particle-portfolio: scene torn down");
	}
}

/// Size of the canvas's container, falling back to the viewport.
fn container_size(canvas: &HtmlCanvasElement, window: &Window) -> (f64, f64) {
	canvas
		.parent_element()
		.map(|p| (p.client_width() as f64, p.client_height() as f64))
		.filter(|(w, h)| *w > 0.0 && *h > 0.0)
		.or_else(|| {
			Some((
				window.inner_width().ok()?.as_f64()?,
				window.inner_height().ok()?.as_f64()?,
			))
		})
		.unwrap_or((0.0, 0.0))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, MountError> {
	canvas
		.get_context("2d")
		.ok()
		.flatten()
		.and_then(|ctx| ctx.dyn_into().ok())
		.ok_or(MountError::NoContext)
}

fn random_seed() -> u64 {
	(js_sys::Math::random() * u64::MAX as f64) as u64 ^ js_sys::Date::now() as u64
}

/// Pointer position relative to the canvas's top-left corner.
fn canvas_local(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

fn set_cursor(canvas: &HtmlCanvasElement, cursor: &str) {
	let _ = HtmlElement::style(canvas).set_property("cursor", cursor);
}

/// Inline style of the scene layer. Once expanded it fades out and lets
/// clicks through to whatever sits underneath.
fn layer_style(expanded: bool) -> &'static str {
	if expanded {
		"position: absolute; inset: 0; transition: opacity 1s; opacity: 0; pointer-events: none;"
	} else {
		"position: absolute; inset: 0; transition: opacity 1s; opacity: 1;"
	}
}

/// Horizontal offset of a zone caption, as a CSS percentage.
fn label_left(zone: Zone) -> &'static str {
	match zone {
		Zone::Computer => "10%",
		Zone::Folder => "40%",
		Zone::Map => "70%",
	}
}

/// Builds the scene and starts the frame loop and resize listener.
fn mount(
	canvas: HtmlCanvasElement,
	context: &Rc<RefCell<Option<SceneContext>>>,
	handles: &Rc<LoopHandles>,
	config: SceneConfig,
	theme: Theme,
	expanded: bool,
) -> Result<(), MountError> {
	let window = web_sys::window().ok_or(MountError::NoWindow)?;
	let document = window.document().ok_or(MountError::NoDocument)?;
	let ctx = context_2d(&canvas)?;

	let (w, h) = container_size(&canvas, &window);
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);

	let mut state = SceneState::new(
		w.floor(),
		h.floor(),
		config,
		theme.palette.clone(),
		Box::new(CanvasGlyphRaster::new(document)),
		SmallRng::seed_from_u64(random_seed()),
	);
	state.set_expanded(expanded);
	info!(
		"particle-portfolio: scene mounted with {} particles",
		state.store.len()
	);
	*context.borrow_mut() = Some(SceneContext { state, theme });

	let (context_resize, canvas_resize) = (context.clone(), canvas.clone());
	*handles.resize.borrow_mut() = Some(Closure::new(move || {
		let Some(win) = web_sys::window() else {
			return;
		};
		let (nw, nh) = container_size(&canvas_resize, &win);
		canvas_resize.set_width(nw as u32);
		canvas_resize.set_height(nh as u32);
		if let Some(ref mut c) = *context_resize.borrow_mut() {
			c.state.resize(nw.floor(), nh.floor());
		}
	}));
	if let Some(ref cb) = *handles.resize.borrow() {
		let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
	}

	let (context_anim, handles_anim) = (context.clone(), handles.clone());
	let mut surface = ctx;
	*handles.animate.borrow_mut() = Some(Closure::new(move || {
		if let Some(ref mut c) = *context_anim.borrow_mut() {
			c.state.tick();
			render::render(&c.state, &mut surface, &c.theme);
		}
		if let Some(win) = web_sys::window() {
			handles_anim.schedule(&win);
		}
	}));
	handles.schedule(&window);
	Ok(())
}

/// Renders the interactive particle scene.
///
/// Hovering a third of the canvas focuses the computer, folder or globe;
/// clicking commits to it. `on_interact` fires once per commit, before the
/// particles disperse; the host is expected to switch views after a short
/// delay. `title` overrides the name spelled out in particles. Setting
/// `expanded` also forces dispersal. A dispersed scene never
/// reassembles: mount a fresh one to return.
#[component]
pub fn ParticleScene(
	#[prop(into)] on_interact: Callback<Zone>,
	#[prop(into)] expanded: Signal<bool>,
	#[prop(optional, into)] title: Option<String>,
	#[prop(default = SceneConfig::default())] config: SceneConfig,
	#[prop(default = Theme::default())] theme: Theme,
) -> impl IntoView {
	let mut config = config;
	if let Some(title) = title {
		config.sampler.title = title;
	}
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<SceneContext>>> = Rc::new(RefCell::new(None));
	let handles = Rc::new(LoopHandles::default());
	let (context_init, handles_init) = (context.clone(), handles.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if context_init.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		if let Err(e) = mount(
			canvas,
			&context_init,
			&handles_init,
			config.clone(),
			theme.clone(),
			expanded.get_untracked(),
		) {
			warn!("particle-portfolio: scene disabled: {}", e);
		}
	});

	let context_exp = context.clone();
	Effect::new(move |_| {
		let expanded = expanded.get();
		if let Ok(mut slot) = context_exp.try_borrow_mut() {
			if let Some(ref mut c) = *slot {
				c.state.set_expanded(expanded);
			}
		}
	});

	let handles_cleanup = SendWrapper::new(handles);
	on_cleanup(move || handles_cleanup.teardown());

	let context_mm = context.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (x, y) = canvas_local(&canvas, &ev);

		if let Some(ref mut c) = *context_mm.borrow_mut() {
			let cursor = match c.state.pointer_moved(x, y) {
				Some(_) => "pointer",
				None => "default",
			};
			set_cursor(&canvas, cursor);
		}
	};

	let context_ml = context.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_ml.borrow_mut() {
			c.state.pointer_left();
		}
	};

	let context_click = context;
	let on_click = move |_: MouseEvent| {
		let zone = context_click
			.borrow()
			.as_ref()
			.and_then(|c| c.state.pending_commit());
		let Some(zone) = zone else {
			return;
		};
		debug!("particle-portfolio: committed to {:?}", zone);
		on_interact.run(zone);
		if let Some(ref mut c) = *context_click.borrow_mut() {
			c.state.disperse();
		}
		if let Some(canvas) = canvas_ref.get() {
			let canvas: HtmlCanvasElement = canvas.into();
			set_cursor(&canvas, "default");
		}
	};

	view! {
		<div
			class="particle-scene"
			class:expanded=move || expanded.get()
			on:mousemove=on_mousemove
			on:mouseleave=on_mouseleave
			on:click=on_click
			style=move || layer_style(expanded.get())
		>
			<canvas node_ref=canvas_ref class="particle-scene-canvas" style="display: block;" />
			{Zone::ALL
				.into_iter()
				.map(|zone| {
					let style = format!(
						"position: absolute; top: 80%; left: {}; width: 20%; text-align: center; pointer-events: none;",
						label_left(zone),
					);
					view! { <div class="particle-scene-label" style=style>{zone.label()}</div> }
				})
				.collect_view()}
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn expanded_layer_is_hidden_and_click_through() {
		let style = layer_style(true);
		assert!(style.contains("opacity: 0"));
		assert!(style.contains("pointer-events: none"));
	}

	#[test]
	fn interactive_layer_takes_clicks() {
		let style = layer_style(false);
		assert!(style.contains("opacity: 1"));
		assert!(!style.contains("pointer-events"));
	}

	#[test]
	fn captions_sit_under_their_bands() {
		assert_eq!(label_left(Zone::Computer), "10%");
		assert_eq!(Zone::Folder.label(), "PROJECT SHOWCASE");
		assert_eq!(Zone::Map.label(), "LIFE TIMELINE");
	}
}
