//! particle-portfolio: an interactive particle-field landing page.
//!
//! This crate provides a WASM landing scene where thousands of particles
//! assemble into a retro computer, a folder, a globe and the owner's name.
//! Hovering a silhouette focuses it; clicking disperses the field and opens
//! the matching content view.

use std::time::Duration;

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod content;

pub use components::particle_field::{ParticleScene, SceneConfig, SceneState, Theme, Zone};
pub use components::terminal::{TerminalPanel, ViewState};
pub use content::Content;

/// Delay before the view resets after returning to the scene.
const RETURN_DELAY: Duration = Duration::from_millis(1000);

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("particle-portfolio: logging initialized");
}

/// Load portfolio content from a script element with id="portfolio-data".
/// Expected format: JSON with { resume: {...}, projects: [...] }
fn load_content() -> Option<Content> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("portfolio-data")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match Content::from_json(&json_text) {
		Ok(content) => {
			info!(
				"particle-portfolio: loaded {} projects for {:?}",
				content.projects.len(),
				content.resume.name
			);
			Some(content)
		}
		Err(e) => {
			warn!("particle-portfolio: failed to parse portfolio data: {}", e);
			None
		}
	}
}

/// Main application component.
/// Shows the particle scene until a zone is chosen, then the content terminal.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let content = load_content().unwrap_or_default();
	let config = SceneConfig::default();
	let switch_delay = Duration::from_millis(config.disperse.view_switch_delay_ms);
	let title = content.title().map(str::to_owned);

	let expanded = RwSignal::new(false);
	let view_state = RwSignal::new(ViewState::Boot);
	// Bumped to mount a fresh scene on return.
	let scene_epoch = RwSignal::new(0u32);

	let on_interact = Callback::new(move |zone: Zone| {
		expanded.set(true);
		set_timeout(move || view_state.set(ViewState::from(zone)), switch_delay);
	});

	let on_return = Callback::new(move |_: ()| {
		expanded.set(false);
		scene_epoch.update(|n| *n += 1);
		set_timeout(move || view_state.set(ViewState::Boot), RETURN_DELAY);
	});

	let set_view = Callback::new(move |v: ViewState| view_state.set(v));

	let scene = move || {
		scene_epoch.track();
		view! {
			<ParticleScene
				on_interact=on_interact
				expanded=expanded
				title=title.clone().unwrap_or_else(|| config.sampler.title.clone())
				config=config.clone()
			/>
		}
	};

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Portfolio" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="fullscreen-scene">
			{scene}
			<Show when=move || view_state.get() != ViewState::Boot>
				<TerminalPanel
					view=view_state
					set_view=set_view
					on_return=on_return
					content=content.clone()
				/>
			</Show>
			<Show when=move || !expanded.get()>
				<div class="scene-overlay">
					<h2 class="scene-heading">"INTERACTIVE PORTFOLIO TERMINAL"</h2>
					<p class="subtitle">"Hover a shape to focus it. Click to open."</p>
				</div>
			</Show>
		</div>
	}
}
