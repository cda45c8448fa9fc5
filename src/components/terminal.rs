//! Content views shown after the particle scene disperses.
//!
//! Deliberately plain: headings and lists straight from the content records.

use leptos::prelude::*;

use super::particle_field::Zone;
use crate::content::Content;

/// Which view the terminal shows. `Boot` means the particle scene is up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewState {
	/// The particle scene; no panel.
	#[default]
	Boot,
	/// Resume summary and skills.
	Desktop,
	/// Degrees.
	Education,
	/// Internships and jobs.
	Work,
	/// Timeline, reached from the globe.
	Map,
	/// Project directory.
	Projects,
	/// Volunteering and courses.
	Other,
}

impl From<Zone> for ViewState {
	fn from(zone: Zone) -> Self {
		match zone {
			Zone::Computer => ViewState::Desktop,
			Zone::Map => ViewState::Map,
			Zone::Folder => ViewState::Projects,
		}
	}
}

impl ViewState {
	/// Panel heading for this view.
	pub fn heading(self) -> &'static str {
		match self {
			ViewState::Boot => "BOOTING",
			ViewState::Desktop => "RESUME & SKILLS",
			ViewState::Education => "EDUCATION",
			ViewState::Work => "EXPERIENCE",
			ViewState::Map => "LIFE TIMELINE",
			ViewState::Projects => "PROJECT DIRECTORY",
			ViewState::Other => "VOLUNTEERING & COURSES",
		}
	}
}

fn body(view: ViewState, content: &Content) -> AnyView {
	let resume = &content.resume;
	match view {
		ViewState::Boot => ().into_any(),
		ViewState::Desktop => view! {
			<p class="terminal-name">{resume.name.clone()}</p>
			<p>{format!("{} | {}", resume.contact.email, resume.contact.phone)}</p>
			<ul>
				{resume.skills.technical.iter().map(|s| view! { <li>{s.clone()}</li> }).collect_view()}
			</ul>
		}
		.into_any(),
		ViewState::Education | ViewState::Map => view! {
			<ul>
				{resume
					.education
					.iter()
					.map(|e| view! { <li>{format!("{} - {} ({})", e.period, e.degree, e.institution)}</li> })
					.collect_view()}
			</ul>
		}
		.into_any(),
		ViewState::Work => view! {
			<ul>
				{resume
					.internships
					.iter()
					.chain(&resume.work_experience)
					.map(|x| view! { <li>{format!("{} @ {} ({})", x.role, x.company, x.period)}</li> })
					.collect_view()}
			</ul>
		}
		.into_any(),
		ViewState::Projects => view! {
			<ul>
				{content
					.projects
					.iter()
					.map(|p| view! {
						<li>
							<h3>{p.title.clone()}</h3>
							<p>{p.summary.clone()}</p>
							<p class="terminal-tech">{p.tech.join(" / ")}</p>
						</li>
					})
					.collect_view()}
			</ul>
		}
		.into_any(),
		ViewState::Other => view! {
			<ul>
				{resume
					.volunteering
					.iter()
					.map(|v| view! { <li>{format!("{} ({})", v.role, v.period)}</li> })
					.collect_view()}
			</ul>
		}
		.into_any(),
	}
}

/// Shows the selected view with navigation and a way back to the scene.
#[component]
pub fn TerminalPanel(
	#[prop(into)] view: Signal<ViewState>,
	#[prop(into)] set_view: Callback<ViewState>,
	#[prop(into)] on_return: Callback<()>,
	content: Content,
) -> impl IntoView {
	let nav = [
		ViewState::Desktop,
		ViewState::Education,
		ViewState::Work,
		ViewState::Projects,
		ViewState::Other,
	];

	view! {
		<section class="terminal-panel">
			<nav>
				{nav
					.into_iter()
					.map(|target| view! {
						<button on:click=move |_| set_view.run(target)>{target.heading()}</button>
					})
					.collect_view()}
			</nav>
			<h2>{move || view.get().heading()}</h2>
			{move || body(view.get(), &content)}
			<button class="terminal-return" on:click=move |_| on_return.run(())>"RETURN TO MAIN"</button>
		</section>
	}
}
