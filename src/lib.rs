//! Leptos client-side dashboard for supply-chain digital twin case studies.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Modules
pub mod case_studies;
pub mod components;
mod pages;

// Top-Level pages
use crate::case_studies::CaseStudy;
use crate::pages::case_study::CaseStudyPage;
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// Routes: use-case selection at `/`, one dashboard per case study.
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="light" />

		<Title text="Supply Chain Digital Twins" />

		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
				<Route path=path!("/grain") view=|| view! { <CaseStudyPage study=CaseStudy::Grain /> } />
				<Route path=path!("/fruits") view=|| view! { <CaseStudyPage study=CaseStudy::Fruits /> } />
				<Route path=path!("/fish") view=|| view! { <CaseStudyPage study=CaseStudy::Fish /> } />
			</Routes>
		</Router>
	}
}
