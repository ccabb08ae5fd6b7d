use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::case_studies::CaseStudy;
use crate::components::supply_chain::{GraphModel, SupplyChainGraph};

/// One sector's dashboard. Leaving the page drops the graph's selection state.
#[component]
pub fn CaseStudyPage(study: CaseStudy) -> impl IntoView {
	let config = study.config();
	let navigate = use_navigate();

	view! {
		<Title text=config.title />
		<div class="case-study">
			<header class="case-study-header">
				<button class="back" on:click=move |_| navigate("/", Default::default())>
					"← Use cases"
				</button>
				<h1>{config.title}</h1>
				<p class="subtitle">{config.description}</p>
			</header>
			<SupplyChainGraph model=GraphModel::new(config) />
		</div>
	}
}
