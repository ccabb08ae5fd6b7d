use leptos::prelude::*;
use leptos_router::components::A;

use crate::case_studies::{CaseStudy, UPCOMING};

/// Use-case selection: one card per sector. Sectors without a dashboard are
/// listed but not linked.
#[component]
pub fn Home() -> impl IntoView {
	let cards = CaseStudy::ALL
		.iter()
		.map(|&study| {
			let config = study.config();
			view! {
				<li class="use-case">
					<A href=study.route()>
						<span
							class=format!("icon icon-{}", study.icon())
							style=format!("color: {}", study.icon_color())
						></span>
						<h2>{config.title}</h2>
						<p>{config.description}</p>
					</A>
				</li>
			}
		})
		.collect_view();

	let upcoming = UPCOMING
		.iter()
		.map(|sector| {
			view! {
				<li class="use-case disabled" aria-disabled="true">
					<div class="card">
						<span
							class=format!("icon icon-{}", sector.icon)
							style=format!("color: {}", sector.icon_color)
						></span>
						<h2>{sector.title}</h2>
						<p class="coming-soon">"Coming soon"</p>
					</div>
				</li>
			}
		})
		.collect_view();

	view! {
		<div class="use-case-selection">
			<h1>"Supply Chain Digital Twins"</h1>
			<p class="subtitle">"Pick a case study to explore its supply chain."</p>
			<ul class="use-cases">{cards}{upcoming}</ul>
		</div>
	}
}
