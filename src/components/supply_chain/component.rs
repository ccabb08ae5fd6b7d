use leptos::prelude::*;
use log::info;
use web_sys::WheelEvent;

use super::model::GraphModel;
use super::render::{connector_views, gradient_defs, node_views, scene_bounds, zoom_label};
use super::state::{Action, SelectionState};
use super::types::Trend;

const CONNECTOR_COLOR: &str = "#2d8b89";
const LABEL_COLOR: &str = "#1f2937";
const RING_GAP: f64 = 3.0;
const RING_OFFSET: &str = "-3";

/// Interactive SVG rendering of one case study.
#[component]
pub fn SupplyChainGraph(
	/// Case study to draw.
	model: GraphModel,
) -> impl IntoView {
	let config = model.config();
	info!("Mounting supply chain graph: {}", config.title);

	let (fw, fh) = (config.footprint.width, config.footprint.height);
	let (text_x, icon_y, label_y) = (fw / 2.0, fh / 2.0 + 4.0, fh + 14.0);
	let (ring_w, ring_h) = (fw + RING_GAP * 2.0, fh + RING_GAP * 2.0);
	let bounds = scene_bounds(&model);
	let defs = gradient_defs(&model)
		.into_iter()
		.map(|g| {
			view! {
				<linearGradient id=g.id x1="0" y1="0" x2="1" y2="1">
					<stop offset="0" stop-color=g.from />
					<stop offset="1" stop-color=g.to />
				</linearGradient>
			}
		})
		.collect_view();
	let show_paths = model.highlight_mode().uses_path() && !config.paths.is_empty();
	let model = StoredValue::new(model);
	let state = RwSignal::new(SelectionState::default());
	let dispatch = move |action: Action| state.update(|s| *s = s.reduce(action));

	let connectors = move || {
		let views = model.with_value(|m| state.with(|s| connector_views(m, s)));
		views
			.into_iter()
			.map(|c| {
				view! {
					<path
						class="connector"
						d=c.d
						fill="none"
						stroke=CONNECTOR_COLOR
						stroke-width=c.stroke_width.to_string()
						opacity=c.opacity.to_string()
					/>
				}
			})
			.collect_view()
	};

	let nodes = move || {
		let views = model.with_value(|m| state.with(|s| node_views(m, s)));
		views
			.into_iter()
			.map(|v| {
				let (id, pos) = (v.node.id, v.node.position);
				let ring = v.ring().map(|stroke| {
					view! {
						<rect
							class="node-ring"
							x=RING_OFFSET
							y=RING_OFFSET
							width=ring_w.to_string()
							height=ring_h.to_string()
							rx="13"
							fill="none"
							stroke=stroke
							stroke-width="2"
						/>
					}
				});
				let class = match (v.selected, v.hovered) {
					(true, _) => "node selected",
					(false, true) => "node hovered",
					_ => "node",
				};
				view! {
					<g
						class=class
						transform=format!("translate({} {})", pos.x, pos.y)
						opacity=v.opacity.to_string()
						on:mouseenter=move |_| dispatch(Action::HoverNode(Some(id)))
						on:mouseleave=move |_| dispatch(Action::HoverNode(None))
						on:click=move |_| dispatch(Action::SelectNode(Some(id)))
					>
						<title>{v.node.description}</title>
						{ring}
						<rect
							class="node-box"
							fill=v.fill()
							width=fw.to_string()
							height=fh.to_string()
							rx="10"
						/>
						<text
							class="node-icon"
							x=text_x.to_string()
							y=icon_y.to_string()
							text-anchor="middle"
							fill="#ffffff"
						>
							{v.node.icon}
						</text>
						<text
							class="node-label"
							x=text_x.to_string()
							y=label_y.to_string()
							text-anchor="middle"
							fill=LABEL_COLOR
						>
							{v.node.label}
						</text>
					</g>
				}
			})
			.collect_view()
	};

	let legend = config
		.paths
		.iter()
		.map(|p| {
			let name = p.name;
			let active = move || state.with(|s| s.selected_path == Some(name));
			view! {
				<button
					class="path-button"
					class:active=active
					aria-pressed=move || active().to_string()
					on:click=move |_| dispatch(Action::SelectPath(Some(name)))
				>
					{p.label}
				</button>
			}
		})
		.collect_view();

	let detail = move || {
		let id = state.with(|s| s.selected_node)?;
		let node = model.with_value(|m| m.node(id))?;
		let kpis = node
			.kpis
			.iter()
			.map(|k| {
				view! {
					<li>
						<span class="kpi-name">{k.name}</span>
						<span class="kpi-value">{k.value}</span>
						<span class="kpi-trend">{k.trend.map(Trend::glyph)}</span>
					</li>
				}
			})
			.collect_view();
		let metrics = node.metrics.map(|m| {
			view! {
				<dl class="node-metrics">
					<dt>"Throughput"</dt>
					<dd>{m.throughput}</dd>
					<dt>"Efficiency"</dt>
					<dd>{m.efficiency}</dd>
					<dt>"Quality"</dt>
					<dd>{m.quality}</dd>
					<dt>"Cost"</dt>
					<dd>{m.cost}</dd>
				</dl>
			}
		});
		Some(view! {
			<aside class="node-detail">
				<header>
					<h3>{node.label}</h3>
					<button class="close" on:click=move |_| dispatch(Action::SelectNode(None))>
						"×"
					</button>
				</header>
				<p>{node.description}</p>
				<ul class="node-kpis">{kpis}</ul>
				{metrics}
			</aside>
		})
	};

	// Ctrl+wheel steps the zoom; plain wheel keeps scrolling the page.
	let on_wheel = move |ev: WheelEvent| {
		if !ev.ctrl_key() {
			return;
		}
		ev.prevent_default();
		dispatch(if ev.delta_y() > 0.0 {
			Action::ZoomOut
		} else {
			Action::ZoomIn
		});
	};

	let zoom = move || state.with(|s| s.zoom());

	view! {
		<section class="supply-chain">
			<div class="graph-toolbar">
				{show_paths.then(|| view! { <div class="path-legend">{legend}</div> })}
				<div class="zoom-controls">
					<button on:click=move |_| dispatch(Action::ZoomOut)>"-"</button>
					<span class="zoom-percent">{move || state.with(zoom_label)}</span>
					<button on:click=move |_| dispatch(Action::ZoomIn)>"+"</button>
					<button on:click=move |_| dispatch(Action::ResetZoom)>"Reset"</button>
				</div>
			</div>
			<div class="graph-surface" on:wheel=on_wheel>
				<svg
					width=move || (bounds.width * zoom()).to_string()
					height=move || (bounds.height * zoom()).to_string()
					viewBox=format!("0 0 {} {}", bounds.width, bounds.height)
				>
					<defs>{defs}</defs>
					<g class="connectors">{connectors}</g>
					<g class="nodes">{nodes}</g>
				</svg>
			</div>
			{detail}
		</section>
	}
}
