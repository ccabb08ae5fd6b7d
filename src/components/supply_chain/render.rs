//! Draw lists derived from a model and a selection state.

use log::debug;

use super::geometry::connection_path;
use super::highlight::Highlighter;
use super::model::GraphModel;
use super::state::SelectionState;
use super::types::{NodeId, SupplyNode};

/// Padding to the right of and below the furthest node box.
pub const SCENE_MARGIN: f64 = 40.0;
/// Box fill for nodes whose gradient tag does not resolve.
pub const FALLBACK_FILL: &str = "#2d8b89";
/// Ring around the hovered node.
pub const HOVER_RING: &str = "#5eead4";
/// Ring around the selected node; wins over hover.
pub const SELECTED_RING: &str = "#f59e0b";

const PALETTE: &[(&str, &str)] = &[
	("slate-400", "#94a3b8"),
	("slate-500", "#64748b"),
	("slate-600", "#475569"),
	("slate-700", "#334155"),
	("teal-400", "#2dd4bf"),
	("teal-500", "#14b8a6"),
	("teal-600", "#0d9488"),
	("teal-700", "#0f766e"),
	("teal-800", "#115e59"),
	("emerald-600", "#059669"),
];

/// One `<path>` to draw.
#[derive(Clone, Debug, PartialEq)]
pub struct ConnectorView {
	/// Source node id.
	pub from: NodeId,
	/// Target node id.
	pub to: NodeId,
	/// SVG path data.
	pub d: String,
	/// Stroke opacity.
	pub opacity: f64,
	/// Stroke width.
	pub stroke_width: f64,
}

/// One node box to draw.
#[derive(Clone, Debug)]
pub struct NodeView {
	/// Declared node.
	pub node: &'static SupplyNode,
	/// Group opacity.
	pub opacity: f64,
	/// Under the pointer.
	pub hovered: bool,
	/// Detail panel open for this node.
	pub selected: bool,
}

impl NodeView {
	/// Ring stroke color, if the node is selected or hovered.
	pub fn ring(&self) -> Option<&'static str> {
		if self.selected {
			Some(SELECTED_RING)
		} else if self.hovered {
			Some(HOVER_RING)
		} else {
			None
		}
	}

	/// SVG `fill` for the node box.
	pub fn fill(&self) -> String {
		node_fill(self.node.gradient)
	}
}

/// A `<linearGradient>` shared by every node with the same tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GradientDef {
	/// Element id referenced by `url(#id)`.
	pub id: String,
	/// Top-left stop color.
	pub from: &'static str,
	/// Bottom-right stop color.
	pub to: &'static str,
}

/// Unscaled drawing extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneBounds {
	/// Width including margin.
	pub width: f64,
	/// Height including margin.
	pub height: f64,
}

fn palette(color: &str) -> Option<&'static str> {
	PALETTE.iter().find(|(name, _)| *name == color).map(|&(_, hex)| hex)
}

/// Stop colors for a `from-<color> to-<color>` tag. A missing `to-` repeats the
/// `from-` color; a missing or unknown `from-` resolves to nothing.
pub fn gradient_stops(tag: &str) -> Option<(&'static str, &'static str)> {
	let mut from = None;
	let mut to = None;
	for word in tag.split_whitespace() {
		if let Some(color) = word.strip_prefix("from-") {
			from = palette(color);
		} else if let Some(color) = word.strip_prefix("to-") {
			to = palette(color);
		}
	}
	let from = from?;
	Some((from, to.unwrap_or(from)))
}

/// Element id for a gradient tag, e.g. `fill-from-teal-500-to-teal-700`.
pub fn gradient_id(tag: &str) -> String {
	let words: Vec<&str> = tag.split_whitespace().collect();
	format!("fill-{}", words.join("-"))
}

/// Box fill: a gradient reference when the tag resolves, a flat color otherwise.
pub fn node_fill(tag: &str) -> String {
	match gradient_stops(tag) {
		Some(_) => format!("url(#{})", gradient_id(tag)),
		None => FALLBACK_FILL.to_string(),
	}
}

/// One definition per distinct resolvable tag, in first-use order.
pub fn gradient_defs(model: &GraphModel) -> Vec<GradientDef> {
	let mut defs: Vec<GradientDef> = Vec::new();
	for node in model.nodes() {
		let Some((from, to)) = gradient_stops(node.gradient) else {
			continue;
		};
		let id = gradient_id(node.gradient);
		if defs.iter().all(|d| d.id != id) {
			defs.push(GradientDef { id, from, to });
		}
	}
	defs
}

/// Drawable connectors; connections with an unresolved endpoint are skipped.
pub fn connector_views(model: &GraphModel, state: &SelectionState) -> Vec<ConnectorView> {
	let h = Highlighter::new(model, state);
	model
		.connections()
		.iter()
		.filter_map(|c| {
			let d = connection_path(model, c.from, c.to);
			if d.is_empty() {
				debug!("skipping connector {} -> {}", c.from, c.to);
				return None;
			}
			Some(ConnectorView {
				from: c.from,
				to: c.to,
				d,
				opacity: h.connection_opacity(c.from, c.to),
				stroke_width: h.connection_stroke_width(c.from, c.to),
			})
		})
		.collect()
}

/// Node boxes in declaration order.
pub fn node_views(model: &GraphModel, state: &SelectionState) -> Vec<NodeView> {
	let h = Highlighter::new(model, state);
	model
		.nodes()
		.iter()
		.map(|node| NodeView {
			node,
			opacity: h.node_opacity(node.id),
			hovered: state.hovered_node == Some(node.id),
			selected: state.selected_node == Some(node.id),
		})
		.collect()
}

/// Unscaled extent of all node boxes plus a margin on the far sides.
pub fn scene_bounds(model: &GraphModel) -> SceneBounds {
	let fp = model.footprint();
	let (w, h) = model.nodes().iter().fold((0.0_f64, 0.0_f64), |(w, h), n| {
		(w.max(n.position.x + fp.width), h.max(n.position.y + fp.height))
	});
	SceneBounds {
		width: w + SCENE_MARGIN,
		height: h + SCENE_MARGIN,
	}
}

/// Label for the zoom readout, e.g. `"110%"`.
pub fn zoom_label(state: &SelectionState) -> String {
	format!("{}%", state.zoom_percent())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::case_studies::CaseStudy;
	use crate::components::supply_chain::state::Action;
	use crate::components::supply_chain::types::{
		CaseStudyConfig, Connection, Footprint, HighlightMode, Position,
	};

	static NODES: [SupplyNode; 1] = [SupplyNode {
		id: "farm",
		icon: "wheat",
		label: "Farm",
		gradient: "",
		description: "",
		position: Position::new(40.0, 200.0),
		kpis: &[],
		metrics: None,
	}];

	static DANGLING: CaseStudyConfig = CaseStudyConfig {
		title: "dangling",
		description: "",
		footprint: Footprint::square(48.0),
		nodes: &NODES,
		connections: &[Connection::new("farm", "nonexistent")],
		paths: &[],
		highlight: HighlightMode::Both,
		geometry: &[],
	};

	#[test]
	fn unresolved_connections_are_not_drawn() {
		let model = GraphModel::new(&DANGLING);
		let views = connector_views(&model, &SelectionState::default());
		assert!(views.is_empty());
		assert_eq!(node_views(&model, &SelectionState::default()).len(), 1);
	}

	#[test]
	fn one_connector_per_connection() {
		for study in CaseStudy::ALL {
			let model = GraphModel::new(study.config());
			let views = connector_views(&model, &SelectionState::default());
			assert_eq!(views.len(), model.connections().len());
		}
	}

	#[test]
	fn node_flags_follow_state() {
		let model = GraphModel::new(CaseStudy::Grain.config());
		let state = SelectionState::default()
			.reduce(Action::HoverNode(Some("ship")))
			.reduce(Action::SelectNode(Some("mills")))
			.reduce(Action::SelectPath(Some("export")));
		let views = node_views(&model, &state);
		let find = |id: &str| views.iter().find(|v| v.node.id == id);

		let ship = find("ship").map(|v| (v.hovered, v.selected, v.opacity));
		assert_eq!(ship, Some((true, false, 1.0)));
		let mills = find("mills").map(|v| (v.hovered, v.selected, v.opacity));
		assert_eq!(mills, Some((false, true, 0.4)));
	}

	#[test]
	fn bounds_cover_all_nodes() {
		let model = GraphModel::new(CaseStudy::Grain.config());
		let b = scene_bounds(&model);
		assert_eq!(b.width, 1480.0 + 48.0 + SCENE_MARGIN);
		assert_eq!(b.height, 400.0 + 48.0 + SCENE_MARGIN);
	}

	#[test]
	fn zoom_label_is_rounded_percent() {
		let state = SelectionState::default().reduce(Action::ZoomIn);
		assert_eq!(zoom_label(&state), "110%");
	}

	#[test]
	fn ring_marks_hover_and_selection() {
		let model = GraphModel::new(CaseStudy::Grain.config());
		let state = SelectionState::default()
			.reduce(Action::HoverNode(Some("farm")))
			.reduce(Action::SelectNode(Some("mills")));
		let views = node_views(&model, &state);
		let ring = |id: &str| views.iter().find(|v| v.node.id == id).and_then(NodeView::ring);
		assert_eq!(ring("farm"), Some(HOVER_RING));
		assert_eq!(ring("mills"), Some(SELECTED_RING));
		assert_eq!(ring("ship"), None);

		let both = SelectionState::default()
			.reduce(Action::HoverNode(Some("mills")))
			.reduce(Action::SelectNode(Some("mills")));
		let views = node_views(&model, &both);
		let mills = views.iter().find(|v| v.node.id == "mills").and_then(NodeView::ring);
		assert_eq!(mills, Some(SELECTED_RING));
	}

	#[test]
	fn gradient_tags_resolve_to_stops() {
		assert_eq!(
			gradient_stops("from-teal-500 to-emerald-600"),
			Some(("#14b8a6", "#059669"))
		);
		assert_eq!(gradient_stops("from-slate-400"), Some(("#94a3b8", "#94a3b8")));
		assert_eq!(gradient_stops("to-teal-700"), None);
		assert_eq!(gradient_stops("from-pink-500 to-teal-700"), None);
		assert_eq!(node_fill(""), FALLBACK_FILL);
		assert_eq!(
			node_fill("from-teal-500 to-teal-700"),
			"url(#fill-from-teal-500-to-teal-700)"
		);
	}

	#[test]
	fn every_shipped_node_has_a_visible_fill() {
		for study in CaseStudy::ALL {
			let model = GraphModel::new(study.config());
			let ids: Vec<String> = gradient_defs(&model).into_iter().map(|d| d.id).collect();
			for view in node_views(&model, &SelectionState::default()) {
				let fill = view.fill();
				let id = fill
					.strip_prefix("url(#")
					.and_then(|f| f.strip_suffix(')'));
				assert!(id.is_some_and(|id| ids.iter().any(|d| d == id)), "{fill}");
			}
		}
	}

	#[test]
	fn gradient_defs_are_deduplicated() {
		let model = GraphModel::new(CaseStudy::Grain.config());
		let defs = gradient_defs(&model);
		assert_eq!(defs.len(), 4);
		assert_eq!(defs[0].id, "fill-from-teal-500-to-teal-700");
		assert!(gradient_defs(&GraphModel::new(&DANGLING)).is_empty());
	}
}
