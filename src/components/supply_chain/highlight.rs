//! Emphasis rules: which connections and nodes stand out for a selection.

use super::model::GraphModel;
use super::state::SelectionState;
use super::types::NodeId;

/// Connection opacity when emphasized.
pub const EMPHASIZED_OPACITY: f64 = 0.9;
/// Connection opacity when another connection is emphasized.
pub const DIMMED_OPACITY: f64 = 0.2;
/// Connection opacity with nothing selected.
pub const NEUTRAL_OPACITY: f64 = 0.5;
/// Stroke width of an emphasized connection.
pub const EMPHASIZED_STROKE: f64 = 3.0;
/// Stroke width otherwise.
pub const NEUTRAL_STROKE: f64 = 2.0;
/// Opacity of nodes off the selected path.
pub const NODE_OFF_PATH_OPACITY: f64 = 0.4;

/// Emphasis decisions for one render pass.
#[derive(Clone, Copy)]
pub struct Highlighter<'a> {
	model: &'a GraphModel,
	state: &'a SelectionState,
}

impl<'a> Highlighter<'a> {
	/// Highlighter for one model and state snapshot.
	pub fn new(model: &'a GraphModel, state: &'a SelectionState) -> Self {
		Self { model, state }
	}

	fn selected_steps(&self) -> Option<&'static [NodeId]> {
		let name = self.state.selected_path?;
		Some(self.model.path(name).map_or(&[] as &[NodeId], |p| p.steps))
	}

	/// False when no path is selected.
	pub fn is_node_on_selected_path(&self, id: &str) -> bool {
		self.selected_steps()
			.is_some_and(|steps| steps.iter().any(|&s| s == id))
	}

	/// Adjacent in the path sequence, in either direction.
	pub fn is_connection_on_selected_path(&self, from: &str, to: &str) -> bool {
		let Some(steps) = self.selected_steps() else {
			return false;
		};
		let (Some(i), Some(j)) = (
			steps.iter().position(|&s| s == from),
			steps.iter().position(|&s| s == to),
		) else {
			return false;
		};
		i.abs_diff(j) == 1
	}

	/// Either endpoint is the selected node.
	pub fn is_connection_adjacent_to_selected_node(&self, from: &str, to: &str) -> bool {
		self.state
			.selected_node
			.is_some_and(|n| n == from || n == to)
	}

	fn is_emphasized(&self, from: &str, to: &str) -> bool {
		let mode = self.model.highlight_mode();
		(mode.uses_path() && self.is_connection_on_selected_path(from, to))
			|| (mode.uses_node() && self.is_connection_adjacent_to_selected_node(from, to))
	}

	fn has_active_selection(&self) -> bool {
		let mode = self.model.highlight_mode();
		(mode.uses_path() && self.state.selected_path.is_some())
			|| (mode.uses_node() && self.state.selected_node.is_some())
	}

	/// Emphasized, dimmed behind another selection, or neutral.
	pub fn connection_opacity(&self, from: &str, to: &str) -> f64 {
		if self.is_emphasized(from, to) {
			EMPHASIZED_OPACITY
		} else if self.has_active_selection() {
			DIMMED_OPACITY
		} else {
			NEUTRAL_OPACITY
		}
	}

	/// Thicker only when emphasized.
	pub fn connection_stroke_width(&self, from: &str, to: &str) -> f64 {
		if self.is_emphasized(from, to) {
			EMPHASIZED_STROKE
		} else {
			NEUTRAL_STROKE
		}
	}

	/// Only path selection dims nodes.
	pub fn node_opacity(&self, id: &str) -> f64 {
		let mode = self.model.highlight_mode();
		if !mode.uses_path() || self.state.selected_path.is_none() {
			return 1.0;
		}
		if self.is_node_on_selected_path(id) {
			1.0
		} else {
			NODE_OFF_PATH_OPACITY
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::case_studies::CaseStudy;
	use crate::components::supply_chain::state::Action;
	use crate::components::supply_chain::types::{
		CaseStudyConfig, Connection, Footprint, HighlightMode, Position, ScenarioPath, SupplyNode,
	};

	const fn node(id: NodeId, x: f64) -> SupplyNode {
		SupplyNode {
			id,
			icon: "box",
			label: id,
			gradient: "",
			description: "",
			position: Position::new(x, 0.0),
			kpis: &[],
			metrics: None,
		}
	}

	static CHAIN: CaseStudyConfig = CaseStudyConfig {
		title: "chain",
		description: "",
		footprint: Footprint::square(48.0),
		nodes: &[node("a", 0.0), node("b", 100.0), node("c", 200.0), node("d", 300.0)],
		connections: &[
			Connection::new("a", "b"),
			Connection::new("b", "c"),
			Connection::new("c", "d"),
		],
		paths: &[ScenarioPath {
			name: "ab",
			label: "A to B",
			steps: &["a", "b"],
		}],
		highlight: HighlightMode::Both,
		geometry: &[],
	};

	fn chain_opacities(s: &SelectionState) -> [f64; 3] {
		let model = GraphModel::new(&CHAIN);
		let h = Highlighter::new(&model, s);
		[
			h.connection_opacity("a", "b"),
			h.connection_opacity("b", "c"),
			h.connection_opacity("c", "d"),
		]
	}

	fn state(actions: &[Action]) -> SelectionState {
		actions
			.iter()
			.fold(SelectionState::default(), |s, &a| s.reduce(a))
	}

	#[test]
	fn no_selection_is_neutral_everywhere() {
		for study in CaseStudy::ALL {
			let model = GraphModel::new(study.config());
			let s = SelectionState::default();
			let h = Highlighter::new(&model, &s);
			for c in model.connections() {
				assert_eq!(h.connection_opacity(c.from, c.to), NEUTRAL_OPACITY);
				assert_eq!(h.connection_stroke_width(c.from, c.to), NEUTRAL_STROKE);
			}
			for n in model.nodes() {
				assert_eq!(h.node_opacity(n.id), 1.0);
			}
		}
	}

	#[test]
	fn selected_path_emphasizes_its_edges_only() {
		let model = GraphModel::new(CaseStudy::Grain.config());
		for path in model.paths() {
			let s = state(&[Action::SelectPath(Some(path.name))]);
			let h = Highlighter::new(&model, &s);
			for pair in path.steps.windows(2) {
				assert_eq!(h.connection_opacity(pair[0], pair[1]), EMPHASIZED_OPACITY);
				assert_eq!(h.connection_stroke_width(pair[0], pair[1]), EMPHASIZED_STROKE);
			}
			for c in model.connections() {
				let on_path = path
					.steps
					.windows(2)
					.any(|w| (w[0] == c.from && w[1] == c.to) || (w[0] == c.to && w[1] == c.from));
				if !on_path {
					assert_eq!(h.connection_opacity(c.from, c.to), DIMMED_OPACITY);
				}
			}
		}
	}

	#[test]
	fn adjacency_ignores_direction() {
		let model = GraphModel::new(CaseStudy::Grain.config());
		let s = state(&[Action::SelectPath(Some("export"))]);
		let h = Highlighter::new(&model, &s);
		assert!(h.is_connection_on_selected_path("logistics", "farm"));
		assert!(!h.is_connection_on_selected_path("farm", "elevator-sea"));
		assert!(!h.is_connection_on_selected_path("farm", "nonexistent"));
	}

	#[test]
	fn unknown_path_name_matches_nothing() {
		let model = GraphModel::new(CaseStudy::Fish.config());
		let s = state(&[Action::SelectPath(Some("airfreight"))]);
		let h = Highlighter::new(&model, &s);
		assert!(!h.is_node_on_selected_path("fingerlings"));
		assert_eq!(h.node_opacity("fingerlings"), NODE_OFF_PATH_OPACITY);
		assert_eq!(h.connection_opacity("fingerlings", "transport1"), DIMMED_OPACITY);
	}

	#[test]
	fn node_mode_ignores_path_selection() {
		let model = GraphModel::new(CaseStudy::Fruits.config());
		let s = state(&[Action::SelectPath(Some("export"))]);
		let h = Highlighter::new(&model, &s);
		assert_eq!(h.connection_opacity("farm", "bulk-transport"), NEUTRAL_OPACITY);
		assert_eq!(h.node_opacity("farm"), 1.0);
	}

	#[test]
	fn path_mode_ignores_node_selection() {
		let model = GraphModel::new(CaseStudy::Fish.config());
		let s = state(&[Action::SelectNode(Some("retail"))]);
		let h = Highlighter::new(&model, &s);
		assert_eq!(h.connection_opacity("transport2", "retail"), NEUTRAL_OPACITY);
		assert!(h.is_connection_adjacent_to_selected_node("transport2", "retail"));
	}

	#[test]
	fn node_selection_emphasizes_incident_edges() {
		let model = GraphModel::new(CaseStudy::Fruits.config());
		let s = state(&[Action::SelectNode(Some("processing"))]);
		let h = Highlighter::new(&model, &s);
		assert_eq!(h.connection_opacity("bulk-transport", "processing"), EMPHASIZED_OPACITY);
		assert_eq!(h.connection_opacity("processing", "packaging"), EMPHASIZED_OPACITY);
		assert_eq!(h.connection_stroke_width("processing", "packaging"), EMPHASIZED_STROKE);
		assert_eq!(h.connection_opacity("wholesale", "logistics"), DIMMED_OPACITY);
		assert_eq!(h.connection_stroke_width("wholesale", "logistics"), NEUTRAL_STROKE);
	}

	#[test]
	fn both_mode_path_only() {
		let s = state(&[Action::SelectPath(Some("ab"))]);
		assert_eq!(chain_opacities(&s), [EMPHASIZED_OPACITY, DIMMED_OPACITY, DIMMED_OPACITY]);
		let model = GraphModel::new(&CHAIN);
		let h = Highlighter::new(&model, &s);
		assert_eq!(h.node_opacity("a"), 1.0);
		assert_eq!(h.node_opacity("c"), NODE_OFF_PATH_OPACITY);
	}

	#[test]
	fn both_mode_node_only() {
		let s = state(&[Action::SelectNode(Some("d"))]);
		assert_eq!(chain_opacities(&s), [DIMMED_OPACITY, DIMMED_OPACITY, EMPHASIZED_OPACITY]);
		let model = GraphModel::new(&CHAIN);
		let h = Highlighter::new(&model, &s);
		assert_eq!(h.connection_stroke_width("c", "d"), EMPHASIZED_STROKE);
		for id in ["a", "b", "c", "d"] {
			assert_eq!(h.node_opacity(id), 1.0);
		}
	}

	#[test]
	fn both_mode_combines_path_and_node() {
		let s = state(&[Action::SelectPath(Some("ab")), Action::SelectNode(Some("d"))]);
		assert_eq!(chain_opacities(&s), [EMPHASIZED_OPACITY, DIMMED_OPACITY, EMPHASIZED_OPACITY]);
		let model = GraphModel::new(&CHAIN);
		let h = Highlighter::new(&model, &s);
		assert_eq!(h.connection_stroke_width("b", "c"), NEUTRAL_STROKE);
		assert_eq!(h.node_opacity("b"), 1.0);
		assert_eq!(h.node_opacity("c"), NODE_OFF_PATH_OPACITY);
		assert_eq!(h.node_opacity("d"), NODE_OFF_PATH_OPACITY);
	}
}
