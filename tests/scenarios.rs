use supply_chain_twin::case_studies::CaseStudy;
use supply_chain_twin::components::supply_chain::geometry::connection_path;
use supply_chain_twin::components::supply_chain::highlight::Highlighter;
use supply_chain_twin::components::supply_chain::{Action, GraphModel, SelectionState};

fn reduce_all(actions: &[Action]) -> SelectionState {
	actions
		.iter()
		.fold(SelectionState::default(), |s, &a| s.reduce(a))
}

#[test]
fn grain_export_path() {
	let model = GraphModel::new(CaseStudy::Grain.config());
	let state = reduce_all(&[Action::SelectPath(Some("export"))]);
	let h = Highlighter::new(&model, &state);

	assert_eq!(h.node_opacity("farm"), 1.0);
	assert_eq!(h.node_opacity("foreign"), 1.0);
	assert_eq!(h.node_opacity("mills"), 0.4);
	assert_eq!(h.connection_opacity("farm", "logistics"), 0.9);
	assert_eq!(h.connection_stroke_width("farm", "logistics"), 3.0);
	assert_eq!(h.connection_opacity("ship", "foreign"), 0.9);
	assert_eq!(h.connection_opacity("mills", "feed-mills"), 0.2);
	assert_eq!(h.connection_stroke_width("mills", "feed-mills"), 2.0);
}

#[test]
fn deselecting_export_restores_defaults() {
	let model = GraphModel::new(CaseStudy::Grain.config());
	let state = reduce_all(&[
		Action::SelectPath(Some("export")),
		Action::SelectPath(Some("export")),
	]);
	assert_eq!(state.selected_path, None);

	let h = Highlighter::new(&model, &state);
	for c in model.connections() {
		assert_eq!(h.connection_opacity(c.from, c.to), 0.5);
		assert_eq!(h.connection_stroke_width(c.from, c.to), 2.0);
	}
	for n in model.nodes() {
		assert_eq!(h.node_opacity(n.id), 1.0);
	}
}

#[test]
fn unresolvable_node_renders_empty_path() {
	let model = GraphModel::new(CaseStudy::Grain.config());
	assert_eq!(connection_path(&model, "farm", "nonexistent"), "");
}

#[test]
fn fruits_node_level_highlight() {
	let model = GraphModel::new(CaseStudy::Fruits.config());
	let state = reduce_all(&[Action::SelectNode(Some("processing"))]);
	let h = Highlighter::new(&model, &state);

	assert_eq!(h.connection_opacity("bulk-transport", "processing"), 0.9);
	assert_eq!(h.connection_opacity("wholesale", "logistics"), 0.2);
}

#[test]
fn fish_keeps_node_and_path_selection_together() {
	let model = GraphModel::new(CaseStudy::Fish.config());
	let state = reduce_all(&[
		Action::SelectPath(Some("domestic")),
		Action::SelectNode(Some("bigh")),
	]);
	assert_eq!(state.selected_node, Some("bigh"));

	let h = Highlighter::new(&model, &state);
	assert_eq!(h.connection_opacity("aquaculture", "primary-processing"), 0.9);
	assert_eq!(h.connection_opacity("secondary-processing", "bigh"), 0.2);
	assert_eq!(h.node_opacity("bigh"), 0.4);
	assert_eq!(h.node_opacity("retail"), 1.0);
}

#[test]
fn zoom_walk_stays_clamped() {
	let state = reduce_all(&[Action::ZoomIn; 10]);
	assert_eq!(state.zoom(), 1.5);
	assert_eq!(state.zoom_percent(), 150);

	let state = reduce_all(&[Action::ZoomOut; 10]);
	assert_eq!(state.zoom(), 0.5);

	let state = reduce_all(&[Action::ZoomOut, Action::ZoomOut, Action::ZoomIn]);
	assert_eq!(state.zoom_percent(), 90);
}
