//! Case-study lookup and authoring validation.

use std::collections::{HashMap, HashSet};

use log::warn;

use super::error::ModelError;
use super::geometry::GeometryOverride;
use super::types::{
	CaseStudyConfig, Connection, Footprint, HighlightMode, NodeId, ScenarioPath, SupplyNode,
};

/// Read-only view over one case study's nodes, connections and paths.
#[derive(Clone, Debug)]
pub struct GraphModel {
	config: &'static CaseStudyConfig,
	id_to_idx: HashMap<NodeId, usize>,
}

impl GraphModel {
	/// Indexes `config` and logs any authoring defects.
	pub fn new(config: &'static CaseStudyConfig) -> Self {
		let mut id_to_idx = HashMap::with_capacity(config.nodes.len());
		for (i, node) in config.nodes.iter().enumerate() {
			// first declaration wins
			id_to_idx.entry(node.id).or_insert(i);
		}

		let model = Self { config, id_to_idx };
		for defect in model.authoring_defects() {
			warn!("{}: {}", config.title, defect);
		}
		model
	}

	/// The backing declaration.
	pub fn config(&self) -> &'static CaseStudyConfig {
		self.config
	}

	/// Absent ids are an expected case: callers skip drawing.
	pub fn node(&self, id: &str) -> Option<&'static SupplyNode> {
		self.id_to_idx.get(id).map(|&i| &self.config.nodes[i])
	}

	/// Nodes in declaration order, duplicates included.
	pub fn nodes(&self) -> &'static [SupplyNode] {
		self.config.nodes
	}

	/// Declared connections.
	pub fn connections(&self) -> &'static [Connection] {
		self.config.connections
	}

	/// Declared scenario paths.
	pub fn paths(&self) -> &'static [ScenarioPath] {
		self.config.paths
	}

	/// Path declared under `name`.
	pub fn path(&self, name: &str) -> Option<&'static ScenarioPath> {
		self.config.paths.iter().find(|p| p.name == name)
	}

	/// Node box size.
	pub fn footprint(&self) -> Footprint {
		self.config.footprint
	}

	/// Selection axes in use.
	pub fn highlight_mode(&self) -> HighlightMode {
		self.config.highlight
	}

	/// Routing overrides.
	pub fn geometry_overrides(&self) -> &'static [GeometryOverride] {
		self.config.geometry
	}

	fn has_connection(&self, from: &str, to: &str) -> bool {
		self.config
			.connections
			.iter()
			.any(|c| c.from == from && c.to == to)
	}

	/// Every declaration problem in the case study, in declaration order.
	pub fn authoring_defects(&self) -> Vec<ModelError> {
		let mut defects = Vec::new();

		let mut seen = HashSet::new();
		for node in self.config.nodes {
			if !seen.insert(node.id) {
				defects.push(ModelError::DuplicateNode { id: node.id });
			}
		}

		for conn in self.config.connections {
			for end in [conn.from, conn.to] {
				if self.node(end).is_none() {
					defects.push(ModelError::DanglingConnection {
						from: conn.from,
						to: conn.to,
						missing: end,
					});
				}
			}
		}

		for path in self.config.paths {
			for &id in path.steps {
				if self.node(id).is_none() {
					defects.push(ModelError::UnknownPathNode {
						path: path.name,
						id,
					});
				}
			}
			for pair in path.steps.windows(2) {
				if !self.has_connection(pair[0], pair[1]) {
					defects.push(ModelError::BrokenPathStep {
						path: path.name,
						from: pair[0],
						to: pair[1],
					});
				}
			}
		}

		for o in self.config.geometry {
			if !self.has_connection(o.from, o.to) {
				defects.push(ModelError::DanglingGeometryOverride {
					from: o.from,
					to: o.to,
				});
			}
		}

		defects
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::supply_chain::geometry::GeometryStrategy;
	use crate::components::supply_chain::types::Position;

	const fn node(id: NodeId, x: f64, y: f64) -> SupplyNode {
		SupplyNode {
			id,
			icon: "box",
			label: id,
			gradient: "",
			description: "",
			position: Position::new(x, y),
			kpis: &[],
			metrics: None,
		}
	}

	static BROKEN: CaseStudyConfig = CaseStudyConfig {
		title: "broken",
		description: "",
		footprint: Footprint::square(48.0),
		nodes: &[node("a", 0.0, 0.0), node("b", 100.0, 0.0), node("a", 200.0, 0.0)],
		connections: &[Connection::new("a", "b"), Connection::new("b", "ghost")],
		paths: &[ScenarioPath {
			name: "main",
			label: "Main",
			steps: &["b", "a", "nowhere"],
		}],
		highlight: HighlightMode::Path,
		geometry: &[GeometryOverride::new("b", "a", GeometryStrategy::Straight)],
	};

	#[test]
	fn lookup_returns_first_declaration() {
		let model = GraphModel::new(&BROKEN);
		let a = model.node("a").map(|n| n.position.x);
		assert_eq!(a, Some(0.0));
		assert!(model.node("ghost").is_none());
	}

	#[test]
	fn reports_every_authoring_defect() {
		let model = GraphModel::new(&BROKEN);
		let defects = model.authoring_defects();
		assert_eq!(
			defects,
			vec![
				ModelError::DuplicateNode { id: "a" },
				ModelError::DanglingConnection {
					from: "b",
					to: "ghost",
					missing: "ghost",
				},
				ModelError::UnknownPathNode {
					path: "main",
					id: "nowhere",
				},
				ModelError::BrokenPathStep {
					path: "main",
					from: "b",
					to: "a",
				},
				ModelError::BrokenPathStep {
					path: "main",
					from: "a",
					to: "nowhere",
				},
				ModelError::DanglingGeometryOverride { from: "b", to: "a" },
			]
		);
	}

	#[test]
	fn shipped_case_studies_are_well_formed() {
		for study in crate::case_studies::CaseStudy::ALL {
			let model = GraphModel::new(study.config());
			assert_eq!(model.authoring_defects(), vec![], "{:?}", study);
		}
	}

	#[test]
	fn path_lookup_by_name() {
		let model = GraphModel::new(crate::case_studies::CaseStudy::Grain.config());
		let export = model.path("export").map(|p| p.steps.len());
		assert_eq!(export, Some(5));
		assert!(model.path("nope").is_none());
	}
}
