//! Declarative case-study data.

use super::geometry::GeometryOverride;

/// Stable node identifier, unique within a case study.
pub type NodeId = &'static str;
/// Name of a scenario path, e.g. `"export"`.
pub type PathName = &'static str;

/// Top-left corner of a node box in layout units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position {
	/// Horizontal offset.
	pub x: f64,
	/// Vertical offset, growing downward.
	pub y: f64,
}

impl Position {
	/// Position from raw coordinates.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

/// Size of a node's box in layout units. Every shipped case study uses 48x48.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Footprint {
	/// Box width.
	pub width: f64,
	/// Box height.
	pub height: f64,
}

impl Footprint {
	/// Equal width and height.
	pub const fn square(size: f64) -> Self {
		Self {
			width: size,
			height: size,
		}
	}
}

impl Default for Footprint {
	fn default() -> Self {
		Self::square(48.0)
	}
}

/// Direction of a KPI since the last reporting period.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
	/// Rising.
	Up,
	/// Falling.
	Down,
	/// Flat.
	Stable,
}

impl Trend {
	/// Arrow shown next to the KPI value.
	pub fn glyph(self) -> &'static str {
		match self {
			Trend::Up => "↑",
			Trend::Down => "↓",
			Trend::Stable => "→",
		}
	}
}

/// A labelled figure in a node's detail panel. Values are preformatted text.
#[derive(Clone, Copy, Debug)]
pub struct Kpi {
	/// Display name.
	pub name: &'static str,
	/// Display value, units included.
	pub value: &'static str,
	/// Optional trend arrow.
	pub trend: Option<Trend>,
}

impl Kpi {
	/// KPI with a trend arrow.
	pub const fn new(name: &'static str, value: &'static str, trend: Trend) -> Self {
		Self {
			name,
			value,
			trend: Some(trend),
		}
	}
}

/// Operational figures shown under a node's KPIs, when the stage reports them.
#[derive(Clone, Copy, Debug)]
pub struct NodeMetrics {
	/// Units processed per period.
	pub throughput: &'static str,
	/// Share of capacity in use.
	pub efficiency: &'static str,
	/// Quality score or grade.
	pub quality: &'static str,
	/// Unit cost.
	pub cost: &'static str,
}

/// One stage of a supply chain. Display fields are passed through untouched.
#[derive(Clone, Copy, Debug)]
pub struct SupplyNode {
	/// Identifier used by connections, paths and selection.
	pub id: NodeId,
	/// Icon name.
	pub icon: &'static str,
	/// Short label drawn under the box.
	pub label: &'static str,
	/// Fill tag in `from-<color> to-<color>` form.
	pub gradient: &'static str,
	/// Tooltip and detail panel text.
	pub description: &'static str,
	/// Authored layout position.
	pub position: Position,
	/// Detail panel figures.
	pub kpis: &'static [Kpi],
	/// Optional operational figures.
	pub metrics: Option<NodeMetrics>,
}

/// A directed flow between two stages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Connection {
	/// Upstream node.
	pub from: NodeId,
	/// Downstream node.
	pub to: NodeId,
}

impl Connection {
	/// Connection `from -> to`.
	pub const fn new(from: NodeId, to: NodeId) -> Self {
		Self { from, to }
	}
}

/// A named route through the graph, in narrative order.
#[derive(Clone, Copy, Debug)]
pub struct ScenarioPath {
	/// Key used by [`super::state::Action::SelectPath`].
	pub name: PathName,
	/// Legend button text.
	pub label: &'static str,
	/// Node ids in order; consecutive pairs are the path's connections.
	pub steps: &'static [NodeId],
}

/// Which selection axes drive connection emphasis for a case study.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HighlightMode {
	/// Selected path emphasizes its connections and dims off-path nodes.
	Path,
	/// Selected node emphasizes its incident connections.
	Node,
	/// Either axis emphasizes; only the path axis dims nodes.
	Both,
}

impl HighlightMode {
	/// Whether path selection drives emphasis.
	pub fn uses_path(self) -> bool {
		matches!(self, HighlightMode::Path | HighlightMode::Both)
	}

	/// Whether node selection drives emphasis.
	pub fn uses_node(self) -> bool {
		matches!(self, HighlightMode::Node | HighlightMode::Both)
	}
}

/// Everything needed to draw and interact with one sector's supply chain.
#[derive(Clone, Copy, Debug)]
pub struct CaseStudyConfig {
	/// Page and card title.
	pub title: &'static str,
	/// One-line summary for the selection card.
	pub description: &'static str,
	/// Size shared by every node box.
	pub footprint: Footprint,
	/// Nodes in declaration order; the first declaration of an id wins.
	pub nodes: &'static [SupplyNode],
	/// Directed connections.
	pub connections: &'static [Connection],
	/// Named scenario paths for the legend.
	pub paths: &'static [ScenarioPath],
	/// Selection axes that drive emphasis.
	pub highlight: HighlightMode,
	/// Per-connection routing overrides.
	pub geometry: &'static [GeometryOverride],
}
