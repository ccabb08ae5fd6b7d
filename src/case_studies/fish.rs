use crate::components::supply_chain::geometry::{GeometryOverride, GeometryStrategy};
use crate::components::supply_chain::types::{
	CaseStudyConfig, Connection, Footprint, HighlightMode, Kpi, NodeMetrics, Position,
	ScenarioPath, SupplyNode, Trend,
};

use Trend::{Down, Stable, Up};

pub static FISH: CaseStudyConfig = CaseStudyConfig {
	title: "Aquaculture Fish Supply Chain",
	description: "Farmed fish from imported fingerlings to retail and restaurant consumers",
	footprint: Footprint::square(48.0),
	nodes: &NODES,
	connections: &[
		Connection::new("fingerlings", "transport1"),
		Connection::new("transport1", "aquaculture"),
		Connection::new("aquaculture", "primary-processing"),
		Connection::new("primary-processing", "transport2"),
		Connection::new("transport2", "retail"),
		Connection::new("retail", "consumers1"),
		Connection::new("aquaculture", "secondary-processing"),
		Connection::new("secondary-processing", "bigh"),
		Connection::new("bigh", "restaurant"),
		Connection::new("restaurant", "consumers2"),
	],
	paths: &[
		ScenarioPath {
			name: "export",
			label: "Export",
			steps: &[
				"fingerlings",
				"transport1",
				"aquaculture",
				"secondary-processing",
				"bigh",
				"restaurant",
				"consumers2",
			],
		},
		ScenarioPath {
			name: "domestic",
			label: "Domestic",
			steps: &[
				"fingerlings",
				"transport1",
				"aquaculture",
				"primary-processing",
				"transport2",
				"retail",
				"consumers1",
			],
		},
	],
	highlight: HighlightMode::Path,
	// first branch off the main chain
	geometry: &[GeometryOverride::new(
		"aquaculture",
		"secondary-processing",
		GeometryStrategy::CubicBezier,
	)],
};

static NODES: [SupplyNode; 11] = [
	SupplyNode {
		id: "fingerlings",
		icon: "fish",
		label: "France Fingerlings",
		gradient: "from-teal-500 to-teal-700",
		description: "Juvenile fish imported from France for farming",
		position: Position::new(50.0, 200.0),
		kpis: &[
			Kpi::new("Supply Volume", "2.5M units", Stable),
			Kpi::new("Survival Rate", "94%", Up),
			Kpi::new("Import Cost", "€0.85/unit", Up),
		],
		metrics: Some(NodeMetrics {
			throughput: "2.5M units/year",
			efficiency: "94%",
			quality: "96%",
			cost: "€0.85/unit",
		}),
	},
	SupplyNode {
		id: "transport1",
		icon: "truck",
		label: "Transport",
		gradient: "from-slate-400 to-slate-600",
		description: "Transportation of fingerlings to farms",
		position: Position::new(220.0, 200.0),
		kpis: &[
			Kpi::new("Transit Time", "6 hours", Stable),
			Kpi::new("Survival Rate", "98%", Up),
			Kpi::new("Cost per Unit", "€0.12", Stable),
		],
		metrics: Some(NodeMetrics {
			throughput: "2.45M units/year",
			efficiency: "98%",
			quality: "97%",
			cost: "€0.12/unit",
		}),
	},
	SupplyNode {
		id: "aquaculture",
		icon: "waves",
		label: "Aquaculture Farming",
		gradient: "from-teal-500 to-teal-700",
		description: "Fish farming operations",
		position: Position::new(390.0, 200.0),
		kpis: &[
			Kpi::new("Production", "850 tons", Up),
			Kpi::new("Water Quality", "7.8 pH", Stable),
			Kpi::new("Feed Conversion", "1.2:1", Up),
		],
		metrics: Some(NodeMetrics {
			throughput: "850 tons/year",
			efficiency: "89%",
			quality: "94%",
			cost: "€4.20/kg",
		}),
	},
	SupplyNode {
		id: "primary-processing",
		icon: "factory",
		label: "Primary Processing",
		gradient: "from-teal-500 to-emerald-600",
		description: "Whole gutted and filleted fish processing",
		position: Position::new(580.0, 200.0),
		kpis: &[
			Kpi::new("Processing Rate", "450 kg/hr", Stable),
			Kpi::new("Yield Rate", "68%", Up),
			Kpi::new("Quality Score", "96%", Stable),
		],
		metrics: Some(NodeMetrics {
			throughput: "578 tons/year",
			efficiency: "85%",
			quality: "96%",
			cost: "€1.80/kg",
		}),
	},
	SupplyNode {
		id: "transport2",
		icon: "truck",
		label: "Transport",
		gradient: "from-slate-400 to-slate-600",
		description: "Distribution to retail",
		position: Position::new(770.0, 200.0),
		kpis: &[
			Kpi::new("Delivery Time", "4 hours", Stable),
			Kpi::new("Temperature", "2-4°C", Stable),
			Kpi::new("On-Time Rate", "94%", Up),
		],
		metrics: Some(NodeMetrics {
			throughput: "400 tons/year",
			efficiency: "94%",
			quality: "95%",
			cost: "€0.45/kg",
		}),
	},
	SupplyNode {
		id: "retail",
		icon: "store",
		label: "Retail",
		gradient: "from-teal-500 to-emerald-600",
		description: "Retail stores and markets",
		position: Position::new(960.0, 200.0),
		kpis: &[
			Kpi::new("Sales Volume", "385 tons", Stable),
			Kpi::new("Freshness Score", "93%", Up),
			Kpi::new("Waste Rate", "3.8%", Down),
		],
		metrics: Some(NodeMetrics {
			throughput: "385 tons/year",
			efficiency: "96%",
			quality: "93%",
			cost: "€12.50/kg retail",
		}),
	},
	SupplyNode {
		id: "consumers1",
		icon: "users",
		label: "Consumers",
		gradient: "from-slate-500 to-slate-700",
		description: "End consumers",
		position: Position::new(1150.0, 200.0),
		kpis: &[
			Kpi::new("Consumption", "380 tons", Stable),
			Kpi::new("Satisfaction", "88%", Up),
			Kpi::new("Repeat Purchase", "72%", Up),
		],
		metrics: Some(NodeMetrics {
			throughput: "380 tons/year",
			efficiency: "99%",
			quality: "91%",
			cost: "€12.50/kg avg",
		}),
	},
	SupplyNode {
		id: "secondary-processing",
		icon: "factory",
		label: "Secondary Processing",
		gradient: "from-teal-500 to-emerald-600",
		description: "Smoked fillets production",
		position: Position::new(580.0, 60.0),
		kpis: &[
			Kpi::new("Processing Rate", "85 kg/hr", Stable),
			Kpi::new("Quality Score", "97%", Up),
			Kpi::new("Smoke Time", "6 hours", Stable),
		],
		metrics: Some(NodeMetrics {
			throughput: "178 tons/year",
			efficiency: "88%",
			quality: "97%",
			cost: "€3.20/kg",
		}),
	},
	SupplyNode {
		id: "bigh",
		icon: "building-2",
		label: "BIGH",
		gradient: "from-teal-500 to-teal-700",
		description: "BIGH distribution hub",
		position: Position::new(770.0, 60.0),
		kpis: &[
			Kpi::new("Distribution Vol", "172 tons", Stable),
			Kpi::new("Hub Efficiency", "97%", Up),
			Kpi::new("Delivery Speed", "2 hours", Up),
		],
		metrics: Some(NodeMetrics {
			throughput: "172 tons/year",
			efficiency: "97%",
			quality: "96%",
			cost: "€0.65/kg",
		}),
	},
	SupplyNode {
		id: "restaurant",
		icon: "store",
		label: "Restaurant",
		gradient: "from-teal-500 to-emerald-600",
		description: "Food service establishments",
		position: Position::new(960.0, 60.0),
		kpis: &[
			Kpi::new("Orders Volume", "168 tons", Up),
			Kpi::new("Quality Rating", "4.6/5", Up),
			Kpi::new("Menu Presence", "145 items", Stable),
		],
		metrics: Some(NodeMetrics {
			throughput: "168 tons/year",
			efficiency: "98%",
			quality: "95%",
			cost: "€18.50/kg",
		}),
	},
	SupplyNode {
		id: "consumers2",
		icon: "users",
		label: "Consumers",
		gradient: "from-slate-500 to-slate-700",
		description: "Restaurant diners",
		position: Position::new(1150.0, 60.0),
		kpis: &[
			Kpi::new("Diners Served", "165 tons", Up),
			Kpi::new("Satisfaction", "92%", Up),
			Kpi::new("Return Rate", "68%", Stable),
		],
		metrics: Some(NodeMetrics {
			throughput: "165 tons/year",
			efficiency: "98%",
			quality: "93%",
			cost: "€25/portion avg",
		}),
	},
];
