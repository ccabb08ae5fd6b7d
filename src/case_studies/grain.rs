use crate::components::supply_chain::geometry::{GeometryOverride, GeometryStrategy};
use crate::components::supply_chain::types::{
	CaseStudyConfig, Connection, Footprint, HighlightMode, Kpi, NodeMetrics, Position,
	ScenarioPath, SupplyNode, Trend,
};

use Trend::{Down, Stable, Up};

pub static GRAIN: CaseStudyConfig = CaseStudyConfig {
	title: "Grain Supply Chain",
	description: "Wheat from Ukrainian farms through elevators to export, flour and feed",
	footprint: Footprint::square(48.0),
	nodes: &NODES,
	connections: &[
		Connection::new("farm", "logistics"),
		Connection::new("logistics", "elevator-sea"),
		Connection::new("logistics", "elevator-field"),
		Connection::new("elevator-sea", "ship"),
		Connection::new("ship", "foreign"),
		Connection::new("ship", "mills"),
		Connection::new("elevator-field", "mills"),
		Connection::new("foreign", "mills"),
		Connection::new("mills", "packaging"),
		Connection::new("packaging", "distribution"),
		Connection::new("distribution", "retailer"),
		Connection::new("retailer", "consumer"),
		Connection::new("mills", "feed-mills"),
		Connection::new("feed-mills", "livestock"),
	],
	paths: &[
		ScenarioPath {
			name: "export",
			label: "Export",
			steps: &["farm", "logistics", "elevator-sea", "ship", "foreign"],
		},
		ScenarioPath {
			name: "domestic",
			label: "Domestic",
			steps: &[
				"farm",
				"logistics",
				"elevator-field",
				"mills",
				"packaging",
				"distribution",
				"retailer",
				"consumer",
			],
		},
		ScenarioPath {
			name: "feed",
			label: "Feed",
			steps: &[
				"farm",
				"logistics",
				"elevator-field",
				"mills",
				"feed-mills",
				"livestock",
			],
		},
	],
	highlight: HighlightMode::Path,
	geometry: &[
		GeometryOverride::new("logistics", "elevator-sea", GeometryStrategy::ELBOW),
		GeometryOverride::new("logistics", "elevator-field", GeometryStrategy::ELBOW),
		GeometryOverride::new("foreign", "mills", GeometryStrategy::Straight),
		GeometryOverride::new("elevator-field", "mills", GeometryStrategy::ARC),
	],
};

static NODES: [SupplyNode; 13] = [
	SupplyNode {
		id: "farm",
		icon: "wheat",
		label: "Farm",
		gradient: "from-teal-500 to-teal-700",
		description: "Grain production from Ukrainian farms",
		position: Position::new(40.0, 200.0),
		kpis: &[
			Kpi::new("Production Volume", "450k tons", Down),
			Kpi::new("Yield Rate", "4.2 t/ha", Stable),
			Kpi::new("Quality Score", "92%", Up),
		],
		metrics: Some(NodeMetrics {
			throughput: "450,000 tons/year",
			efficiency: "87%",
			quality: "92%",
			cost: "€185/ton",
		}),
	},
	SupplyNode {
		id: "logistics",
		icon: "truck",
		label: "Logistics",
		gradient: "from-slate-400 to-slate-600",
		description: "Transportation from farm to elevators",
		position: Position::new(220.0, 200.0),
		kpis: &[
			Kpi::new("Transport Capacity", "425k tons", Down),
			Kpi::new("Delivery Time", "2.3 days", Up),
			Kpi::new("Fleet Utilization", "78%", Stable),
		],
		metrics: Some(NodeMetrics {
			throughput: "425,000 tons/year",
			efficiency: "78%",
			quality: "95%",
			cost: "€22/ton",
		}),
	},
	SupplyNode {
		id: "elevator-sea",
		icon: "building-2",
		label: "Grain Elevator (Sea)",
		gradient: "from-teal-500 to-teal-700",
		description: "Storage near Black Sea ports",
		position: Position::new(400.0, 100.0),
		kpis: &[
			Kpi::new("Storage Capacity", "380k tons", Stable),
			Kpi::new("Utilization", "72%", Down),
			Kpi::new("Drying Efficiency", "94%", Stable),
		],
		metrics: Some(NodeMetrics {
			throughput: "380,000 tons/year",
			efficiency: "72%",
			quality: "94%",
			cost: "€12/ton storage",
		}),
	},
	SupplyNode {
		id: "elevator-field",
		icon: "building-2",
		label: "Grain Elevator (Field)",
		gradient: "from-teal-500 to-teal-700",
		description: "Storage near production areas",
		position: Position::new(400.0, 300.0),
		kpis: &[
			Kpi::new("Storage Capacity", "185k tons", Stable),
			Kpi::new("Utilization", "89%", Up),
			Kpi::new("Quality Control", "96%", Stable),
		],
		metrics: Some(NodeMetrics {
			throughput: "185,000 tons/year",
			efficiency: "89%",
			quality: "96%",
			cost: "€10/ton storage",
		}),
	},
	SupplyNode {
		id: "ship",
		icon: "ship",
		label: "Shipping",
		gradient: "from-slate-400 to-slate-600",
		description: "Maritime transport",
		position: Position::new(580.0, 100.0),
		kpis: &[
			Kpi::new("Shipping Volume", "340k tons", Down),
			Kpi::new("Transit Time", "14 days avg", Up),
			Kpi::new("Port Delays", "3.5 days", Up),
		],
		metrics: Some(NodeMetrics {
			throughput: "340,000 tons/year",
			efficiency: "68%",
			quality: "93%",
			cost: "€35/ton freight",
		}),
	},
	SupplyNode {
		id: "foreign",
		icon: "factory",
		label: "Foreign Mills",
		gradient: "from-teal-500 to-emerald-600",
		description: "International processing",
		position: Position::new(760.0, 100.0),
		kpis: &[
			Kpi::new("Processing", "320k tons", Down),
			Kpi::new("Flour Output", "256k tons", Down),
			Kpi::new("Export Demand", "High", Stable),
		],
		metrics: Some(NodeMetrics {
			throughput: "320,000 tons/year",
			efficiency: "82%",
			quality: "94%",
			cost: "€45/ton milling",
		}),
	},
	SupplyNode {
		id: "mills",
		icon: "factory",
		label: "Mills (Flour)",
		gradient: "from-teal-500 to-emerald-600",
		description: "Grain processing to flour",
		position: Position::new(760.0, 300.0),
		kpis: &[
			Kpi::new("Processing Rate", "175k tons", Stable),
			Kpi::new("Flour Yield", "76%", Stable),
			Kpi::new("Quality Grade", "A", Up),
		],
		metrics: Some(NodeMetrics {
			throughput: "175,000 tons/year",
			efficiency: "91%",
			quality: "97%",
			cost: "€42/ton milling",
		}),
	},
	SupplyNode {
		id: "feed-mills",
		icon: "factory",
		label: "Feed Mills",
		gradient: "from-slate-400 to-slate-600",
		description: "Animal feed production",
		position: Position::new(940.0, 400.0),
		kpis: &[
			Kpi::new("Processing Rate", "95k tons", Stable),
			Kpi::new("Mix Quality", "94%", Up),
			Kpi::new("Feed Conversion", "1.8:1", Stable),
		],
		metrics: Some(NodeMetrics {
			throughput: "95,000 tons/year",
			efficiency: "91%",
			quality: "96%",
			cost: "€38/ton processing",
		}),
	},
	SupplyNode {
		id: "livestock",
		icon: "users",
		label: "Livestock Farms",
		gradient: "from-slate-500 to-slate-700",
		description: "Animal agriculture",
		position: Position::new(1120.0, 400.0),
		kpis: &[
			Kpi::new("Feed Consumption", "92k tons", Stable),
			Kpi::new("Animal Growth", "+12% avg", Up),
			Kpi::new("Feed Efficiency", "2.8:1", Stable),
		],
		metrics: Some(NodeMetrics {
			throughput: "92,000 tons/year",
			efficiency: "88%",
			quality: "94%",
			cost: "€240/ton livestock",
		}),
	},
	SupplyNode {
		id: "packaging",
		icon: "package",
		label: "Packaging",
		gradient: "from-teal-500 to-teal-700",
		description: "Consumer packaging",
		position: Position::new(940.0, 300.0),
		kpis: &[
			Kpi::new("Packaging Speed", "850 units/hr", Stable),
			Kpi::new("Material Cost", "€0.18/unit", Up),
			Kpi::new("Line Efficiency", "89%", Stable),
		],
		metrics: Some(NodeMetrics {
			throughput: "165,000 tons/year",
			efficiency: "89%",
			quality: "96%",
			cost: "€8/ton packaging",
		}),
	},
	SupplyNode {
		id: "distribution",
		icon: "truck",
		label: "Distribution",
		gradient: "from-slate-400 to-slate-600",
		description: "Distribution logistics",
		position: Position::new(1120.0, 300.0),
		kpis: &[
			Kpi::new("Delivery Coverage", "450 outlets", Up),
			Kpi::new("On-Time Rate", "92%", Stable),
			Kpi::new("Fuel Efficiency", "8.2 L/100km", Down),
		],
		metrics: Some(NodeMetrics {
			throughput: "160,000 tons/year",
			efficiency: "92%",
			quality: "97%",
			cost: "€15/ton distribution",
		}),
	},
	SupplyNode {
		id: "retailer",
		icon: "building-2",
		label: "Retailer/Wholesaler",
		gradient: "from-teal-500 to-emerald-600",
		description: "Retail distribution",
		position: Position::new(1300.0, 300.0),
		kpis: &[
			Kpi::new("Sales Volume", "155k tons", Stable),
			Kpi::new("Shelf Turnover", "12x/year", Up),
			Kpi::new("Stock Accuracy", "96%", Stable),
		],
		metrics: Some(NodeMetrics {
			throughput: "155,000 tons/year",
			efficiency: "94%",
			quality: "95%",
			cost: "€8/ton handling",
		}),
	},
	SupplyNode {
		id: "consumer",
		icon: "users",
		label: "End Consumer",
		gradient: "from-slate-500 to-slate-700",
		description: "Consumer market",
		position: Position::new(1480.0, 300.0),
		kpis: &[
			Kpi::new("Consumption", "150k tons", Stable),
			Kpi::new("Price Index", "€2.45/kg", Up),
			Kpi::new("Satisfaction", "87%", Stable),
		],
		metrics: Some(NodeMetrics {
			throughput: "150,000 tons/year",
			efficiency: "97%",
			quality: "93%",
			cost: "€2.45/kg avg",
		}),
	},
];
