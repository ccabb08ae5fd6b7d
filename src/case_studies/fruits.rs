use crate::components::supply_chain::types::{
	CaseStudyConfig, Connection, Footprint, HighlightMode, Kpi, NodeMetrics, Position,
	SupplyNode, Trend,
};

use Trend::{Down, Stable, Up};

/// A single linear chain; emphasis follows the clicked node rather than a route.
pub static FRUITS: CaseStudyConfig = CaseStudyConfig {
	title: "Fresh Fruits Supply Chain",
	description: "Fresh produce from Portuguese farms through processing and cold chain to retail",
	footprint: Footprint::square(48.0),
	nodes: &NODES,
	connections: &[
		Connection::new("farm", "bulk-transport"),
		Connection::new("bulk-transport", "processing"),
		Connection::new("processing", "packaging"),
		Connection::new("packaging", "wholesale"),
		Connection::new("wholesale", "logistics"),
		Connection::new("logistics", "retailer"),
		Connection::new("retailer", "consumers"),
	],
	paths: &[],
	highlight: HighlightMode::Node,
	geometry: &[],
};

static NODES: [SupplyNode; 8] = [
	SupplyNode {
		id: "farm",
		icon: "apple",
		label: "Farm",
		gradient: "from-teal-600 to-teal-800",
		description: "Fresh produce from Portuguese farms",
		position: Position::new(50.0, 180.0),
		kpis: &[
			Kpi::new("Production Volume", "45k tons", Stable),
			Kpi::new("Crop Yield", "18 t/ha", Up),
			Kpi::new("Quality Grade", "A+", Stable),
		],
		metrics: Some(NodeMetrics {
			throughput: "45,000 tons/year",
			efficiency: "92%",
			quality: "96%",
			cost: "€0.85/kg",
		}),
	},
	SupplyNode {
		id: "bulk-transport",
		icon: "truck",
		label: "Bulk Transport",
		gradient: "from-teal-400 to-teal-600",
		description: "Transportation from farms to processing",
		position: Position::new(200.0, 180.0),
		kpis: &[
			Kpi::new("Transit Time", "3.2 hours", Down),
			Kpi::new("Capacity Util", "88%", Up),
			Kpi::new("On-Time Rate", "94%", Stable),
		],
		metrics: Some(NodeMetrics {
			throughput: "43,200 tons/year",
			efficiency: "88%",
			quality: "95%",
			cost: "€0.12/kg",
		}),
	},
	SupplyNode {
		id: "processing",
		icon: "package",
		label: "Processing",
		gradient: "from-slate-400 to-slate-600",
		description: "Washing, sorting, and quality control",
		position: Position::new(350.0, 180.0),
		kpis: &[
			Kpi::new("Processing Rate", "280 kg/min", Up),
			Kpi::new("Quality Pass", "97%", Up),
			Kpi::new("Waste Rate", "4.2%", Down),
		],
		metrics: Some(NodeMetrics {
			throughput: "41,400 tons/year",
			efficiency: "95%",
			quality: "97%",
			cost: "€0.18/kg",
		}),
	},
	SupplyNode {
		id: "packaging",
		icon: "factory",
		label: "Packaging",
		gradient: "from-teal-500 to-emerald-600",
		description: "Consumer-ready packaging",
		position: Position::new(500.0, 180.0),
		kpis: &[
			Kpi::new("Pack Speed", "650 units/hr", Stable),
			Kpi::new("Material Cost", "€0.15/unit", Up),
			Kpi::new("Line Efficiency", "91%", Stable),
		],
		metrics: Some(NodeMetrics {
			throughput: "39,700 tons/year",
			efficiency: "91%",
			quality: "98%",
			cost: "€0.22/kg",
		}),
	},
	SupplyNode {
		id: "wholesale",
		icon: "warehouse",
		label: "Wholesale",
		gradient: "from-slate-400 to-slate-600",
		description: "Wholesale distribution centers",
		position: Position::new(650.0, 180.0),
		kpis: &[
			Kpi::new("Storage Volume", "38k tons", Stable),
			Kpi::new("Turnover Rate", "8.5x/year", Up),
			Kpi::new("Temp Control", "3.1°C avg", Stable),
		],
		metrics: Some(NodeMetrics {
			throughput: "38,000 tons/year",
			efficiency: "89%",
			quality: "96%",
			cost: "€0.08/kg storage",
		}),
	},
	SupplyNode {
		id: "logistics",
		icon: "truck",
		label: "Logistics",
		gradient: "from-teal-400 to-teal-600",
		description: "Cold chain distribution",
		position: Position::new(800.0, 180.0),
		kpis: &[
			Kpi::new("Delivery Time", "8.4 hours", Down),
			Kpi::new("Cold Chain", "99.2%", Up),
			Kpi::new("Fuel Efficiency", "7.8 L/100km", Down),
		],
		metrics: Some(NodeMetrics {
			throughput: "36,500 tons/year",
			efficiency: "93%",
			quality: "97%",
			cost: "€0.16/kg",
		}),
	},
	SupplyNode {
		id: "retailer",
		icon: "store",
		label: "Retailer",
		gradient: "from-teal-500 to-emerald-600",
		description: "Supermarkets and retail stores",
		position: Position::new(950.0, 180.0),
		kpis: &[
			Kpi::new("Sales Volume", "35k tons", Stable),
			Kpi::new("Shelf Life", "6.8 days avg", Up),
			Kpi::new("Waste Rate", "3.9%", Down),
		],
		metrics: Some(NodeMetrics {
			throughput: "35,000 tons/year",
			efficiency: "95%",
			quality: "94%",
			cost: "€2.85/kg retail",
		}),
	},
	SupplyNode {
		id: "consumers",
		icon: "users",
		label: "Consumers",
		gradient: "from-slate-500 to-slate-700",
		description: "End consumers",
		position: Position::new(1100.0, 180.0),
		kpis: &[
			Kpi::new("Consumption", "34k tons", Stable),
			Kpi::new("Satisfaction", "89%", Up),
			Kpi::new("Price Index", "€2.85/kg", Up),
		],
		metrics: Some(NodeMetrics {
			throughput: "34,000 tons/year",
			efficiency: "97%",
			quality: "93%",
			cost: "€2.85/kg avg",
		}),
	},
];
