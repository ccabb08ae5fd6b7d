//! Static declarations for each sector's supply chain.

mod fish;
mod fruits;
mod grain;

use crate::components::supply_chain::CaseStudyConfig;

/// A sector with a dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaseStudy {
	/// Wheat from field to export and domestic mills.
	Grain,
	/// Apples from orchard to retail.
	Fruits,
	/// Farmed fish from fingerlings to consumers.
	Fish,
}

/// A sector shown on the selection page with no dashboard yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UpcomingSector {
	/// Card title.
	pub title: &'static str,
	/// Icon name.
	pub icon: &'static str,
	/// Icon tint.
	pub icon_color: &'static str,
}

/// Sectors listed as disabled cards after the active ones.
pub const UPCOMING: [UpcomingSector; 2] = [
	UpcomingSector {
		title: "Aquaculture",
		icon: "droplet",
		icon_color: "#3d8b8a",
	},
	UpcomingSector {
		title: "Dairy",
		icon: "milk",
		icon_color: "#4a7c7a",
	},
];

impl CaseStudy {
	/// Every sector with a dashboard, in menu order.
	pub const ALL: [CaseStudy; 3] = [CaseStudy::Grain, CaseStudy::Fruits, CaseStudy::Fish];

	/// Static declaration for this sector.
	pub fn config(self) -> &'static CaseStudyConfig {
		match self {
			CaseStudy::Grain => &grain::GRAIN,
			CaseStudy::Fruits => &fruits::FRUITS,
			CaseStudy::Fish => &fish::FISH,
		}
	}

	/// Router path of the sector's dashboard.
	pub fn route(self) -> &'static str {
		match self {
			CaseStudy::Grain => "/grain",
			CaseStudy::Fruits => "/fruits",
			CaseStudy::Fish => "/fish",
		}
	}

	/// Icon name for the selection card.
	pub fn icon(self) -> &'static str {
		match self {
			CaseStudy::Grain => "wheat",
			CaseStudy::Fruits => "apple",
			CaseStudy::Fish => "fish",
		}
	}

	/// Icon tint for the selection card.
	pub fn icon_color(self) -> &'static str {
		match self {
			CaseStudy::Grain => "#3d7c7a",
			CaseStudy::Fruits => "#2d8b89",
			CaseStudy::Fish => "#2d6b6a",
		}
	}
}
