//! Selection and zoom state, updated by a pure reducer.

use log::debug;

use super::types::{NodeId, PathName};

/// Smallest zoom, in tenths.
pub const ZOOM_MIN_TENTHS: u8 = 5;
/// Largest zoom, in tenths.
pub const ZOOM_MAX_TENTHS: u8 = 15;
/// Zoom on load and after a reset.
pub const ZOOM_DEFAULT_TENTHS: u8 = 10;

/// A user interaction against one graph view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
	/// Toggle: selecting the current path clears it. `None` always clears.
	SelectPath(Option<PathName>),
	/// Same toggle semantics as [`Action::SelectPath`].
	SelectNode(Option<NodeId>),
	/// Unconditional; hover follows the pointer.
	HoverNode(Option<NodeId>),
	/// One tenth up, clamped.
	ZoomIn,
	/// One tenth down, clamped.
	ZoomOut,
	/// Back to 100%.
	ResetZoom,
}

/// Transient selection state for one case-study view.
///
/// Zoom is held as whole tenths so repeated steps land exactly on the bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionState {
	/// Node under the pointer.
	pub hovered_node: Option<NodeId>,
	/// Node whose detail panel is open.
	pub selected_node: Option<NodeId>,
	/// Active scenario path.
	pub selected_path: Option<PathName>,
	zoom_tenths: u8,
}

impl Default for SelectionState {
	fn default() -> Self {
		Self {
			hovered_node: None,
			selected_node: None,
			selected_path: None,
			zoom_tenths: ZOOM_DEFAULT_TENTHS,
		}
	}
}

fn toggle<T: PartialEq>(current: Option<T>, requested: Option<T>) -> Option<T> {
	match requested {
		Some(v) if current.as_ref() == Some(&v) => None,
		other => other,
	}
}

impl SelectionState {
	/// Scale factor, 0.5 to 1.5.
	pub fn zoom(&self) -> f64 {
		f64::from(self.zoom_tenths) / 10.0
	}

	/// Zoom as a whole percentage.
	pub fn zoom_percent(&self) -> u32 {
		u32::from(self.zoom_tenths) * 10
	}

	/// State after applying `action`.
	pub fn reduce(self, action: Action) -> Self {
		let next = match action {
			Action::SelectPath(path) => Self {
				selected_path: toggle(self.selected_path, path),
				..self
			},
			Action::SelectNode(node) => Self {
				selected_node: toggle(self.selected_node, node),
				..self
			},
			Action::HoverNode(node) => Self {
				hovered_node: node,
				..self
			},
			Action::ZoomIn => Self {
				zoom_tenths: (self.zoom_tenths + 1).min(ZOOM_MAX_TENTHS),
				..self
			},
			Action::ZoomOut => Self {
				zoom_tenths: self.zoom_tenths.saturating_sub(1).max(ZOOM_MIN_TENTHS),
				..self
			},
			Action::ResetZoom => Self {
				zoom_tenths: ZOOM_DEFAULT_TENTHS,
				..self
			},
		};
		debug!("{:?}: {:?} -> {:?}", action, self, next);
		next
	}
}
