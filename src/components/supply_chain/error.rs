//! Authoring defects found when a case study is loaded.

use super::types::{NodeId, PathName};

/// Authoring defects in a case-study declaration.
///
/// None of these stop a graph from rendering: unresolved ids are skipped at
/// draw time and simply never match a selection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
	/// Two nodes share an id.
	#[error("node `{id}` is declared more than once")]
	DuplicateNode {
		/// Repeated id.
		id: NodeId,
	},

	/// A connection endpoint is not a declared node.
	#[error("connection {from} -> {to} references undeclared node `{missing}`")]
	DanglingConnection {
		/// Connection source.
		from: NodeId,
		/// Connection target.
		to: NodeId,
		/// The endpoint that failed to resolve.
		missing: NodeId,
	},

	/// A path step is not a declared node.
	#[error("path `{path}` names undeclared node `{id}`")]
	UnknownPathNode {
		/// Offending path.
		path: PathName,
		/// Unresolved step.
		id: NodeId,
	},

	/// Two consecutive path steps have no connection between them.
	#[error("path `{path}` steps {from} -> {to} without a matching connection")]
	BrokenPathStep {
		/// Offending path.
		path: PathName,
		/// Earlier step.
		from: NodeId,
		/// Later step.
		to: NodeId,
	},

	/// A routing override names a connection that does not exist.
	#[error("geometry override {from} -> {to} does not match any connection")]
	DanglingGeometryOverride {
		/// Override source.
		from: NodeId,
		/// Override target.
		to: NodeId,
	},
}
