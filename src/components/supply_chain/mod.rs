//! Supply-chain graph view: model, selection reducer, highlighting and connector geometry.

mod component;
pub mod error;
pub mod geometry;
pub mod highlight;
pub mod model;
pub mod render;
pub mod state;
pub mod types;

pub use component::SupplyChainGraph;
pub use error::ModelError;
pub use model::GraphModel;
pub use state::{Action, SelectionState};
pub use types::{CaseStudyConfig, Connection, HighlightMode, NodeId, PathName, SupplyNode};
