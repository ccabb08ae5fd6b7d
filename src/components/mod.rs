//! Reusable view components.

pub mod supply_chain;
