//! Usecase layer: graph algorithms plus query/validation workflows and events.

pub mod connectivity;
pub mod event;
pub mod max_flow;
pub mod mst;
pub mod paths;
pub mod query;
pub mod stats;
pub mod traversal;
pub mod validate;
