//! Weighted graph analysis engine.
//!
//! Layered the same way as the binary:
//! - domain: graph aggregate, vertex registry, adjacency store, error and result types
//! - usecase: graph algorithms plus the query/validation workflows that report events
//! - infrastructure: edge-list file format, JSON snapshot, NDJSON event printer
//! - interface: CLI wiring

pub mod domain;
pub mod infrastructure;
pub mod interface;
pub mod usecase;
