// Domain layer: pure, synchronous graph state and types
pub mod adjacency;
pub mod error;
pub mod graph;
pub mod model;
pub mod registry;
pub mod traits;
