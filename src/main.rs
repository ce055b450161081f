//! Binary entrypoint.
//!
//! The crate is split into layers:
//! - domain: pure, synchronous graph state and errors
//! - usecase: algorithms, query orchestration + progress events
//! - infrastructure: edge-list files, JSON snapshots, NDJSON events
//! - interface: CLI wiring

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    weighted_graph_engine::interface::cli::run().await
}
