// Infrastructure layer: file I/O, serde, eventing
pub mod edge_list;
pub mod event_ndjson;
pub mod snapshot_json;
