use crate::usecase::event::AppEvent;
use serde_json::json;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// One NDJSON line per event, shaped by `AppEvent`'s own serde tagging.
fn app_event_to_json(ev: &AppEvent) -> serde_json::Value {
    serde_json::to_value(ev).unwrap_or_else(|e| {
        json!({"type":"serialize_failed","message":e.to_string()})
    })
}

pub fn spawn_ndjson_printer(mut rx: mpsc::Receiver<AppEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(ev) = rx.recv().await {
            let line = app_event_to_json(&ev);

            // NDJSON to stdout.
            println!("{line}");
        }
    })
}
