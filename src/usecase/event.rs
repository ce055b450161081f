use crate::usecase::query::QueryOutcome;
use crate::usecase::stats::GraphStats;
use serde::Serialize;
use tokio::sync::mpsc;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppEvent {
    PhaseStarted {
        name: String,
    },
    PhaseFinished {
        name: String,
    },

    GraphLoaded {
        stats: GraphStats,
    },

    /// Loading stopped at a malformed edge line; earlier edges were kept.
    ParseStopped {
        line: usize,
        reason: String,
    },

    /// A recoverable rejection: duplicate edge, missing vertex, negative cycle...
    Rejected {
        operation: String,
        kind: String,
        message: String,
    },

    QueryAnswered {
        operation: String,
        outcome: QueryOutcome,
    },

    Finished {
        stats: GraphStats,
    },
}

pub(crate) async fn emit(sink: &Option<mpsc::Sender<AppEvent>>, ev: AppEvent) {
    if let Some(tx) = sink {
        let _ = tx.send(ev).await;
    }
}
