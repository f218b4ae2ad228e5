use std::collections::BTreeSet;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use jobscope_core::{RequestId, SearchRequest, SearchResult, Source, TimeFilter};

use crate::api::SearchApi;
use crate::types::{ApiError, DashboardSnapshot, DiscoveryAck, TimeRange};

enum Command {
    Search {
        request_id: RequestId,
        request: SearchRequest,
    },
    Discover {
        hashtags: Vec<String>,
        sources: BTreeSet<Source>,
        time_filter: TimeFilter,
    },
    ScheduleRefresh {
        delay: Duration,
    },
    Dashboard {
        time_range: TimeRange,
    },
}

/// Completions reported back to the driver. Staleness and dedup are not
/// decided here; the pure state machine owns both. The handle only
/// executes and reports.
#[derive(Debug)]
pub enum CoordinatorEvent {
    SearchCompleted {
        request_id: RequestId,
        result: Result<SearchResult, ApiError>,
    },
    DiscoveryCompleted {
        result: Result<DiscoveryAck, ApiError>,
    },
    DashboardCompleted {
        result: Result<DashboardSnapshot, ApiError>,
    },
    RefreshDue,
}

/// Bridge between the synchronous driver and the async API client: a
/// dedicated thread owns a tokio runtime, commands fan out as tasks and
/// completions come back over a channel in whatever order they finish.
pub struct CoordinatorHandle {
    cmd_tx: mpsc::Sender<Command>,
    event_rx: mpsc::Receiver<CoordinatorEvent>,
}

impl CoordinatorHandle {
    pub fn new(api: Arc<dyn SearchApi>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel::<Command>();
        let (event_tx, event_rx) = mpsc::channel::<CoordinatorEvent>();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(api.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn submit_search(&self, request_id: RequestId, request: SearchRequest) {
        let _ = self.cmd_tx.send(Command::Search {
            request_id,
            request,
        });
    }

    pub fn trigger_discovery(
        &self,
        hashtags: Vec<String>,
        sources: BTreeSet<Source>,
        time_filter: TimeFilter,
    ) {
        let _ = self.cmd_tx.send(Command::Discover {
            hashtags,
            sources,
            time_filter,
        });
    }

    pub fn schedule_refresh(&self, delay: Duration) {
        let _ = self.cmd_tx.send(Command::ScheduleRefresh { delay });
    }

    pub fn fetch_dashboard(&self, time_range: TimeRange) {
        let _ = self.cmd_tx.send(Command::Dashboard { time_range });
    }

    pub fn try_recv(&self) -> Option<CoordinatorEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<CoordinatorEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    api: &dyn SearchApi,
    command: Command,
    event_tx: mpsc::Sender<CoordinatorEvent>,
) {
    match command {
        Command::Search {
            request_id,
            request,
        } => {
            let result = api.search(&request).await;
            let _ = event_tx.send(CoordinatorEvent::SearchCompleted { request_id, result });
        }
        Command::Discover {
            hashtags,
            sources,
            time_filter,
        } => {
            let result = api.trigger_discovery(&hashtags, &sources, time_filter).await;
            let _ = event_tx.send(CoordinatorEvent::DiscoveryCompleted { result });
        }
        Command::ScheduleRefresh { delay } => {
            tokio::time::sleep(delay).await;
            let _ = event_tx.send(CoordinatorEvent::RefreshDue);
        }
        Command::Dashboard { time_range } => {
            let result = api.dashboard(time_range).await;
            let _ = event_tx.send(CoordinatorEvent::DashboardCompleted { result });
        }
    }
}
